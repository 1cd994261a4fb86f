//! Dashboard session: selections, chart bindings and report assembly
//!
//! The session owns the loaded records, the current selection of every
//! section and the [`ChartRegistry`]. Each [`SelectionEvent`] recomputes only
//! the views that depend on the changed control, run to completion.

use crate::app::models::{AddendumRecord, DatasetKind, InStateRecord, Month, RoadwayRecord};
use crate::app::services::aggregation::{MonthlySelection, addendum, distinct_years, instate, roadway};
use crate::app::services::csv_parser::ParseStats;
use crate::app::services::loader::LoadedDatasets;
use crate::app::services::presentation::cards::{
    AddendumGlobalCards, AddendumMonthCards, InStateCards, RoadwayGlobalCards, RoadwayMonthCards,
};
use crate::app::services::presentation::charts::{self, ChartData, ChartId};
use crate::app::services::presentation::{BindOutcome, ChartRegistry};
use crate::config::DashboardConfig;
use crate::{Error, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use tracing::{debug, info};

/// Charts touched by one recomputation
pub type ChartUpdates = Vec<(ChartId, BindOutcome)>;

/// Records of the three datasets plus the statistics gathered while loading
#[derive(Debug, Clone, Default)]
pub struct DashboardData {
    pub roadway: Vec<RoadwayRecord>,
    pub instate: Vec<InStateRecord>,
    pub addendum: Vec<AddendumRecord>,
    pub parse_stats: Vec<ParseStats>,
}

impl DashboardData {
    pub fn roadway_years(&self) -> Vec<i32> {
        distinct_years(self.roadway.iter().map(|r| r.year))
    }

    pub fn instate_years(&self) -> Vec<i32> {
        distinct_years(self.instate.iter().map(|r| r.year))
    }

    pub fn addendum_years(&self) -> Vec<i32> {
        distinct_years(self.addendum.iter().map(|r| r.year))
    }
}

impl From<LoadedDatasets> for DashboardData {
    fn from(loaded: LoadedDatasets) -> Self {
        let parse_stats = loaded.stats().into_iter().cloned().collect();
        Self {
            roadway: loaded.roadway.records,
            instate: loaded.instate.records,
            addendum: loaded.addendum.records,
            parse_stats,
        }
    }
}

/// Current control values; `None` marks a disabled section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Selection {
    pub roadway: Option<MonthlySelection>,
    pub instate_year: Option<i32>,
    pub addendum: Option<MonthlySelection>,
}

impl Selection {
    /// Latest year, earliest comparison year and January for every enabled section
    pub fn defaults_for(data: &DashboardData) -> Self {
        Self {
            roadway: MonthlySelection::default_for(&data.roadway_years()),
            instate_year: data.instate_years().last().copied(),
            addendum: MonthlySelection::default_for(&data.addendum_years()),
        }
    }
}

/// A change to one dashboard control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionEvent {
    RoadwayYear(i32),
    RoadwayMonth(Month),
    RoadwayCompareYear(i32),
    InStateYear(i32),
    AddendumYear(i32),
    AddendumMonth(Month),
    AddendumCompareYear(i32),
}

impl SelectionEvent {
    /// Dashboard section the control belongs to
    pub fn dataset(&self) -> DatasetKind {
        match self {
            Self::RoadwayYear(_) | Self::RoadwayMonth(_) | Self::RoadwayCompareYear(_) => {
                DatasetKind::Roadway
            }
            Self::InStateYear(_) => DatasetKind::InState,
            Self::AddendumYear(_) | Self::AddendumMonth(_) | Self::AddendumCompareYear(_) => {
                DatasetKind::Addendum
            }
        }
    }
}

fn parse_year(value: &str) -> Result<i32> {
    value
        .parse::<i32>()
        .map_err(|_| Error::configuration(format!("Invalid year '{}'", value)))
}

impl FromStr for SelectionEvent {
    type Err = Error;

    /// Parse `"<control> <value>"`, e.g. `"roadway.month March"`
    fn from_str(s: &str) -> Result<Self> {
        let mut parts = s.split_whitespace();
        let (Some(control), Some(value), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(Error::configuration(format!(
                "Expected '<control> <value>', got '{}'",
                s.trim()
            )));
        };

        match control {
            "roadway.year" => Ok(Self::RoadwayYear(parse_year(value)?)),
            "roadway.month" => Ok(Self::RoadwayMonth(value.parse()?)),
            "roadway.compare" => Ok(Self::RoadwayCompareYear(parse_year(value)?)),
            "instate.year" => Ok(Self::InStateYear(parse_year(value)?)),
            "addendum.year" => Ok(Self::AddendumYear(parse_year(value)?)),
            "addendum.month" => Ok(Self::AddendumMonth(value.parse()?)),
            "addendum.compare" => Ok(Self::AddendumCompareYear(parse_year(value)?)),
            other => Err(Error::configuration(format!(
                "Unknown control '{}': expected roadway.year, roadway.month, roadway.compare, \
                 instate.year, addendum.year, addendum.month or addendum.compare",
                other
            ))),
        }
    }
}

impl fmt::Display for SelectionEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RoadwayYear(y) => write!(f, "roadway.year {}", y),
            Self::RoadwayMonth(m) => write!(f, "roadway.month {}", m),
            Self::RoadwayCompareYear(y) => write!(f, "roadway.compare {}", y),
            Self::InStateYear(y) => write!(f, "instate.year {}", y),
            Self::AddendumYear(y) => write!(f, "addendum.year {}", y),
            Self::AddendumMonth(m) => write!(f, "addendum.month {}", m),
            Self::AddendumCompareYear(y) => write!(f, "addendum.compare {}", y),
        }
    }
}

/// Roadway section of a report
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadwaySection {
    pub available_years: Vec<i32>,
    pub selection: MonthlySelection,
    pub summary: RoadwayGlobalCards,
    pub month: RoadwayMonthCards,
}

/// Contracting section of a report
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InStateSection {
    pub available_years: Vec<i32>,
    pub year: i32,
    pub cards: InStateCards,
}

/// Addendum section of a report
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddendumSection {
    pub available_years: Vec<i32>,
    pub selection: MonthlySelection,
    pub summary: AddendumGlobalCards,
    pub month: AddendumMonthCards,
}

/// Everything the dashboard shows for the current selection
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardReport {
    pub generated_at: DateTime<Utc>,
    pub agency_name: String,
    pub datasets: Vec<ParseStats>,
    pub roadway: Option<RoadwaySection>,
    pub instate: Option<InStateSection>,
    pub addendum: Option<AddendumSection>,
    pub charts: BTreeMap<ChartId, ChartData>,
}

/// Interactive state over loaded dashboard data
#[derive(Debug)]
pub struct DashboardSession {
    data: DashboardData,
    config: DashboardConfig,
    selection: Selection,
    charts: ChartRegistry,
}

impl DashboardSession {
    /// Create a session with default selections; no charts are bound yet
    pub fn new(data: DashboardData, config: DashboardConfig) -> Self {
        let selection = Selection::defaults_for(&data);
        Self {
            data,
            config,
            selection,
            charts: ChartRegistry::new(),
        }
    }

    pub fn data(&self) -> &DashboardData {
        &self.data
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn charts(&self) -> &ChartRegistry {
        &self.charts
    }

    /// Bind every chart of every enabled section
    pub fn initialize(&mut self) -> ChartUpdates {
        let mut updates = Vec::new();

        if self.selection.roadway.is_some() {
            let totals = roadway::totals_by_year(&self.data.roadway);
            let composition = roadway::composition_by_year(&self.data.roadway);
            updates.push(self.bind(ChartId::RoadwayTotalsByYear, charts::roadway_totals_chart(&totals)));
            updates.push(self.bind(
                ChartId::RoadwayCompositionByYear,
                charts::roadway_composition_chart(&composition),
            ));
            updates.extend(self.refresh_roadway_year());
        }

        if self.selection.instate_year.is_some() {
            let series = instate::yearly_series(&self.data.instate);
            updates.push(self.bind(ChartId::InStateAmounts, charts::instate_amounts_chart(&series)));
            updates.push(self.bind(ChartId::InStateShares, charts::instate_shares_chart(&series)));
        }

        if self.selection.addendum.is_some() {
            let timeline = addendum::all_years_timeline(&self.data.addendum);
            updates.push(self.bind(
                ChartId::AddendumAllYearsTimeline,
                charts::addendum_timeline_chart(&timeline),
            ));
            updates.extend(self.refresh_addendum_year());
        }

        info!("Dashboard initialized with {} charts", self.charts.len());
        updates
    }

    /// Apply one control change and recompute the views that depend on it
    pub fn apply(&mut self, event: SelectionEvent) -> Result<ChartUpdates> {
        debug!("Applying selection event: {}", event);

        let updates = match event {
            SelectionEvent::RoadwayYear(year) => {
                self.check_year(&self.data.roadway_years(), year, "roadway")?;
                self.roadway_selection_mut()?.year = year;
                self.refresh_roadway_year()
            }
            SelectionEvent::RoadwayMonth(month) => {
                self.roadway_selection_mut()?.month = month;
                vec![self.refresh_roadway_month()]
            }
            SelectionEvent::RoadwayCompareYear(year) => {
                self.check_year(&self.data.roadway_years(), year, "roadway")?;
                self.roadway_selection_mut()?.compare_year = year;
                vec![self.refresh_roadway_trend()]
            }
            SelectionEvent::InStateYear(year) => {
                if self.selection.instate_year.is_none() {
                    return Err(disabled("in-state"));
                }
                self.check_year(&self.data.instate_years(), year, "in-state")?;
                self.selection.instate_year = Some(year);
                // Only the cards depend on the in-state year.
                Vec::new()
            }
            SelectionEvent::AddendumYear(year) => {
                self.check_year(&self.data.addendum_years(), year, "addendum")?;
                self.addendum_selection_mut()?.year = year;
                self.refresh_addendum_year()
            }
            SelectionEvent::AddendumMonth(month) => {
                self.addendum_selection_mut()?.month = month;
                vec![self.refresh_addendum_month()]
            }
            SelectionEvent::AddendumCompareYear(year) => {
                self.check_year(&self.data.addendum_years(), year, "addendum")?;
                self.addendum_selection_mut()?.compare_year = year;
                vec![self.refresh_addendum_comparison()]
            }
        };

        Ok(updates)
    }

    fn check_year(&self, available: &[i32], year: i32, section: &str) -> Result<()> {
        if available.contains(&year) {
            Ok(())
        } else {
            Err(Error::data_validation(format!(
                "Year {} is not available for the {} section (available: {:?})",
                year, section, available
            )))
        }
    }

    fn roadway_selection_mut(&mut self) -> Result<&mut MonthlySelection> {
        self.selection.roadway.as_mut().ok_or_else(|| disabled("roadway"))
    }

    fn addendum_selection_mut(&mut self) -> Result<&mut MonthlySelection> {
        self.selection.addendum.as_mut().ok_or_else(|| disabled("addendum"))
    }

    fn bind(&mut self, id: ChartId, data: ChartData) -> (ChartId, BindOutcome) {
        (id, self.charts.bind(id, data))
    }

    fn refresh_roadway_year(&mut self) -> ChartUpdates {
        let Some(sel) = self.selection.roadway else {
            return Vec::new();
        };
        let detail = roadway::year_detail(&self.data.roadway, sel.year);
        vec![
            self.refresh_roadway_month(),
            self.refresh_roadway_trend(),
            self.bind(
                ChartId::RoadwayYearPercentages,
                charts::roadway_year_percentages_chart(&detail),
            ),
            self.bind(
                ChartId::RoadwayYearTimeline,
                charts::roadway_year_timeline_chart(&detail),
            ),
        ]
    }

    fn refresh_roadway_month(&mut self) -> (ChartId, BindOutcome) {
        let counts = self.roadway_month_summary().map(|s| s.timing_counts);
        self.bind(ChartId::RoadwayTiming, charts::roadway_timing_chart(counts))
    }

    fn refresh_roadway_trend(&mut self) -> (ChartId, BindOutcome) {
        let trend = self.selection.roadway.map(|sel| {
            roadway::trend_comparison(&self.data.roadway, sel.year, sel.compare_year)
        });
        match trend {
            Some(trend) => self.bind(ChartId::RoadwayTrend, charts::roadway_trend_chart(&trend)),
            None => (ChartId::RoadwayTrend, BindOutcome::Unchanged),
        }
    }

    fn refresh_addendum_year(&mut self) -> ChartUpdates {
        let Some(sel) = self.selection.addendum else {
            return Vec::new();
        };
        let timeline = addendum::year_timeline(&self.data.addendum, sel.year);
        vec![
            self.refresh_addendum_month(),
            self.refresh_addendum_comparison(),
            self.bind(
                ChartId::AddendumYearTimeline,
                charts::addendum_timeline_chart(&timeline),
            ),
        ]
    }

    fn refresh_addendum_month(&mut self) -> (ChartId, BindOutcome) {
        let counts = self.addendum_month_summary().map(|s| s.timing_counts);
        self.bind(ChartId::AddendumMonth, charts::addendum_month_chart(counts))
    }

    fn refresh_addendum_comparison(&mut self) -> (ChartId, BindOutcome) {
        let Some(sel) = self.selection.addendum else {
            return (ChartId::AddendumComparison, BindOutcome::Unchanged);
        };
        let (values, compare_values) =
            addendum::letting_week_comparison(&self.data.addendum, sel.year, sel.compare_year);
        self.bind(
            ChartId::AddendumComparison,
            charts::addendum_comparison_chart(sel.year, values, sel.compare_year, compare_values),
        )
    }

    fn roadway_month_summary(&self) -> Option<roadway::RoadwayMonthSummary> {
        let sel = self.selection.roadway?;
        roadway::month_summary(
            &self.data.roadway,
            sel.year,
            sel.month.name(),
            &self.config.thresholds.roadway,
        )
    }

    fn addendum_month_summary(&self) -> Option<addendum::AddendumMonthSummary> {
        let sel = self.selection.addendum?;
        addendum::month_summary(
            &self.data.addendum,
            sel.year,
            sel.month.name(),
            &self.config.thresholds.addendum,
        )
    }

    /// Roadway cards for the current selection; `None` when the section is disabled
    pub fn roadway_section(&self) -> Option<RoadwaySection> {
        let selection = self.selection.roadway?;
        let summary = roadway::global_summary(&self.data.roadway);
        Some(RoadwaySection {
            available_years: self.data.roadway_years(),
            selection,
            summary: RoadwayGlobalCards::from_summary(&summary),
            month: RoadwayMonthCards::from_summary(self.roadway_month_summary().as_ref()),
        })
    }

    pub fn instate_section(&self) -> Option<InStateSection> {
        let year = self.selection.instate_year?;
        let summary =
            instate::year_summary(&self.data.instate, year, &self.config.thresholds.instate);
        Some(InStateSection {
            available_years: self.data.instate_years(),
            year,
            cards: InStateCards::from_summary(summary.as_ref(), &self.config.agency_name),
        })
    }

    pub fn addendum_section(&self) -> Option<AddendumSection> {
        let selection = self.selection.addendum?;
        let summary = addendum::global_summary(&self.data.addendum);
        Some(AddendumSection {
            available_years: self.data.addendum_years(),
            selection,
            summary: AddendumGlobalCards::from_summary(&summary),
            month: AddendumMonthCards::from_summary(self.addendum_month_summary().as_ref()),
        })
    }

    /// Snapshot of every section and bound chart
    pub fn report(&self) -> DashboardReport {
        DashboardReport {
            generated_at: Utc::now(),
            agency_name: self.config.agency_name.clone(),
            datasets: self.data.parse_stats.clone(),
            roadway: self.roadway_section(),
            instate: self.instate_section(),
            addendum: self.addendum_section(),
            charts: self.charts.snapshot(),
        }
    }
}

fn disabled(section: &str) -> Error {
    Error::data_validation(format!("The {} section has no data and is disabled", section))
}
