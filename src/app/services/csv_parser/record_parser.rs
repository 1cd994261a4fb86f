//! Per-row record construction for the three dashboard datasets
//!
//! This module declares the column tables for Roadway, InStateVsOutState and
//! Addendum exports and turns one split data row into a typed record.

use super::column_mapping::{ColumnMapping, ColumnSpec};
use super::field_parsers::{
    FieldOutcome, assign, coerce_count, coerce_currency, coerce_currency_count, coerce_percent,
    coerce_percent_or_zero, coerce_text, coerce_year,
};
use crate::app::models::{AddendumRecord, DatasetKind, InStateRecord, RoadwayRecord};
use crate::constants::{addendum_headers as ah, instate_headers as ih, roadway_headers as rh};
use tracing::debug;

/// A record type that can be parsed from a dashboard CSV export
pub trait DatasetRecord: Default + 'static {
    /// Dataset this record belongs to
    const KIND: DatasetKind;

    /// Recognized columns, matched by exact header text
    fn columns() -> &'static [ColumnSpec<Self>];

    /// Columns without which no row can be retained
    fn required_columns() -> &'static [&'static str];

    /// Retention predicate applied after all cells are coerced
    fn is_retained(&self) -> bool;
}

/// Outcome of parsing one data row
#[derive(Debug, Clone)]
pub struct ParsedRow<R> {
    pub record: R,

    /// Cells that held text which could not be coerced
    pub coercion_failures: usize,
}

/// Build a record from one split data row
///
/// Cells missing at the end of a short row are treated as empty.
pub fn parse_record<R: DatasetRecord>(
    fields: &[String],
    mapping: &ColumnMapping<R>,
    line_number: usize,
) -> ParsedRow<R> {
    let mut record = R::default();
    let mut coercion_failures = 0;

    for (index, spec) in &mapping.bindings {
        let raw = fields.get(*index).map(String::as_str).unwrap_or("");
        if (spec.apply)(&mut record, raw) == FieldOutcome::Malformed {
            coercion_failures += 1;
            debug!(
                "{} line {}: could not coerce '{}' value '{}'",
                R::KIND,
                line_number,
                spec.header,
                raw
            );
        }
    }

    ParsedRow {
        record,
        coercion_failures,
    }
}

static ROADWAY_COLUMNS: &[ColumnSpec<RoadwayRecord>] = &[
    ColumnSpec {
        header: rh::YEAR,
        apply: |r: &mut RoadwayRecord, v: &str| assign(&mut r.year, coerce_year(v)),
    },
    ColumnSpec {
        header: rh::MONTH,
        apply: |r: &mut RoadwayRecord, v: &str| assign(&mut r.month, coerce_text(v)),
    },
    ColumnSpec {
        header: rh::BEFORE_PCT,
        apply: |r: &mut RoadwayRecord, v: &str| assign(&mut r.before_pct, coerce_percent(v)),
    },
    ColumnSpec {
        header: rh::AFTER_PCT,
        apply: |r: &mut RoadwayRecord, v: &str| assign(&mut r.after_pct, coerce_percent(v)),
    },
    ColumnSpec {
        header: rh::AFTER_ADV_PCT,
        apply: |r: &mut RoadwayRecord, v: &str| assign(&mut r.after_adv_pct, coerce_percent(v)),
    },
    ColumnSpec {
        header: rh::UNKNOWN_PCT,
        apply: |r: &mut RoadwayRecord, v: &str| assign(&mut r.unknown_pct, coerce_percent(v)),
    },
    ColumnSpec {
        header: rh::TOTAL,
        apply: |r: &mut RoadwayRecord, v: &str| assign(&mut r.total, coerce_count(v)),
    },
    ColumnSpec {
        header: rh::EARLY_1_2,
        apply: |r: &mut RoadwayRecord, v: &str| assign(&mut r.early12, coerce_count(v)),
    },
    ColumnSpec {
        header: rh::EARLY_0_1,
        apply: |r: &mut RoadwayRecord, v: &str| assign(&mut r.early01, coerce_count(v)),
    },
    ColumnSpec {
        header: rh::ON_DUE,
        apply: |r: &mut RoadwayRecord, v: &str| assign(&mut r.on_due, coerce_count(v)),
    },
    ColumnSpec {
        header: rh::LATE_0_1,
        apply: |r: &mut RoadwayRecord, v: &str| assign(&mut r.late01, coerce_count(v)),
    },
    ColumnSpec {
        header: rh::LATE_1_2,
        apply: |r: &mut RoadwayRecord, v: &str| assign(&mut r.late12, coerce_count(v)),
    },
];

impl DatasetRecord for RoadwayRecord {
    const KIND: DatasetKind = DatasetKind::Roadway;

    fn columns() -> &'static [ColumnSpec<Self>] {
        ROADWAY_COLUMNS
    }

    fn required_columns() -> &'static [&'static str] {
        rh::REQUIRED
    }

    fn is_retained(&self) -> bool {
        self.year != 0 && !self.month.is_empty()
    }
}

static INSTATE_COLUMNS: &[ColumnSpec<InStateRecord>] = &[
    ColumnSpec {
        header: ih::YEAR,
        apply: |r: &mut InStateRecord, v: &str| assign(&mut r.year, coerce_year(v)),
    },
    ColumnSpec {
        header: ih::AMOUNT_IN,
        apply: |r: &mut InStateRecord, v: &str| assign(&mut r.amount_in, coerce_currency(v)),
    },
    ColumnSpec {
        header: ih::COUNT_IN,
        apply: |r: &mut InStateRecord, v: &str| assign(&mut r.count_in, coerce_currency_count(v)),
    },
    ColumnSpec {
        header: ih::AMOUNT_OUT,
        apply: |r: &mut InStateRecord, v: &str| assign(&mut r.amount_out, coerce_currency(v)),
    },
    ColumnSpec {
        header: ih::COUNT_OUT,
        apply: |r: &mut InStateRecord, v: &str| assign(&mut r.count_out, coerce_currency_count(v)),
    },
    ColumnSpec {
        header: ih::TOTAL_CONTRACTS,
        apply: |r: &mut InStateRecord, v: &str| {
            assign(&mut r.total_contracts, coerce_currency_count(v))
        },
    },
    ColumnSpec {
        header: ih::TOTAL_AMOUNT,
        apply: |r: &mut InStateRecord, v: &str| assign(&mut r.total_amount, coerce_currency(v)),
    },
    ColumnSpec {
        header: ih::WITH_IN_COUNT,
        apply: |r: &mut InStateRecord, v: &str| {
            assign(&mut r.with_in_count, coerce_currency_count(v))
        },
    },
    ColumnSpec {
        header: ih::WITH_IN_SAVINGS,
        apply: |r: &mut InStateRecord, v: &str| assign(&mut r.with_in_savings, coerce_currency(v)),
    },
    ColumnSpec {
        header: ih::NO_IN_COUNT,
        apply: |r: &mut InStateRecord, v: &str| {
            assign(&mut r.no_in_count, coerce_currency_count(v))
        },
    },
    ColumnSpec {
        header: ih::NO_IN_SAVINGS,
        apply: |r: &mut InStateRecord, v: &str| assign(&mut r.no_in_savings, coerce_currency(v)),
    },
];

impl DatasetRecord for InStateRecord {
    const KIND: DatasetKind = DatasetKind::InState;

    fn columns() -> &'static [ColumnSpec<Self>] {
        INSTATE_COLUMNS
    }

    fn required_columns() -> &'static [&'static str] {
        ih::REQUIRED
    }

    fn is_retained(&self) -> bool {
        self.year != 0
    }
}

static ADDENDUM_COLUMNS: &[ColumnSpec<AddendumRecord>] = &[
    ColumnSpec {
        header: ah::YEAR,
        apply: |r: &mut AddendumRecord, v: &str| assign(&mut r.year, coerce_year(v)),
    },
    ColumnSpec {
        header: ah::MONTH,
        apply: |r: &mut AddendumRecord, v: &str| assign(&mut r.month, coerce_text(v)),
    },
    ColumnSpec {
        header: ah::ADVERTISEMENT,
        apply: |r: &mut AddendumRecord, v: &str| assign(&mut r.advertisement, coerce_count(v)),
    },
    ColumnSpec {
        header: ah::THREE_WEEKS_BEFORE,
        apply: |r: &mut AddendumRecord, v: &str| {
            assign(&mut r.three_weeks_before, coerce_count(v))
        },
    },
    ColumnSpec {
        header: ah::TWO_WEEKS_BEFORE,
        apply: |r: &mut AddendumRecord, v: &str| assign(&mut r.two_weeks_before, coerce_count(v)),
    },
    ColumnSpec {
        header: ah::ONE_WEEK_BEFORE,
        apply: |r: &mut AddendumRecord, v: &str| assign(&mut r.one_week_before, coerce_count(v)),
    },
    ColumnSpec {
        header: ah::LETTING_WEEK,
        apply: |r: &mut AddendumRecord, v: &str| assign(&mut r.letting_week, coerce_count(v)),
    },
    ColumnSpec {
        header: ah::TOTAL,
        apply: |r: &mut AddendumRecord, v: &str| assign(&mut r.total, coerce_count(v)),
    },
    ColumnSpec {
        header: ah::ADVERTISEMENT_PCT,
        apply: |r: &mut AddendumRecord, v: &str| {
            assign(&mut r.advertisement_pct, coerce_percent_or_zero(v))
        },
    },
    ColumnSpec {
        header: ah::THREE_WEEKS_BEFORE_PCT,
        apply: |r: &mut AddendumRecord, v: &str| {
            assign(&mut r.three_weeks_before_pct, coerce_percent_or_zero(v))
        },
    },
    ColumnSpec {
        header: ah::TWO_WEEKS_BEFORE_PCT,
        apply: |r: &mut AddendumRecord, v: &str| {
            assign(&mut r.two_weeks_before_pct, coerce_percent_or_zero(v))
        },
    },
    ColumnSpec {
        header: ah::ONE_WEEK_BEFORE_PCT,
        apply: |r: &mut AddendumRecord, v: &str| {
            assign(&mut r.one_week_before_pct, coerce_percent_or_zero(v))
        },
    },
    ColumnSpec {
        header: ah::LETTING_WEEK_PCT,
        apply: |r: &mut AddendumRecord, v: &str| {
            assign(&mut r.letting_week_pct, coerce_percent_or_zero(v))
        },
    },
    ColumnSpec {
        header: ah::TOTAL_PCT,
        apply: |r: &mut AddendumRecord, v: &str| {
            assign(&mut r.total_pct, coerce_percent_or_zero(v))
        },
    },
];

impl DatasetRecord for AddendumRecord {
    const KIND: DatasetKind = DatasetKind::Addendum;

    fn columns() -> &'static [ColumnSpec<Self>] {
        ADDENDUM_COLUMNS
    }

    fn required_columns() -> &'static [&'static str] {
        ah::REQUIRED
    }

    fn is_retained(&self) -> bool {
        self.year != 0 && !self.month.is_empty() && self.total > 0
    }
}
