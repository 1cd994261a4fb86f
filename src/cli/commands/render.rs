//! Human-readable terminal rendering of dashboard sections and charts

use crate::app::services::aggregation::{Insight, Tone};
use crate::app::services::presentation::charts::{ChartData, ChartId};
use crate::app::services::presentation::format::to_fixed_1;
use crate::app::services::session::{AddendumSection, InStateSection, RoadwaySection};
use crate::constants::PLACEHOLDER;
use colored::*;

/// Tone tag tinted by its meaning
pub fn tone_tag(tone: Tone) -> ColoredString {
    let tag = format!("[{}]", tone);
    match tone {
        Tone::Good => tag.bright_green().bold(),
        Tone::Bad => tag.bright_red().bold(),
        Tone::Neutral => tag.bright_yellow(),
    }
}

fn print_insight(insight: &Insight) {
    println!("   {} {}", tone_tag(insight.tone), insight.message);
}

fn card(label: &str, value: &str) {
    println!("   • {:<28} {}", label, value.bright_white().bold());
}

pub fn print_roadway_section(section: &RoadwaySection) {
    println!("\n{}", "Roadway plan-set timing".bright_green().bold());
    println!("   Available years: {}", years_list(&section.available_years));
    card("Total files received", &section.summary.total_files);
    card("Average on-time rate", &section.summary.avg_on_time);
    card("Best year", &section.summary.best_year);
    card("Worst year", &section.summary.worst_year);

    println!(
        "\n   {} {}",
        section.selection.month.to_string().bright_cyan(),
        section.selection.year.to_string().bright_cyan()
    );
    card("On time", &section.month.on_time);
    card("Late", &section.month.late);
    card("Files received", &section.month.total);
    print_insight(&section.month.insight);
}

pub fn print_instate_section(section: &InStateSection) {
    println!("\n{}", "In-state vs. out-of-state contracting".bright_green().bold());
    println!("   Available years: {}", years_list(&section.available_years));
    let cards = &section.cards;
    card("Total contracts", &cards.total_contracts);
    card("In-state share (amount)", &cards.share_by_amount);
    card("In-state share (count)", &cards.share_by_count);
    card("Savings with in-state bidder", &cards.with_in_savings);
    card("Savings, no in-state bidder", &cards.no_in_savings);
    card("Contracts with in-state bidder", &cards.with_in_count);

    println!("\n   {}", cards.headline.bright_white());
    if let Some(tone) = cards.tone {
        println!("   {} {}", tone_tag(tone), cards.insight);
    }
}

pub fn print_addendum_section(section: &AddendumSection) {
    println!("\n{}", "Addendum issuance timing".bright_green().bold());
    println!("   Available years: {}", years_list(&section.available_years));
    card("Total addenda", &section.summary.total_addenda);
    card("Average issued early", &section.summary.avg_early);
    card("Best year", &section.summary.best_year);
    card("Worst year", &section.summary.worst_year);

    println!(
        "\n   {} {}",
        section.selection.month.to_string().bright_cyan(),
        section.selection.year.to_string().bright_cyan()
    );
    card("Addenda issued", &section.month.total);
    card("Issued early", &section.month.early);
    card("Issued in final week", &section.month.late_week);
    print_insight(&section.month.insight);
}

/// Notice for a section whose dataset has no usable records
pub fn print_disabled(name: &str) {
    println!(
        "\n{} {}",
        name.bright_green().bold(),
        "(no data: section disabled)".dimmed()
    );
}

fn years_list(years: &[i32]) -> String {
    years
        .iter()
        .map(i32::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

fn chart_value(value: Option<f64>) -> String {
    match value {
        Some(v) => to_fixed_1(v),
        None => PLACEHOLDER.to_string(),
    }
}

/// Chart title, labels and one row per series
pub fn print_chart(id: ChartId, chart: &ChartData) {
    println!("\n   {}", id.title().bright_blue().bold());
    println!("     {}", chart.labels.join(" | ").dimmed());
    for series in &chart.datasets {
        let values: Vec<String> = series.values.iter().map(|v| chart_value(*v)).collect();
        println!("     {}: {}", series.label, values.join(", "));
    }
}
