//! Presentation of aggregation results
//!
//! Turns derived figures into what the visualization sink and terminal
//! consume: card strings, narratives and chart payloads, plus the registry
//! that tracks which charts have been bound.

pub mod cards;
pub mod chart_registry;
pub mod charts;
pub mod format;

pub use chart_registry::{BindOutcome, ChartRegistry};
pub use charts::{ChartData, ChartId, Series};
pub use format::{format_count, format_currency, format_percent};
