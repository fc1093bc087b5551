//! Fallback-only label formatting for temporal and numeric axis values.
//!
//! Every formatter in this module degrades malformed input to its best
//! textual representation instead of failing: a single bad data point must
//! never prevent the rest of a chart from rendering.

mod date;
mod number;

pub use date::{TemporalValue, format_axis_date, format_tooltip_date};
pub use number::{NumericValue, format_axis_number, format_number};
