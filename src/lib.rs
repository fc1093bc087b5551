//! dashchart-rs: adaptive chart configuration engine for dashboard charts.
//!
//! Takes a color-scheme signal plus ambiguous time-series axis values and
//! produces one complete, internally consistent chart configuration object:
//! grid, tooltip (with render callback), category axis, value axis, and
//! per-kind series presets. The object is consumed by an external rendering
//! engine; this crate fetches no data and draws no pixels.
//!
//! Malformed inputs never fail a build: every formatter degrades to the best
//! textual representation of the original value.

pub mod error;
pub mod format;
pub mod options;
pub mod telemetry;
pub mod theme;

pub use error::{ChartError, ChartResult};
pub use format::{
    NumericValue, TemporalValue, format_axis_date, format_axis_number, format_number,
    format_tooltip_date,
};
pub use options::{
    ChartConfiguration, SeriesKind, SeriesPreset, TooltipParams, TooltipPoint, TooltipValue,
    build_base_options, build_series_preset, render_tooltip,
};
pub use theme::{Color, ColorScheme, Palette, SchemeProvider, resolve_theme};
