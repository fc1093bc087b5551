use std::fmt;
use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use crate::error::ChartResult;
use crate::format::{NumericValue, TemporalValue, format_axis_date, format_axis_number};
use crate::theme::{Color, Palette};

use super::TooltipFormatter;

const FONT_FAMILY: &str =
    "Inter, -apple-system, BlinkMacSystemFont, \"Segoe UI\", Roboto, sans-serif";
const BASE_FONT_SIZE: u32 = 13;
const AXIS_LABEL_FONT_SIZE: u32 = 12;
const TOOLTIP_BACKGROUND_ALPHA: f64 = 0.95;

/// Callback rendering category-axis tick labels.
#[derive(Clone)]
pub struct AxisDateFormatter(Arc<dyn Fn(&TemporalValue) -> String + Send + Sync>);

impl AxisDateFormatter {
    #[must_use]
    pub fn new(format: impl Fn(&TemporalValue) -> String + Send + Sync + 'static) -> Self {
        Self(Arc::new(format))
    }

    #[must_use]
    pub fn format(&self, value: &TemporalValue) -> String {
        (self.0)(value)
    }
}

impl Default for AxisDateFormatter {
    fn default() -> Self {
        Self::new(format_axis_date)
    }
}

impl fmt::Debug for AxisDateFormatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AxisDateFormatter(..)")
    }
}

/// Callback rendering value-axis tick labels.
#[derive(Clone)]
pub struct AxisNumberFormatter(Arc<dyn Fn(&NumericValue) -> String + Send + Sync>);

impl AxisNumberFormatter {
    #[must_use]
    pub fn new(format: impl Fn(&NumericValue) -> String + Send + Sync + 'static) -> Self {
        Self(Arc::new(format))
    }

    #[must_use]
    pub fn format(&self, value: &NumericValue) -> String {
        (self.0)(value)
    }
}

impl Default for AxisNumberFormatter {
    fn default() -> Self {
        Self::new(format_axis_number)
    }
}

impl fmt::Debug for AxisNumberFormatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AxisNumberFormatter(..)")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    pub font_family: &'static str,
    pub font_size: u32,
    pub color: Color,
}

/// Fixed percentage insets; consistency across dashboard charts is preferred
/// over per-chart adaptivity.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GridConfig {
    pub left: &'static str,
    pub right: &'static str,
    pub top: &'static str,
    pub bottom: &'static str,
    pub contain_label: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TooltipTrigger {
    /// Hover anywhere on the category axis shows the nearest point.
    Axis,
    Item,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LineStyleKind {
    Solid,
    Dashed,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PointerLineStyle {
    pub color: Color,
    #[serde(rename = "type")]
    pub kind: LineStyleKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PointerKind {
    Line,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisPointerConfig {
    #[serde(rename = "type")]
    pub kind: PointerKind,
    pub line_style: PointerLineStyle,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TooltipTextStyle {
    pub color: Color,
    pub font_size: u32,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TooltipConfig {
    pub trigger: TooltipTrigger,
    pub background_color: Color,
    pub border_width: f64,
    pub border_color: Color,
    pub text_style: TooltipTextStyle,
    pub padding: u32,
    #[serde(skip)]
    pub formatter: TooltipFormatter,
    pub axis_pointer: AxisPointerConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AxisToggle {
    pub show: bool,
}

impl AxisToggle {
    const HIDDEN: Self = Self { show: false };
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SplitLineStyle {
    pub color: Color,
    #[serde(rename = "type")]
    pub kind: LineStyleKind,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SplitLineConfig {
    pub line_style: SplitLineStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisType {
    Category,
    Value,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryAxisLabel {
    pub color: Color,
    pub font_size: u32,
    #[serde(skip)]
    pub formatter: AxisDateFormatter,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueAxisLabel {
    pub color: Color,
    pub font_size: u32,
    #[serde(skip)]
    pub formatter: AxisNumberFormatter,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryAxisConfig {
    #[serde(rename = "type")]
    pub axis_type: AxisType,
    pub axis_line: AxisToggle,
    pub axis_tick: AxisToggle,
    pub axis_label: CategoryAxisLabel,
    pub split_line: AxisToggle,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueAxisConfig {
    #[serde(rename = "type")]
    pub axis_type: AxisType,
    pub axis_line: AxisToggle,
    pub axis_tick: AxisToggle,
    pub axis_label: ValueAxisLabel,
    pub split_line: SplitLineConfig,
}

/// Complete declarative chart configuration for one chart instance.
///
/// A disposable, caller-owned value: refreshing a chart (on data or scheme
/// change) means a full rebuild, never mutation of a prior configuration.
/// Formatter callbacks are bound in-process and skipped during
/// serialization.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartConfiguration {
    pub background_color: &'static str,
    pub text_style: TextStyle,
    pub grid: GridConfig,
    pub tooltip: TooltipConfig,
    pub x_axis: CategoryAxisConfig,
    pub y_axis: ValueAxisConfig,
}

impl ChartConfiguration {
    /// Serializes the configuration for hosts that persist or hand it to an
    /// out-of-process renderer.
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Composes the palette and formatter callbacks into a complete base
/// configuration.
///
/// The palette must come from a fresh [`resolve_theme`](crate::theme::resolve_theme)
/// call so the configuration reflects the scheme at build time.
#[must_use]
pub fn build_base_options(palette: &Palette) -> ChartConfiguration {
    debug!(scheme = ?palette.scheme, "building base chart options");

    ChartConfiguration {
        background_color: "transparent",
        text_style: TextStyle {
            font_family: FONT_FAMILY,
            font_size: BASE_FONT_SIZE,
            color: palette.text,
        },
        grid: GridConfig {
            left: "3%",
            right: "4%",
            top: "10%",
            bottom: "10%",
            contain_label: true,
        },
        tooltip: TooltipConfig {
            trigger: TooltipTrigger::Axis,
            background_color: palette.background.with_alpha(TOOLTIP_BACKGROUND_ALPHA),
            border_width: 1.0,
            border_color: palette.border,
            text_style: TooltipTextStyle {
                color: palette.text,
                font_size: BASE_FONT_SIZE,
            },
            padding: 12,
            formatter: TooltipFormatter::default(),
            axis_pointer: AxisPointerConfig {
                kind: PointerKind::Line,
                line_style: PointerLineStyle {
                    color: palette.border,
                    kind: LineStyleKind::Dashed,
                },
            },
        },
        x_axis: CategoryAxisConfig {
            axis_type: AxisType::Category,
            axis_line: AxisToggle::HIDDEN,
            axis_tick: AxisToggle::HIDDEN,
            axis_label: CategoryAxisLabel {
                color: palette.text_secondary,
                font_size: AXIS_LABEL_FONT_SIZE,
                formatter: AxisDateFormatter::default(),
            },
            split_line: AxisToggle::HIDDEN,
        },
        y_axis: ValueAxisConfig {
            axis_type: AxisType::Value,
            axis_line: AxisToggle::HIDDEN,
            axis_tick: AxisToggle::HIDDEN,
            axis_label: ValueAxisLabel {
                color: palette.text_secondary,
                font_size: AXIS_LABEL_FONT_SIZE,
                formatter: AxisNumberFormatter::default(),
            },
            split_line: SplitLineConfig {
                line_style: SplitLineStyle {
                    color: palette.grid_line,
                    kind: LineStyleKind::Dashed,
                },
            },
        },
    }
}
