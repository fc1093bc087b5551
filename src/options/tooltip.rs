use std::fmt;
use std::sync::Arc;

use smallvec::SmallVec;

use crate::format::{NumericValue, TemporalValue, format_number, format_tooltip_date};

/// Small inline buffer for per-hover tooltip entries.
///
/// Dashboards rarely overlay more than a handful of series on one axis.
pub type TooltipPoints = SmallVec<[TooltipPoint; 4]>;

/// One data-point descriptor delivered to the tooltip formatter.
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipPoint {
    /// Category-axis value of the hovered point.
    pub axis_value: Option<TemporalValue>,
    /// Series label, used when no axis value is delivered.
    pub name: Option<String>,
    pub value: TooltipValue,
}

impl TooltipPoint {
    #[must_use]
    pub fn new(axis_value: impl Into<TemporalValue>, value: TooltipValue) -> Self {
        Self {
            axis_value: Some(axis_value.into()),
            name: None,
            value,
        }
    }

    #[must_use]
    pub fn named(name: impl Into<String>, value: TooltipValue) -> Self {
        Self {
            axis_value: None,
            name: Some(name.into()),
            value,
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

/// Value shape of a tooltip entry.
///
/// Pipelines deliver either a bare magnitude or an `[x, y]` pair; the pair's
/// second element is the displayed magnitude.
#[derive(Debug, Clone, PartialEq)]
pub enum TooltipValue {
    Scalar(NumericValue),
    Pair(f64, NumericValue),
}

impl TooltipValue {
    fn magnitude(&self) -> &NumericValue {
        match self {
            Self::Scalar(value) => value,
            Self::Pair(_, value) => value,
        }
    }
}

/// Tooltip payload: a single descriptor on per-point hover, a sequence on
/// axis-triggered multi-series hover.
#[derive(Debug, Clone, PartialEq)]
pub enum TooltipParams {
    Single(TooltipPoint),
    Series(TooltipPoints),
}

impl TooltipParams {
    #[must_use]
    pub fn series(points: impl IntoIterator<Item = TooltipPoint>) -> Self {
        Self::Series(points.into_iter().collect())
    }

    fn first(&self) -> Option<&TooltipPoint> {
        match self {
            Self::Single(point) => Some(point),
            Self::Series(points) => points.first(),
        }
    }
}

/// Renders the tooltip markup for one hover event.
///
/// The first entry is representative: its axis value (or name, when no axis
/// value was delivered) becomes the date column and its magnitude the bold
/// value column. An empty payload renders an empty tooltip.
#[must_use]
pub fn render_tooltip(params: &TooltipParams) -> String {
    let Some(first) = params.first() else {
        return String::new();
    };

    let date_label = match (&first.axis_value, &first.name) {
        (Some(axis_value), _) => format_tooltip_date(axis_value),
        (None, Some(name)) => format_tooltip_date(&TemporalValue::Text(name.clone())),
        (None, None) => String::new(),
    };
    let value_label = format_number(first.value.magnitude());

    format!(
        "<div style=\"display:flex;justify-content:space-between;gap:24px;min-width:180px\">\
         <span>{date_label}</span>\
         <span style=\"font-weight:600\">{value_label}</span>\
         </div>"
    )
}

/// Callback bound into [`TooltipConfig`](super::TooltipConfig); hosts may
/// replace the default [`render_tooltip`] binding.
#[derive(Clone)]
pub struct TooltipFormatter(Arc<dyn Fn(&TooltipParams) -> String + Send + Sync>);

impl TooltipFormatter {
    #[must_use]
    pub fn new(format: impl Fn(&TooltipParams) -> String + Send + Sync + 'static) -> Self {
        Self(Arc::new(format))
    }

    #[must_use]
    pub fn format(&self, params: &TooltipParams) -> String {
        (self.0)(params)
    }
}

impl Default for TooltipFormatter {
    fn default() -> Self {
        Self::new(render_tooltip)
    }
}

impl fmt::Debug for TooltipFormatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("TooltipFormatter(..)")
    }
}
