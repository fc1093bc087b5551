//! Chart configuration builder: composes a resolved palette and the
//! formatting callbacks into one declarative option object, plus per-kind
//! series style presets.

mod base;
mod series;
mod tooltip;

pub use base::{
    AxisDateFormatter, AxisNumberFormatter, AxisPointerConfig, AxisToggle, AxisType,
    CategoryAxisConfig, CategoryAxisLabel, ChartConfiguration, GridConfig, LineStyleKind,
    PointerKind, PointerLineStyle, SplitLineConfig, SplitLineStyle, TextStyle, TooltipConfig,
    TooltipTextStyle, TooltipTrigger, ValueAxisConfig, ValueAxisLabel, build_base_options,
};
pub use series::{
    AreaFillStyle, EmphasisStyle, SeriesItemStyle, SeriesKind, SeriesLineStyle, SeriesPreset,
    SeriesRenderType, SymbolKind, build_series_preset,
};
pub use tooltip::{
    TooltipFormatter, TooltipParams, TooltipPoint, TooltipPoints, TooltipValue, render_tooltip,
};
