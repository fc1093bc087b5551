use serde::Serialize;

/// Chart kind selector choosing which series preset to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SeriesKind {
    Line,
    Area,
}

/// Render primitive the consuming engine draws a series with.
///
/// Area charts are line series with a fill, so both presets render as lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SeriesRenderType {
    Line,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SymbolKind {
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SeriesLineStyle {
    pub width: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesItemStyle {
    pub border_width: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmphasisStyle {
    pub scale: bool,
    pub scale_size: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AreaFillStyle {
    pub opacity: f64,
}

/// Default style bundle for one series kind.
///
/// Pure data: the caller merges a preset with its own data values into a
/// final series entry. The builder never sees series values.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesPreset {
    #[serde(rename = "type")]
    pub render_type: SeriesRenderType,
    pub smooth: bool,
    pub show_symbol: bool,
    pub symbol: SymbolKind,
    pub line_style: SeriesLineStyle,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_style: Option<SeriesItemStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emphasis: Option<EmphasisStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area_style: Option<AreaFillStyle>,
}

/// Builds a fresh preset for the requested kind.
///
/// Every call returns an independent value; mutating one preset never
/// affects another.
#[must_use]
pub fn build_series_preset(kind: SeriesKind) -> SeriesPreset {
    // Data-point symbols are opt-in visual noise the dashboard avoids.
    let base = SeriesPreset {
        render_type: SeriesRenderType::Line,
        smooth: true,
        show_symbol: false,
        symbol: SymbolKind::None,
        line_style: SeriesLineStyle { width: 2.0 },
        item_style: None,
        emphasis: None,
        area_style: None,
    };

    match kind {
        SeriesKind::Line => SeriesPreset {
            item_style: Some(SeriesItemStyle { border_width: 2.0 }),
            emphasis: Some(EmphasisStyle {
                scale: true,
                scale_size: 10.0,
            }),
            ..base
        },
        SeriesKind::Area => SeriesPreset {
            area_style: Some(AreaFillStyle { opacity: 0.3 }),
            ..base
        },
    }
}
