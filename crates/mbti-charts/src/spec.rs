use serde::{Deserialize, Serialize};

use mbti_model::{Color, MbtiType};

/// A bar chart: one category axis, one value axis, ordered bars.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BarChartSpec {
    pub title: String,
    pub category_axis: String,
    pub value_axis: String,
    pub bars: Vec<Bar>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bar {
    pub label: String,
    pub value: f64,
    /// Explicit bar color; `None` leaves the renderer's default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
}

/// A world map colored per country.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChoroplethSpec {
    pub title: String,
    pub legend_title: String,
    pub coloring: Coloring,
    pub regions: Vec<RegionDatum>,
}

/// How region colors are assigned.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum Coloring {
    /// Discrete categories with a fixed legend (always all 16 types).
    Categorical { legend: Vec<LegendEntry> },
    /// A continuous scale over `[min, max]`.
    Continuous { min: f64, max: f64 },
}

/// One legend swatch for a categorical map.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegendEntry {
    pub mbti: MbtiType,
    /// Display label, e.g. `"INFP (109 countries)"`.
    pub label: String,
    pub count: u32,
    pub color: Color,
}

/// One country's datum on a choropleth.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionDatum {
    pub country: String,
    /// Category for categorical maps.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<MbtiType>,
    /// Scalar for continuous maps.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    /// Pre-rendered HTML hover snippet.
    pub hover_text: String,
}
