//! `mbti-charts` turns aggregation results into renderer-agnostic chart
//! specifications.
//!
//! A spec is plain serde data — category/value pairs, colors, legend
//! entries, hover strings — that a plotting frontend consumes as-is. The
//! aggregation layer (`mbti-stats`) never depends on these types.

mod builders;
mod hover;
mod legend;
mod spec;

pub use builders::{
    country_distribution_chart, dichotomy_map, dominant_type_map, global_average_chart,
    least_dominant_type_map, top_n_chart,
};
pub use hover::{dichotomy_hover_text, ranked_hover_text};
pub use legend::legend_by_count;
pub use spec::{Bar, BarChartSpec, ChoroplethSpec, Coloring, LegendEntry, RegionDatum};
