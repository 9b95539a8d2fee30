use mbti_model::{Color, DichotomyAxis, MbtiType, Table};
use mbti_stats::{
    dichotomy_aggregate, distribution, dominant_type, dominant_type_counts, global_averages,
    least_dominant_type, top_n_for_type, Extreme, QueryError, TieBreak, DEFAULT_SUMMARY_RANKS,
};

use crate::hover::{dichotomy_hover_text, ranked_hover_text};
use crate::legend::legend_by_count;
use crate::{Bar, BarChartSpec, ChoroplethSpec, Coloring, RegionDatum};

/// One country's full distribution as a descending bar chart, one bar per
/// present type, palette-colored.
pub fn country_distribution_chart(
    table: &Table,
    country: &str,
) -> Result<BarChartSpec, QueryError> {
    let bars = distribution(table, country)?
        .into_iter()
        .filter_map(|e| {
            e.share.map(|value| Bar {
                label: e.mbti.to_string(),
                value,
                color: Some(e.mbti.color()),
            })
        })
        .collect();

    Ok(BarChartSpec {
        title: format!("MBTI distribution of {country}"),
        category_axis: "MBTI type".to_string(),
        value_axis: "Share (%)".to_string(),
        bars,
    })
}

/// Cross-country mean share per type, descending. Types whose column had no
/// present values are left out of the chart (they are flagged upstream).
pub fn global_average_chart(table: &Table) -> BarChartSpec {
    let bars = global_averages(table)
        .into_iter()
        .filter_map(|e| {
            e.mean.map(|value| Bar {
                label: e.mbti.to_string(),
                value,
                color: Some(e.mbti.color()),
            })
        })
        .collect();

    BarChartSpec {
        title: "Average MBTI share across all countries".to_string(),
        category_axis: "MBTI type".to_string(),
        value_axis: "Average share (%)".to_string(),
        bars,
    }
}

/// Top-`n` countries for one type, with the pinned country's bar
/// highlighted in red.
pub fn top_n_chart(
    table: &Table,
    mbti: MbtiType,
    n: usize,
    pinned: Option<&str>,
) -> Result<BarChartSpec, QueryError> {
    let entries = top_n_for_type(table, mbti, n, pinned)?;
    let bars = entries
        .into_iter()
        .map(|e| Bar {
            color: e.pinned.then(Color::red),
            label: e.country,
            value: e.value,
        })
        .collect();

    Ok(BarChartSpec {
        title: match pinned {
            Some(name) => format!("Top {n} countries for {mbti} (plus {name})"),
            None => format!("Top {n} countries for {mbti}"),
        },
        category_axis: "Country".to_string(),
        value_axis: "Share (%)".to_string(),
        bars,
    })
}

/// World map colored by each country's dominant type.
pub fn dominant_type_map(table: &Table) -> ChoroplethSpec {
    extreme_map(
        table,
        Extreme::Most,
        "Most common MBTI type per country",
        "Top type",
    )
}

/// World map colored by each country's least common type.
pub fn least_dominant_type_map(table: &Table) -> ChoroplethSpec {
    extreme_map(
        table,
        Extreme::Least,
        "Least common MBTI type per country",
        "Bottom type",
    )
}

fn extreme_map(
    table: &Table,
    extreme: Extreme,
    title: &str,
    legend_title: &str,
) -> ChoroplethSpec {
    let counts = dominant_type_counts(table, extreme);

    let mut regions = Vec::with_capacity(table.len());
    for record in table {
        let picked = match extreme {
            Extreme::Most => dominant_type(table, &record.country, TieBreak::First),
            Extreme::Least => least_dominant_type(table, &record.country, TieBreak::First),
        };
        // Countries with no data are already excluded from the counts;
        // leave them off the map as well.
        let Ok(mbti) = picked else { continue };
        let hover_text =
            ranked_hover_text(table, &record.country, DEFAULT_SUMMARY_RANKS, extreme)
                .unwrap_or_default();
        regions.push(RegionDatum {
            country: record.country.clone(),
            category: Some(mbti),
            value: None,
            color: Some(mbti.color()),
            hover_text,
        });
    }

    ChoroplethSpec {
        title: title.to_string(),
        legend_title: legend_title.to_string(),
        coloring: Coloring::Categorical {
            legend: legend_by_count(&counts),
        },
        regions,
    }
}

/// World map on a continuous scale over one dichotomy pole's share.
///
/// The featured pole follows the source dashboards: E, N, T and J
/// respectively. Hover text lists all four axes.
pub fn dichotomy_map(table: &Table, axis: DichotomyAxis) -> ChoroplethSpec {
    let (pole, pole_name) = featured_pole(axis);

    let mut regions = Vec::with_capacity(table.len());
    for record in table {
        let Ok(shares) = dichotomy_aggregate(table, &record.country, axis) else {
            continue;
        };
        let Some(value) = shares.pole(pole) else {
            continue;
        };
        let hover_text = dichotomy_hover_text(table, &record.country).unwrap_or_default();
        regions.push(RegionDatum {
            country: record.country.clone(),
            category: None,
            value: Some(value),
            color: None,
            hover_text,
        });
    }

    let (min, max) = regions
        .iter()
        .filter_map(|r| r.value)
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });

    ChoroplethSpec {
        title: format!("{pole_name} ({pole}) share by country"),
        legend_title: "Share (%)".to_string(),
        coloring: Coloring::Continuous {
            min: if min.is_finite() { min } else { 0.0 },
            max: if max.is_finite() { max } else { 0.0 },
        },
        regions,
    }
}

/// The pole the map colors on, per axis.
fn featured_pole(axis: DichotomyAxis) -> (char, &'static str) {
    match axis {
        DichotomyAxis::Ei => ('E', "Extroversion"),
        DichotomyAxis::Sn => ('N', "Intuition"),
        DichotomyAxis::Tf => ('T', "Thinking"),
        DichotomyAxis::Jp => ('J', "Judging"),
    }
}
