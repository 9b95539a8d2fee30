use mbti_stats::TypeCounts;

use crate::LegendEntry;

/// Builds the 16-entry legend for a categorical map, ordered by country
/// count descending (enumeration order among equals).
///
/// Types with zero countries are kept, with an explicit zero in the label,
/// so the category set is identical across datasets.
pub fn legend_by_count(counts: &TypeCounts) -> Vec<LegendEntry> {
    let mut entries: Vec<LegendEntry> = counts
        .iter()
        .map(|(mbti, count)| LegendEntry {
            mbti,
            label: format!("{mbti} ({})", pluralize_countries(count)),
            count,
            color: mbti.color(),
        })
        .collect();
    entries.sort_by(|a, b| {
        b.count
            .cmp(&a.count)
            .then_with(|| a.mbti.index().cmp(&b.mbti.index()))
    });
    entries
}

fn pluralize_countries(count: u32) -> String {
    if count == 1 {
        "1 country".to_string()
    } else {
        format!("{count} countries")
    }
}

#[cfg(test)]
mod tests {
    use super::pluralize_countries;
    use mbti_model::MbtiType;

    #[test]
    fn country_counts_pluralize() {
        assert_eq!(pluralize_countries(0), "0 countries");
        assert_eq!(pluralize_countries(1), "1 country");
        assert_eq!(pluralize_countries(109), "109 countries");
    }

    #[test]
    fn legend_label_shape() {
        assert_eq!(
            format!("{} ({})", MbtiType::INFP, pluralize_countries(109)),
            "INFP (109 countries)"
        );
    }
}
