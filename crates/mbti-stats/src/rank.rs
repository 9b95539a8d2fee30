use serde::{Deserialize, Serialize};

use mbti_model::{MbtiType, Table};

use crate::QueryError;

/// One row of a per-type country ranking.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankingEntry {
    pub country: String,
    pub mbti: MbtiType,
    pub value: f64,
    /// Whether this entry is the caller-pinned country. Feeds chart
    /// highlighting; true even when the pinned country ranks naturally.
    pub pinned: bool,
}

/// The `n` countries with the largest share of `mbti`, descending.
///
/// Ties break by country name ascending so results are reproducible across
/// runs. Countries whose share for `mbti` is missing are excluded rather
/// than treated as zero.
///
/// A `pinned` country present in the table is guaranteed to appear: if it
/// already ranks within the top `n` it is not duplicated, otherwise it is
/// appended and the combined set re-sorted (yielding `n + 1` entries). A
/// pinned name absent from the table — or with a missing share — is
/// silently omitted.
pub fn top_n_for_type(
    table: &Table,
    mbti: MbtiType,
    n: usize,
    pinned: Option<&str>,
) -> Result<Vec<RankingEntry>, QueryError> {
    if n == 0 {
        return Err(QueryError::InvalidLimit(n));
    }

    let mut ranked: Vec<(&str, f64)> = table
        .iter()
        .filter_map(|r| r.share(mbti).map(|v| (r.country.as_str(), v)))
        .collect();
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    ranked.truncate(n);

    if let Some(name) = pinned {
        if let Some(value) = table.get(name).and_then(|r| r.share(mbti)) {
            if !ranked.iter().any(|(c, _)| *c == name) {
                ranked.push((name, value));
                ranked.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(b.0)));
            }
        }
    }

    Ok(ranked
        .into_iter()
        .map(|(country, value)| RankingEntry {
            country: country.to_string(),
            mbti,
            value,
            pinned: pinned == Some(country),
        })
        .collect())
}
