use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use mbti_model::{MbtiType, Table};

use crate::QueryError;

/// One type's share of a single country, possibly missing.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeShare {
    pub mbti: MbtiType,
    pub share: Option<f64>,
}

/// One type's mean share across all countries.
///
/// `mean` is `None` when the column had no present values at all — the
/// caller must surface that rather than render a zero.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeMean {
    pub mbti: MbtiType,
    pub mean: Option<f64>,
}

/// Sorts present values non-increasing with enumeration-order tie-break;
/// missing entries go after all present ones, in enumeration order.
fn share_order(a: (MbtiType, Option<f64>), b: (MbtiType, Option<f64>)) -> Ordering {
    match (a.1, b.1) {
        (Some(x), Some(y)) => y
            .total_cmp(&x)
            .then_with(|| a.0.index().cmp(&b.0.index())),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.0.index().cmp(&b.0.index()),
    }
}

/// All 16 `(type, share)` entries for one country, sorted by share
/// descending.
///
/// Ties break toward the enumeration-earlier type; missing shares sort
/// last. Errors with [`QueryError::CountryNotFound`] for unknown names.
pub fn distribution(table: &Table, country: &str) -> Result<Vec<TypeShare>, QueryError> {
    let record = table
        .get(country)
        .ok_or_else(|| QueryError::CountryNotFound(country.to_string()))?;

    let mut entries: Vec<TypeShare> = record
        .shares()
        .map(|(mbti, share)| TypeShare { mbti, share })
        .collect();
    entries.sort_by(|a, b| share_order((a.mbti, a.share), (b.mbti, b.share)));
    Ok(entries)
}

/// Column-wise arithmetic means across all countries, sorted descending.
///
/// Missing cells are excluded from each column's mean (mean over present
/// values only). A column with zero present values yields `mean: None` and
/// a warning, never `0.0`.
pub fn global_averages(table: &Table) -> Vec<TypeMean> {
    let mut entries: Vec<TypeMean> = MbtiType::ALL
        .into_iter()
        .map(|mbti| {
            let mut sum = 0.0;
            let mut count: usize = 0;
            for record in table {
                if let Some(v) = record.share(mbti) {
                    sum += v;
                    count += 1;
                }
            }
            let mean = if count == 0 {
                log::warn!(
                    "column {mbti} has no present values across {} countries",
                    table.len()
                );
                None
            } else {
                Some(sum / count as f64)
            };
            TypeMean { mbti, mean }
        })
        .collect();

    entries.sort_by(|a, b| share_order((a.mbti, a.mean), (b.mbti, b.mean)));
    entries
}
