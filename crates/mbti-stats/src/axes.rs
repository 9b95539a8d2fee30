use serde::{Deserialize, Serialize};

use mbti_model::{DichotomyAxis, Table};

use crate::QueryError;

/// A country's rollup onto one dichotomy axis.
///
/// `first` and `second` follow the axis's naming order (`E` before `I`,
/// `S` before `N`, …). Each pole sums the 8 relevant present shares;
/// missing shares are excluded, so the poles only sum to ≈100 for complete
/// records. A pole with no present values at all is `None`.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisShares {
    pub axis: DichotomyAxis,
    pub first: Option<f64>,
    pub second: Option<f64>,
}

impl AxisShares {
    /// The share for a pole by its letter, e.g. `'N'` on the S/N axis.
    pub fn pole(&self, letter: char) -> Option<f64> {
        let (a, b) = self.axis.pole_letters();
        if letter == a {
            self.first
        } else if letter == b {
            self.second
        } else {
            None
        }
    }
}

/// Sums a country's shares onto the two poles of `axis`.
pub fn dichotomy_aggregate(
    table: &Table,
    country: &str,
    axis: DichotomyAxis,
) -> Result<AxisShares, QueryError> {
    let record = table
        .get(country)
        .ok_or_else(|| QueryError::CountryNotFound(country.to_string()))?;

    let (a, _) = axis.pole_letters();
    let mut first: Option<f64> = None;
    let mut second: Option<f64> = None;
    for (mbti, share) in record.shares() {
        let Some(value) = share else { continue };
        let pole = if mbti.pole_letter(axis) == a {
            &mut first
        } else {
            &mut second
        };
        *pole = Some(pole.unwrap_or(0.0) + value);
    }

    Ok(AxisShares {
        axis,
        first,
        second,
    })
}
