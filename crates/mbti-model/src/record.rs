use serde::{Deserialize, Serialize};

use crate::MbtiType;

/// One table row: a country and its 16 per-type percentage shares.
///
/// A missing share is `None`, never `0.0`. Source files routinely contain
/// non-numeric cells, and downstream aggregation must be able to exclude
/// them from sums and extrema instead of silently diluting results.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CountryRecord {
    pub country: String,
    shares: [Option<f64>; MbtiType::COUNT],
}

impl CountryRecord {
    /// A record with every share missing.
    pub fn new(country: impl Into<String>) -> Self {
        Self {
            country: country.into(),
            shares: [None; MbtiType::COUNT],
        }
    }

    pub fn share(&self, mbti: MbtiType) -> Option<f64> {
        self.shares[mbti.index()]
    }

    pub fn set_share(&mut self, mbti: MbtiType, value: f64) {
        self.shares[mbti.index()] = Some(value);
    }

    /// Adds `value` into the share for `mbti`, treating a missing slot as
    /// absent rather than zero: the result is `value` when the slot was
    /// missing, and the sum otherwise.
    ///
    /// This is how duplicate raw columns (`INTJ-T` + `INTJ-A`) and duplicate
    /// country rows fold together.
    pub fn merge_share(&mut self, mbti: MbtiType, value: f64) {
        let slot = &mut self.shares[mbti.index()];
        *slot = Some(slot.unwrap_or(0.0) + value);
    }

    /// Folds every present share of `other` into this record.
    pub(crate) fn merge(&mut self, other: &CountryRecord) {
        for mbti in MbtiType::ALL {
            if let Some(v) = other.share(mbti) {
                self.merge_share(mbti, v);
            }
        }
    }

    /// Sum of the present shares. For a well-formed record this is ≈100,
    /// but rows folded from duplicates or with missing cells may deviate.
    pub fn present_sum(&self) -> f64 {
        self.shares.iter().flatten().sum()
    }

    /// Whether at least one share is present.
    pub fn has_data(&self) -> bool {
        self.shares.iter().any(Option::is_some)
    }

    /// `(type, share)` pairs in enumeration order, including missing ones.
    pub fn shares(&self) -> impl Iterator<Item = (MbtiType, Option<f64>)> + '_ {
        MbtiType::ALL.into_iter().map(|t| (t, self.share(t)))
    }
}
