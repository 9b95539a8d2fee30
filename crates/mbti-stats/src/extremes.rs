use serde::{Deserialize, Serialize};

use mbti_model::{CountryRecord, MbtiType, Table};

use crate::QueryError;

/// Tie policy for dominant/least-dominant extraction.
///
/// Downstream map coloring assumes exactly one label per country, so the
/// policy must be deterministic: `First` picks the enumeration-earlier type
/// among equals, `Last` the later one.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TieBreak {
    #[default]
    First,
    Last,
}

/// Which end of a country's distribution to extract.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Extreme {
    Most,
    Least,
}

/// Per-type country counts, with all 16 keys always present.
///
/// Zero counts are included so legends render a stable 16-category set
/// regardless of the data.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeCounts([u32; MbtiType::COUNT]);

impl TypeCounts {
    pub fn get(&self, mbti: MbtiType) -> u32 {
        self.0[mbti.index()]
    }

    /// `(type, count)` pairs in enumeration order — always 16 of them.
    pub fn iter(&self) -> impl Iterator<Item = (MbtiType, u32)> + '_ {
        MbtiType::ALL.into_iter().map(|t| (t, self.0[t.index()]))
    }

    /// Total countries counted. Equals the number of countries with at
    /// least one present value.
    pub fn total(&self) -> u32 {
        self.0.iter().sum()
    }
}

/// Stable argmax/argmin over a record's present shares.
fn extreme_of_record(record: &CountryRecord, extreme: Extreme, tie: TieBreak) -> Option<MbtiType> {
    let mut best: Option<(MbtiType, f64)> = None;
    for (mbti, share) in record.shares() {
        let Some(value) = share else { continue };
        let replace = match &best {
            None => true,
            Some((_, current)) => {
                let wins = match extreme {
                    Extreme::Most => value > *current,
                    Extreme::Least => value < *current,
                };
                // On exact ties the enumeration-later type only wins under
                // the `Last` policy.
                wins || (tie == TieBreak::Last && value == *current)
            }
        };
        if replace {
            best = Some((mbti, value));
        }
    }
    best.map(|(mbti, _)| mbti)
}

fn extreme_type(
    table: &Table,
    country: &str,
    extreme: Extreme,
    tie: TieBreak,
) -> Result<MbtiType, QueryError> {
    let record = table
        .get(country)
        .ok_or_else(|| QueryError::CountryNotFound(country.to_string()))?;
    extreme_of_record(record, extreme, tie)
        .ok_or_else(|| QueryError::NoPresentValues(country.to_string()))
}

/// The type with the maximum share for `country`.
pub fn dominant_type(table: &Table, country: &str, tie: TieBreak) -> Result<MbtiType, QueryError> {
    extreme_type(table, country, Extreme::Most, tie)
}

/// The type with the minimum share for `country`.
pub fn least_dominant_type(
    table: &Table,
    country: &str,
    tie: TieBreak,
) -> Result<MbtiType, QueryError> {
    extreme_type(table, country, Extreme::Least, tie)
}

/// How many countries have each type as their (least-)dominant one.
///
/// Countries with no present values contribute nothing and are logged;
/// every other country contributes exactly one count, so
/// [`TypeCounts::total`] equals the number of countries with data.
pub fn dominant_type_counts(table: &Table, extreme: Extreme) -> TypeCounts {
    let mut counts = TypeCounts::default();
    for record in table {
        match extreme_of_record(record, extreme, TieBreak::First) {
            Some(mbti) => counts.0[mbti.index()] += 1,
            None => log::warn!(
                "country {:?} has no present values, skipping in counts",
                record.country
            ),
        }
    }
    counts
}
