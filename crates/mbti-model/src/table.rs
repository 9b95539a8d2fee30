use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::CountryRecord;

/// An ordered, immutable collection of [`CountryRecord`]s with unique
/// country names.
///
/// Duplicate names in the input are folded by summing their present shares,
/// keeping the first occurrence's position. After construction the table
/// never changes; every derived view is a fresh computed value, so
/// concurrent readers may share one table freely.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<CountryRecord>", into = "Vec<CountryRecord>")]
pub struct Table {
    records: Vec<CountryRecord>,
    index: HashMap<String, usize>,
}

impl Table {
    pub fn new(rows: Vec<CountryRecord>) -> Self {
        let mut records: Vec<CountryRecord> = Vec::with_capacity(rows.len());
        let mut index: HashMap<String, usize> = HashMap::with_capacity(rows.len());

        for row in rows {
            match index.get(&row.country) {
                Some(&at) => records[at].merge(&row),
                None => {
                    index.insert(row.country.clone(), records.len());
                    records.push(row);
                }
            }
        }

        Self { records, index }
    }

    /// Exact, case-sensitive lookup by country name.
    pub fn get(&self, country: &str) -> Option<&CountryRecord> {
        self.index.get(country).map(|&at| &self.records[at])
    }

    pub fn contains(&self, country: &str) -> bool {
        self.index.contains_key(country)
    }

    /// Records in load order.
    pub fn iter(&self) -> impl Iterator<Item = &CountryRecord> {
        self.records.iter()
    }

    /// Country names in load order.
    pub fn countries(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|r| r.country.as_str())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl From<Vec<CountryRecord>> for Table {
    fn from(rows: Vec<CountryRecord>) -> Self {
        Table::new(rows)
    }
}

impl From<Table> for Vec<CountryRecord> {
    fn from(table: Table) -> Self {
        table.records
    }
}

impl<'a> IntoIterator for &'a Table {
    type Item = &'a CountryRecord;
    type IntoIter = std::slice::Iter<'a, CountryRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
