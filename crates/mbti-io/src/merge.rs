use std::collections::HashMap;

use mbti_model::MbtiType;

/// Declarative mapping from raw CSV column headers to canonical MBTI types.
///
/// Several source files split each type into trait variants (`INTJ-T`,
/// `INTJ-A`); columns mapped to the same type are folded by summation per
/// row. Lookups are case-insensitive and ignore surrounding whitespace.
#[derive(Clone, Debug)]
pub struct ColumnMergeRule {
    map: HashMap<String, MbtiType>,
}

impl ColumnMergeRule {
    /// An empty rule. Only useful as a base for [`ColumnMergeRule::insert`].
    pub fn empty() -> Self {
        Self {
            map: HashMap::new(),
        }
    }

    /// Maps each bare type code plus the given suffixed forms, e.g.
    /// `with_suffixes(&["-T", "-A"])` maps `INTJ`, `INTJ-T` and `INTJ-A`
    /// to [`MbtiType::INTJ`].
    pub fn with_suffixes(suffixes: &[&str]) -> Self {
        let mut rule = Self::empty();
        for mbti in MbtiType::ALL {
            rule.insert(mbti.code(), mbti);
            for suffix in suffixes {
                rule.insert(format!("{}{}", mbti.code(), suffix), mbti);
            }
        }
        rule
    }

    pub fn insert(&mut self, raw_header: impl AsRef<str>, mbti: MbtiType) {
        self.map
            .insert(Self::normalize(raw_header.as_ref()), mbti);
    }

    /// The canonical type for a raw header, if the rule covers it.
    pub fn resolve(&self, raw_header: &str) -> Option<MbtiType> {
        self.map.get(&Self::normalize(raw_header)).copied()
    }

    fn normalize(header: &str) -> String {
        header.trim().to_ascii_uppercase()
    }
}

impl Default for ColumnMergeRule {
    /// The rule used by the known source files: bare codes plus `-T`
    /// (turbulent) and `-A` (assertive) suffixed variants.
    fn default() -> Self {
        Self::with_suffixes(&["-T", "-A"])
    }
}
