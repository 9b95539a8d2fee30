use std::fmt;

use serde::{Deserialize, Serialize};

use crate::MbtiType;

/// One of the four MBTI dichotomy dimensions.
///
/// Each axis splits the 16 types into two disjoint 8-type poles; a country's
/// shares for one pole plus the other add up to its full distribution.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DichotomyAxis {
    /// Extroversion / Introversion.
    Ei,
    /// Sensing / Intuition.
    Sn,
    /// Thinking / Feeling.
    Tf,
    /// Judging / Perceiving.
    Jp,
}

impl DichotomyAxis {
    pub const ALL: [DichotomyAxis; 4] = [
        DichotomyAxis::Ei,
        DichotomyAxis::Sn,
        DichotomyAxis::Tf,
        DichotomyAxis::Jp,
    ];

    /// The two pole letters in the axis's naming order, e.g. `('E', 'I')`.
    pub const fn pole_letters(self) -> (char, char) {
        match self {
            DichotomyAxis::Ei => ('E', 'I'),
            DichotomyAxis::Sn => ('S', 'N'),
            DichotomyAxis::Tf => ('T', 'F'),
            DichotomyAxis::Jp => ('J', 'P'),
        }
    }

    /// Index of this axis's letter within a four-letter type code.
    pub const fn code_position(self) -> usize {
        match self {
            DichotomyAxis::Ei => 0,
            DichotomyAxis::Sn => 1,
            DichotomyAxis::Tf => 2,
            DichotomyAxis::Jp => 3,
        }
    }

    /// Human-readable axis label, e.g. `"E/I"`.
    pub const fn label(self) -> &'static str {
        match self {
            DichotomyAxis::Ei => "E/I",
            DichotomyAxis::Sn => "S/N",
            DichotomyAxis::Tf => "T/F",
            DichotomyAxis::Jp => "J/P",
        }
    }

    /// All types carrying the given pole letter of this axis.
    pub fn pole_members(self, letter: char) -> impl Iterator<Item = MbtiType> {
        MbtiType::ALL
            .into_iter()
            .filter(move |t| t.pole_letter(self) == letter)
    }
}

impl fmt::Display for DichotomyAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
