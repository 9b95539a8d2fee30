use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{Color, DichotomyAxis};

/// The closed set of 16 MBTI personality types.
///
/// The declaration order is load-bearing: it fixes the color/legend
/// assignment and is the tie-break order for every ranked query, so it must
/// never be reordered.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MbtiType {
    INTJ,
    INTP,
    ENTJ,
    ENTP,
    INFJ,
    INFP,
    ENFJ,
    ENFP,
    ISTJ,
    ISFJ,
    ESTJ,
    ESFJ,
    ISTP,
    ISFP,
    ESTP,
    ESFP,
}

/// Per-type chart colors, indexed by [`MbtiType::index`].
const PALETTE: [Color; MbtiType::COUNT] = [
    Color::new_argb(0xFF1F77B4), // INTJ
    Color::new_argb(0xFFFF7F0E), // INTP
    Color::new_argb(0xFF2CA02C), // ENTJ
    Color::new_argb(0xFFD62728), // ENTP
    Color::new_argb(0xFF9467BD), // INFJ
    Color::new_argb(0xFF8C564B), // INFP
    Color::new_argb(0xFFE377C2), // ENFJ
    Color::new_argb(0xFF7F7F7F), // ENFP
    Color::new_argb(0xFFBCBD22), // ISTJ
    Color::new_argb(0xFF17BECF), // ISFJ
    Color::new_argb(0xFFAEC7E8), // ESTJ
    Color::new_argb(0xFFFFBB78), // ESFJ
    Color::new_argb(0xFF98DF8A), // ISTP
    Color::new_argb(0xFFFF9896), // ISFP
    Color::new_argb(0xFFC5B0D5), // ESTP
    Color::new_argb(0xFFC49C94), // ESFP
];

impl MbtiType {
    pub const COUNT: usize = 16;

    /// Every type in the fixed enumeration order.
    pub const ALL: [MbtiType; MbtiType::COUNT] = [
        MbtiType::INTJ,
        MbtiType::INTP,
        MbtiType::ENTJ,
        MbtiType::ENTP,
        MbtiType::INFJ,
        MbtiType::INFP,
        MbtiType::ENFJ,
        MbtiType::ENFP,
        MbtiType::ISTJ,
        MbtiType::ISFJ,
        MbtiType::ESTJ,
        MbtiType::ESFJ,
        MbtiType::ISTP,
        MbtiType::ISFP,
        MbtiType::ESTP,
        MbtiType::ESFP,
    ];

    /// Position within the fixed enumeration order (0..16).
    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<MbtiType> {
        MbtiType::ALL.get(index).copied()
    }

    /// The four-letter type code, e.g. `"INTJ"`.
    pub const fn code(self) -> &'static str {
        match self {
            MbtiType::INTJ => "INTJ",
            MbtiType::INTP => "INTP",
            MbtiType::ENTJ => "ENTJ",
            MbtiType::ENTP => "ENTP",
            MbtiType::INFJ => "INFJ",
            MbtiType::INFP => "INFP",
            MbtiType::ENFJ => "ENFJ",
            MbtiType::ENFP => "ENFP",
            MbtiType::ISTJ => "ISTJ",
            MbtiType::ISFJ => "ISFJ",
            MbtiType::ESTJ => "ESTJ",
            MbtiType::ESFJ => "ESFJ",
            MbtiType::ISTP => "ISTP",
            MbtiType::ISFP => "ISFP",
            MbtiType::ESTP => "ESTP",
            MbtiType::ESFP => "ESFP",
        }
    }

    /// The pole letter this type carries on `axis`.
    ///
    /// Type codes spell the four dichotomies in a fixed position order
    /// (`E/I`, `S/N`, `T/F`, `J/P`), so the letter is read straight out of
    /// the code.
    pub fn pole_letter(self, axis: DichotomyAxis) -> char {
        self.code().as_bytes()[axis.code_position()] as char
    }

    /// Fixed chart color for this type.
    pub const fn color(self) -> Color {
        PALETTE[self as usize]
    }
}

impl fmt::Display for MbtiType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Unknown MBTI type code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown MBTI type: {0:?}")]
pub struct ParseMbtiTypeError(pub String);

impl FromStr for MbtiType {
    type Err = ParseMbtiTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        MbtiType::ALL
            .iter()
            .copied()
            .find(|t| t.code().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ParseMbtiTypeError(s.to_string()))
    }
}
