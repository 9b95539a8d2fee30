use core::fmt;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// An ARGB color.
///
/// Serialized as a `#AARRGGBB` hex string for IPC friendliness.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub argb: u32,
}

impl Color {
    pub const fn new_argb(argb: u32) -> Self {
        Self { argb }
    }

    /// Opaque red, used to highlight a pinned entry in ranked charts.
    pub const fn red() -> Self {
        Self { argb: 0xFFFF0000 }
    }

    fn to_hex(self) -> String {
        format!("#{:08X}", self.argb)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        let hex = s
            .strip_prefix('#')
            .ok_or_else(|| D::Error::custom(format!("expected #AARRGGBB color, got {s:?}")))?;
        if hex.len() != 8 {
            return Err(D::Error::custom(format!(
                "expected 8 hex digits in color, got {s:?}"
            )));
        }
        let argb = u32::from_str_radix(hex, 16)
            .map_err(|e| D::Error::custom(format!("invalid color {s:?}: {e}")))?;
        Ok(Color { argb })
    }
}
