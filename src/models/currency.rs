use serde::{ Deserialize, Serialize };
use strum::EnumCount;
use strum_macros::{ AsRefStr, Display, EnumCount, EnumIter, EnumString };

/// One of the tradable currencies. Declaration order is the index order used
/// by the rate matrix and the order in which candidate paths are enumerated.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    EnumCount,
    AsRefStr
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum Currency {
    Snowball,
    Pizza,
    SiliconNugget,
    Shell,
}

impl Currency {
    /// All currencies in declaration order
    pub const ALL: [Currency; Currency::COUNT] = [
        Currency::Snowball,
        Currency::Pizza,
        Currency::SiliconNugget,
        Currency::Shell,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[inline]
    pub fn from_index(index: usize) -> Option<Currency> {
        Self::ALL.get(index).copied()
    }
}
