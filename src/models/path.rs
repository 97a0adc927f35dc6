use std::fmt;

use serde::{ Deserialize, Serialize };
use smallvec::SmallVec;

use super::currency::Currency;

/// Inline capacity covers every hop count this search is practical for
pub type Stops = SmallVec<[Currency; 8]>;

/// Ordered intermediate stops of a conversion cycle. The base currency is the
/// implicit start and end and is not listed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Path(pub Stops);

impl Path {
    pub fn empty() -> Self {
        Self(SmallVec::new())
    }

    #[inline]
    pub fn hops(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn stops(&self) -> &[Currency] {
        &self.0
    }

    /// Full cycle including the base currency at both ends
    pub fn route(&self, base: Currency) -> Vec<Currency> {
        let mut route = Vec::with_capacity(self.hops() + 2);
        route.push(base);
        route.extend_from_slice(&self.0);
        route.push(base);
        route
    }
}

impl From<&[Currency]> for Path {
    fn from(stops: &[Currency]) -> Self {
        Self(SmallVec::from_slice(stops))
    }
}

impl<const N: usize> From<[Currency; N]> for Path {
    fn from(stops: [Currency; N]) -> Self {
        Self(stops.into_iter().collect())
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, currency) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", currency)?;
        }
        write!(f, "]")
    }
}

/// Winning path of a search together with its compounded score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArbitragePath {
    pub path: Path,
    pub score: f64,
}

impl ArbitragePath {
    #[inline]
    pub fn is_profitable(&self) -> bool {
        self.score > 1.0
    }

    #[inline]
    pub fn profit_percentage(&self) -> f64 {
        (self.score - 1.0) * 100.0
    }
}
