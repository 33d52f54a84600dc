//! Currency amounts in zatoshi

use serde::{Deserialize, Serialize};
use std::fmt;

/// Zatoshi per whole coin
pub const ZATOSHI_PER_ZEC: u64 = 100_000_000;

/// Amount denominated in the smallest indivisible currency unit
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Zatoshi(pub u64);

impl Zatoshi {
    pub const ZERO: Zatoshi = Zatoshi(0);

    pub fn new(amount: u64) -> Self {
        Self(amount)
    }

    pub fn amount(&self) -> u64 {
        self.0
    }

    /// Decimal representation in whole coins, trailing zeros trimmed
    ///
    /// `123_000_000` renders as `"1.23"`, `100_000_000` as `"1"`.
    pub fn to_zec_string(&self) -> String {
        let whole = self.0 / ZATOSHI_PER_ZEC;
        let fraction = self.0 % ZATOSHI_PER_ZEC;
        if fraction == 0 {
            return whole.to_string();
        }
        let fraction = format!("{:08}", fraction);
        format!("{}.{}", whole, fraction.trim_end_matches('0'))
    }
}

impl From<u64> for Zatoshi {
    fn from(amount: u64) -> Self {
        Self(amount)
    }
}

impl fmt::Display for Zatoshi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} zat", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zec_string() {
        assert_eq!(Zatoshi(123_000_000).to_zec_string(), "1.23");
        assert_eq!(Zatoshi(100_000_000).to_zec_string(), "1");
        assert_eq!(Zatoshi(1).to_zec_string(), "0.00000001");
        assert_eq!(Zatoshi::ZERO.to_zec_string(), "0");
    }
}
