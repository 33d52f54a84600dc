//! Network selection

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::WalletNavError;

/// Chain the wallet operates on
///
/// Address validation rules and block explorer defaults depend on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NetworkKind {
    Mainnet,
    Testnet,
}

impl NetworkKind {
    /// Default block explorer used for "see online" links
    pub fn default_explorer_url(&self) -> &'static str {
        match self {
            Self::Mainnet => "https://zcashblockexplorer.com/transactions/",
            Self::Testnet => "https://testnet.zcashblockexplorer.com/transactions/",
        }
    }
}

impl fmt::Display for NetworkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mainnet => write!(f, "mainnet"),
            Self::Testnet => write!(f, "testnet"),
        }
    }
}

impl FromStr for NetworkKind {
    type Err = WalletNavError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mainnet" | "main" => Ok(Self::Mainnet),
            "testnet" | "test" => Ok(Self::Testnet),
            other => Err(WalletNavError::Config(format!("unknown network '{}'", other))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_network() {
        assert_eq!("Mainnet".parse::<NetworkKind>().unwrap(), NetworkKind::Mainnet);
        assert_eq!(" testnet ".parse::<NetworkKind>().unwrap(), NetworkKind::Testnet);
        assert!("regtest".parse::<NetworkKind>().is_err());
    }

    #[test]
    fn test_display_round_trips_through_from_str() {
        for network in [NetworkKind::Mainnet, NetworkKind::Testnet] {
            assert_eq!(network.to_string().parse::<NetworkKind>().unwrap(), network);
        }
    }
}
