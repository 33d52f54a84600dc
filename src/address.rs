//! Address validation
//!
//! The resolver consumes an [`AddressValidator`] supplied by the caller. Any
//! closure `Fn(&str, NetworkKind) -> bool` qualifies, which keeps test doubles
//! to a single line. [`StructuralAddressValidator`] is a lightweight default
//! that checks encoding shape only; it never decodes keys or verifies
//! checksums.

use crate::network::NetworkKind;

/// Capability to decide whether an address belongs to a network
pub trait AddressValidator: Send + Sync {
    fn is_valid(&self, address: &str, network: NetworkKind) -> bool;
}

impl<F> AddressValidator for F
where
    F: Fn(&str, NetworkKind) -> bool + Send + Sync,
{
    fn is_valid(&self, address: &str, network: NetworkKind) -> bool {
        self(address, network)
    }
}

const BASE58_ALPHABET: &str = "123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";
const BECH32_CHARSET: &str = "qpzry9x8gf2tvdw0s3jn54khce6mua7l";

/// Length of a base58check-encoded transparent address
const TRANSPARENT_LEN: usize = 35;
/// Data part length of a bech32 Sapling payment address (43 bytes + checksum)
const SAPLING_DATA_LEN: usize = 75;
/// Shortest data part accepted for a unified address
const UNIFIED_MIN_DATA_LEN: usize = 100;

/// Shape-only validator for transparent, Sapling and unified addresses
#[derive(Debug, Clone, Copy, Default)]
pub struct StructuralAddressValidator;

impl StructuralAddressValidator {
    pub fn new() -> Self {
        Self
    }

    fn transparent_prefixes(network: NetworkKind) -> &'static [&'static str] {
        match network {
            NetworkKind::Mainnet => &["t1", "t3"],
            NetworkKind::Testnet => &["tm", "t2"],
        }
    }

    fn sapling_hrp(network: NetworkKind) -> &'static str {
        match network {
            NetworkKind::Mainnet => "zs",
            NetworkKind::Testnet => "ztestsapling",
        }
    }

    fn unified_hrp(network: NetworkKind) -> &'static str {
        match network {
            NetworkKind::Mainnet => "u",
            NetworkKind::Testnet => "utest",
        }
    }

    fn is_transparent(address: &str, network: NetworkKind) -> bool {
        address.len() == TRANSPARENT_LEN
            && Self::transparent_prefixes(network)
                .iter()
                .any(|prefix| address.starts_with(prefix))
            && address.chars().all(|c| BASE58_ALPHABET.contains(c))
    }

    /// Splits `hrp1data` and checks the data part against the bech32 charset
    fn bech32_data<'a>(address: &'a str, hrp: &str) -> Option<&'a str> {
        let data = address.strip_prefix(hrp)?.strip_prefix('1')?;
        if data.chars().all(|c| BECH32_CHARSET.contains(c)) {
            Some(data)
        } else {
            None
        }
    }

    fn is_sapling(address: &str, network: NetworkKind) -> bool {
        Self::bech32_data(address, Self::sapling_hrp(network))
            .map(|data| data.len() == SAPLING_DATA_LEN)
            .unwrap_or(false)
    }

    fn is_unified(address: &str, network: NetworkKind) -> bool {
        Self::bech32_data(address, Self::unified_hrp(network))
            .map(|data| data.len() >= UNIFIED_MIN_DATA_LEN)
            .unwrap_or(false)
    }
}

impl AddressValidator for StructuralAddressValidator {
    fn is_valid(&self, address: &str, network: NetworkKind) -> bool {
        Self::is_transparent(address, network)
            || Self::is_sapling(address, network)
            || Self::is_unified(address, network)
    }
}
