/// Navigation core configuration from environment variables
///
/// Controls network selection, the sync-status throttle window and event
/// presentation defaults. Defaults to testnet.

use std::env;
use std::time::Duration;
use url::Url;

use crate::network::NetworkKind;
use crate::send::DEFAULT_MEMO_CHAR_LIMIT;

pub const DEFAULT_THROTTLE_MS: u64 = 200;
pub const DEFAULT_REQUIRED_CONFIRMATIONS: u32 = 10;

#[derive(Clone, Debug)]
pub struct NavConfig {
    /// Network deep-link addresses are validated against
    pub network: NetworkKind,
    /// Window of the trailing-edge throttle on synchronizer statuses
    pub throttle_interval: Duration,
    /// Confirmations before an event counts as settled
    pub required_confirmations: u32,
    /// Base URL that transaction ids are appended to for "see online"
    pub explorer_url: String,
    pub memo_char_limit: usize,
}

impl NavConfig {
    /// Load configuration from environment variables
    ///
    /// Environment variables:
    /// - `ZCASH_NETWORK`: "testnet" (default) or "mainnet"
    /// - `SYNC_THROTTLE_MS`: throttle window in milliseconds (default 200)
    /// - `REQUIRED_CONFIRMATIONS`: default 10
    /// - `BLOCK_EXPLORER_URL`: explorer base URL (defaults per network)
    /// - `MEMO_CHAR_LIMIT`: default 512
    ///
    /// Unparseable values are logged and replaced by their defaults.
    pub fn from_env() -> Self {
        let network = match env::var("ZCASH_NETWORK") {
            Ok(value) => value.parse().unwrap_or_else(|e| {
                log::warn!("⚠️  {}, defaulting to testnet", e);
                NetworkKind::Testnet
            }),
            Err(_) => NetworkKind::Testnet,
        };
        log::info!("🌐 Using {} network", network);

        let throttle_ms = parse_or("SYNC_THROTTLE_MS", DEFAULT_THROTTLE_MS);
        log::info!("⏱  Sync status throttle: {}ms", throttle_ms);

        let required_confirmations =
            parse_or("REQUIRED_CONFIRMATIONS", DEFAULT_REQUIRED_CONFIRMATIONS);

        let explorer_url = env::var("BLOCK_EXPLORER_URL")
            .ok()
            .and_then(|raw| match Url::parse(&raw) {
                Ok(_) => Some(raw),
                Err(e) => {
                    log::warn!("⚠️  Invalid BLOCK_EXPLORER_URL '{}': {}", raw, e);
                    None
                }
            })
            .unwrap_or_else(|| default_explorer(network));
        log::info!("🔗 Block explorer: {}", explorer_url);

        let memo_char_limit = parse_or("MEMO_CHAR_LIMIT", DEFAULT_MEMO_CHAR_LIMIT);

        Self {
            network,
            throttle_interval: Duration::from_millis(throttle_ms),
            required_confirmations,
            explorer_url,
            memo_char_limit,
        }
    }

    /// Default configuration for a given network
    pub fn for_network(network: NetworkKind) -> Self {
        Self {
            network,
            explorer_url: default_explorer(network),
            ..Default::default()
        }
    }
}

impl Default for NavConfig {
    /// Default configuration (testnet)
    fn default() -> Self {
        Self {
            network: NetworkKind::Testnet,
            throttle_interval: Duration::from_millis(DEFAULT_THROTTLE_MS),
            required_confirmations: DEFAULT_REQUIRED_CONFIRMATIONS,
            explorer_url: default_explorer(NetworkKind::Testnet),
            memo_char_limit: DEFAULT_MEMO_CHAR_LIMIT,
        }
    }
}

fn default_explorer(network: NetworkKind) -> String {
    network.default_explorer_url().to_string()
}

fn parse_or<T: std::str::FromStr + std::fmt::Display + Copy>(key: &str, default: T) -> T {
    match env::var(key) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            log::warn!("⚠️  Invalid {} '{}', using {}", key, raw, default);
            default
        }),
        Err(_) => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_testnet() {
        let config = NavConfig::default();
        assert_eq!(config.network, NetworkKind::Testnet);
        assert_eq!(config.throttle_interval, Duration::from_millis(200));
        assert_eq!(config.required_confirmations, 10);
        assert_eq!(config.memo_char_limit, 512);
    }

    #[test]
    fn test_explorer_follows_network() {
        let mainnet = NavConfig::for_network(NetworkKind::Mainnet);
        assert_eq!(
            mainnet.explorer_url,
            "https://zcashblockexplorer.com/transactions/"
        );

        let testnet = NavConfig::for_network(NetworkKind::Testnet);
        assert!(testnet.explorer_url.starts_with("https://testnet."));
    }
}
