/// Host configuration from environment variables
///
/// Wraps the navigation core's [`NavConfig`] and adds what only the headless
/// host needs: where to listen, where the wallet event fixture lives, and how
/// the simulated scan progresses.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use zwallet_nav::NavConfig;

pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:3000";
pub const DEFAULT_SCAN_STEPS: u32 = 5;
pub const DEFAULT_SCAN_STEP_MS: u64 = 50;

#[derive(Clone, Debug)]
pub struct HostConfig {
    pub nav: NavConfig,
    pub bind_address: String,
    /// JSON array of wallet events served by the fixture synchronizer
    pub events_fixture: Option<PathBuf>,
    /// Number of `Scanning` statuses emitted before `Synced`
    pub scan_steps: u32,
    pub scan_step_interval: Duration,
}

impl HostConfig {
    /// Load configuration from environment variables
    ///
    /// Environment variables (in addition to those read by [`NavConfig::from_env`]):
    /// - `BIND_ADDRESS`: listen address (default `0.0.0.0:3000`)
    /// - `EVENTS_FIXTURE`: path of the wallet events JSON file (optional, empty wallet otherwise)
    /// - `SCAN_STEPS`: simulated scan steps before `Synced` (default 5)
    /// - `SCAN_STEP_MS`: delay between simulated scan steps (default 50)
    ///
    /// # Examples
    ///
    /// ```bash
    /// # Mainnet links, wallet events from a file
    /// ZCASH_NETWORK=mainnet EVENTS_FIXTURE=./events.json cargo run
    /// ```
    pub fn from_env() -> Self {
        let nav = NavConfig::from_env();

        // Use BIND_ADDRESS=127.0.0.1:3000 for local development
        let bind_address =
            env::var("BIND_ADDRESS").unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_string());

        let events_fixture = env::var("EVENTS_FIXTURE")
            .ok()
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);
        match &events_fixture {
            Some(path) => log::info!("📂 Wallet events fixture: {}", path.display()),
            None => log::warn!("⚠️  EVENTS_FIXTURE not set, serving an empty wallet"),
        }

        let scan_steps = env::var("SCAN_STEPS")
            .ok()
            .and_then(|raw| raw.trim().parse().ok())
            .unwrap_or(DEFAULT_SCAN_STEPS);
        let scan_step_ms = env::var("SCAN_STEP_MS")
            .ok()
            .and_then(|raw| raw.trim().parse().ok())
            .unwrap_or(DEFAULT_SCAN_STEP_MS);
        log::info!("🔄 Simulated scan: {} steps every {}ms", scan_steps, scan_step_ms);

        Self {
            nav,
            bind_address,
            events_fixture,
            scan_steps,
            scan_step_interval: Duration::from_millis(scan_step_ms),
        }
    }
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            nav: NavConfig::default(),
            bind_address: DEFAULT_BIND_ADDRESS.to_string(),
            events_fixture: None,
            scan_steps: DEFAULT_SCAN_STEPS,
            scan_step_interval: Duration::from_millis(DEFAULT_SCAN_STEP_MS),
        }
    }
}
