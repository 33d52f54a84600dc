//! zwallet-host: headless host for the wallet navigation core
//!
//! Wires `zwallet-nav` to a fixture-backed synchronizer and in-memory
//! platform collaborators, and exposes navigation and wallet events over an
//! HTTP/JSON API.

pub mod api;
pub mod config;
pub mod error;
pub mod fixture;
pub mod manager;
pub mod platform;

pub use config::HostConfig;
pub use error::{FixtureError, HostError};
pub use fixture::FixtureSynchronizer;
pub use manager::AppManager;
pub use platform::{MemoryClipboard, RecordingUrlOpener};
