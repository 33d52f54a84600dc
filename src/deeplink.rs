//! Deep-link resolution
//!
//! Turns an untrusted `zcash:` URI handed over by the OS into a typed
//! [`Destination`]. Two path shapes are recognized:
//!
//! - `zcash:///home` resolves to [`Destination::Home`], whatever the query
//! - `zcash:///home/send?address=…&amount=…&memo=…` resolves to
//!   [`Destination::Send`] once the address and amount check out
//!
//! Resolution is pure: no I/O, no timers, no shared state. The same inputs
//! always produce the same result.
//!
//! # Example
//!
//! ```
//! use zwallet_nav::{resolve_deeplink, Destination, NetworkKind, Zatoshi};
//!
//! let accept_all = |_: &str, _: NetworkKind| true;
//! let destination = resolve_deeplink(
//!     "zcash:///home/send?address=t1gXqfSSQt6WfpwyuCU3Wi7sSVZ66DYQ3Po&memo=hello&amount=123000000",
//!     NetworkKind::Mainnet,
//!     &accept_all,
//! )?;
//!
//! assert_eq!(
//!     destination,
//!     Destination::Send {
//!         amount: Zatoshi(123_000_000),
//!         address: "t1gXqfSSQt6WfpwyuCU3Wi7sSVZ66DYQ3Po".to_string(),
//!         memo: "hello".to_string(),
//!     }
//! );
//! # Ok::<(), zwallet_nav::DeeplinkError>(())
//! ```

use percent_encoding::percent_decode_str;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use url::Url;

use crate::address::AddressValidator;
use crate::amount::Zatoshi;
use crate::error::DeeplinkError;
use crate::network::NetworkKind;

/// URI scheme registered with the OS
pub const DEEPLINK_SCHEME: &str = "zcash";

const HOME_PATH: &str = "/home";
const SEND_PATH: &str = "/home/send";

/// Resolved navigation target of a deep link
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Destination {
    Home,
    Send {
        amount: Zatoshi,
        address: String,
        memo: String,
    },
}

/// Resolve a deep-link URI against a network and address validator
///
/// For `/home/send` the address is checked before the amount, so a URI with
/// both fields broken reports [`DeeplinkError::InvalidAddress`].
pub fn resolve_deeplink(
    uri: &str,
    network: NetworkKind,
    validator: &dyn AddressValidator,
) -> Result<Destination, DeeplinkError> {
    let url = Url::parse(uri.trim())
        .map_err(|e| DeeplinkError::UnrecognizedDeeplink(format!("{}: {}", uri, e)))?;

    if url.scheme() != DEEPLINK_SCHEME {
        return Err(DeeplinkError::UnrecognizedDeeplink(format!(
            "unsupported scheme '{}'",
            url.scheme()
        )));
    }

    // `zcash://home` puts "home" in the host slot; only the empty authority form is accepted
    if url.host_str().map_or(false, |host| !host.is_empty()) {
        return Err(DeeplinkError::UnrecognizedDeeplink(uri.to_string()));
    }

    let path = url.path();
    let path = if path.len() > 1 {
        path.trim_end_matches('/')
    } else {
        path
    };

    match path {
        HOME_PATH => Ok(Destination::Home),
        SEND_PATH => resolve_send(&url, network, validator),
        _ => Err(DeeplinkError::UnrecognizedDeeplink(uri.to_string())),
    }
}

fn resolve_send(
    url: &Url,
    network: NetworkKind,
    validator: &dyn AddressValidator,
) -> Result<Destination, DeeplinkError> {
    let address = query_value(url, "address")?.unwrap_or_default();
    if address.is_empty() || !validator.is_valid(&address, network) {
        return Err(DeeplinkError::InvalidAddress(address));
    }

    let raw_amount = query_value(url, "amount")?.unwrap_or_default();
    let amount = parse_zatoshi(&raw_amount)
        .ok_or_else(|| DeeplinkError::MalformedAmount(raw_amount.clone()))?;

    let memo = query_value(url, "memo")?.unwrap_or_default();

    Ok(Destination::Send {
        amount,
        address,
        memo,
    })
}

/// First value for `key`, percent-decoded exactly
///
/// `+` stays a literal plus; only `%XX` escapes are decoded. A value that is
/// not UTF-8 once decoded makes the whole link unrecognized.
fn query_value(url: &Url, key: &str) -> Result<Option<String>, DeeplinkError> {
    let query = match url.query() {
        Some(query) => query,
        None => return Ok(None),
    };

    for pair in query.split('&').filter(|pair| !pair.is_empty()) {
        let (raw_key, raw_value) = pair.split_once('=').unwrap_or((pair, ""));
        if decode_component(raw_key)? != key {
            continue;
        }
        return decode_component(raw_value).map(Some);
    }

    Ok(None)
}

fn decode_component(raw: &str) -> Result<String, DeeplinkError> {
    percent_decode_str(raw)
        .decode_utf8()
        .map(|decoded| decoded.into_owned())
        .map_err(|e| DeeplinkError::UnrecognizedDeeplink(format!("'{}': {}", raw, e)))
}

/// Digits only; `u64::from_str` alone would also accept a leading `+`
fn parse_zatoshi(raw: &str) -> Option<Zatoshi> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse::<u64>().ok().map(Zatoshi)
}

/// Resolver bound to a network and a validator supplied by the caller
#[derive(Clone)]
pub struct DeeplinkResolver {
    network: NetworkKind,
    validator: Arc<dyn AddressValidator>,
}

impl DeeplinkResolver {
    pub fn new(network: NetworkKind, validator: Arc<dyn AddressValidator>) -> Self {
        Self { network, validator }
    }

    pub fn network(&self) -> NetworkKind {
        self.network
    }

    pub fn resolve(&self, uri: &str) -> Result<Destination, DeeplinkError> {
        resolve_deeplink(uri, self.network, self.validator.as_ref())
    }
}

impl std::fmt::Debug for DeeplinkResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeeplinkResolver")
            .field("network", &self.network)
            .finish_non_exhaustive()
    }
}
