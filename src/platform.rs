//! Platform collaborators consumed by the aggregator

use url::Url;

pub trait Clipboard: Send + Sync {
    fn set_string(&self, text: &str);
}

/// Leaves the app for an external URL
pub trait UrlOpener: Send + Sync {
    fn open_url(&self, url: &Url);
}
