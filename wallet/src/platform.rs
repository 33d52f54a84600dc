//! In-process platform collaborators
//!
//! The host has no pasteboard and no browser; both collaborators just keep
//! what they were handed so the API can report it back.

use std::sync::{Mutex, MutexGuard};
use url::Url;
use zwallet_nav::{Clipboard, UrlOpener};

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[derive(Debug, Default)]
pub struct MemoryClipboard {
    contents: Mutex<Option<String>>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> Option<String> {
        lock(&self.contents).clone()
    }
}

impl Clipboard for MemoryClipboard {
    fn set_string(&self, text: &str) {
        log::debug!("Clipboard set ({} bytes)", text.len());
        *lock(&self.contents) = Some(text.to_string());
    }
}

/// Records every URL the user agreed to open
#[derive(Debug, Default)]
pub struct RecordingUrlOpener {
    opened: Mutex<Vec<Url>>,
}

impl RecordingUrlOpener {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn opened(&self) -> Vec<Url> {
        lock(&self.opened).clone()
    }
}

impl UrlOpener for RecordingUrlOpener {
    fn open_url(&self, url: &Url) {
        log::info!("🌍 Opening {}", url);
        lock(&self.opened).push(url.clone());
    }
}
