/// Process-wide window chrome owned by the detail overlay while it is shown:
/// the dismissal-key listener and the background scroll lock.
///
/// Both are taken together through [`Chrome::acquire`] and given back when
/// the returned [`ChromeLease`] is released or dropped. Only one lease can
/// exist at a time.
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use iced::keyboard::key::Named;

use crate::error::{GalleryError, Result};

#[derive(Debug, Default)]
struct ChromeState {
    dismiss_key: Option<Named>,
    scroll_locked: bool,
    acquisitions: usize,
    releases: usize,
}

/// Handle to the shared chrome. Clones observe the same state.
#[derive(Debug, Clone, Default)]
pub struct Chrome {
    inner: Arc<Mutex<ChromeState>>,
}

impl Chrome {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, ChromeState> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Register `key` as the dismissal key and lock background scrolling.
    pub fn acquire(&self, key: Named) -> Result<ChromeLease> {
        let mut state = self.state();
        if state.dismiss_key.is_some() || state.scroll_locked {
            return Err(GalleryError::ChromeBusy);
        }
        state.dismiss_key = Some(key);
        state.scroll_locked = true;
        state.acquisitions += 1;
        tracing::debug!(?key, "key listener registered, scroll locked");

        Ok(ChromeLease {
            chrome: self.clone(),
            released: false,
        })
    }

    /// The key currently listened for, if a lease is held
    pub fn dismiss_key(&self) -> Option<Named> {
        self.state().dismiss_key
    }

    pub fn is_scroll_locked(&self) -> bool {
        self.state().scroll_locked
    }

    /// Number of leases ever granted
    pub fn acquisitions(&self) -> usize {
        self.state().acquisitions
    }

    /// Number of leases ever given back
    pub fn releases(&self) -> usize {
        self.state().releases
    }

    fn release(&self) {
        let mut state = self.state();
        state.dismiss_key = None;
        state.scroll_locked = false;
        state.releases += 1;
        tracing::debug!("key listener removed, scroll restored");
    }
}

/// Exclusive ownership of the chrome. Gives it back exactly once.
#[derive(Debug)]
pub struct ChromeLease {
    chrome: Chrome,
    released: bool,
}

impl ChromeLease {
    pub fn release(mut self) {
        self.release_once();
    }

    fn release_once(&mut self) {
        if !self.released {
            self.released = true;
            self.chrome.release();
        }
    }
}

impl Drop for ChromeLease {
    fn drop(&mut self) {
        self.release_once();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_acquire_and_release() {
        let chrome = Chrome::new();
        assert!(!chrome.is_scroll_locked());
        assert_eq!(chrome.dismiss_key(), None);

        let lease = chrome.acquire(Named::Escape).unwrap();
        assert!(chrome.is_scroll_locked());
        assert_eq!(chrome.dismiss_key(), Some(Named::Escape));

        lease.release();
        assert!(!chrome.is_scroll_locked());
        assert_eq!(chrome.dismiss_key(), None);
        assert_eq!(chrome.acquisitions(), 1);
        assert_eq!(chrome.releases(), 1);
    }

    #[test]
    fn test_lease_is_exclusive() {
        let chrome = Chrome::new();
        let _lease = chrome.acquire(Named::Escape).unwrap();

        let second = chrome.acquire(Named::Escape);
        assert_eq!(second.err(), Some(GalleryError::ChromeBusy));
        assert_eq!(chrome.acquisitions(), 1);
    }

    #[test]
    fn test_drop_releases_once() {
        let chrome = Chrome::new();
        {
            let _lease = chrome.acquire(Named::Escape).unwrap();
        }
        assert!(!chrome.is_scroll_locked());
        assert_eq!(chrome.releases(), 1);

        // Explicit release consumes the lease, so Drop must not count again
        let lease = chrome.acquire(Named::Escape).unwrap();
        lease.release();
        assert_eq!(chrome.acquisitions(), 2);
        assert_eq!(chrome.releases(), 2);
    }
}
