/// Detail overlay state: the selected record and its visibility.
///
/// While a record is shown the overlay owns the window chrome lease. Every
/// way of closing goes through [`OverlayState::close`], which drops the
/// session and with it the lease.
use iced::keyboard::{key::Named, Key};

use super::chrome::{Chrome, ChromeLease};
use super::data::ImageRecord;
use crate::error::Result;

/// Key that dismisses the overlay
pub const DISMISS_KEY: Named = Named::Escape;

/// Input events the overlay reacts to
#[derive(Debug, Clone, PartialEq)]
pub enum OverlayEvent {
    /// The explicit close button
    CloseControl,
    /// A press on the dimmed area around the content panel
    BackdropClick,
    /// A press inside the content panel; never closes
    ContentClick,
    /// A key press delivered by the key listener
    Key(Key),
}

/// How the overlay was dismissed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseReason {
    Control,
    Backdrop,
    Key,
}

#[derive(Debug)]
struct Session {
    record: ImageRecord,
    _lease: ChromeLease,
}

#[derive(Debug)]
pub struct OverlayState {
    chrome: Chrome,
    session: Option<Session>,
}

impl OverlayState {
    pub fn new(chrome: Chrome) -> Self {
        Self {
            chrome,
            session: None,
        }
    }

    /// Show `record`. Replaces the record if already visible.
    pub fn select(&mut self, record: ImageRecord) -> Result<()> {
        match &mut self.session {
            Some(session) => session.record = record,
            None => {
                let lease = self.chrome.acquire(DISMISS_KEY)?;
                self.session = Some(Session {
                    record,
                    _lease: lease,
                });
            }
        }
        Ok(())
    }

    /// Hide the overlay and give back the chrome. No-op when hidden.
    pub fn close(&mut self) -> bool {
        self.session.take().is_some()
    }

    /// Apply an input event. Returns the close reason when it closed the overlay.
    pub fn handle(&mut self, event: OverlayEvent) -> Option<CloseReason> {
        if !self.is_visible() {
            return None;
        }

        let reason = match event {
            OverlayEvent::CloseControl => CloseReason::Control,
            OverlayEvent::BackdropClick => CloseReason::Backdrop,
            OverlayEvent::ContentClick => return None,
            OverlayEvent::Key(Key::Named(named)) if named == DISMISS_KEY => CloseReason::Key,
            OverlayEvent::Key(_) => return None,
        };

        self.close();
        Some(reason)
    }

    pub fn selected(&self) -> Option<&ImageRecord> {
        self.session.as_ref().map(|session| &session.record)
    }

    pub fn is_visible(&self) -> bool {
        self.session.is_some()
    }

    pub fn chrome(&self) -> &Chrome {
        &self.chrome
    }
}
