//! # Platform Collaborators
//!
//! Capabilities the core consumes but does not implement: picking or
//! capturing a photo, and asking the user to confirm something destructive.
//! Host applications provide implementations; the core only ever sees the
//! opaque photo reference and a yes/no answer.

use crate::model::ItemDraft;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageOrigin {
    Camera,
    Library,
}

/// Capture or pick an image and return a local reference to it.
pub trait ImageSource {
    /// `None` when the user cancels or the platform denies permission.
    fn acquire(&self, origin: ImageOrigin) -> Option<String>;
}

/// Ask the user to confirm a destructive action.
pub trait Confirm {
    fn confirm(&self, prompt: &str) -> bool;
}

impl<F: Fn(&str) -> bool> Confirm for F {
    fn confirm(&self, prompt: &str) -> bool {
        self(prompt)
    }
}

impl ItemDraft {
    /// Attach a photo from `source`. When acquisition yields nothing the
    /// draft keeps whatever photo it already had.
    pub fn with_photo_from<I: ImageSource + ?Sized>(mut self, source: &I, origin: ImageOrigin) -> Self {
        match source.acquire(origin) {
            Some(uri) => {
                debug!(?origin, uri = %uri, "photo attached");
                self.photo_uri = Some(uri);
            }
            None => debug!(?origin, "photo acquisition cancelled"),
        }
        self
    }

    pub fn without_photo(mut self) -> Self {
        self.photo_uri = None;
        self
    }
}
