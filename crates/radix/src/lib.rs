#![forbid(unsafe_code)]

//! Radix public facade crate.
//!
//! Re-exports the common types from the internal crates and offers a small
//! prelude for embedding page behaviors.

use std::fmt;

// --- Core re-exports -------------------------------------------------------

pub use radix_core::animation::{Easing, Step, Tween, TweenSet, UnknownEasing};
pub use radix_core::event::{ElementId, HitRegion, PointerEvent, PointerPhase, PointerType};
pub use radix_core::geometry::{Point, Size};
pub use radix_core::notify::{ListenerId, Notifier};

// --- Page re-exports -------------------------------------------------------

pub use radix_page::config::{ConfigError, RadixConfig};
pub use radix_page::drag::{DragOwner, DragSlot};
pub use radix_page::events::{ModalEvent, NavEvent, PageEvent, RadixEvent, ScrollEvent};
pub use radix_page::modal::{
    CloseOutcome, ModalController, ModalState, OpenOutcome, ResizeOutcome,
};
pub use radix_page::nav::NavMode;
pub use radix_page::overrides::{AppearOverrides, ModalOverrides, ScrollOverrides};
pub use radix_page::page::{ClickOutcome, Radix};
pub use radix_page::smooth_scroll::ScrollOutcome;
pub use radix_page::surface::{DomCommand, ModalSurface, PageHost, RecordingSurface};

// --- Web re-exports --------------------------------------------------------

#[cfg(feature = "web")]
pub use radix_web::{WebError, WebPage};

// --- Errors ---------------------------------------------------------------

/// Top-level error type for Radix embeddings.
#[derive(Debug)]
pub enum Error {
    /// Configuration was rejected.
    Config(ConfigError),
    /// A host message could not be handled.
    #[cfg(feature = "web")]
    Web(WebError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(err) => write!(f, "{err}"),
            #[cfg(feature = "web")]
            Self::Web(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Config(err) => Some(err),
            #[cfg(feature = "web")]
            Self::Web(err) => Some(err),
        }
    }
}

impl From<ConfigError> for Error {
    fn from(err: ConfigError) -> Self {
        Self::Config(err)
    }
}

#[cfg(feature = "web")]
impl From<WebError> for Error {
    fn from(err: WebError) -> Self {
        Self::Web(err)
    }
}

/// Standard result type for Radix APIs.
pub type Result<T> = std::result::Result<T, Error>;

/// Validate `config` and set up a page on an in-memory surface.
pub fn recording_page(config: RadixConfig) -> Result<Radix<RecordingSurface>> {
    Ok(Radix::new(config, RecordingSurface::new())?)
}

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        ClickOutcome, DomCommand, Easing, ElementId, Error, HitRegion, ModalOverrides,
        ModalState, ModalSurface, PageHost, PointerEvent, Radix, RadixConfig, RadixEvent,
        RecordingSurface, Result, ScrollOverrides, Size, Step,
    };

    pub use crate::{core, page};
}

pub use radix_core as core;
pub use radix_page as page;
#[cfg(feature = "web")]
pub use radix_web as web;

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn prelude_builds_a_page() {
        let mut page = crate::recording_page(RadixConfig::default()).unwrap();
        assert_eq!(page.modal_state(), Some(ModalState::Closed));
        assert!(page.advance(std::time::Duration::from_millis(16)).is_done());
    }

    #[test]
    fn config_errors_convert() {
        let config = RadixConfig {
            time_frame: 0,
            ..RadixConfig::default()
        };
        let err = crate::recording_page(config).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
