#![forbid(unsafe_code)]

//! Page behaviors built on `radix-core`.
//!
//! Every DOM effect goes through the [`surface::PageHost`] and
//! [`surface::ModalSurface`] traits, and time only moves when the host calls
//! `advance`. The [`page::Radix`] coordinator wires the individual behaviors
//! together; each behavior is also usable on its own.

pub mod config;
pub mod drag;
pub mod drag_scroll;
pub mod events;
pub mod flex_fix;
pub mod icons;
pub mod links;
pub mod modal;
pub mod nav;
pub mod overrides;
pub mod page;
pub mod preload;
pub mod scroll_appear;
pub mod smooth_scroll;
pub mod surface;

pub use config::{ConfigError, RadixConfig};
pub use events::RadixEvent;
pub use modal::{ModalController, ModalState};
pub use page::Radix;
pub use surface::{DomCommand, ModalSurface, PageHost, RecordingSurface};
