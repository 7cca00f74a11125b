#![forbid(unsafe_code)]

//! Core: easing curves, fixed-tick tweens, geometry, pointer events, and
//! lifecycle notifications shared by every Radix page behavior.

pub mod animation;
pub mod event;
pub mod format;
pub mod geometry;
pub mod logging;
pub mod notify;

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{debug, info, trace, warn};
