#![forbid(unsafe_code)]

//! Structured logging for page behaviors.
//!
//! Behaviors log through `debug!` (state changes), `trace!` (animation
//! ticks) and `warn!` (unknown easing or icon names). With the `tracing`
//! feature these are the `tracing` macros; without it they expand to
//! nothing, so wasm builds carry no logging code at all.
//!
//! With `tracing-json`, [`init_json_subscriber`] installs a JSON formatter
//! filtered through `RUST_LOG` (default [`DEFAULT_FILTER`]).

#[cfg(feature = "tracing")]
pub use tracing::{debug, info, trace, warn};

#[cfg(not(feature = "tracing"))]
mod disabled {
    /// Expands to nothing; enable the `tracing` feature to log.
    #[macro_export]
    macro_rules! debug {
        ($($arg:tt)*) => {};
    }

    /// Expands to nothing; enable the `tracing` feature to log.
    #[macro_export]
    macro_rules! info {
        ($($arg:tt)*) => {};
    }

    /// Expands to nothing; enable the `tracing` feature to log.
    #[macro_export]
    macro_rules! trace {
        ($($arg:tt)*) => {};
    }

    /// Expands to nothing; enable the `tracing` feature to log.
    #[macro_export]
    macro_rules! warn {
        ($($arg:tt)*) => {};
    }
}

/// Filter used when `RUST_LOG` is unset. Matches every `radix*` target.
#[cfg(feature = "tracing-json")]
pub const DEFAULT_FILTER: &str = "radix=info";

/// Install a global JSON subscriber.
///
/// Returns `false` when another global subscriber was already installed.
#[cfg(feature = "tracing-json")]
pub fn init_json_subscriber() -> bool {
    use tracing_subscriber::EnvFilter;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    tracing_subscriber::fmt()
        .json()
        .with_env_filter(filter)
        .try_init()
        .is_ok()
}
