#![forbid(unsafe_code)]

//! Flexbox gap filler.
//!
//! A wrapping flex row leaves its last line ragged. Appending invisible
//! copies of the first child, as many as there are real children (or
//! `flexFix.min`, whichever is larger), keeps the last line aligned.

use radix_core::event::ElementId;

use crate::config::FlexFixConfig;
use crate::surface::PageHost;

/// Dummies to append to a container with `children` real items.
#[must_use]
pub fn dummy_count(children: usize, min: usize) -> usize {
    children.max(min)
}

/// Append dummies to `container`. Returns how many were requested.
///
/// Empty containers have nothing to copy and are skipped.
pub fn apply<H: PageHost + ?Sized>(
    config: &FlexFixConfig,
    container: ElementId,
    children: usize,
    host: &mut H,
) -> usize {
    if !config.active || children == 0 {
        return 0;
    }
    let count = dummy_count(children, config.min);
    host.append_dummies(container, count, config.inherit);
    count
}
