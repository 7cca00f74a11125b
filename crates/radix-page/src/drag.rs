#![forbid(unsafe_code)]

//! The page-wide drag slot.
//!
//! At most one element is drag-active at a time: either the modal wrapper or
//! one drag-scroll region. Owners claim the slot on pointer-down and release
//! it on pointer-up; a pointer-down elsewhere while the slot is held is
//! refused.

use radix_core::event::ElementId;

/// Who holds the drag slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DragOwner {
    /// The modal's scrollable wrapper.
    Modal,
    /// A registered drag-scroll region.
    Region(ElementId),
}

/// Single owned drag-active marker.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DragSlot {
    owner: Option<DragOwner>,
}

impl DragSlot {
    #[must_use]
    pub const fn new() -> Self {
        Self { owner: None }
    }

    #[must_use]
    pub const fn owner(&self) -> Option<DragOwner> {
        self.owner
    }

    #[must_use]
    pub const fn is_free(&self) -> bool {
        self.owner.is_none()
    }

    #[must_use]
    pub fn is_held_by(&self, owner: DragOwner) -> bool {
        self.owner == Some(owner)
    }

    /// Take the slot. Succeeds when it is free or already held by `owner`.
    pub fn claim(&mut self, owner: DragOwner) -> bool {
        match self.owner {
            None => {
                self.owner = Some(owner);
                true
            }
            Some(current) => current == owner,
        }
    }

    /// Give the slot back. Only the holder can release it.
    pub fn release(&mut self, owner: DragOwner) -> bool {
        if self.owner == Some(owner) {
            self.owner = None;
            true
        } else {
            false
        }
    }
}
