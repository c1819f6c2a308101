// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hover state helper: compute enter/leave transitions from changes of the hovered widget.
//!
//! Only one widget is hovered at a time, so every update yields at most one leave and
//! at most one enter, leave first.
//!
//! ## Minimal example
//!
//! ```
//! use understory_widget::hover::{HoverState, HoverTransition};
//! let mut h: HoverState<u32> = HoverState::new();
//! assert_eq!(h.update(Some(1)), HoverTransition { leave: None, enter: Some(1) });
//! assert_eq!(h.update(Some(2)), HoverTransition { leave: Some(1), enter: Some(2) });
//! assert!(h.update(Some(2)).is_empty());
//! ```

/// Single-slot hover tracker.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HoverState<K: Copy + Eq> {
    current: Option<K>,
}

/// The transition produced by one [`HoverState::update`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct HoverTransition<K> {
    /// Widget the pointer left, delivered first.
    pub leave: Option<K>,
    /// Widget the pointer entered, delivered second.
    pub enter: Option<K>,
}

impl<K> HoverTransition<K> {
    /// True when nothing changed.
    pub fn is_empty(&self) -> bool {
        self.leave.is_none() && self.enter.is_none()
    }
}

impl<K: Copy + Eq> HoverState<K> {
    /// Create an empty hover state.
    pub fn new() -> Self {
        Self { current: None }
    }

    /// The currently hovered key, if any.
    pub fn current(&self) -> Option<K> {
        self.current
    }

    /// Replace the hovered key and return the transition from the previous one.
    pub fn update(&mut self, next: Option<K>) -> HoverTransition<K> {
        if self.current == next {
            return HoverTransition {
                leave: None,
                enter: None,
            };
        }
        let leave = core::mem::replace(&mut self.current, next);
        HoverTransition { leave, enter: next }
    }

    /// Clear the hover slot, returning the key that was left.
    pub fn clear(&mut self) -> Option<K> {
        self.current.take()
    }

    /// Forget `key` without producing a transition, e.g. when the widget was removed,
    /// hidden, or disabled and its state was already reset.
    pub fn forget(&mut self, key: K) {
        if self.current == Some(key) {
            self.current = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enter_on_fresh_state() {
        let mut h: HoverState<u32> = HoverState::new();
        let t = h.update(Some(3));
        assert_eq!(t.leave, None);
        assert_eq!(t.enter, Some(3));
        assert_eq!(h.current(), Some(3));
    }

    #[test]
    fn move_between_siblings_is_one_leave_one_enter() {
        let mut h: HoverState<u32> = HoverState::new();
        let _ = h.update(Some(1));
        let t = h.update(Some(2));
        assert_eq!(
            t,
            HoverTransition {
                leave: Some(1),
                enter: Some(2)
            }
        );
    }

    #[test]
    fn leave_to_empty_space() {
        let mut h: HoverState<u32> = HoverState::new();
        let _ = h.update(Some(1));
        let t = h.update(None);
        assert_eq!(t.leave, Some(1));
        assert_eq!(t.enter, None);
        assert_eq!(h.current(), None);
    }

    #[test]
    fn same_target_no_events() {
        let mut h: HoverState<u32> = HoverState::new();
        let _ = h.update(Some(7));
        assert!(h.update(Some(7)).is_empty());
        assert!(HoverState::<u32>::new().update(None).is_empty());
    }

    #[test]
    fn forget_only_matching_key() {
        let mut h: HoverState<u32> = HoverState::new();
        let _ = h.update(Some(7));
        h.forget(8);
        assert_eq!(h.current(), Some(7));
        h.forget(7);
        assert_eq!(h.current(), None);
        assert_eq!(h.clear(), None);
    }
}
