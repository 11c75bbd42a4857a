//! Selection state for the per-row account dropdowns.
//!
//! Only one dropdown can be open at a time. Instead of a flag per row the
//! whole table shares a single optional user id, so opening one row closes
//! whichever was open before.

use tracing::debug;

use crate::model::{User, UserId};

/// Key name reported by the browser for the escape key.
pub const ESCAPE_KEY: &str = "Escape";

/// Where a pointer-down / touch-start landed relative to the open dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
    /// Inside the DOM subtree of the open dropdown.
    Inside,
    /// Anywhere else, including when the dropdown element no longer exists.
    Outside,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DropdownState {
    #[default]
    Closed,
    Open(UserId),
}

impl DropdownState {
    pub fn open_id(&self) -> Option<&str> {
        match self {
            DropdownState::Closed => None,
            DropdownState::Open(id) => Some(id),
        }
    }

    pub fn is_open(&self, user_id: &str) -> bool {
        self.open_id() == Some(user_id)
    }

    /// Clicking the "Accounts" button of `user`.
    ///
    /// Returns whether the state changed. Users without accounts have a
    /// disabled button, so nothing happens for them.
    pub fn toggle(&mut self, user: &User) -> bool {
        if !user.has_accounts() {
            return false;
        }
        self.toggle_id(&user.id)
    }

    fn toggle_id(&mut self, user_id: &str) -> bool {
        let next = if self.is_open(user_id) {
            DropdownState::Closed
        } else {
            DropdownState::Open(user_id.to_string())
        };
        debug!(from = ?self, to = ?next, "Account dropdown toggled");
        *self = next;
        true
    }

    /// Document-level mouse-down or touch-start.
    pub fn pointer_down(&mut self, target: PointerTarget) -> bool {
        match target {
            PointerTarget::Outside => self.close(),
            PointerTarget::Inside => false,
        }
    }

    /// Document-level key-down; only Escape has an effect.
    pub fn key_down(&mut self, key: &str) -> bool {
        if key == ESCAPE_KEY { self.close() } else { false }
    }

    pub fn close(&mut self) -> bool {
        if *self == DropdownState::Closed {
            return false;
        }
        debug!(from = ?self, "Account dropdown dismissed");
        *self = DropdownState::Closed;
        true
    }

    /// Resolves the open id against `users`. A stale id (not present in the
    /// collection) resolves to `None`, so nothing is rendered for it.
    pub fn open_user<'a>(&self, users: &'a [User]) -> Option<&'a User> {
        let id = self.open_id()?;
        users.iter().find(|u| u.id == id)
    }
}
