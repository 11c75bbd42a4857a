//! State of the users admin page.
//!
//! `UsersView` owns everything the page shows: the load lifecycle, the
//! fetched collection, the search text and the dropdown selection. All
//! changes go through [`UsersView::apply`], which keeps the browser side a
//! thin dispatcher.

use tracing::{debug, info, warn};

use crate::dropdown::{DropdownState, PointerTarget};
use crate::fetch_state::FetchState;
use crate::filter::filter_users;
use crate::model::{User, UserId, UsersPage};

/// Banner text used when a failure carries an empty message.
pub const LOAD_FAILURE_FALLBACK: &str = "Failed to load users";

/// Every event the page reacts to.
#[derive(Debug, Clone, PartialEq)]
pub enum UsersAction {
    StartLoading,
    Loaded(UsersPage),
    Failed(String),
    SetQuery(String),
    ToggleAccounts(UserId),
    PointerDown(PointerTarget),
    KeyDown(String),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct UsersView {
    load: FetchState<UsersPage>,
    query: String,
    dropdown: DropdownState,
}

impl UsersView {
    /// Applies `action` and returns whether anything observable changed.
    pub fn apply(&mut self, action: UsersAction) -> bool {
        match action {
            UsersAction::StartLoading => {
                debug!("Loading users");
                self.load = FetchState::Loading;
                true
            }
            UsersAction::Loaded(page) => {
                info!(count = page.count, received = page.users.len(), "Users loaded");
                self.load = FetchState::Success(page);
                true
            }
            UsersAction::Failed(msg) => {
                warn!(%msg, "Users failed to load");
                self.load = FetchState::Error(msg);
                true
            }
            UsersAction::SetQuery(query) => {
                if query == self.query {
                    return false;
                }
                self.query = query;
                true
            }
            UsersAction::ToggleAccounts(user_id) => {
                let users = match &self.load {
                    FetchState::Success(page) => page.users.as_slice(),
                    _ => &[],
                };
                match users.iter().find(|u| u.id == user_id) {
                    Some(user) => self.dropdown.toggle(user),
                    None => false,
                }
            }
            UsersAction::PointerDown(target) => self.dropdown.pointer_down(target),
            UsersAction::KeyDown(key) => self.dropdown.key_down(&key),
        }
    }

    pub fn load_state(&self) -> &FetchState<UsersPage> {
        &self.load
    }

    pub fn is_loading(&self) -> bool {
        self.load.is_loading()
    }

    /// The full fetched collection; empty until loaded and after a failure.
    pub fn users(&self) -> &[User] {
        self.load.data().map(|page| page.users.as_slice()).unwrap_or_default()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn dropdown(&self) -> &DropdownState {
        &self.dropdown
    }

    /// Users matching the current query, in fetched order.
    pub fn visible_users(&self) -> Vec<&User> {
        filter_users(self.users(), &self.query)
    }

    pub fn is_open(&self, user_id: &str) -> bool {
        self.dropdown.is_open(user_id)
    }

    /// The user whose dropdown is open, if that user still exists.
    pub fn open_user(&self) -> Option<&User> {
        self.dropdown.open_user(self.users())
    }

    /// Red banner text shown above the table after a failed load.
    pub fn error_banner(&self) -> Option<String> {
        let msg = self.load.error()?;
        let msg = if msg.trim().is_empty() { LOAD_FAILURE_FALLBACK } else { msg };
        Some(format!("Error: {}", msg))
    }

    /// Short "Showing x of y users" line; only meaningful once loaded.
    pub fn summary(&self) -> Option<String> {
        let page = self.load.data()?;
        let total = page.count.max(page.users.len() as u64);
        let noun = if total == 1 { "user" } else { "users" };
        Some(format!("Showing {} of {} {}", self.visible_users().len(), total, noun))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Account;

    fn page() -> UsersPage {
        let account = |id: &str, ifsc: &str| Account {
            id: id.to_string(),
            bank_name: "Axis".into(),
            ifsc_code: ifsc.into(),
            ..Default::default()
        };
        UsersPage {
            count: 3,
            users: vec![
                User { id: "a".into(), username: "alice".into(), email: Some("a@x.io".into()), accounts: vec![account("a1", "UTIB0000001")] },
                User { id: "b".into(), username: "bob".into(), email: None, accounts: vec![] },
                User { id: "c".into(), username: "carol".into(), email: None, accounts: vec![account("c1", "ABCD0123456")] },
            ],
        }
    }

    fn loaded() -> UsersView {
        let mut view = UsersView::default();
        view.apply(UsersAction::StartLoading);
        view.apply(UsersAction::Loaded(page()));
        view
    }

    #[test]
    fn test_loading_then_loaded() {
        let mut view = UsersView::default();
        assert_eq!(view.load_state(), &FetchState::NotStarted);

        view.apply(UsersAction::StartLoading);
        assert!(view.is_loading());
        assert!(view.users().is_empty());

        view.apply(UsersAction::Loaded(page()));
        assert!(!view.is_loading());
        assert_eq!(view.users().len(), 3);
        assert_eq!(view.error_banner(), None);
        assert_eq!(view.summary().as_deref(), Some("Showing 3 of 3 users"));
    }

    #[test]
    fn test_failure_shows_banner_and_empty_table() {
        let mut view = UsersView::default();
        view.apply(UsersAction::StartLoading);
        view.apply(UsersAction::Failed("Network down".into()));

        assert!(!view.is_loading());
        assert_eq!(view.error_banner().as_deref(), Some("Error: Network down"));
        assert!(view.visible_users().is_empty());
        assert_eq!(view.summary(), None);
    }

    #[test]
    fn test_empty_failure_message_falls_back() {
        let mut view = UsersView::default();
        view.apply(UsersAction::Failed(String::new()));
        assert_eq!(view.error_banner().as_deref(), Some("Error: Failed to load users"));
    }

    #[test]
    fn test_query_narrows_visible_users() {
        let mut view = loaded();
        assert!(view.apply(UsersAction::SetQuery("  ABCD0123456 ".into())));
        let visible: Vec<_> = view.visible_users().iter().map(|u| u.id.as_str()).collect();
        assert_eq!(visible, vec!["c"]);
        assert_eq!(view.summary().as_deref(), Some("Showing 1 of 3 users"));

        assert!(!view.apply(UsersAction::SetQuery("  ABCD0123456 ".into())));
    }

    #[test]
    fn test_dropdown_through_actions() {
        let mut view = loaded();

        assert!(view.apply(UsersAction::ToggleAccounts("a".into())));
        assert_eq!(view.open_user().map(|u| u.id.as_str()), Some("a"));

        assert!(view.apply(UsersAction::ToggleAccounts("c".into())));
        assert!(view.is_open("c") && !view.is_open("a"));

        assert!(!view.apply(UsersAction::PointerDown(PointerTarget::Inside)));
        assert!(view.apply(UsersAction::PointerDown(PointerTarget::Outside)));
        assert!(view.open_user().is_none());

        view.apply(UsersAction::ToggleAccounts("a".into()));
        assert!(view.apply(UsersAction::KeyDown("Escape".into())));
        assert_eq!(view.dropdown(), &DropdownState::Closed);
    }

    #[test]
    fn test_toggle_ignores_unknown_and_accountless_users() {
        let mut view = loaded();
        assert!(!view.apply(UsersAction::ToggleAccounts("b".into())));
        assert!(!view.apply(UsersAction::ToggleAccounts("missing".into())));
        assert_eq!(view.dropdown(), &DropdownState::Closed);
    }

    #[test]
    fn test_filtering_keeps_dropdown_selection() {
        let mut view = loaded();
        view.apply(UsersAction::ToggleAccounts("a".into()));
        view.apply(UsersAction::SetQuery("carol".into()));

        assert!(view.is_open("a"));
        assert!(view.visible_users().iter().all(|u| u.id != "a"));
    }
}
