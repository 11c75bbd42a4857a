//! Free-text search over the fetched users.

use tracing::trace;

use crate::model::{Account, User};

/// A normalized search query: trimmed and lower-cased.
///
/// An empty query matches everything.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchQuery(String);

impl SearchQuery {
    pub fn parse(raw: &str) -> Self {
        Self(raw.trim().to_lowercase())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive substring test. Empty fields never match a
    /// non-empty query.
    fn hits(&self, field: &str) -> bool {
        !field.is_empty() && field.to_lowercase().contains(&self.0)
    }

    fn matches_account(&self, account: &Account) -> bool {
        account.searchable_fields().iter().any(|field| self.hits(field))
    }

    pub fn matches(&self, user: &User) -> bool {
        if self.is_empty() {
            return true;
        }

        let base = self.hits(&user.username)
            || user.email.as_deref().is_some_and(|email| self.hits(email));

        base || user.accounts.iter().any(|a| self.matches_account(a))
    }
}

/// Returns the users matching `query`, keeping their original order.
pub fn filter_users<'a>(users: &'a [User], query: &str) -> Vec<&'a User> {
    let query = SearchQuery::parse(query);
    if query.is_empty() {
        return users.iter().collect();
    }

    let matched: Vec<&User> = users.iter().filter(|u| query.matches(u)).collect();
    trace!(query = query.as_str(), matched = matched.len(), total = users.len(), "Filtered users");
    matched
}
