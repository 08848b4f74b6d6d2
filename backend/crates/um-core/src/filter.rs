//! Search and role filtering over the user list.

use crate::UserRecord;

/// Search term plus optional role constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserFilter {
    /// Case-insensitive substring matched against `name` only
    pub term: String,
    /// Exact match against `role`; `None` or empty matches every role
    pub category: Option<String>,
}

impl UserFilter {
    pub fn new(term: impl Into<String>, category: Option<String>) -> Self {
        Self {
            term: term.into(),
            category,
        }
    }

    pub fn matches(&self, user: &UserRecord) -> bool {
        let term = self.term.to_lowercase();
        let matches_search = user.name.to_lowercase().contains(&term);
        let matches_role = match self.category.as_deref() {
            None | Some("") => true,
            Some(role) => user.role == role,
        };
        matches_search && matches_role
    }
}

/// Subsequence of `users` matching `filter`, in store order.
pub fn filter_users(users: &[UserRecord], filter: &UserFilter) -> Vec<UserRecord> {
    users
        .iter()
        .filter(|user| filter.matches(user))
        .cloned()
        .collect()
}
