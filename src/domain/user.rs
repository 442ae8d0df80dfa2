//! User records injected into app invocations.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Authenticated shell user as seen by app backends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub username: String,
    pub id: i64,
    pub is_admin: bool,
}

impl UserRecord {
    pub fn new(username: impl Into<String>, id: i64, is_admin: bool) -> Self {
        Self {
            username: username.into(),
            id,
            is_admin,
        }
    }
}

/// In-memory username lookup used by the host to resolve the session user.
///
/// The shell proper backs this with its account store; the host here seeds it
/// at startup and never mutates it afterwards, so handlers can share it
/// without locking.
#[derive(Debug, Clone, Default)]
pub struct UserDirectory {
    users: HashMap<String, UserRecord>,
}

impl UserDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Directory seeded with the shell's default account.
    pub fn with_fixture() -> Self {
        let mut directory = Self::new();
        directory.insert(UserRecord::new(super::DEFAULT_USERNAME, 1, true));
        directory
    }

    pub fn insert(&mut self, user: UserRecord) {
        self.users.insert(user.username.clone(), user);
    }

    pub fn find(&self, username: &str) -> Option<UserRecord> {
        self.users.get(username).cloned()
    }
}
