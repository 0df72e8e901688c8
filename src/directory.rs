//! The in-memory user collection backing the service.
//!
//! A `Directory` owns an ordered list of records plus the id counter for the
//! next creation. It carries no locking itself; the HTTP layer wraps it in a
//! `Mutex` so that id assignment and the append happen under one guard.

use serde::Serialize;
use thiserror::Error;

/// A single user record. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub email: String,
}

/// Error type for directory operations
#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
}

/// Ordered in-memory collection of user records.
pub struct Directory {
    users: Vec<User>,
    next_id: u64,
}

impl Directory {
    /// An empty directory. Ids start at 1.
    pub fn new() -> Self {
        Self {
            users: Vec::new(),
            next_id: 1,
        }
    }

    /// Directory pre-populated with the records present at process start.
    pub fn seeded() -> Self {
        let mut dir = Self::new();
        dir.insert("Alice".to_string(), "alice@example.com".to_string());
        dir.insert("Bob".to_string(), "bob@example.com".to_string());
        dir
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// All users in insertion order.
    pub fn list(&self) -> Vec<User> {
        self.users.clone()
    }

    pub fn get(&self, id: u64) -> Option<User> {
        self.users.iter().find(|u| u.id == id).cloned()
    }

    /// Append a new record, assigning the next id. Presence checks only; the
    /// email format is deliberately not validated.
    pub fn create(&mut self, name: String, email: String) -> Result<User, DirectoryError> {
        if name.trim().is_empty() {
            return Err(DirectoryError::MissingField("name"));
        }
        if email.trim().is_empty() {
            return Err(DirectoryError::MissingField("email"));
        }
        Ok(self.insert(name, email))
    }

    fn insert(&mut self, name: String, email: String) -> User {
        let user = User {
            id: self.next_id,
            name,
            email,
        };
        self.next_id += 1;
        self.users.push(user.clone());
        user
    }
}

impl Default for Directory {
    fn default() -> Self {
        Self::new()
    }
}
