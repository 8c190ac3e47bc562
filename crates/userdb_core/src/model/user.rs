//! User domain model.
//!
//! # Invariants
//! - `id` is assigned by the store on insert and immutable thereafter.
//! - No two persisted users share an `email` value.

use serde::{Deserialize, Serialize};

/// Store-assigned identifier for a persisted user.
///
/// Kept as a type alias to make semantic intent explicit in signatures;
/// values live in the SQLite rowid domain.
pub type UserId = i64;

/// A row of the `users` table.
///
/// Plain data record: the storage layer owns the persisted state, this type
/// is only a snapshot returned by reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Stable store-assigned ID.
    pub id: UserId,
    /// Display name, required.
    pub name: String,
    /// Unique contact address, required.
    pub email: String,
}

impl User {
    pub fn new(id: UserId, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
        }
    }
}
