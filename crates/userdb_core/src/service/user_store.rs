//! Owning facade over the persisted user table.
//!
//! # Responsibility
//! - Own one SQLite connection for its entire lifetime.
//! - Expose the user CRUD surface without leaking SQL details.
//!
//! # Invariants
//! - One connection per store instance; no sharing across instances.
//! - `close` consumes the store, so use-after-close is unrepresentable.
//! - Dropping the store releases the connection on any exit path.

use crate::db::{open_db, open_db_in_memory, DbResult};
use crate::model::user::{User, UserId};
use crate::repo::user_repo::{InsertOutcome, RepoResult, SqliteUserRepository, UserRepository};
use rusqlite::Connection;
use std::path::Path;

/// Synchronous, blocking facade over a schema-initialized user store.
pub struct UserStore {
    conn: Connection,
}

impl UserStore {
    /// Opens (or creates) a file-backed store and ensures the schema.
    pub fn open(path: impl AsRef<Path>) -> DbResult<Self> {
        Ok(Self {
            conn: open_db(path)?,
        })
    }

    /// Opens a transient in-memory store; nothing survives the instance.
    pub fn open_in_memory() -> DbResult<Self> {
        Ok(Self {
            conn: open_db_in_memory()?,
        })
    }

    /// Appends one user row, committed immediately.
    ///
    /// Returns `InsertOutcome::DuplicateEmail` (no row created) when the
    /// email is already taken.
    pub fn insert_user(&self, name: &str, email: &str) -> RepoResult<InsertOutcome> {
        self.repo().insert_user(name, email)
    }

    /// Returns every persisted user in store-defined order.
    pub fn list_users(&self) -> RepoResult<Vec<User>> {
        self.repo().list_users()
    }

    /// Looks up the single user holding `email`, if any.
    pub fn find_user_by_email(&self, email: &str) -> RepoResult<Option<User>> {
        self.repo().find_user_by_email(email)
    }

    /// Overwrites name and email for the row matching `id`.
    ///
    /// Returns the affected row count (0 or 1). A collision with another
    /// row's email is not recovered here and surfaces as a store error.
    pub fn update_user(&self, id: UserId, name: &str, email: &str) -> RepoResult<usize> {
        self.repo().update_user(id, name, email)
    }

    /// Hard-deletes the row matching `id`; returns the affected row count.
    pub fn delete_user(&self, id: UserId) -> RepoResult<usize> {
        self.repo().delete_user(id)
    }

    /// Releases the underlying connection explicitly.
    ///
    /// Dropping the store has the same effect; this variant reports close
    /// failures instead of swallowing them.
    pub fn close(self) -> DbResult<()> {
        self.conn.close().map_err(|(_conn, err)| err.into())
    }

    fn repo(&self) -> SqliteUserRepository<'_> {
        SqliteUserRepository::new(&self.conn)
    }
}
