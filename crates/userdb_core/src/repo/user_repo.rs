//! User repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide stable CRUD APIs over the canonical `users` table.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - Every mutation commits immediately (autocommit, no batching).
//! - A duplicate email on insert is reported as `InsertOutcome::DuplicateEmail`;
//!   a duplicate email on update propagates as a store-level failure.

use crate::db::DbError;
use crate::model::user::{User, UserId};
use rusqlite::{ffi, params, Connection, Row};

const USER_SELECT_SQL: &str = "SELECT id, name, email FROM users";

pub type RepoResult<T> = Result<T, DbError>;

/// Result of an insert attempt against the unique `email` column.
///
/// A rejected duplicate is a benign outcome, not an error: the store is left
/// untouched and the caller decides what to do next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    /// A row was appended and committed; carries the store-assigned ID.
    Created(UserId),
    /// The email is already taken; no row was created.
    DuplicateEmail,
}

impl InsertOutcome {
    /// Returns the new ID when a row was created.
    pub fn created_id(self) -> Option<UserId> {
        match self {
            Self::Created(id) => Some(id),
            Self::DuplicateEmail => None,
        }
    }
}

/// Repository interface for user CRUD operations.
pub trait UserRepository {
    fn insert_user(&self, name: &str, email: &str) -> RepoResult<InsertOutcome>;
    fn list_users(&self) -> RepoResult<Vec<User>>;
    fn find_user_by_email(&self, email: &str) -> RepoResult<Option<User>>;
    fn update_user(&self, id: UserId, name: &str, email: &str) -> RepoResult<usize>;
    fn delete_user(&self, id: UserId) -> RepoResult<usize>;
}

/// SQLite-backed user repository.
pub struct SqliteUserRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteUserRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl UserRepository for SqliteUserRepository<'_> {
    fn insert_user(&self, name: &str, email: &str) -> RepoResult<InsertOutcome> {
        let inserted = self.conn.execute(
            "INSERT INTO users (name, email) VALUES (?1, ?2);",
            params![name, email],
        );

        match inserted {
            Ok(_) => Ok(InsertOutcome::Created(self.conn.last_insert_rowid())),
            Err(err) if is_unique_violation(&err) => Ok(InsertOutcome::DuplicateEmail),
            Err(err) => Err(err.into()),
        }
    }

    fn list_users(&self) -> RepoResult<Vec<User>> {
        let mut stmt = self.conn.prepare(&format!("{USER_SELECT_SQL};"))?;
        let mut rows = stmt.query([])?;

        let mut users = Vec::new();
        while let Some(row) = rows.next()? {
            users.push(parse_user_row(row)?);
        }

        Ok(users)
    }

    fn find_user_by_email(&self, email: &str) -> RepoResult<Option<User>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{USER_SELECT_SQL} WHERE email = ?1;"))?;

        let mut rows = stmt.query(params![email])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_user_row(row)?));
        }

        Ok(None)
    }

    fn update_user(&self, id: UserId, name: &str, email: &str) -> RepoResult<usize> {
        let changed = self.conn.execute(
            "UPDATE users SET name = ?1, email = ?2 WHERE id = ?3;",
            params![name, email, id],
        )?;

        Ok(changed)
    }

    fn delete_user(&self, id: UserId) -> RepoResult<usize> {
        let changed = self
            .conn
            .execute("DELETE FROM users WHERE id = ?1;", params![id])?;

        Ok(changed)
    }
}

fn parse_user_row(row: &Row<'_>) -> RepoResult<User> {
    Ok(User {
        id: row.get("id")?,
        name: row.get("name")?,
        email: row.get("email")?,
    })
}

fn is_unique_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(cause, _)
            if cause.extended_code == ffi::SQLITE_CONSTRAINT_UNIQUE
    )
}
