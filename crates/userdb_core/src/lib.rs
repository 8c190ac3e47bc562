//! Core storage logic for UserDB.
//! This crate is the single source of truth for the persisted user table.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use db::{open_db, open_db_in_memory, DbError, DbResult};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::user::{User, UserId};
pub use repo::user_repo::{InsertOutcome, RepoResult, SqliteUserRepository, UserRepository};
pub use service::user_store::UserStore;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
