//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts.
//! - Isolate SQLite query details from the owning store facade.
//!
//! # Invariants
//! - Lookup misses and zero-row mutations are values, never errors.
//! - The only recovered store error is the unique-email violation on insert.

pub mod user_repo;
