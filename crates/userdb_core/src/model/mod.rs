//! Domain models for the user store.

pub mod user;
