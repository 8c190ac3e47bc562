//! Use-case services over the repository layer.

pub mod user_store;
