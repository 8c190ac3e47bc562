//! CLI smoke entry point.
//!
//! # Responsibility
//! - Walk the full CRUD surface of `userdb_core` against one store.
//! - Keep output deterministic for quick local sanity checks.

use std::error::Error;
use userdb_core::UserStore;

fn main() -> Result<(), Box<dyn Error>> {
    // First argument selects a database file; default is a throwaway
    // in-memory store so repeated runs stay deterministic.
    let store = match std::env::args().nth(1) {
        Some(path) => UserStore::open(path)?,
        None => UserStore::open_in_memory()?,
    };

    let outcome = store.insert_user("John Doe", "john@example.com")?;
    println!("insert: {outcome:?}");
    println!("all users: {:?}", store.list_users()?);
    println!(
        "by email: {:?}",
        store.find_user_by_email("john@example.com")?
    );

    if let Some(id) = outcome.created_id() {
        store.update_user(id, "John Updated", "john_updated@example.com")?;
        println!("after update: {:?}", store.list_users()?);

        store.delete_user(id)?;
        println!("after delete: {:?}", store.list_users()?);
    }

    store.close()?;
    Ok(())
}
