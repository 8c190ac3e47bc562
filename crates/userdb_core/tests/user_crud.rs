use userdb_core::db::DbError;
use userdb_core::{InsertOutcome, UserStore};

#[test]
fn insert_and_find_roundtrip() {
    let store = UserStore::open_in_memory().unwrap();

    let outcome = store.insert_user("Eve", "eve@example.com").unwrap();
    let id = outcome.created_id().expect("fresh email should create a row");

    let user = store
        .find_user_by_email("eve@example.com")
        .unwrap()
        .expect("inserted user should be findable");
    assert_eq!(user.id, id);
    assert_eq!(user.name, "Eve");
    assert_eq!(user.email, "eve@example.com");
}

#[test]
fn duplicate_email_insert_is_a_noop() {
    let store = UserStore::open_in_memory().unwrap();

    let first = store.insert_user("Alice", "alice@example.com").unwrap();
    assert!(matches!(first, InsertOutcome::Created(_)));

    let second = store.insert_user("Impostor", "alice@example.com").unwrap();
    assert_eq!(second, InsertOutcome::DuplicateEmail);
    assert_eq!(second.created_id(), None);

    let users = store.list_users().unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].name, "Alice");
}

#[test]
fn list_returns_every_distinct_insert() {
    let store = UserStore::open_in_memory().unwrap();

    let emails = ["frank@example.com", "grace@example.com", "heidi@example.com"];
    for (n, email) in emails.iter().enumerate() {
        store.insert_user(&format!("User{n}"), email).unwrap();
    }

    let users = store.list_users().unwrap();
    assert_eq!(users.len(), emails.len());
}

#[test]
fn update_moves_the_email_lookup() {
    let store = UserStore::open_in_memory().unwrap();

    let id = store
        .insert_user("Ivy", "ivy@example.com")
        .unwrap()
        .created_id()
        .unwrap();

    let changed = store
        .update_user(id, "Ivy Updated", "ivy_updated@example.com")
        .unwrap();
    assert_eq!(changed, 1);

    let updated = store
        .find_user_by_email("ivy_updated@example.com")
        .unwrap()
        .expect("new email should resolve");
    assert_eq!(updated.id, id);
    assert_eq!(updated.name, "Ivy Updated");

    assert!(store.find_user_by_email("ivy@example.com").unwrap().is_none());
}

#[test]
fn update_of_missing_id_affects_zero_rows() {
    let store = UserStore::open_in_memory().unwrap();

    let changed = store.update_user(42, "Nobody", "nobody@example.com").unwrap();
    assert_eq!(changed, 0);
}

#[test]
fn update_onto_taken_email_surfaces_store_error() {
    let store = UserStore::open_in_memory().unwrap();

    store.insert_user("Mallory", "mallory@example.com").unwrap();
    let id = store
        .insert_user("Oscar", "oscar@example.com")
        .unwrap()
        .created_id()
        .unwrap();

    let err = store
        .update_user(id, "Oscar", "mallory@example.com")
        .unwrap_err();
    assert!(matches!(err, DbError::Sqlite(_)));

    // The collision must leave both rows untouched.
    let oscar = store
        .find_user_by_email("oscar@example.com")
        .unwrap()
        .expect("losing row should keep its email");
    assert_eq!(oscar.id, id);
}

#[test]
fn delete_removes_the_row() {
    let store = UserStore::open_in_memory().unwrap();

    let id = store
        .insert_user("Jack", "jack@example.com")
        .unwrap()
        .created_id()
        .unwrap();
    store.insert_user("Judy", "judy@example.com").unwrap();

    let removed = store.delete_user(id).unwrap();
    assert_eq!(removed, 1);

    assert!(store.find_user_by_email("jack@example.com").unwrap().is_none());
    assert_eq!(store.list_users().unwrap().len(), 1);

    let removed_again = store.delete_user(id).unwrap();
    assert_eq!(removed_again, 0);
}

#[test]
fn full_crud_walkthrough() {
    let store = UserStore::open_in_memory().unwrap();

    let id = store
        .insert_user("John Doe", "john@example.com")
        .unwrap()
        .created_id()
        .unwrap();
    assert_eq!(id, 1);

    let users = store.list_users().unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].id, 1);
    assert_eq!(users[0].name, "John Doe");
    assert_eq!(users[0].email, "john@example.com");

    store
        .update_user(id, "John Updated", "john_updated@example.com")
        .unwrap();
    let users = store.list_users().unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].name, "John Updated");
    assert_eq!(users[0].email, "john_updated@example.com");

    store.delete_user(id).unwrap();
    assert!(store.list_users().unwrap().is_empty());

    store.close().unwrap();
}

#[test]
fn file_backed_store_persists_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("users.db");

    let store = UserStore::open(&path).unwrap();
    store.insert_user("Peggy", "peggy@example.com").unwrap();
    store.close().unwrap();

    let reopened = UserStore::open(&path).unwrap();
    let user = reopened
        .find_user_by_email("peggy@example.com")
        .unwrap()
        .expect("row should survive reopen");
    assert_eq!(user.name, "Peggy");
}
