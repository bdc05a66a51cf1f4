use notemark_core::db::migrations::latest_version;
use notemark_core::db::open_store_in_memory;
use notemark_core::{load_or_init, save, KvBacking, RepoError, SqliteKvBacking, Tag};
use rusqlite::Connection;

#[test]
fn read_returns_none_for_absent_key() {
    let conn = open_store_in_memory().unwrap();
    let backing = SqliteKvBacking::try_new(&conn).unwrap();

    assert!(backing.read("MISSING").unwrap().is_none());
}

#[test]
fn write_fully_replaces_the_previous_value() {
    let conn = open_store_in_memory().unwrap();
    let backing = SqliteKvBacking::try_new(&conn).unwrap();

    backing.write("SLOT", b"first value").unwrap();
    backing.write("SLOT", b"2nd").unwrap();

    assert_eq!(backing.read("SLOT").unwrap().unwrap(), b"2nd");
}

#[test]
fn load_or_init_establishes_the_fallback_as_initial_state() {
    let conn = open_store_in_memory().unwrap();
    let backing = SqliteKvBacking::try_new(&conn).unwrap();

    let loaded: Vec<Tag> = load_or_init(&backing, "TAGS", Vec::new()).unwrap();
    assert!(loaded.is_empty());

    // The fallback was written back, not just returned.
    assert_eq!(backing.read("TAGS").unwrap().unwrap(), b"[]");
}

#[test]
fn save_then_load_roundtrips_collections() {
    let conn = open_store_in_memory().unwrap();
    let backing = SqliteKvBacking::try_new(&conn).unwrap();

    let tags = vec![Tag::new("work"), Tag::new("home")];
    save(&backing, "TAGS", &tags).unwrap();

    let loaded: Vec<Tag> = load_or_init(&backing, "TAGS", Vec::new()).unwrap();
    assert_eq!(loaded, tags);

    let empty: Vec<Tag> = Vec::new();
    save(&backing, "TAGS", &empty).unwrap();
    let reloaded: Vec<Tag> = load_or_init(&backing, "TAGS", vec![Tag::new("fallback")]).unwrap();
    assert!(reloaded.is_empty());
}

#[test]
fn load_or_init_propagates_corrupt_bytes() {
    let conn = open_store_in_memory().unwrap();
    let backing = SqliteKvBacking::try_new(&conn).unwrap();
    backing.write("TAGS", b"[{\"id\":42}]").unwrap();

    let err = load_or_init::<Vec<Tag>, _>(&backing, "TAGS", Vec::new()).unwrap_err();
    assert!(matches!(err, RepoError::Corrupt { ref key, .. } if key.as_str() == "TAGS"));
}

#[test]
fn backing_rejects_uninitialized_connection() {
    let conn = Connection::open_in_memory().unwrap();

    match SqliteKvBacking::try_new(&conn) {
        Err(RepoError::UninitializedConnection {
            expected_version,
            actual_version: 0,
        }) => assert!(expected_version > 0),
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("expected uninitialized connection error"),
    }
}

#[test]
fn backing_rejects_connection_without_slots_table() {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(&format!("PRAGMA user_version = {};", latest_version()))
        .unwrap();

    assert!(matches!(
        SqliteKvBacking::try_new(&conn),
        Err(RepoError::MissingRequiredTable("slots"))
    ));
}
