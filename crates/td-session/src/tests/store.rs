use crate::{Session, SessionStore};

use td_core::{Role, TenantRef};

fn sample_session() -> Session {
    Session {
        access_token: "access-1".to_string(),
        refresh_token: "refresh-1".to_string(),
        username: "alice".to_string(),
        role: Role::Owner,
        tenant_schema: "acme".to_string(),
        tenant_list: vec![
            TenantRef {
                schema: "acme".to_string(),
                name: "Acme Inc".to_string(),
            },
            TenantRef {
                schema: "globex".to_string(),
                name: "Globex".to_string(),
            },
        ],
    }
}

#[test]
fn test_empty_store_reads_defined_empty() {
    let store = SessionStore::in_memory();

    assert!(store.token().is_none());
    assert!(store.refresh_token().is_none());
    assert!(store.username().is_none());
    assert!(store.role().is_none());
    assert!(store.tenant_schema().is_none());
    assert!(store.tenant_list().is_empty());
    assert!(store.snapshot().is_none());
    assert!(!store.is_authenticated());
}

#[test]
fn test_set_then_clear_leaves_no_stale_field() {
    let store = SessionStore::in_memory();
    store.set(sample_session()).unwrap();
    assert!(store.is_authenticated());

    let existed = store.clear().unwrap();
    assert!(existed);

    assert!(store.token().is_none());
    assert!(store.role().is_none());
    assert!(store.username().is_none());
    assert!(store.tenant_schema().is_none());
    assert!(store.tenant_list().is_empty());
}

#[test]
fn test_double_clear_is_identical_to_single() {
    let store = SessionStore::in_memory();
    store.set(sample_session()).unwrap();

    assert!(store.clear().unwrap());
    // Second clear reports no prior session and changes nothing
    assert!(!store.clear().unwrap());
    assert!(store.token().is_none());
}

#[test]
fn test_clear_on_empty_store_is_ok() {
    let store = SessionStore::in_memory();
    assert!(!store.clear().unwrap());
}

#[test]
fn test_set_is_whole_record_replace() {
    let store = SessionStore::in_memory();
    store.set(sample_session()).unwrap();

    let mut next = sample_session();
    next.access_token = "access-2".to_string();
    next.refresh_token = "refresh-2".to_string();
    next.role = Role::Member;
    next.tenant_schema = "globex".to_string();
    next.tenant_list = Vec::new();
    store.set(next.clone()).unwrap();

    assert_eq!(store.snapshot(), Some(next));
    assert!(store.tenant_list().is_empty());
}

#[test]
fn test_concurrent_clears_report_one_prior_session() {
    let store = SessionStore::in_memory();
    store.set(sample_session()).unwrap();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let store = store.clone();
            std::thread::spawn(move || store.clear().unwrap())
        })
        .collect();

    let existed: Vec<bool> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(existed.iter().filter(|e| **e).count(), 1);
    assert!(store.token().is_none());
}

#[test]
fn test_open_missing_file_means_logged_out() {
    let temp = tempfile::TempDir::new().unwrap();
    let store = SessionStore::open(temp.path().join("session.json")).unwrap();
    assert!(!store.is_authenticated());
}

#[test]
fn test_session_persists_across_open() {
    let temp = tempfile::TempDir::new().unwrap();
    let path = temp.path().join("session.json");

    let store = SessionStore::open(path.clone()).unwrap();
    store.set(sample_session()).unwrap();

    let reopened = SessionStore::open(path).unwrap();
    assert_eq!(reopened.snapshot(), Some(sample_session()));
    assert_eq!(reopened.role(), Some(Role::Owner));
}

#[test]
fn test_clear_removes_persisted_file() {
    let temp = tempfile::TempDir::new().unwrap();
    let path = temp.path().join("session.json");

    let store = SessionStore::open(path.clone()).unwrap();
    store.set(sample_session()).unwrap();
    assert!(path.exists());

    store.clear().unwrap();
    assert!(!path.exists());

    // File already gone; clearing again still succeeds
    store.clear().unwrap();
}

#[test]
fn test_open_corrupt_file_is_an_error() {
    let temp = tempfile::TempDir::new().unwrap();
    let path = temp.path().join("session.json");
    std::fs::write(&path, "{not json").unwrap();

    assert!(SessionStore::open(path).is_err());
}
