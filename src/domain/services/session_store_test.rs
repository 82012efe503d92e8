use std::fs;

use anyhow::Result;
use tempfile::tempdir;

use super::SessionStore;

#[test]
fn it_persists_a_login_across_instances() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("session.json");

    let store = SessionStore::new(path.clone());
    store.login("abc123", "admin")?;

    assert!(store.is_authenticated());
    assert!(store.is_admin());

    // A fresh instance on the same path simulates a process restart.
    let reloaded = SessionStore::new(path);
    assert!(reloaded.is_authenticated());
    assert_eq!(reloaded.token(), Some("abc123".to_string()));
    assert_eq!(reloaded.role(), Some("admin".to_string()));

    return Ok(());
}

#[test]
fn it_clears_the_session_on_logout() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("session.json");

    let store = SessionStore::new(path.clone());
    store.login("abc123", "admin")?;
    store.logout()?;

    assert!(!store.is_authenticated());
    assert!(!store.is_admin());
    assert!(!path.exists());

    return Ok(());
}

#[test]
fn it_treats_repeated_logouts_as_noops() -> Result<()> {
    let dir = tempdir()?;
    let store = SessionStore::new(dir.path().join("session.json"));

    store.logout()?;
    store.logout()?;

    assert!(!store.is_authenticated());
    return Ok(());
}

#[test]
fn it_is_not_admin_for_other_roles() -> Result<()> {
    let dir = tempdir()?;
    let store = SessionStore::new(dir.path().join("session.json"));
    store.login("abc123", "user")?;

    assert!(store.is_authenticated());
    assert!(!store.is_admin());

    return Ok(());
}

#[test]
fn it_treats_a_corrupt_session_file_as_logged_out() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("session.json");
    fs::write(&path, "not json")?;

    let store = SessionStore::new(path);
    assert!(!store.is_authenticated());
    assert!(store.token().is_none());

    return Ok(());
}
