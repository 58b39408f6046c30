use super::*;
use std::collections::HashMap;

fn overrides(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn test_scope_sets_and_unsets_absent_key() {
    let _lock = test_env_lock();
    std::env::remove_var("OPSRUNNER_SCOPE_ABSENT");

    let mut restore = scope(&overrides(&[("OPSRUNNER_SCOPE_ABSENT", "bar")])).unwrap();
    assert_eq!(std::env::var("OPSRUNNER_SCOPE_ABSENT").unwrap(), "bar");

    restore.restore();
    assert!(std::env::var_os("OPSRUNNER_SCOPE_ABSENT").is_none());
}

#[test]
fn test_scope_restores_previous_value() {
    let _lock = test_env_lock();
    std::env::set_var("OPSRUNNER_SCOPE_PRESENT", "old");

    let mut restore = scope(&overrides(&[("OPSRUNNER_SCOPE_PRESENT", "new")])).unwrap();
    assert_eq!(std::env::var("OPSRUNNER_SCOPE_PRESENT").unwrap(), "new");

    restore.restore();
    assert_eq!(std::env::var("OPSRUNNER_SCOPE_PRESENT").unwrap(), "old");
    std::env::remove_var("OPSRUNNER_SCOPE_PRESENT");
}

#[test]
fn test_restore_is_idempotent() {
    let _lock = test_env_lock();
    std::env::remove_var("OPSRUNNER_SCOPE_TWICE");

    let mut restore = scope(&overrides(&[("OPSRUNNER_SCOPE_TWICE", "1")])).unwrap();
    restore.restore();
    assert!(restore.is_restored());

    // Something else sets the key after the first restore; a second restore
    // must leave it alone.
    std::env::set_var("OPSRUNNER_SCOPE_TWICE", "later");
    restore.restore();
    assert_eq!(std::env::var("OPSRUNNER_SCOPE_TWICE").unwrap(), "later");
    std::env::remove_var("OPSRUNNER_SCOPE_TWICE");
}

#[test]
fn test_empty_overrides_is_noop() {
    let _lock = test_env_lock();
    let before: Vec<_> = std::env::vars_os().collect();
    let mut restore = scope(&HashMap::new()).unwrap();
    assert_eq!(restore.keys().count(), 0);
    restore.restore();
    let after: Vec<_> = std::env::vars_os().collect();
    assert_eq!(before.len(), after.len());
}

#[test]
fn test_drop_restores_environment() {
    let _lock = test_env_lock();
    std::env::remove_var("OPSRUNNER_SCOPE_DROP");

    {
        let _restore = scope(&overrides(&[("OPSRUNNER_SCOPE_DROP", "x")])).unwrap();
        assert!(std::env::var_os("OPSRUNNER_SCOPE_DROP").is_some());
    }
    assert!(std::env::var_os("OPSRUNNER_SCOPE_DROP").is_none());
}

#[test]
fn test_invalid_key_returns_partial_restore() {
    let _lock = test_env_lock();
    std::env::remove_var("OPSRUNNER_A_VALID");

    // Sorted order applies "OPSRUNNER_A_VALID" before the invalid key.
    let err = scope(&overrides(&[
        ("OPSRUNNER_A_VALID", "yes"),
        ("OPSRUNNER_B=BAD", "no"),
    ]))
    .unwrap_err();
    assert_eq!(err.key(), "OPSRUNNER_B=BAD");
    assert!(err.to_string().contains("contains '='"));
    assert_eq!(std::env::var("OPSRUNNER_A_VALID").unwrap(), "yes");

    let mut restore = err.into_restore();
    assert_eq!(restore.keys().collect::<Vec<_>>(), vec!["OPSRUNNER_A_VALID"]);
    restore.restore();
    assert!(std::env::var_os("OPSRUNNER_A_VALID").is_none());
}

#[test]
fn test_empty_key_is_rejected() {
    let _lock = test_env_lock();
    let err = scope(&overrides(&[("", "value")])).unwrap_err();
    assert!(err.to_string().contains("name is empty"));
}
