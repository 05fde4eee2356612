//! TTL Tests
//!
//! Expiration is checked lazily on read: an expired entry stays stored until
//! a read (or delete, clear, cleanup) removes it.

use crate::*;

#[test]
fn test_value_live_before_ttl() {
    let (store, clock) = create_store_with_clock();
    let wf = unique_id("wf");

    store
        .set(ScopeKind::Workflow, Some(&wf), "ttlKey", "ttlValue", Some(5))
        .unwrap();
    clock.advance(Duration::from_millis(4_900));

    assert_eq!(
        store.get(ScopeKind::Workflow, Some(&wf), "ttlKey").unwrap(),
        Some(Value::from("ttlValue"))
    );
}

#[test]
fn test_value_gone_after_ttl() {
    let (store, clock) = create_store_with_clock();
    let wf = unique_id("wf");

    store
        .set(ScopeKind::Workflow, Some(&wf), "ttlKey", "ttlValue", Some(5))
        .unwrap();
    clock.advance(Duration::from_secs(6));

    assert_eq!(store.get(ScopeKind::Workflow, Some(&wf), "ttlKey").unwrap(), None);
    // Absence is stable
    assert_eq!(store.get(ScopeKind::Workflow, Some(&wf), "ttlKey").unwrap(), None);
}

#[test]
fn test_expired_returns_default() {
    let (store, clock) = create_store_with_clock();

    store.set(ScopeKind::Global, None, "k", 1, Some(1)).unwrap();
    clock.advance(Duration::from_secs(2));

    let value = store
        .get_or(ScopeKind::Global, None, "k", Value::from("default"))
        .unwrap();
    assert_eq!(value, Value::from("default"));
}

#[test]
fn test_expiry_boundary_is_strict() {
    let (store, clock) = create_store_with_clock();

    store.set(ScopeKind::Global, None, "k", 1, Some(5)).unwrap();

    clock.advance(Duration::from_secs(5));
    assert_eq!(store.get(ScopeKind::Global, None, "k").unwrap(), Some(Value::Int(1)));

    clock.advance(Duration::from_millis(1));
    assert_eq!(store.get(ScopeKind::Global, None, "k").unwrap(), None);
}

#[test]
fn test_expired_entry_occupies_memory_until_read() {
    let (store, clock) = create_store_with_clock();
    let ex = unique_id("ex");
    let scope = Scope::execution(&ex);

    store.set(ScopeKind::Execution, Some(&ex), "k", 1, Some(1)).unwrap();
    clock.advance(Duration::from_secs(10));

    assert_eq!(store.len(&scope), 1);
    assert!(store.keys(&scope).is_empty());

    store.get(ScopeKind::Execution, Some(&ex), "k").unwrap();
    assert_eq!(store.len(&scope), 0);
}

#[test]
fn test_delete_of_expired_entry_reports_true() {
    let (store, clock) = create_store_with_clock();
    let wf = unique_id("wf");

    store.set(ScopeKind::Workflow, Some(&wf), "k", 1, Some(1)).unwrap();
    clock.advance(Duration::from_secs(3));

    assert!(store.delete(ScopeKind::Workflow, Some(&wf), "k").unwrap());
}

#[test]
fn test_delete_after_expired_read_reports_false() {
    let (store, clock) = create_store_with_clock();

    store.set(ScopeKind::Global, None, "k", 1, Some(1)).unwrap();
    clock.advance(Duration::from_secs(3));

    assert!(store.get(ScopeKind::Global, None, "k").unwrap().is_none());
    assert!(!store.delete(ScopeKind::Global, None, "k").unwrap());
}

#[test]
fn test_zero_or_missing_ttl_never_expires() {
    let (store, clock) = create_store_with_clock();

    store.set(ScopeKind::Global, None, "zero", "a", Some(0)).unwrap();
    store.set(ScopeKind::Global, None, "none", "b", None).unwrap();
    clock.advance(Duration::from_secs(10 * 365 * 24 * 3600));

    assert_eq!(store.get(ScopeKind::Global, None, "zero").unwrap(), Some(Value::from("a")));
    assert_eq!(store.get(ScopeKind::Global, None, "none").unwrap(), Some(Value::from("b")));
}

#[test]
fn test_overwrite_resets_ttl() {
    let (store, clock) = create_store_with_clock();

    store.set(ScopeKind::Global, None, "k", 1, Some(5)).unwrap();
    clock.advance(Duration::from_secs(4));
    store.set(ScopeKind::Global, None, "k", 2, Some(5)).unwrap();
    clock.advance(Duration::from_secs(4));

    assert_eq!(store.get(ScopeKind::Global, None, "k").unwrap(), Some(Value::Int(2)));
}

#[test]
fn test_overwrite_can_remove_ttl() {
    let (store, clock) = create_store_with_clock();

    store.set(ScopeKind::Global, None, "k", 1, Some(1)).unwrap();
    store.set(ScopeKind::Global, None, "k", 2, None).unwrap();
    clock.advance(Duration::from_secs(60));

    assert_eq!(store.get(ScopeKind::Global, None, "k").unwrap(), Some(Value::Int(2)));
}

#[test]
fn test_fractional_ttl_via_put() {
    let (store, clock) = create_store_with_clock();
    let ttl = scopekv::ttl_from_secs_f64(1.5).unwrap();

    store.put(&Scope::Global, "k", 1, ttl);
    clock.advance(Duration::from_millis(1_400));
    assert!(store.fetch(&Scope::Global, "k").is_some());

    clock.advance(Duration::from_millis(200));
    assert!(store.fetch(&Scope::Global, "k").is_none());
}

#[test]
fn test_wall_clock_short_ttl() {
    let store = create_store();

    store.put(&Scope::Global, "k", 1, Some(Duration::from_millis(500)));
    assert!(store.fetch(&Scope::Global, "k").is_some());

    std::thread::sleep(Duration::from_millis(700));
    assert!(store.fetch(&Scope::Global, "k").is_none());
}
