//! Scope Isolation Tests
//!
//! The same key string in different scopes names unrelated entries.

use crate::*;

#[test]
fn test_workflows_are_isolated() {
    let store = create_store();
    let (a, b) = (unique_id("wf"), unique_id("wf"));

    store.set(ScopeKind::Workflow, Some(&a), "k", "v1", None).unwrap();
    store.set(ScopeKind::Workflow, Some(&b), "k", "v2", None).unwrap();

    assert_eq!(store.get(ScopeKind::Workflow, Some(&a), "k").unwrap(), Some(Value::from("v1")));
    assert_eq!(store.get(ScopeKind::Workflow, Some(&b), "k").unwrap(), Some(Value::from("v2")));
}

#[test]
fn test_kinds_are_isolated_for_same_key() {
    let store = create_store();
    let id = unique_id("shared");

    store.set(ScopeKind::Global, None, "scopeKey", "instanceValue", None).unwrap();
    store.set(ScopeKind::Workflow, Some(&id), "scopeKey", "workflowValue", None).unwrap();
    store.set(ScopeKind::Execution, Some(&id), "scopeKey", "executionValue", None).unwrap();

    assert_eq!(
        store.get(ScopeKind::Global, None, "scopeKey").unwrap(),
        Some(Value::from("instanceValue"))
    );
    assert_eq!(
        store.get(ScopeKind::Workflow, Some(&id), "scopeKey").unwrap(),
        Some(Value::from("workflowValue"))
    );
    assert_eq!(
        store.get(ScopeKind::Execution, Some(&id), "scopeKey").unwrap(),
        Some(Value::from("executionValue"))
    );
}

#[test]
fn test_delete_doesnt_affect_other_scope() {
    let store = create_store();
    let (a, b) = (unique_id("wf"), unique_id("wf"));

    store.set(ScopeKind::Workflow, Some(&a), "k", 1, None).unwrap();
    store.set(ScopeKind::Workflow, Some(&b), "k", 2, None).unwrap();
    store.set(ScopeKind::Global, None, "k", 3, None).unwrap();

    store.delete(ScopeKind::Workflow, Some(&a), "k").unwrap();

    assert!(store.get(ScopeKind::Workflow, Some(&a), "k").unwrap().is_none());
    assert_eq!(store.get(ScopeKind::Workflow, Some(&b), "k").unwrap(), Some(Value::Int(2)));
    assert_eq!(store.get(ScopeKind::Global, None, "k").unwrap(), Some(Value::Int(3)));
}

#[test]
fn test_expiry_in_one_scope_leaves_others() {
    let (store, clock) = create_store_with_clock();
    let wf = unique_id("wf");

    store.set(ScopeKind::Workflow, Some(&wf), "k", 1, Some(1)).unwrap();
    store.set(ScopeKind::Global, None, "k", 2, None).unwrap();
    clock.advance(Duration::from_secs(2));

    assert!(store.get(ScopeKind::Workflow, Some(&wf), "k").unwrap().is_none());
    assert_eq!(store.get(ScopeKind::Global, None, "k").unwrap(), Some(Value::Int(2)));
}

#[test]
fn test_keys_only_show_scope_keys() {
    let store = create_store();
    let (a, b) = (Scope::workflow(unique_id("wf")), Scope::workflow(unique_id("wf")));

    store.put(&a, "a1", 1, None);
    store.put(&a, "a2", 2, None);
    store.put(&b, "b1", 3, None);

    assert_eq!(store.keys(&a), vec!["a1", "a2"]);
    assert_eq!(store.keys(&b), vec!["b1"]);
}

#[test]
fn test_stores_are_independent() {
    let first = create_store();
    let second = create_store();

    first.set(ScopeKind::Global, None, "k", 1, None).unwrap();

    assert!(second.get(ScopeKind::Global, None, "k").unwrap().is_none());
}
