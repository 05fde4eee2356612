//! Scope Identifier Tests
//!
//! Workflow and execution scopes need an identifier; the instance scope
//! ignores one.

use crate::*;

const SCOPED_KINDS: [ScopeKind; 2] = [ScopeKind::Workflow, ScopeKind::Execution];

#[test]
fn test_set_without_id_fails() {
    let store = create_store();

    for kind in SCOPED_KINDS {
        let err = store.set(kind, None, "k", 1, None).unwrap_err();
        assert_eq!(err, Error::ScopeIdRequired { kind });
    }
}

#[test]
fn test_every_keyed_op_without_id_fails() {
    let store = create_store();

    for kind in SCOPED_KINDS {
        assert!(store.get(kind, None, "k").unwrap_err().is_scope_id_required());
        assert!(store
            .get_or(kind, None, "k", Value::Null)
            .unwrap_err()
            .is_scope_id_required());
        assert!(store.delete(kind, None, "k").unwrap_err().is_scope_id_required());
        assert!(store.clear(kind, None).unwrap_err().is_scope_id_required());
    }
}

#[test]
fn test_empty_id_is_missing() {
    let store = create_store();

    for kind in SCOPED_KINDS {
        assert!(store.set(kind, Some(""), "k", 1, None).unwrap_err().is_scope_id_required());
    }
    assert_eq!(store.total_entries(), 0);
}

#[test]
fn test_failed_ops_do_not_mutate() {
    let store = create_store();
    store.set(ScopeKind::Global, None, "k", 1, None).unwrap();

    for kind in SCOPED_KINDS {
        let _ = store.set(kind, None, "k", 2, Some(5));
        let _ = store.clear(kind, None);
        let _ = store.delete(kind, None, "k");
    }

    assert_eq!(store.total_entries(), 1);
    assert_eq!(store.partition_count(ScopeKind::Workflow), 0);
    assert_eq!(store.partition_count(ScopeKind::Execution), 0);
    assert_eq!(store.get(ScopeKind::Global, None, "k").unwrap(), Some(Value::Int(1)));
}

#[test]
fn test_error_messages() {
    let store = create_store();

    let err = store.get(ScopeKind::Workflow, None, "k").unwrap_err();
    assert_eq!(err.to_string(), "Workflow scope requires a workflow ID");

    let err = store.get(ScopeKind::Execution, None, "k").unwrap_err();
    assert_eq!(err.to_string(), "Execution scope requires an execution ID");
}

#[test]
fn test_global_ignores_id() {
    let store = create_store();

    store.set(ScopeKind::Global, Some("anything"), "k", 1, None).unwrap();
    assert_eq!(
        store.get(ScopeKind::Global, Some("something-else"), "k").unwrap(),
        Some(Value::Int(1))
    );
    assert_eq!(store.get(ScopeKind::Global, None, "k").unwrap(), Some(Value::Int(1)));
}

#[test]
fn test_scope_tags_drive_api() {
    let store = create_store();

    let kind: ScopeKind = "instance".parse().unwrap();
    store.set(kind, None, "k", "tagged", None).unwrap();
    assert_eq!(store.get(ScopeKind::Global, None, "k").unwrap(), Some(Value::from("tagged")));

    let err: Error = "tenant".parse::<ScopeKind>().unwrap_err().into();
    assert!(err.is_invalid_input());
}
