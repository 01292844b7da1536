use super::*;

// =============================================================
// push
// =============================================================

#[test]
fn toast_state_default_is_empty() {
    let state = ToastState::default();
    assert!(state.toasts.is_empty());
}

#[test]
fn push_assigns_distinct_ids_in_order() {
    let mut state = ToastState::default();
    let a = state.push("first", false);
    let b = state.push("second", true);
    assert_ne!(a, b);
    assert_eq!(state.toasts.len(), 2);
    assert_eq!(state.toasts[0].message, "first");
    assert_eq!(state.toasts[1].message, "second");
}

#[test]
fn push_preserves_error_flag() {
    let mut state = ToastState::default();
    state.push("ok", false);
    state.push("boom", true);
    assert!(!state.toasts[0].is_error);
    assert!(state.toasts[1].is_error);
}

// =============================================================
// dismiss
// =============================================================

#[test]
fn dismiss_removes_only_matching_toast() {
    let mut state = ToastState::default();
    let a = state.push("first", false);
    let b = state.push("second", false);
    state.dismiss(a);
    assert_eq!(state.toasts.len(), 1);
    assert_eq!(state.toasts[0].id, b);
}

#[test]
fn dismiss_unknown_id_is_noop() {
    let mut state = ToastState::default();
    state.push("only", false);
    state.dismiss(999);
    assert_eq!(state.toasts.len(), 1);
}

#[test]
fn ids_are_not_reused_after_dismiss() {
    let mut state = ToastState::default();
    let a = state.push("first", false);
    state.dismiss(a);
    let b = state.push("second", false);
    assert_ne!(a, b);
}
