use super::*;

// =============================================================
// can_submit
// =============================================================

#[test]
fn form_state_default_cannot_submit() {
    let state = FormState::default();
    assert!(!state.can_submit());
}

#[test]
fn whitespace_only_input_cannot_submit() {
    let state = FormState {
        message: "   \t\n".to_owned(),
        submitting: false,
    };
    assert!(!state.can_submit());
}

#[test]
fn non_empty_input_can_submit() {
    let state = FormState {
        message: "hello".to_owned(),
        submitting: false,
    };
    assert!(state.can_submit());
}

#[test]
fn padded_input_can_submit() {
    let state = FormState {
        message: "  win a free prize  ".to_owned(),
        submitting: false,
    };
    assert!(state.can_submit());
}

#[test]
fn in_flight_submit_blocks_resubmit() {
    let state = FormState {
        message: "hello".to_owned(),
        submitting: true,
    };
    assert!(!state.can_submit());
}

// =============================================================
// reset_after_submit
// =============================================================

#[test]
fn reset_clears_input_and_in_flight_flag() {
    let mut state = FormState {
        message: "hello".to_owned(),
        submitting: true,
    };
    state.reset_after_submit();
    assert_eq!(state.message, "");
    assert!(!state.submitting);
    assert!(!state.can_submit());
}
