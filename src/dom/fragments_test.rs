use super::*;

#[test]
fn empty_history_markup_carries_placeholder_text() {
    assert!(EMPTY_HISTORY_HTML.contains("No messages classified yet."));
    assert!(EMPTY_HISTORY_HTML.contains("text-muted"));
}

#[test]
fn message_id_attr_matches_server_markup() {
    assert_eq!(MESSAGE_ID_ATTR, "data-message-id");
    assert_eq!(HISTORY_SELECTOR, "#historyContainer");
    assert_eq!(DELETE_TRIGGER_SELECTOR, ".delete-message");
}
