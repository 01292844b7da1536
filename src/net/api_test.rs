use super::*;

// =============================================================
// delete_endpoint
// =============================================================

#[test]
fn delete_endpoint_embeds_id() {
    assert_eq!(delete_endpoint("42"), "/delete_message/42");
}

#[test]
fn delete_endpoint_passes_opaque_ids_through() {
    assert_eq!(delete_endpoint("a1-b2"), "/delete_message/a1-b2");
}

// =============================================================
// DeleteResponse decoding
// =============================================================

#[test]
fn delete_response_decodes_success_true() {
    let resp: DeleteResponse = serde_json::from_str(r#"{"success":true}"#).expect("decode");
    assert!(resp.success);
}

#[test]
fn delete_response_decodes_success_false() {
    let resp: DeleteResponse = serde_json::from_str(r#"{"success":false}"#).expect("decode");
    assert!(!resp.success);
}

#[test]
fn delete_response_ignores_extra_fields() {
    let resp: DeleteResponse =
        serde_json::from_str(r#"{"success":true,"error":null}"#).expect("decode");
    assert!(resp.success);
}

#[test]
fn delete_response_requires_success_field() {
    let result = serde_json::from_str::<DeleteResponse>("{}");
    assert!(result.is_err());
}

#[test]
fn delete_response_rejects_non_json_bodies() {
    let result = serde_json::from_str::<DeleteResponse>("<html>oops</html>");
    assert!(result.is_err());
}
