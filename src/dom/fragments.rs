//! Fragment extraction and history-list surgery.
//!
//! The server answers `GET /` and `POST /` with a full page; this module
//! parses that text in a detached element and lifts out the two fragments
//! the page splices in place. It also owns the delegated delete-click
//! resolution and the removal of a single history node.
//!
//! Everything touching the DOM is gated behind `csr` since it requires a
//! browser environment; the selector and markup constants are shared with
//! the host-side tests.

#[cfg(test)]
#[path = "fragments_test.rs"]
mod fragments_test;

/// Selector for the prediction block in the server-rendered page.
pub const PREDICTION_SELECTOR: &str = ".mt-5.d-flex.justify-content-center";

/// Selector for the history block in the server-rendered page.
pub const HISTORY_SELECTOR: &str = "#historyContainer";

/// Selector for the message list inside the history block.
pub const MESSAGE_LIST_SELECTOR: &str = ".message-history";

/// Selector for the delete trigger inside a history entry.
pub const DELETE_TRIGGER_SELECTOR: &str = ".delete-message";

/// Attribute correlating a history node with its server-side record.
pub const MESSAGE_ID_ATTR: &str = "data-message-id";

/// Markup shown once the last history entry has been deleted.
pub const EMPTY_HISTORY_HTML: &str = r#"<p class="text-muted mb-0">No messages classified yet.</p>"#;

/// Parse `html` in a detached `<div>` and return the inner HTML of the
/// first element matching `selector`, if any.
#[cfg(feature = "csr")]
pub fn extract_fragment(html: &str, selector: &str) -> Option<String> {
    let document = web_sys::window()?.document()?;
    let scratch = document.create_element("div").ok()?;
    scratch.set_inner_html(html);
    let found = scratch.query_selector(selector).ok().flatten()?;
    Some(found.inner_html())
}

/// Resolve a delegated click on the history container to a message id.
///
/// Walks from the event target to the closest delete trigger, then to the
/// closest ancestor carrying the message-id attribute. Clicks elsewhere in
/// the container resolve to `None`.
#[cfg(feature = "csr")]
pub fn delete_target_id(ev: &web_sys::MouseEvent) -> Option<String> {
    use wasm_bindgen::JsCast;

    let target: web_sys::Element = ev.target()?.dyn_into().ok()?;
    let trigger = target.closest(DELETE_TRIGGER_SELECTOR).ok().flatten()?;
    let node = trigger.closest(&format!("[{MESSAGE_ID_ATTR}]")).ok().flatten()?;
    node.get_attribute(MESSAGE_ID_ATTR)
}

/// Remove the history node tagged with `id` from `container`, substituting
/// the empty-history placeholder if the message list is left empty.
///
/// Returns whether a node was actually removed; a stale id (already gone,
/// or never rendered) leaves the DOM untouched.
#[cfg(feature = "csr")]
pub fn remove_message(container: &web_sys::HtmlDivElement, id: &str) -> bool {
    use wasm_bindgen::JsCast;

    let tagged = match container.query_selector_all(&format!("[{MESSAGE_ID_ATTR}]")) {
        Ok(list) => list,
        Err(_) => return false,
    };

    // Match on the attribute value rather than interpolating the opaque id
    // into a selector string.
    let mut removed = false;
    for i in 0..tagged.length() {
        let Some(node) = tagged.get(i) else { continue };
        let Ok(el) = node.dyn_into::<web_sys::Element>() else {
            continue;
        };
        if el.get_attribute(MESSAGE_ID_ATTR).as_deref() == Some(id) {
            el.remove();
            removed = true;
            break;
        }
    }

    if removed {
        if let Ok(Some(list)) = container.query_selector(MESSAGE_LIST_SELECTOR) {
            if list.child_element_count() == 0 {
                list.set_inner_html(EMPTY_HISTORY_HTML);
            }
        }
    }
    removed
}
