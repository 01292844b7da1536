//! The classifier page: form, loading bar, prediction and history regions.
//!
//! The form and loading bar are reactive Leptos state. The prediction and
//! history regions hold server-rendered HTML and are spliced imperatively
//! through `NodeRef` handles; Leptos never diffs their contents. The delete
//! handler is attached once to the history container, which is never
//! replaced — only its inner HTML is — so listener attachment stays
//! idempotent across any number of submits.

use leptos::prelude::*;

use crate::components::toast_stack::show_toast;
use crate::state::form::FormState;
use crate::state::toast::ToastState;

/// Single page of the application.
#[component]
pub fn ClassifierPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let form = RwSignal::new(FormState::default());

    let prediction_ref = NodeRef::<leptos::html::Div>::new();
    let history_ref = NodeRef::<leptos::html::Div>::new();

    // The server renders history on GET /, so pull the initial fragments
    // once on mount through the same splice path the submit flow uses.
    Effect::new(move || {
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_page().await {
                Ok(html) => splice_fragments(&html, prediction_ref, history_ref),
                Err(err) => log::error!("failed to load message history: {err}"),
            }
        });
    });

    let do_submit = move || {
        if !form.get_untracked().can_submit() {
            return;
        }
        form.update(|f| f.submitting = true);

        #[cfg(feature = "csr")]
        {
            let message = form.get_untracked().message.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::classify(&message).await {
                    Ok(html) => splice_fragments(&html, prediction_ref, history_ref),
                    Err(err) => {
                        log::error!("classify request failed: {err}");
                        show_toast(toasts, "Classification failed", true);
                    }
                }
                // Runs on every completion: hides the loading bar, clears
                // the input, and disables the submit control again.
                form.update(FormState::reset_after_submit);
            });
        }
        #[cfg(not(feature = "csr"))]
        form.update(FormState::reset_after_submit);
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        do_submit();
    };

    // Delegated delete handler: resolve the click to a message id, then
    // fire the DELETE and reconcile the list on success.
    let on_history_click = move |ev: leptos::ev::MouseEvent| {
        #[cfg(feature = "csr")]
        {
            let Some(id) = crate::dom::fragments::delete_target_id(&ev) else {
                return;
            };
            ev.prevent_default();
            leptos::task::spawn_local(async move {
                match crate::net::api::delete_message(&id).await {
                    Ok(resp) if resp.success => {
                        if let Some(container) = history_ref.get_untracked() {
                            if crate::dom::fragments::remove_message(&container, &id) {
                                show_toast(toasts, "Message deleted successfully", false);
                            }
                        }
                    }
                    Ok(_) => {
                        log::error!("server rejected delete for message {id}");
                        show_toast(toasts, "Failed to delete message", true);
                    }
                    Err(err) => {
                        log::error!("failed to delete message {id}: {err}");
                        show_toast(toasts, "Failed to delete message", true);
                    }
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        let _ = ev;
    };

    let button_class = move || {
        if form.get().can_submit() {
            "btn btn-primary"
        } else {
            "btn btn-secondary"
        }
    };
    let loading_display = move || if form.get().submitting { "block" } else { "none" };

    view! {
        <div class="container py-4">
            <h1 class="mb-4">"Message Classifier"</h1>

            <form id="classifierForm" on:submit=on_submit>
                <div class="mb-3">
                    <input
                        id="messageInput"
                        class="form-control"
                        type="text"
                        name="message"
                        placeholder="Enter a message to classify..."
                        autocomplete="off"
                        prop:value=move || form.get().message
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|f| f.message = value);
                        }
                    />
                </div>
                <button
                    id="classifyButton"
                    type="submit"
                    class=button_class
                    disabled=move || !form.get().can_submit()
                >
                    "Classify"
                </button>
            </form>

            <div id="loadingBar" class="progress mt-3" style:display=loading_display>
                <div
                    class="progress-bar progress-bar-striped progress-bar-animated w-100"
                    role="progressbar"
                ></div>
            </div>

            // Server fragments land in these two regions.
            <div class="mt-5 d-flex justify-content-center" node_ref=prediction_ref></div>

            <div id="historyContainer" node_ref=history_ref on:click=on_history_click>
                <div
                    class="message-history"
                    inner_html=crate::dom::fragments::EMPTY_HISTORY_HTML
                ></div>
            </div>
        </div>
    }
}

/// Splice the prediction and history fragments out of a server response
/// into the live regions. Each fragment is independent: a response missing
/// one leaves the corresponding region untouched, as the original page did.
#[cfg(feature = "csr")]
fn splice_fragments(
    html: &str,
    prediction_ref: NodeRef<leptos::html::Div>,
    history_ref: NodeRef<leptos::html::Div>,
) {
    use crate::dom::fragments::{HISTORY_SELECTOR, PREDICTION_SELECTOR, extract_fragment};

    if let Some(fragment) = extract_fragment(html, PREDICTION_SELECTOR) {
        if let Some(target) = prediction_ref.get_untracked() {
            target.set_inner_html(&fragment);
        }
    }
    if let Some(fragment) = extract_fragment(html, HISTORY_SELECTOR) {
        if let Some(target) = history_ref.get_untracked() {
            target.set_inner_html(&fragment);
        }
    }
}
