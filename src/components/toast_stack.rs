//! Transient notification stack rendered in a fixed top-right region.

use leptos::prelude::*;

use crate::state::toast::{Toast, ToastState};

/// How long a toast stays visible before dismissing itself.
pub const TOAST_HIDE_MS: u64 = 5000;

/// Push a toast and schedule its auto-dismiss.
///
/// The timer races the close button; `ToastState::dismiss` tolerates an
/// already-removed id, so whichever fires second is a no-op.
pub fn show_toast(toasts: RwSignal<ToastState>, message: &str, is_error: bool) {
    let mut id = 0;
    toasts.update(|t| id = t.push(message, is_error));

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(std::time::Duration::from_millis(TOAST_HIDE_MS)).await;
        toasts.update(|t| t.dismiss(id));
    });
    #[cfg(not(feature = "csr"))]
    let _ = id;
}

/// Always-mounted toast region. Success toasts are green, error toasts red,
/// each with a close button.
#[component]
pub fn ToastStack() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div id="toastContainer" style="position: fixed; top: 20px; right: 20px; z-index: 1050;">
            <For
                each=move || toasts.get().toasts
                key=|toast| toast.id
                children=move |toast| {
                    let Toast { id, message, is_error } = toast;
                    let class = if is_error {
                        "toast show align-items-center bg-danger text-white"
                    } else {
                        "toast show align-items-center bg-success text-white"
                    };
                    view! {
                        <div class=class role="alert" aria-live="assertive" aria-atomic="true">
                            <div class="d-flex">
                                <div class="toast-body">{message}</div>
                                <button
                                    type="button"
                                    class="btn-close btn-close-white me-2 m-auto"
                                    aria-label="Close"
                                    on:click=move |_| toasts.update(|t| t.dismiss(id))
                                ></button>
                            </div>
                        </div>
                    }
                }
            />
        </div>
    }
}
