//! Root application component with shared context providers.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};

use crate::components::toast_stack::ToastStack;
use crate::pages::classifier::ClassifierPage;
use crate::state::toast::ToastState;

/// Root application component.
///
/// Provides the toast queue as shared context and mounts the classifier
/// page plus the toast stack.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let toasts = RwSignal::new(ToastState::default());
    provide_context(toasts);

    view! {
        <Stylesheet
            id="bootstrap"
            href="https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css"
        />
        <Title text="Message Classifier"/>

        <ClassifierPage/>
        <ToastStack/>
    }
}
