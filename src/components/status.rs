//! Loading and Error Panels

use leptos::prelude::*;

#[component]
pub fn LoadingSpinner(#[prop(into)] label: String) -> impl IntoView {
    view! {
        <div class="loading" role="status">
            <span class="spinner"></span>
            <span>{label}</span>
        </div>
    }
}

/// Error message with an optional "Try Again" button
#[component]
pub fn ErrorPanel(
    #[prop(into)] message: Signal<String>,
    #[prop(optional)] on_retry: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <div class="error-panel" role="alert">
            <h2>"Something went wrong"</h2>
            <p class="error-message">{move || message.get()}</p>
            {on_retry.map(|retry| view! {
                <button class="btn btn-primary" on:click=move |_| retry.run(())>
                    "Try Again"
                </button>
            })}
        </div>
    }
}
