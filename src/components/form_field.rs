//! Form Field Component

use leptos::prelude::*;

use crate::validation::FieldError;

/// Labelled input bound to a string signal, with its validation message
#[component]
pub fn FormField(
    #[prop(into)] id: String,
    #[prop(into)] label: String,
    #[prop(optional, into)] input_type: Option<String>,
    #[prop(optional, into)] placeholder: String,
    value: RwSignal<String>,
    #[prop(into)] error: Signal<FieldError>,
) -> impl IntoView {
    let input_class = move || match (error.get(), value.with(String::is_empty)) {
        (Some(_), _) => "input invalid",
        (None, false) => "input valid",
        (None, true) => "input",
    };

    view! {
        <div class="form-field">
            <label for=id.clone()>{label}</label>
            <input
                id=id
                type=input_type.unwrap_or_else(|| "text".to_string())
                class=input_class
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
            {move || error.get().map(|msg| view! { <p class="field-error">{msg}</p> })}
        </div>
    }
}
