//! Not Found Page

use leptos::prelude::*;

use crate::router::{Link, Route};

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found-page">
            <h1>"404"</h1>
            <p class="muted">"The page you're looking for doesn't exist."</p>
            <Link to=Route::Home class="btn btn-primary">"Back to Home"</Link>
        </div>
    }
}
