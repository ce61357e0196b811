//! Header Component
//!
//! Site navigation with the session-dependent user section and a
//! collapsible mobile menu.

use leptos::prelude::*;

use crate::api::use_api;
use crate::context::use_auth;
use crate::router::{use_router, Link, Route};

const NAV_LINKS: &[(&str, Route)] = &[
    ("Home", Route::Home),
    ("About", Route::About),
    ("Explore", Route::Ideas),
    ("Contact Us", Route::Contact),
];

#[component]
fn UserSection() -> impl IntoView {
    let auth = use_auth();
    let api = use_api();
    let router = use_router();

    let logout = move |_: leptos::ev::MouseEvent| {
        auth.logout(&api);
        router.navigate(Route::Home);
    };

    view! {
        {move || match auth.current_user.get() {
            Some(user) => {
                let initials = user.initials();
                let name = user.display_name();
                view! {
                <div class="user-section">
                    <Link to=Route::Profile class="avatar">{initials}</Link>
                    <span class="user-name">{name}</span>
                    <button class="btn btn-small" on:click=logout.clone()>"Logout"</button>
                </div>
                }
                .into_any()
            }
            None => view! {
                <div class="user-section">
                    <Link to=Route::Login class="btn btn-primary btn-small">"Get started"</Link>
                </div>
            }
            .into_any(),
        }}
    }
}

#[component]
pub fn Header() -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);
    let router = use_router();

    // Close the mobile menu after navigating
    Effect::new(move |_| {
        let _ = router.route();
        set_menu_open.set(false);
    });

    let nav_links = move || {
        NAV_LINKS
            .iter()
            .map(|(label, route)| view! { <Link to=route.clone() class="nav-link">{*label}</Link> })
            .collect_view()
    };

    view! {
        <nav class="site-header">
            <div class="header-inner">
                <Link to=Route::Home class="logo">
                    <span class="logo-mark">"</>"</span>
                    <span class="logo-text">"DevHub"</span>
                </Link>
                <div class="nav-links">{nav_links()}</div>
                <div class="header-user">
                    <UserSection/>
                </div>
                <button
                    class="menu-toggle"
                    aria-label="Toggle menu"
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    {move || if menu_open.get() { "✕" } else { "☰" }}
                </button>
            </div>
            <Show when=move || menu_open.get()>
                <div class="mobile-menu">
                    {nav_links()}
                    <UserSection/>
                </div>
            </Show>
        </nav>
    }
}
