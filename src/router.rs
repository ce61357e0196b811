//! Client-side Routing
//!
//! A small path-to-[`Route`] table over the History API. The current route
//! lives in a signal; `<App>` switches views on it.

use leptos::ev;
use leptos::prelude::*;
use percent_encoding::percent_decode_str;
use wasm_bindgen::JsValue;

use crate::api::encode_component;
use crate::models::IdeaId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Ideas,
    IdeaDetail(IdeaId),
    ProjectDetail(String),
    Login,
    SignUp,
    Profile,
    About,
    Contact,
    NotFound,
}

impl Route {
    /// Map a location path to a route. Query string and fragment are ignored.
    pub fn parse(path: &str) -> Route {
        let path = path.split(['?', '#']).next().unwrap_or("");
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Route::Home,
            ["ideas"] => Route::Ideas,
            ["ideas", id] => id.parse().map(Route::IdeaDetail).unwrap_or(Route::NotFound),
            ["projects", id] => match percent_decode_str(id).decode_utf8() {
                Ok(id) => Route::ProjectDetail(id.into_owned()),
                Err(_) => Route::NotFound,
            },
            ["login"] => Route::Login,
            ["signup"] => Route::SignUp,
            ["profile"] => Route::Profile,
            ["about"] => Route::About,
            ["contact"] => Route::Contact,
            _ => Route::NotFound,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Ideas => "/ideas".to_string(),
            Route::IdeaDetail(id) => format!("/ideas/{}", id),
            Route::ProjectDetail(id) => format!("/projects/{}", encode_component(id)),
            Route::Login => "/login".to_string(),
            Route::SignUp => "/signup".to_string(),
            Route::Profile => "/profile".to_string(),
            Route::About => "/about".to_string(),
            Route::Contact => "/contact".to_string(),
            Route::NotFound => "/404".to_string(),
        }
    }

    /// Document title suffix
    pub fn title(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Ideas => "Explore Ideas",
            Route::IdeaDetail(_) => "Idea",
            Route::ProjectDetail(_) => "Project",
            Route::Login => "Log In",
            Route::SignUp => "Sign Up",
            Route::Profile => "Profile",
            Route::About => "About",
            Route::Contact => "Contact",
            Route::NotFound => "Not Found",
        }
    }
}

/// Route signal shared through context
#[derive(Clone, Copy)]
pub struct Router {
    route: RwSignal<Route>,
}

impl Router {
    pub fn route(&self) -> Route {
        self.route.get()
    }

    pub fn navigate(&self, route: Route) {
        if self.route.get_untracked() == route {
            return;
        }
        let path = route.path();
        log::debug!("Navigate to {}", path);
        match window().history() {
            Ok(history) => {
                if let Err(e) = history.push_state_with_url(&JsValue::NULL, "", Some(&path)) {
                    log::warn!("pushState failed for {}: {:?}", path, e);
                }
            }
            Err(e) => log::warn!("History API unavailable: {:?}", e),
        }
        self.route.set(route);
        scroll_to_top();
    }
}

/// Create the router from the current location and follow back/forward
pub fn provide_router() -> Router {
    let initial = window()
        .location()
        .pathname()
        .map(|p| Route::parse(&p))
        .unwrap_or(Route::Home);
    let router = Router {
        route: RwSignal::new(initial),
    };

    let handle = window_event_listener(ev::popstate, move |_| {
        if let Ok(path) = window().location().pathname() {
            router.route.set(Route::parse(&path));
        }
    });
    on_cleanup(move || handle.remove());

    provide_context(router);
    router
}

pub fn use_router() -> Router {
    expect_context::<Router>()
}

pub fn scroll_to_top() {
    let options = web_sys::ScrollToOptions::new();
    options.set_top(0.0);
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    window().scroll_to_with_scroll_to_options(&options);
}

/// Anchor that navigates in-app; modified clicks keep browser behavior
#[component]
pub fn Link(
    #[prop(into)] to: Route,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let router = use_router();
    let href = to.path();
    let on_click = move |ev: ev::MouseEvent| {
        if ev.ctrl_key() || ev.meta_key() || ev.shift_key() || ev.button() != 0 {
            return;
        }
        ev.prevent_default();
        router.navigate(to.clone());
    };

    view! {
        <a href=href class=class on:click=on_click>
            {children()}
        </a>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_static_routes() {
        assert_eq!(Route::parse("/"), Route::Home);
        assert_eq!(Route::parse(""), Route::Home);
        assert_eq!(Route::parse("/ideas/"), Route::Ideas);
        assert_eq!(Route::parse("/signup"), Route::SignUp);
        assert_eq!(Route::parse("/contact?ref=footer"), Route::Contact);
        assert_eq!(Route::parse("/about#team"), Route::About);
    }

    #[test]
    fn test_parse_ids() {
        assert_eq!(Route::parse("/ideas/42"), Route::IdeaDetail(42));
        assert_eq!(Route::parse("/ideas/abc"), Route::NotFound);
        assert_eq!(
            Route::parse("/projects/6650f0a1b2"),
            Route::ProjectDetail("6650f0a1b2".to_string())
        );
        assert_eq!(Route::parse("/projects/a%20b"), Route::ProjectDetail("a b".to_string()));
    }

    #[test]
    fn test_unknown_paths() {
        assert_eq!(Route::parse("/nope"), Route::NotFound);
        assert_eq!(Route::parse("/ideas/1/extra"), Route::NotFound);
    }

    #[test]
    fn test_path_round_trip() {
        let routes = [
            Route::Home,
            Route::Ideas,
            Route::IdeaDetail(7),
            Route::ProjectDetail("p 1".to_string()),
            Route::Login,
            Route::SignUp,
            Route::Profile,
            Route::About,
            Route::Contact,
        ];
        for route in routes {
            assert_eq!(Route::parse(&route.path()), route);
        }
    }
}
