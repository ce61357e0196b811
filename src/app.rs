//! DevHub Frontend App
//!
//! Root component: provides the API client, session and router contexts,
//! then renders the page for the current route between header and footer.

use leptos::prelude::*;

use crate::api::ApiClient;
use crate::components::{Footer, Header};
use crate::config::Config;
use crate::context::AuthContext;
use crate::pages::{
    AboutPage, ContactPage, ExplorePage, IdeaDetailPage, LandingPage, LoginPage, NotFoundPage, ProfilePage,
    ProjectDetailPage, SignUpPage,
};
use crate::router::{provide_router, Route};

const SITE_NAME: &str = "DevHub";

#[component]
pub fn App() -> impl IntoView {
    let config = Config::from_build_env();
    let api = ApiClient::new(&config);
    log::info!("API base: {}", config.api_base);
    provide_context(config);
    provide_context(api.clone());

    // Provide context to all children
    let auth = AuthContext::new();
    provide_context(auth);
    auth.refresh(&api);

    let router = provide_router();

    Effect::new(move |_| {
        let title = format!("{} | {}", router.route().title(), SITE_NAME);
        document().set_title(&title);
    });

    let page = move || match router.route() {
        Route::Home => view! { <LandingPage/> }.into_any(),
        Route::Ideas => view! { <ExplorePage/> }.into_any(),
        Route::IdeaDetail(id) => view! { <IdeaDetailPage id=id/> }.into_any(),
        Route::ProjectDetail(id) => view! { <ProjectDetailPage id=id/> }.into_any(),
        Route::Login => view! { <LoginPage/> }.into_any(),
        Route::SignUp => view! { <SignUpPage/> }.into_any(),
        Route::Profile => view! { <ProfilePage/> }.into_any(),
        Route::About => view! { <AboutPage/> }.into_any(),
        Route::Contact => view! { <ContactPage/> }.into_any(),
        Route::NotFound => view! { <NotFoundPage/> }.into_any(),
    };

    view! {
        <div class="app-layout">
            <Header/>
            <main class="main-content">{page}</main>
            <Footer/>
        </div>
    }
}
