//! Landing Page

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::use_api;
use crate::components::{LoadingSpinner, ProjectCardView, Testimonials};
use crate::models::Project;
use crate::router::{use_router, Link, Route};

const FEATURES: &[(&str, &str)] = &[
    (
        "Curated & Filtered",
        "Find projects by difficulty, tech stack, and time commitment. No more endless scrolling through generic ideas.",
    ),
    (
        "Community Driven",
        "See real implementations from other developers. Learn from their code, get inspired by their solutions.",
    ),
    (
        "Portfolio Ready",
        "Build projects that actually impress recruiters. Each quest is designed to demonstrate real-world skills.",
    ),
];

const REWARDS: &[(&str, &str)] = &[
    ("Earn Points", "Contribute ideas, showcase projects, and engage with the community to earn points."),
    ("Redeem Rewards", "Redeem your points for exclusive rewards, including swag, discounts, and more."),
    ("Level Up", "Level up your profile by earning points and showcasing your contributions."),
];

/// Most-liked projects from `GET /home`; hidden entirely when the request fails
#[component]
fn FeaturedProjects() -> impl IntoView {
    let api = use_api();
    let (projects, set_projects) = signal(None::<Vec<Project>>);

    Effect::new(move |_| {
        let api = api.clone();
        spawn_local(async move {
            match api.featured_projects().await {
                Ok(list) => set_projects.set(Some(list)),
                Err(e) => {
                    log::warn!("Failed to load featured projects: {}", e);
                    set_projects.set(Some(Vec::new()));
                }
            }
        });
    });

    view! {
        <section class="featured-projects">
            <h2>"Featured project implementations"</h2>
            <p class="muted">"See how other developers tackled these challenges"</p>
            {move || match projects.get() {
                None => view! { <LoadingSpinner label="Loading projects..."/> }.into_any(),
                Some(list) if list.is_empty() => view! {
                    <p class="muted">"No projects have been shared yet. Be the first!"</p>
                }
                .into_any(),
                Some(list) => view! {
                    <div class="card-grid">
                        {list.into_iter().map(|p| view! { <ProjectCardView project=p/> }).collect_view()}
                    </div>
                }
                .into_any(),
            }}
        </section>
    }
}

#[component]
pub fn LandingPage() -> impl IntoView {
    let router = use_router();

    view! {
        <div class="landing-page">
            <section class="hero">
                <h1>"Build, share, and discover" <span class="accent block">"extraordinary projects"</span></h1>
                <p>
                    "DevHub is the antidote to generic to-do lists. Find curated project ideas, showcase your
                    work, and build a portfolio that truly impresses recruiters."
                </p>
                <div class="hero-actions">
                    <button class="btn btn-primary btn-large" on:click=move |_| router.navigate(Route::Ideas)>
                        "Start your quest →"
                    </button>
                    <button class="btn btn-outline btn-large" on:click=move |_| router.navigate(Route::Ideas)>
                        "Browse projects"
                    </button>
                </div>
            </section>

            <section class="features">
                <h2>"Beyond tutorials, into greatness"</h2>
                <p class="muted">"Move past basic tutorials and build projects that showcase your real skills"</p>
                <div class="feature-grid">
                    {FEATURES
                        .iter()
                        .map(|(title, text)| view! {
                            <div class="feature-card">
                                <h3>{*title}</h3>
                                <p class="muted">{*text}</p>
                            </div>
                        })
                        .collect_view()}
                </div>
            </section>

            <FeaturedProjects/>

            <section class="rewards">
                <h2>"Earn points. Redeem rewards." <span class="accent block">"Level up."</span></h2>
                <p class="muted">
                    "Contribute ideas, showcase projects, and engage with the community to earn points. Redeem
                    points for exclusive rewards and level up your profile."
                </p>
                <div class="feature-grid">
                    {REWARDS
                        .iter()
                        .map(|(title, text)| view! {
                            <div class="reward-card">
                                <h3>{*title}</h3>
                                <p>{*text}</p>
                            </div>
                        })
                        .collect_view()}
                </div>
            </section>

            <Testimonials/>

            <section class="cta">
                <h2>"Ready to start your coding adventure?"</h2>
                <p>"Join thousands of developers building impressive projects and showcasing their skills"</p>
                <div class="hero-actions">
                    <Link to=Route::Ideas class="btn btn-primary btn-large">"Browse projects"</Link>
                    <Link to=Route::SignUp class="btn btn-outline btn-large">"Join the community"</Link>
                </div>
            </section>
        </div>
    }
}
