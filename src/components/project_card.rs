//! Project Card Component

use leptos::prelude::*;

use crate::models::Project;
use crate::router::{use_router, Route};

const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";

#[component]
pub fn ProjectCardView(project: Project) -> impl IntoView {
    let router = use_router();
    let Project { id, title, image_url, repo_url, live_url, tags, like_count, username, .. } = project;
    let image = image_url.unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string());
    let author = username.unwrap_or_else(|| "anonymous".to_string());

    view! {
        <article class="project-card" on:click=move |_| router.navigate(Route::ProjectDetail(id.clone()))>
            <div class="card-media">
                <img src=image alt=title.clone() class="card-image"/>
            </div>
            <div class="card-body">
                <div class="project-meta">
                    <span class="like-count">"♥ " {like_count}</span>
                    <span class="project-links">
                        {repo_url.map(|url| view! {
                            <a href=url target="_blank" rel="noopener noreferrer"
                                on:click=|ev| ev.stop_propagation()>"Code"</a>
                        })}
                        {live_url.map(|url| view! {
                            <a href=url target="_blank" rel="noopener noreferrer"
                                on:click=|ev| ev.stop_propagation()>"Live"</a>
                        })}
                    </span>
                </div>
                <h3>{title}</h3>
                <p class="muted">"by " {author}</p>
                <div class="tags">
                    {tags.into_iter().map(|tag| view! { <span class="tag">{tag}</span> }).collect_view()}
                </div>
            </div>
        </article>
    }
}
