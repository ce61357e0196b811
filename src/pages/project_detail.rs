//! Project Detail Page

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::use_api;
use crate::components::{ErrorPanel, LoadingSpinner};
use crate::markdown::parse_markdown;
use crate::models::{IdeaId, Project};
use crate::router::{Link, Route};

/// Like button with a local optimistic count; a project can only be liked once per visit
#[component]
fn ProjectLikeButton(project_id: String, initial_count: u32) -> impl IntoView {
    let api = use_api();
    let (count, set_count) = signal(initial_count);
    let (liked, set_liked) = signal(false);

    let like = move |_| {
        if liked.get() {
            return;
        }
        set_liked.set(true);
        set_count.update(|c| *c += 1);

        let api = api.clone();
        let id = project_id.clone();
        spawn_local(async move {
            if let Err(e) = api.like_project(&id).await {
                log::warn!("Failed to like project {}: {}", id, e);
            }
        });
    };

    view! {
        <button
            class=move || if liked.get() { "btn btn-outline liked" } else { "btn btn-outline" }
            disabled=move || liked.get()
            on:click=like
        >
            {move || if liked.get() { "♥ Liked" } else { "♡ Like" }}
            " (" {move || count.get()} ")"
        </button>
    }
}

#[component]
fn ProjectBody(project: Project) -> impl IntoView {
    let Project { id, title, description, image_url, repo_url, live_url, tags, like_count, username, idea_id } = project;
    let about = parse_markdown(description.as_deref().unwrap_or("No description provided."));
    let idea_link = idea_id.and_then(|raw| raw.parse::<IdeaId>().ok()).map(|idea| {
        view! {
            <p>
                "Built from "
                <Link to=Route::IdeaDetail(idea)>"this idea"</Link>
            </p>
        }
    });

    view! {
        {image_url.map(|src| view! {
            <section class="project-hero">
                <img src=src alt=title.clone()/>
            </section>
        })}
        <div class="project-header">
            <div>
                <h1>{title.clone()}</h1>
                <p class="muted">"By " {username.unwrap_or_else(|| "anonymous".to_string())}</p>
            </div>
            <ProjectLikeButton project_id=id initial_count=like_count/>
        </div>
        <div class="project-layout">
            <section class="project-main">
                <h2>"About"</h2>
                <div class="markdown" inner_html=about></div>
                {idea_link}
            </section>
            <aside class="project-side">
                <h3>"Tech Stack"</h3>
                <div class="tags">
                    {tags.into_iter().map(|tag| view! { <span class="tag">{tag}</span> }).collect_view()}
                </div>
                <div class="project-links">
                    {repo_url.map(|url| view! {
                        <a class="btn btn-outline" href=url target="_blank" rel="noopener noreferrer">"View Code"</a>
                    })}
                    {live_url.map(|url| view! {
                        <a class="btn btn-primary" href=url target="_blank" rel="noopener noreferrer">"Live Demo"</a>
                    })}
                </div>
            </aside>
        </div>
    }
}

#[component]
pub fn ProjectDetailPage(id: String) -> impl IntoView {
    let api = use_api();
    let (project, set_project) = signal(None::<Project>);
    let (error, set_error) = signal(None::<String>);
    let (reload, set_reload) = signal(0u32);

    Effect::new(move |_| {
        let _ = reload.get();
        set_error.set(None);
        let api = api.clone();
        let id = id.clone();
        spawn_local(async move {
            match api.get_project(&id).await {
                Ok(p) => set_project.set(Some(p)),
                Err(e) => {
                    log::error!("Failed to load project {}: {}", id, e);
                    set_error.set(Some(e.to_string()));
                }
            }
        });
    });

    let retry = Callback::new(move |_| set_reload.update(|n| *n += 1));

    view! {
        <div class="project-detail-page">
            {move || match (project.get(), error.get()) {
                (Some(p), _) => view! { <ProjectBody project=p/> }.into_any(),
                (None, Some(message)) => view! { <ErrorPanel message=message on_retry=retry/> }.into_any(),
                (None, None) => view! { <LoadingSpinner label="Loading project..."/> }.into_any(),
            }}
        </div>
    }
}
