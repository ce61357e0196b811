//! Profile Page
//!
//! The logged-in user's account card, their submitted projects and a form
//! to share a new implementation.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{use_api, NewProjectArgs};
use crate::components::{ErrorPanel, FormField, LoadingSpinner, ProjectCardView};
use crate::context::use_auth;
use crate::models::{Project, User};
use crate::router::{Link, Route};
use crate::validation::{parse_tags, validate_project, ProjectErrors};

#[component]
fn SubmitProjectForm(on_submitted: WriteSignal<Vec<Project>>) -> impl IntoView {
    let api = use_api();
    let title = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let repo_url = RwSignal::new(String::new());
    let live_url = RwSignal::new(String::new());
    let tags = RwSignal::new(String::new());
    let errors = RwSignal::new(ProjectErrors::default());
    let (submitting, set_submitting) = signal(false);
    let (result, set_result) = signal(None::<Result<String, String>>);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let checked = validate_project(&title.get(), &description.get(), &repo_url.get(), &live_url.get());
        let valid = checked.is_empty();
        errors.set(checked);
        if !valid || submitting.get() {
            return;
        }

        set_submitting.set(true);
        set_result.set(None);
        let api = api.clone();
        spawn_local(async move {
            let title_text = title.get_untracked();
            let description_text = description.get_untracked();
            let repo_text = repo_url.get_untracked();
            let live_text = live_url.get_untracked();
            let args = NewProjectArgs {
                title: title_text.trim(),
                description: description_text.trim(),
                repo_url: repo_text.trim(),
                live_url: Some(live_text.trim()).filter(|l| !l.is_empty()),
                tags: parse_tags(&tags.get_untracked()),
            };
            match api.submit_project(&args).await {
                Ok(project) => {
                    log::info!("Submitted project {}", project.id);
                    on_submitted.update(|list| list.push(project));
                    for field in [title, description, repo_url, live_url, tags] {
                        field.set(String::new());
                    }
                    set_result.set(Some(Ok("Project submitted successfully".to_string())));
                }
                Err(e) => {
                    log::error!("Project submission failed: {}", e);
                    set_result.set(Some(Err(e.to_string())));
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <form class="submit-project" on:submit=submit novalidate=true>
            <h2>"Share an Implementation"</h2>
            {move || result.get().map(|r| match r {
                Ok(msg) => view! { <p class="notice success">{msg}</p> }.into_any(),
                Err(msg) => view! { <p class="notice failure">{msg}</p> }.into_any(),
            })}
            <FormField id="project-title" label="Title" value=title error=Signal::derive(move || errors.get().title)/>
            <FormField
                id="project-description"
                label="Description"
                placeholder="What did you build? Markdown is supported."
                value=description
                error=Signal::derive(move || errors.get().description)
            />
            <FormField
                id="project-repo"
                label="Repository URL"
                input_type="url"
                placeholder="https://github.com/you/project"
                value=repo_url
                error=Signal::derive(move || errors.get().repo_url)
            />
            <FormField
                id="project-live"
                label="Live URL (optional)"
                input_type="url"
                value=live_url
                error=Signal::derive(move || errors.get().live_url)
            />
            <FormField
                id="project-tags"
                label="Tags"
                placeholder="rust, wasm, leptos"
                value=tags
                error=Signal::derive(|| None::<&'static str>)
            />
            <button type="submit" class="btn btn-primary" disabled=move || submitting.get()>
                {move || if submitting.get() { "Submitting..." } else { "Submit Project" }}
            </button>
        </form>
    }
}

#[component]
fn ProfileBody(user: User) -> impl IntoView {
    let api = use_api();
    let (projects, set_projects) = signal(Vec::<Project>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(None::<String>);
    let user_id = user.id.clone();

    Effect::new(move |_| {
        let api = api.clone();
        let user_id = user_id.clone();
        spawn_local(async move {
            match api.user_profile(&user_id).await {
                Ok(profile) => set_projects.set(profile.projects),
                Err(e) => {
                    log::error!("Failed to load profile {}: {}", user_id, e);
                    set_error.set(Some(e.to_string()));
                }
            }
            set_loading.set(false);
        });
    });

    let avatar = match user.avatar_url.clone() {
        Some(src) => view! { <img class="avatar avatar-large" src=src alt=user.display_name()/> }.into_any(),
        None => view! { <span class="avatar avatar-large">{user.initials()}</span> }.into_any(),
    };

    view! {
        <section class="profile-card">
            {avatar}
            <div>
                <h1>{user.display_name()}</h1>
                {user.email.clone().map(|email| view! { <p class="muted">{email}</p> })}
                {user.github_username.clone().map(|gh| {
                    let href = format!("https://github.com/{}", gh);
                    view! { <a href=href target="_blank" rel="noopener noreferrer">"@" {gh}</a> }
                })}
            </div>
        </section>
        <section class="profile-projects">
            <h2>"Your Projects"</h2>
            {move || {
                if loading.get() {
                    view! { <LoadingSpinner label="Loading projects..."/> }.into_any()
                } else if let Some(message) = error.get() {
                    view! { <ErrorPanel message=message/> }.into_any()
                } else if projects.with(Vec::is_empty) {
                    view! { <p class="muted">"You haven't shared any projects yet."</p> }.into_any()
                } else {
                    view! {
                        <div class="card-grid">
                            {projects.get().into_iter().map(|p| view! { <ProjectCardView project=p/> }).collect_view()}
                        </div>
                    }
                    .into_any()
                }
            }}
        </section>
        <SubmitProjectForm on_submitted=set_projects/>
    }
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = use_auth();

    view! {
        <div class="profile-page">
            {move || match (auth.current_user.get(), auth.checked.get()) {
                (Some(user), _) => view! { <ProfileBody user=user/> }.into_any(),
                (None, false) => view! { <LoadingSpinner label="Checking session..."/> }.into_any(),
                (None, true) => view! {
                    <div class="login-prompt">
                        <h2>"You're not logged in"</h2>
                        <p>
                            <Link to=Route::Login>"Log in"</Link>
                            " or "
                            <Link to=Route::SignUp>"create an account"</Link>
                            " to see your projects."
                        </p>
                    </div>
                }
                .into_any(),
            }}
        </div>
    }
}
