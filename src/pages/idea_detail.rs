//! Idea Detail Page
//!
//! Problem statement and solution rendered from Markdown, plus the comment
//! thread. Idea and comments are fetched independently; a failed comment
//! fetch only leaves the thread empty.

use chrono::Utc;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::use_api;
use crate::components::{ErrorPanel, LoadingSpinner};
use crate::context::use_auth;
use crate::format::relative_time;
use crate::markdown::parse_markdown;
use crate::models::{Comment, IdeaDetail, IdeaId};
use crate::router::{use_router, Link, Route};

#[component]
fn CommentItem(comment: Comment) -> impl IntoView {
    let name = comment.name.unwrap_or_else(|| "User".to_string());
    let initial = name.chars().next().map(|c| c.to_uppercase().to_string()).unwrap_or_default();
    let when = relative_time(comment.timestamp.as_deref(), Utc::now());

    view! {
        <div class="comment">
            <span class="avatar">{initial}</span>
            <div class="comment-body">
                <div class="comment-meta">
                    <span class="comment-author">{name}</span>
                    <span class="muted">{when}</span>
                </div>
                <p>{comment.text.unwrap_or_default()}</p>
            </div>
        </div>
    }
}

/// New-comment form, or a login prompt for anonymous visitors
#[component]
fn CommentForm(idea_id: IdeaId, on_posted: WriteSignal<Vec<Comment>>) -> impl IntoView {
    let api = use_api();
    let auth = use_auth();
    let (content, set_content) = signal(String::new());
    let (posting, set_posting) = signal(false);
    let (form_error, set_form_error) = signal(None::<String>);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = content.get().trim().to_string();
        if text.is_empty() || posting.get() {
            return;
        }
        set_posting.set(true);
        set_form_error.set(None);

        let api = api.clone();
        spawn_local(async move {
            match api.post_comment(idea_id, &text).await {
                Ok(comment) => {
                    on_posted.update(|list| list.insert(0, comment));
                    set_content.set(String::new());
                }
                Err(e) if e.is_unauthorized() => {
                    set_form_error.set(Some("Please log in to comment".to_string()));
                }
                Err(e) => {
                    log::error!("Failed to post comment on idea {}: {}", idea_id, e);
                    set_form_error.set(Some(e.to_string()));
                }
            }
            set_posting.set(false);
        });
    };

    view! {
        <Show
            when=move || auth.is_logged_in()
            fallback=|| view! {
                <p class="login-prompt">
                    <Link to=Route::Login>"Log in"</Link>
                    " to join the discussion."
                </p>
            }
        >
            <form class="comment-form" on:submit=submit.clone()>
                <textarea
                    placeholder="Add a comment..."
                    rows="3"
                    prop:value=move || content.get()
                    on:input=move |ev| set_content.set(event_target_value(&ev))
                ></textarea>
                {move || form_error.get().map(|e| view! { <p class="field-error">{e}</p> })}
                <button type="submit" class="btn btn-primary" disabled=move || posting.get()>
                    {move || if posting.get() { "Posting..." } else { "Post Comment" }}
                </button>
            </form>
        </Show>
    }
}

#[component]
fn IdeaBody(idea: IdeaDetail, comments: ReadSignal<Vec<Comment>>, set_comments: WriteSignal<Vec<Comment>>) -> impl IntoView {
    let auth = use_auth();
    let router = use_router();
    let title = idea.title.unwrap_or_default();
    let author = idea.author.unwrap_or_else(|| "Anonymous".to_string());
    let description = parse_markdown(idea.description.as_deref().unwrap_or(""));
    let solution = parse_markdown(idea.solution.as_deref().unwrap_or(""));

    let contribute = move |_| {
        let target = if auth.is_logged_in() { Route::Profile } else { Route::Login };
        router.navigate(target);
    };

    view! {
        <header class="idea-header">
            <h1>"Project Idea " {title}</h1>
            <p class="muted">"Submitted by " <span class="author">{author}</span></p>
        </header>
        <div class="idea-layout">
            <div class="idea-main">
                <section>
                    <h2>"Problem Statement"</h2>
                    <div class="markdown" inner_html=description></div>
                </section>
                <section>
                    <h2>"The Solution"</h2>
                    <div class="markdown" inner_html=solution></div>
                </section>
                <section class="comments">
                    <h2>"Comments (" {move || comments.with(Vec::len)} ")"</h2>
                    <For
                        each=move || comments.get().into_iter().enumerate()
                        key=|(i, c)| (*i, c.timestamp.clone(), c.text.clone())
                        children=|(_, comment)| view! { <CommentItem comment=comment/> }
                    />
                    <CommentForm idea_id=idea.id on_posted=set_comments/>
                </section>
            </div>
            <aside class="idea-side">
                <h3>"Submit Your Work"</h3>
                <p>
                    "Have you created your own implementation of this idea? Share your work with the
                    community and inspire others!"
                </p>
                <button class="btn btn-primary" on:click=contribute>"Contribute Your Implementation"</button>
            </aside>
        </div>
    }
}

#[component]
pub fn IdeaDetailPage(id: IdeaId) -> impl IntoView {
    let api = use_api();
    let (idea, set_idea) = signal(None::<IdeaDetail>);
    let (comments, set_comments) = signal(Vec::<Comment>::new());
    let (error, set_error) = signal(None::<String>);
    let (reload, set_reload) = signal(0u32);

    Effect::new(move |_| {
        let _ = reload.get();
        set_error.set(None);

        let api_idea = api.clone();
        spawn_local(async move {
            match api_idea.get_idea(id).await {
                Ok(detail) => set_idea.set(Some(detail)),
                Err(e) => {
                    log::error!("Failed to load idea {}: {}", id, e);
                    set_error.set(Some(e.to_string()));
                }
            }
        });

        let api_comments = api.clone();
        spawn_local(async move {
            match api_comments.list_comments(id).await {
                Ok(list) => set_comments.set(list),
                Err(e) => log::warn!("Failed to load comments for idea {}: {}", id, e),
            }
        });
    });

    let retry = Callback::new(move |_| set_reload.update(|n| *n += 1));

    view! {
        <div class="idea-detail-page">
            {move || match (idea.get(), error.get()) {
                (Some(detail), _) => view! {
                    <IdeaBody idea=detail comments=comments set_comments=set_comments/>
                }
                .into_any(),
                (None, Some(message)) => view! { <ErrorPanel message=message on_retry=retry/> }.into_any(),
                (None, None) => view! { <LoadingSpinner label="Loading idea..."/> }.into_any(),
            }}
        </div>
    }
}
