//! Idea Card Component
//!
//! One tile of the explorer grid: image (or initial), title, like button,
//! difficulty tag and description.

use leptos::prelude::*;

use crate::models::IdeaCard;

#[component]
pub fn IdeaCardView(
    card: IdeaCard,
    /// A like request for this card is in flight
    #[prop(into)] pending: Signal<bool>,
    #[prop(into)] on_like: Callback<()>,
    #[prop(into)] on_open: Callback<()>,
) -> impl IntoView {
    let IdeaCard { title, description, image_url, liked, like_count, difficulty, .. } = card;
    let initial = title.chars().next().map(|c| c.to_uppercase().to_string()).unwrap_or_default();
    let like_class = if liked { "like-btn liked" } else { "like-btn" };
    let like_label = if liked { "Unlike" } else { "Like" };
    let badge = difficulty.map(|d| {
        let class = format!("tag difficulty-{}", d.as_str());
        view! { <span class=class>{d.as_str()}</span> }
    });

    let image = match image_url.filter(|url| !url.is_empty()) {
        Some(url) => view! { <img src=url alt=title.clone() class="card-image"/> }.into_any(),
        None => view! { <div class="card-image placeholder">{initial}</div> }.into_any(),
    };

    view! {
        <article class="idea-card" on:click=move |_| on_open.run(())>
            <div class="card-media">{image}</div>
            <div class="card-body">
                <div class="card-title-row">
                    <h3>{title}</h3>
                    <div class="card-actions">
                        <button
                            class=like_class
                            aria-label=like_label
                            disabled=move || pending.get()
                            on:click=move |ev| {
                                ev.stop_propagation();
                                on_like.run(());
                            }
                        >
                            {if liked { "♥" } else { "♡" }}
                        </button>
                        <span class="like-count">{like_count}</span>
                    </div>
                </div>
                <div class="tags">
                    {badge}
                </div>
                <p class="card-description">{description}</p>
            </div>
        </article>
    }
}
