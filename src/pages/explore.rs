//! Explore Page
//!
//! View over the explorer store: filter bar, card grid, pagination. Every
//! user action goes through a `store_*` helper, which updates the state
//! and starts the matching request.

use leptos::prelude::*;
use leptos_pagination::{PageJump, Pagination};
use reactive_stores::Store;

use crate::api::use_api;
use crate::components::{ErrorPanel, IdeaCardView, LoadingSpinner};
use crate::explorer::{ExplorerState, ExplorerStateStoreFields, FilterPatch};
use crate::format::count_label;
use crate::models::Difficulty;
use crate::router::{scroll_to_top, use_router, Route};
use crate::store::{
    store_apply_filters, store_change_page, store_clear_filters, store_initial_load, store_retry,
    store_toggle_like, use_explorer_store, ExplorerStore,
};

/// Search box, category select, liked toggle and clear button
#[component]
fn FilterBar() -> impl IntoView {
    let store = use_explorer_store();
    let api = use_api();
    let (show_filters, set_show_filters) = signal(false);

    let filters = move || store.filters().get();
    let has_active = move || store.filters().with(|f| f.is_active());

    let api_search = api.clone();
    let api_category = api.clone();
    let api_liked = api.clone();
    let on_clear = move |_: leptos::ev::MouseEvent| store_clear_filters(store, &api);

    let content_class = move || {
        if show_filters.get() { "filters-content open" } else { "filters-content" }
    };

    view! {
        <div class="filters-bar">
            <div class="filters-mobile-header">
                <h2>"Filters & Search"</h2>
                <button class="btn btn-secondary" on:click=move |_| set_show_filters.update(|s| *s = !*s)>
                    {move || if show_filters.get() { "Hide Filters" } else { "Show Filters" }}
                    <Show when=has_active>
                        <span class="pulse-dot"></span>
                    </Show>
                </button>
            </div>

            <div class=content_class>
                <input
                    type="text"
                    class="search-input"
                    placeholder="Search cards..."
                    prop:value=move || store.filters().with(|f| f.search.clone())
                    on:input=move |ev| {
                        store_apply_filters(store, &api_search, FilterPatch::search(event_target_value(&ev)))
                    }
                />

                <label for="difficulty-select">"Category:"</label>
                <select
                    id="difficulty-select"
                    prop:value=move || store.filters().with(|f| f.difficulty_value())
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        store_apply_filters(store, &api_category, FilterPatch::difficulty_value(&value))
                    }
                >
                    <option value="all">"All Categories"</option>
                    {Difficulty::ALL
                        .iter()
                        .map(|d| view! { <option value=d.as_str()>{d.as_str()}</option> })
                        .collect_view()}
                </select>

                <button
                    class=move || if filters().liked_only { "btn liked-toggle active" } else { "btn liked-toggle" }
                    on:click=move |_| {
                        let liked = !store.filters().with_untracked(|f| f.liked_only);
                        store_apply_filters(store, &api_liked, FilterPatch::liked_only(liked));
                    }
                >
                    {move || if filters().liked_only { "♥ Liked Only" } else { "♡ Show Liked" }}
                </button>

                <Show when=has_active>
                    <button class="btn btn-link" on:click=on_clear.clone()>"✕ Clear Filters"</button>
                </Show>
            </div>

            <Show when=has_active>
                <ActiveFilters/>
            </Show>
        </div>
    }
}

/// Removable chips for each active filter
#[component]
fn ActiveFilters() -> impl IntoView {
    let store = use_explorer_store();
    let api = use_api();

    let remove = move |patch: FilterPatch| {
        let api = api.clone();
        move |_: leptos::ev::MouseEvent| store_apply_filters(store, &api, patch.clone())
    };
    let remove_difficulty = remove.clone()(FilterPatch::difficulty(None));
    let remove_search = remove.clone()(FilterPatch::search(""));
    let remove_liked = remove(FilterPatch::liked_only(false));

    view! {
        <div class="active-filters">
            <span class="muted">"Active filters:"</span>
            {move || store.filters().get().difficulty.map(|d| view! {
                <span class="chip">
                    {d.as_str()}
                    <button aria-label=format!("Remove {} filter", d.as_str()) on:click=remove_difficulty.clone()>"✕"</button>
                </span>
            })}
            {move || {
                let search = store.filters().with(|f| f.search.clone());
                (!search.is_empty()).then(|| view! {
                    <span class="chip">
                        <span class="truncate">"\"" {search} "\""</span>
                        <button aria-label="Remove search filter" on:click=remove_search.clone()>"✕"</button>
                    </span>
                })
            }}
            {move || store.filters().with(|f| f.liked_only).then(|| view! {
                <span class="chip chip-liked">
                    "♥ Liked"
                    <button aria-label="Remove liked filter" on:click=remove_liked.clone()>"✕"</button>
                </span>
            })}
        </div>
    }
}

#[component]
fn CardGrid() -> impl IntoView {
    let store = use_explorer_store();
    let api = use_api();
    let router = use_router();

    view! {
        <div class="card-grid">
            <For
                each=move || store.cards().get()
                key=|card| (card.id, card.liked, card.like_count)
                children=move |card| {
                    let id = card.id;
                    let api = api.clone();
                    let pending = Signal::derive(move || store.pending_likes().with(|p| p.contains(&id)));
                    view! {
                        <IdeaCardView
                            card=card
                            pending=pending
                            on_like=move |_| store_toggle_like(store, &api, id)
                            on_open=move |_| router.navigate(Route::IdeaDetail(id))
                        />
                    }
                }
            />
        </div>
    }
}

#[component]
fn EmptyState() -> impl IntoView {
    let store = use_explorer_store();
    let api = use_api();
    let has_active = move || store.filters().with(|f| f.is_active());

    view! {
        <div class="empty-state">
            <h3>"No cards found"</h3>
            <p class="muted">
                {move || if has_active() {
                    "No cards match your current filters. Try adjusting your search terms or difficulty selection."
                } else {
                    "No cards are available at the moment. Please check back later."
                }}
            </p>
            <Show when=has_active>
                <button class="btn btn-primary" on:click={
                    let api = api.clone();
                    move |_| store_clear_filters(store, &api)
                }>
                    "Clear All Filters"
                </button>
            </Show>
        </div>
    }
}

#[component]
fn PaginationControls() -> impl IntoView {
    let store = use_explorer_store();
    let api = use_api();

    let current = Signal::derive(move || store.page().with(|p| p.current_page));
    let total = Signal::derive(move || store.page().with(|p| p.total_pages));
    let on_change = Callback::new(move |page: u32| {
        if store_change_page(store, &api, page) {
            scroll_to_top();
        }
    });

    view! {
        <div class="pagination-section">
            <Pagination current=current total=total on_change=on_change/>
            <p class="muted pagination-info">
                {move || {
                    let (from, to) = store.with(|s| s.showing_range());
                    let total_items = store.page().with(|p| p.total_items);
                    format!("Showing {} to {} of {} cards", from, to, total_items)
                }}
            </p>
            <div class="page-jump-row">
                <PageJump current=current total=total on_change=on_change/>
            </div>
        </div>
    }
}

#[component]
pub fn ExplorePage() -> impl IntoView {
    let api = use_api();
    let store: ExplorerStore = Store::new(ExplorerState::new());
    provide_context(store);

    // Initial load
    Effect::new({
        let api = api.clone();
        move |_| store_initial_load(store, &api)
    });

    let has_cards = move || store.cards().with(|c| !c.is_empty());
    let loading = move || store.loading().get();
    let error = move || store.error().get();
    let has_active = move || store.filters().with(|f| f.is_active());
    let retry = Callback::new(move |_| store_retry(store, &api));

    let body = move || {
        if loading() && !has_cards() {
            return view! { <LoadingSpinner label="Loading cards..."/> }.into_any();
        }
        if let (Some(message), false) = (error(), has_cards()) {
            return view! { <ErrorPanel message=message on_retry=retry/> }.into_any();
        }
        view! {
            <Show when=move || error().is_some()>
                <div class="error-banner" role="alert">
                    <span>{move || error().unwrap_or_default()}</span>
                    <button class="btn btn-link" on:click=move |_| retry.run(())>"Try Again"</button>
                </div>
            </Show>
            <Show when=move || loading()>
                <div class="loading-overlay">
                    <LoadingSpinner label="Loading..."/>
                </div>
            </Show>
            <Show when=has_cards fallback=|| view! { <EmptyState/> }>
                <p class="results-summary muted">
                    {move || if has_active() { "Filtered results: " } else { "Showing " }}
                    <strong>{move || count_label(store.page().with(|p| p.total_items), "card")}</strong>
                </p>
                <CardGrid/>
            </Show>
            <Show when=move || store.page().with(|p| p.total_pages > 1)>
                <PaginationControls/>
            </Show>
        }
        .into_any()
    };

    view! {
        <div class="explore-page">
            <section class="explore-hero">
                <h1>"Discover Amazing Content"</h1>
                <p>
                    "Explore our curated collection of inspiring stories, creative projects, and fascinating
                    discoveries. Find content that sparks your curiosity and ignites your imagination."
                </p>
                <div class="muted">
                    <span>{move || store.page().with(|p| p.total_items)} " amazing discoveries"</span>
                    " • "
                    <span>"Updated daily"</span>
                </div>
            </section>
            <FilterBar/>
            <section class="explore-content">{body}</section>
        </div>
    }
}
