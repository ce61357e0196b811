//! Explorer Store
//!
//! Wraps [`ExplorerState`] in a `reactive_stores::Store` for field-level
//! reactivity and pairs each controller operation with its network call.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api::ApiClient;
use crate::explorer::{ExplorerState, FilterPatch, LikeAction, LoadOutcome, LoadTicket};
use crate::models::IdeaId;

pub type ExplorerStore = Store<ExplorerState>;

/// Get the explorer store from context
pub fn use_explorer_store() -> ExplorerStore {
    expect_context::<ExplorerStore>()
}

// ========================
// Store Helper Functions
// ========================

pub fn store_initial_load(store: ExplorerStore, api: &ApiClient) {
    let ticket = store.write().initial_load();
    dispatch_load(store, api.clone(), ticket);
}

pub fn store_apply_filters(store: ExplorerStore, api: &ApiClient, patch: FilterPatch) {
    let ticket = store.write().apply_filters(patch);
    dispatch_load(store, api.clone(), ticket);
}

pub fn store_clear_filters(store: ExplorerStore, api: &ApiClient) {
    let ticket = store.write().clear_filters();
    dispatch_load(store, api.clone(), ticket);
}

/// Returns whether a load was started
pub fn store_change_page(store: ExplorerStore, api: &ApiClient, page: u32) -> bool {
    let Some(ticket) = store.write().change_page(page) else {
        return false;
    };
    dispatch_load(store, api.clone(), ticket);
    true
}

pub fn store_retry(store: ExplorerStore, api: &ApiClient) {
    if let Some(ticket) = store.write().retry() {
        dispatch_load(store, api.clone(), ticket);
    }
}

pub fn store_toggle_like(store: ExplorerStore, api: &ApiClient, id: IdeaId) {
    match store.write().toggle_like(id) {
        Some(action) => dispatch_like(store, api.clone(), action),
        None => log::debug!("Ignoring like toggle for idea {} (in flight)", id),
    }
}

fn dispatch_load(store: ExplorerStore, api: ApiClient, ticket: LoadTicket) {
    let query = ticket.query();
    log::debug!("Loading ideas #{}: {}", ticket.seq, query.to_query_string());

    spawn_local(async move {
        let result = api.list_ideas(&query).await;
        if let Err(e) = &result {
            log::error!("Failed to load ideas: {}", e);
        }

        // The page may have been left while the request was in flight
        let Some(mut state) = store.try_write() else {
            return;
        };
        if state.finish_load(&ticket, result) == LoadOutcome::Stale {
            log::debug!("Discarded stale ideas response #{}", ticket.seq);
        }
    });
}

fn dispatch_like(store: ExplorerStore, api: ApiClient, action: LikeAction) {
    spawn_local(async move {
        let result = api.set_idea_liked(action.id, action.liked).await;
        if let Some(mut state) = store.try_write() {
            state.finish_like(&action, result);
        }
    });
}
