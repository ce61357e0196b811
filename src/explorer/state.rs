//! Explorer State Machine
//!
//! All state transitions of the idea explorer live here as plain methods so
//! they can be exercised without a browser. Network calls are made by the
//! caller: every load hands out a [`LoadTicket`], and a response is only
//! committed when its ticket is still the newest one.

use std::collections::HashSet;

use reactive_stores::Store;

use super::filters::{FilterPatch, FilterState, PAGE_SIZE};
use crate::api::{ApiError, IdeaQuery};
use crate::models::{IdeaCard, IdeaId, IdeaPage};

/// Page metadata of the last successful load
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    pub current_page: u32,
    pub total_pages: u32,
    pub total_items: u32,
}

impl Default for PageState {
    fn default() -> Self {
        Self {
            current_page: 1,
            total_pages: 1,
            total_items: 0,
        }
    }
}

/// One issued `GET /ideas` request
#[derive(Debug, Clone, PartialEq)]
pub struct LoadTicket {
    pub seq: u64,
    pub page: u32,
    pub filters: FilterState,
}

impl LoadTicket {
    pub fn query(&self) -> IdeaQuery {
        self.filters.query(self.page)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Applied,
    Failed,
    /// A newer request was issued; the response was dropped
    Stale,
}

/// Like/unlike request to send after an optimistic toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LikeAction {
    pub id: IdeaId,
    /// New state: `true` sends POST, `false` sends DELETE
    pub liked: bool,
}

#[derive(Clone, Debug, Default, Store)]
pub struct ExplorerState {
    pub cards: Vec<IdeaCard>,
    pub filters: FilterState,
    pub page: PageState,
    pub loading: bool,
    /// Message of the last failed load
    pub error: Option<String>,
    /// Page and filters of the last issued load, repeated by retry
    pub last_request: Option<(u32, FilterState)>,
    pub latest_seq: u64,
    /// Ideas whose like request is still in flight
    pub pending_likes: HashSet<IdeaId>,
}

impl ExplorerState {
    pub fn new() -> Self {
        Self {
            loading: true,
            ..Default::default()
        }
    }

    /// Start a load; the previous ticket, if any, becomes stale
    pub fn begin_load(&mut self, page: u32, filters: FilterState) -> LoadTicket {
        self.latest_seq += 1;
        self.loading = true;
        self.last_request = Some((page, filters.clone()));
        LoadTicket {
            seq: self.latest_seq,
            page,
            filters,
        }
    }

    /// Commit the response of `ticket` unless a newer load was issued since
    pub fn finish_load(&mut self, ticket: &LoadTicket, result: Result<IdeaPage, ApiError>) -> LoadOutcome {
        if ticket.seq != self.latest_seq {
            return LoadOutcome::Stale;
        }
        self.loading = false;

        match result {
            Ok(page) => {
                let total_pages = page.pagination.total_pages.max(1);
                let current = if page.pagination.page == 0 {
                    ticket.page
                } else {
                    page.pagination.page
                };
                self.cards = page.ideas;
                self.page = PageState {
                    current_page: current.clamp(1, total_pages),
                    total_pages,
                    total_items: page.pagination.total_items,
                };
                self.error = None;
                LoadOutcome::Applied
            }
            Err(e) => {
                // Previously rendered cards stay visible under the error
                self.error = Some(e.to_string());
                LoadOutcome::Failed
            }
        }
    }

    pub fn initial_load(&mut self) -> LoadTicket {
        self.begin_load(1, self.filters.clone())
    }

    /// Merge a partial filter change and reload from page 1
    pub fn apply_filters(&mut self, patch: FilterPatch) -> LoadTicket {
        self.filters.merge(patch);
        self.page.current_page = 1;
        self.begin_load(1, self.filters.clone())
    }

    pub fn clear_filters(&mut self) -> LoadTicket {
        self.apply_filters(FilterPatch::replace_all(FilterState::default()))
    }

    /// `None` when `page` is the current page or out of range
    pub fn change_page(&mut self, page: u32) -> Option<LoadTicket> {
        if page < 1 || page > self.page.total_pages || page == self.page.current_page {
            return None;
        }
        self.page.current_page = page;
        Some(self.begin_load(page, self.filters.clone()))
    }

    /// Repeat the last issued load
    pub fn retry(&mut self) -> Option<LoadTicket> {
        let (page, filters) = self.last_request.clone()?;
        Some(self.begin_load(page, filters))
    }

    /// Optimistically flip the like state of a card.
    ///
    /// Returns `None` while a request for the same card is still in flight,
    /// or when the card is not on the current page.
    pub fn toggle_like(&mut self, id: IdeaId) -> Option<LikeAction> {
        if self.pending_likes.contains(&id) {
            return None;
        }
        let card = self.cards.iter_mut().find(|card| card.id == id)?;
        card.liked = !card.liked;
        card.like_count = if card.liked {
            card.like_count + 1
        } else {
            card.like_count.saturating_sub(1)
        };
        self.pending_likes.insert(id);
        Some(LikeAction { id, liked: card.liked })
    }

    /// Release the double-submission guard. Failures are not rolled back.
    pub fn finish_like(&mut self, action: &LikeAction, result: Result<(), ApiError>) {
        self.pending_likes.remove(&action.id);
        if let Err(e) = result {
            log::warn!("Failed to update like status of idea {}: {}", action.id, e);
        }
    }

    pub fn is_like_pending(&self, id: IdeaId) -> bool {
        self.pending_likes.contains(&id)
    }

    pub fn has_active_filters(&self) -> bool {
        self.filters.is_active()
    }

    /// First and last item number shown on the current page
    pub fn showing_range(&self) -> (u32, u32) {
        let PageState { current_page, total_items, .. } = self.page;
        if total_items == 0 {
            return (0, 0);
        }
        let from = (current_page - 1) * PAGE_SIZE + 1;
        let to = (current_page * PAGE_SIZE).min(total_items);
        (from.min(to), to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Difficulty, Pagination};

    fn card(id: IdeaId, liked: bool, like_count: u32) -> IdeaCard {
        IdeaCard {
            id,
            title: format!("Idea {}", id),
            description: String::new(),
            image_url: None,
            tags: vec![],
            liked,
            like_count,
            difficulty: Some(Difficulty::Easy),
        }
    }

    fn page_of(ids: &[IdeaId], page: u32, total_pages: u32, total_items: u32) -> IdeaPage {
        IdeaPage {
            ideas: ids.iter().map(|&id| card(id, false, 0)).collect(),
            pagination: Pagination {
                page,
                total_pages,
                total_items,
                has_next_page: page < total_pages,
                has_previous_page: page > 1,
            },
            filters: serde_json::Value::Null,
        }
    }

    /// State after a successful load of `page` out of 10
    fn loaded_at(page: u32) -> ExplorerState {
        let mut state = ExplorerState::new();
        let ticket = state.begin_load(page, FilterState::default());
        state.finish_load(&ticket, Ok(page_of(&[1, 2, 3], page, 10, 90)));
        state
    }

    #[test]
    fn test_successful_load_replaces_cards_and_pages() {
        let mut state = ExplorerState::new();
        let ticket = state.initial_load();
        assert!(state.loading);
        assert_eq!(ticket.query().to_query_string(), "page=1&limit=9");

        let outcome = state.finish_load(&ticket, Ok(page_of(&[1, 2], 1, 3, 20)));
        assert_eq!(outcome, LoadOutcome::Applied);
        assert!(!state.loading);
        assert_eq!(state.cards.len(), 2);
        assert_eq!(state.page, PageState { current_page: 1, total_pages: 3, total_items: 20 });
    }

    #[test]
    fn test_empty_result_keeps_one_page() {
        let mut state = ExplorerState::new();
        let ticket = state.initial_load();
        state.finish_load(&ticket, Ok(page_of(&[], 1, 0, 0)));
        assert_eq!(state.page.total_pages, 1);
        assert_eq!(state.page.current_page, 1);
        assert_eq!(state.showing_range(), (0, 0));
    }

    #[test]
    fn test_apply_filters_resets_to_first_page() {
        let mut state = loaded_at(4);
        assert_eq!(state.page.current_page, 4);

        let ticket = state.apply_filters(FilterPatch::search("rust"));
        assert_eq!(state.page.current_page, 1);
        assert_eq!(ticket.page, 1);
        assert_eq!(ticket.filters.search, "rust");
        assert_eq!(ticket.query().to_query_string(), "page=1&limit=9&search=rust");
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut state = ExplorerState::new();
        let first = state.apply_filters(FilterPatch::difficulty(Some(Difficulty::Easy)));
        let second = state.apply_filters(FilterPatch::difficulty(Some(Difficulty::Hard)));

        // Newer request resolves first
        assert_eq!(state.finish_load(&second, Ok(page_of(&[20, 21], 1, 1, 2))), LoadOutcome::Applied);
        assert_eq!(state.finish_load(&first, Ok(page_of(&[10], 1, 1, 1))), LoadOutcome::Stale);

        let ids: Vec<_> = state.cards.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![20, 21]);
        assert_eq!(state.filters.difficulty, Some(Difficulty::Hard));
        assert!(!state.loading);
    }

    #[test]
    fn test_stale_failure_does_not_set_error() {
        let mut state = ExplorerState::new();
        let first = state.initial_load();
        let second = state.apply_filters(FilterPatch::liked_only(true));
        let outcome = state.finish_load(&first, Err(ApiError::Network("offline".into())));
        assert_eq!(outcome, LoadOutcome::Stale);
        assert!(state.error.is_none());
        assert!(state.loading);
        state.finish_load(&second, Ok(page_of(&[1], 1, 1, 1)));
        assert!(!state.loading);
    }

    #[test]
    fn test_clear_filters_restores_defaults() {
        let mut state = loaded_at(3);
        state.apply_filters(FilterPatch {
            difficulty: Some(Some(Difficulty::Medium)),
            search: Some("game".to_string()),
            liked_only: Some(true),
        });
        assert!(state.has_active_filters());

        let ticket = state.clear_filters();
        assert_eq!(state.filters, FilterState::default());
        assert!(!state.has_active_filters());
        assert_eq!(ticket.page, 1);
        assert_eq!(ticket.query().to_query_string(), "page=1&limit=9");
    }

    #[test]
    fn test_change_page_bounds() {
        let mut state = loaded_at(5);
        assert!(state.change_page(5).is_none());
        assert!(state.change_page(0).is_none());
        assert!(state.change_page(11).is_none());
        assert_eq!(state.latest_seq, 1);

        let ticket = state.change_page(6).unwrap();
        assert_eq!(ticket.page, 6);
        assert_eq!(state.page.current_page, 6);
    }

    #[test]
    fn test_change_page_keeps_filters() {
        let mut state = ExplorerState::new();
        let ticket = state.apply_filters(FilterPatch::liked_only(true));
        state.finish_load(&ticket, Ok(page_of(&[1], 1, 4, 30)));

        let ticket = state.change_page(2).unwrap();
        assert_eq!(ticket.query().to_query_string(), "page=2&limit=9&liked=true");
    }

    #[test]
    fn test_failure_keeps_cards_and_retry_repeats_request() {
        let mut state = loaded_at(2);
        let ticket = state.change_page(3).unwrap();
        let outcome = state.finish_load(
            &ticket,
            Err(ApiError::Status { code: 500, reason: "Internal Server Error".into(), detail: None }),
        );
        assert_eq!(outcome, LoadOutcome::Failed);
        assert_eq!(state.cards.len(), 3);
        assert_eq!(state.error.as_deref(), Some("API error: 500 Internal Server Error"));

        let retry = state.retry().unwrap();
        assert_eq!(retry.page, 3);
        assert!(retry.seq > ticket.seq);
        state.finish_load(&retry, Ok(page_of(&[7, 8], 3, 10, 90)));
        assert!(state.error.is_none());
        assert_eq!(state.page.current_page, 3);
    }

    #[test]
    fn test_retry_without_request() {
        let mut state = ExplorerState::default();
        assert!(state.retry().is_none());
    }

    #[test]
    fn test_toggle_like_is_guarded_while_pending() {
        let mut state = ExplorerState::new();
        state.cards = vec![card(1, false, 4)];

        let action = state.toggle_like(1).unwrap();
        assert_eq!(action, LikeAction { id: 1, liked: true });
        assert!(state.toggle_like(1).is_none());
        assert_eq!(state.cards[0].like_count, 5);
        assert!(state.cards[0].liked);

        state.finish_like(&action, Ok(()));
        assert!(!state.is_like_pending(1));
        let unlike = state.toggle_like(1).unwrap();
        assert!(!unlike.liked);
        assert_eq!(state.cards[0].like_count, 4);
    }

    #[test]
    fn test_failed_like_is_not_rolled_back() {
        let mut state = ExplorerState::new();
        state.cards = vec![card(9, true, 0)];

        let action = state.toggle_like(9).unwrap();
        assert_eq!(state.cards[0].like_count, 0);
        state.finish_like(&action, Err(ApiError::Network("offline".into())));
        assert!(!state.cards[0].liked);
        assert!(!state.is_like_pending(9));
    }

    #[test]
    fn test_toggle_like_unknown_card() {
        let mut state = ExplorerState::new();
        assert!(state.toggle_like(42).is_none());
        assert!(state.pending_likes.is_empty());
    }

    #[test]
    fn test_showing_range() {
        let mut state = ExplorerState::new();
        state.page = PageState { current_page: 1, total_pages: 3, total_items: 20 };
        assert_eq!(state.showing_range(), (1, 9));
        state.page.current_page = 3;
        assert_eq!(state.showing_range(), (19, 20));
    }
}
