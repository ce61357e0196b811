//! Explorer Filters

use crate::api::IdeaQuery;
use crate::models::Difficulty;

/// Cards requested per page
pub const PAGE_SIZE: u32 = 9;

/// Active filters of the explorer
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    /// `None` means all categories
    pub difficulty: Option<Difficulty>,
    pub search: String,
    pub liked_only: bool,
}

impl FilterState {
    pub fn is_active(&self) -> bool {
        self.difficulty.is_some() || !self.search.is_empty() || self.liked_only
    }

    /// Value of the category `<select>`
    pub fn difficulty_value(&self) -> &'static str {
        self.difficulty.map(|d| d.as_str()).unwrap_or("all")
    }

    pub fn merge(&mut self, patch: FilterPatch) {
        if let Some(difficulty) = patch.difficulty {
            self.difficulty = difficulty;
        }
        if let Some(search) = patch.search {
            self.search = search;
        }
        if let Some(liked_only) = patch.liked_only {
            self.liked_only = liked_only;
        }
    }

    pub fn query(&self, page: u32) -> IdeaQuery {
        IdeaQuery {
            page,
            limit: PAGE_SIZE,
            difficulty: self.difficulty,
            search: (!self.search.is_empty()).then(|| self.search.clone()),
            liked: self.liked_only,
        }
    }
}

/// Partial filter change; `None` fields are left untouched
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterPatch {
    pub difficulty: Option<Option<Difficulty>>,
    pub search: Option<String>,
    pub liked_only: Option<bool>,
}

impl FilterPatch {
    pub fn difficulty(difficulty: Option<Difficulty>) -> Self {
        Self { difficulty: Some(difficulty), ..Default::default() }
    }

    /// From a category `<select>` value; anything unknown means all
    pub fn difficulty_value(value: &str) -> Self {
        Self::difficulty(Difficulty::parse(value))
    }

    pub fn search(search: impl Into<String>) -> Self {
        Self { search: Some(search.into()), ..Default::default() }
    }

    pub fn liked_only(liked_only: bool) -> Self {
        Self { liked_only: Some(liked_only), ..Default::default() }
    }

    /// Patch that overwrites every field
    pub fn replace_all(filters: FilterState) -> Self {
        Self {
            difficulty: Some(filters.difficulty),
            search: Some(filters.search),
            liked_only: Some(filters.liked_only),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_only_touches_patched_fields() {
        let mut filters = FilterState {
            difficulty: Some(Difficulty::Easy),
            search: "chat".to_string(),
            liked_only: false,
        };
        filters.merge(FilterPatch::liked_only(true));
        assert_eq!(filters.difficulty, Some(Difficulty::Easy));
        assert_eq!(filters.search, "chat");
        assert!(filters.liked_only);

        filters.merge(FilterPatch::difficulty_value("all"));
        assert_eq!(filters.difficulty, None);
        assert_eq!(filters.difficulty_value(), "all");
    }

    #[test]
    fn test_is_active() {
        assert!(!FilterState::default().is_active());
        assert!(FilterState { search: "x".into(), ..Default::default() }.is_active());
        assert!(FilterState { liked_only: true, ..Default::default() }.is_active());
    }

    #[test]
    fn test_query_carries_filters() {
        let filters = FilterState {
            difficulty: Some(Difficulty::Medium),
            search: String::new(),
            liked_only: true,
        };
        let query = filters.query(2);
        assert_eq!(query.page, 2);
        assert_eq!(query.limit, PAGE_SIZE);
        assert_eq!(query.search, None);
        assert_eq!(query.to_query_string(), "page=2&limit=9&difficulty=medium&liked=true");
    }
}
