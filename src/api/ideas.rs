//! Idea Endpoints

use reqwest::Method;
use serde::Deserialize;

use super::{encode_component, ApiClient, ApiResult};
use crate::models::{Difficulty, IdeaDetail, IdeaId, IdeaPage};

/// Query for one page of `GET /ideas`
#[derive(Debug, Clone, PartialEq)]
pub struct IdeaQuery {
    pub page: u32,
    pub limit: u32,
    pub difficulty: Option<Difficulty>,
    pub search: Option<String>,
    pub liked: bool,
}

impl IdeaQuery {
    /// Query string with default-valued filters left out
    pub fn to_query_string(&self) -> String {
        let mut params = vec![
            format!("page={}", self.page),
            format!("limit={}", self.limit),
        ];
        if let Some(difficulty) = self.difficulty {
            params.push(format!("difficulty={}", difficulty.as_str()));
        }
        if let Some(search) = self.search.as_deref().filter(|s| !s.is_empty()) {
            params.push(format!("search={}", encode_component(search)));
        }
        if self.liked {
            params.push("liked=true".to_string());
        }
        params.join("&")
    }
}

/// The detail endpoint answers either bare or as `{"idea": {...}}`
#[derive(Deserialize)]
#[serde(untagged)]
enum IdeaEnvelope {
    Wrapped { idea: IdeaDetail },
    Bare(IdeaDetail),
}

impl IdeaEnvelope {
    fn into_inner(self) -> IdeaDetail {
        match self {
            IdeaEnvelope::Wrapped { idea } | IdeaEnvelope::Bare(idea) => idea,
        }
    }
}

impl ApiClient {
    pub async fn list_ideas(&self, query: &IdeaQuery) -> ApiResult<IdeaPage> {
        self.get_json(&format!("/ideas?{}", query.to_query_string())).await
    }

    pub async fn get_idea(&self, id: IdeaId) -> ApiResult<IdeaDetail> {
        let envelope: IdeaEnvelope = self.get_json(&format!("/ideas/{}", id)).await?;
        Ok(envelope.into_inner())
    }

    /// POST to like, DELETE to unlike
    pub async fn set_idea_liked(&self, id: IdeaId, liked: bool) -> ApiResult<()> {
        let method = if liked { Method::POST } else { Method::DELETE };
        self.send_empty(method, &format!("/ideas/{}/like", id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::decode;

    fn query(page: u32) -> IdeaQuery {
        IdeaQuery {
            page,
            limit: 9,
            difficulty: None,
            search: None,
            liked: false,
        }
    }

    #[test]
    fn test_query_string_omits_defaults() {
        assert_eq!(query(1).to_query_string(), "page=1&limit=9");

        let empty_search = IdeaQuery {
            search: Some(String::new()),
            ..query(2)
        };
        assert_eq!(empty_search.to_query_string(), "page=2&limit=9");
    }

    #[test]
    fn test_query_string_with_all_filters() {
        let q = IdeaQuery {
            difficulty: Some(Difficulty::Hard),
            search: Some("chat app".to_string()),
            liked: true,
            ..query(3)
        };
        assert_eq!(
            q.to_query_string(),
            "page=3&limit=9&difficulty=hard&search=chat%20app&liked=true"
        );
    }

    #[test]
    fn test_idea_envelope_accepts_both_shapes() {
        let wrapped: IdeaEnvelope =
            decode(r#"{"status": 200, "idea": {"id": 4, "title": "Wrapped", "solution": "s"}}"#).unwrap();
        assert_eq!(wrapped.into_inner().title.as_deref(), Some("Wrapped"));

        let bare: IdeaEnvelope = decode(r#"{"id": 5, "title": "Bare", "author": "kai", "comments": 2}"#).unwrap();
        let idea = bare.into_inner();
        assert_eq!(idea.id, 5);
        assert_eq!(idea.comments, 2);
        assert_eq!(idea.author.as_deref(), Some("kai"));
    }
}
