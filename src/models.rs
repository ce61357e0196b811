//! Frontend Models
//!
//! Data structures matching the DevHub REST API payloads.

use serde::{Deserialize, Serialize};

pub type IdeaId = u64;

/// Idea difficulty facet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "medium" => Some(Difficulty::Medium),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }
}

/// One card of the idea explorer grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdeaCard {
    pub id: IdeaId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub liked: bool,
    #[serde(default)]
    pub like_count: u32,
    /// Missing, null or unrecognized values decode as `None`
    #[serde(default, deserialize_with = "lenient_difficulty")]
    pub difficulty: Option<Difficulty>,
}

fn lenient_difficulty<'de, D>(deserializer: D) -> Result<Option<Difficulty>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(Difficulty::parse))
}

/// Pagination block of the idea list response
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Pagination {
    pub page: u32,
    pub total_pages: u32,
    pub total_items: u32,
    #[serde(default, rename = "hasNextPage", alias = "has_next")]
    pub has_next_page: bool,
    #[serde(default, rename = "hasPreviousPage", alias = "has_prev")]
    pub has_previous_page: bool,
}

/// `GET /ideas` response
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct IdeaPage {
    pub ideas: Vec<IdeaCard>,
    pub pagination: Pagination,
    #[serde(default)]
    pub filters: serde_json::Value,
}

/// Full idea as shown on the detail page
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct IdeaDetail {
    pub id: IdeaId,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub solution: Option<String>,
    /// Number of comments
    #[serde(default)]
    pub comments: u32,
}

/// Comment on an idea
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Comment {
    #[serde(default, alias = "user_name", alias = "author")]
    pub name: Option<String>,
    #[serde(default, alias = "content")]
    pub text: Option<String>,
    #[serde(default, alias = "created_at")]
    pub timestamp: Option<String>,
}

/// Showcased project implementation
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, alias = "imageUrl")]
    pub image_url: Option<String>,
    #[serde(default, alias = "repoUrl")]
    pub repo_url: Option<String>,
    #[serde(default, alias = "liveUrl")]
    pub live_url: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, alias = "likeCount")]
    pub like_count: u32,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default, alias = "ideaId")]
    pub idea_id: Option<String>,
}

/// Authenticated user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub github_username: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

impl User {
    /// Name shown in the header and on the profile
    pub fn display_name(&self) -> String {
        self.name
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .or(self.github_username.as_deref())
            .or(self.email.as_deref())
            .unwrap_or("Developer")
            .to_string()
    }

    /// Up to two initials for the avatar bubble
    pub fn initials(&self) -> String {
        self.display_name()
            .split(|c: char| c.is_whitespace() || c == '@' || c == '.' || c == '_')
            .filter_map(|part| part.chars().next())
            .take(2)
            .flat_map(|c| c.to_uppercase())
            .collect()
    }
}

/// `GET /user/{id}` response
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Profile {
    pub user: User,
    #[serde(default)]
    pub projects: Vec<Project>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idea_page_accepts_camel_case_flags() {
        let json = r#"{
            "ideas": [{
                "id": 7, "title": "Chat", "description": "d", "image_url": "x.png",
                "tags": ["rust"], "liked": true, "like_count": 3, "difficulty": "medium"
            }],
            "pagination": {"page": 2, "total_pages": 4, "total_items": 30,
                           "hasNextPage": true, "hasPreviousPage": true},
            "filters": {"categories": ["all"]}
        }"#;
        let page: IdeaPage = serde_json::from_str(json).unwrap();
        assert_eq!(page.ideas[0].difficulty, Some(Difficulty::Medium));
        assert_eq!(page.ideas[0].like_count, 3);
        assert!(page.pagination.has_next_page);
        assert!(page.pagination.has_previous_page);
    }

    #[test]
    fn test_idea_page_accepts_snake_case_flags_and_sparse_cards() {
        let json = r#"{
            "ideas": [{"id": 1, "title": "Bare", "difficulty": "hard"}],
            "pagination": {"page": 1, "total_pages": 1, "total_items": 1,
                           "has_next": false, "has_prev": false}
        }"#;
        let page: IdeaPage = serde_json::from_str(json).unwrap();
        let card = &page.ideas[0];
        assert!(card.tags.is_empty());
        assert!(card.image_url.is_none());
        assert!(!card.liked);
        assert!(!page.pagination.has_next_page);
    }

    #[test]
    fn test_idea_page_tolerates_missing_difficulty() {
        let json = r#"{
            "ideas": [{"id": 1, "title": "A", "difficulty": null},
                      {"id": 2, "title": "B", "difficulty": "Hard"},
                      {"id": 3, "title": "C", "difficulty": "expert"},
                      {"id": 4, "title": "D"}],
            "pagination": {"page": 1, "total_pages": 1, "total_items": 4}
        }"#;
        let page: IdeaPage = serde_json::from_str(json).unwrap();
        let levels: Vec<_> = page.ideas.iter().map(|c| c.difficulty).collect();
        assert_eq!(levels, vec![None, Some(Difficulty::Hard), None, None]);
    }

    #[test]
    fn test_comment_accepts_backend_field_names() {
        let json = r#"{"user_name": "ana", "content": "nice", "created_at": "2024-01-01T00:00:00Z"}"#;
        let comment: Comment = serde_json::from_str(json).unwrap();
        assert_eq!(comment.name.as_deref(), Some("ana"));
        assert_eq!(comment.text.as_deref(), Some("nice"));
        assert!(comment.timestamp.is_some());
    }

    #[test]
    fn test_difficulty_parse() {
        assert_eq!(Difficulty::parse("Easy"), Some(Difficulty::Easy));
        assert_eq!(Difficulty::parse("all"), None);
        assert_eq!(Difficulty::Hard.as_str(), "hard");
    }

    #[test]
    fn test_user_display_name_and_initials() {
        let user = User {
            id: "u1".to_string(),
            email: Some("sophia@example.com".to_string()),
            name: Some("Sophia Bennett".to_string()),
            github_username: None,
            avatar_url: None,
        };
        assert_eq!(user.display_name(), "Sophia Bennett");
        assert_eq!(user.initials(), "SB");

        let anonymous = User { name: None, ..user };
        assert_eq!(anonymous.display_name(), "sophia@example.com");
        assert_eq!(anonymous.initials(), "SE");
    }
}
