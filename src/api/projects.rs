//! Project and Profile Endpoints

use reqwest::Method;
use serde::{Deserialize, Serialize};

use super::{encode_component, ApiClient, ApiResult};
use crate::models::{Profile, Project};

#[derive(Deserialize)]
struct HomeResponse {
    #[serde(default)]
    projects: Vec<Project>,
}

/// Body of `POST /submit`
#[derive(Debug, Serialize)]
pub struct NewProjectArgs<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub repo_url: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub live_url: Option<&'a str>,
    pub tags: Vec<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ProjectEnvelope {
    Wrapped { project: Project },
    Bare(Project),
}

impl ApiClient {
    /// Landing-page showcase (`GET /home`)
    pub async fn featured_projects(&self) -> ApiResult<Vec<Project>> {
        let home: HomeResponse = self.get_json("/home").await?;
        Ok(home.projects)
    }

    pub async fn get_project(&self, id: &str) -> ApiResult<Project> {
        let envelope: ProjectEnvelope = self
            .get_json(&format!("/project/{}", encode_component(id)))
            .await?;
        Ok(match envelope {
            ProjectEnvelope::Wrapped { project } | ProjectEnvelope::Bare(project) => project,
        })
    }

    pub async fn like_project(&self, id: &str) -> ApiResult<()> {
        self.send_empty(Method::POST, &format!("/projects/{}/like", encode_component(id)))
            .await
    }

    /// Share an implementation; requires a session
    pub async fn submit_project(&self, args: &NewProjectArgs<'_>) -> ApiResult<Project> {
        let envelope: ProjectEnvelope = self.send_json(Method::POST, "/submit", args).await?;
        Ok(match envelope {
            ProjectEnvelope::Wrapped { project } | ProjectEnvelope::Bare(project) => project,
        })
    }

    /// A user's account and submitted projects; requires a session
    pub async fn user_profile(&self, user_id: &str) -> ApiResult<Profile> {
        self.get_json(&format!("/user/{}", encode_component(user_id))).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::decode;

    #[test]
    fn test_home_response() {
        let home: HomeResponse = decode(
            r#"{"status": 200, "projects": [{"id": "p1", "title": "Voting", "tags": ["solidity"],
                "like_count": 12, "username": "alex", "repo_url": "https://github.com/a/b"}]}"#,
        )
        .unwrap();
        assert_eq!(home.projects.len(), 1);
        assert_eq!(home.projects[0].like_count, 12);
        assert_eq!(home.projects[0].repo_url.as_deref(), Some("https://github.com/a/b"));
    }

    #[test]
    fn test_project_accepts_camel_case_fields() {
        let envelope: ProjectEnvelope = decode(
            r#"{"project": {"id": "p2", "title": "Cache", "imageUrl": "c.png", "likeCount": 4, "liveUrl": "https://x"}}"#,
        )
        .unwrap();
        let ProjectEnvelope::Wrapped { project } = envelope else {
            panic!("expected wrapped project");
        };
        assert_eq!(project.image_url.as_deref(), Some("c.png"));
        assert_eq!(project.like_count, 4);
        assert!(project.username.is_none());
    }

    #[test]
    fn test_submit_payload_skips_missing_live_url() {
        let args = NewProjectArgs {
            title: "Cache",
            description: "LRU in Rust",
            repo_url: "https://github.com/a/cache",
            live_url: None,
            tags: vec!["rust".to_string()],
        };
        let json = serde_json::to_string(&args).unwrap();
        assert_eq!(
            json,
            r#"{"title":"Cache","description":"LRU in Rust","repo_url":"https://github.com/a/cache","tags":["rust"]}"#
        );
    }

    #[test]
    fn test_submit_response() {
        let envelope: ProjectEnvelope = decode(
            r#"{"status": 201, "message": "Project submitted successfully",
                "project": {"id": "p9", "title": "Cache", "tags": [], "created_at": "2025-01-01T00:00:00", "user_id": "u1"}}"#,
        )
        .unwrap();
        assert!(matches!(envelope, ProjectEnvelope::Wrapped { project } if project.id == "p9"));
    }

    #[test]
    fn test_profile_response() {
        let profile: Profile = decode(
            r#"{"status": 200, "user": {"id": "u1", "email": "a@b.c", "name": null}, "projects": []}"#,
        )
        .unwrap();
        assert_eq!(profile.user.id, "u1");
        assert!(profile.projects.is_empty());
    }
}
