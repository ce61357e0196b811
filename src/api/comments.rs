//! Comment Endpoints

use reqwest::Method;
use serde::{Deserialize, Serialize};

use super::{ApiClient, ApiResult};
use crate::models::{Comment, IdeaId};

#[derive(Serialize)]
struct NewCommentArgs<'a> {
    content: &'a str,
}

/// Comment lists come back bare or as `{"comments": [...]}`
#[derive(Deserialize)]
#[serde(untagged)]
enum CommentsEnvelope {
    Wrapped { comments: Vec<Comment> },
    Bare(Vec<Comment>),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CommentEnvelope {
    Wrapped { comment: Comment },
    Bare(Comment),
}

impl ApiClient {
    pub async fn list_comments(&self, idea_id: IdeaId) -> ApiResult<Vec<Comment>> {
        let envelope: CommentsEnvelope = self.get_json(&format!("/ideas/{}/comments", idea_id)).await?;
        Ok(match envelope {
            CommentsEnvelope::Wrapped { comments } | CommentsEnvelope::Bare(comments) => comments,
        })
    }

    /// Requires a logged-in session
    pub async fn post_comment(&self, idea_id: IdeaId, content: &str) -> ApiResult<Comment> {
        let envelope: CommentEnvelope = self
            .send_json(
                Method::POST,
                &format!("/ideas/{}/comments", idea_id),
                &NewCommentArgs { content },
            )
            .await?;
        Ok(match envelope {
            CommentEnvelope::Wrapped { comment } | CommentEnvelope::Bare(comment) => comment,
        })
    }
}
