use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::comment::CommentEntry;

/// A document in the 'post' collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    /// Store-assigned id; absent until insert.
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,

    pub author_name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_avatar_url: Option<String>,

    pub image_url: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,

    /// Like counter; only ever moved by an atomic increment.
    #[serde(default)]
    pub likes: i64,

    /// Embedded comments, append-only.
    #[serde(default)]
    pub comments: Vec<CommentEntry>,

    /// Set once at creation. Older documents may lack it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<bson::DateTime>,
}

impl Post {
    /// Builds a fresh document from a validated payload, applying server
    /// defaults: zero likes, no comments, creation time now.
    pub fn new(payload: CreatePostRequest) -> Self {
        Self {
            id: None,
            author_name: payload.author_name,
            author_avatar_url: payload.author_avatar_url,
            image_url: payload.image_url,
            caption: payload.caption,
            likes: 0,
            comments: Vec::new(),
            created_at: Some(bson::DateTime::now()),
        }
    }
}

/// DTO for creating a new post.
#[derive(Debug, Deserialize, Validate)]
pub struct CreatePostRequest {
    #[validate(length(
        min = 1,
        max = 60,
        message = "author_name must be between 1 and 60 characters"
    ))]
    pub author_name: String,

    #[validate(url(message = "author_avatar_url must be a valid URL"))]
    pub author_avatar_url: Option<String>,

    #[validate(url(message = "image_url must be a valid URL"))]
    pub image_url: String,

    #[validate(length(max = 2200, message = "caption must be at most 2200 characters"))]
    pub caption: Option<String>,
}

/// Body of the like endpoint. An omitted body counts as a like.
#[derive(Debug, Deserialize)]
pub struct LikeRequest {
    #[serde(default = "default_increment")]
    pub increment: bool,
}

impl Default for LikeRequest {
    fn default() -> Self {
        Self { increment: true }
    }
}

fn default_increment() -> bool {
    true
}

/// API shape of a post: the native `_id` becomes a canonical `id` string,
/// everything else passes through untouched.
#[derive(Debug, Serialize)]
pub struct PostResponse {
    pub id: String,
    pub author_name: String,
    pub author_avatar_url: Option<String>,
    pub image_url: String,
    pub caption: Option<String>,
    pub likes: i64,
    pub comments: Vec<CommentEntry>,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}

impl From<Post> for PostResponse {
    fn from(post: Post) -> Self {
        Self {
            id: post.id.map(|id| id.to_hex()).unwrap_or_default(),
            author_name: post.author_name,
            author_avatar_url: post.author_avatar_url,
            image_url: post.image_url,
            caption: post.caption,
            likes: post.likes,
            comments: post.comments,
            created_at: post.created_at.map(bson::DateTime::to_chrono),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_payload() -> CreatePostRequest {
        CreatePostRequest {
            author_name: "alice".to_string(),
            author_avatar_url: None,
            image_url: "https://x/y.jpg".to_string(),
            caption: Some("first light".to_string()),
        }
    }

    #[test]
    fn new_post_applies_defaults() {
        let post = Post::new(valid_payload());
        assert!(post.id.is_none());
        assert_eq!(post.likes, 0);
        assert!(post.comments.is_empty());
        assert!(post.created_at.is_some());
    }

    #[test]
    fn response_replaces_native_id() {
        let mut post = Post::new(valid_payload());
        let id = ObjectId::new();
        post.id = Some(id);

        let response = PostResponse::from(post);
        assert_eq!(response.id, id.to_hex());

        let value = serde_json::to_value(&response).unwrap();
        assert!(value.get("_id").is_none());
        assert_eq!(value["id"], id.to_hex());
    }

    #[test]
    fn create_request_validation_bounds() {
        assert!(valid_payload().validate().is_ok());

        let mut payload = valid_payload();
        payload.author_name = String::new();
        assert!(payload.validate().is_err());

        let mut payload = valid_payload();
        payload.author_name = "a".repeat(61);
        assert!(payload.validate().is_err());

        let mut payload = valid_payload();
        payload.image_url = "not a url".to_string();
        assert!(payload.validate().is_err());

        let mut payload = valid_payload();
        payload.author_avatar_url = Some("also not a url".to_string());
        assert!(payload.validate().is_err());

        let mut payload = valid_payload();
        payload.caption = Some("x".repeat(2201));
        assert!(payload.validate().is_err());

        let mut payload = valid_payload();
        payload.caption = Some("x".repeat(2200));
        assert!(payload.validate().is_ok());
    }

    #[test]
    fn like_request_defaults_to_increment() {
        let parsed: LikeRequest = serde_json::from_str("{}").unwrap();
        assert!(parsed.increment);

        let parsed: LikeRequest = serde_json::from_str(r#"{"increment": false}"#).unwrap();
        assert!(!parsed.increment);
    }

    #[test]
    fn stored_document_tolerates_missing_fields() {
        // Documents written before likes/comments/created_at existed must
        // still deserialize.
        let doc = bson::doc! {
            "_id": ObjectId::new(),
            "author_name": "alice",
            "image_url": "https://x/y.jpg",
        };
        let post: Post = bson::from_document(doc).unwrap();
        assert_eq!(post.likes, 0);
        assert!(post.comments.is_empty());
        assert!(post.created_at.is_none());
        assert!(post.caption.is_none());
    }
}
