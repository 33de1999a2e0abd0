use axum::{Json, extract::State, response::IntoResponse};
use bson::doc;
use validator::Validate;

use crate::{
    error::AppError,
    models::post::{CreatePostRequest, Post, PostResponse},
    store::Store,
};

/// Feed page size.
const LIST_LIMIT: i64 = 50;

/// List posts, newest first.
pub async fn list_posts(State(store): State<Store>) -> Result<impl IntoResponse, AppError> {
    let mut posts: Vec<Post> = store.query("post", doc! {}, LIST_LIMIT).await?;

    sort_newest_first(&mut posts);

    let posts: Vec<PostResponse> = posts.into_iter().map(PostResponse::from).collect();
    Ok(Json(posts))
}

/// Create a new post.
pub async fn create_post(
    State(store): State<Store>,
    Json(payload): Json<CreatePostRequest>,
) -> Result<impl IntoResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let post = Post::new(payload);
    let id = store.insert("post", &post).await?;

    // Re-fetch so the response reflects exactly what the store holds.
    let created: Post = store
        .find_one("post", id)
        .await?
        .ok_or_else(|| AppError::NotFound("Post not found".to_string()))?;

    Ok(Json(PostResponse::from(created)))
}

/// Descending by creation time; documents without a timestamp sort as
/// earliest, i.e. last in the feed.
fn sort_newest_first(posts: &mut [Post]) {
    posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post_at(author: &str, created_at: Option<bson::DateTime>) -> Post {
        Post {
            id: None,
            author_name: author.to_string(),
            author_avatar_url: None,
            image_url: "https://x/y.jpg".to_string(),
            caption: None,
            likes: 0,
            comments: Vec::new(),
            created_at,
        }
    }

    #[test]
    fn sort_puts_newest_first_and_undated_last() {
        let mut posts = vec![
            post_at("old", Some(bson::DateTime::from_millis(1_000))),
            post_at("undated", None),
            post_at("new", Some(bson::DateTime::from_millis(3_000))),
            post_at("mid", Some(bson::DateTime::from_millis(2_000))),
        ];

        sort_newest_first(&mut posts);

        let order: Vec<&str> = posts.iter().map(|p| p.author_name.as_str()).collect();
        assert_eq!(order, vec!["new", "mid", "old", "undated"]);
    }
}
