use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use bson::doc;
use validator::Validate;

use crate::{
    error::AppError,
    models::comment::{CommentEntry, CreateCommentRequest},
    models::post::{LikeRequest, Post, PostResponse},
    store::{self, Store},
};

/// Like or unlike a post by atomically adjusting its counter.
pub async fn like_post(
    State(store): State<Store>,
    Path(post_id): Path<String>,
    payload: Option<Json<LikeRequest>>,
) -> Result<impl IntoResponse, AppError> {
    let id = store::parse_object_id(&post_id)?;
    let payload = payload.map(|Json(p)| p).unwrap_or_default();

    let delta: i64 = if payload.increment { 1 } else { -1 };
    let matched = store
        .update_one("post", id, doc! { "$inc": { "likes": delta } })
        .await?;
    if !matched {
        return Err(AppError::NotFound("Post not found".to_string()));
    }

    let post: Post = store
        .find_one("post", id)
        .await?
        .ok_or_else(|| AppError::NotFound("Post not found".to_string()))?;

    Ok(Json(PostResponse::from(post)))
}

/// Append a comment to a post's embedded comment list.
pub async fn add_comment(
    State(store): State<Store>,
    Path(post_id): Path<String>,
    Json(payload): Json<CreateCommentRequest>,
) -> Result<impl IntoResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let id = store::parse_object_id(&post_id)?;

    let entry = CommentEntry {
        author_name: payload.author_name,
        text: payload.text,
    };
    let matched = store
        .update_one(
            "post",
            id,
            doc! { "$push": { "comments": bson::to_bson(&entry)? } },
        )
        .await?;
    if !matched {
        return Err(AppError::NotFound("Post not found".to_string()));
    }

    let post: Post = store
        .find_one("post", id)
        .await?
        .ok_or_else(|| AppError::NotFound("Post not found".to_string()))?;

    Ok(Json(PostResponse::from(post)))
}
