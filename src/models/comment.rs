use serde::{Deserialize, Serialize};
use validator::Validate;

/// A comment embedded in a post's `comments` array.
///
/// Comments are not a standalone collection: an entry carries no id and no
/// timestamp of its own, only what the feed renders. Array order is display
/// order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentEntry {
    pub author_name: String,
    pub text: String,
}

/// DTO for appending a comment to a post.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCommentRequest {
    #[validate(length(
        min = 1,
        max = 60,
        message = "author_name must be between 1 and 60 characters"
    ))]
    pub author_name: String,

    #[validate(length(
        min = 1,
        max = 300,
        message = "text must be between 1 and 300 characters"
    ))]
    pub text: String,
}
