// src/models/user.rs

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Account schema.
///
/// Defined alongside the other document shapes but not wired to any route;
/// nothing writes a 'user' collection today.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct User {
    /// Unique handle.
    #[validate(length(
        min = 3,
        max = 30,
        message = "username must be between 3 and 30 characters"
    ))]
    pub username: String,

    /// Display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Profile image URL.
    #[validate(url(message = "avatar_url must be a valid URL"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,

    /// Short bio.
    #[validate(length(max = 200, message = "bio must be at most 200 characters"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
}
