//! Uniform post record handed to renderers.
//!
//! This module provides [`NormalizedPost`], the flat representation of a
//! timeline entry. The normalizer collapses the two source schemas (original
//! tweet and retweet-with-embedded-original) into this one shape, so a
//! renderer never has to care which kind it is looking at beyond the
//! `is_reshare` flag.
//!
//! # Example
//!
//! ```
//! use tweetpack::NormalizedPost;
//!
//! let post = NormalizedPost::new("123", "Hello<br>world")
//!     .with_author("u1", "Alice", "alice", "https://example.com/a.png")
//!     .with_date("2024-01-15 19:30:00");
//!
//! assert_eq!(post.screen_name, "alice");
//! assert!(!post.is_reshare);
//! ```

use serde::{Deserialize, Serialize};

/// A timeline entry after normalization.
///
/// | Field | Source (original) | Source (reshare) |
/// |-------|-------------------|------------------|
/// | `id` | post | reshared post |
/// | author fields | post author | reshared post author |
/// | `text` | post | reshared post |
/// | `date` | post | outer retweet |
/// | `origin_date` | `None` | reshared post |
/// | `reply_to_id`, `is_reshare` | outer record | outer record |
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedPost {
    /// Post identifier.
    pub id: String,

    /// Identifier of the post this one replies to.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub reply_to_id: Option<String>,

    /// Whether the outer record was a retweet.
    pub is_reshare: bool,

    /// Author identifier.
    pub user_id: String,

    /// Author display name.
    pub user_name: String,

    /// Author handle, without `@`.
    pub screen_name: String,

    /// Author avatar URL.
    pub user_image: String,

    /// Display text with newlines replaced by `<br>`.
    pub text: String,

    /// Formatted creation time of the outer record.
    pub date: String,

    /// Formatted creation time of the reshared post (reshares only).
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub origin_date: Option<String>,
}

impl NormalizedPost {
    /// Creates a post with only an id and display text.
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            ..Self::default()
        }
    }

    // =========================================================================
    // Builder methods
    // =========================================================================

    /// Sets all four author fields at once.
    #[must_use]
    pub fn with_author(
        mut self,
        id: impl Into<String>,
        name: impl Into<String>,
        screen_name: impl Into<String>,
        image: impl Into<String>,
    ) -> Self {
        self.user_id = id.into();
        self.user_name = name.into();
        self.screen_name = screen_name.into();
        self.user_image = image.into();
        self
    }

    /// Sets the formatted creation date.
    #[must_use]
    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = date.into();
        self
    }

    /// Sets the reply-to identifier.
    #[must_use]
    pub fn with_reply_to(mut self, id: impl Into<String>) -> Self {
        self.reply_to_id = Some(id.into());
        self
    }

    /// Marks the post as a reshare of content created at `origin_date`.
    #[must_use]
    pub fn with_reshare(mut self, origin_date: impl Into<String>) -> Self {
        self.is_reshare = true;
        self.origin_date = Some(origin_date.into());
        self
    }

    /// Returns `true` if this post replies to another.
    pub fn is_reply(&self) -> bool {
        self.reply_to_id.is_some()
    }
}
