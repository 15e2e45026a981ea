//! Twitter export schema and single-pass record classification.
//!
//! An export file is a JSON array whose elements are either timeline posts
//! (carrying a `retweeted` flag and possibly an embedded `retweeted_status`)
//! or favorites (the same shape without the reshare fields). Each file is
//! parsed exactly once into [`ExportRecord`]s.

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{Result, TweetpackError};

/// Author block shared by posts, reshare targets and favorites.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawUser {
    #[serde(rename = "id_str", default, deserialize_with = "nullable_string")]
    pub id: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub name: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub screen_name: String,
    #[serde(
        rename = "profile_image_url_https",
        default,
        deserialize_with = "nullable_string"
    )]
    pub image: String,
}

/// The original post embedded in a retweet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawReshareTarget {
    #[serde(rename = "id_str", default, deserialize_with = "nullable_string")]
    pub id: String,
    #[serde(default, deserialize_with = "nullable_user")]
    pub user: RawUser,
    #[serde(default, deserialize_with = "nullable_string")]
    pub text: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub created_at: String,
}

/// A timeline post: an original tweet or a retweet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RawPost {
    pub id: String,
    pub reply_to_id: Option<String>,
    pub is_reshare: bool,
    pub user: RawUser,
    pub text: String,
    pub created_at: String,
    pub reshare: Option<RawReshareTarget>,
}

/// A post the account owner marked as liked.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RawFavorite {
    pub id: String,
    pub reply_to_id: Option<String>,
    pub user: RawUser,
    pub text: String,
    pub created_at: String,
}

/// One element of an export array, classified once at parse time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ExportRecord {
    Post(RawPost),
    Favorite(RawFavorite),
}

impl ExportRecord {
    /// Returns `true` for timeline posts (including retweets).
    pub fn is_post(&self) -> bool {
        matches!(self, ExportRecord::Post(_))
    }

    /// Returns `true` for favorites.
    pub fn is_favorite(&self) -> bool {
        matches!(self, ExportRecord::Favorite(_))
    }
}

/// Wire shape covering both record kinds.
#[derive(Debug, Deserialize)]
struct WireRecord {
    #[serde(rename = "id_str", default, deserialize_with = "nullable_string")]
    id: String,
    #[serde(rename = "in_reply_to_status_id_str", default)]
    reply_to_id: Option<String>,
    /// Present on timeline posts only; its absence marks a favorite.
    #[serde(default)]
    retweeted: Option<bool>,
    #[serde(default, deserialize_with = "nullable_user")]
    user: RawUser,
    #[serde(default)]
    retweeted_status: Option<RawReshareTarget>,
    #[serde(default, deserialize_with = "nullable_string")]
    text: String,
    #[serde(default, deserialize_with = "nullable_string")]
    created_at: String,
}

impl From<WireRecord> for ExportRecord {
    fn from(wire: WireRecord) -> Self {
        let reply_to_id = wire.reply_to_id.filter(|id| !id.is_empty());
        match wire.retweeted {
            Some(is_reshare) => ExportRecord::Post(RawPost {
                id: wire.id,
                reply_to_id,
                is_reshare,
                user: wire.user,
                text: wire.text,
                created_at: wire.created_at,
                reshare: wire.retweeted_status,
            }),
            None => ExportRecord::Favorite(RawFavorite {
                id: wire.id,
                reply_to_id,
                user: wire.user,
                text: wire.text,
                created_at: wire.created_at,
            }),
        }
    }
}

/// Parses an export file's bytes into classified records, preserving order.
///
/// # Errors
///
/// Returns [`TweetpackError::Parse`] (without a path) if the bytes are not a
/// JSON array of objects.
///
/// # Example
///
/// ```rust
/// use tweetpack::parsing::twitter::parse_export;
///
/// let records = parse_export(br#"[{"id_str": "1", "retweeted": false}, {"id_str": "2"}]"#)?;
/// assert!(records[0].is_post());
/// assert!(records[1].is_favorite());
/// # Ok::<(), tweetpack::TweetpackError>(())
/// ```
pub fn parse_export(bytes: &[u8]) -> Result<Vec<ExportRecord>> {
    let wire: Vec<WireRecord> =
        serde_json::from_slice(bytes).map_err(|e| TweetpackError::parse(e, None))?;
    Ok(wire.into_iter().map(ExportRecord::from).collect())
}

/// Splits classified records into posts and favorites, keeping each in order.
pub fn split_records(records: Vec<ExportRecord>) -> (Vec<RawPost>, Vec<RawFavorite>) {
    let mut posts = Vec::new();
    let mut favorites = Vec::new();
    for record in records {
        match record {
            ExportRecord::Post(post) => posts.push(post),
            ExportRecord::Favorite(fav) => favorites.push(fav),
        }
    }
    (posts, favorites)
}

fn nullable_string<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

fn nullable_user<'de, D>(deserializer: D) -> std::result::Result<RawUser, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<RawUser>::deserialize(deserializer).map(Option::unwrap_or_default)
}
