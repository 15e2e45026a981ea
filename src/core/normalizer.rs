//! Record normalization.
//!
//! Collapses original posts and retweets into [`NormalizedPost`]s while
//! counting reshares and replies.
//!
//! # Example
//!
//! ```rust
//! use tweetpack::core::{DateFormatter, normalize_posts};
//! use tweetpack::parsing::{parse_export, split_records};
//!
//! let json = br#"[{"id_str":"1","retweeted":false,"text":"a\nb","created_at":"Mon Jan 15 10:30:00 +0000 2024"}]"#;
//! let (posts, _) = split_records(parse_export(json)?);
//! let dates = DateFormatter::new(9 * 3600, "%Y-%m-%d %H:%M:%S")?;
//!
//! let (normalized, stats) = normalize_posts(&posts, &dates);
//! assert_eq!(normalized[0].text, "a<br>b");
//! assert_eq!(stats.reshares, 0);
//! # Ok::<(), tweetpack::TweetpackError>(())
//! ```

use serde::Serialize;

use super::dates::DateFormatter;
use crate::NormalizedPost;
use crate::config::LINE_BREAK;
use crate::parsing::{RawPost, RawReshareTarget, RawUser};

/// Counters accumulated while normalizing a file's posts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct NormalizeStats {
    pub posts: usize,
    pub reshares: usize,
    pub replies: usize,
}

/// Stateful normalizer for a single file's posts.
#[derive(Debug)]
pub struct Normalizer<'a> {
    dates: &'a DateFormatter,
    stats: NormalizeStats,
}

impl<'a> Normalizer<'a> {
    pub fn new(dates: &'a DateFormatter) -> Self {
        Self {
            dates,
            stats: NormalizeStats::default(),
        }
    }

    /// Normalizes one post, updating the counters.
    ///
    /// Retweets take their id, author and text from the embedded original
    /// and record its creation time as `origin_date`; a retweet missing the
    /// embedded original yields empty fields. Reply id, reshare flag and
    /// `date` always come from the outer record.
    pub fn normalize(&mut self, post: &RawPost) -> NormalizedPost {
        let mut normalized = if post.is_reshare {
            self.stats.reshares += 1;
            let fallback = RawReshareTarget::default();
            let target = post.reshare.as_ref().unwrap_or(&fallback);
            let mut normalized = from_parts(&target.id, &target.user, &target.text);
            normalized.origin_date = Some(self.dates.format(&target.created_at));
            normalized
        } else {
            from_parts(&post.id, &post.user, &post.text)
        };

        normalized.is_reshare = post.is_reshare;
        normalized.reply_to_id.clone_from(&post.reply_to_id);
        normalized.date = self.dates.format(&post.created_at);

        if normalized.reply_to_id.is_some() {
            self.stats.replies += 1;
        }
        self.stats.posts += 1;
        normalized
    }

    /// Counters so far.
    pub fn stats(&self) -> NormalizeStats {
        self.stats
    }
}

fn from_parts(id: &str, user: &RawUser, text: &str) -> NormalizedPost {
    NormalizedPost::new(id, text_to_html(text)).with_author(
        &user.id,
        &user.name,
        &user.screen_name,
        &user.image,
    )
}

/// Replaces every newline with the `<br>` marker.
pub fn text_to_html(text: &str) -> String {
    text.replace('\n', LINE_BREAK)
}

/// Normalizes a file's posts in order.
pub fn normalize_posts(
    posts: &[RawPost],
    dates: &DateFormatter,
) -> (Vec<NormalizedPost>, NormalizeStats) {
    let mut normalizer = Normalizer::new(dates);
    let normalized = posts.iter().map(|p| normalizer.normalize(p)).collect();
    (normalized, normalizer.stats())
}
