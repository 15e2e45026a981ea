//! Per-file report data handed to renderers.

use chrono::{DateTime, FixedOffset};
use serde::Serialize;

use super::dates::DateFormatter;
use super::normalizer::{NormalizeStats, normalize_posts};
use crate::NormalizedPost;
use crate::parsing::{ExportRecord, RawFavorite, split_records};

/// Everything a renderer needs to produce one report page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportView {
    /// Representative date of the batch: the first post's creation time, in
    /// the display offset. `None` when the file has no posts or the first
    /// post's timestamp is unreadable.
    pub date: Option<DateTime<FixedOffset>>,

    /// Number of timeline posts, retweets included.
    pub count_posts: usize,

    /// Number of retweets among the posts.
    pub count_reshares: usize,

    /// Number of posts that reply to another post.
    pub count_replies: usize,

    /// Number of favorites.
    pub count_favorites: usize,

    pub posts: Vec<NormalizedPost>,

    pub favorites: Vec<RawFavorite>,

    /// Display dates of `favorites`, index for index. Formatted with the
    /// same formatter as the post dates.
    pub favorite_dates: Vec<String>,
}

impl ReportView {
    /// Builds a view from one file's classified records.
    pub fn build(records: Vec<ExportRecord>, dates: &DateFormatter) -> Self {
        let (raw_posts, favorites) = split_records(records);
        let date = raw_posts.first().and_then(|p| dates.parse(&p.created_at));
        let (posts, stats) = normalize_posts(&raw_posts, dates);
        let favorite_dates = favorites.iter().map(|f| dates.format(&f.created_at)).collect();
        Self::from_parts(date, posts, stats, favorites, favorite_dates)
    }

    fn from_parts(
        date: Option<DateTime<FixedOffset>>,
        posts: Vec<NormalizedPost>,
        stats: NormalizeStats,
        favorites: Vec<RawFavorite>,
        favorite_dates: Vec<String>,
    ) -> Self {
        Self {
            date,
            count_posts: stats.posts,
            count_reshares: stats.reshares,
            count_replies: stats.replies,
            count_favorites: favorites.len(),
            posts,
            favorites,
            favorite_dates,
        }
    }

    /// Number of posts that are not retweets.
    pub fn count_originals(&self) -> usize {
        self.count_posts - self.count_reshares
    }

    /// Returns `true` if the file had neither posts nor favorites.
    pub fn is_empty(&self) -> bool {
        self.posts.is_empty() && self.favorites.is_empty()
    }
}
