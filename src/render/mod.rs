//! Report rendering.
//!
//! A [`Renderer`] turns a [`ReportView`] into a page of HTML. Renderers are
//! plain values constructed up front and passed to the batch driver, so
//! several can coexist in one process.
//!
//! - [`LinkBuilder`] - profile/permalink URL helpers and [`ext_link`]
//! - [`HtmlRenderer`] - the bundled maud page
//!
//! # Example
//!
//! ```rust
//! use tweetpack::config::ReportConfig;
//! use tweetpack::core::{DateFormatter, ReportView};
//! use tweetpack::render::{HtmlRenderer, Renderer};
//!
//! let config = ReportConfig::default();
//! let renderer = HtmlRenderer::from_config(&config);
//! let view = ReportView::build(Vec::new(), &DateFormatter::from_config(&config)?);
//!
//! let html = renderer.render(&view)?;
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! # Ok::<(), tweetpack::TweetpackError>(())
//! ```

mod html;

use maud::{Markup, Render, html};
use serde::{Deserialize, Serialize};

use crate::config::{POST_URL_BASE, ReportConfig, USER_URL_BASE};
use crate::core::ReportView;
use crate::error::Result;

pub use html::HtmlRenderer;

/// Produces a report page from a view.
pub trait Renderer {
    /// Human-readable renderer name, used in error messages.
    fn name(&self) -> &'static str;

    /// Renders one page.
    ///
    /// # Errors
    ///
    /// Returns [`TweetpackError::Render`](crate::TweetpackError::Render) when
    /// the page cannot be produced.
    fn render(&self, view: &ReportView) -> Result<String>;
}

impl<R: Renderer + ?Sized> Renderer for Box<R> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn render(&self, view: &ReportView) -> Result<String> {
        (**self).render(view)
    }
}

/// Builds profile and permalink URLs from ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkBuilder {
    user_url_base: String,
    post_url_base: String,
}

impl Default for LinkBuilder {
    fn default() -> Self {
        Self::new(USER_URL_BASE, POST_URL_BASE)
    }
}

impl LinkBuilder {
    pub fn new(user_url_base: impl Into<String>, post_url_base: impl Into<String>) -> Self {
        Self {
            user_url_base: user_url_base.into(),
            post_url_base: post_url_base.into(),
        }
    }

    pub fn from_config(config: &ReportConfig) -> Self {
        Self::new(config.user_url_base.clone(), config.post_url_base.clone())
    }

    /// Profile URL for a user id.
    pub fn user_url(&self, id: &str) -> String {
        format!("{}{}", self.user_url_base, id)
    }

    /// Permalink URL for a post id.
    pub fn post_url(&self, id: &str) -> String {
        format!("{}{}", self.post_url_base, id)
    }
}

/// Wraps `text` in a link that opens in a new tab without a referrer.
///
/// ```rust
/// use tweetpack::render::ext_link;
///
/// let link = ext_link("https://example.com", "example").into_string();
/// assert_eq!(
///     link,
///     r#"<a href="https://example.com" rel="noreferrer noopener" target="_blank">example</a>"#
/// );
/// ```
pub fn ext_link(href: &str, text: impl Render) -> Markup {
    html! {
        a href=(href) rel="noreferrer noopener" target="_blank" { (text) }
    }
}
