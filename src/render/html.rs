//! Bundled HTML report page.

use maud::{DOCTYPE, Markup, PreEscaped, html};

use super::{LinkBuilder, Renderer, ext_link};
use crate::NormalizedPost;
use crate::config::ReportConfig;
use crate::core::{ReportView, text_to_html};
use crate::error::Result;
use crate::parsing::RawFavorite;

const TITLE_DATE_FORMAT: &str = "%Y-%m-%d";

const STYLE: &str = r"
body { font-family: sans-serif; max-width: 48em; margin: 0 auto; padding: 1em; color: #222; }
header ul.summary { list-style: none; padding: 0; display: flex; gap: 1.5em; }
article { border-bottom: 1px solid #ddd; padding: 0.75em 0; display: flex; gap: 0.75em; }
article.retweet { background: #f4fbf4; }
img.avatar { width: 48px; height: 48px; border-radius: 50%; }
.meta, .label { color: #666; font-size: 0.85em; }
.text { margin: 0.4em 0; }
";

/// Renders a report as a standalone HTML page.
///
/// Post text is emitted as-is apart from the `<br>` markers: Twitter
/// exports already entity-encode `&`, `<` and `>` in tweet text. Dates
/// arrive preformatted in the [`ReportView`].
#[derive(Debug, Clone, Default)]
pub struct HtmlRenderer {
    links: LinkBuilder,
}

impl HtmlRenderer {
    pub fn new(links: LinkBuilder) -> Self {
        Self { links }
    }

    pub fn from_config(config: &ReportConfig) -> Self {
        Self::new(LinkBuilder::from_config(config))
    }

    /// Renders a page to markup.
    pub fn page(&self, view: &ReportView) -> Markup {
        let day = view.date.map(|d| d.format(TITLE_DATE_FORMAT).to_string());
        let title = match &day {
            Some(day) => format!("Tweets {day}"),
            None => "Tweets".to_string(),
        };

        html! {
            (DOCTYPE)
            html lang="ja" {
                head {
                    meta charset="utf-8";
                    meta name="viewport" content="width=device-width, initial-scale=1";
                    title { (title) }
                    style { (PreEscaped(STYLE)) }
                }
                body {
                    header {
                        @if let Some(day) = &day {
                            h1 { (day) }
                        }
                        ul.summary {
                            li { "Tweets: " (view.count_posts) }
                            li { "Retweets: " (view.count_reshares) }
                            li { "Replies: " (view.count_replies) }
                            li { "Favorites: " (view.count_favorites) }
                        }
                    }
                    section id="tweets" {
                        h2 { "Tweets" }
                        @for post in &view.posts {
                            (self.post(post))
                        }
                    }
                    section id="favorites" {
                        h2 { "Favorites" }
                        @for (fav, date) in view.favorites.iter().zip(&view.favorite_dates) {
                            (self.favorite(fav, date))
                        }
                    }
                }
            }
        }
    }

    fn post(&self, post: &NormalizedPost) -> Markup {
        html! {
            article.tweet.retweet[post.is_reshare] {
                img.avatar src=(post.user_image) alt=(post.screen_name);
                div {
                    @if post.is_reshare {
                        div.label {
                            "Retweeted"
                            @if let Some(origin) = &post.origin_date {
                                " · originally posted " (origin)
                            }
                        }
                    }
                    div.author {
                        (ext_link(&self.links.user_url(&post.user_id), post.user_name.as_str()))
                        " "
                        span.meta { "@" (post.screen_name) }
                    }
                    @if let Some(reply_to) = &post.reply_to_id {
                        div.label {
                            "In reply to "
                            (ext_link(&self.links.post_url(reply_to), reply_to.as_str()))
                        }
                    }
                    p.text { (PreEscaped(&post.text)) }
                    div.meta {
                        (ext_link(&self.links.post_url(&post.id), post.date.as_str()))
                    }
                }
            }
        }
    }

    fn favorite(&self, fav: &RawFavorite, date: &str) -> Markup {
        html! {
            article.favorite {
                img.avatar src=(fav.user.image) alt=(fav.user.screen_name);
                div {
                    div.author {
                        (ext_link(&self.links.user_url(&fav.user.id), fav.user.name.as_str()))
                        " "
                        span.meta { "@" (fav.user.screen_name) }
                    }
                    p.text { (PreEscaped(text_to_html(&fav.text))) }
                    div.meta {
                        (ext_link(&self.links.post_url(&fav.id), date))
                    }
                }
            }
        }
    }
}

impl Renderer for HtmlRenderer {
    fn name(&self) -> &'static str {
        "HTML"
    }

    fn render(&self, view: &ReportView) -> Result<String> {
        Ok(self.page(view).into_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::DateFormatter;
    use crate::parsing::parse_export;

    fn renderer() -> HtmlRenderer {
        HtmlRenderer::from_config(&ReportConfig::default())
    }

    fn view(json: &str) -> ReportView {
        let dates = DateFormatter::from_config(&ReportConfig::default()).unwrap();
        ReportView::build(parse_export(json.as_bytes()).unwrap(), &dates)
    }

    #[test]
    fn test_renders_post() {
        let html = renderer()
            .render(&view(
                r#"[{"id_str":"1","retweeted":false,"user":{"id_str":"u1","name":"A","screen_name":"a","profile_image_url_https":"img"},"text":"hi\nthere","created_at":"Mon Jan 2 15:04:05 +0000 2006"}]"#,
            ))
            .unwrap();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Tweets 2006-01-03</title>"));
        assert!(html.contains("hi<br>there"));
        assert!(html.contains("https://twitter.com/intent/user?user_id=u1"));
        assert!(html.contains("https://twitter.com/twitter/status/1"));
        assert!(html.contains("2006-01-03 00:04:05"));
        assert!(html.contains("Tweets: 1"));
        assert!(html.contains("Favorites: 0"));
    }

    #[test]
    fn test_renders_retweet_label() {
        let html = renderer()
            .render(&view(
                r#"[{"id_str":"2","retweeted":true,"created_at":"Mon Jan 15 10:30:00 +0000 2024",
                    "retweeted_status":{"id_str":"1","user":{"id_str":"o","name":"Orig"},"text":"x","created_at":"Sun Jan 14 12:00:00 +0000 2024"}}]"#,
            ))
            .unwrap();

        assert!(html.contains(r#"class="tweet retweet""#));
        assert!(html.contains("originally posted 2024-01-14 21:00:00"));
        assert!(html.contains("Retweets: 1"));
    }

    #[test]
    fn test_renders_reply_and_favorite() {
        let html = renderer()
            .render(&view(
                r#"[{"id_str":"3","retweeted":false,"in_reply_to_status_id_str":"2"},
                    {"id_str":"9","user":{"id_str":"f","name":"Fav"},"text":"liked\nit"}]"#,
            ))
            .unwrap();

        assert!(html.contains("In reply to"));
        assert!(html.contains("https://twitter.com/twitter/status/2"));
        assert!(html.contains("liked<br>it"));
        assert!(html.contains(r#"class="favorite""#));
    }

    #[test]
    fn test_escapes_author_fields() {
        let html = renderer()
            .render(&view(
                r#"[{"id_str":"1","retweeted":false,"user":{"name":"<script>","screen_name":"s"}}]"#,
            ))
            .unwrap();
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_title_without_date() {
        let html = renderer()
            .render(&view(r#"[{"id_str": "9", "text": "only a favorite"}]"#))
            .unwrap();
        assert!(html.contains("<title>Tweets</title>"));
        assert!(!html.contains("<h1>"));
    }

    #[test]
    fn test_favorite_date_comes_from_view() {
        let dates = DateFormatter::new(0, "%H:%M").unwrap();
        let view = ReportView::build(
            parse_export(br#"[{"id_str": "9", "created_at": "Mon Jan 15 10:30:00 +0000 2024"}]"#)
                .unwrap(),
            &dates,
        );
        let html = renderer().render(&view).unwrap();
        assert!(html.contains(">10:30<"));
        assert!(!html.contains("19:30"));
    }

    #[test]
    fn test_deterministic() {
        let v = view(r#"[{"id_str":"1","retweeted":false,"text":"same"}]"#);
        let r = renderer();
        assert_eq!(r.render(&v).unwrap(), r.render(&v).unwrap());
    }
}
