//! Integration tests for the library pipeline with real files.

use std::fs;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use tempfile::tempdir;
use tweetpack::batch::{BatchConverter, discover_inputs, output_path};
use tweetpack::prelude::*;

const MINIMAL: &str = r#"[{"id_str":"1","retweeted":false,"user":{"id_str":"u1","name":"A","screen_name":"a","profile_image_url_https":"img"},"text":"hi\nthere","created_at":"Mon Jan 2 15:04:05 +0000 2006"}]"#;

const RETWEETS: &str = r#"[
    {"id_str": "10", "retweeted": true, "user": {"id_str": "me", "name": "Me"}, "text": "RT 1",
     "created_at": "Mon Jan 15 10:30:00 +0000 2024",
     "retweeted_status": {"id_str": "1", "user": {"id_str": "a", "name": "Alice", "screen_name": "alice", "profile_image_url_https": "a.png"},
       "text": "from alice", "created_at": "Sun Jan 14 00:00:00 +0000 2024"}},
    {"id_str": "11", "retweeted": true, "user": {"id_str": "me", "name": "Me"}, "text": "RT 2",
     "created_at": "Mon Jan 15 11:30:00 +0000 2024",
     "retweeted_status": {"id_str": "2", "user": {"id_str": "b", "name": "Bob", "screen_name": "bob", "profile_image_url_https": "b.png"},
       "text": "from bob", "created_at": "Sat Jan 13 00:00:00 +0000 2024"}},
    {"id_str": "12", "retweeted": false, "user": {"id_str": "me", "name": "Me", "screen_name": "me", "profile_image_url_https": "me.png"},
     "text": "my own", "created_at": "Mon Jan 15 12:30:00 +0000 2024"}
]"#;

fn jst() -> DateFormatter {
    DateFormatter::from_config(&ReportConfig::default()).unwrap()
}

#[test]
fn test_minimal_record() {
    let view = ReportView::build(parse_export(MINIMAL.as_bytes()).unwrap(), &jst());

    assert_eq!(view.posts.len(), 1);
    let post = &view.posts[0];
    assert_eq!(post.id, "1");
    assert_eq!(post.text, "hi<br>there");
    assert!(!post.is_reshare);
    assert!(!post.date.is_empty());
    assert!(post.origin_date.is_none());
    assert_eq!(view.count_favorites, 0);
}

#[test]
fn test_retweets_never_mix_authors() {
    let view = ReportView::build(parse_export(RETWEETS.as_bytes()).unwrap(), &jst());

    assert_eq!(view.count_reshares, 2);
    assert_eq!(view.count_originals(), 1);

    let alice = &view.posts[0];
    assert_eq!(
        (alice.id.as_str(), alice.user_id.as_str(), alice.user_name.as_str()),
        ("1", "a", "Alice")
    );
    assert_eq!(alice.screen_name, "alice");
    assert_eq!(alice.user_image, "a.png");
    assert_eq!(alice.origin_date.as_deref(), Some("2024-01-14 09:00:00"));
    assert_eq!(alice.date, "2024-01-15 19:30:00");

    let own = &view.posts[2];
    assert_eq!(own.user_id, "me");
    assert_eq!(own.user_image, "me.png");
    assert!(own.origin_date.is_none());
}

#[test]
fn test_view_serializes_for_external_renderers() {
    let view = ReportView::build(parse_export(RETWEETS.as_bytes()).unwrap(), &jst());
    let json = serde_json::to_value(&view).unwrap();

    assert_eq!(json["count_reshares"], 2);
    assert_eq!(json["posts"][0]["screen_name"], "alice");
    assert_eq!(json["date"], "2024-01-15T19:30:00+09:00");
}

#[test]
fn test_batch_over_directory() {
    let dir = tempdir().unwrap();
    let data = dir.path().join("data");
    fs::create_dir_all(data.join("2006/01")).unwrap();
    fs::create_dir_all(data.join("2024/01")).unwrap();
    fs::write(data.join("2006/01/02.json"), MINIMAL).unwrap();
    fs::write(data.join("2024/01/15.json"), RETWEETS).unwrap();

    let config = ReportConfig::new()
        .with_input_dir(&data)
        .with_output_dir(dir.path().join("build"));
    let renderer = HtmlRenderer::from_config(&config);

    let reports = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&reports);
    let summary = BatchConverter::new(&config, &renderer)
        .unwrap()
        .with_progress(Arc::new(move |r: &FileReport| {
            sink.lock().unwrap().push((r.progress, r.is_written()));
        }))
        .run_dir()
        .unwrap();

    assert_eq!(
        summary,
        BatchSummary {
            total: 2,
            written: 2,
            skipped: 0,
            posts: 4,
            reshares: 2,
            favorites: 0,
        }
    );
    assert!(summary.is_clean());
    assert_eq!(
        reports.lock().unwrap().as_slice(),
        [(Progress::new(1, 2), true), (Progress::new(2, 2), true)]
    );

    let html = fs::read_to_string(dir.path().join("build/2006/01/02.html")).unwrap();
    assert!(html.contains("hi<br>there"));
}

#[test]
fn test_discovered_files_map_into_output_root() {
    let dir = tempdir().unwrap();
    let data = dir.path().join("data");
    fs::create_dir_all(data.join("nested/deeper")).unwrap();
    fs::write(data.join("nested/deeper/x.json"), "[]").unwrap();

    let config = ReportConfig::new()
        .with_input_dir(&data)
        .with_output_dir(dir.path().join("site"));

    let inputs = discover_inputs(&data).unwrap();
    assert_eq!(inputs.len(), 1);
    assert_eq!(
        output_path(&config, &inputs[0]),
        dir.path().join("site/nested/deeper/x.html")
    );
}

#[test]
fn test_custom_renderer() {
    struct CountRenderer;

    impl Renderer for CountRenderer {
        fn name(&self) -> &'static str {
            "count"
        }

        fn render(&self, view: &ReportView) -> Result<String> {
            Ok(format!(
                "{} {} {}",
                view.count_posts, view.count_reshares, view.count_favorites
            ))
        }
    }

    let dir = tempdir().unwrap();
    let input = dir.path().join("in.json");
    fs::write(&input, RETWEETS).unwrap();

    let config = ReportConfig::new()
        .with_input_dir(dir.path())
        .with_output_dir(dir.path().join("out"));
    BatchConverter::new(&config, &CountRenderer)
        .unwrap()
        .run(&[input])
        .unwrap();

    let out: PathBuf = dir.path().join("out/in.html");
    assert_eq!(fs::read_to_string(out).unwrap(), "3 2 0");
}
