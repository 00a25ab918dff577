//! End-to-end tests for the export pipeline.
//!
//! Runs the full parse -> resolve -> transcript -> sink flow against a mock
//! catalog server, with the filesystem sink writing into a temp directory.

use lessonfetch::{CatalogResolver, ExportError, Exporter, FsSink, TranscriptFetcher};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Mounts a complete lesson on the mock server: search hit, timed-word
/// document, and audio asset.
async fn mount_lesson(server: &MockServer, query: &str, title: &str, words: &[&str]) {
    let base = server.uri();
    Mock::given(method("GET"))
        .and(path("/lessons.json"))
        .and(query_param("q", query))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "lessons": [{
                "id": "abc123",
                "title": title,
                "level": "newbie",
                "crd_url": format!("{base}/crd/abc123.json"),
                "audio_url": format!("{base}/audio/abc123.mp3"),
                "course": null,
                "course_position": null
            }],
            "next_page_url": null
        })))
        .mount(server)
        .await;

    let word_objects: Vec<serde_json::Value> = words
        .iter()
        .map(|w| serde_json::json!({"hanzi": w, "pinyin": "x", "meaning": "x"}))
        .collect();
    Mock::given(method("GET"))
        .and(path("/crd/abc123.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "words": word_objects,
            "version": 5
        })))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/audio/abc123.mp3"))
        .respond_with(
            ResponseTemplate::new(200).set_body_bytes(b"ID3-fake-audio-bytes".to_vec()),
        )
        .mount(server)
        .await;
}

fn exporter_for(server: &MockServer) -> Exporter {
    let resolver = CatalogResolver::with_base_url(server.uri()).unwrap();
    Exporter::new(resolver, TranscriptFetcher::new().unwrap())
}

#[tokio::test]
async fn test_export_writes_transcript_and_audio() {
    let server = MockServer::start().await;
    mount_lesson(&server, "a trip north", "A Trip North!", &["你", "好"]).await;

    let dir = tempfile::tempdir().unwrap();
    let sink = FsSink::new(dir.path()).unwrap();
    let exporter = exporter_for(&server);

    let outcome = exporter
        .export(
            Some("https://duchinese.net/lessons/abc123-a-trip-north"),
            &sink,
        )
        .await
        .unwrap();

    assert_eq!(outcome.transcript, "你好");
    assert_eq!(outcome.suggested_name, "A Trip North");

    let transcript = std::fs::read_to_string(dir.path().join("A Trip North.txt")).unwrap();
    assert_eq!(transcript, "你好");

    let audio = std::fs::read(dir.path().join("A Trip North.mp3")).unwrap();
    assert_eq!(audio, b"ID3-fake-audio-bytes");
}

#[tokio::test]
async fn test_export_course_page_flow() {
    let server = MockServer::start().await;
    let base = server.uri();
    Mock::given(method("GET"))
        .and(path("/lessons.json"))
        .and(query_param("q", "short stories"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "lessons": [{
                "id": "l3",
                "title": "Short Stories 3",
                "crd_url": format!("{base}/crd/l3.json"),
                "audio_url": format!("{base}/audio/l3.mp3"),
                "course": {"id": 42, "title": "Short Stories"},
                "course_position": 2
            }]
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/crd/l3.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "words": [{"hanzi": "第"}, {"hanzi": "三"}, {"hanzi": "章"}]
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/audio/l3.mp3"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"audio".to_vec()))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let sink = FsSink::new(dir.path()).unwrap();
    let exporter = exporter_for(&server);

    let outcome = exporter
        .export(
            Some("https://duchinese.net/courses/42-short-stories?chapter=3"),
            &sink,
        )
        .await
        .unwrap();

    assert_eq!(outcome.transcript, "第三章");
    assert!(dir.path().join("Short Stories 3.txt").exists());
    assert!(dir.path().join("Short Stories 3.mp3").exists());
}

#[tokio::test]
async fn test_export_all_cjk_title_uses_lesson_id_stem() {
    // A fully Chinese title strips to nothing; the files take the lesson id
    // instead of coming out as hidden ".txt"/".mp3" names.
    let server = MockServer::start().await;
    mount_lesson(&server, "ni hao", "你好", &["你", "好"]).await;

    let dir = tempfile::tempdir().unwrap();
    let sink = FsSink::new(dir.path()).unwrap();
    let exporter = exporter_for(&server);

    let outcome = exporter
        .export(Some("https://duchinese.net/lessons/abc123-ni-hao"), &sink)
        .await
        .unwrap();

    assert_eq!(outcome.suggested_name, "abc123");
    assert!(dir.path().join("abc123.txt").exists());
    assert!(dir.path().join("abc123.mp3").exists());
}

#[tokio::test]
async fn test_export_rerun_is_byte_identical() {
    // Same page address, unchanged catalog: the transcript file must come out
    // byte-identical on a second run.
    let server = MockServer::start().await;
    mount_lesson(&server, "a trip north", "A Trip North", &["我", "们", "走"]).await;

    let exporter = exporter_for(&server);
    let page = "https://duchinese.net/lessons/abc123-a-trip-north";

    let first_dir = tempfile::tempdir().unwrap();
    let first_sink = FsSink::new(first_dir.path()).unwrap();
    exporter.export(Some(page), &first_sink).await.unwrap();

    let second_dir = tempfile::tempdir().unwrap();
    let second_sink = FsSink::new(second_dir.path()).unwrap();
    exporter.export(Some(page), &second_sink).await.unwrap();

    let first = std::fs::read(first_dir.path().join("A Trip North.txt")).unwrap();
    let second = std::fs::read(second_dir.path().join("A Trip North.txt")).unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_export_missing_page_url_fails_before_any_write() {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();
    let sink = FsSink::new(dir.path()).unwrap();
    let exporter = exporter_for(&server);

    let err = exporter.export(None, &sink).await.unwrap_err();
    assert!(matches!(err, ExportError::Parse(_)));
    assert_eq!(
        std::fs::read_dir(dir.path()).unwrap().count(),
        0,
        "no files written on parse failure"
    );
}

#[tokio::test]
async fn test_export_missing_words_fails_before_any_write() {
    // A schema-violating timed-word document must not leave a partial export.
    let server = MockServer::start().await;
    let base = server.uri();
    Mock::given(method("GET"))
        .and(path("/lessons.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "lessons": [{
                "id": "abc123",
                "title": "Broken",
                "crd_url": format!("{base}/crd/abc123.json"),
                "audio_url": format!("{base}/audio/abc123.mp3")
            }]
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/crd/abc123.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"version": 5})))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let sink = FsSink::new(dir.path()).unwrap();
    let exporter = exporter_for(&server);

    let err = exporter
        .export(Some("https://duchinese.net/lessons/abc123-broken"), &sink)
        .await
        .unwrap_err();
    assert!(matches!(err, ExportError::Transcript(_)));
    assert_eq!(
        std::fs::read_dir(dir.path()).unwrap().count(),
        0,
        "no files written on transcript failure"
    );
}
