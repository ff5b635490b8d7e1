//! HTTP client tests against a mock backend

use clipper::api::{HttpJobApi, JobApi, ProjectStatus, UploadFile};
use clipper::config::ClipperConfig;
use clipper::ClipperError;
use serde_json::json;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use wiremock::matchers::{header_regex, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn api_for(server: &MockServer) -> HttpJobApi {
    let config = ClipperConfig::default().with_api_base_url(format!("{}/api", server.uri()));
    HttpJobApi::new(&config).unwrap()
}

fn episode() -> UploadFile {
    UploadFile::new("episode.mp4", b"not really a video".to_vec())
}

#[tokio::test]
async fn test_create_job_posts_multipart_and_returns_project_id() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/jobs"))
        .and(header_regex("content-type", "^multipart/form-data"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "projectId": "p1" })))
        .expect(1)
        .mount(&server)
        .await;

    let response = api_for(&server)
        .create_job(episode(), &CancellationToken::new())
        .await
        .unwrap();
    assert_eq!(response.project_id, "p1");

    let requests = server.received_requests().await.unwrap();
    let body = String::from_utf8_lossy(&requests[0].body);
    assert!(body.contains("name=\"file\""), "multipart field should be named file");
    assert!(body.contains("filename=\"episode.mp4\""));
    assert!(body.contains("video/mp4"));
}

#[tokio::test]
async fn test_create_job_streams_episode_from_disk() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/jobs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "projectId": "p9" })))
        .expect(1)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let episode = dir.path().join("long-episode.webm");
    let contents: Vec<u8> = b"frame-".iter().copied().cycle().take(256 * 1024).collect();
    std::fs::write(&episode, &contents).unwrap();

    let file = UploadFile::from_path(&episode).await.unwrap();
    assert_eq!(file.len(), contents.len() as u64);
    let response = api_for(&server)
        .create_job(file, &CancellationToken::new())
        .await
        .unwrap();
    assert_eq!(response.project_id, "p9");

    let requests = server.received_requests().await.unwrap();
    let body = &requests[0].body;
    let head = String::from_utf8_lossy(&body[..body.len().min(512)]);
    assert!(head.contains("filename=\"long-episode.webm\""));
    assert!(head.contains("video/webm"));
    assert!(
        body.windows(contents.len()).any(|w| w == contents.as_slice()),
        "file contents should arrive intact"
    );
}

#[tokio::test]
async fn test_create_job_server_error_maps_to_http() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/jobs"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let err = api_for(&server)
        .create_job(episode(), &CancellationToken::new())
        .await
        .unwrap_err();
    assert_eq!(
        err,
        ClipperError::Http {
            status: 500,
            message: "boom".to_string()
        }
    );
    assert_eq!(err.user_message(), "Upload failed. Please try again.");
}

#[tokio::test]
async fn test_create_job_resolves_cancelled_when_token_fires() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/jobs"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "projectId": "late" }))
                .set_delay(Duration::from_secs(10)),
        )
        .mount(&server)
        .await;

    let api = api_for(&server);
    let cancel = CancellationToken::new();
    let trigger = cancel.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(100)).await;
        trigger.cancel();
    });

    let result = tokio::time::timeout(Duration::from_secs(5), api.create_job(episode(), &cancel))
        .await
        .expect("cancellation should win the race");
    assert_eq!(result.unwrap_err(), ClipperError::Cancelled);
}

#[tokio::test]
async fn test_get_job_parses_snapshot() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/jobs/p1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "p1",
            "status": "done",
            "createdAt": "2024-05-01T12:00:00Z",
            "clips": [{
                "id": "c1",
                "title": "Cold open",
                "score": 0.81,
                "thumbnailUrl": "https://cdn.example/c1.jpg",
                "videoUrl": "https://cdn.example/c1.mp4",
                "transcriptSnippet": "and that's when it clicked",
                "duration": 27.4
            }]
        })))
        .mount(&server)
        .await;

    let job = api_for(&server).get_job("p1").await.unwrap();
    assert_eq!(job.id, "p1");
    assert_eq!(job.status, ProjectStatus::Done);
    assert_eq!(job.clips.len(), 1);
    assert_eq!(job.clips[0].title, "Cold open");
    assert_eq!(job.clips[0].score_percent(), 81);
    assert_eq!(job.clips[0].duration_label(), "27s");
}

#[tokio::test]
async fn test_get_job_without_clips_defaults_to_empty() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/jobs/p2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "p2",
            "status": "processing",
            "createdAt": "2024-05-01T12:00:00Z"
        })))
        .mount(&server)
        .await;

    let job = api_for(&server).get_job("p2").await.unwrap();
    assert_eq!(job.status, ProjectStatus::Processing);
    assert!(job.clips.is_empty());
}

#[tokio::test]
async fn test_get_job_accepts_naive_and_null_timestamps() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/jobs/naive"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "naive",
            "status": "done",
            "createdAt": "2024-05-01T12:00:00.123456",
            "clips": []
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/jobs/unset"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "unset",
            "status": "preview",
            "createdAt": null
        })))
        .mount(&server)
        .await;

    let api = api_for(&server);
    let job = api.get_job("naive").await.unwrap();
    assert_eq!(job.status, ProjectStatus::Done);
    assert!(job.created_at.is_some());

    let job = api.get_job("unset").await.unwrap();
    assert_eq!(job.status, ProjectStatus::Preview);
    assert!(job.created_at.is_none());
}

#[tokio::test]
async fn test_get_job_not_found_maps_to_http() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/jobs/missing"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let err = api_for(&server).get_job("missing").await.unwrap_err();
    assert!(matches!(err, ClipperError::Http { status: 404, .. }));
    assert!(!err.is_recoverable());
}

#[tokio::test]
async fn test_get_job_malformed_body_is_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/jobs/p3"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{\"id\": 3"))
        .mount(&server)
        .await;

    let err = api_for(&server).get_job("p3").await.unwrap_err();
    assert!(matches!(err, ClipperError::Decode(_)), "got {:?}", err);
}

#[tokio::test]
async fn test_unreachable_backend_is_transport_error() {
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let config = ClipperConfig::default()
        .with_api_base_url(format!("http://127.0.0.1:{}/api", port));
    let api = HttpJobApi::new(&config).unwrap();

    let err = api.get_job("p1").await.unwrap_err();
    assert!(matches!(err, ClipperError::Transport(_)), "got {:?}", err);
    assert!(err.is_recoverable());
}
