//! Integration tests for ExtractorClient using wiremock
//!
//! Every test stands up a MockServer playing the extractor backend and
//! checks the request shape the client sends plus the typed result it
//! produces.

use uuid::Uuid;
use wiremock::matchers::{body_json, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

use vidlore_client::{ClientError, ExtractorClient};
use vidlore_core::domain::job::JobStatus;

fn job_body(id: Uuid, status: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "youtube_url": "https://youtu.be/abc123",
        "youtube_id": "abc123",
        "status": status,
        "current_step": 1,
        "total_steps": 4,
        "step_label": "Transcribing content",
        "error_message": null,
        "video_id": null,
        "created_at": "2025-11-02T09:30:00Z",
        "updated_at": "2025-11-02T09:30:12Z"
    })
}

fn video_body(id: Uuid, notes: Option<&str>) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "youtube_url": "https://youtu.be/abc123",
        "youtube_id": "abc123",
        "title": "Ownership in Rust",
        "thumbnail_url": "https://i.ytimg.com/vi/abc123/hqdefault.jpg",
        "channel_name": "rustconf",
        "duration": 1840,
        "explanation": "Covers moves, borrows and lifetimes.",
        "key_knowledge": "The borrow checker enforces aliasing XOR mutation.",
        "critical_analysis": null,
        "real_world_applications": null,
        "keywords": ["rust", "ownership"],
        "notes": notes,
        "transcript_source": "captions",
        "created_at": "2025-11-02T09:31:00Z",
        "updated_at": "2025-11-02T09:31:00Z"
    })
}

#[tokio::test]
async fn test_create_video_job_posts_url_and_parses_job() {
    let mock_server = MockServer::start().await;
    let job_id = Uuid::new_v4();

    Mock::given(method("POST"))
        .and(path("/api/videos"))
        .and(body_json(
            serde_json::json!({"youtube_url": "https://youtu.be/abc123"}),
        ))
        .respond_with(ResponseTemplate::new(201).set_body_json(job_body(job_id, "queued")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = ExtractorClient::new(mock_server.uri());
    let job = client
        .create_video_job("https://youtu.be/abc123")
        .await
        .unwrap();

    assert_eq!(job.id, job_id);
    assert_eq!(job.status, JobStatus::Queued);
    assert!(job.status.is_active());
}

#[tokio::test]
async fn test_list_video_jobs_sends_comma_separated_status_filter() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/videos/jobs"))
        .and(query_param("status", "queued,processing"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!([job_body(Uuid::new_v4(), "queued")])),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = ExtractorClient::new(mock_server.uri());
    let jobs = client
        .list_video_jobs(&[JobStatus::Queued, JobStatus::Processing])
        .await
        .unwrap();

    assert_eq!(jobs.len(), 1);
    assert_eq!(jobs[0].status, JobStatus::Queued);
}

#[tokio::test]
async fn test_list_video_jobs_without_filter_omits_query_param() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/videos/jobs"))
        .and(query_param_is_missing("status"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = ExtractorClient::new(mock_server.uri());
    let jobs = client.list_video_jobs(&[]).await.unwrap();

    assert!(jobs.is_empty());
}

#[tokio::test]
async fn test_api_error_surfaces_backend_detail_verbatim() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/videos"))
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_json(serde_json::json!({"detail": "Invalid YouTube URL"})),
        )
        .mount(&mock_server)
        .await;

    let client = ExtractorClient::new(mock_server.uri());
    let err = client.create_video_job("not a url").await.unwrap_err();

    match &err {
        ClientError::Api { status, message } => {
            assert_eq!(*status, 400);
            assert_eq!(message, "Invalid YouTube URL");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
    assert_eq!(err.to_string(), "Invalid YouTube URL");
}

#[tokio::test]
async fn test_api_error_without_detail_body_gets_generic_message() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/videos"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>bad gateway</html>"))
        .mount(&mock_server)
        .await;

    let client = ExtractorClient::new(mock_server.uri());
    let err = client.list_videos().await.unwrap_err();

    assert_eq!(err.to_string(), "Request failed with status 502");
}

#[tokio::test]
async fn test_delete_video_accepts_no_content() {
    let mock_server = MockServer::start().await;
    let video_id = Uuid::new_v4();

    Mock::given(method("DELETE"))
        .and(path(format!("/api/videos/{video_id}")))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = ExtractorClient::new(mock_server.uri());
    client.delete_video(video_id).await.unwrap();
}

#[tokio::test]
async fn test_update_notes_patches_and_returns_video() {
    let mock_server = MockServer::start().await;
    let video_id = Uuid::new_v4();

    Mock::given(method("PATCH"))
        .and(path(format!("/api/videos/{video_id}")))
        .and(body_json(serde_json::json!({"notes": "watch again at 12:00"})))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(video_body(video_id, Some("watch again at 12:00"))),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = ExtractorClient::new(mock_server.uri());
    let video = client
        .update_video_notes(video_id, "watch again at 12:00")
        .await
        .unwrap();

    assert_eq!(video.id, video_id);
    assert_eq!(video.notes.as_deref(), Some("watch again at 12:00"));
}

#[tokio::test]
async fn test_tag_names_are_percent_encoded_in_paths() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/tags/machine%20learning"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = ExtractorClient::new(mock_server.uri());
    let summaries = client.delete_tag("machine learning").await.unwrap();

    assert!(summaries.is_empty());
}

#[tokio::test]
async fn test_connection_failure_is_a_transport_error() {
    // Use a non-pooled server: `MockServer::start()` hands out a pooled
    // server whose listener outlives the drop, so the port would still
    // answer requests.
    let mock_server = MockServer::builder().start().await;
    let uri = mock_server.uri();
    // Free the port so the request has nothing to connect to.
    drop(mock_server);

    let client = ExtractorClient::new(uri);
    let err = client.list_videos().await.unwrap_err();

    assert!(matches!(err, ClientError::Transport(_)));
}

#[tokio::test]
async fn test_malformed_success_body_is_a_parse_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/videos"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not valid json"))
        .mount(&mock_server)
        .await;

    let client = ExtractorClient::new(mock_server.uri());
    let err = client.list_videos().await.unwrap_err();

    assert!(matches!(err, ClientError::Parse(_)));
}
