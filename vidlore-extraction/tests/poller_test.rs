//! Integration tests for JobPoller against a mock backend

use std::sync::Arc;
use std::time::Duration;

use tokio::time::timeout;
use uuid::Uuid;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use vidlore_client::ExtractorClient;
use vidlore_core::domain::job::JobStatus;
use vidlore_extraction::{JobPoller, PollEvent};

fn job_body(id: Uuid, status: &str, step: u32) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "youtube_url": "https://youtu.be/abc123",
        "youtube_id": "abc123",
        "status": status,
        "current_step": step,
        "total_steps": 4,
        "step_label": "Transcribing content",
        "error_message": null,
        "video_id": null,
        "created_at": "2025-11-02T09:30:00Z",
        "updated_at": "2025-11-02T09:30:12Z"
    })
}

fn client_for(server: &MockServer) -> Arc<ExtractorClient> {
    Arc::new(ExtractorClient::new(server.uri()))
}

#[tokio::test]
async fn test_first_fetch_lands_before_start_returns() {
    let server = MockServer::start().await;
    let job_id = Uuid::new_v4();

    Mock::given(method("GET"))
        .and(path(format!("/api/videos/jobs/{job_id}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(job_body(job_id, "processing", 1)))
        .mount(&server)
        .await;

    let (mut poller, mut events) = JobPoller::new(client_for(&server), Duration::from_secs(60));
    let session = poller.start(job_id).await;

    // The snapshot is already in the channel, no waiting needed.
    match events.try_recv().unwrap() {
        PollEvent::Update { session: stamp, job } => {
            assert_eq!(stamp, session);
            assert_eq!(job.id, job_id);
            assert_eq!(job.status, JobStatus::Processing);
        }
        other => panic!("expected an update, got {other:?}"),
    }
    assert_eq!(server.received_requests().await.unwrap().len(), 1);

    poller.stop();
}

#[tokio::test]
async fn test_start_then_immediate_stop_fetches_exactly_once() {
    let server = MockServer::start().await;
    let job_id = Uuid::new_v4();

    Mock::given(method("GET"))
        .and(path(format!("/api/videos/jobs/{job_id}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(job_body(job_id, "queued", 0)))
        .mount(&server)
        .await;

    let (mut poller, _events) = JobPoller::new(client_for(&server), Duration::from_millis(40));
    poller.start(job_id).await;
    poller.stop();

    // Long enough for several ticks, had the task survived the stop.
    tokio::time::sleep(Duration::from_millis(200)).await;
    assert_eq!(server.received_requests().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_terminal_job_yields_one_update_and_no_background_task() {
    let server = MockServer::start().await;
    let job_id = Uuid::new_v4();

    Mock::given(method("GET"))
        .and(path(format!("/api/videos/jobs/{job_id}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(job_body(job_id, "completed", 3)))
        .mount(&server)
        .await;

    let (mut poller, mut events) = JobPoller::new(client_for(&server), Duration::from_millis(40));
    poller.start(job_id).await;

    match events.recv().await.unwrap() {
        PollEvent::Update { job, .. } => assert!(job.status.is_terminal()),
        other => panic!("expected an update, got {other:?}"),
    }
    assert!(!poller.is_polling());

    tokio::time::sleep(Duration::from_millis(150)).await;
    assert_eq!(server.received_requests().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_fetch_failure_ends_the_session() {
    let server = MockServer::start().await;
    let job_id = Uuid::new_v4();

    Mock::given(method("GET"))
        .and(path(format!("/api/videos/jobs/{job_id}")))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(serde_json::json!({"detail": "boom"})),
        )
        .mount(&server)
        .await;

    let (mut poller, mut events) = JobPoller::new(client_for(&server), Duration::from_millis(40));
    let session = poller.start(job_id).await;

    match events.recv().await.unwrap() {
        PollEvent::Failed { session: stamp } => assert_eq!(stamp, session),
        other => panic!("expected a failure, got {other:?}"),
    }
    assert!(!poller.is_polling());

    tokio::time::sleep(Duration::from_millis(150)).await;
    assert_eq!(server.received_requests().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_polls_on_the_interval_until_terminal() {
    let server = MockServer::start().await;
    let job_id = Uuid::new_v4();

    Mock::given(method("GET"))
        .and(path(format!("/api/videos/jobs/{job_id}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(job_body(job_id, "processing", 1)))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(format!("/api/videos/jobs/{job_id}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(job_body(job_id, "completed", 3)))
        .mount(&server)
        .await;

    let (mut poller, mut events) = JobPoller::new(client_for(&server), Duration::from_millis(20));
    poller.start(job_id).await;

    let mut statuses = Vec::new();
    while let Some(event) = timeout(Duration::from_secs(2), events.recv())
        .await
        .expect("poller went quiet before reaching a terminal status")
    {
        match event {
            PollEvent::Update { job, .. } => {
                let status = job.status;
                statuses.push(status);
                if status.is_terminal() {
                    break;
                }
            }
            other => panic!("expected an update, got {other:?}"),
        }
    }

    assert_eq!(statuses, vec![JobStatus::Processing, JobStatus::Completed]);
    assert_eq!(server.received_requests().await.unwrap().len(), 2);

    // Nothing further arrives once the job is terminal.
    assert!(
        timeout(Duration::from_millis(100), events.recv())
            .await
            .is_err()
    );
}

#[tokio::test]
async fn test_replacing_a_session_retires_its_stamp() {
    let server = MockServer::start().await;
    let first_job = Uuid::new_v4();
    let second_job = Uuid::new_v4();

    Mock::given(method("GET"))
        .and(path(format!("/api/videos/jobs/{first_job}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(job_body(first_job, "processing", 1)))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(format!("/api/videos/jobs/{second_job}")))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(job_body(second_job, "processing", 1)),
        )
        .mount(&server)
        .await;

    let (mut poller, mut events) = JobPoller::new(client_for(&server), Duration::from_secs(60));
    let first_session = poller.start(first_job).await;
    let second_session = poller.start(second_job).await;

    assert!(second_session > first_session);
    assert_eq!(poller.session(), second_session);

    // Both eager snapshots are queued; only the second carries the live stamp.
    let stale = events.recv().await.unwrap();
    assert_eq!(stale.session(), first_session);
    assert_ne!(stale.session(), poller.session());

    match events.recv().await.unwrap() {
        PollEvent::Update { session, job } => {
            assert_eq!(session, poller.session());
            assert_eq!(job.id, second_job);
        }
        other => panic!("expected an update, got {other:?}"),
    }

    poller.stop();
    assert!(poller.session() > second_session);
}
