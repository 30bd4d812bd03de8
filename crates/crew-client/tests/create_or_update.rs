//! Contract tests for `HttpTeamClient` against a mock service.

use crew_client::{ClientError, HttpTeamClient, TeamClient};
use crew_config::TargetConfig;
use crew_core::{AuthorizationConfig, SubmissionOutcome, TeamRequest};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> HttpTeamClient {
    HttpTeamClient::new(&TargetConfig {
        api: server.uri(),
        token: "secret-token".into(),
        ..Default::default()
    })
    .expect("client builds")
}

fn ops_request() -> TeamRequest {
    let config = AuthorizationConfig {
        users: vec!["github:alice".into()],
        groups: vec!["github:acme:ops".into()],
        no_auth: false,
    };
    TeamRequest::new("ops", &config)
}

fn team_body() -> serde_json::Value {
    json!({
        "id": 42,
        "name": "ops",
        "auth": { "users": ["github:alice"], "groups": ["github:acme:ops"] }
    })
}

#[tokio::test]
async fn created_status_reports_created() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/v1/teams/ops"))
        .and(header("authorization", "Bearer secret-token"))
        .and(body_json(json!({
            "name": "ops",
            "auth": { "users": ["github:alice"], "groups": ["github:acme:ops"] }
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(team_body()))
        .expect(1)
        .mount(&server)
        .await;

    let outcome = client_for(&server)
        .create_or_update(&ops_request())
        .await
        .expect("submission succeeds");

    assert!(outcome.created());
    assert!(!outcome.updated());
    assert_eq!(outcome.team().id, 42);
    assert_eq!(outcome.team().name, "ops");
}

#[tokio::test]
async fn ok_status_reports_updated() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/v1/teams/ops"))
        .respond_with(ResponseTemplate::new(200).set_body_json(team_body()))
        .mount(&server)
        .await;

    let outcome = client_for(&server)
        .create_or_update(&ops_request())
        .await
        .expect("submission succeeds");

    assert!(matches!(outcome, SubmissionOutcome::Updated(_)));
    assert_eq!(outcome.report(), "team updated");
}

#[tokio::test]
async fn team_name_is_percent_encoded_in_path() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/v1/teams/night%20shift"))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(json!({ "id": 1, "name": "night shift" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let request = TeamRequest::new(
        "night shift",
        &AuthorizationConfig {
            no_auth: true,
            ..Default::default()
        },
    );
    let outcome = client_for(&server)
        .create_or_update(&request)
        .await
        .expect("submission succeeds");

    assert_eq!(outcome.team().name, "night shift");
}

#[tokio::test]
async fn unauthorized_is_distinguished() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .create_or_update(&ops_request())
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::Unauthorized));
}

#[tokio::test]
async fn forbidden_names_the_team() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .create_or_update(&ops_request())
        .await
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "forbidden: not allowed to configure team 'ops'"
    );
}

#[tokio::test]
async fn server_error_is_surfaced_once_without_retry() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(500).set_body_string("database is down"))
        .expect(1)
        .mount(&server)
        .await;

    let err = client_for(&server)
        .create_or_update(&ops_request())
        .await
        .unwrap_err();

    match err {
        ClientError::UnexpectedStatus { status, body } => {
            assert_eq!(status, 500);
            assert_eq!(body, "database is down");
        }
        other => panic!("expected UnexpectedStatus, got {other:?}"),
    }
}

#[tokio::test]
async fn undecodable_body_is_a_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(201).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .create_or_update(&ops_request())
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::Decode(_)));
}

#[tokio::test]
async fn unreachable_service_is_a_transport_error() {
    let client = HttpTeamClient::new(&TargetConfig {
        api: "http://127.0.0.1:1".into(),
        token: "secret-token".into(),
        timeout_secs: Some(5),
        ..Default::default()
    })
    .expect("client builds");

    let err = client.create_or_update(&ops_request()).await.unwrap_err();
    assert!(matches!(err, ClientError::Transport(_)));
}
