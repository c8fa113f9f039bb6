// ABOUTME: Integration tests for the REST client against a mock workout service
// ABOUTME: Covers auth calls, bearer propagation, progress decoding, set mutations and error mapping
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use serde_json::json;
use weekfit::errors::ErrorCode;
use weekfit::models::{
    ActivityId, ActivityKind, DayId, LoginRequest, NewActivity, RegisterRequest, Weekday,
};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use common::{progress_json, test_api, user_json};

fn login_request() -> LoginRequest {
    LoginRequest {
        email: "ana@example.com".into(),
        password: "secret1".into(),
    }
}

#[tokio::test]
async fn test_login_returns_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .and(body_json(json!({ "email": "ana@example.com", "password": "secret1" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "token": "tok-123",
            "message": "Logged in"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let response = test_api(&server.uri()).login(&login_request()).await.unwrap();
    assert_eq!(response.token.as_deref(), Some("tok-123"));
}

#[tokio::test]
async fn test_login_rejection_surfaces_service_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({ "message": "Invalid credentials" })),
        )
        .mount(&server)
        .await;

    let error = test_api(&server.uri())
        .login(&login_request())
        .await
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::AuthInvalid);
    assert_eq!(error.message, "Invalid credentials");
    assert_eq!(error.context.status, Some(401));
}

#[tokio::test]
async fn test_login_without_token_is_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "message": "Account locked" })),
        )
        .mount(&server)
        .await;

    let error = test_api(&server.uri())
        .login(&login_request())
        .await
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::AuthInvalid);
    assert_eq!(error.message, "Account locked");
}

#[tokio::test]
async fn test_register_posts_name() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/register"))
        .and(body_json(json!({
            "name": "Ana",
            "email": "ana@example.com",
            "password": "secret1"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "token": "tok-new" })))
        .expect(1)
        .mount(&server)
        .await;

    let request = RegisterRequest {
        name: "Ana".into(),
        email: "ana@example.com".into(),
        password: "secret1".into(),
    };
    let response = test_api(&server.uri()).register(&request).await.unwrap();
    assert_eq!(response.token.as_deref(), Some("tok-new"));
}

#[tokio::test]
async fn test_fetch_user_sends_bearer_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/auth/user"))
        .and(header("authorization", "Bearer tok-123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_json()))
        .expect(1)
        .mount(&server)
        .await;

    let user = test_api(&server.uri())
        .authorized("tok-123")
        .fetch_user()
        .await
        .unwrap();
    assert_eq!(user.name, "Ana");
    assert_eq!(user.days.len(), 2);

    let monday = user.day(Weekday::Monday).unwrap();
    assert_eq!(monday.activities.len(), 2);
    assert_eq!(monday.activities[0].kind(), ActivityKind::Reps { reps: 12 });
    assert_eq!(monday.activities[0].sets_completed(), 1);
    assert_eq!(monday.activities[1].kind(), ActivityKind::Time { seconds: 60 });
    assert!(user.day(Weekday::Friday).is_none());
}

#[tokio::test]
async fn test_base_url_path_prefix_is_kept() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/auth/user"))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_json()))
        .expect(1)
        .mount(&server)
        .await;

    let user = test_api(&format!("{}/api", server.uri()))
        .authorized("tok")
        .fetch_user()
        .await
        .unwrap();
    assert_eq!(user.email, "ana@example.com");
}

#[tokio::test]
async fn test_fetch_day_progress_indexes_by_activity() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/progress/day/d-mon"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "progress": [
                progress_json("a1", 2, 3),
                progress_json("a2", 0, 2),
                { "activity": "a3", "setsCompleted": null, "totalSets": 4 },
                { "setsCompleted": [] }
            ]
        })))
        .mount(&server)
        .await;

    let day = test_api(&server.uri())
        .authorized("tok")
        .fetch_day_progress(&DayId::from("d-mon"))
        .await
        .unwrap();
    assert_eq!(day.len(), 3);

    let first = &day[&ActivityId::from("a1")];
    assert_eq!(first.sets_completed, 2);
    assert_eq!(first.total_sets, 3);
    assert_eq!(first.sets.len(), 2);
    assert!((first.sets_percentage - 66.666).abs() < 0.01);
    assert_eq!(day[&ActivityId::from("a2")].sets_completed, 0);
    assert_eq!(day[&ActivityId::from("a3")].sets_completed, 0);
    assert_eq!(day[&ActivityId::from("a3")].total_sets, 4);
}

#[tokio::test]
async fn test_missing_activity_progress_is_zeroed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/progress/activity/a1/day/d-mon"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({ "message": "Progress not found" })),
        )
        .mount(&server)
        .await;

    let progress = test_api(&server.uri())
        .authorized("tok")
        .fetch_activity_progress(&ActivityId::from("a1"), &DayId::from("d-mon"))
        .await
        .unwrap();
    assert_eq!(progress.sets_completed, 0);
    assert!(!progress.is_completed);
}

#[tokio::test]
async fn test_set_update_returns_typed_progress() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/progress/activity/a1/set"))
        .and(body_json(json!({ "sets": 2 })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "Progress updated",
            "progress": progress_json("a1", 2, 3)
        })))
        .expect(1)
        .mount(&server)
        .await;

    let progress = test_api(&server.uri())
        .authorized("tok")
        .set_sets_completed(&ActivityId::from("a1"), 2)
        .await
        .unwrap()
        .expect("progress record in response");
    assert_eq!(progress.sets_completed, 2);
}

#[tokio::test]
async fn test_set_update_without_record_is_acknowledged() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/progress/activity/a1/set"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "message": "ok" })))
        .mount(&server)
        .await;

    let result = test_api(&server.uri())
        .authorized("tok")
        .set_sets_completed(&ActivityId::from("a1"), 1)
        .await
        .unwrap();
    assert!(result.is_none());
}

#[tokio::test]
async fn test_reset_sends_empty_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/progress/activity/a1/set"))
        .and(body_json(json!({})))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let result = test_api(&server.uri())
        .authorized("tok")
        .reset_sets(&ActivityId::from("a1"))
        .await
        .unwrap();
    assert!(result.is_none());
}

#[tokio::test]
async fn test_add_activity_payload() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/activity/day/d-mon/activity"))
        .and(body_json(json!({
            "name": "Plank",
            "sets": 3,
            "type": "time",
            "time": 120
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "message": "Created" })))
        .expect(1)
        .mount(&server)
        .await;

    let activity = NewActivity {
        name: "Plank".into(),
        description: None,
        reference_url: None,
        sets: 3,
        kind: ActivityKind::Time { seconds: 120 },
    };
    test_api(&server.uri())
        .authorized("tok")
        .add_activity(&DayId::from("d-mon"), &activity)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_delete_activity() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/activity/day/d-mon/activity/a1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "message": "Deleted" })))
        .expect(1)
        .mount(&server)
        .await;

    test_api(&server.uri())
        .authorized("tok")
        .delete_activity(&DayId::from("d-mon"), &ActivityId::from("a1"))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_status_codes_map_to_error_codes() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/progress/day/broken"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/progress/day/bad"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({ "message": "Bad day id" })))
        .mount(&server)
        .await;

    let client = test_api(&server.uri()).authorized("tok");

    let unavailable = client
        .fetch_day_progress(&DayId::from("broken"))
        .await
        .unwrap_err();
    assert_eq!(unavailable.code, ErrorCode::ExternalServiceUnavailable);
    assert_eq!(unavailable.message, "Service Unavailable");

    let invalid = client
        .fetch_day_progress(&DayId::from("bad"))
        .await
        .unwrap_err();
    assert_eq!(invalid.code, ErrorCode::InvalidInput);
    assert_eq!(invalid.message, "Bad day id");
}

#[tokio::test]
async fn test_malformed_body_is_a_serialization_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/auth/user"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let error = test_api(&server.uri())
        .authorized("tok")
        .fetch_user()
        .await
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::SerializationError);
}

#[tokio::test]
async fn test_unreachable_service() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let error = test_api(&format!("http://127.0.0.1:{port}"))
        .authorized("tok")
        .fetch_user()
        .await
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::ExternalServiceUnavailable);
}
