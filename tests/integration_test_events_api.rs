mod common;

use axum::http::StatusCode;
use chrono::Utc;
use common::{event_around_today, parse_body, TestApp};
use serde_json::json;

#[tokio::test]
async fn test_login_rejects_wrong_pin() {
    let app = TestApp::new().await;

    let response = app.send("POST", "/api/admin/login", Some(json!({ "pin": "0000" })), None).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body = parse_body(response).await;
    assert_eq!(body["error"], "Incorrect PIN");
}

#[tokio::test]
async fn test_session_lifecycle() {
    let app = TestApp::new().await;

    let body = parse_body(app.get("/api/admin/session").await).await;
    assert_eq!(body["authenticated"], false);

    let cookie = app.login().await;
    let response = app.send("GET", "/api/admin/session", None, Some(&cookie)).await;
    assert_eq!(parse_body(response).await["authenticated"], true);

    let response = app.send("POST", "/api/admin/logout", None, Some(&cookie)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = app.send("GET", "/api/admin/events", None, Some(&cookie)).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_writes_require_admin_session() {
    let app = TestApp::new().await;
    let payload = json!({ "events": [], "defaultTheme": { "primaryColor": "#000000", "accentColor": "#FFFFFF" } });

    let response = app.send("PUT", "/api/events", Some(payload.clone()), None).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = app.send("PUT", "/api/events", Some(payload), Some("admin_session=forged")).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_replace_document_and_read_back() {
    let app = TestApp::new().await;
    let cookie = app.login().await;

    let event = event_around_today("spring-sale", 0, 20);
    let payload = json!({
        "events": [event],
        "defaultTheme": { "primaryColor": "#112233", "accentColor": "#445566" }
    });

    let response = app.send("PUT", "/api/events", Some(payload), Some(&cookie)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = parse_body(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["events"][0]["id"], "spring-sale");

    let body = parse_body(app.get("/api/events").await).await;
    assert_eq!(body["events"].as_array().unwrap().len(), 1);
    assert_eq!(body["defaultTheme"]["primaryColor"], "#112233");

    // Survives a reload from the database.
    let state = app.state.engine.refresh(Utc::now()).await;
    assert_eq!(state.current_event.unwrap().id, "spring-sale");
    assert_eq!(app.state.engine.config().await.default_theme.accent_color, "#445566");
}

#[tokio::test]
async fn test_invalid_event_rejected() {
    let app = TestApp::new().await;
    let cookie = app.login().await;

    let greedy = event_around_today("too-generous", 0, 60);
    let response = app
        .send("PUT", "/api/admin/events/too-generous", Some(json!(greedy)), Some(&cookie))
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let mut backwards = event_around_today("backwards", 0, 10);
    std::mem::swap(&mut backwards.start_date, &mut backwards.end_date);
    let response = app
        .send("PUT", "/api/admin/events/backwards", Some(json!(backwards)), Some(&cookie))
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    assert!(app.state.engine.config().await.events.is_empty());
}

#[tokio::test]
async fn test_upsert_toggle_delete() {
    let app = TestApp::new().await;
    let cookie = app.login().await;

    let event = event_around_today("flash", 0, 10);
    let response = app.send("PUT", "/api/admin/events/flash", Some(json!(event)), Some(&cookie)).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(parse_body(response).await["message"], "Event created");

    let mut renamed = event_around_today("flash", 0, 10);
    renamed.name = "Flash Sale".to_string();
    let response = app.send("PUT", "/api/admin/events/flash", Some(json!(renamed)), Some(&cookie)).await;
    assert_eq!(parse_body(response).await["message"], "Event updated");
    assert_eq!(app.state.engine.config().await.events.len(), 1);

    let response = app.send("POST", "/api/admin/events/flash/toggle", None, Some(&cookie)).await;
    let body = parse_body(response).await;
    assert_eq!(body["message"], "Event deactivated");
    assert_eq!(body["data"]["events"][0]["isActive"], false);
    assert!(!app.state.engine.current().is_event_active());

    let response = app.send("DELETE", "/api/admin/events/flash", None, Some(&cookie)).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(app.state.engine.config().await.events.is_empty());

    let response = app.send("DELETE", "/api/admin/events/flash", None, Some(&cookie)).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_admin_listing_reports_status() {
    let app = TestApp::new().await;
    let mut inactive = event_around_today("paused", 0, 5);
    inactive.is_active = false;
    app.seed(vec![
        event_around_today("later", 30, 5),
        event_around_today("now", 0, 5),
        inactive,
    ])
    .await;

    let cookie = app.login().await;
    let body = parse_body(app.send("GET", "/api/admin/events", None, Some(&cookie)).await).await;

    assert_eq!(body["events"][0]["status"], "SCHEDULED");
    assert_eq!(body["events"][1]["status"], "LIVE");
    assert_eq!(body["events"][2]["status"], "INACTIVE");
    assert_eq!(body["currentEventId"], "now");
}

#[tokio::test]
async fn test_template_is_a_valid_draft() {
    let app = TestApp::new().await;
    let cookie = app.login().await;

    let body = parse_body(app.send("GET", "/api/admin/events/template", None, Some(&cookie)).await).await;
    assert!(body["id"].as_str().unwrap().starts_with("event-"));
    assert_eq!(body["name"], "New Event");
    assert_eq!(body["isActive"], false);
    assert_eq!(body["discountPercent"], 10);
    assert_eq!(body["banner"]["text"], "🎉 Special Offer!");

    let id = body["id"].as_str().unwrap().to_string();
    let response = app
        .send("PUT", &format!("/api/admin/events/{}", id), Some(body), Some(&cookie))
        .await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_legacy_event_does_not_block_other_writes() {
    let app = TestApp::new().await;
    let mut legacy = event_around_today("legacy", 0, 5);
    legacy.is_active = false;
    legacy.start_date = "Feb 10".to_string();
    app.seed(vec![legacy]).await;

    let cookie = app.login().await;
    let fresh = event_around_today("fresh", 0, 10);
    let response = app.send("PUT", "/api/admin/events/fresh", Some(json!(fresh)), Some(&cookie)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = app.send("POST", "/api/admin/events/fresh/toggle", None, Some(&cookie)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let events = app.state.engine.config().await.events;
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].start_date, "Feb 10");
}
