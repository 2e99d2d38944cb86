mod common;

use axum::http::StatusCode;
use common::{cookie_value, event_around_today, parse_body, TestApp};
use storefront_backend::domain::models::event::HeroOverride;

#[tokio::test]
async fn test_baseline_when_no_event_runs() {
    let app = TestApp::new().await;
    app.seed(vec![event_around_today("next-month", 30, 20)]).await;

    let response = app.get("/api/storefront").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(cookie_value(&response, "storefront_client").is_some());

    let body = parse_body(response).await;
    assert!(body["event"].is_null());
    assert!(body["banner"].is_null());
    assert_eq!(body["theme"]["primary"], "#043927");
    assert_eq!(body["theme"]["light"], "#F9F9F9");
    assert_eq!(body["theme"]["dark"], "#022216");
    assert_eq!(body["palette"]["primaryColor"], "#043927");
    assert_eq!(body["hero"]["headline"], "Hamper World");
    assert_eq!(body["hero"]["tagline"], "Crafting Memories");
    assert_eq!(body["hero"]["image"], "/hero-hamper.png");
}

#[tokio::test]
async fn test_running_event_themes_storefront() {
    let app = TestApp::new().await;
    let mut event = event_around_today("valentines", 0, 15);
    event.hero_override = Some(HeroOverride {
        headline: Some("Love, Wrapped".to_string()),
        tagline: None,
        image: Some("/hero-valentine.png".to_string()),
    });
    app.seed(vec![event]).await;

    let body = parse_body(app.get("/api/storefront").await).await;
    assert_eq!(body["event"]["id"], "valentines");
    assert_eq!(body["event"]["discountPercent"], 15);
    assert_eq!(body["theme"]["primary"], "#8B1538");
    assert_eq!(body["theme"]["dark"], "#8B1538");
    assert_eq!(body["theme"]["light"], "#FFF5F8");
    assert_eq!(body["banner"]["background"], "#8B1538");
    assert_eq!(body["banner"]["dismissible"], true);
    assert_eq!(body["hero"]["headline"], "Love, Wrapped");
    assert_eq!(body["hero"]["tagline"], "Crafting Memories");
    assert_eq!(body["hero"]["image"], "/hero-valentine.png");
}

#[tokio::test]
async fn test_first_listed_event_wins_overlap() {
    let app = TestApp::new().await;
    let mut second = event_around_today("second", 0, 30);
    second.theme.primary_color = "#000080".to_string();
    app.seed(vec![event_around_today("first", 0, 10), second]).await;

    let body = parse_body(app.get("/api/storefront").await).await;
    assert_eq!(body["event"]["id"], "first");
}

#[tokio::test]
async fn test_dismissal_is_per_client_and_per_event() {
    let app = TestApp::new().await;
    app.seed(vec![event_around_today("summer", 0, 10)]).await;

    let first = app.get("/api/storefront").await;
    let client_a = format!("storefront_client={}", cookie_value(&first, "storefront_client").unwrap());

    let response = app.send("POST", "/api/storefront/banner/dismiss", None, Some(&client_a)).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let body = parse_body(app.send("GET", "/api/storefront", None, Some(&client_a)).await).await;
    assert!(body["banner"].is_null());
    assert_eq!(body["event"]["id"], "summer");

    let body = parse_body(app.send("GET", "/api/storefront", None, Some("storefront_client=someone-else")).await).await;
    assert_eq!(body["banner"]["text"], "Festive offers");

    // A new event brings the banner back for the same client.
    app.seed(vec![event_around_today("autumn", 0, 10)]).await;
    let body = parse_body(app.send("GET", "/api/storefront", None, Some(&client_a)).await).await;
    assert_eq!(body["banner"]["text"], "Festive offers");
}

#[tokio::test]
async fn test_dismiss_requires_dismissible_banner() {
    let app = TestApp::new().await;

    let response = app.send("POST", "/api/storefront/banner/dismiss", None, None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let mut sticky = event_around_today("sticky", 0, 10);
    sticky.banner.dismissible = None;
    app.seed(vec![sticky]).await;

    let response = app.send("POST", "/api/storefront/banner/dismiss", None, Some("storefront_client=c1")).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = parse_body(app.send("GET", "/api/storefront", None, Some("storefront_client=c1")).await).await;
    assert_eq!(body["banner"]["dismissible"], false);
}
