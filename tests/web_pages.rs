mod common;

use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_home_lists_live_sections() {
    let server = common::create_test_server();
    let root = common::root_id(&server).await;
    let people = common::create_page(&server, "person_index", root, "People").await;
    common::create_page(&server, "event_index", root, "Events").await;
    common::publish(&server, people).await;

    let response = server.get("/").await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("href=\"/people/\""));
    assert!(!html.contains("/events/"));
}

#[tokio::test]
async fn test_drafts_are_not_served() {
    let server = common::create_test_server();
    let root = common::root_id(&server).await;
    common::create_page(&server, "person_index", root, "People").await;

    server
        .get("/people")
        .await
        .assert_status(StatusCode::NOT_FOUND);
    server
        .get("/nowhere/at/all")
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_record_page_embeds_structured_data() {
    let server = common::create_test_server();
    let root = common::root_id(&server).await;
    let people = common::create_page(&server, "person_index", root, "People").await;
    let person = common::create_record(
        &server,
        json!({
            "parent_id": people,
            "title": "Margaret Burroughs",
            "fields": {"body": "<p>Artist and founder of the DuSable Museum.</p>"},
            "details": {"type": "person", "gender": "f"}
        }),
    )
    .await;
    common::publish(&server, people).await;
    common::publish(&server, person).await;

    let response = server.get("/people/margaret-burroughs").await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("<h1>Margaret Burroughs</h1>"));
    assert!(html.contains("<p>Artist and founder of the DuSable Museum.</p>"));
    assert!(html.contains("application/ld+json"));
    assert!(html.contains("http://schema.org/Person"));
}

#[tokio::test]
async fn test_index_page_lists_newest_first() {
    let server = common::create_test_server();
    let root = common::root_id(&server).await;
    let events = common::create_page(&server, "event_index", root, "Events").await;
    let early = common::create_event(&server, events, "Early Show", &[]).await;
    let late = common::create_event(&server, events, "Late Show", &[]).await;
    common::publish(&server, events).await;
    common::publish_at(&server, early, "2024-01-01T00:00:00Z").await;
    common::publish_at(&server, late, "2024-06-01T00:00:00Z").await;

    let html = server.get("/events").await.text();

    let late_at = html.find("Late Show").unwrap();
    let early_at = html.find("Early Show").unwrap();
    assert!(late_at < early_at);
}

#[tokio::test]
async fn test_tag_index_filters_by_query() {
    let server = common::create_test_server();
    let root = common::root_id(&server).await;
    let events = common::create_page(&server, "event_index", root, "Events").await;
    let tags = common::create_page(&server, "event_tag_index", root, "Tags").await;
    let jazz = common::create_event(&server, events, "Jazz Night", &["jazz"]).await;
    let blues = common::create_event(&server, events, "Blues Night", &["blues"]).await;
    common::publish(&server, tags).await;
    common::publish(&server, jazz).await;
    common::publish(&server, blues).await;

    let html = server
        .get("/tags")
        .add_query_param("tag", "jazz")
        .await
        .text();

    assert!(html.contains("Jazz Night"));
    assert!(!html.contains("Blues Night"));
}

#[tokio::test]
async fn test_record_page_shows_gallery_and_links() {
    let server = common::create_test_server();
    let root = common::root_id(&server).await;
    let people = common::create_page(&server, "person_index", root, "People").await;
    let person = common::create_record(
        &server,
        json!({
            "parent_id": people,
            "title": "Gertrude Abercrombie",
            "fields": {
                "same_as": "https://example.org/abercrombie",
                "in_cpl_artistfiles": true
            },
            "details": {"type": "person"}
        }),
    )
    .await;
    let image = server
        .post("/api/images")
        .json(&json!({"title": "Self portrait", "file": "/media/self.jpg", "width": 640, "height": 480}))
        .await
        .json::<serde_json::Value>()["id"]
        .as_i64()
        .unwrap();
    server
        .put(&format!("/api/records/{person}/gallery"))
        .json(&json!({"items": [{"image_id": image, "caption": "Self portrait, 1946"}]}))
        .await
        .assert_status_ok();
    common::publish(&server, people).await;
    common::publish(&server, person).await;

    let html = server.get("/people/gertrude-abercrombie").await.text();

    assert!(html.contains("self.jpg"));
    assert!(html.contains("<figcaption>Self portrait, 1946</figcaption>"));
    assert!(html.contains("example.org"));
    assert!(html.contains("chipublib.org"));
}
