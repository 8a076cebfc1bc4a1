mod common;

use axum::http::StatusCode;
use serde_json::{Value, json};

#[tokio::test]
async fn test_create_index_under_root() {
    let server = common::create_test_server();
    let root = common::root_id(&server).await;

    let response = server
        .post("/api/pages")
        .json(&json!({"kind": "person_index", "parent_id": root, "title": "People"}))
        .await;

    response.assert_status(StatusCode::CREATED);
    let json = response.json::<Value>();
    assert_eq!(json["kind"], "person_index");
    assert_eq!(json["slug"], "people");
    assert_eq!(json["url_path"], "/people/");
    assert_eq!(json["depth"], 1);
    assert_eq!(json["live"], false);
}

#[tokio::test]
async fn test_placement_rules() {
    let server = common::create_test_server();
    let root = common::root_id(&server).await;
    let people = common::create_page(&server, "person_index", root, "People").await;
    let places = common::create_page(&server, "place_index", root, "Places").await;

    // A person may not sit directly under the root.
    let response = server
        .post("/api/records")
        .json(&json!({"parent_id": root, "title": "Ada", "details": {"type": "person"}}))
        .await;
    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(response.json::<Value>()["error"]["code"], "placement_error");

    // An event may not sit under a person index.
    let response = server
        .post("/api/records")
        .json(&json!({"parent_id": people, "title": "Opening", "details": {"type": "event"}}))
        .await;
    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);

    // Indexes only live under the root.
    let response = server
        .post("/api/pages")
        .json(&json!({"kind": "event_index", "parent_id": places, "title": "Events"}))
        .await;
    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);

    // Content kinds go through the records endpoint.
    let response = server
        .post("/api/pages")
        .json(&json!({"kind": "person", "parent_id": people, "title": "Ada"}))
        .await;
    assert!(response.status_code().is_client_error());
}

#[tokio::test]
async fn test_people_nest_under_organizations() {
    let server = common::create_test_server();
    let root = common::root_id(&server).await;
    let orgs = common::create_page(&server, "organization_index", root, "Organizations").await;

    let org = common::create_record(
        &server,
        json!({"parent_id": orgs, "title": "Hull House", "details": {"type": "organization"}}),
    )
    .await;
    let person = common::create_record(
        &server,
        json!({"parent_id": org, "title": "Jane Addams", "details": {"type": "person"}}),
    )
    .await;

    let json = server
        .get(&format!("/api/pages/{person}"))
        .await
        .json::<Value>();
    assert_eq!(json["url_path"], "/organizations/hull-house/jane-addams/");
}

#[tokio::test]
async fn test_duplicate_slug_under_same_parent() {
    let server = common::create_test_server();
    let root = common::root_id(&server).await;
    common::create_page(&server, "person_index", root, "People").await;

    let response = server
        .post("/api/pages")
        .json(&json!({"kind": "organization_index", "parent_id": root, "title": "Other", "slug": "people"}))
        .await;

    response.assert_status(StatusCode::CONFLICT);
    assert_eq!(response.json::<Value>()["error"]["code"], "conflict");
}

#[tokio::test]
async fn test_invalid_slug_rejected() {
    let server = common::create_test_server();
    let root = common::root_id(&server).await;

    let response = server
        .post("/api/pages")
        .json(&json!({"kind": "person_index", "parent_id": root, "title": "People", "slug": "Not A Slug"}))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_listing_is_newest_first_and_skips_drafts() {
    let server = common::create_test_server();
    let root = common::root_id(&server).await;
    let events = common::create_page(&server, "event_index", root, "Events").await;

    let first = common::create_event(&server, events, "First", &[]).await;
    let second = common::create_event(&server, events, "Second", &[]).await;
    let third = common::create_event(&server, events, "Third", &[]).await;
    common::create_event(&server, events, "Draft", &[]).await;
    let scheduled = common::create_event(&server, events, "Scheduled", &[]).await;

    common::publish_at(&server, second, "2024-02-01T00:00:00Z").await;
    common::publish_at(&server, first, "2024-01-01T00:00:00Z").await;
    common::publish_at(&server, third, "2024-03-01T00:00:00Z").await;
    common::publish_at(&server, scheduled, "2999-01-01T00:00:00Z").await;

    let response = server.get(&format!("/api/pages/{events}/listing")).await;

    response.assert_status_ok();
    assert_eq!(
        common::titles(&response.json::<Value>()),
        vec!["Third", "Second", "First"]
    );
}

#[tokio::test]
async fn test_listing_requires_index_page() {
    let server = common::create_test_server();
    let root = common::root_id(&server).await;
    let events = common::create_page(&server, "event_index", root, "Events").await;
    let event = common::create_event(&server, events, "Opening", &[]).await;

    let response = server.get(&format!("/api/pages/{event}/listing")).await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_unpublish_removes_from_listing() {
    let server = common::create_test_server();
    let root = common::root_id(&server).await;
    let events = common::create_page(&server, "event_index", root, "Events").await;
    let event = common::create_event(&server, events, "Opening", &[]).await;

    common::publish(&server, event).await;
    let json = server
        .get(&format!("/api/pages/{events}/listing"))
        .await
        .json::<Value>();
    assert_eq!(common::titles(&json), vec!["Opening"]);

    let response = server
        .post(&format!("/api/pages/{event}/unpublish"))
        .await;
    response.assert_status_ok();
    let page = response.json::<Value>();
    assert_eq!(page["live"], false);
    assert!(!page["first_published_at"].is_null());

    let json = server
        .get(&format!("/api/pages/{events}/listing"))
        .await
        .json::<Value>();
    assert!(common::titles(&json).is_empty());
}

#[tokio::test]
async fn test_first_publication_date_is_kept() {
    let server = common::create_test_server();
    let root = common::root_id(&server).await;
    let people = common::create_page(&server, "person_index", root, "People").await;

    common::publish_at(&server, people, "2024-01-01T00:00:00Z").await;
    let response = server
        .post(&format!("/api/pages/{people}/publish"))
        .json(&json!({"at": "2024-05-01T00:00:00Z"}))
        .await;

    let json = response.json::<Value>();
    assert_eq!(json["first_published_at"], "2024-01-01T00:00:00Z");
    assert_eq!(json["last_published_at"], "2024-05-01T00:00:00Z");
}

#[tokio::test]
async fn test_update_intro_absent_null_and_value() {
    let server = common::create_test_server();
    let root = common::root_id(&server).await;
    let people = common::create_page(&server, "person_index", root, "People").await;
    let url = format!("/api/pages/{people}");

    let json = server
        .patch(&url)
        .json(&json!({"intro": "<p>Artists of Chicago</p>"}))
        .await
        .json::<Value>();
    assert_eq!(json["intro"], "<p>Artists of Chicago</p>");

    let json = server
        .patch(&url)
        .json(&json!({"title": "Artists"}))
        .await
        .json::<Value>();
    assert_eq!(json["title"], "Artists");
    assert_eq!(json["intro"], "<p>Artists of Chicago</p>");

    let json = server
        .patch(&url)
        .json(&json!({"intro": null}))
        .await
        .json::<Value>();
    assert!(json["intro"].is_null());
}

#[tokio::test]
async fn test_move_rewrites_subtree_paths() {
    let server = common::create_test_server();
    let root = common::root_id(&server).await;
    let orgs = common::create_page(&server, "organization_index", root, "Organizations").await;
    let people = common::create_page(&server, "person_index", root, "People").await;

    let org = common::create_record(
        &server,
        json!({"parent_id": orgs, "title": "Hull House", "details": {"type": "organization"}}),
    )
    .await;
    let person = common::create_record(
        &server,
        json!({"parent_id": org, "title": "Jane Addams", "details": {"type": "person"}}),
    )
    .await;

    let response = server
        .post(&format!("/api/pages/{person}/move"))
        .json(&json!({"parent_id": people}))
        .await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["url_path"], "/people/jane-addams/");

    // An organization cannot move under a person index.
    let response = server
        .post(&format!("/api/pages/{org}/move"))
        .json(&json!({"parent_id": people}))
        .await;
    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);

    // Nor under itself.
    let response = server
        .post(&format!("/api/pages/{org}/move"))
        .json(&json!({"parent_id": org}))
        .await;
    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_move_keeps_descendants_attached() {
    let server = common::create_test_server();
    let root = common::root_id(&server).await;
    let orgs = common::create_page(&server, "organization_index", root, "Organizations").await;

    let parent = common::create_record(
        &server,
        json!({"parent_id": orgs, "title": "Arts Club", "details": {"type": "organization"}}),
    )
    .await;
    let other = common::create_record(
        &server,
        json!({"parent_id": orgs, "title": "Renaissance Society", "details": {"type": "organization"}}),
    )
    .await;
    let member = common::create_record(
        &server,
        json!({"parent_id": parent, "title": "Alice Roullier", "details": {"type": "person"}}),
    )
    .await;

    server
        .post(&format!("/api/pages/{parent}/move"))
        .json(&json!({"parent_id": other}))
        .await
        .assert_status_ok();

    let json = server
        .get(&format!("/api/pages/{member}"))
        .await
        .json::<Value>();
    assert_eq!(
        json["url_path"],
        "/organizations/renaissance-society/arts-club/alice-roullier/"
    );
    assert_eq!(json["depth"], 4);
}

#[tokio::test]
async fn test_delete_removes_subtree() {
    let server = common::create_test_server();
    let root = common::root_id(&server).await;
    let events = common::create_page(&server, "event_index", root, "Events").await;
    let event = common::create_event(&server, events, "Opening", &[]).await;

    let response = server.delete(&format!("/api/pages/{events}")).await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["removed"], 2);

    server
        .get(&format!("/api/records/{event}"))
        .await
        .assert_status(StatusCode::NOT_FOUND);

    let response = server.delete(&format!("/api/pages/{root}")).await;
    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_children_in_tree_order() {
    let server = common::create_test_server();
    let root = common::root_id(&server).await;
    common::create_page(&server, "person_index", root, "People").await;
    common::create_page(&server, "event_index", root, "Events").await;
    common::create_page(&server, "event_tag_index", root, "Tags").await;

    let json = server
        .get(&format!("/api/pages/{root}/children"))
        .await
        .json::<Value>();

    assert_eq!(common::titles(&json), vec!["People", "Events", "Tags"]);
}

#[tokio::test]
async fn test_get_missing_page() {
    let server = common::create_test_server();

    let response = server.get("/api/pages/9999").await;

    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(response.json::<Value>()["error"]["code"], "not_found");
}

#[tokio::test]
async fn test_page_schema() {
    let server = common::create_test_server();

    let json = server.get("/api/schema/pages/person").await.json::<Value>();
    assert_eq!(json["kind"], "person");
    assert_eq!(json["schema"], "http://schema.org/Person");
    assert_eq!(
        json["allowed_parent_kinds"],
        json!(["person_index", "organization"])
    );
    assert!(json["layout"].is_object());

    server
        .get("/api/schema/pages/gallery")
        .await
        .assert_status(StatusCode::NOT_FOUND);
}
