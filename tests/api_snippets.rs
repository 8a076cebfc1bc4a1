mod common;

use axum::http::StatusCode;
use serde_json::{Value, json};

#[tokio::test]
async fn test_list_snippet_kinds() {
    let server = common::create_test_server();

    let json = server.get("/api/snippets").await.json::<Value>();

    let paths: Vec<&str> = json["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|k| k["path"].as_str().unwrap())
        .collect();
    assert_eq!(paths.len(), 10);
    assert!(paths.contains(&"email"));
    assert!(paths.contains(&"social-account"));
    assert!(paths.contains(&"event-category"));
}

#[tokio::test]
async fn test_unknown_snippet_kind() {
    let server = common::create_test_server();

    server
        .get("/api/snippets/fax")
        .await
        .assert_status(StatusCode::NOT_FOUND);
    server
        .get("/api/schema/snippets/fax")
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_email_and_label() {
    let server = common::create_test_server();

    let response = server
        .post("/api/snippets/email")
        .json(&json!({"label": "work", "address": "curator@example.org"}))
        .await;

    response.assert_status(StatusCode::CREATED);
    let json = response.json::<Value>();
    assert_eq!(json["kind"], "email");
    assert_eq!(json["data"]["address"], "curator@example.org");
    assert!(json["label"].as_str().unwrap().contains("curator@example.org"));
}

#[tokio::test]
async fn test_email_address_is_unique() {
    let server = common::create_test_server();
    common::create_snippet(&server, "email", json!({"address": "info@example.org"})).await;

    let response = server
        .post("/api/snippets/email")
        .json(&json!({"label": "personal", "address": "info@example.org"}))
        .await;

    response.assert_status(StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_invalid_email_rejected() {
    let server = common::create_test_server();

    let response = server
        .post("/api/snippets/email")
        .json(&json!({"address": "not-an-email"}))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_phone_number_is_unique() {
    let server = common::create_test_server();
    let phone = json!({"area_code": 312, "exchange_code": 555, "number": 1234});
    common::create_snippet(&server, "phone", phone.clone()).await;

    server
        .post("/api/snippets/phone")
        .json(&phone)
        .await
        .assert_status(StatusCode::CONFLICT);

    // A missing extension still takes part in the key.
    server
        .post("/api/snippets/phone")
        .json(&json!({"country": 1, "area_code": 312, "exchange_code": 555, "number": 1234, "extension": null}))
        .await
        .assert_status(StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_phone_differs_in_any_field() {
    let server = common::create_test_server();
    common::create_snippet(
        &server,
        "phone",
        json!({"country": 1, "area_code": 312, "exchange_code": 555, "number": 1234}),
    )
    .await;

    let variants = [
        json!({"country": 44, "area_code": 312, "exchange_code": 555, "number": 1234}),
        json!({"country": 1, "area_code": 773, "exchange_code": 555, "number": 1234}),
        json!({"country": 1, "area_code": 312, "exchange_code": 556, "number": 1234}),
        json!({"country": 1, "area_code": 312, "exchange_code": 555, "number": 4321}),
        json!({"country": 1, "area_code": 312, "exchange_code": 555, "number": 1234, "extension": "12"}),
    ];
    for variant in variants {
        server
            .post("/api/snippets/phone")
            .json(&variant)
            .await
            .assert_status(StatusCode::CREATED);
    }

    let json = server.get("/api/snippets/phone").await.json::<Value>();
    assert_eq!(json["items"].as_array().unwrap().len(), 6);
}

#[tokio::test]
async fn test_source_websites_collapse_duplicates() {
    let server = common::create_test_server();
    let first = common::create_snippet(&server, "website", json!({"url": "https://example.org/"})).await;
    let second = common::create_snippet(&server, "website", json!({"url": "https://example.com/"})).await;

    let response = server
        .post("/api/snippets/source")
        .json(&json!({"title": "Art", "same_as": [first, second, first]}))
        .await;
    response.assert_status(StatusCode::CREATED);
    let id = response.json::<Value>()["id"].as_i64().unwrap();

    let json = server
        .get(&format!("/api/snippets/source/{id}"))
        .await
        .json::<Value>();
    assert_eq!(json["data"]["same_as"], json!([first, second]));

    server
        .put(&format!("/api/snippets/source/{id}"))
        .json(&json!({"title": "Art", "same_as": [second, second]}))
        .await
        .assert_status_ok();
    let json = server
        .get(&format!("/api/snippets/source/{id}"))
        .await
        .json::<Value>();
    assert_eq!(json["data"]["same_as"], json!([second]));
}

#[tokio::test]
async fn test_update_snippet() {
    let server = common::create_test_server();
    let id = common::create_snippet(
        &server,
        "website",
        json!({"url": "https://example.org/"}),
    )
    .await;

    let response = server
        .put(&format!("/api/snippets/website/{id}"))
        .json(&json!({"url": "https://example.com/", "description": "Mirror"}))
        .await;
    response.assert_status_ok();

    let json = server
        .get(&format!("/api/snippets/website/{id}"))
        .await
        .json::<Value>();
    assert_eq!(json["data"]["url"], "https://example.com/");

    // The id belongs to a website, not an email.
    server
        .get(&format!("/api/snippets/email/{id}"))
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_categories_are_separated_by_kind() {
    let server = common::create_test_server();

    common::create_snippet(&server, "person-category", json!({"name": "Painter"})).await;
    common::create_snippet(&server, "event-category", json!({"name": "Painter"})).await;

    server
        .post("/api/snippets/person-category")
        .json(&json!({"name": "Painter"}))
        .await
        .assert_status(StatusCode::CONFLICT);

    let json = server
        .get("/api/snippets/event-category")
        .await
        .json::<Value>();
    assert_eq!(json["items"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_source_cited_by_record_cannot_be_deleted() {
    let server = common::create_test_server();
    let root = common::root_id(&server).await;
    let people = common::create_page(&server, "person_index", root, "People").await;

    let source = common::create_snippet(
        &server,
        "source",
        json!({"title": "Chicago Artists Archive", "category": "book"}),
    )
    .await;
    let person = common::create_record(
        &server,
        json!({
            "parent_id": people,
            "title": "Archibald Motley",
            "fields": {"source_id": source},
            "details": {"type": "person"}
        }),
    )
    .await;

    let response = server.delete(&format!("/api/snippets/source/{source}")).await;
    response.assert_status(StatusCode::CONFLICT);

    server
        .delete(&format!("/api/pages/{person}"))
        .await
        .assert_status_ok();
    server
        .delete(&format!("/api/snippets/source/{source}"))
        .await
        .assert_status(StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_deleting_snippet_unlinks_it_from_records() {
    let server = common::create_test_server();
    let root = common::root_id(&server).await;
    let people = common::create_page(&server, "person_index", root, "People").await;

    let email = common::create_snippet(&server, "email", json!({"address": "a@example.org"})).await;
    let other = common::create_snippet(&server, "email", json!({"address": "b@example.org"})).await;
    let category = common::create_snippet(&server, "person-category", json!({"name": "Sculptor"})).await;
    let person = common::create_record(
        &server,
        json!({
            "parent_id": people,
            "title": "Richard Hunt",
            "agent": {"emails": [email, other]},
            "details": {"type": "person", "categories": [category]}
        }),
    )
    .await;

    server
        .delete(&format!("/api/snippets/email/{email}"))
        .await
        .assert_status(StatusCode::NO_CONTENT);
    server
        .delete(&format!("/api/snippets/person-category/{category}"))
        .await
        .assert_status(StatusCode::NO_CONTENT);

    let json = server
        .get(&format!("/api/records/{person}"))
        .await
        .json::<Value>();
    assert_eq!(json["agent"]["emails"], json!([other]));
    assert_eq!(json["details"]["categories"], json!([]));
}

#[tokio::test]
async fn test_deleting_icon_clears_category() {
    let server = common::create_test_server();
    let icon = server
        .post("/api/images")
        .json(&json!({"title": "Brush", "file": "brush.svg", "width": 24, "height": 24}))
        .await
        .json::<Value>()["id"]
        .as_i64()
        .unwrap();
    let category = common::create_snippet(
        &server,
        "place-category",
        json!({"name": "Gallery", "icon_id": icon}),
    )
    .await;

    server
        .delete(&format!("/api/images/{icon}"))
        .await
        .assert_status(StatusCode::NO_CONTENT);

    let json = server
        .get(&format!("/api/snippets/place-category/{category}"))
        .await
        .json::<Value>();
    assert_eq!(json["data"]["name"], "Gallery");
    assert!(json["data"]["icon_id"].is_null());
}

#[tokio::test]
async fn test_snippet_schema() {
    let server = common::create_test_server();

    let json = server
        .get("/api/schema/snippets/social-account")
        .await
        .json::<Value>();

    assert_eq!(json["kind"], "social-account");
    assert_eq!(json["verbose_name"], "social account");
    assert!(json["layout"]["panels"].is_array());
}
