mod common;

use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::{Value, json};

async fn places_index(server: &TestServer) -> i64 {
    let root = common::root_id(server).await;
    common::create_page(server, "place_index", root, "Places").await
}

#[tokio::test]
async fn test_place_round_trip_keeps_seven_decimals() {
    let server = common::create_test_server();
    let places = places_index(&server).await;

    let id = common::create_record(
        &server,
        json!({
            "parent_id": places,
            "title": "Art Institute",
            "details": {
                "type": "place",
                "latitude": "41.8795845",
                "longitude": -87.6237133,
                "street": "111 S Michigan Ave"
            }
        }),
    )
    .await;

    let json = server
        .get(&format!("/api/records/{id}"))
        .await
        .json::<Value>();

    assert_eq!(json["details"]["type"], "place");
    assert_eq!(json["details"]["latitude"], "41.8795845");
    assert_eq!(json["details"]["longitude"], "-87.6237133");
    assert!(json["details"]["altitude"].is_null());
    assert_eq!(json["details"]["locality"], "Chicago");
    assert_eq!(json["details"]["region"], "IL");
    assert_eq!(json["details"]["country"], "USA");
}

#[tokio::test]
async fn test_place_coordinates_are_unique() {
    let server = common::create_test_server();
    let places = places_index(&server).await;

    let details = json!({"type": "place", "latitude": "41.88", "longitude": "-87.62"});
    common::create_record(
        &server,
        json!({"parent_id": places, "title": "First", "details": details}),
    )
    .await;

    let response = server
        .post("/api/records")
        .json(&json!({"parent_id": places, "title": "Second", "details": details}))
        .await;
    response.assert_status(StatusCode::CONFLICT);

    // Same point with an altitude is a different place.
    let response = server
        .post("/api/records")
        .json(&json!({
            "parent_id": places,
            "title": "Rooftop",
            "details": {"type": "place", "latitude": "41.88", "longitude": "-87.62", "altitude": "180"}
        }))
        .await;
    response.assert_status(StatusCode::CREATED);
}

#[tokio::test]
async fn test_place_coordinates_out_of_range() {
    let server = common::create_test_server();
    let places = places_index(&server).await;

    let response = server
        .post("/api/records")
        .json(&json!({
            "parent_id": places,
            "title": "Nowhere",
            "details": {"type": "place", "latitude": "91", "longitude": "0"}
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_relationship_targets_must_match_kind() {
    let server = common::create_test_server();
    let root = common::root_id(&server).await;
    let people = common::create_page(&server, "person_index", root, "People").await;
    let places = common::create_page(&server, "place_index", root, "Places").await;

    let place = common::create_record(
        &server,
        json!({"parent_id": places, "title": "Studio", "details": {"type": "place", "latitude": 1, "longitude": 2}}),
    )
    .await;
    let friend = common::create_record(
        &server,
        json!({"parent_id": people, "title": "Ivan Albright", "details": {"type": "person"}}),
    )
    .await;

    let response = server
        .post("/api/records")
        .json(&json!({
            "parent_id": people,
            "title": "Gertrude Abercrombie",
            "details": {"type": "person", "friends": [place]}
        }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);

    let response = server
        .post("/api/records")
        .json(&json!({
            "parent_id": people,
            "title": "Gertrude Abercrombie",
            "details": {"type": "person", "gender": "f", "friends": [friend, friend]}
        }))
        .await;
    response.assert_status(StatusCode::CREATED);
    assert_eq!(
        response.json::<Value>()["details"]["friends"],
        json!([friend])
    );
}

#[tokio::test]
async fn test_agent_profile_only_on_agents() {
    let server = common::create_test_server();
    let places = places_index(&server).await;

    let response = server
        .post("/api/records")
        .json(&json!({
            "parent_id": places,
            "title": "Studio",
            "agent": {"getty_ulan_id": 500012345},
            "details": {"type": "place", "latitude": 1, "longitude": 2}
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_unknown_snippet_reference() {
    let server = common::create_test_server();
    let root = common::root_id(&server).await;
    let people = common::create_page(&server, "person_index", root, "People").await;

    let response = server
        .post("/api/records")
        .json(&json!({
            "parent_id": people,
            "title": "Ada",
            "agent": {"emails": [42]},
            "details": {"type": "person"}
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<Value>()["error"]["details"]["missing"],
        json!([42])
    );
}

#[tokio::test]
async fn test_update_record_cannot_change_kind() {
    let server = common::create_test_server();
    let root = common::root_id(&server).await;
    let people = common::create_page(&server, "person_index", root, "People").await;
    let person = common::create_record(
        &server,
        json!({"parent_id": people, "title": "Ada", "details": {"type": "person"}}),
    )
    .await;

    let response = server
        .put(&format!("/api/records/{person}"))
        .json(&json!({"details": {"type": "organization"}}))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);

    let response = server
        .put(&format!("/api/records/{person}"))
        .json(&json!({
            "title": "Ada Lovelace",
            "fields": {"body": "<p>Mathematician</p>", "same_as": "https://example.org/ada"},
            "details": {"type": "person", "gender": "f"}
        }))
        .await;
    response.assert_status_ok();
    let json = response.json::<Value>();
    assert_eq!(json["page"]["title"], "Ada Lovelace");
    assert_eq!(json["page"]["slug"], "ada");
    assert_eq!(json["fields"]["body"], "<p>Mathematician</p>");
}

#[tokio::test]
async fn test_gallery_keeps_submitted_order() {
    let server = common::create_test_server();
    let places = places_index(&server).await;
    let place = common::create_record(
        &server,
        json!({"parent_id": places, "title": "Studio", "details": {"type": "place", "latitude": 1, "longitude": 2}}),
    )
    .await;

    let mut images = Vec::new();
    for file in ["a.jpg", "b.jpg", "c.jpg"] {
        let json = server
            .post("/api/images")
            .json(&json!({"title": file, "file": file, "width": 800, "height": 600}))
            .await
            .json::<Value>();
        images.push(json["id"].as_i64().unwrap());
    }

    let response = server
        .put(&format!("/api/records/{place}/gallery"))
        .json(&json!({"items": [
            {"image_id": images[2], "caption": "Front"},
            {"image_id": images[0]},
            {"image_id": images[1], "caption": "Back"}
        ]}))
        .await;
    response.assert_status_ok();

    let json = server
        .get(&format!("/api/records/{place}"))
        .await
        .json::<Value>();
    let order: Vec<i64> = json["gallery"]
        .as_array()
        .unwrap()
        .iter()
        .map(|g| g["image_id"].as_i64().unwrap())
        .collect();
    assert_eq!(order, vec![images[2], images[0], images[1]]);
    assert_eq!(json["gallery"][1]["caption"], "");

    let response = server
        .put(&format!("/api/records/{place}/gallery"))
        .json(&json!({"items": [{"image_id": 999}]}))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_deleting_image_removes_gallery_entries() {
    let server = common::create_test_server();
    let places = places_index(&server).await;
    let place = common::create_record(
        &server,
        json!({"parent_id": places, "title": "Studio", "details": {"type": "place", "latitude": 1, "longitude": 2}}),
    )
    .await;
    let image = server
        .post("/api/images")
        .json(&json!({"title": "Facade", "file": "facade.jpg", "width": 10, "height": 10}))
        .await
        .json::<Value>()["id"]
        .as_i64()
        .unwrap();

    server
        .put(&format!("/api/records/{place}/gallery"))
        .json(&json!({"items": [{"image_id": image}]}))
        .await
        .assert_status_ok();

    server
        .delete(&format!("/api/images/{image}"))
        .await
        .assert_status(StatusCode::NO_CONTENT);

    let json = server
        .get(&format!("/api/records/{place}"))
        .await
        .json::<Value>();
    assert_eq!(json["gallery"], json!([]));

    server
        .delete(&format!("/api/images/{image}"))
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_events_by_tag() {
    let server = common::create_test_server();
    let root = common::root_id(&server).await;
    let events = common::create_page(&server, "event_index", root, "Events").await;

    let jazz = common::create_event(&server, events, "Jazz Night", &["jazz", "music"]).await;
    common::create_event(&server, events, "Lecture", &["talks"]).await;
    let draft = common::create_event(&server, events, "Jazz Brunch", &["jazz"]).await;
    common::create_event(&server, events, "Upper", &["Jazz"]).await;
    common::publish(&server, jazz).await;

    let json = server
        .get("/api/events")
        .add_query_param("tag", "jazz")
        .await
        .json::<Value>();
    let ids: Vec<i64> = json["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![jazz, draft]);

    server
        .get("/api/events")
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_tag_index_listing_filters_live_events() {
    let server = common::create_test_server();
    let root = common::root_id(&server).await;
    let events = common::create_page(&server, "event_index", root, "Events").await;
    let tags = common::create_page(&server, "event_tag_index", root, "Tags").await;

    let older = common::create_event(&server, events, "Older", &["jazz"]).await;
    let newer = common::create_event(&server, events, "Newer", &["jazz"]).await;
    common::create_event(&server, events, "Draft", &["jazz"]).await;
    let other = common::create_event(&server, events, "Other", &["blues"]).await;
    let untagged = common::create_event(&server, events, "Untagged", &[]).await;
    common::publish_at(&server, older, "2024-01-01T00:00:00Z").await;
    common::publish_at(&server, newer, "2024-02-01T00:00:00Z").await;
    common::publish(&server, other).await;
    common::publish(&server, untagged).await;

    let json = server
        .get(&format!("/api/pages/{tags}/listing"))
        .add_query_param("tag", "jazz")
        .await
        .json::<Value>();
    assert_eq!(common::titles(&json), vec!["Newer", "Older"]);

    let json = server
        .get(&format!("/api/pages/{tags}/listing?tag="))
        .await
        .json::<Value>();
    assert!(common::titles(&json).is_empty());

    let json = server
        .get(&format!("/api/pages/{tags}/listing"))
        .await
        .json::<Value>();
    assert!(common::titles(&json).is_empty());
}

#[tokio::test]
async fn test_structured_data_for_place() {
    let server = common::create_test_server();
    let places = places_index(&server).await;
    let place = common::create_record(
        &server,
        json!({
            "parent_id": places,
            "title": "Art Institute",
            "fields": {"same_as": "https://www.artic.edu/"},
            "details": {"type": "place", "latitude": "41.8795845", "longitude": "-87.6237133"}
        }),
    )
    .await;

    let json = server
        .get(&format!("/api/records/{place}/structured-data"))
        .await
        .json::<Value>();

    assert_eq!(json["@type"], "http://schema.org/Place");
    assert_eq!(json["name"], "Art Institute");
    assert_eq!(json["url"], "/places/art-institute/");
    assert_eq!(json["sameAs"], "https://www.artic.edu/");
    assert_eq!(json["geo"]["latitude"], "41.8795845");
    assert_eq!(json["address"]["addressLocality"], "Chicago");
}

#[tokio::test]
async fn test_structured_data_for_cancelled_event() {
    let server = common::create_test_server();
    let root = common::root_id(&server).await;
    let events = common::create_page(&server, "event_index", root, "Events").await;
    let event = common::create_record(
        &server,
        json!({
            "parent_id": events,
            "title": "Gala",
            "details": {
                "type": "event",
                "start_date": "2024-06-01T19:00:00Z",
                "status": "cancelled",
                "tags": ["benefit", "dinner"]
            }
        }),
    )
    .await;

    let json = server
        .get(&format!("/api/records/{event}/structured-data"))
        .await
        .json::<Value>();

    assert_eq!(json["@type"], "http://schema.org/Event");
    assert_eq!(json["eventStatus"], "http://schema.org/EventCancelled");
    assert_eq!(json["keywords"], "benefit,dinner");
    assert_eq!(json["startDate"], "2024-06-01T19:00:00+00:00");
}

#[tokio::test]
async fn test_person_round_trip_with_contacts() {
    let server = common::create_test_server();
    let root = common::root_id(&server).await;
    let people = common::create_page(&server, "person_index", root, "People").await;

    let email = common::create_snippet(&server, "email", json!({"address": "poet@example.org"})).await;
    let phone = common::create_snippet(
        &server,
        "phone",
        json!({"area_code": 312, "exchange_code": 555, "number": 100}),
    )
    .await;
    let account = common::create_snippet(
        &server,
        "social-account",
        json!({"service": "instagram", "account": "gbrooks"}),
    )
    .await;
    let alias = common::create_snippet(&server, "extra-name", json!({"name": "Gwen"})).await;
    let friend = common::create_record(
        &server,
        json!({"parent_id": people, "title": "Margaret Walker", "details": {"type": "person"}}),
    )
    .await;

    let person = common::create_record(
        &server,
        json!({
            "parent_id": people,
            "title": "Gwendolyn Brooks",
            "fields": {"oclc_fast_id": 35486},
            "agent": {
                "getty_ulan_id": 500012345,
                "emails": [email, email],
                "phones": [phone],
                "social_accounts": [account],
                "extra_names": [alias]
            },
            "details": {"type": "person", "gender": "f", "friends": [friend, friend]}
        }),
    )
    .await;

    let json = server
        .get(&format!("/api/records/{person}"))
        .await
        .json::<Value>();
    assert_eq!(json["fields"]["oclc_fast_id"], 35486);
    assert_eq!(json["agent"]["getty_ulan_id"], 500012345);
    assert_eq!(json["agent"]["emails"], json!([email]));
    assert_eq!(json["agent"]["phones"], json!([phone]));
    assert_eq!(json["agent"]["social_accounts"], json!([account]));
    assert_eq!(json["agent"]["extra_names"], json!([alias]));
    assert_eq!(json["details"]["gender"], "f");
    assert_eq!(json["details"]["friends"], json!([friend]));

    let json = server
        .get(&format!("/api/records/{person}/structured-data"))
        .await
        .json::<Value>();
    assert_eq!(json["@type"], "http://schema.org/Person");
    assert_eq!(json["name"], "Gwendolyn Brooks");
    assert_eq!(json["url"], "/people/gwendolyn-brooks/");
    assert_eq!(json["gender"], "female");
}

#[tokio::test]
async fn test_person_cannot_befriend_themselves() {
    let server = common::create_test_server();
    let root = common::root_id(&server).await;
    let people = common::create_page(&server, "person_index", root, "People").await;
    let person = common::create_record(
        &server,
        json!({"parent_id": people, "title": "Theodore Ward", "details": {"type": "person"}}),
    )
    .await;

    let response = server
        .put(&format!("/api/records/{person}"))
        .json(&json!({"details": {"type": "person", "friends": [person]}}))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let json = server
        .get(&format!("/api/records/{person}"))
        .await
        .json::<Value>();
    assert_eq!(json["details"]["friends"], json!([]));
}

#[tokio::test]
async fn test_organization_nesting_and_members() {
    let server = common::create_test_server();
    let root = common::root_id(&server).await;
    let orgs = common::create_page(&server, "organization_index", root, "Organizations").await;
    let places = places_index(&server).await;

    let parent = common::create_record(
        &server,
        json!({"parent_id": orgs, "title": "South Side Community Art Center", "details": {"type": "organization"}}),
    )
    .await;
    let member = common::create_record(
        &server,
        json!({"parent_id": parent, "title": "Charles White", "details": {"type": "person"}}),
    )
    .await;
    let studio = common::create_record(
        &server,
        json!({"parent_id": places, "title": "Center", "details": {"type": "place", "latitude": "41.8", "longitude": "-87.6"}}),
    )
    .await;

    let response = server
        .post("/api/records")
        .json(&json!({
            "parent_id": parent,
            "title": "Photography Guild",
            "details": {
                "type": "organization",
                "nonprofit": false,
                "members": [member],
                "employees": [member],
                "locations": [studio]
            }
        }))
        .await;
    response.assert_status(StatusCode::CREATED);
    let json = response.json::<Value>();
    let guild = json["page"]["id"].as_i64().unwrap();
    assert_eq!(
        json["page"]["url_path"],
        "/organizations/south-side-community-art-center/photography-guild/"
    );
    assert_eq!(json["agent"]["emails"], json!([]));

    let json = server
        .get(&format!("/api/records/{guild}"))
        .await
        .json::<Value>();
    assert_eq!(json["details"]["nonprofit"], false);
    assert_eq!(json["details"]["members"], json!([member]));
    assert_eq!(json["details"]["employees"], json!([member]));
    assert_eq!(json["details"]["locations"], json!([studio]));

    // Members must be people.
    server
        .put(&format!("/api/records/{guild}"))
        .json(&json!({"details": {"type": "organization", "members": [parent]}}))
        .await
        .assert_status(StatusCode::BAD_REQUEST);

    let json = server
        .get(&format!("/api/records/{guild}/structured-data"))
        .await
        .json::<Value>();
    assert_eq!(json["@type"], "http://schema.org/Organization");
    assert_eq!(json["location"], json!([studio]));
}

#[tokio::test]
async fn test_event_round_trip() {
    let server = common::create_test_server();
    let root = common::root_id(&server).await;
    let events = common::create_page(&server, "event_index", root, "Events").await;
    let people = common::create_page(&server, "person_index", root, "People").await;
    let host = common::create_record(
        &server,
        json!({"parent_id": people, "title": "Host", "details": {"type": "person"}}),
    )
    .await;

    let event = common::create_record(
        &server,
        json!({
            "parent_id": events,
            "title": "Open Studio",
            "details": {
                "type": "event",
                "start_date": "2024-09-14T18:00:00Z",
                "duration": 180,
                "precision": 2,
                "organizers": [host, host],
                "tags": ["studio", " studio", "Studio"]
            }
        }),
    )
    .await;

    let json = server
        .get(&format!("/api/records/{event}"))
        .await
        .json::<Value>();
    assert_eq!(json["details"]["duration"], 180);
    assert_eq!(json["details"]["precision"], 2);
    assert!(json["details"]["status"].is_null());
    assert_eq!(json["details"]["organizers"], json!([host]));
    assert_eq!(json["details"]["tags"], json!(["studio", "Studio"]));
    assert!(json["agent"].is_null());

    server
        .put(&format!("/api/records/{event}"))
        .json(&json!({"details": {"type": "event", "duration": -5}}))
        .await
        .assert_status(StatusCode::BAD_REQUEST);
    server
        .put(&format!("/api/records/{event}"))
        .json(&json!({"details": {"type": "event", "organizers": [events]}}))
        .await
        .assert_status(StatusCode::BAD_REQUEST);

    let json = server
        .get(&format!("/api/records/{event}/structured-data"))
        .await
        .json::<Value>();
    assert_eq!(json["@type"], "http://schema.org/Event");
    assert_eq!(json["startDate"], "2024-09-14T18:00:00+00:00");
    assert_eq!(json["keywords"], "studio,Studio");
    assert!(json.get("eventStatus").is_none());
}

#[tokio::test]
async fn test_main_image_follows_gallery() {
    let server = common::create_test_server();
    let root = common::root_id(&server).await;
    let people = common::create_page(&server, "person_index", root, "People").await;
    let person = common::create_record(
        &server,
        json!({"parent_id": people, "title": "Eldzier Cortor", "details": {"type": "person"}}),
    )
    .await;

    let mut images = Vec::new();
    for file in ["portrait.jpg", "studio.jpg"] {
        let json = server
            .post("/api/images")
            .json(&json!({"title": file, "file": file, "width": 640, "height": 480}))
            .await
            .json::<Value>();
        images.push(json["id"].as_i64().unwrap());
    }
    server
        .put(&format!("/api/records/{person}/gallery"))
        .json(&json!({"items": [{"image_id": images[0]}, {"image_id": images[1]}]}))
        .await
        .assert_status_ok();

    let json = server
        .get(&format!("/api/records/{person}/structured-data"))
        .await
        .json::<Value>();
    assert_eq!(json["image"], "portrait.jpg");

    server
        .delete(&format!("/api/images/{}", images[0]))
        .await
        .assert_status(StatusCode::NO_CONTENT);
    let json = server
        .get(&format!("/api/records/{person}/structured-data"))
        .await
        .json::<Value>();
    assert_eq!(json["image"], "studio.jpg");

    server
        .delete(&format!("/api/images/{}", images[1]))
        .await
        .assert_status(StatusCode::NO_CONTENT);
    let json = server
        .get(&format!("/api/records/{person}/structured-data"))
        .await
        .json::<Value>();
    assert!(json.get("image").is_none());
}
