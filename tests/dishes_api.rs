//! HTTP-level tests for the dishes resource
//!
//! Each test spins up a fresh server with its own stores, so tests never
//! observe each other's records.

use axum::http::StatusCode;
use axum_test::TestServer;
use platter::server::{AppState, build_router};
use serde_json::{Value, json};

fn make_server() -> TestServer {
    TestServer::new(build_router(AppState::new()))
}

fn taco() -> Value {
    json!({"data": {
        "name": "Taco",
        "description": "spicy",
        "price": 5,
        "image_url": "http://x/y.png"
    }})
}

async fn create_dish(server: &TestServer, body: &Value) -> Value {
    let response = server.post("/dishes").json(body).await;
    response.assert_status(StatusCode::CREATED);
    response.json::<Value>()["data"].clone()
}

#[tokio::test]
async fn create_returns_the_new_dish_with_an_id() {
    let server = make_server();

    let response = server.post("/dishes").json(&taco()).await;
    response.assert_status(StatusCode::CREATED);

    let body: Value = response.json();
    let dish = &body["data"];
    assert!(dish["id"].as_str().is_some_and(|id| !id.is_empty()));
    assert_eq!(dish["name"], "Taco");
    assert_eq!(dish["description"], "spicy");
    assert_eq!(dish["price"], 5.0);
    assert_eq!(dish["image_url"], "http://x/y.png");
}

#[tokio::test]
async fn created_ids_are_unique() {
    let server = make_server();

    let mut ids = Vec::new();
    for _ in 0..5 {
        let dish = create_dish(&server, &taco()).await;
        ids.push(dish["id"].as_str().unwrap().to_string());
    }

    let mut deduped = ids.clone();
    deduped.sort();
    deduped.dedup();
    assert_eq!(deduped.len(), ids.len());
}

#[tokio::test]
async fn create_rejects_each_missing_field_in_order() {
    let server = make_server();

    let cases = [
        ("name", "Dish must include a name."),
        ("description", "Dish must include a description."),
        ("image_url", "Dish must include an image_url."),
        ("price", "Dish must have a price that is a positive number."),
    ];
    for (field, message) in cases {
        let mut body = taco();
        body["data"].as_object_mut().unwrap().remove(field);
        let response = server.post("/dishes").json(&body).await;
        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(response.json::<Value>()["message"], message);
    }
}

#[tokio::test]
async fn create_rejects_bad_prices() {
    let server = make_server();

    for bad in [json!(0), json!(-2), json!("5")] {
        let mut body = taco();
        body["data"]["price"] = bad;
        let response = server.post("/dishes").json(&body).await;
        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(
            response.json::<Value>()["message"],
            "Dish must have a price that is a positive number."
        );
    }
}

#[tokio::test]
async fn unparseable_bodies_fail_like_empty_ones() {
    let server = make_server();

    // No body at all.
    let response = server.post("/dishes").await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<Value>()["message"],
        "Dish must include a name."
    );

    // Malformed JSON.
    let response = server
        .post("/dishes")
        .content_type("application/json")
        .text("not json")
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<Value>()["message"],
        "Dish must include a name."
    );
}

#[tokio::test]
async fn rejected_create_stores_nothing() {
    let server = make_server();

    let response = server.post("/dishes").json(&json!({"data": {}})).await;
    response.assert_status(StatusCode::BAD_REQUEST);

    let list: Value = server.get("/dishes").await.json();
    assert_eq!(list["data"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn list_returns_dishes_in_insertion_order() {
    let server = make_server();

    for name in ["Taco", "Burrito", "Quesadilla"] {
        let mut body = taco();
        body["data"]["name"] = json!(name);
        create_dish(&server, &body).await;
    }

    let response = server.get("/dishes").await;
    response.assert_status(StatusCode::OK);

    let body: Value = response.json();
    let names: Vec<&str> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|dish| dish["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Taco", "Burrito", "Quesadilla"]);
}

#[tokio::test]
async fn read_returns_the_dish() {
    let server = make_server();
    let dish = create_dish(&server, &taco()).await;
    let id = dish["id"].as_str().unwrap();

    let response = server.get(&format!("/dishes/{id}")).await;
    response.assert_status(StatusCode::OK);
    assert_eq!(response.json::<Value>()["data"], dish);
}

#[tokio::test]
async fn read_of_unknown_id_is_404() {
    let server = make_server();

    let response = server.get("/dishes/nope").await;
    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(response.json::<Value>()["message"], "Dish not found: nope");
}

#[tokio::test]
async fn update_overwrites_fields_but_not_the_id() {
    let server = make_server();
    let dish = create_dish(&server, &taco()).await;
    let id = dish["id"].as_str().unwrap();

    let response = server
        .put(&format!("/dishes/{id}"))
        .json(&json!({"data": {
            "name": "Birria Taco",
            "description": "rich",
            "price": 7.5,
            "image_url": "http://x/z.png"
        }}))
        .await;
    response.assert_status(StatusCode::OK);

    let updated = response.json::<Value>()["data"].clone();
    assert_eq!(updated["id"], id);
    assert_eq!(updated["name"], "Birria Taco");
    assert_eq!(updated["price"], 7.5);

    let fetched: Value = server.get(&format!("/dishes/{id}")).await.json();
    assert_eq!(fetched["data"], updated);
}

#[tokio::test]
async fn update_accepts_a_matching_body_id() {
    let server = make_server();
    let dish = create_dish(&server, &taco()).await;
    let id = dish["id"].as_str().unwrap();

    let mut body = taco();
    body["data"]["id"] = json!(id);
    body["data"]["name"] = json!("Street Taco");

    let response = server.put(&format!("/dishes/{id}")).json(&body).await;
    response.assert_status(StatusCode::OK);
    assert_eq!(response.json::<Value>()["data"]["name"], "Street Taco");
}

#[tokio::test]
async fn update_with_mismatched_body_id_changes_nothing() {
    let server = make_server();
    let dish = create_dish(&server, &taco()).await;
    let id = dish["id"].as_str().unwrap();

    let mut body = taco();
    body["data"]["id"] = json!("other");
    body["data"]["name"] = json!("Hijacked");

    let response = server.put(&format!("/dishes/{id}")).json(&body).await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<Value>()["message"],
        format!("Dish id does not match route id. Dish: other, Route: {id}")
    );

    let fetched: Value = server.get(&format!("/dishes/{id}")).await.json();
    assert_eq!(fetched["data"], dish);
}

#[tokio::test]
async fn update_of_unknown_id_is_404_even_with_an_invalid_body() {
    let server = make_server();

    // The existence guard runs before field validation.
    let response = server.put("/dishes/nope").json(&json!({"data": {}})).await;
    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(response.json::<Value>()["message"], "Dish not found: nope");
}

#[tokio::test]
async fn update_revalidates_all_fields() {
    let server = make_server();
    let dish = create_dish(&server, &taco()).await;
    let id = dish["id"].as_str().unwrap();

    let mut body = taco();
    body["data"]["price"] = json!(0);
    let response = server.put(&format!("/dishes/{id}")).json(&body).await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<Value>()["message"],
        "Dish must have a price that is a positive number."
    );
}

#[tokio::test]
async fn dishes_cannot_be_deleted() {
    let server = make_server();
    let dish = create_dish(&server, &taco()).await;
    let id = dish["id"].as_str().unwrap();

    let response = server.delete(&format!("/dishes/{id}")).await;
    response.assert_status(StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(
        response.json::<Value>()["message"],
        format!("DELETE not allowed for /dishes/{id}")
    );

    let response = server.delete("/dishes").await;
    response.assert_status(StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn unmatched_paths_are_404_naming_the_route() {
    let server = make_server();

    let response = server.get("/menus").await;
    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(response.json::<Value>()["message"], "Not found: /menus");
}
