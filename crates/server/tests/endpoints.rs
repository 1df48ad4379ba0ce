use axum::{
    Router,
    body::Body,
    http::{Request, Response, StatusCode, header},
};
use base64::Engine as _;
use migration::MigratorTrait;
use http_body_util::BodyExt;
use sea_orm::{ConnectionTrait, Database, Statement};
use serde_json::{Value, json};
use std::sync::Arc;
use tower::ServiceExt;

async fn test_app() -> Router {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    migration::Migrator::up(&db, None).await.unwrap();
    let backend = db.get_database_backend();
    db.execute(Statement::from_sql_and_values(
        backend,
        "INSERT INTO operators (username, password) VALUES (?, ?)",
        vec!["shopkeeper".into(), "secret".into()],
    ))
    .await
    .unwrap();

    let engine = engine::Engine::builder()
        .database(db.clone())
        .build()
        .await
        .unwrap();

    server::router(server::ServerState {
        engine: Arc::new(engine),
        db,
    })
}

fn authorization() -> String {
    let credentials = base64::engine::general_purpose::STANDARD.encode("shopkeeper:secret");
    format!("Basic {credentials}")
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .header(header::AUTHORIZATION, authorization())
        .body(Body::empty())
        .unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::AUTHORIZATION, authorization())
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn patch_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("PATCH")
        .uri(uri)
        .header(header::AUTHORIZATION, authorization())
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .header(header::AUTHORIZATION, authorization())
        .body(Body::empty())
        .unwrap()
}

async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_text(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn requests_without_credentials_are_unauthorized() {
    let app = test_app().await;

    let response = app
        .oneshot(
            Request::builder()
                .uri("/customers")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn wrong_credentials_are_unauthorized() {
    let app = test_app().await;

    let credentials = base64::engine::general_purpose::STANDARD.encode("shopkeeper:wrong");
    let response = app
        .oneshot(
            Request::builder()
                .uri("/customers")
                .header(header::AUTHORIZATION, format!("Basic {credentials}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn customer_create_then_list_round_trips_fields() {
    let app = test_app().await;

    let response = app
        .clone()
        .oneshot(post_json(
            "/customers",
            json!({
                "name": "Ada Moss",
                "email": "ada@example.com",
                "phone": "555-0101",
                "city": "Turin",
                "country": "Italy",
                "platform_customer_id": "cust_9917",
                "note": "prefers pickup",
                "created_at": "2024-03-15",
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    assert!(created["id"].is_string());

    let response = app.oneshot(get("/customers")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let listed = body_json(response).await;
    let customers = listed["customers"].as_array().unwrap();
    assert_eq!(customers.len(), 1);
    assert_eq!(customers[0]["name"], "Ada Moss");
    assert_eq!(customers[0]["email"], "ada@example.com");
    assert_eq!(customers[0]["phone"], "555-0101");
    assert_eq!(customers[0]["city"], "Turin");
    assert_eq!(customers[0]["country"], "Italy");
    assert_eq!(customers[0]["platform_customer_id"], "cust_9917");
    assert_eq!(customers[0]["note"], "prefers pickup");
    assert_eq!(customers[0]["created_at"], "2024-03-15");
}

#[tokio::test]
async fn malformed_list_date_is_unprocessable() {
    let app = test_app().await;

    let response = app
        .oneshot(get("/customers?start_date=15-03-2024"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn unknown_ids_are_not_found() {
    let app = test_app().await;
    let missing = uuid::Uuid::new_v4();

    let response = app
        .clone()
        .oneshot(patch_json(&format!("/tasks/{missing}"), json!({})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app
        .oneshot(delete(&format!("/orders/{missing}")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn negative_order_amount_is_unprocessable() {
    let app = test_app().await;

    let response = app
        .oneshot(post_json(
            "/orders",
            json!({ "order_number": "SO-1001", "amount_minor": -5 }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn order_update_changes_status() {
    let app = test_app().await;

    let response = app
        .clone()
        .oneshot(post_json(
            "/orders",
            json!({ "order_number": "SO-1001", "amount_minor": 5000 }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    assert_eq!(created["payment_status"], "pending");
    let id = created["id"].as_str().unwrap().to_string();

    let response = app
        .oneshot(patch_json(
            &format!("/orders/{id}"),
            json!({ "payment_status": "paid" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let updated = body_json(response).await;
    assert_eq!(updated["payment_status"], "paid");
    assert_eq!(updated["order_number"], "SO-1001");
}

#[tokio::test]
async fn order_export_returns_csv_attachment() {
    let app = test_app().await;

    for (number, amount, date) in [("SO-1001", 5000, "2024-01-05"), ("SO-1002", 7500, "2024-02-10")]
    {
        let response = app
            .clone()
            .oneshot(post_json(
                "/orders",
                json!({
                    "order_number": number,
                    "amount_minor": amount,
                    "order_date": date,
                }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = app
        .oneshot(get(
            "/export/orders?start_date=2024-01-01&end_date=2024-01-31",
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(content_type.starts_with("text/csv"));
    let disposition = response
        .headers()
        .get(header::CONTENT_DISPOSITION)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(disposition.contains("orders_2024-01-01_2024-01-31.csv"));

    let body = body_text(response).await;
    let lines: Vec<&str> = body.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("id,order_date,order_number,customer,amount_minor"));
    assert!(lines[1].contains("SO-1001"));
    assert!(lines[1].contains("5000"));
    assert!(lines[1].contains("pending"));
    assert!(!body.contains("SO-1002"));
}

#[tokio::test]
async fn export_with_inverted_range_is_header_only() {
    let app = test_app().await;

    let response = app
        .clone()
        .oneshot(post_json(
            "/entries",
            json!({ "kind": "expense", "amount_minor": 100, "date": "2024-01-15" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app
        .oneshot(get(
            "/export/entries?start_date=2024-02-01&end_date=2024-01-01",
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert_eq!(body.lines().count(), 1);
}

#[tokio::test]
async fn entries_export_kind_filter() {
    let app = test_app().await;

    for (kind, amount) in [("expense", 100), ("expense", 200), ("income", 900)] {
        let response = app
            .clone()
            .oneshot(post_json(
                "/entries",
                json!({ "kind": kind, "amount_minor": amount, "date": "2024-01-10" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = app
        .clone()
        .oneshot(get("/export/entries?filter_type=expense"))
        .await
        .unwrap();
    let body = body_text(response).await;
    let lines: Vec<&str> = body.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[1..].iter().all(|line| line.contains("expense")));

    let response = app
        .clone()
        .oneshot(get("/export/entries?filter_type=all"))
        .await
        .unwrap();
    let body = body_text(response).await;
    assert_eq!(body.lines().count(), 4);

    let response = app
        .oneshot(get("/export/entries?filter_type=bogus"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn malformed_export_date_is_unprocessable() {
    let app = test_app().await;

    let response = app
        .oneshot(get("/export/customers?start_date=2024-13-99"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn deleting_a_customer_leaves_orders_unowned() {
    let app = test_app().await;

    let response = app
        .clone()
        .oneshot(post_json("/customers", json!({ "name": "Ada Moss" })))
        .await
        .unwrap();
    let customer = body_json(response).await;
    let customer_id = customer["id"].as_str().unwrap().to_string();

    let response = app
        .clone()
        .oneshot(post_json(
            "/orders",
            json!({
                "order_number": "SO-1001",
                "amount_minor": 5000,
                "customer_id": customer_id,
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app
        .clone()
        .oneshot(delete(&format!("/customers/{customer_id}")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app.clone().oneshot(get("/customers")).await.unwrap();
    let listed = body_json(response).await;
    assert!(listed["customers"].as_array().unwrap().is_empty());

    let response = app.oneshot(get("/orders")).await.unwrap();
    let listed = body_json(response).await;
    let orders = listed["orders"].as_array().unwrap();
    assert_eq!(orders.len(), 1);
    assert!(orders[0]["customer_id"].is_null());
}

#[tokio::test]
async fn task_status_filter_on_listing() {
    let app = test_app().await;

    for (title, status) in [("Open task", "pending"), ("Done task", "done")] {
        let response = app
            .clone()
            .oneshot(post_json(
                "/tasks",
                json!({ "title": title, "status": status }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = app.oneshot(get("/tasks?status=done")).await.unwrap();
    let listed = body_json(response).await;
    let tasks = listed["tasks"].as_array().unwrap();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0]["title"], "Done task");
}

#[tokio::test]
async fn stats_totals_reflect_records() {
    let app = test_app().await;

    let requests = [
        post_json("/customers", json!({ "name": "Ada Moss" })),
        post_json(
            "/entries",
            json!({ "kind": "income", "amount_minor": 9000 }),
        ),
        post_json(
            "/entries",
            json!({ "kind": "expense", "amount_minor": 4000 }),
        ),
        post_json("/tasks", json!({ "title": "Open task" })),
    ];
    for request in requests {
        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = app.oneshot(get("/stats")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let totals = body_json(response).await;
    assert_eq!(totals["customers"], 1);
    assert_eq!(totals["income_minor"], 9000);
    assert_eq!(totals["expense_minor"], 4000);
    assert_eq!(totals["net_minor"], 5000);
    assert_eq!(totals["open_tasks"], 1);
}
