//! Shared harness for the HTTP integration tests.

#![allow(dead_code)]

use axum::body::{self, Body};
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use steez_db::{Database, DbConfig};
use steez_server::{router, AppState, FormOptions};

/// Router backed by a fresh in-memory database.
pub struct TestApp {
    router: Router,
    pub db: Database,
}

impl TestApp {
    pub async fn new() -> Self {
        Self::with_options(FormOptions::default()).await
    }

    pub async fn with_options(options: FormOptions) -> Self {
        let db = Database::new(DbConfig::in_memory())
            .await
            .expect("in-memory database");

        TestApp {
            router: router(AppState::new(db.clone(), options)),
            db,
        }
    }

    /// Sends a request, with `body` as JSON when given.
    pub async fn request(&self, method: Method, uri: &str, body: Option<Value>) -> Response {
        let builder = Request::builder().method(method).uri(uri);

        let request = match body {
            Some(json) => builder
                .header("content-type", "application/json")
                .body(Body::from(serde_json::to_vec(&json).expect("serialize json body"))),
            None => builder.body(Body::empty()),
        }
        .expect("build request");

        self.send(request).await
    }

    /// Sends a JSON-typed request with a raw, possibly malformed body.
    pub async fn request_raw(&self, method: Method, uri: &str, body: &str) -> Response {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .expect("build request");

        self.send(request).await
    }

    async fn send(&self, request: Request<Body>) -> Response {
        self.router
            .clone()
            .oneshot(request)
            .await
            .expect("router error during test request")
    }

    /// Creates a sale through the API and returns the stored id.
    pub async fn record(&self, body: Value) -> i64 {
        let response = self.request(Method::POST, "/record-sale", Some(body)).await;
        assert_eq!(response.status(), 200, "record-sale should succeed");

        let sales = self.db.sales().list_all().await.expect("list sales");
        sales.first().expect("at least one sale").id
    }
}

pub async fn response_json(response: Response) -> Value {
    let bytes = body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("response body bytes");
    serde_json::from_slice(&bytes).expect("json response")
}

pub async fn response_text(response: Response) -> String {
    let bytes = body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("response body bytes");
    String::from_utf8(bytes.to_vec()).expect("utf-8 response")
}

/// A complete, valid sale body.
pub fn sale_body(date: &str, invoice_total: f64, amount_paid: f64) -> Value {
    json!({
        "supplier": "KONE",
        "party": "SAB MALTINGS",
        "date": date,
        "work_type": "Lifts",
        "completion_percent": 80,
        "quotation_no": "Q-2024-001",
        "po_no": "PO-7781",
        "invoice_no": "INV-2024-001",
        "invoice_total": invoice_total,
        "amount_paid": amount_paid
    })
}
