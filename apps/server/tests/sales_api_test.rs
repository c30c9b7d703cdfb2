//! Integration tests for sale create/update/list/delete.

mod common;

use axum::http::{Method, StatusCode};
use common::{response_json, sale_body, TestApp};
use serde_json::json;

// ==================== Record Sale ====================

#[tokio::test]
async fn test_record_sale_partial() {
    let app = TestApp::new().await;

    let response = app
        .request(Method::POST, "/record-sale", Some(sale_body("2024-03-15", 1000.0, 400.0)))
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body, json!({"outstanding": 600.0, "status": "Partial", "profit": 400.0}));
}

#[tokio::test]
async fn test_record_sale_paid_and_unpaid() {
    let app = TestApp::new().await;

    let paid = response_json(
        app.request(Method::POST, "/record-sale", Some(sale_body("2024-01-01", 250.0, 250.0)))
            .await,
    )
    .await;
    assert_eq!(paid["status"], "Paid");
    assert_eq!(paid["outstanding"], 0.0);

    let unpaid = response_json(
        app.request(Method::POST, "/record-sale", Some(sale_body("2024-01-01", 250.0, 0.0)))
            .await,
    )
    .await;
    assert_eq!(unpaid["status"], "Unpaid");
    assert_eq!(unpaid["profit"], 0.0);
}

#[tokio::test]
async fn test_record_sale_overpayment_is_partial() {
    let app = TestApp::new().await;

    let body = response_json(
        app.request(Method::POST, "/record-sale", Some(sale_body("2024-01-01", 100.0, 150.0)))
            .await,
    )
    .await;

    assert_eq!(body["status"], "Partial");
    assert_eq!(body["outstanding"], -50.0);
}

#[tokio::test]
async fn test_response_is_rounded_but_storage_is_not() {
    let app = TestApp::new().await;

    let body = response_json(
        app.request(Method::POST, "/record-sale", Some(sale_body("2024-01-01", 100.129, 0.0)))
            .await,
    )
    .await;
    assert_eq!(body["outstanding"], 100.13);

    let stored = app.db.sales().list_all().await.unwrap();
    assert_eq!(stored[0].outstanding, 100.129);
}

#[tokio::test]
async fn test_record_sale_accepts_values_outside_option_lists() {
    let app = TestApp::new().await;

    let mut body = sale_body("whenever", 10.0, 0.0);
    body["supplier"] = json!("Brand New Supplier");
    body["completion_percent"] = json!(140);

    let response = app.request(Method::POST, "/record-sale", Some(body)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let stored = app.db.sales().list_all().await.unwrap();
    assert_eq!(stored[0].supplier, "Brand New Supplier");
    assert_eq!(stored[0].date, "whenever");
}

#[tokio::test]
async fn test_record_sale_missing_field_is_422() {
    let app = TestApp::new().await;

    let mut body = sale_body("2024-01-01", 10.0, 0.0);
    body.as_object_mut().unwrap().remove("amount_paid");

    let response = app.request(Method::POST, "/record-sale", Some(body)).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let error = response_json(response).await;
    assert_eq!(error["code"], "VALIDATION_ERROR");
    assert!(error["message"].as_str().unwrap().contains("amount_paid"));

    assert_eq!(app.db.sales().count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_record_sale_wrong_type_is_422() {
    let app = TestApp::new().await;

    let mut body = sale_body("2024-01-01", 10.0, 0.0);
    body["invoice_total"] = json!("ten");

    let response = app.request(Method::POST, "/record-sale", Some(body)).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(response_json(response).await["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_record_sale_malformed_json_is_422() {
    let app = TestApp::new().await;

    let response = app
        .request_raw(Method::POST, "/record-sale", "{\"supplier\": ")
        .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(response_json(response).await["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_record_sale_overflowing_outstanding_is_422() {
    let app = TestApp::new().await;

    let response = app
        .request(Method::POST, "/record-sale", Some(sale_body("2024-01-01", 1.7e308, -1.7e308)))
        .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let error = response_json(response).await;
    assert_eq!(error["code"], "VALIDATION_ERROR");
    assert!(error["message"].as_str().unwrap().contains("outstanding"));

    assert_eq!(app.db.sales().count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_record_sale_rounds_ties_to_even() {
    let app = TestApp::new().await;

    let response = app
        .request(Method::POST, "/record-sale", Some(sale_body("2024-01-01", 0.125, 0.0)))
        .await;

    let body = response_json(response).await;
    assert_eq!(body["outstanding"], 0.12);
}

// ==================== Update Sale ====================

#[tokio::test]
async fn test_update_sale_recomputes_derived_fields() {
    let app = TestApp::new().await;
    let id = app.record(sale_body("2024-01-01", 500.0, 0.0)).await;

    let response = app
        .request(
            Method::PUT,
            &format!("/update-sale/{id}"),
            Some(sale_body("2024-01-01", 500.0, 500.0)),
        )
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response_json(response).await,
        json!({"outstanding": 0.0, "status": "Paid", "profit": 500.0})
    );

    let stored = app.db.sales().get_by_id(id).await.unwrap().unwrap();
    assert_eq!(stored.id, id);
    assert_eq!(stored.status, "Paid");
    assert_eq!(stored.amount_paid, 500.0);
}

#[tokio::test]
async fn test_update_unknown_id_changes_nothing() {
    let app = TestApp::new().await;
    let id = app.record(sale_body("2024-01-01", 500.0, 0.0)).await;
    let before = app.db.sales().list_all().await.unwrap();

    let response = app
        .request(
            Method::PUT,
            &format!("/update-sale/{}", id + 1000),
            Some(sale_body("2030-01-01", 1.0, 1.0)),
        )
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response_json(response).await["status"], "Paid");
    assert_eq!(app.db.sales().list_all().await.unwrap(), before);
}

#[tokio::test]
async fn test_update_non_integer_id_is_422() {
    let app = TestApp::new().await;

    let response = app
        .request(Method::PUT, "/update-sale/abc", Some(sale_body("2024-01-01", 1.0, 0.0)))
        .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(response_json(response).await["code"], "VALIDATION_ERROR");
}

// ==================== List Sales ====================

#[tokio::test]
async fn test_list_sales_empty() {
    let app = TestApp::new().await;

    let response = app.request(Method::GET, "/sales", None).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response_json(response).await, json!([]));
}

#[tokio::test]
async fn test_list_sales_newest_first_with_all_columns() {
    let app = TestApp::new().await;
    for total in [100.0, 200.0, 300.0] {
        app.record(sale_body("2024-05-01", total, 0.0)).await;
    }

    let body = response_json(app.request(Method::GET, "/sales", None).await).await;
    let rows = body.as_array().unwrap();

    assert_eq!(rows.len(), 3);
    let ids: Vec<i64> = rows.iter().map(|r| r["id"].as_i64().unwrap()).collect();
    assert!(ids.windows(2).all(|pair| pair[0] > pair[1]));
    assert_eq!(rows[0]["invoice_total"], 300.0);

    let first = rows[0].as_object().unwrap();
    for column in steez_core::EXPORT_COLUMNS {
        assert!(first.contains_key(column), "missing column {column}");
    }
}

// ==================== Delete Sale ====================

#[tokio::test]
async fn test_delete_sale_is_idempotent() {
    let app = TestApp::new().await;
    let id = app.record(sale_body("2024-01-01", 10.0, 0.0)).await;
    let uri = format!("/delete-sale/{id}");

    let first = app.request(Method::DELETE, &uri, None).await;
    assert_eq!(first.status(), StatusCode::OK);
    assert_eq!(response_json(first).await, json!({"status": "deleted"}));

    let second = app.request(Method::DELETE, &uri, None).await;
    assert_eq!(second.status(), StatusCode::OK);
    assert_eq!(response_json(second).await, json!({"status": "deleted"}));

    let listed = response_json(app.request(Method::GET, "/sales", None).await).await;
    assert_eq!(listed, json!([]));
}

#[tokio::test]
async fn test_delete_only_removes_matching_row() {
    let app = TestApp::new().await;
    let keep = app.record(sale_body("2024-01-01", 10.0, 0.0)).await;
    let gone = app.record(sale_body("2024-01-02", 20.0, 0.0)).await;

    app.request(Method::DELETE, &format!("/delete-sale/{gone}"), None).await;

    let remaining = app.db.sales().list_all().await.unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, keep);
}

// ==================== Options ====================

#[tokio::test]
async fn test_options_defaults() {
    let app = TestApp::new().await;

    let body = response_json(app.request(Method::GET, "/options", None).await).await;

    assert_eq!(body["suppliers"], json!(["KONE", "Walk-In", "Other"]));
    assert_eq!(
        body["work_types"],
        json!(["Fycor", "Quality", "Lifts", "Dismantling", "Installation"])
    );
    assert_eq!(body["parties"].as_array().unwrap().len(), 7);
}

#[tokio::test]
async fn test_options_reflect_configuration() {
    let options = steez_server::FormOptions {
        suppliers: vec!["Otis".to_string()],
        ..steez_server::FormOptions::default()
    };
    let app = TestApp::with_options(options).await;

    let body = response_json(app.request(Method::GET, "/options", None).await).await;
    assert_eq!(body["suppliers"], json!(["Otis"]));
}
