//! Integration tests for the read-only catalog endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, get};

// ---------------------------------------------------------------------------
// Test: every catalog collection returns a non-empty data array
// ---------------------------------------------------------------------------

#[tokio::test]
async fn catalog_collections_return_data_arrays() {
    let app = common::build_test_app();

    for path in [
        "/api/v1/sources",
        "/api/v1/destinations",
        "/api/v1/connections",
        "/api/v1/fanouts",
    ] {
        let response = get(app.clone(), path).await;
        assert_eq!(response.status(), StatusCode::OK, "{path}");

        let json = body_json(response).await;
        let data = json["data"].as_array().expect("data must be an array");
        assert!(!data.is_empty(), "{path} returned an empty array");
    }
}

// ---------------------------------------------------------------------------
// Test: sources carry id, name, and status fields
// ---------------------------------------------------------------------------

#[tokio::test]
async fn sources_have_expected_shape() {
    let app = common::build_test_app();
    let response = get(app, "/api/v1/sources").await;

    let json = body_json(response).await;
    let first = &json["data"][0];

    assert_eq!(first["id"], "src-1");
    assert_eq!(first["name"], "Postgres");
    assert_eq!(first["status"], "ready");
}

// ---------------------------------------------------------------------------
// Test: fan-outs expose their ordered destination list
// ---------------------------------------------------------------------------

#[tokio::test]
async fn fanouts_expose_destination_lists() {
    let app = common::build_test_app();
    let response = get(app, "/api/v1/fanouts").await;

    let json = body_json(response).await;
    let first = &json["data"][0];

    assert_eq!(first["sourceId"], "src-1");
    assert_eq!(first["destinationIds"][0], "dst-1");
    assert_eq!(first["destinationIds"][1], "dst-2");
}

// ---------------------------------------------------------------------------
// Test: connections use camelCase wire names
// ---------------------------------------------------------------------------

#[tokio::test]
async fn connections_use_camel_case_keys() {
    let app = common::build_test_app();
    let response = get(app, "/api/v1/connections").await;

    let json = body_json(response).await;
    let first = &json["data"][0];

    assert_eq!(first["sourceId"], "src-1");
    assert_eq!(first["destinationId"], "dst-1");
}
