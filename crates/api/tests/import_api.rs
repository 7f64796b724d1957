//! HTTP-level integration tests for the contact spreadsheet import.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, post_json};
use sqlx::PgPool;

#[sqlx::test(migrations = "../db/migrations")]
async fn test_import_creates_contacts(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/contacts/import",
        serde_json::json!({"rows": [
            {"Name": "Jane Doe", "Email": "jane@acme.com", "Company": "Acme", "Type": "sub"},
            {"Name": "Bob Roy", "Email": "bob@zulu.com", "Company": "Zulu", "Type": "vendor"}
        ]}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["created"], 2);
    assert_eq!(json["updated"], 0);
    assert_eq!(json["skipped"], 0);
    assert_eq!(json["errors"].as_array().unwrap().len(), 0);

    // Loose type tokens landed as canonical names.
    let app = common::build_test_app(pool);
    let contacts = body_json(get(app, "/api/v1/contacts").await).await;
    let types: Vec<&str> = contacts
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["contact_type"].as_str().unwrap())
        .collect();
    assert!(types.contains(&"SUBCONTRACTOR"));
    assert!(types.contains(&"SUPPLIER"));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_reimport_updates_instead_of_duplicating(pool: PgPool) {
    let rows = serde_json::json!({"rows": [
        {"Name": "Jane Doe", "Email": "jane@acme.com", "Phone": "555-0100"}
    ]});

    let app = common::build_test_app(pool.clone());
    post_json(app, "/api/v1/contacts/import", rows.clone()).await;

    // Same name+email matches the existing contact; new phone overwrites.
    let app = common::build_test_app(pool.clone());
    let json = body_json(
        post_json(
            app,
            "/api/v1/contacts/import",
            serde_json::json!({"rows": [
                {"Name": "JANE DOE", "Email": "JANE@ACME.COM", "Phone": "555-0199"}
            ]}),
        )
        .await,
    )
    .await;
    assert_eq!(json["created"], 0);
    assert_eq!(json["updated"], 1);

    let app = common::build_test_app(pool);
    let contacts = body_json(get(app, "/api/v1/contacts").await).await;
    assert_eq!(contacts.as_array().unwrap().len(), 1);
    assert_eq!(contacts[0]["phone"], "555-0199");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_import_row_update_clears_absent_fields(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    post_json(
        app,
        "/api/v1/contacts/import",
        serde_json::json!({"rows": [
            {"Name": "Jane", "Email": "j@y.com", "Notes": "call after 5"}
        ]}),
    )
    .await;

    // Re-imported row has no notes column value; the field clears.
    let app = common::build_test_app(pool.clone());
    post_json(
        app,
        "/api/v1/contacts/import",
        serde_json::json!({"rows": [
            {"Name": "Jane", "Email": "j@y.com", "Notes": ""}
        ]}),
    )
    .await;

    let app = common::build_test_app(pool);
    let contacts = body_json(get(app, "/api/v1/contacts").await).await;
    assert!(contacts[0]["notes"].is_null());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_import_skips_rows_without_name(pool: PgPool) {
    let app = common::build_test_app(pool);
    let json = body_json(
        post_json(
            app,
            "/api/v1/contacts/import",
            serde_json::json!({"rows": [
                {"Name": "", "Email": "x@y.com"},
                {"Name": "Jane", "Email": "jane@acme.com"}
            ]}),
        )
        .await,
    )
    .await;
    assert_eq!(json["created"], 1);
    assert_eq!(json["skipped"], 1);
    assert_eq!(json["errors"][0], "Row 2: skipped — no name.");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_import_empty_upload_is_structural_error(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/contacts/import",
        serde_json::json!({"rows": []}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["created"], 0);
    assert_eq!(json["skipped"], 0);
    assert_eq!(json["errors"][0], "The spreadsheet appears to be empty.");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_import_normalizes_loose_headers(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let json = body_json(
        post_json(
            app,
            "/api/v1/contacts/import",
            serde_json::json!({"rows": [
                {"Contact Name": "Jane", "E-Mail": "j@y.com", "Sub-Category": "Rebar", "Org": "Dropped"}
            ]}),
        )
        .await,
    )
    .await;
    assert_eq!(json["created"], 1);

    let app = common::build_test_app(pool);
    let contacts = body_json(get(app, "/api/v1/contacts").await).await;
    assert_eq!(contacts[0]["name"], "Jane");
    assert_eq!(contacts[0]["email"], "j@y.com");
    assert_eq!(contacts[0]["sub_category"], "Rebar");
    // "Org" matches no header synonym, so its value is dropped.
    assert!(contacts[0]["company"].is_null());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_import_duplicate_rows_warn_in_errors(pool: PgPool) {
    let app = common::build_test_app(pool);
    let json = body_json(
        post_json(
            app,
            "/api/v1/contacts/import",
            serde_json::json!({"rows": [
                {"Name": "Jane", "Email": "j@y.com"},
                {"Name": "Jane", "Email": "j@y.com"}
            ]}),
        )
        .await,
    )
    .await;
    // Both rows insert; the collision is surfaced as a warning, not a skip.
    assert_eq!(json["created"], 2);
    assert_eq!(json["skipped"], 0);
    let errors = json["errors"].as_array().unwrap();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].as_str().unwrap().contains("last write wins"));
}
