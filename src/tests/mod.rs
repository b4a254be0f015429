//! End-to-end tests driving the full router: authentication middleware,
//! policy checks, validation, audit writes, and the response envelope.

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;
use uuid::Uuid;

use crate::{
    AppState, build_app, config, db,
    models::{AuditLogQuery, EntityKind},
};

async fn test_app() -> (Router, AppState) {
    let pool = Arc::new(db::test_pool().await);
    let config = config::AppConfig::default();
    let state = AppState::from_parts(config.clone(), pool);
    (build_app(&config, state.clone()), state)
}

async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    let request = match body {
        Some(value) => builder
            .header("content-type", "application/json")
            .body(Body::from(value.to_string()))
            .expect("valid request"),
        None => builder.body(Body::empty()).expect("valid request"),
    };

    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("request should complete");
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should collect")
        .to_bytes();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

/// Register a user and return `(token, user_id)`.
async fn register(app: &Router, email: &str, role: &str, customer_id: Option<&str>) -> (String, String) {
    let mut payload = json!({
        "email": email,
        "password": "longenough",
        "name": "Test User",
        "role": role,
    });
    if let Some(customer_id) = customer_id {
        payload["customer_id"] = json!(customer_id);
    }

    let (status, body) = send(app, "POST", "/auth/register", None, Some(payload)).await;
    assert_eq!(status, StatusCode::CREATED, "register failed: {body}");
    (
        body["data"]["token"].as_str().expect("token present").to_string(),
        body["data"]["user"]["id"]
            .as_str()
            .expect("user id present")
            .to_string(),
    )
}

fn customer_payload(name: &str) -> Value {
    json!({
        "customer_name": name,
        "contact_person": "Dana Voss",
        "contact_number": "+1 555 010 7788",
        "email_address": "dana@meridian.example",
        "industry_type": "Maritime",
        "customer_status": "Active",
    })
}

async fn create_customer(app: &Router, token: &str, name: &str) -> String {
    let (status, body) = send(
        app,
        "POST",
        "/customers",
        Some(token),
        Some(customer_payload(name)),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "customer create failed: {body}");
    body["data"]["id"].as_str().expect("id present").to_string()
}

fn case_payload(client_id: &str, status: &str) -> Value {
    json!({
        "case_title": "Meridian v. Harbor Authority",
        "client_id": client_id,
        "case_type": "Civil",
        "case_status": status,
        "filing_date": "2024-03-01",
        "court_name": "District Court",
    })
}

// ==================== Auth ====================

#[tokio::test]
async fn test_register_returns_token_and_password_free_user() {
    let (app, _) = test_app().await;

    let (status, body) = send(
        &app,
        "POST",
        "/auth/register",
        None,
        Some(json!({
            "email": "a@b.com",
            "password": "longenough",
            "name": "A",
            "role": "Attorney",
        })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["success"], true);
    assert!(body["data"]["token"].as_str().is_some());
    assert_eq!(body["data"]["user"]["email"], "a@b.com");
    assert_eq!(body["data"]["user"]["role"], "Attorney");
    assert!(body["data"]["user"].get("password").is_none());
    assert!(body["data"]["user"].get("password_hash").is_none());
}

#[tokio::test]
async fn test_register_duplicate_email_rejected() {
    let (app, _) = test_app().await;
    register(&app, "a@b.com", "Attorney", None).await;

    let (status, body) = send(
        &app,
        "POST",
        "/auth/register",
        None,
        Some(json!({
            "email": "A@B.com",
            "password": "longenough",
            "name": "A",
            "role": "Paralegal",
        })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Email already registered");
}

#[tokio::test]
async fn test_register_validation_errors() {
    let (app, _) = test_app().await;

    let (status, body) = send(
        &app,
        "POST",
        "/auth/register",
        None,
        Some(json!({
            "email": "a@b.com",
            "password": "short",
            "name": "A",
            "role": "Attorney",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Password must be at least 8 characters");

    let (status, body) = send(
        &app,
        "POST",
        "/auth/register",
        None,
        Some(json!({
            "email": "a@b.com",
            "password": "longenough",
            "name": "A",
            "role": "Intern",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid role");
}

#[tokio::test]
async fn test_login_and_bad_password() {
    let (app, _) = test_app().await;
    register(&app, "pat@firm.example", "Admin", None).await;

    let (status, body) = send(
        &app,
        "POST",
        "/auth/login",
        None,
        Some(json!({ "email": "PAT@firm.example", "password": "longenough" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "login failed: {body}");
    assert!(body["data"]["token"].as_str().is_some());

    let (status, body) = send(
        &app,
        "POST",
        "/auth/login",
        None,
        Some(json!({ "email": "pat@firm.example", "password": "wrong-password" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Invalid email or password");
}

#[tokio::test]
async fn test_protected_routes_require_token() {
    let (app, _) = test_app().await;

    let (status, _) = send(&app, "GET", "/customers", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = send(&app, "GET", "/customers", Some("not-a-real-token"), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = send(&app, "GET", "/dashboard/stats", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

// ==================== Customers ====================

#[tokio::test]
async fn test_customer_crud_and_audit_trail() {
    let (app, state) = test_app().await;
    let (token, user_id) = register(&app, "staff@firm.example", "Paralegal", None).await;

    let customer_id = create_customer(&app, &token, "Meridian Shipping").await;
    let customer_uuid = Uuid::parse_str(&customer_id).expect("valid uuid");

    // Update with a changed name.
    let mut update = customer_payload("Meridian Shipping Ltd");
    update["customer_status"] = json!("Inactive");
    let (status, body) = send(
        &app,
        "PUT",
        &format!("/customers/{customer_id}"),
        Some(&token),
        Some(update),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "update failed: {body}");
    assert_eq!(body["data"]["customer_name"], "Meridian Shipping Ltd");

    // Delete.
    let (status, _) = send(
        &app,
        "DELETE",
        &format!("/customers/{customer_id}"),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    // Exactly one audit entry per mutation, newest first.
    let entries = state
        .services
        .audit_logs
        .query(AuditLogQuery {
            entity_type: Some(EntityKind::Customer),
            entity_id: Some(customer_uuid),
            ..Default::default()
        })
        .await;
    let actions: Vec<&str> = entries
        .iter()
        .map(|e| e.action.as_str())
        .collect();
    assert_eq!(actions, vec!["DELETE", "UPDATE", "CREATE"]);
    assert!(entries.iter().all(|e| e.actor_id.to_string() == user_id));

    // The update entry carries before/after snapshots.
    let update_entry = &entries[1];
    let changes = update_entry.changes.as_ref().expect("changes present");
    assert_eq!(changes["before"]["customer_name"], "Meridian Shipping");
    assert_eq!(changes["after"]["customer_name"], "Meridian Shipping Ltd");

    // Repeating the delete is a 404 and writes no further entry.
    let (status, _) = send(
        &app,
        "DELETE",
        &format!("/customers/{customer_id}"),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let entries_after = state
        .services
        .audit_logs
        .query(AuditLogQuery {
            entity_type: Some(EntityKind::Customer),
            entity_id: Some(customer_uuid),
            ..Default::default()
        })
        .await;
    assert_eq!(entries_after.len(), 3);
}

#[tokio::test]
async fn test_customer_field_validation_errors() {
    let (app, _) = test_app().await;
    let (token, _) = register(&app, "staff@firm.example", "Admin", None).await;

    let (status, body) = send(
        &app,
        "POST",
        "/customers",
        Some(&token),
        Some(json!({
            "customer_name": "",
            "contact_person": "Dana",
            "contact_number": "123",
            "email_address": "nope",
        })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["errors"]["customer_name"], "Customer name is required");
    assert_eq!(body["errors"]["email_address"], "Valid email is required");
    assert_eq!(
        body["errors"]["contact_number"],
        "Valid phone number is required"
    );
}

#[tokio::test]
async fn test_client_role_cannot_manage_customers() {
    let (app, _) = test_app().await;
    let (staff_token, _) = register(&app, "staff@firm.example", "Attorney", None).await;
    let customer_id = create_customer(&app, &staff_token, "Meridian Shipping").await;

    let (client_token, _) =
        register(&app, "client@co.example", "Client", Some(&customer_id)).await;

    let (status, _) = send(
        &app,
        "POST",
        "/customers",
        Some(&client_token),
        Some(customer_payload("Rogue Co")),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = send(
        &app,
        "DELETE",
        &format!("/customers/{customer_id}"),
        Some(&client_token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_client_list_narrowed_to_own_rows() {
    let (app, _) = test_app().await;
    let (staff_token, _) = register(&app, "staff@firm.example", "Admin", None).await;
    let mine = create_customer(&app, &staff_token, "Mine Inc").await;
    let _other = create_customer(&app, &staff_token, "Other Inc").await;

    let (client_token, _) = register(&app, "client@co.example", "Client", Some(&mine)).await;

    let (status, body) = send(&app, "GET", "/customers", Some(&client_token), None).await;
    assert_eq!(status, StatusCode::OK);
    let rows = body["data"].as_array().expect("array");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["customer_name"], "Mine Inc");

    // Staff sees both.
    let (_, body) = send(&app, "GET", "/customers", Some(&staff_token), None).await;
    assert_eq!(body["data"].as_array().expect("array").len(), 2);

    // Single-record access to the other customer is denied.
    let other_id = body["data"]
        .as_array()
        .expect("array")
        .iter()
        .find(|c| c["customer_name"] == "Other Inc")
        .and_then(|c| c["id"].as_str())
        .expect("other id")
        .to_string();
    let (status, _) = send(
        &app,
        "GET",
        &format!("/customers/{other_id}"),
        Some(&client_token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

// ==================== Cases ====================

#[tokio::test]
async fn test_case_attorney_assignment_validated() {
    let (app, _) = test_app().await;
    let (attorney_token, attorney_id) =
        register(&app, "attorney@firm.example", "Attorney", None).await;
    let (_, paralegal_id) = register(&app, "paralegal@firm.example", "Paralegal", None).await;
    let client_id = create_customer(&app, &attorney_token, "Meridian Shipping").await;

    // Assigning a paralegal as attorney is rejected.
    let mut payload = case_payload(&client_id, "Open");
    payload["assigned_attorney"] = json!(paralegal_id);
    let (status, body) = send(&app, "POST", "/cases", Some(&attorney_token), Some(payload)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid attorney assignment");

    // Assigning a real attorney works; the same rule guards updates.
    let mut payload = case_payload(&client_id, "Open");
    payload["assigned_attorney"] = json!(attorney_id);
    let (status, body) = send(&app, "POST", "/cases", Some(&attorney_token), Some(payload)).await;
    assert_eq!(status, StatusCode::CREATED, "case create failed: {body}");
    let case_id = body["data"]["id"].as_str().expect("id").to_string();
    assert_eq!(body["data"]["attorney_name"], "Test User");

    let mut payload = case_payload(&client_id, "Open");
    payload["assigned_attorney"] = json!(paralegal_id);
    let (status, body) = send(
        &app,
        "PUT",
        &format!("/cases/{case_id}"),
        Some(&attorney_token),
        Some(payload),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid attorney assignment");
}

#[tokio::test]
async fn test_case_unknown_client_rejected() {
    let (app, _) = test_app().await;
    let (token, _) = register(&app, "attorney@firm.example", "Attorney", None).await;

    let (status, body) = send(
        &app,
        "POST",
        "/cases",
        Some(&token),
        Some(case_payload(&Uuid::new_v4().to_string(), "New")),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Client not found");
}

#[tokio::test]
async fn test_case_status_filter_newest_first() {
    let (app, _) = test_app().await;
    let (token, _) = register(&app, "attorney@firm.example", "Attorney", None).await;
    let client_id = create_customer(&app, &token, "Meridian Shipping").await;

    for status_name in ["Closed", "Open", "Closed"] {
        let (status, body) = send(
            &app,
            "POST",
            "/cases",
            Some(&token),
            Some(case_payload(&client_id, status_name)),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED, "case create failed: {body}");
        tokio::time::sleep(tokio::time::Duration::from_millis(5)).await;
    }

    let (status, body) = send(&app, "GET", "/cases?status=Closed", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    let rows = body["data"].as_array().expect("array");
    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|c| c["case_status"] == "Closed"));
    let first = chrono::DateTime::parse_from_rfc3339(
        rows[0]["created_at"].as_str().expect("timestamp"),
    )
    .expect("valid timestamp");
    let second = chrono::DateTime::parse_from_rfc3339(
        rows[1]["created_at"].as_str().expect("timestamp"),
    )
    .expect("valid timestamp");
    assert!(first >= second);
}

#[tokio::test]
async fn test_customer_delete_blocked_by_active_case() {
    let (app, _) = test_app().await;
    let (token, _) = register(&app, "attorney@firm.example", "Attorney", None).await;
    let client_id = create_customer(&app, &token, "Meridian Shipping").await;

    let (_, body) = send(
        &app,
        "POST",
        "/cases",
        Some(&token),
        Some(case_payload(&client_id, "Open")),
    )
    .await;
    let case_id = body["data"]["id"].as_str().expect("id").to_string();

    // Blocked while the case is open.
    let (status, body) = send(
        &app,
        "DELETE",
        &format!("/customers/{client_id}"),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Cannot delete customer with active cases");

    // Closing the case unblocks deletion.
    let (status, _) = send(
        &app,
        "PUT",
        &format!("/cases/{case_id}"),
        Some(&token),
        Some(case_payload(&client_id, "Closed")),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(
        &app,
        "DELETE",
        &format!("/customers/{client_id}"),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_case_delete_hearing_date_boundary() {
    let (app, _) = test_app().await;
    let (token, _) = register(&app, "attorney@firm.example", "Attorney", None).await;
    let client_id = create_customer(&app, &token, "Meridian Shipping").await;
    let today = chrono::Utc::now().date_naive();

    // Hearing tomorrow: delete is blocked.
    let mut payload = case_payload(&client_id, "Open");
    payload["hearing_date"] = json!((today + chrono::Duration::days(1)).to_string());
    let (_, body) = send(&app, "POST", "/cases", Some(&token), Some(payload)).await;
    let blocked_id = body["data"]["id"].as_str().expect("id").to_string();

    let (status, body) = send(
        &app,
        "DELETE",
        &format!("/cases/{blocked_id}"),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Cannot delete case with future hearing date");

    // Hearing yesterday: delete succeeds, and a repeat is a 404.
    let mut payload = case_payload(&client_id, "Open");
    payload["hearing_date"] = json!((today - chrono::Duration::days(1)).to_string());
    let (_, body) = send(&app, "POST", "/cases", Some(&token), Some(payload)).await;
    let open_id = body["data"]["id"].as_str().expect("id").to_string();

    let (status, _) = send(&app, "DELETE", &format!("/cases/{open_id}"), Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = send(&app, "DELETE", &format!("/cases/{open_id}"), Some(&token), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_paralegal_cannot_manage_cases() {
    let (app, _) = test_app().await;
    let (token, _) = register(&app, "paralegal@firm.example", "Paralegal", None).await;
    let client_id = create_customer(&app, &token, "Meridian Shipping").await;

    let (status, _) = send(
        &app,
        "POST",
        "/cases",
        Some(&token),
        Some(case_payload(&client_id, "New")),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

// ==================== Engagements & documents ====================

#[tokio::test]
async fn test_engagement_crud_with_audit() {
    let (app, state) = test_app().await;
    let (token, _) = register(&app, "staff@firm.example", "Paralegal", None).await;
    let client_id = create_customer(&app, &token, "Meridian Shipping").await;

    let (status, body) = send(
        &app,
        "POST",
        "/engagements",
        Some(&token),
        Some(json!({
            "client_id": client_id,
            "engagement_type": "Meeting",
            "engagement_date": "2024-05-20",
            "engagement_channel": "In-Person",
            "engagement_outcome": "Retainer signed",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "engagement create failed: {body}");
    let engagement_id = body["data"]["id"].as_str().expect("id").to_string();
    assert_eq!(body["data"]["customer_name"], "Meridian Shipping");

    let (status, body) = send(
        &app,
        "GET",
        &format!("/engagements?type=Meeting&client={client_id}"),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().expect("array").len(), 1);

    let (status, _) = send(
        &app,
        "DELETE",
        &format!("/engagements/{engagement_id}"),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let entries = state
        .services
        .audit_logs
        .query(AuditLogQuery {
            entity_type: Some(EntityKind::Engagement),
            ..Default::default()
        })
        .await;
    let actions: Vec<&str> = entries.iter().map(|e| e.action.as_str()).collect();
    assert_eq!(actions, vec!["DELETE", "CREATE"]);
}

#[tokio::test]
async fn test_engagement_bad_enum_values() {
    let (app, _) = test_app().await;
    let (token, _) = register(&app, "staff@firm.example", "Admin", None).await;
    let client_id = create_customer(&app, &token, "Meridian Shipping").await;

    let (status, body) = send(
        &app,
        "POST",
        "/engagements",
        Some(&token),
        Some(json!({
            "client_id": client_id,
            "engagement_type": "Seance",
            "engagement_date": "2024-05-20",
            "engagement_channel": "Fax",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["errors"]["engagement_type"],
        "Valid engagement type is required"
    );
    assert_eq!(
        body["errors"]["engagement_channel"],
        "Valid engagement channel is required"
    );
}

#[tokio::test]
async fn test_documents_create_and_list() {
    let (app, state) = test_app().await;
    let (token, _) = register(&app, "staff@firm.example", "Attorney", None).await;
    let client_id = create_customer(&app, &token, "Meridian Shipping").await;

    let (status, body) = send(
        &app,
        "POST",
        "/documents",
        Some(&token),
        Some(json!({
            "entity_type": "customer",
            "entity_id": client_id,
            "document_name": "Engagement letter",
            "document_url": "https://files.example/letter.pdf",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "document create failed: {body}");
    assert!(
        body["data"]["document_id"]
            .as_str()
            .expect("document id")
            .starts_with("DOC-")
    );

    let (status, body) = send(
        &app,
        "GET",
        &format!("/documents?entity_type=customer&entity_id={client_id}"),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().expect("array").len(), 1);

    // Document uploads are not audit-tracked: the only entry on record is
    // the customer creation above.
    let entries = state.services.audit_logs.query(AuditLogQuery::default()).await;
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].entity_type, EntityKind::Customer);
}

// ==================== Dashboard & reports ====================

#[tokio::test]
async fn test_dashboard_stats_shape() {
    let (app, _) = test_app().await;
    let (token, _) = register(&app, "staff@firm.example", "Paralegal", None).await;
    create_customer(&app, &token, "Meridian Shipping").await;

    let (status, body) = send(&app, "GET", "/dashboard/stats", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["customers"]["total"], 1);
    assert_eq!(body["data"]["customers"]["active"], 1);
    assert_eq!(body["data"]["cases"]["total"], 0);
    assert!(body["data"]["upcoming_hearings"].as_array().is_some());
    assert_eq!(
        body["data"]["recent_activity"].as_array().expect("array").len(),
        1
    );
}

#[tokio::test]
async fn test_reports_role_gate() {
    let (app, _) = test_app().await;
    let (paralegal_token, _) = register(&app, "paralegal@firm.example", "Paralegal", None).await;
    let (attorney_token, _) = register(&app, "attorney@firm.example", "Attorney", None).await;

    let (status, body) = send(&app, "GET", "/reports/cases", Some(&paralegal_token), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["error"], "Insufficient permissions");

    let (status, body) = send(&app, "GET", "/reports/cases", Some(&attorney_token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["data"]["cases"].as_array().is_some());
    assert!(body["data"]["attorney_workload"].as_array().is_some());

    let (status, _) = send(
        &app,
        "GET",
        "/reports/engagements?type=Meeting",
        Some(&attorney_token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_health_endpoint_is_public() {
    let (app, _) = test_app().await;
    let (status, body) = send(&app, "GET", "/health", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["database"], true);
}
