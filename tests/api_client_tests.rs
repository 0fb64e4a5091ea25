// tests/api_client_tests.rs - ApiClient against a mock product API
//
// A wiremock server stands in for the remote API so these tests check the
// actual HTTP exchange: paths, verbs, the Authorization header, multipart
// field names, and how error bodies become messages.

mod common;

use serde_json::json;
use wiremock::matchers::{body_json, body_string_contains, header, header_regex, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use common::price;
use moro_admin::config::ApiConfig;
use moro_admin::web_app::api::{ApiClient, ImageUpload, ProductApi, ProductSubmission, SubmitTarget};
use moro_admin::web_app::error::AdminError;
use moro_admin::web_app::model::{AuthToken, ImageColor, LocalFile, LoginCredentials, ProductType};
use moro_admin::web_app::state::SessionGate;

fn client_for(server: &MockServer) -> ApiClient {
    let config = ApiConfig::new(server.uri()).expect("mock server uri is a valid base url");
    ApiClient::new(config).with_token(AuthToken::new("abc"))
}

fn product_json(id: i64, title: &str) -> serde_json::Value {
    json!({
        "id": id,
        "title": title,
        "description": "Ceramic mug",
        "price": "9.50",
        "product_type": "TOTEBAG",
        "available_sizes": "",
        "images": [
            {"id": 11, "image": "http://api.test/media/mug.png", "color": "", "is_featured": true, "order": 0}
        ]
    })
}

fn submission(target: SubmitTarget) -> ProductSubmission {
    ProductSubmission {
        target,
        title: "Mug".to_string(),
        description: "Ceramic mug".to_string(),
        price: price("9.5"),
        product_type: ProductType::Totebag,
        available_sizes: String::new(),
        uploads: vec![ImageUpload {
            // Plain ASCII so the body can be matched as a string
            file: LocalFile::new("mug.png", b"fake-png-bytes".to_vec()).with_content_type("image/png"),
            color: Some(ImageColor::Red),
        }],
        removed_images: vec![3, 4],
    }
}

#[tokio::test]
async fn test_list_sends_token_header() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/products/"))
        .and(header("authorization", "Token abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([product_json(1, "Mug")])))
        .expect(1)
        .mount(&server)
        .await;

    let products = client_for(&server).list_products().await?;
    assert_eq!(products.len(), 1);
    assert_eq!(products[0].title, "Mug");
    assert_eq!(products[0].price, price("9.50"));
    assert_eq!(products[0].images[0].color, None);
    assert!(products[0].images[0].is_featured);
    Ok(())
}

#[tokio::test]
async fn test_list_rejected_credential() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/products/"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"detail": "Invalid token."})),
        )
        .mount(&server)
        .await;

    let err = client_for(&server).list_products().await.unwrap_err();
    assert_eq!(err, AdminError::AuthRejected("Invalid token.".to_string()));
}

#[tokio::test]
async fn test_list_failure_without_detail_uses_fallback() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/products/"))
        .respond_with(ResponseTemplate::new(500).set_body_string("<h1>Server Error</h1>"))
        .mount(&server)
        .await;

    let err = client_for(&server).list_products().await.unwrap_err();
    assert_eq!(err.user_message(), "Failed to fetch products.");
}

#[tokio::test]
async fn test_create_posts_multipart_fields() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/products/"))
        .and(header("authorization", "Token abc"))
        .and(header_regex("content-type", "^multipart/form-data"))
        .and(body_string_contains("name=\"title\""))
        .and(body_string_contains("9.50"))
        .and(body_string_contains("name=\"uploaded_images\"; filename=\"mug.png\""))
        .and(body_string_contains("fake-png-bytes"))
        .and(body_string_contains("name=\"image_colors\""))
        .and(body_string_contains("RED"))
        .respond_with(ResponseTemplate::new(201).set_body_json(product_json(8, "Mug")))
        .expect(1)
        .mount(&server)
        .await;

    let created = client_for(&server)
        .save_product(submission(SubmitTarget::Create))
        .await?;
    assert_eq!(created.id, 8);

    // Creating never sends removed_images
    let requests = server.received_requests().await.unwrap_or_default();
    let body = String::from_utf8_lossy(&requests[0].body);
    assert!(!body.contains("removed_images"));
    Ok(())
}

#[tokio::test]
async fn test_update_puts_removed_images() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/products/8/"))
        .and(body_string_contains("name=\"removed_images\""))
        .respond_with(ResponseTemplate::new(200).set_body_json(product_json(8, "Mug")))
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server)
        .save_product(submission(SubmitTarget::Update { product_id: 8 }))
        .await?;

    let requests = server.received_requests().await.unwrap_or_default();
    let body = String::from_utf8_lossy(&requests[0].body);
    assert_eq!(body.matches("name=\"removed_images\"").count(), 2);
    Ok(())
}

#[tokio::test]
async fn test_save_error_detail_and_serialized_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/products/"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({"detail": "Image too large."})),
        )
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/api/products/8/"))
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_json(json!({"price": ["A valid number is required."]})),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client
        .save_product(submission(SubmitTarget::Create))
        .await
        .unwrap_err();
    assert_eq!(err, AdminError::ServerValidation("Image too large.".to_string()));

    let err = client
        .save_product(submission(SubmitTarget::Update { product_id: 8 }))
        .await
        .unwrap_err();
    assert_eq!(
        err.user_message(),
        r#"{"price":["A valid number is required."]}"#
    );
}

#[tokio::test]
async fn test_delete_and_its_fallback() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/products/8/"))
        .and(header("authorization", "Token abc"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/products/9/"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = client_for(&server);
    client.delete_product(8).await?;

    let err = client.delete_product(9).await.unwrap_err();
    assert_eq!(err.user_message(), "Failed to delete product.");
    Ok(())
}

#[tokio::test]
async fn test_unreachable_server_is_network_error() {
    // Nothing listens on port 1
    let config = ApiConfig::new("http://127.0.0.1:1").unwrap();
    let client = ApiClient::new(config).with_token(AuthToken::new("abc"));

    let err = client.list_products().await.unwrap_err();
    assert!(matches!(err, AdminError::Network { .. }));
    assert_eq!(err.user_message(), "Network error or server unavailable.");
}

#[tokio::test]
async fn test_login_establishes_session() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login/"))
        .and(body_json(json!({"username": "admin", "password": "secret"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "token": "9944b09199c62bcf9418ad846dd0e4bbdfc6ee4b",
            "user_id": 1,
            "email": "admin@moro.test"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = ApiClient::new(ApiConfig::new(server.uri())?);
    let mut gate = SessionGate::new();
    let session = gate
        .login(&client, &LoginCredentials::new("admin", "secret"))
        .await?;
    assert_eq!(session.email.as_deref(), Some("admin@moro.test"));
    assert_eq!(
        gate.credential().map(AuthToken::as_str),
        Some("9944b09199c62bcf9418ad846dd0e4bbdfc6ee4b")
    );
    Ok(())
}

#[tokio::test]
async fn test_login_rejected_keeps_gate_closed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login/"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "non_field_errors": ["Unable to log in with provided credentials."]
        })))
        .mount(&server)
        .await;

    let client = ApiClient::new(ApiConfig::new(server.uri()).unwrap());
    let mut gate = SessionGate::new();
    let err = gate
        .login(&client, &LoginCredentials::new("admin", "wrong"))
        .await
        .unwrap_err();

    assert_eq!(
        err,
        AdminError::AuthRejected("Unable to log in with provided credentials.".to_string())
    );
    assert!(!gate.is_authenticated());
}

#[tokio::test]
async fn test_product_calls_require_login() {
    let server = MockServer::start().await;
    let client = ApiClient::new(ApiConfig::new(server.uri()).unwrap());

    let err = client.list_products().await.unwrap_err();
    assert_eq!(err, AdminError::NotAuthenticated);
    assert!(server.received_requests().await.unwrap_or_default().is_empty());
}
