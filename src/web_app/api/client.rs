// web_app/api/client.rs - reqwest client for the remote product API
//
// Every call is a single round-trip: no retries, no timeouts beyond the
// transport's own, no cancellation. Failures are mapped to `AdminError`
// and logged here so the state layer only has to show the message.

use reqwest::header::AUTHORIZATION;
use reqwest::{RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;

use crate::config::ApiConfig;
use crate::web_app::api::{
    product_path, AuthApi, ProductApi, ProductSubmission, SubmitTarget, LOGIN_PATH, PRODUCTS_PATH,
};
use crate::web_app::error::{describe_error_body, error_from_response, AdminError, Fallback, Result};
use crate::web_app::model::{AuthToken, LoginCredentials, LoginResponse, Product};

const LIST_FALLBACK: Fallback = Fallback::Message("Failed to fetch products.");
const DELETE_FALLBACK: Fallback = Fallback::Message("Failed to delete product.");
const LOGIN_FALLBACK: Fallback = Fallback::Message("Unable to log in with provided credentials.");

/// HTTP client bound to one API base URL and, once logged in, one token
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    config: ApiConfig,
    token: Option<AuthToken>,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
            token: None,
        }
    }

    /// Same client, authenticated with `token`
    pub fn with_token(mut self, token: AuthToken) -> Self {
        self.token = Some(token);
        self
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    fn authorized(&self, builder: RequestBuilder) -> Result<RequestBuilder> {
        let token = self.token.as_ref().ok_or(AdminError::NotAuthenticated)?;
        Ok(builder.header(
            AUTHORIZATION,
            format!("{} {}", self.config.auth_scheme, token.as_str()),
        ))
    }
}

async fn send(builder: RequestBuilder, what: &str) -> Result<Response> {
    builder.send().await.map_err(|e| {
        tracing::error!("{} failed: {}", what, e);
        AdminError::network(e)
    })
}

/// Read the body, map non-2xx to an error, decode JSON otherwise
async fn decode<T: DeserializeOwned>(response: Response, fallback: Fallback) -> Result<T> {
    let status = response.status();
    let body = response.text().await.map_err(AdminError::network)?;

    if !status.is_success() {
        let err = error_from_response(status, &body, fallback);
        tracing::warn!("Request rejected with {}: {}", status, err);
        return Err(err);
    }

    serde_json::from_str(&body).map_err(|e| {
        tracing::error!("Could not decode {} response: {}", status, e);
        AdminError::Decode(e.to_string())
    })
}

impl ProductApi for ApiClient {
    async fn list_products(&self) -> Result<Vec<Product>> {
        let url = self.config.endpoint(PRODUCTS_PATH);
        tracing::info!("Fetching products from {}", url);

        let request = self.authorized(self.http.get(&url))?;
        let response = send(request, "Product list request").await?;
        let products: Vec<Product> = decode(response, LIST_FALLBACK).await?;

        tracing::info!("Fetched {} products", products.len());
        Ok(products)
    }

    async fn save_product(&self, submission: ProductSubmission) -> Result<Product> {
        let (request, action) = match submission.target {
            SubmitTarget::Create => (self.http.post(self.config.endpoint(PRODUCTS_PATH)), "create"),
            SubmitTarget::Update { product_id } => (
                self.http.put(self.config.endpoint(&product_path(product_id))),
                "update",
            ),
        };
        tracing::info!(
            "Saving product ({}): {} new images, {} removed",
            action,
            submission.uploads.len(),
            submission.removed_images.len()
        );

        let form = submission.into_multipart()?;
        let request = self.authorized(request)?.multipart(form);
        let response = send(request, "Product save request").await?;
        let product: Product = decode(response, Fallback::SerializedBody).await?;

        tracing::info!("Product {} saved ({})", product.id, action);
        Ok(product)
    }

    async fn delete_product(&self, id: i64) -> Result<()> {
        let url = self.config.endpoint(&product_path(id));
        tracing::info!("Deleting product {}", id);

        let request = self.authorized(self.http.delete(&url))?;
        let response = send(request, "Product delete request").await?;

        let status = response.status();
        if status.is_success() {
            tracing::info!("Product {} deleted", id);
            return Ok(());
        }

        let body = response.text().await.map_err(AdminError::network)?;
        let err = error_from_response(status, &body, DELETE_FALLBACK);
        tracing::warn!("Delete of product {} rejected with {}: {}", id, status, err);
        Err(err)
    }
}

impl AuthApi for ApiClient {
    async fn login(&self, credentials: &LoginCredentials) -> Result<LoginResponse> {
        let url = self.config.endpoint(LOGIN_PATH);
        tracing::info!("Logging in as {}", credentials.username);

        let response = send(self.http.post(&url).json(credentials), "Login request").await?;
        let status = response.status();

        // The token endpoint answers bad credentials with 400 + non_field_errors
        if matches!(
            status,
            StatusCode::BAD_REQUEST | StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN
        ) {
            let body = response.text().await.map_err(AdminError::network)?;
            let message = describe_error_body(status, &body, LOGIN_FALLBACK);
            tracing::warn!("Login rejected for {}: {}", credentials.username, message);
            return Err(AdminError::AuthRejected(message));
        }

        let login: LoginResponse = decode(response, LOGIN_FALLBACK).await?;
        tracing::info!("Logged in as {} (user id {:?})", credentials.username, login.user_id);
        Ok(login)
    }
}
