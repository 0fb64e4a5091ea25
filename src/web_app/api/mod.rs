// web_app/api/mod.rs - Remote product API access
//
// The catalog is owned by a remote REST API. The traits here are the seams
// the state layer talks to; `client::ApiClient` is the reqwest-backed
// implementation used in the browser and on the server alike.

pub mod client;
pub mod form;

pub use client::ApiClient;
pub use form::{ImageUpload, ProductSubmission, SubmitTarget};

use crate::web_app::error::Result;
use crate::web_app::model::{LoginCredentials, LoginResponse, Product};

pub const PRODUCTS_PATH: &str = "/api/products/";
pub const LOGIN_PATH: &str = "/api/auth/login/";

/// Path of a single product
pub fn product_path(id: i64) -> String {
    format!("{PRODUCTS_PATH}{id}/")
}

/// Catalog CRUD against the remote API
#[allow(async_fn_in_trait)]
pub trait ProductApi {
    async fn list_products(&self) -> Result<Vec<Product>>;

    /// POST for [`SubmitTarget::Create`], PUT for [`SubmitTarget::Update`]
    async fn save_product(&self, submission: ProductSubmission) -> Result<Product>;

    async fn delete_product(&self, id: i64) -> Result<()>;
}

/// Token issuance
#[allow(async_fn_in_trait)]
pub trait AuthApi {
    async fn login(&self, credentials: &LoginCredentials) -> Result<LoginResponse>;
}
