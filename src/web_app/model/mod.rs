// web_app/model/mod.rs - Shared data models for client and server
//
// These structs mirror the remote product API's JSON payloads and are used
// throughout the admin UI for type-safe communication with that API.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

/// Product kind; decides whether sizes are meaningful
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProductType {
    #[default]
    #[serde(rename = "TOTEBAG")]
    Totebag,
    #[serde(rename = "TSHIRT")]
    Tshirt,
}

impl ProductType {
    pub const ALL: [ProductType; 2] = [ProductType::Totebag, ProductType::Tshirt];

    /// Wire value sent in the `product_type` form field
    pub fn as_str(self) -> &'static str {
        match self {
            ProductType::Totebag => "TOTEBAG",
            ProductType::Tshirt => "TSHIRT",
        }
    }

    /// Whether `available_sizes` is transmitted for this type
    pub fn has_sizes(self) -> bool {
        matches!(self, ProductType::Tshirt)
    }
}

impl fmt::Display for ProductType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProductType::Totebag => write!(f, "Totebag"),
            ProductType::Tshirt => write!(f, "T-Shirt"),
        }
    }
}

impl FromStr for ProductType {
    type Err = ParseVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProductType::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseVariantError::new("product type", s))
    }
}

/// Color tag attached to a product image
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ImageColor {
    White,
    Black,
    Red,
    Blue,
    Green,
    Yellow,
}

impl ImageColor {
    pub const ALL: [ImageColor; 6] = [
        ImageColor::White,
        ImageColor::Black,
        ImageColor::Red,
        ImageColor::Blue,
        ImageColor::Green,
        ImageColor::Yellow,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ImageColor::White => "WHITE",
            ImageColor::Black => "BLACK",
            ImageColor::Red => "RED",
            ImageColor::Blue => "BLUE",
            ImageColor::Green => "GREEN",
            ImageColor::Yellow => "YELLOW",
        }
    }

    /// Parse a select-box value; the blank option means "no color".
    pub fn parse_optional(value: &str) -> Result<Option<ImageColor>, ParseVariantError> {
        if value.trim().is_empty() {
            Ok(None)
        } else {
            value.parse().map(Some)
        }
    }
}

impl fmt::Display for ImageColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ImageColor::White => "White",
            ImageColor::Black => "Black",
            ImageColor::Red => "Red",
            ImageColor::Blue => "Blue",
            ImageColor::Green => "Green",
            ImageColor::Yellow => "Yellow",
        };
        f.write_str(label)
    }
}

impl FromStr for ImageColor {
    type Err = ParseVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ImageColor::ALL
            .into_iter()
            .find(|color| color.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseVariantError::new("image color", s))
    }
}

/// Returned when a select value does not name a known variant
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind}: {value:?}")]
pub struct ParseVariantError {
    kind: &'static str,
    value: String,
}

impl ParseVariantError {
    fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

/// Persisted product image as returned by the API
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProductImage {
    pub id: i64,
    /// Absolute or server-relative URL of the stored image
    pub image: String,
    #[serde(default, deserialize_with = "blank_color_as_none")]
    pub color: Option<ImageColor>,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default)]
    pub order: u32,
}

/// Product from the remote catalog
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub price: Decimal,
    #[serde(default)]
    pub product_type: ProductType,
    #[serde(default)]
    pub available_sizes: Option<String>,
    #[serde(default)]
    pub images: Vec<ProductImage>,
}

impl Product {
    /// Size tokens for T-shirts, empty for every other type.
    pub fn sizes(&self) -> Vec<&str> {
        if !self.product_type.has_sizes() {
            return Vec::new();
        }
        split_sizes(self.available_sizes.as_deref().unwrap_or_default())
    }

    pub fn price_display(&self) -> String {
        format!("${:.2}", self.price)
    }
}

/// Split a comma-separated size list into trimmed, non-empty tokens
pub fn split_sizes(raw: &str) -> Vec<&str> {
    raw.split(',')
        .map(str::trim)
        .filter(|size| !size.is_empty())
        .collect()
}

/// A file picked by the admin that has not been uploaded yet
#[derive(Clone, PartialEq, Eq)]
pub struct LocalFile {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl LocalFile {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: None,
            bytes,
        }
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }
}

impl fmt::Debug for LocalFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocalFile")
            .field("file_name", &self.file_name)
            .field("content_type", &self.content_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// Username/password pair posted to the token endpoint
#[derive(Clone, Serialize)]
pub struct LoginCredentials {
    pub username: String,
    pub password: String,
}

impl LoginCredentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for LoginCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginCredentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Opaque session token attached to every API call
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuthToken(String);

impl AuthToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AuthToken(<redacted>)")
    }
}

/// Token endpoint response
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: AuthToken,
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub email: Option<String>,
}

// The API stores "" when an image was uploaded without a color
fn blank_color_as_none<'de, D>(deserializer: D) -> Result<Option<ImageColor>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw {
        None => Ok(None),
        Some(value) => ImageColor::parse_optional(&value).map_err(serde::de::Error::custom),
    }
}
