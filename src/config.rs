// config.rs - Runtime configuration for the admin UI
//
// The remote product API lives at a deployment-specific address, so its
// base URL and the Authorization scheme come from the environment. In the
// browser there is no process environment; the values are baked in at
// build time instead.

use crate::web_app::error::{AdminError, Result};

pub const API_BASE_URL_VAR: &str = "MORO_API_BASE_URL";
pub const AUTH_SCHEME_VAR: &str = "MORO_AUTH_SCHEME";

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";
pub const DEFAULT_AUTH_SCHEME: &str = "Token";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminConfig {
    pub api: ApiConfig,
}

/// Where the product API is and how to authenticate against it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL without a trailing slash, e.g. `http://localhost:8000`
    pub base_url: String,
    /// Prefix placed before the token in the Authorization header
    pub auth_scheme: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            auth_scheme: DEFAULT_AUTH_SCHEME.to_string(),
        }
    }
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
        .validated()
    }

    fn validated(mut self) -> Result<Self> {
        let trimmed = self.base_url.trim().trim_end_matches('/').to_string();
        let url = reqwest::Url::parse(&trimmed)
            .map_err(|e| AdminError::Config(format!("Invalid {API_BASE_URL_VAR} value: {e}")))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(AdminError::Config(format!(
                "{API_BASE_URL_VAR} must be an http(s) URL, got {trimmed}"
            )));
        }
        self.base_url = trimmed;

        self.auth_scheme = self.auth_scheme.trim().to_string();
        if self.auth_scheme.is_empty() || self.auth_scheme.contains(char::is_whitespace) {
            return Err(AdminError::Config(format!(
                "Invalid {AUTH_SCHEME_VAR} value: {:?}",
                self.auth_scheme
            )));
        }
        Ok(self)
    }

    /// Absolute URL for an API path such as `/api/products/`
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

impl AdminConfig {
    /// Build from any key lookup, falling back to defaults for missing keys.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup(API_BASE_URL_VAR).unwrap_or_else(|| {
            tracing::info!("{API_BASE_URL_VAR} not set, using default: {DEFAULT_API_BASE_URL}");
            DEFAULT_API_BASE_URL.to_string()
        });
        let auth_scheme =
            lookup(AUTH_SCHEME_VAR).unwrap_or_else(|| DEFAULT_AUTH_SCHEME.to_string());

        let api = ApiConfig {
            base_url,
            auth_scheme,
        }
        .validated()?;

        Ok(Self { api })
    }

    /// Read the process environment (call `dotenv` first if wanted)
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok().filter(|v| !v.trim().is_empty()))
    }

    /// Values captured by the compiler when the WASM bundle was built
    pub fn from_build_env() -> Result<Self> {
        Self::from_lookup(|key| {
            let value = match key {
                API_BASE_URL_VAR => option_env!("MORO_API_BASE_URL"),
                AUTH_SCHEME_VAR => option_env!("MORO_AUTH_SCHEME"),
                _ => None,
            };
            value.map(str::to_string)
        })
    }

    /// Pick the right source for the current target
    pub fn load() -> Result<Self> {
        cfg_if::cfg_if! {
            if #[cfg(target_arch = "wasm32")] {
                Self::from_build_env()
            } else {
                Self::from_env()
            }
        }
    }
}
