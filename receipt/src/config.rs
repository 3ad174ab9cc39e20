use anyhow::Result;
use std::env;

pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:8000";
pub const API_BASE_ENV: &str = "DECISION_RECEIPT_API_BASE";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: &str) -> Result<Self> {
        let base_url = base_url.trim().trim_end_matches('/');

        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(anyhow::anyhow!(
                "API base must be an http(s) URL, got {:?}",
                base_url
            ));
        }

        Ok(Self {
            base_url: base_url.to_string(),
        })
    }

    /// Reads `DECISION_RECEIPT_API_BASE`, falling back to the built-in address.
    pub fn from_env() -> Result<Self> {
        match env::var(API_BASE_ENV) {
            Ok(value) if !value.trim().is_empty() => Self::new(&value),
            _ => Ok(Self::default()),
        }
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE.to_string(),
        }
    }
}
