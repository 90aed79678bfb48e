//! Brand metadata service client
//!
//! Talks to a Brandfetch-style API: `GET {api_url}/brands/{domain}` with a
//! bearer token. Payloads vary between providers, so the response types are
//! forgiving about where colors and logos live.

use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::config::BrandConfig;

/// Brand lookup failures. Never surfaced past the resolver.
#[derive(Debug, Error)]
pub enum BrandLookupError {
    #[error("brand service not configured")]
    NotConfigured,

    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("brand service returned {0}")]
    Status(StatusCode),
}

/// A palette entry: either a bare hex string or an object with a `hex` field
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ColorEntry {
    Hex(String),
    Object { hex: String },
}

impl ColorEntry {
    pub fn hex(&self) -> &str {
        match self {
            ColorEntry::Hex(hex) | ColorEntry::Object { hex } => hex,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogoFormat {
    pub src: String,
    #[serde(default)]
    pub format: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Logo {
    #[serde(default)]
    pub formats: Vec<LogoFormat>,
    #[serde(default)]
    pub src: Option<String>,
    #[serde(default)]
    pub format: Option<String>,
}

/// Brand service response
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandPayload {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub brand_colors: Vec<ColorEntry>,
    #[serde(default)]
    pub colors: Vec<ColorEntry>,
    #[serde(default)]
    pub logos: Vec<Logo>,
    #[serde(default)]
    pub industry: Option<String>,
}

impl BrandPayload {
    /// Palette colors, preferring `brandColors` over `colors`
    pub fn palette(&self) -> &[ColorEntry] {
        if self.brand_colors.is_empty() {
            &self.colors
        } else {
            &self.brand_colors
        }
    }

    /// A PNG logo if one exists, otherwise the first logo of any format
    pub fn logo_url(&self) -> Option<String> {
        let candidates: Vec<(&str, Option<&str>)> = self
            .logos
            .iter()
            .flat_map(|logo| {
                let direct = logo.src.as_deref().map(|src| (src, logo.format.as_deref()));
                direct
                    .into_iter()
                    .chain(logo.formats.iter().map(|f| (f.src.as_str(), f.format.as_deref())))
            })
            .collect();

        candidates
            .iter()
            .find(|(_, format)| format.is_some_and(|f| f.eq_ignore_ascii_case("png")))
            .or_else(|| candidates.first())
            .map(|(src, _)| src.to_string())
    }
}

/// HTTP client for the brand metadata service
#[derive(Debug, Clone)]
pub struct BrandClient {
    client: Client,
    api_key: Option<String>,
    api_url: String,
}

impl BrandClient {
    /// Create a client from configuration
    pub fn new(config: &BrandConfig) -> reqwest::Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            api_key: config.api_key.clone().filter(|k| !k.is_empty()),
            api_url: config.api_url.trim_end_matches('/').to_string(),
        })
    }

    /// Check if an API key is configured
    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    /// Look up brand metadata for a bare domain
    pub async fn fetch(&self, domain: &str) -> Result<BrandPayload, BrandLookupError> {
        let api_key = self.api_key.as_ref().ok_or(BrandLookupError::NotConfigured)?;

        debug!("Fetching brand data for {}", domain);

        let response = self
            .client
            .get(format!("{}/brands/{}", self.api_url, domain))
            .bearer_auth(api_key)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(BrandLookupError::Status(response.status()));
        }

        Ok(response.json().await?)
    }
}
