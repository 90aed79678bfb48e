//! Brand resolution
//!
//! Turns a brand URL into a [`BrandProfile`]:
//! - Bare-domain normalization
//! - Optional lookup against the brand metadata service
//! - Keyword-based industry fallback for anything the lookup didn't supply
//!
//! Resolution is best-effort. Lookup failures are logged and replaced by the
//! fallback profile; the caller only ever sees `Some(profile)` or `None` (no URL).

mod client;
pub mod industry;

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::color;
use crate::config::BrandConfig;
pub use client::{BrandClient, BrandLookupError, BrandPayload};
pub use industry::{IndustryProfile, DEFAULT_TONE};

/// Maximum number of palette colors kept from a brand
pub const MAX_BRAND_COLORS: usize = 3;

/// Where a profile's data came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BrandSource {
    /// The brand service answered (fallback may still fill gaps)
    Lookup,
    /// Keyword fallback only
    Fallback,
}

/// Resolved brand identity
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandProfile {
    pub name: String,
    pub colors: Vec<String>,
    pub industry: Option<String>,
    pub tone: String,
    pub logo_url: Option<String>,
    pub source: BrandSource,
}

impl BrandProfile {
    /// One-line summary for LLM prompts and logs
    pub fn summary(&self) -> String {
        format!(
            "{} (industry: {}, tone: {}, colors: {})",
            self.name,
            self.industry.as_deref().unwrap_or("unknown"),
            self.tone,
            if self.colors.is_empty() {
                "none".to_string()
            } else {
                self.colors.join(", ")
            }
        )
    }
}

/// Reduce a URL to its bare, lowercase domain
///
/// `"https://www.ExampleShop.com/page"` becomes `"exampleshop.com"`. Ports,
/// queries and fragments are dropped along with the path.
pub fn normalize_domain(url: &str) -> String {
    let mut rest = url.trim();

    for scheme in ["https://", "http://"] {
        if let Some(stripped) = strip_prefix_ignore_case(rest, scheme) {
            rest = stripped;
            break;
        }
    }

    if let Some(stripped) = strip_prefix_ignore_case(rest, "www.") {
        rest = stripped;
    }

    rest.split(['/', '?', '#', ':'])
        .next()
        .unwrap_or_default()
        .to_lowercase()
}

fn strip_prefix_ignore_case<'a>(s: &'a str, prefix: &str) -> Option<&'a str> {
    let head = s.get(..prefix.len())?;
    if head.eq_ignore_ascii_case(prefix) {
        s.get(prefix.len()..)
    } else {
        None
    }
}

/// Capitalize the first character of a word, lowercasing the rest
pub fn capitalize(word: &str) -> String {
    let lower = word.to_lowercase();
    let mut chars = lower.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Display name derived from the first label of a domain
pub fn name_from_domain(domain: &str) -> String {
    capitalize(domain.split('.').next().unwrap_or(domain))
}

/// Build the profile for a domain from an optional lookup result
fn build_profile(domain: &str, payload: Option<BrandPayload>) -> BrandProfile {
    let Some(payload) = payload else {
        let name = name_from_domain(domain);
        let fallback = industry::detect(&name, domain, None);
        return BrandProfile {
            name,
            colors: fallback.colors.iter().map(|c| c.to_string()).collect(),
            industry: Some(fallback.sector.to_string()),
            tone: fallback.tone.to_string(),
            logo_url: None,
            source: BrandSource::Fallback,
        };
    };

    let name = payload
        .name
        .as_deref()
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| name_from_domain(domain));

    let industry_label = payload
        .industry
        .as_deref()
        .map(str::trim)
        .filter(|i| !i.is_empty());
    let fallback = industry::detect(&name, domain, industry_label);

    let mut colors: Vec<String> = payload
        .palette()
        .iter()
        .filter_map(|entry| color::normalize(entry.hex()))
        .take(MAX_BRAND_COLORS)
        .collect();
    if colors.is_empty() {
        colors = fallback.colors.iter().map(|c| c.to_string()).collect();
    }

    BrandProfile {
        name,
        colors,
        industry: Some(industry_label.unwrap_or(fallback.sector).to_string()),
        tone: fallback.tone.to_string(),
        logo_url: payload.logo_url(),
        source: BrandSource::Lookup,
    }
}

/// Resolves brand URLs into profiles
#[derive(Debug, Clone)]
pub struct BrandResolver {
    client: BrandClient,
}

impl BrandResolver {
    pub fn new(config: &BrandConfig) -> reqwest::Result<Self> {
        Ok(Self {
            client: BrandClient::new(config)?,
        })
    }

    /// Resolve a brand URL. Returns `None` only when there is nothing to resolve.
    pub async fn resolve(&self, brand_url: Option<&str>) -> Option<BrandProfile> {
        let url = brand_url.map(str::trim).filter(|u| !u.is_empty())?;

        let domain = normalize_domain(url);
        if domain.is_empty() {
            debug!("Brand URL {:?} has no domain", url);
            return None;
        }

        let payload = if self.client.is_configured() {
            match self.client.fetch(&domain).await {
                Ok(payload) => Some(payload),
                Err(e) => {
                    warn!("Brand lookup for {} failed, using fallback: {}", domain, e);
                    None
                }
            }
        } else {
            debug!("Brand service not configured, using fallback for {}", domain);
            None
        };

        let profile = build_profile(&domain, payload);
        info!(
            "Resolved brand {} for {} ({:?})",
            profile.name, domain, profile.source
        );
        Some(profile)
    }
}
