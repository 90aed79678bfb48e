//! Daemon configuration
//!
//! Layered with figment, later layers win:
//! 1. Built-in defaults
//! 2. Optional TOML file
//! 3. `CONTESTD_*` environment variables (`__` separates sections,
//!    e.g. `CONTESTD_ADVISOR__POLICY=required`)
//! 4. `GAME_GENERATION_API_KEY` / `BRAND_API_KEY` for the service credentials

use std::net::SocketAddr;
use std::path::Path;

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

use crate::advisor::AdvisoryPolicy;

/// Top-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub bind_addr: SocketAddr,
    #[serde(default)]
    pub brand: BrandConfig,
    #[serde(default)]
    pub advisor: AdvisorConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 8080)),
            brand: BrandConfig::default(),
            advisor: AdvisorConfig::default(),
        }
    }
}

/// Brand metadata service settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BrandConfig {
    pub api_url: String,
    /// No key means every lookup uses the keyword fallback
    pub api_key: Option<String>,
    pub timeout_secs: u64,
}

impl Default for BrandConfig {
    fn default() -> Self {
        Self {
            api_url: "https://api.brandfetch.io/v2".to_string(),
            api_key: None,
            timeout_secs: 5,
        }
    }
}

/// Advisory text-generation service settings (OpenAI-compatible)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AdvisorConfig {
    pub api_url: String,
    pub api_key: Option<String>,
    pub model: String,
    pub temperature: f32,
    pub timeout_secs: u64,
    pub policy: AdvisoryPolicy,
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            api_url: "https://api.openai.com/v1".to_string(),
            api_key: None,
            model: "gpt-4o-mini".to_string(),
            temperature: 0.7,
            timeout_secs: 30,
            policy: AdvisoryPolicy::default(),
        }
    }
}

impl Config {
    /// Build the figment for an optional config file
    pub fn figment(path: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Config::default()));

        if let Some(path) = path {
            figment = figment.merge(Toml::file(path));
        }

        figment
            .merge(Env::prefixed("CONTESTD_").split("__"))
            .merge(
                Env::raw()
                    .only(&["GAME_GENERATION_API_KEY"])
                    .map(|_| "advisor.api_key".into()),
            )
            .merge(
                Env::raw()
                    .only(&["BRAND_API_KEY"])
                    .map(|_| "brand.api_key".into()),
            )
    }

    /// Load configuration from defaults, an optional file and the environment
    pub fn load(path: Option<&Path>) -> Result<Self, figment::Error> {
        Self::figment(path).extract()
    }
}
