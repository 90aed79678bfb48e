//! Generation service
//!
//! The I/O half of the pipeline. Steps run strictly in sequence:
//! 1. Reject empty prompts and malformed colors (before any network call)
//! 2. Resolve the brand (best-effort)
//! 3. Ask the advisory service, as the configured policy allows
//! 4. Hand everything to the pure [`game::generate`]
//!
//! Dropping the returned future aborts whichever network call is in flight.

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::advisor::{AdvisorClient, AdvisoryPolicy, AdvisoryRequest};
use crate::brand::{BrandProfile, BrandResolver, BrandSource};
use crate::classify;
use crate::config::Config;
use crate::game::{self, GameConfiguration, GenerateError, GenerationInput};

/// What happened during a generation, reported alongside the configuration
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationLog {
    /// The advisory service returned a suggestion
    pub api_called: bool,
    /// The brand profile came from the brand service
    pub brand_data_retrieved: bool,
    /// Every optional input the user supplied shows up in the configuration
    pub all_inputs_used: bool,
    pub timestamp: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

/// A successful generation
#[derive(Debug, Clone)]
pub struct Generation {
    pub game: GameConfiguration,
    pub brand: Option<BrandProfile>,
    pub log: GenerationLog,
}

/// Runs generation requests. Holds only immutable clients, so one instance is
/// shared by every request.
#[derive(Debug, Clone)]
pub struct GameGenerator {
    brands: BrandResolver,
    advisor: AdvisorClient,
}

impl GameGenerator {
    pub fn new(brands: BrandResolver, advisor: AdvisorClient) -> Self {
        Self { brands, advisor }
    }

    /// Build the generator from daemon configuration
    pub fn from_config(config: &Config) -> reqwest::Result<Self> {
        Ok(Self::new(
            BrandResolver::new(&config.brand)?,
            AdvisorClient::new(&config.advisor)?,
        ))
    }

    /// Run one generation request end to end
    pub async fn generate(&self, input: GenerationInput) -> Result<Generation, GenerateError> {
        input.validate()?;

        info!(
            "Generating game (brand url: {}, type override: {:?}, logo: {}, background: {})",
            input.brand_url.as_deref().unwrap_or("none"),
            input.game_type,
            input.logo.is_some(),
            input.background_image.is_some()
        );

        let brand = self.brands.resolve(input.brand_url.as_deref()).await;

        let suggestion = self.advise(&input, brand.as_ref()).await?;

        let game = game::generate(&input, brand.as_ref())?;

        let brand_url_given = input
            .brand_url
            .as_deref()
            .is_some_and(|u| !u.trim().is_empty());

        let log = GenerationLog {
            api_called: suggestion.is_some(),
            brand_data_retrieved: brand
                .as_ref()
                .is_some_and(|b| b.source == BrandSource::Lookup),
            all_inputs_used: brand.is_some() || !brand_url_given,
            timestamp: chrono::Utc::now().to_rfc3339(),
            suggestion,
        };

        info!(
            "Generated {} game for {} (theme {}, brand data: {}, advisory: {})",
            game.game_type,
            game.brand_name,
            game.theme,
            log.brand_data_retrieved,
            log.api_called
        );

        Ok(Generation { game, brand, log })
    }

    /// Call the advisory service according to its policy
    async fn advise(
        &self,
        input: &GenerationInput,
        brand: Option<&BrandProfile>,
    ) -> Result<Option<String>, GenerateError> {
        let policy = self.advisor.policy();
        if policy == AdvisoryPolicy::Disabled {
            return Ok(None);
        }

        let request = AdvisoryRequest {
            prompt: input.prompt.trim(),
            game_type: classify::detect_game_type(&input.prompt, input.game_type),
            brand_url: input.brand_url.as_deref(),
            color: input.dominant_color.as_deref(),
            brand,
        };

        match self.advisor.suggest(&request).await {
            Ok(suggestion) => {
                debug!("Advisory suggestion: {}", suggestion);
                Ok(Some(suggestion))
            }
            Err(e) if policy == AdvisoryPolicy::Required => Err(e.into()),
            Err(e) => {
                warn!("Advisory call failed, continuing without it: {}", e);
                Ok(None)
            }
        }
    }
}
