//! Game configuration generation
//!
//! [`generate`] is the pure core of the pipeline: given a request and an
//! already-resolved brand it classifies, derives the palette, builds the copy
//! and returns one immutable [`GameConfiguration`]. It performs no I/O.

mod name;

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::brand::{BrandProfile, DEFAULT_TONE};
use crate::classify::{self, Theme};
use crate::color::{self, ColorError};
use crate::content::{self, GameContent};
pub use name::{extract_brand_name, DEFAULT_BRAND_NAME};

/// Primary color when neither the user nor the brand supplies one
pub const DEFAULT_PRIMARY: &str = "#3B82F6";

/// Channel offset for the derived secondary color
pub const SECONDARY_SHIFT: i32 = -20;

/// Channel offset for the derived accent color
pub const ACCENT_SHIFT: i32 = 40;

/// Contest mechanic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameType {
    Wheel,
    Scratch,
    Quiz,
}

impl GameType {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameType::Wheel => "wheel",
            GameType::Scratch => "scratch",
            GameType::Quiz => "quiz",
        }
    }

    /// Parse from string
    pub fn from_str(s: &str) -> Option<GameType> {
        match s.trim().to_lowercase().as_str() {
            "wheel" | "roue" => Some(GameType::Wheel),
            "scratch" | "gratter" => Some(GameType::Scratch),
            "quiz" => Some(GameType::Quiz),
            _ => None,
        }
    }
}

impl fmt::Display for GameType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Opaque reference to a user or brand image (URL or data URL)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssetRef(pub String);

impl AssetRef {
    /// Wrap a non-empty reference
    pub fn new(reference: impl Into<String>) -> Option<Self> {
        let reference = reference.into();
        if reference.trim().is_empty() {
            None
        } else {
            Some(Self(reference))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A generation request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationInput {
    pub prompt: String,
    pub brand_url: Option<String>,
    pub game_type: Option<GameType>,
    pub dominant_color: Option<String>,
    pub logo: Option<AssetRef>,
    pub background_image: Option<AssetRef>,
}

impl GenerationInput {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            ..Self::default()
        }
    }

    pub fn with_brand_url(mut self, url: impl Into<String>) -> Self {
        self.brand_url = Some(url.into());
        self
    }

    pub fn with_game_type(mut self, game_type: GameType) -> Self {
        self.game_type = Some(game_type);
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.dominant_color = Some(color.into());
        self
    }

    pub fn with_logo(mut self, logo: AssetRef) -> Self {
        self.logo = Some(logo);
        self
    }

    pub fn with_background(mut self, background: AssetRef) -> Self {
        self.background_image = Some(background);
        self
    }

    /// Check the request before any network work is done
    pub fn validate(&self) -> Result<(), GenerateError> {
        if self.prompt.trim().is_empty() {
            return Err(GenerateError::EmptyPrompt);
        }
        if let Some(color) = self.dominant_color() {
            color::parse(color)?;
        }
        Ok(())
    }

    fn brand_url(&self) -> Option<&str> {
        self.brand_url.as_deref().map(str::trim).filter(|u| !u.is_empty())
    }

    fn dominant_color(&self) -> Option<&str> {
        self.dominant_color
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
    }
}

/// Final palette
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Palette {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
}

/// Diagnostic record of what went into a configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Provenance {
    pub prompt_used: String,
    pub brand_data_used: bool,
    pub user_assets_used: bool,
}

/// A renderable contest game
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameConfiguration {
    #[serde(rename = "type")]
    pub game_type: GameType,
    pub theme: Theme,
    pub brand_name: String,
    pub brand_tone: String,
    pub colors: Palette,
    pub content: GameContent,
    pub custom_logo: Option<AssetRef>,
    pub custom_background: Option<AssetRef>,
    pub brand_logo: Option<AssetRef>,
    pub provenance: Provenance,
}

/// Generation errors
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("prompt is empty")]
    EmptyPrompt,

    #[error("unknown game type: {0}")]
    UnknownGameType(String),

    #[error(transparent)]
    InvalidColor(#[from] ColorError),

    #[error("advisory service failed: {0}")]
    Advisory(#[from] crate::advisor::AdvisorError),
}

/// Derive the palette: user color > brand colors > defaults
fn palette(input: &GenerationInput, brand: Option<&BrandProfile>) -> Result<Palette, ColorError> {
    let user_color = input.dominant_color();

    let brand_colors: Vec<&str> = match brand {
        Some(brand) if !brand.colors.is_empty() => brand.colors.iter().map(String::as_str).collect(),
        _ => user_color.into_iter().collect(),
    };

    let primary = user_color
        .or_else(|| brand_colors.first().copied())
        .unwrap_or(DEFAULT_PRIMARY)
        .to_string();
    color::parse(&primary)?;

    let secondary = match brand_colors.get(1) {
        Some(c) => c.to_string(),
        None => color::adjust(&primary, SECONDARY_SHIFT)?,
    };
    let accent = match brand_colors.get(2) {
        Some(c) => c.to_string(),
        None => color::adjust(&primary, ACCENT_SHIFT)?,
    };

    Ok(Palette {
        primary,
        secondary,
        accent,
    })
}

/// Build a game configuration from a request and its resolved brand
pub fn generate(
    input: &GenerationInput,
    brand: Option<&BrandProfile>,
) -> Result<GameConfiguration, GenerateError> {
    input.validate()?;
    let prompt = input.prompt.trim();

    let game_type = classify::detect_game_type(prompt, input.game_type);

    let brand_name = match brand {
        Some(brand) => brand.name.clone(),
        None => extract_brand_name(input.brand_url().unwrap_or(prompt)),
    };

    let colors = palette(input, brand)?;

    let industry = brand.and_then(|b| b.industry.as_deref());
    let theme = classify::detect_theme(prompt, industry);

    let brand_tone = brand
        .map(|b| b.tone.clone())
        .unwrap_or_else(|| DEFAULT_TONE.to_string());

    let content = content::build(game_type, &brand_name, &brand_tone, industry);

    debug!(
        "Generated {} game '{}' (theme {}, primary {})",
        game_type,
        content.title(),
        theme,
        colors.primary
    );

    Ok(GameConfiguration {
        game_type,
        theme,
        brand_name,
        brand_tone,
        colors,
        content,
        custom_logo: input.logo.clone(),
        custom_background: input.background_image.clone(),
        brand_logo: brand.and_then(|b| b.logo_url.clone()).map(AssetRef),
        provenance: Provenance {
            prompt_used: prompt.to_string(),
            brand_data_used: brand.is_some(),
            user_assets_used: input.logo.is_some() || input.background_image.is_some(),
        },
    })
}
