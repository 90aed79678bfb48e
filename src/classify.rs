//! Prompt classification
//!
//! Case-insensitive keyword rules deciding the game type and the theme of a
//! contest. Rules are ordered; the first match wins.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::game::GameType;

const GAME_TYPE_RULES: &[(GameType, &[&str])] = &[
    (GameType::Wheel, &["roue", "wheel", "fortune"]),
    (GameType::Scratch, &["gratter", "scratch", "carte"]),
    (GameType::Quiz, &["quiz", "question", "réponse"]),
];

/// Mood or seasonal category used to flavor generated copy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Sport,
    Tech,
    Food,
    Fashion,
    Beauty,
    Luxury,
    Christmas,
    Summer,
    Cozy,
    Modern,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Sport => "sport",
            Theme::Tech => "tech",
            Theme::Food => "food",
            Theme::Fashion => "fashion",
            Theme::Beauty => "beauty",
            Theme::Luxury => "luxury",
            Theme::Christmas => "christmas",
            Theme::Summer => "summer",
            Theme::Cozy => "cozy",
            Theme::Modern => "modern",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Industry label fragments, matched against the lowercased label
const INDUSTRY_THEMES: &[(&str, Theme)] = &[
    ("sport", Theme::Sport),
    ("tech", Theme::Tech),
    ("food", Theme::Food),
    ("fashion", Theme::Fashion),
    ("beauty", Theme::Beauty),
    ("luxury", Theme::Luxury),
];

const PROMPT_THEME_RULES: &[(Theme, &[&str])] = &[
    (Theme::Sport, &["sport", "dynamique", "énergie", "dynamic", "energy"]),
    (
        Theme::Christmas,
        &["noël", "festif", "hiver", "christmas", "festive", "winter"],
    ),
    (
        Theme::Summer,
        &["été", "soleil", "plage", "summer", "beach", "sunny"],
    ),
    (
        Theme::Luxury,
        &["luxe", "premium", "élégant", "luxury", "elegant"],
    ),
    (Theme::Cozy, &["cosy", "café", "chaleureux", "cozy", "coffee"]),
];

/// Pick the game type: explicit override, then prompt keywords, then wheel
pub fn detect_game_type(prompt: &str, game_type_override: Option<GameType>) -> GameType {
    if let Some(game_type) = game_type_override {
        return game_type;
    }

    let prompt = prompt.to_lowercase();
    GAME_TYPE_RULES
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| prompt.contains(k)))
        .map(|(game_type, _)| *game_type)
        .unwrap_or(GameType::Wheel)
}

/// Map an industry label to a theme, if it has one
pub fn theme_for_industry(industry: &str) -> Option<Theme> {
    let industry = industry.to_lowercase();
    INDUSTRY_THEMES
        .iter()
        .find(|(fragment, _)| industry.contains(fragment))
        .map(|(_, theme)| *theme)
}

/// Pick the theme: brand industry, then prompt keywords, then modern
pub fn detect_theme(prompt: &str, industry: Option<&str>) -> Theme {
    if let Some(theme) = industry.and_then(theme_for_industry) {
        return theme;
    }

    let prompt = prompt.to_lowercase();
    PROMPT_THEME_RULES
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| prompt.contains(k)))
        .map(|(theme, _)| *theme)
        .unwrap_or(Theme::Modern)
}
