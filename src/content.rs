//! Game copy generation
//!
//! Each game type gets its own content shape. Wording is driven by the brand
//! tone through a small adjective vocabulary.

use serde::Serialize;

use crate::brand::DEFAULT_TONE;
use crate::game::GameType;

/// Tone → 4 adjectives. The first entry is the fallback for unknown tones.
const TONE_VOCABULARY: &[(&str, [&str; 4])] = &[
    (DEFAULT_TONE, ["Exclusive", "Premium", "Special", "Unique"]),
    ("innovative and modern", ["Smart", "Digital", "Connected", "Next-Gen"]),
    ("dynamic and energetic", ["Power", "Champion", "Turbo", "Ultimate"]),
    ("warm and friendly", ["Delicious", "Gourmet", "Cozy", "Homemade"]),
    ("elegant and trendy", ["Chic", "Trendy", "Iconic", "Signature"]),
    ("soft and caring", ["Radiant", "Gentle", "Glowing", "Pure"]),
    ("refined and exclusive", ["Prestige", "Luxury", "Gold", "Private"]),
];

/// Wheel segments: emoji and category label
const WHEEL_PRIZES: [(&str, &str); 8] = [
    ("🎁", "Gift"),
    ("🏆", "Prize"),
    ("🎯", "Discount"),
    ("⭐", "Product"),
    ("🎪", "Retry"),
    ("💎", "Offer"),
    ("🎨", "Pack"),
    ("🚀", "Advantage"),
];

/// Adjectives for a tone, case-insensitive
pub fn vocabulary(tone: &str) -> [&'static str; 4] {
    let tone = tone.trim();
    TONE_VOCABULARY
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(tone))
        .unwrap_or(&TONE_VOCABULARY[0])
        .1
}

/// A quiz question with its answer options
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuizQuestion {
    pub question: String,
    pub answers: Vec<String>,
    /// Index into `answers`
    pub correct: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WheelContent {
    pub title: String,
    pub subtitle: String,
    pub prizes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScratchContent {
    pub title: String,
    pub subtitle: String,
    pub win_message: String,
    pub lose_message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuizContent {
    pub title: String,
    pub subtitle: String,
    pub questions: Vec<QuizQuestion>,
}

/// Type-specific game content
///
/// Serialized without a tag; the configuration's `type` field says which
/// shape to expect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum GameContent {
    Wheel(WheelContent),
    Scratch(ScratchContent),
    Quiz(QuizContent),
}

impl GameContent {
    pub fn title(&self) -> &str {
        match self {
            GameContent::Wheel(c) => &c.title,
            GameContent::Scratch(c) => &c.title,
            GameContent::Quiz(c) => &c.title,
        }
    }
}

/// Build the content for a game type
pub fn build(
    game_type: GameType,
    brand_name: &str,
    brand_tone: &str,
    industry: Option<&str>,
) -> GameContent {
    let words = vocabulary(brand_tone);

    match game_type {
        GameType::Wheel => GameContent::Wheel(wheel(brand_name, &words)),
        GameType::Scratch => GameContent::Scratch(scratch(brand_name, &words)),
        GameType::Quiz => GameContent::Quiz(quiz(brand_name, &words, industry)),
    }
}

fn wheel(brand_name: &str, words: &[&str; 4]) -> WheelContent {
    let prizes = WHEEL_PRIZES
        .iter()
        .enumerate()
        .map(|(i, (emoji, label))| format!("{} {} {}", emoji, words[i % words.len()], label))
        .collect();

    WheelContent {
        title: format!("{} Wheel of Fortune", brand_name),
        subtitle: format!("Spin the wheel and win {} prizes!", words[0].to_lowercase()),
        prizes,
    }
}

fn scratch(brand_name: &str, words: &[&str; 4]) -> ScratchContent {
    ScratchContent {
        title: format!("{} Scratch Card", brand_name),
        subtitle: format!("Scratch to reveal your {} surprise", words[1].to_lowercase()),
        win_message: format!(
            "🎉 Congratulations! You won a {} {} gift!",
            words[0].to_lowercase(),
            brand_name
        ),
        lose_message: format!("😔 No luck this time... {} thanks you for playing!", brand_name),
    }
}

fn quiz(brand_name: &str, words: &[&str; 4], industry: Option<&str>) -> QuizContent {
    let field = industry
        .map(str::trim)
        .filter(|i| !i.is_empty() && !i.eq_ignore_ascii_case("general"))
        .map(str::to_lowercase);

    let second_question = match field {
        Some(field) => format!("What makes {} stand out in {}?", brand_name, field),
        None => format!("What makes {} stand out?", brand_name),
    };

    let questions = vec![
        QuizQuestion {
            question: format!("Which word best describes {}?", brand_name),
            answers: words.iter().map(|w| w.to_string()).collect(),
            correct: 2,
        },
        QuizQuestion {
            question: second_question,
            answers: words
                .iter()
                .map(|w| format!("Its {} experience", w.to_lowercase()))
                .collect(),
            correct: 3,
        },
    ];

    QuizContent {
        title: format!("{} Quiz", brand_name),
        subtitle: format!("Test your knowledge and win {} rewards", words[3].to_lowercase()),
        questions,
    }
}
