//! Keyword-based industry detection
//!
//! Used whenever the brand service is unavailable or returns an incomplete
//! profile. Rules are checked in order and the first match wins.
//!
//! Name and domain are split into alphanumeric tokens. Stems match the start
//! of a token ("sport" in "sportzone"), short words only a whole token, so
//! "spa" never fires inside "spacex".

/// Tone used when nothing more specific is known
pub const DEFAULT_TONE: &str = "professional and accessible";

/// Sector, palette and tone guessed from a brand's name and domain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndustryProfile {
    pub sector: &'static str,
    pub colors: [&'static str; 3],
    pub tone: &'static str,
}

struct IndustryRule {
    stems: &'static [&'static str],
    words: &'static [&'static str],
    domain_suffixes: &'static [&'static str],
    profile: IndustryProfile,
}

const RULES: &[IndustryRule] = &[
    IndustryRule {
        stems: &["tech", "digital", "software", "cloud", "cyber"],
        words: &["data", "web", "dev"],
        domain_suffixes: &[".io", ".tech", ".dev"],
        profile: IndustryProfile {
            sector: "Technology",
            colors: ["#3B82F6", "#1E40AF", "#06B6D4"],
            tone: "innovative and modern",
        },
    },
    IndustryRule {
        stems: &["sport", "fit", "gym", "athlet", "running", "decathlon", "adidas"],
        words: &["nike", "run"],
        domain_suffixes: &[],
        profile: IndustryProfile {
            sector: "Sport",
            colors: ["#EF4444", "#F97316", "#FACC15"],
            tone: "dynamic and energetic",
        },
    },
    IndustryRule {
        stems: &["food", "restaurant", "pizza", "burger", "bakery", "boulang", "cuisine"],
        words: &["resto", "cafe", "café"],
        domain_suffixes: &[],
        profile: IndustryProfile {
            sector: "Food",
            colors: ["#F59E0B", "#DC2626", "#84CC16"],
            tone: "warm and friendly",
        },
    },
    IndustryRule {
        stems: &["fashion", "cloth", "vetement", "vêtement", "boutique"],
        words: &["mode", "style", "wear"],
        domain_suffixes: &[],
        profile: IndustryProfile {
            sector: "Fashion",
            colors: ["#111827", "#EC4899", "#F9FAFB"],
            tone: "elegant and trendy",
        },
    },
    IndustryRule {
        stems: &["beauty", "beaute", "beauté", "cosmetic", "makeup", "parfum"],
        words: &["skin", "spa"],
        domain_suffixes: &[],
        profile: IndustryProfile {
            sector: "Beauty",
            colors: ["#F472B6", "#FBCFE8", "#A855F7"],
            tone: "soft and caring",
        },
    },
    IndustryRule {
        stems: &["luxury", "premium", "prestige", "jewel", "joaill"],
        words: &["luxe"],
        domain_suffixes: &[".luxury", ".gold", ".jewelry", ".paris"],
        profile: IndustryProfile {
            sector: "Luxury",
            colors: ["#1F2937", "#D4AF37", "#F5F5F4"],
            tone: "refined and exclusive",
        },
    },
];

/// Profile returned when no rule matches
pub const GENERAL: IndustryProfile = IndustryProfile {
    sector: "General",
    colors: ["#3B82F6", "#10B981", "#F97316"],
    tone: DEFAULT_TONE,
};

/// Guess an industry from a brand name and bare domain
///
/// `extra` is any additional free-text hint (e.g. an industry label returned by
/// the brand service); it is searched alongside the name.
pub fn detect(name: &str, domain: &str, extra: Option<&str>) -> IndustryProfile {
    let domain = domain.to_lowercase();
    let mut haystack = format!("{} {}", name.to_lowercase(), domain);
    if let Some(extra) = extra {
        haystack.push(' ');
        haystack.push_str(&extra.to_lowercase());
    }
    let tokens: Vec<&str> = haystack
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .collect();

    RULES
        .iter()
        .find(|rule| {
            tokens.iter().any(|token| {
                rule.stems.iter().any(|stem| token.starts_with(stem))
                    || rule.words.contains(token)
            }) || rule.domain_suffixes.iter().any(|s| domain.ends_with(s))
        })
        .map(|rule| rule.profile)
        .unwrap_or(GENERAL)
}
