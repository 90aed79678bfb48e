//! Hex color helpers
//!
//! Secondary and accent colors are derived from the primary by shifting every
//! RGB channel by the same amount.

use thiserror::Error;

/// Color parsing errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("invalid color format: {0:?} (expected #rrggbb)")]
    InvalidColorFormat(String),
}

/// Parse a `#rrggbb` (or bare `rrggbb`) color into a packed 24-bit value
pub fn parse(hex: &str) -> Result<u32, ColorError> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ColorError::InvalidColorFormat(hex.to_string()));
    }
    u32::from_str_radix(digits, 16).map_err(|_| ColorError::InvalidColorFormat(hex.to_string()))
}

/// Shift each channel of `hex` by `amount`, clamping to 0..=255
pub fn adjust(hex: &str, amount: i32) -> Result<String, ColorError> {
    let packed = parse(hex)?;

    let shift = |channel: u32| -> u32 { (channel as i32).saturating_add(amount).clamp(0, 255) as u32 };

    let r = shift((packed >> 16) & 0xFF);
    let g = shift((packed >> 8) & 0xFF);
    let b = shift(packed & 0xFF);

    Ok(format!("#{:06x}", (r << 16) | (g << 8) | b))
}

/// Check that a string is a usable color, normalizing a missing `#`
pub fn normalize(hex: &str) -> Option<String> {
    let trimmed = hex.trim();
    parse(trimmed).ok()?;
    if trimmed.starts_with('#') {
        Some(trimmed.to_string())
    } else {
        Some(format!("#{}", trimmed))
    }
}
