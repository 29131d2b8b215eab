use crate::utils::error::{RecolorError, Result};
use std::fmt;
use std::str::FromStr;

/// Solid background color parsed from an HTML hex string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BackgroundColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl BackgroundColor {
    pub const WHITE: BackgroundColor = BackgroundColor::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses `#RRGGBB` or the shorthand `#RGB`, case-insensitive.
    pub fn from_hex(value: &str) -> Result<Self> {
        let invalid = |reason: &str| RecolorError::InvalidColorFormat {
            value: value.to_string(),
            reason: reason.to_string(),
        };

        let digits = value
            .trim()
            .strip_prefix('#')
            .ok_or_else(|| invalid("color must start with '#'"))?;

        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid("color contains non-hexadecimal characters"));
        }

        match digits.len() {
            6 => Ok(Self::new(
                hex_byte(&digits[0..2]),
                hex_byte(&digits[2..4]),
                hex_byte(&digits[4..6]),
            )),
            // #f0a -> #ff00aa
            3 => {
                let expand = |i: usize| hex_byte(&digits[i..=i]) * 0x11;
                Ok(Self::new(expand(0), expand(1), expand(2)))
            }
            _ => Err(invalid("expected 3 or 6 hex digits after '#'")),
        }
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

// Only called on validated ASCII hex digits.
fn hex_byte(digits: &str) -> u8 {
    u8::from_str_radix(digits, 16).unwrap_or_default()
}

impl FromStr for BackgroundColor {
    type Err = RecolorError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl fmt::Display for BackgroundColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}
