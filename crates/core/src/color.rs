//! 24-bit RGB colours.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An sRGB colour, serialized as `RRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct RgbColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl RgbColor {
    /// Create a colour from its components.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Upper-case hex form without a leading `#`, as stored in `a:srgbClr`.
    pub fn hex(&self) -> String {
        format!("{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Parse `RRGGBB` or `#RRGGBB`.
    pub fn from_hex(s: &str) -> Result<Self> {
        let digits = s.trim().trim_start_matches('#');
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(Error::InvalidColor(s.to_string()));
        }

        let component = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16).map_err(|_| Error::InvalidColor(s.to_string()))
        };

        Ok(Self::new(component(0..2)?, component(2..4)?, component(4..6)?))
    }
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.hex())
    }
}

impl FromStr for RgbColor {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl From<RgbColor> for String {
    fn from(color: RgbColor) -> Self {
        color.hex()
    }
}

impl TryFrom<String> for RgbColor {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::from_hex(&value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_round_trip() {
        let purple = RgbColor::new(0x7C, 0x6A, 0xFF);
        assert_eq!(purple.hex(), "7C6AFF");
        assert_eq!(RgbColor::from_hex("7c6aff").unwrap(), purple);
        assert_eq!("#7C6AFF".parse::<RgbColor>().unwrap(), purple);
    }

    #[test]
    fn test_display() {
        assert_eq!(RgbColor::new(0x0B, 0x0D, 0x17).to_string(), "#0B0D17");
    }

    #[test]
    fn test_invalid_colors() {
        assert!(matches!(RgbColor::from_hex("12345"), Err(Error::InvalidColor(_))));
        assert!(matches!(RgbColor::from_hex("GG0000"), Err(Error::InvalidColor(_))));
        assert!(matches!(RgbColor::from_hex("#ÿÿÿ"), Err(Error::InvalidColor(_))));
    }

    #[test]
    fn test_serde_as_hex_string() {
        let json = serde_json::to_string(&RgbColor::new(0xFF, 0xB7, 0x4D)).unwrap();
        assert_eq!(json, "\"FFB74D\"");
        let back: RgbColor = serde_json::from_str("\"3EDDC6\"").unwrap();
        assert_eq!(back, RgbColor::new(0x3E, 0xDD, 0xC6));
        assert!(serde_json::from_str::<RgbColor>("\"nope\"").is_err());
    }
}
