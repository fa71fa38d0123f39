//! Thread colors as handed over by the thread browser (`#RRGGBB`).

use crate::error::{DesignError, DesignResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An sRGB thread color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ThreadColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl ThreadColor {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#RRGGBB` string
    pub fn from_hex(hex: &str) -> DesignResult<Self> {
        let invalid = |reason: &str| DesignError::InvalidColor {
            color: hex.to_string(),
            reason: reason.to_string(),
        };

        let digits = hex
            .strip_prefix('#')
            .ok_or_else(|| invalid("missing leading '#'"))?;
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid("expected six hex digits"));
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16).map_err(|e| invalid(&e.to_string()))
        };
        Ok(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    pub fn to_rgb(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl fmt::Display for ThreadColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for ThreadColor {
    type Err = DesignError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}
