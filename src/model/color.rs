//! RGBA color value type for line rendering preferences.
//!
//! Colors persist as RGBA components in the JSON backend and as hex strings
//! (`#RRGGBB` / `#RRGGBBAA`) in NSUserDefaults, so both representations are
//! supported here.

use serde::{Deserialize, Serialize};

use crate::clamp;
use crate::error::PrefsError;

/// An RGBA color with components in [0.0, 1.0].
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct LineColor {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Default for LineColor {
    /// Opaque black.
    fn default() -> Self {
        Self {
            r: 0.0,
            g: 0.0,
            b: 0.0,
            a: 1.0,
        }
    }
}

impl From<(f64, f64, f64, f64)> for LineColor {
    fn from((r, g, b, a): (f64, f64, f64, f64)) -> Self {
        Self { r, g, b, a }
    }
}

impl LineColor {
    pub fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Clamps all components into [0.0, 1.0].
    pub fn validate(&mut self) {
        self.r = clamp(self.r, 0.0, 1.0);
        self.g = clamp(self.g, 0.0, 1.0);
        self.b = clamp(self.b, 0.0, 1.0);
        self.a = clamp(self.a, 0.0, 1.0);
    }

    /// Formats as `#RRGGBB`, or `#RRGGBBAA` when not fully opaque.
    ///
    /// Out-of-range components are clamped first.
    pub fn to_hex(self) -> String {
        let [r, g, b, a] = [self.r, self.g, self.b, self.a]
            .map(|c| (clamp(c, 0.0, 1.0) * 255.0).round() as u8);
        let mut hex = format!("#{r:02X}{g:02X}{b:02X}");
        if a != 255 {
            hex.push_str(&format!("{a:02X}"));
        }
        hex
    }

    /// Parses `#RRGGBB` or `#RRGGBBAA` (leading `#` optional, case
    /// insensitive). Alpha defaults to opaque for the six-digit form.
    pub fn from_hex(s: &str) -> Result<Self, PrefsError> {
        let bad = || PrefsError::InvalidColor(s.to_string());
        let digits = s.trim().trim_start_matches('#');
        if !matches!(digits.len(), 6 | 8) || !digits.is_ascii() {
            return Err(bad());
        }
        let mut bytes = [0u8; 4];
        bytes[3] = 255;
        for (i, pair) in digits.as_bytes().chunks(2).enumerate() {
            let pair = std::str::from_utf8(pair).map_err(|_| bad())?;
            bytes[i] = u8::from_str_radix(pair, 16).map_err(|_| bad())?;
        }
        Ok(Self {
            r: bytes[0] as f64 / 255.0,
            g: bytes[1] as f64 / 255.0,
            b: bytes[2] as f64 / 255.0,
            a: bytes[3] as f64 / 255.0,
        })
    }
}
