//! Video Input Sources
//!
//! Fixed set of inputs a window can show, with the swatch color the editor
//! paints each input's windows in.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Alpha applied to every input swatch
pub const SWATCH_ALPHA: f32 = 0.4;

/// Unknown input name
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown input source: {0}")]
pub struct UnknownInput(pub String);

/// RGBA swatch color
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
    /// Alpha (0.0 - 1.0)
    pub a: f32,
}

impl Rgba {
    /// CSS `rgba()` notation
    pub fn to_css(&self) -> String {
        format!("rgba({},{},{},{})", self.r, self.g, self.b, self.a)
    }
}

/// Video input identifiers
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub enum InputSource {
    /// Input 1
    #[default]
    Input1,
    /// Input 2
    Input2,
    /// Input 3
    Input3,
    /// Input 4
    Input4,
    /// Input 5
    Input5,
    /// Input 6
    Input6,
    /// Input 7
    Input7,
    /// Input 8
    Input8,
}

impl InputSource {
    /// All inputs in badge order
    pub const ALL: [InputSource; 8] = [
        InputSource::Input1,
        InputSource::Input2,
        InputSource::Input3,
        InputSource::Input4,
        InputSource::Input5,
        InputSource::Input6,
        InputSource::Input7,
        InputSource::Input8,
    ];

    /// 1-based input number
    pub fn number(&self) -> u8 {
        match self {
            InputSource::Input1 => 1,
            InputSource::Input2 => 2,
            InputSource::Input3 => 3,
            InputSource::Input4 => 4,
            InputSource::Input5 => 5,
            InputSource::Input6 => 6,
            InputSource::Input7 => 7,
            InputSource::Input8 => 8,
        }
    }

    /// Input from its 1-based number
    pub fn from_number(number: u8) -> Option<Self> {
        Self::ALL.get(usize::from(number).checked_sub(1)?).copied()
    }

    /// Display name ("Input 3")
    pub fn name(&self) -> String {
        format!("Input {}", self.number())
    }

    /// Swatch color
    pub fn color(&self) -> Rgba {
        let (r, g, b) = match self {
            InputSource::Input1 => (0, 0, 0),
            InputSource::Input2 => (231, 135, 58),
            InputSource::Input3 => (103, 170, 20),
            InputSource::Input4 => (163, 25, 210),
            InputSource::Input5 => (26, 37, 241),
            InputSource::Input6 => (195, 132, 140),
            InputSource::Input7 => (45, 113, 56),
            InputSource::Input8 => (190, 189, 118),
        };
        Rgba {
            r,
            g,
            b,
            a: SWATCH_ALPHA,
        }
    }
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Input {}", self.number())
    }
}

impl FromStr for InputSource {
    type Err = UnknownInput;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .strip_prefix("Input")
            .map(str::trim)
            .and_then(|n| n.parse::<u8>().ok())
            .and_then(Self::from_number)
            .ok_or_else(|| UnknownInput(s.to_string()))
    }
}

impl TryFrom<String> for InputSource {
    type Error = UnknownInput;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<InputSource> for String {
    fn from(input: InputSource) -> Self {
        input.name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_round_trip() {
        for input in InputSource::ALL {
            assert_eq!(input.name().parse::<InputSource>().unwrap(), input);
        }
        assert_eq!("Input 3".parse::<InputSource>().unwrap(), InputSource::Input3);
        assert_eq!("Input3".parse::<InputSource>().unwrap(), InputSource::Input3);
    }

    #[test]
    fn test_unknown_names() {
        assert!("Input 0".parse::<InputSource>().is_err());
        assert!("Input 9".parse::<InputSource>().is_err());
        assert!("HDMI 1".parse::<InputSource>().is_err());
    }

    #[test]
    fn test_swatch_css() {
        assert_eq!(InputSource::Input2.color().to_css(), "rgba(231,135,58,0.4)");
        assert_eq!(InputSource::Input1.color().to_css(), "rgba(0,0,0,0.4)");
    }

    #[test]
    fn test_serde_uses_display_name() {
        let json = serde_json::to_string(&InputSource::Input5).unwrap();
        assert_eq!(json, "\"Input 5\"");
        let parsed: InputSource = serde_json::from_str("\"Input 8\"").unwrap();
        assert_eq!(parsed, InputSource::Input8);
    }
}
