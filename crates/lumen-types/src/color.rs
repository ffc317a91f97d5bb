// ABOUTME: sRGB color value type with strict #RRGGBB parsing and formatting
// ABOUTME: Rejects malformed hex strings and out-of-range channels with typed errors

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// One of the three sRGB channels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Channel::Red => "red",
            Channel::Green => "green",
            Channel::Blue => "blue",
        };
        f.write_str(name)
    }
}

/// Why a hex color string was rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HexErrorReason {
    /// The string does not start with `#`
    MissingHash,
    /// The string does not have exactly six digits after the `#`
    WrongLength { found: usize },
    /// A character after the `#` is not a hexadecimal digit
    InvalidDigit { found: char },
}

impl fmt::Display for HexErrorReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HexErrorReason::MissingHash => write!(f, "expected a leading '#'"),
            HexErrorReason::WrongLength { found } => {
                write!(f, "expected 6 hex digits, found {found}")
            }
            HexErrorReason::InvalidDigit { found } => {
                write!(f, "'{found}' is not a hexadecimal digit")
            }
        }
    }
}

/// Errors produced while constructing a color
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("Invalid hex color '{input}': {reason}")]
    InvalidHex {
        input: String,
        reason: HexErrorReason,
    },

    #[error("Channel {channel} value {value} is outside 0..=255")]
    ChannelOutOfRange { channel: Channel, value: i64 },
}

impl ColorError {
    /// Create an invalid hex error
    pub fn invalid_hex<S: Into<String>>(input: S, reason: HexErrorReason) -> Self {
        Self::InvalidHex {
            input: input.into(),
            reason,
        }
    }

    /// Create a channel out of range error
    pub fn channel_out_of_range(channel: Channel, value: i64) -> Self {
        Self::ChannelOutOfRange { channel, value }
    }
}

/// An sRGB color with 8-bit channels and no alpha.
///
/// Displays and serializes as an uppercase `#RRGGBB` string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build a color from wider integer channels, rejecting anything outside 0..=255.
    pub fn try_from_channels(r: i64, g: i64, b: i64) -> Result<Self, ColorError> {
        let narrow = |channel: Channel, value: i64| {
            u8::try_from(value).map_err(|_| ColorError::channel_out_of_range(channel, value))
        };

        Ok(Self {
            r: narrow(Channel::Red, r)?,
            g: narrow(Channel::Green, g)?,
            b: narrow(Channel::Blue, b)?,
        })
    }

    /// Build a color from a packed `0xRRGGBB` value. The top byte is ignored.
    pub const fn from_u32(packed: u32) -> Self {
        Self {
            r: ((packed >> 16) & 0xff) as u8,
            g: ((packed >> 8) & 0xff) as u8,
            b: (packed & 0xff) as u8,
        }
    }

    /// Parse a strict `#RRGGBB` string (hex digits in either case).
    ///
    /// Shorthand (`#abc`), named colors and alpha forms are rejected, as is
    /// surrounding whitespace.
    pub fn from_hex(input: &str) -> Result<Self, ColorError> {
        let digits = input
            .strip_prefix('#')
            .ok_or_else(|| ColorError::invalid_hex(input, HexErrorReason::MissingHash))?;

        if let Some(found) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
            return Err(ColorError::invalid_hex(
                input,
                HexErrorReason::InvalidDigit { found },
            ));
        }

        // Every remaining char is ASCII, so byte length equals digit count
        if digits.len() != 6 {
            return Err(ColorError::invalid_hex(
                input,
                HexErrorReason::WrongLength {
                    found: digits.len(),
                },
            ));
        }

        // Six checked hex digits always fit in a u32
        let packed = u32::from_str_radix(digits, 16).map_err(|_| {
            let found = digits.chars().next().unwrap_or('#');
            ColorError::invalid_hex(input, HexErrorReason::InvalidDigit { found })
        })?;

        Ok(Self::from_u32(packed))
    }

    /// Format as uppercase `#RRGGBB`
    pub fn to_hex(self) -> String {
        self.to_string()
    }

    /// Pack into `0xRRGGBB`
    pub const fn to_u32(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

impl From<Rgb> for (u8, u8, u8) {
    fn from(color: Rgb) -> Self {
        (color.r, color.g, color.b)
    }
}

impl Serialize for Rgb {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D>(deserializer: D) -> Result<Rgb, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Rgb::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_lowercase_and_uppercase() {
        assert_eq!(Rgb::from_hex("#aabbcc").unwrap(), Rgb::new(0xaa, 0xbb, 0xcc));
        assert_eq!(Rgb::from_hex("#AABBCC").unwrap(), Rgb::new(0xaa, 0xbb, 0xcc));
        assert_eq!(Rgb::from_hex("#aAbBcC").unwrap(), Rgb::new(0xaa, 0xbb, 0xcc));
        assert_eq!("#000000".parse::<Rgb>().unwrap(), Rgb::BLACK);
        assert_eq!("#ffffff".parse::<Rgb>().unwrap(), Rgb::WHITE);
    }

    #[test]
    fn test_hex_is_case_normalized_on_output() {
        let color: Rgb = "#aabbcc".parse().unwrap();
        assert_eq!(color.to_hex(), "#AABBCC");
        assert_eq!(Rgb::new(0x59, 0x59, 0x59).to_string(), "#595959");
        assert_eq!(Rgb::new(1, 2, 3).to_string(), "#010203");
    }

    #[test]
    fn test_missing_hash_is_rejected() {
        let err = Rgb::from_hex("aabbcc").unwrap_err();
        assert_eq!(
            err,
            ColorError::invalid_hex("aabbcc", HexErrorReason::MissingHash)
        );
    }

    #[test]
    fn test_shorthand_and_long_forms_are_rejected() {
        assert!(matches!(
            Rgb::from_hex("#abc"),
            Err(ColorError::InvalidHex {
                reason: HexErrorReason::WrongLength { found: 3 },
                ..
            })
        ));
        assert!(matches!(
            Rgb::from_hex("#aabbccdd"),
            Err(ColorError::InvalidHex {
                reason: HexErrorReason::WrongLength { found: 8 },
                ..
            })
        ));
        assert!(Rgb::from_hex("#").is_err());
        assert!(Rgb::from_hex("").is_err());
    }

    #[test]
    fn test_non_hex_digits_are_rejected() {
        assert!(matches!(
            Rgb::from_hex("#gggggg"),
            Err(ColorError::InvalidHex {
                reason: HexErrorReason::InvalidDigit { found: 'g' },
                ..
            })
        ));
        assert!(Rgb::from_hex("red").is_err());
        assert!(Rgb::from_hex("#+fffff").is_err());
        assert!(Rgb::from_hex(" #ffffff").is_err());
        assert!(Rgb::from_hex("#ffffff ").is_err());
        // Multi-byte input must not panic on slicing
        assert!(Rgb::from_hex("#a€bc").is_err());
    }

    #[test]
    fn test_digit_pairs_map_to_channels_in_order() {
        assert_eq!(Rgb::from_hex("#12AB34").unwrap(), Rgb::new(0x12, 0xab, 0x34));
        assert_eq!(Rgb::from_hex("#0000ff").unwrap(), Rgb::new(0, 0, 255));
        assert_eq!(Rgb::from_hex("#ff0000").unwrap(), Rgb::new(255, 0, 0));

        // A sign is never accepted as part of the digits
        assert!(matches!(
            Rgb::from_hex("#+fffff"),
            Err(ColorError::InvalidHex {
                reason: HexErrorReason::InvalidDigit { found: '+' },
                ..
            })
        ));
    }

    #[test]
    fn test_error_message_names_input() {
        let err = Rgb::from_hex("#12345").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("#12345"), "message: {message}");
        assert!(message.contains("found 5"), "message: {message}");
    }

    #[test]
    fn test_try_from_channels_range() {
        assert_eq!(
            Rgb::try_from_channels(0, 128, 255).unwrap(),
            Rgb::new(0, 128, 255)
        );
        assert_eq!(
            Rgb::try_from_channels(256, 0, 0).unwrap_err(),
            ColorError::channel_out_of_range(Channel::Red, 256)
        );
        assert_eq!(
            Rgb::try_from_channels(0, -1, 0).unwrap_err(),
            ColorError::channel_out_of_range(Channel::Green, -1)
        );
        assert!(matches!(
            Rgb::try_from_channels(0, 0, 1000),
            Err(ColorError::ChannelOutOfRange {
                channel: Channel::Blue,
                ..
            })
        ));
    }

    #[test]
    fn test_packed_conversion() {
        let color = Rgb::from_u32(0x12ab34);
        assert_eq!(color, Rgb::new(0x12, 0xab, 0x34));
        assert_eq!(color.to_u32(), 0x12ab34);
        assert_eq!(Rgb::from_u32(0xff00_0000), Rgb::BLACK);
    }

    #[test]
    fn test_serde_uses_hex_string() {
        let json = serde_json::to_string(&Rgb::new(0xaa, 0xbb, 0xcc)).unwrap();
        assert_eq!(json, "\"#AABBCC\"");

        let parsed: Rgb = serde_json::from_str("\"#595959\"").unwrap();
        assert_eq!(parsed, Rgb::new(0x59, 0x59, 0x59));

        assert!(serde_json::from_str::<Rgb>("\"#fff\"").is_err());
    }
}
