// src/lib.rs

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;

pub mod codec;
pub mod export;
pub mod matcher;
pub mod store;
pub mod table;

pub use codec::{decode, encode, format_position, parse_position};
pub use export::to_csv;
pub use matcher::{circular_distance, compute_aspects, AspectResult};
pub use store::PointStore;
pub use table::{AspectTable, AspectVariant, ASPECT_VARIANTS, CONJUNCTION, CONJUNCTION_ORB_MINUTES};

// ---------------------------
// ## Constants
// ---------------------------

/// Arc-minutes in one zodiac sign (30 degrees).
pub const MINUTES_PER_SIGN: u32 = 1800;

/// Arc-minutes in the full circle (12 signs, 360 degrees).
pub const CIRCLE_MINUTES: u32 = 21600;

// ---------------------------
// ## Enumerations
// ---------------------------

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ZodiacSign {
    Aries = 0,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

impl ZodiacSign {
    pub fn from_index(index: usize) -> Option<ZodiacSign> {
        match index {
            0 => Some(ZodiacSign::Aries),
            1 => Some(ZodiacSign::Taurus),
            2 => Some(ZodiacSign::Gemini),
            3 => Some(ZodiacSign::Cancer),
            4 => Some(ZodiacSign::Leo),
            5 => Some(ZodiacSign::Virgo),
            6 => Some(ZodiacSign::Libra),
            7 => Some(ZodiacSign::Scorpio),
            8 => Some(ZodiacSign::Sagittarius),
            9 => Some(ZodiacSign::Capricorn),
            10 => Some(ZodiacSign::Aquarius),
            11 => Some(ZodiacSign::Pisces),
            _ => None,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            ZodiacSign::Aries => "♈",
            ZodiacSign::Taurus => "♉",
            ZodiacSign::Gemini => "♊",
            ZodiacSign::Cancer => "♋",
            ZodiacSign::Leo => "♌",
            ZodiacSign::Virgo => "♍",
            ZodiacSign::Libra => "♎",
            ZodiacSign::Scorpio => "♏",
            ZodiacSign::Sagittarius => "♐",
            ZodiacSign::Capricorn => "♑",
            ZodiacSign::Aquarius => "♒",
            ZodiacSign::Pisces => "♓",
        }
    }

    pub fn from_symbol(symbol: &str) -> Option<ZodiacSign> {
        ZodiacSign::all().find(|sign| sign.symbol() == symbol)
    }

    pub fn all() -> impl Iterator<Item = ZodiacSign> {
        (0..12).map(ZodiacSign::from_index).flatten()
    }
}

impl fmt::Display for ZodiacSign {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let sign_str = match self {
            ZodiacSign::Aries => "Aries",
            ZodiacSign::Taurus => "Taurus",
            ZodiacSign::Gemini => "Gemini",
            ZodiacSign::Cancer => "Cancer",
            ZodiacSign::Leo => "Leo",
            ZodiacSign::Virgo => "Virgo",
            ZodiacSign::Libra => "Libra",
            ZodiacSign::Scorpio => "Scorpio",
            ZodiacSign::Sagittarius => "Sagittarius",
            ZodiacSign::Capricorn => "Capricorn",
            ZodiacSign::Aquarius => "Aquarius",
            ZodiacSign::Pisces => "Pisces",
        };
        write!(f, "{}", sign_str)
    }
}

// ---------------------------
// ## Structures
// ---------------------------

/// Arc-minute index on the 21600-unit circle, 0 at Aries 0°0′.
pub type Position = u32;

/// A registered chart point: a user label plus its encoded position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point {
    pub label: String,
    pub position: Position,
}

impl Point {
    /// Human-readable rendition, e.g. `Gemini 26°45′`.
    pub fn describe(&self) -> String {
        let (sign, degree, minute) = codec::decode(self.position);
        format!("{} {}°{}′", sign, degree, minute)
    }
}

// ---------------------------
// ## Error Handling
// ---------------------------

#[derive(Debug)]
pub enum AspectError {
    InvalidInput(String),
    DatasetLoadFailure(String),
}

impl fmt::Display for AspectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AspectError::InvalidInput(msg) => write!(f, "Invalid Input: {}", msg),
            AspectError::DatasetLoadFailure(msg) => write!(f, "Dataset Load Failure: {}", msg),
        }
    }
}

impl Error for AspectError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_index_round_trip() {
        for (i, sign) in ZodiacSign::all().enumerate() {
            assert_eq!(ZodiacSign::from_index(i), Some(sign));
            assert_eq!(sign as usize, i);
        }
        assert_eq!(ZodiacSign::from_index(12), None);
    }

    #[test]
    fn test_symbol_round_trip() {
        for sign in ZodiacSign::all() {
            assert_eq!(ZodiacSign::from_symbol(sign.symbol()), Some(sign));
        }
        assert_eq!(ZodiacSign::from_symbol("x"), None);
    }

    #[test]
    fn test_point_describe() {
        let point = Point {
            label: "Sun".to_string(),
            position: 2 * MINUTES_PER_SIGN + 26 * 60 + 45,
        };
        assert_eq!(point.describe(), "Gemini 26°45′");
    }
}
