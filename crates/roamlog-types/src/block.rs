use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::Error;

/// Kind of a journal block
///
/// Used as the discriminant that decides which fields of a block's data are
/// meaningful. Encoded on the wire as its TitleCase name (`"Moment"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BlockType {
    /// Dated story with an optional passport-style stamp
    Moment,
    /// Place recommendation (stay/eat/do/shop) with rating and price level
    Recommendation,
    /// Single image with caption
    Photo,
    /// Short practical tip
    Tip,
    /// Visual separator, carries no data
    Divider,
}

impl BlockType {
    pub const ALL: [BlockType; 5] = [
        BlockType::Moment,
        BlockType::Recommendation,
        BlockType::Photo,
        BlockType::Tip,
        BlockType::Divider,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BlockType::Moment => "Moment",
            BlockType::Recommendation => "Recommendation",
            BlockType::Photo => "Photo",
            BlockType::Tip => "Tip",
            BlockType::Divider => "Divider",
        }
    }

    /// Whether a location attached to this kind of block is meaningful
    pub fn supports_location(&self) -> bool {
        matches!(self, BlockType::Moment | BlockType::Recommendation)
    }
}

impl fmt::Display for BlockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Category of a recommendation block. Encoded as a lowercase literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationCategory {
    Stay,
    Eat,
    Do,
    Shop,
}

impl RecommendationCategory {
    pub const ALL: [RecommendationCategory; 4] = [
        RecommendationCategory::Stay,
        RecommendationCategory::Eat,
        RecommendationCategory::Do,
        RecommendationCategory::Shop,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RecommendationCategory::Stay => "stay",
            RecommendationCategory::Eat => "eat",
            RecommendationCategory::Do => "do",
            RecommendationCategory::Shop => "shop",
        }
    }
}

impl fmt::Display for RecommendationCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Letter grade attached to a recommendation, best first.
///
/// The integer encoding (`S = 0` .. `F = 5`) is part of the wire contract
/// and must never be renumbered. Ordering follows the raw value, so `S` is
/// the smallest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
#[repr(u8)]
pub enum Rating {
    S = 0,
    A = 1,
    B = 2,
    C = 3,
    D = 4,
    F = 5,
}

impl Rating {
    pub const ALL: [Rating; 6] = [
        Rating::S,
        Rating::A,
        Rating::B,
        Rating::C,
        Rating::D,
        Rating::F,
    ];

    pub fn raw_value(self) -> u8 {
        self as u8
    }

    pub fn from_raw(raw: i64) -> Option<Self> {
        match raw {
            0 => Some(Rating::S),
            1 => Some(Rating::A),
            2 => Some(Rating::B),
            3 => Some(Rating::C),
            4 => Some(Rating::D),
            5 => Some(Rating::F),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Rating::S => "S",
            Rating::A => "A",
            Rating::B => "B",
            Rating::C => "C",
            Rating::D => "D",
            Rating::F => "F",
        }
    }
}

impl TryFrom<i64> for Rating {
    type Error = Error;

    fn try_from(raw: i64) -> Result<Self, Self::Error> {
        Rating::from_raw(raw).ok_or(Error::InvalidRating(raw))
    }
}

impl From<Rating> for i64 {
    fn from(rating: Rating) -> Self {
        i64::from(rating.raw_value())
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_raw_values_are_stable() {
        assert_eq!(Rating::S.raw_value(), 0);
        assert_eq!(Rating::A.raw_value(), 1);
        assert_eq!(Rating::B.raw_value(), 2);
        assert_eq!(Rating::C.raw_value(), 3);
        assert_eq!(Rating::D.raw_value(), 4);
        assert_eq!(Rating::F.raw_value(), 5);
    }

    #[test]
    fn test_rating_order_follows_raw_value() {
        for pair in Rating::ALL.windows(2) {
            assert!(pair[0] < pair[1], "{} should sort before {}", pair[0], pair[1]);
        }
        for a in Rating::ALL {
            for b in Rating::ALL {
                assert_eq!(a < b, a.raw_value() < b.raw_value());
            }
        }
    }

    #[test]
    fn test_rating_wire_encoding() {
        assert_eq!(serde_json::to_string(&Rating::S).unwrap(), "0");
        assert_eq!(serde_json::to_string(&Rating::F).unwrap(), "5");
        let parsed: Rating = serde_json::from_str("2").unwrap();
        assert_eq!(parsed, Rating::B);
    }

    #[test]
    fn test_rating_rejects_out_of_range() {
        assert!(serde_json::from_str::<Rating>("6").is_err());
        assert!(serde_json::from_str::<Rating>("-1").is_err());
        assert_eq!(Rating::try_from(9), Err(Error::InvalidRating(9)));
    }

    #[test]
    fn test_block_type_wire_encoding() {
        assert_eq!(
            serde_json::to_string(&BlockType::Recommendation).unwrap(),
            "\"Recommendation\""
        );
        let parsed: BlockType = serde_json::from_str("\"Divider\"").unwrap();
        assert_eq!(parsed, BlockType::Divider);
        for block_type in BlockType::ALL {
            let json = serde_json::to_string(&block_type).unwrap();
            assert_eq!(json, format!("\"{}\"", block_type.as_str()));
        }
    }

    #[test]
    fn test_category_wire_encoding() {
        for category in RecommendationCategory::ALL {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category.as_str()));
        }
        let parsed: RecommendationCategory = serde_json::from_str("\"do\"").unwrap();
        assert_eq!(parsed, RecommendationCategory::Do);
        assert!(serde_json::from_str::<RecommendationCategory>("\"Eat\"").is_err());
    }

    #[test]
    fn test_supports_location() {
        assert!(BlockType::Moment.supports_location());
        assert!(BlockType::Recommendation.supports_location());
        assert!(!BlockType::Photo.supports_location());
        assert!(!BlockType::Tip.supports_location());
        assert!(!BlockType::Divider.supports_location());
    }
}
