use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::FeedForgeError;

// --- Enums ---

/// How sophisticated the synthesized content is. Tiers are ordered: easy
/// posts make absurd claims, impossible posts cite fabricated legal and
/// technical sources.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Impossible,
}

impl Difficulty {
    /// All tiers, in generation/output order.
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Easy,
        Difficulty::Medium,
        Difficulty::Hard,
        Difficulty::Impossible,
    ];

    /// Base id for this tier's records. Verified records in a tier occupy
    /// [band, band + slots); Misinformation records sit a fixed offset above.
    pub fn band_offset(&self) -> u64 {
        match self {
            Difficulty::Easy => 10_000,
            Difficulty::Medium => 20_000,
            Difficulty::Hard => 30_000,
            Difficulty::Impossible => 40_000,
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "easy"),
            Difficulty::Medium => write!(f, "medium"),
            Difficulty::Hard => write!(f, "hard"),
            Difficulty::Impossible => write!(f, "impossible"),
        }
    }
}

impl std::str::FromStr for Difficulty {
    type Err = FeedForgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            "impossible" => Ok(Difficulty::Impossible),
            other => Err(FeedForgeError::Config(format!(
                "Unknown difficulty: {other}. Supported: easy, medium, hard, impossible"
            ))),
        }
    }
}

/// Whether a post is truthful or deceptive. Serialized capitalized, as the
/// quiz front-end expects in its `type` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum Veracity {
    Verified,
    Misinformation,
}

impl std::fmt::Display for Veracity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Veracity::Verified => write!(f, "Verified"),
            Veracity::Misinformation => write!(f, "Misinformation"),
        }
    }
}

// --- Output record ---

/// One generated post, exactly as it lands in the output JSON array.
/// Assembled once, never mutated.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct Post {
    pub id: u64,
    pub username: String,
    pub handle: String,
    pub avatar: String,
    pub content: String,
    /// ISO-8601 instant with a trailing `Z`.
    pub timestamp: String,
    #[serde(rename = "type")]
    pub veracity: Veracity,
    pub reasoning: String,
    pub difficulty: Difficulty,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn difficulty_parses_all_known_tiers() {
        for tier in Difficulty::ALL {
            let parsed: Difficulty = tier.to_string().parse().expect("known tier parses");
            assert_eq!(parsed, tier);
        }
    }

    #[test]
    fn difficulty_rejects_unknown_tier() {
        let err = "extreme".parse::<Difficulty>().unwrap_err();
        assert!(err.to_string().contains("extreme"));
    }

    #[test]
    fn band_offsets_are_disjoint_and_ordered() {
        let bands: Vec<u64> = Difficulty::ALL.iter().map(|d| d.band_offset()).collect();
        assert_eq!(bands, vec![10_000, 20_000, 30_000, 40_000]);
    }

    #[test]
    fn post_serializes_with_front_end_field_names() {
        let post = Post {
            id: 10_000,
            username: "NASA".into(),
            handle: "NASA".into(),
            avatar: "https://ui-avatars.com/api/?background=random&name=NASA".into(),
            content: "test".into(),
            timestamp: "2025-12-27T00:00:00Z".into(),
            veracity: Veracity::Verified,
            reasoning: "test".into(),
            difficulty: Difficulty::Easy,
        };
        let json = serde_json::to_value(&post).unwrap();
        assert_eq!(json["type"], "Verified");
        assert_eq!(json["difficulty"], "easy");
        assert!(json.get("veracity").is_none());
    }
}
