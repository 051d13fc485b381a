use std::path::PathBuf;

use chrono::{DateTime, TimeZone, Utc};

use crate::types::Difficulty;

/// Generation parameters. `Default` reproduces the reference dataset shape:
/// 160 pairs per tier across all four tiers, 1280 posts total.
#[derive(Debug, Clone)]
pub struct GenConfig {
    /// All timestamps are random offsets from this instant.
    pub base_instant: DateTime<Utc>,
    /// Verified/Misinformation pairs generated per tier.
    pub posts_per_tier: u64,
    /// Tiers to generate, in output order.
    pub tiers: Vec<Difficulty>,
    /// Timestamps are spread uniformly over this many minutes after base.
    pub timestamp_window_minutes: i64,
    /// Where the JSON array is written.
    pub out: PathBuf,
}

impl Default for GenConfig {
    fn default() -> Self {
        Self {
            base_instant: Utc
                .with_ymd_and_hms(2025, 12, 27, 0, 0, 0)
                .single()
                .expect("base instant is a valid calendar date"),
            posts_per_tier: 160,
            tiers: Difficulty::ALL.to_vec(),
            timestamp_window_minutes: 100_000,
            out: PathBuf::from("posts.json"),
        }
    }
}
