//! Record assembly: walks the configured tiers, pairs every Verified post
//! with a Misinformation post, and assigns ids from per-tier bands.

use std::path::Path;

use chrono::{Duration, SecondsFormat};
use rand::Rng;
use tracing::debug;

use feedforge_common::{Difficulty, FeedForgeError, GenConfig, Post, Veracity};

use crate::catalog::{Identity, IdentityCatalog};
use crate::content::{pick, synthesize, TOPICS};

/// Tier bands are spaced this far apart; a slot count past it would run one
/// tier's Verified ids into the next band.
const BAND_SPACING: u64 = 10_000;

/// Added to a Verified id to produce its paired Misinformation id. Sits past
/// the last tier band so fake ids stay disjoint from every Verified band.
const FAKE_ID_OFFSET: u64 = 40_000;

/// Generate the full dataset in one pass.
///
/// For each tier, each slot i produces exactly two posts: a Verified post
/// with id `band + i` attributed to a genuine account, and a Misinformation
/// post with id `band + i + FAKE_ID_OFFSET`. Tiers are emitted in configured
/// order, slots in order, Verified before Misinformation within a slot.
pub fn generate(
    catalog: &IdentityCatalog,
    config: &GenConfig,
    rng: &mut impl Rng,
) -> Result<Vec<Post>, FeedForgeError> {
    if config.posts_per_tier > BAND_SPACING {
        return Err(FeedForgeError::Config(format!(
            "posts_per_tier ({}) exceeds the id band spacing ({BAND_SPACING}); ids would collide",
            config.posts_per_tier
        )));
    }

    let mut posts = Vec::with_capacity((config.tiers.len() as u64 * config.posts_per_tier * 2) as usize);

    for &tier in &config.tiers {
        let band = tier.band_offset();
        for i in 0..config.posts_per_tier {
            let identity = catalog.pick_category(rng)?.pick_genuine(rng)?;
            posts.push(assemble_post(
                band + i,
                identity,
                tier,
                Veracity::Verified,
                config,
                rng,
            ));

            let identity = catalog
                .pick_category(rng)?
                .pick_impersonating_or_genuine(tier, rng)?;
            posts.push(assemble_post(
                band + i + FAKE_ID_OFFSET,
                identity,
                tier,
                Veracity::Misinformation,
                config,
                rng,
            ));
        }
        debug!(tier = %tier, band, posts = config.posts_per_tier * 2, "Tier generated");
    }

    Ok(posts)
}

fn assemble_post(
    id: u64,
    identity: Identity,
    tier: Difficulty,
    veracity: Veracity,
    config: &GenConfig,
    rng: &mut impl Rng,
) -> Post {
    let content = synthesize(tier, veracity == Veracity::Misinformation, rng);

    let offset = Duration::minutes(rng.random_range(0..config.timestamp_window_minutes));
    let timestamp = (config.base_instant + offset).to_rfc3339_opts(SecondsFormat::Secs, true);

    let topic = pick(rng, &TOPICS).to_lowercase();
    let reasoning = match veracity {
        Veracity::Verified => {
            format!("This is a factual statement about {topic} from a verified source.")
        }
        Veracity::Misinformation => {
            format!("This is a deceptive claim about {topic} designed to mislead readers.")
        }
    };

    Post {
        id,
        username: identity.username.to_string(),
        handle: identity.handle.to_string(),
        avatar: identity.avatar.to_string(),
        content,
        timestamp,
        veracity,
        reasoning,
        difficulty: tier,
    }
}

/// Serialize the dataset and write it as one pretty-printed JSON array.
pub fn write_dataset(posts: &[Post], path: &Path) -> Result<(), FeedForgeError> {
    let json = serde_json::to_string_pretty(posts)?;
    std::fs::write(path, json)?;
    Ok(())
}
