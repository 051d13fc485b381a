use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;
use tracing_subscriber::EnvFilter;

use feedforge_common::{Difficulty, GenConfig};
use feedforge_gen::assemble::{generate, write_dataset};
use feedforge_gen::catalog::IdentityCatalog;

/// Generate the synthetic post dataset for the media-literacy quiz.
#[derive(Parser, Debug)]
#[command(name = "feedforge-gen")]
struct Args {
    /// Output file path.
    #[arg(long, default_value = "posts.json")]
    out: PathBuf,

    /// Seed for the random source. Defaults to OS entropy; fix it to
    /// reproduce a dataset exactly.
    #[arg(long)]
    seed: Option<u64>,

    /// Verified/Misinformation pairs per difficulty tier.
    #[arg(long, default_value_t = 160)]
    posts_per_tier: u64,

    /// Comma-separated tiers to generate, in output order
    /// (default: easy,medium,hard,impossible).
    #[arg(long, value_delimiter = ',')]
    tiers: Option<Vec<String>>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("feedforge=info".parse()?))
        .init();

    let args = Args::parse();

    let mut config = GenConfig {
        posts_per_tier: args.posts_per_tier,
        out: args.out,
        ..GenConfig::default()
    };
    if let Some(tiers) = &args.tiers {
        // An unknown tier name aborts here, before anything is written.
        config.tiers = tiers
            .iter()
            .map(|t| t.parse::<Difficulty>())
            .collect::<Result<Vec<_>, _>>()?;
    }

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    info!(
        posts_per_tier = config.posts_per_tier,
        tiers = config.tiers.len(),
        "FeedForge generator starting..."
    );

    let catalog = IdentityCatalog::builtin();
    let posts = generate(&catalog, &config, &mut rng)?;
    write_dataset(&posts, &config.out)?;

    info!(posts = posts.len(), out = %config.out.display(), "Dataset written");
    println!("Generated {} posts -> {}", posts.len(), config.out.display());

    Ok(())
}
