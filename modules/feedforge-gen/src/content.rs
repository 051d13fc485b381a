//! Content synthesis: one sentence per call, drawn from a fixed template per
//! (tier, veracity) pair with randomized slot-fillers.
//!
//! The template space is deliberately bounded so generated posts stay
//! pattern-recognizable for the quiz while still varying across calls.
//! Fillers live in const tables rather than inline literals so the full
//! vocabulary per tier is visible in one place.

use rand::Rng;

use feedforge_common::Difficulty;

/// Topic labels used in reasoning strings.
pub const TOPICS: [&str; 7] = [
    "Economy",
    "Science",
    "Geopolitics",
    "Health",
    "Climate",
    "Tech",
    "Space",
];

// Slot-filler vocabularies, grouped by (tier, veracity) template.
const EASY_FAKE_SUBJECTS: [&str; 3] = ["clouds", "rocks", "ocean water"];
const EASY_FAKE_MATERIALS: [&str; 3] = ["sugar", "plastic", "alien DNA"];
const EASY_REAL_DESTINATIONS: [&str; 3] = ["Mars", "Jupiter", "the Moon"];

const MEDIUM_FAKE_TARGETS: [&str; 3] = ["cryptocurrency", "AI", "EVs"];
const MEDIUM_FAKE_MOTIVES: [&str; 3] = ["read your mail", "limit your travel", "track your sleep"];
const MEDIUM_REAL_CATALYSTS: [&str; 3] = ["jobs report", "inflation data", "tech merger"];

const HARD_FAKE_INSTITUTIONS: [&str; 3] = ["CERN", "IMF", "WHO"];
const HARD_FAKE_CRISES: [&str; 3] = ["energy crisis", "yield curve", "viral variant"];
const HARD_REAL_JOURNALS: [&str; 3] = ["Nature", "Science", "The Lancet"];
const HARD_REAL_FIELDS: [&str; 3] = [
    "carbon sequestration",
    "quantum decoherence",
    "neural plasticity",
];

const IMPOSSIBLE_FAKE_TREATIES: [&str; 3] = [
    "Maritime Protocol",
    "Digital Services Act",
    "Aviation Treaty",
];
const IMPOSSIBLE_FAKE_SUBJECTS: [&str; 3] =
    ["data encryption", "territorial waters", "airspace rights"];
const IMPOSSIBLE_REAL_STANDARDS: [&str; 3] = [
    "Harmonized Tariff Schedule",
    "ISO 27001",
    "GAAP standards",
];
const IMPOSSIBLE_REAL_FOOTNOTES: [&str; 3] = [
    "piezo-electric sensors",
    "intangible depreciation",
    "risk parity",
];

pub(crate) fn pick(rng: &mut impl Rng, table: &[&'static str]) -> &'static str {
    table[rng.random_range(0..table.len())]
}

/// Synthesize one post body. Pure: the output depends only on the tier, the
/// flag, and the rng draws.
pub fn synthesize(tier: Difficulty, misinfo: bool, rng: &mut impl Rng) -> String {
    match (tier, misinfo) {
        (Difficulty::Easy, true) => format!(
            "BREAKING: Scientists discover that {} is actually made of {}. #Shocking",
            pick(rng, &EASY_FAKE_SUBJECTS),
            pick(rng, &EASY_FAKE_MATERIALS),
        ),
        (Difficulty::Easy, false) => format!(
            "NASA's latest mission to {} successfully enters orbit today. #Space #NASA",
            pick(rng, &EASY_REAL_DESTINATIONS),
        ),
        (Difficulty::Medium, true) => format!(
            "New regulations on {} are secretly a way for governments to {}.",
            pick(rng, &MEDIUM_FAKE_TARGETS),
            pick(rng, &MEDIUM_FAKE_MOTIVES),
        ),
        (Difficulty::Medium, false) => format!(
            "Global markets respond to the latest {} with moderate gains. #Finance",
            pick(rng, &MEDIUM_REAL_CATALYSTS),
        ),
        (Difficulty::Hard, true) => format!(
            "Leaked {} documents suggest that the current {} was modeled in 2014 as a 'behavioral test'.",
            pick(rng, &HARD_FAKE_INSTITUTIONS),
            pick(rng, &HARD_FAKE_CRISES),
        ),
        (Difficulty::Hard, false) => format!(
            "The latest peer-reviewed findings in {} indicate a {}% variance in {}.",
            pick(rng, &HARD_REAL_JOURNALS),
            rng.random_range(2..=8),
            pick(rng, &HARD_REAL_FIELDS),
        ),
        (Difficulty::Impossible, true) => format!(
            "Sub-section 4(c) of the {} {} secretly redefines {} as 'negotiable assets'.",
            rng.random_range(2010..=2024),
            pick(rng, &IMPOSSIBLE_FAKE_TREATIES),
            pick(rng, &IMPOSSIBLE_FAKE_SUBJECTS),
        ),
        (Difficulty::Impossible, false) => format!(
            "The {} revision of the {} includes a clarifying footnote on {}.",
            rng.random_range(2010..=2024),
            pick(rng, &IMPOSSIBLE_REAL_STANDARDS),
            pick(rng, &IMPOSSIBLE_REAL_FOOTNOTES),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn easy_misinformation_is_the_absurd_template() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let content = synthesize(Difficulty::Easy, true, &mut rng);
            assert!(content.starts_with("BREAKING: Scientists discover that "));
            assert!(content.ends_with(". #Shocking"));
        }
    }

    #[test]
    fn hard_verified_percentage_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let content = synthesize(Difficulty::Hard, false, &mut rng);
            let pct: u32 = content
                .split('%')
                .next()
                .and_then(|s| s.rsplit(' ').next())
                .and_then(|s| s.parse().ok())
                .expect("hard verified template carries a percentage");
            assert!((2..=8).contains(&pct), "percentage {pct} out of range");
        }
    }

    #[test]
    fn impossible_templates_cite_a_plausible_year() {
        let mut rng = StdRng::seed_from_u64(7);
        for misinfo in [true, false] {
            for _ in 0..100 {
                let content = synthesize(Difficulty::Impossible, misinfo, &mut rng);
                let year: u32 = content
                    .split_whitespace()
                    .find_map(|w| w.parse().ok())
                    .expect("impossible template carries a year");
                assert!((2010..=2024).contains(&year), "year {year} out of range");
            }
        }
    }

    #[test]
    fn output_varies_across_calls() {
        let mut rng = StdRng::seed_from_u64(7);
        let samples: std::collections::HashSet<String> = (0..30)
            .map(|_| synthesize(Difficulty::Medium, true, &mut rng))
            .collect();
        assert!(samples.len() > 1, "filler slots never varied");
    }
}
