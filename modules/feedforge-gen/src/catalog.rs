//! Static identity catalog: the accounts posts get attributed to.
//!
//! Each category pairs genuine accounts with spoof accounts that imitate a
//! genuine display name under an altered handle. The catalog is built once at
//! startup and only ever read; every selection takes the caller's rng so
//! tests can fix a seed.

use rand::seq::IndexedRandom;
use rand::Rng;

use feedforge_common::{Difficulty, FeedForgeError};

/// One posting account the generator can attribute content to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Identity {
    pub username: &'static str,
    pub handle: &'static str,
    pub avatar: &'static str,
}

/// A category of accounts: genuine sources plus the spoof accounts that
/// imitate them. The two lists are disjoint by handle.
pub struct CategoryProfile {
    pub key: &'static str,
    pub genuine: Vec<Identity>,
    pub impersonating: Vec<Identity>,
}

impl CategoryProfile {
    /// Uniformly pick a genuine identity. An empty genuine list is a
    /// configuration error, not a runtime condition.
    pub fn pick_genuine(&self, rng: &mut impl Rng) -> Result<Identity, FeedForgeError> {
        self.genuine.choose(rng).copied().ok_or_else(|| {
            FeedForgeError::Config(format!("Category '{}' has no genuine identities", self.key))
        })
    }

    /// Pick the account a misinformation post is attributed to. For hard and
    /// impossible tiers, a uniform draw above 0.4 attributes it to a genuine
    /// identity instead of a spoof — harder tiers simulate misinformation
    /// issued under a seemingly legitimate name. Easy and medium always use
    /// a spoof account.
    pub fn pick_impersonating_or_genuine(
        &self,
        tier: Difficulty,
        rng: &mut impl Rng,
    ) -> Result<Identity, FeedForgeError> {
        if matches!(tier, Difficulty::Hard | Difficulty::Impossible) && rng.random::<f64>() > 0.4 {
            return self.pick_genuine(rng);
        }
        self.impersonating.choose(rng).copied().ok_or_else(|| {
            FeedForgeError::Config(format!(
                "Category '{}' has no impersonating identities",
                self.key
            ))
        })
    }
}

/// The full catalog, keyed by category.
pub struct IdentityCatalog {
    pub categories: Vec<CategoryProfile>,
}

impl IdentityCatalog {
    /// The built-in catalog: news outlets, government bodies, tech executives.
    pub fn builtin() -> Self {
        Self {
            categories: vec![news_profile(), govt_profile(), tech_ceo_profile()],
        }
    }

    /// Uniformly pick one category.
    pub fn pick_category(&self, rng: &mut impl Rng) -> Result<&CategoryProfile, FeedForgeError> {
        self.categories
            .choose(rng)
            .ok_or_else(|| FeedForgeError::Config("Identity catalog has no categories".to_string()))
    }
}

fn ident(username: &'static str, handle: &'static str, avatar: &'static str) -> Identity {
    Identity {
        username,
        handle,
        avatar,
    }
}

fn news_profile() -> CategoryProfile {
    CategoryProfile {
        key: "news",
        genuine: vec![
            ident(
                "The New York Times",
                "nytimes",
                "https://ui-avatars.com/api/?background=random&name=nytimes.com",
            ),
            ident(
                "BBC News",
                "BBCNews",
                "https://ui-avatars.com/api/?background=random&name=bbc.co.uk",
            ),
            ident(
                "Reuters",
                "Reuters",
                "https://ui-avatars.com/api/?background=random&name=reuters.com",
            ),
            ident(
                "The Wall Street Journal",
                "WSJ",
                "https://ui-avatars.com/api/?background=random&name=wsj.com",
            ),
            ident(
                "Associated Press",
                "AP",
                "https://ui-avatars.com/api/?background=random&name=apnews.com",
            ),
            ident(
                "Bloomberg",
                "business",
                "https://ui-avatars.com/api/?background=random&name=bloomberg.com",
            ),
            ident(
                "The Economist",
                "TheEconomist",
                "https://ui-avatars.com/api/?background=random&name=economist.com",
            ),
        ],
        impersonating: vec![
            ident(
                "The New York Times",
                "ny_times_daily",
                "https://ui-avatars.com/api/?background=random&name=nytimes.com",
            ),
            ident(
                "BBC News",
                "BBC_News_Flash",
                "https://ui-avatars.com/api/?background=random&name=bbc.co.uk",
            ),
            ident(
                "Reuters News",
                "Reuters_Official",
                "https://ui-avatars.com/api/?background=random&name=reuters.com",
            ),
            ident(
                "WSJ Breaking",
                "WSJ_News_Alert",
                "https://ui-avatars.com/api/?background=random&name=wsj.com",
            ),
            ident(
                "Bloomberg News",
                "bloomberg_live",
                "https://ui-avatars.com/api/?background=random&name=bloomberg.com",
            ),
        ],
    }
}

fn govt_profile() -> CategoryProfile {
    CategoryProfile {
        key: "govt",
        genuine: vec![
            ident(
                "NASA",
                "NASA",
                "https://ui-avatars.com/api/?background=random&name=NASA",
            ),
            ident(
                "Dept. of Treasury",
                "USTreasury",
                "https://ui-avatars.com/api/?background=random&name=TREASURY",
            ),
            ident(
                "European Central Bank",
                "ecb",
                "https://ui-avatars.com/api/?background=random&name=ECB",
            ),
            ident(
                "United Nations",
                "UN",
                "https://ui-avatars.com/api/?background=random&name=UN",
            ),
            ident(
                "Department of State",
                "StateDept",
                "https://ui-avatars.com/api/?background=random&name=STATE",
            ),
        ],
        impersonating: vec![
            ident(
                "NASA Updates",
                "NASA_Live_X",
                "https://ui-avatars.com/api/?background=random&name=NASA",
            ),
            ident(
                "Treasury Dept",
                "Treasury_Updates",
                "https://ui-avatars.com/api/?background=random&name=TREASURY",
            ),
            ident(
                "ECB News",
                "ECB_Official_News",
                "https://ui-avatars.com/api/?background=random&name=ECB",
            ),
            ident(
                "State Dept Global",
                "StateDept_Global",
                "https://ui-avatars.com/api/?background=random&name=STATE",
            ),
        ],
    }
}

fn tech_ceo_profile() -> CategoryProfile {
    CategoryProfile {
        key: "tech_ceo",
        genuine: vec![
            ident("Elon Musk", "elonmusk", "https://i.pravatar.cc/150?u=elon"),
            ident(
                "Satya Nadella",
                "satyanadella",
                "https://i.pravatar.cc/150?u=satya",
            ),
            ident(
                "Sundar Pichai",
                "sundarpichai",
                "https://i.pravatar.cc/150?u=sundar",
            ),
            ident("Sam Altman", "sama", "https://i.pravatar.cc/150?u=sama"),
            ident(
                "Jensen Huang",
                "jensenh_nvidia",
                "https://i.pravatar.cc/150?u=jensen",
            ),
        ],
        impersonating: vec![
            ident(
                "Elon Musk",
                "elon_musk_office",
                "https://i.pravatar.cc/150?u=elon",
            ),
            ident(
                "Sam Altman",
                "sama_openai_ceo",
                "https://i.pravatar.cc/150?u=sama",
            ),
            ident(
                "Satya Nadella",
                "satya_nadella_ms",
                "https://i.pravatar.cc/150?u=satya",
            ),
            ident(
                "Sundar Pichai",
                "sundar_pichai_google",
                "https://i.pravatar.cc/150?u=sundar",
            ),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn genuine_and_spoof_handles_are_disjoint_per_category() {
        for cat in IdentityCatalog::builtin().categories {
            for spoof in &cat.impersonating {
                assert!(
                    !cat.genuine.iter().any(|g| g.handle == spoof.handle),
                    "spoof handle {} collides with a genuine handle in '{}'",
                    spoof.handle,
                    cat.key
                );
            }
        }
    }

    #[test]
    fn easy_and_medium_misinformation_always_uses_spoof_accounts() {
        let catalog = IdentityCatalog::builtin();
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..200 {
            for tier in [Difficulty::Easy, Difficulty::Medium] {
                let cat = catalog.pick_category(&mut rng).unwrap();
                let identity = cat.pick_impersonating_or_genuine(tier, &mut rng).unwrap();
                assert!(cat.impersonating.contains(&identity));
            }
        }
    }

    #[test]
    fn hard_misinformation_draws_from_both_lists() {
        let catalog = IdentityCatalog::builtin();
        let mut rng = StdRng::seed_from_u64(42);
        let mut genuine_hits = 0;
        let mut spoof_hits = 0;
        for _ in 0..500 {
            let cat = catalog.pick_category(&mut rng).unwrap();
            let identity = cat
                .pick_impersonating_or_genuine(Difficulty::Hard, &mut rng)
                .unwrap();
            if cat.genuine.contains(&identity) {
                genuine_hits += 1;
            } else {
                assert!(cat.impersonating.contains(&identity));
                spoof_hits += 1;
            }
        }
        // p = 0.6 for the genuine branch; 500 draws make both branches certain.
        assert!(genuine_hits > 0, "genuine branch never fired");
        assert!(spoof_hits > 0, "spoof branch never fired");
        assert!(genuine_hits > spoof_hits);
    }

    #[test]
    fn empty_genuine_list_is_a_config_error() {
        let cat = CategoryProfile {
            key: "broken",
            genuine: vec![],
            impersonating: vec![],
        };
        let mut rng = StdRng::seed_from_u64(1);
        let err = cat.pick_genuine(&mut rng).unwrap_err();
        assert!(err.to_string().contains("broken"));
    }
}
