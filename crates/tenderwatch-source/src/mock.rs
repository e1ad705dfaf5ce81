//! Synthetic tender generator.
//!
//! Stands in for real portal scraping: fabricates a small batch of plausible
//! procurement listings per fetch, with a short simulated network delay.
//! Roughly half of the templates are railway-related so the relevance filter
//! has genuine work to do.

use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{Duration as ChronoDuration, Utc};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::debug;

use tenderwatch_core::result::AppResult;
use tenderwatch_entity::{Portal, TenderDraft};

use crate::source::TenderSource;

/// One fabricated listing template.
struct Template {
    title: &'static str,
    organization: &'static str,
    category: &'static str,
    keywords: &'static [&'static str],
    value_range: (i64, i64),
}

const TEMPLATES: &[Template] = &[
    Template {
        title: "Construction of Elevated Metro Station Platform",
        organization: "Kochi Metro Rail Ltd",
        category: "Civil Works",
        keywords: &["metro", "station", "platform"],
        value_range: (50_000_000, 800_000_000),
    },
    Template {
        title: "Supply of Rolling Stock Spare Bogies",
        organization: "Integral Coach Factory",
        category: "Rolling Stock",
        keywords: &["rolling stock", "coach"],
        value_range: (100_000_000, 1_200_000_000),
    },
    Template {
        title: "Signalling and Train Control System Upgrade",
        organization: "Rail Vikas Nigam Ltd",
        category: "Signalling",
        keywords: &["signalling", "train control"],
        value_range: (80_000_000, 600_000_000),
    },
    Template {
        title: "Track Laying and Ballast Works, Phase II",
        organization: "Southern Railway",
        category: "Track Works",
        keywords: &["track", "railway"],
        value_range: (20_000_000, 300_000_000),
    },
    Template {
        title: "Depot Electrification and Substation Works",
        organization: "Kochi Metro Rail Ltd",
        category: "Electrical",
        keywords: &["depot", "electrification"],
        value_range: (30_000_000, 250_000_000),
    },
    Template {
        title: "Annual Supply of Office Stationery and Consumables",
        organization: "District Collectorate",
        category: "Supplies",
        keywords: &["stationery", "office"],
        value_range: (500_000, 5_000_000),
    },
    Template {
        title: "Canteen Catering Services, Two Year Contract",
        organization: "Public Works Department",
        category: "Services",
        keywords: &["catering", "canteen"],
        value_range: (1_000_000, 10_000_000),
    },
    Template {
        title: "Landscaping and Horticulture Maintenance",
        organization: "Municipal Corporation",
        category: "Services",
        keywords: &["landscaping", "horticulture"],
        value_range: (800_000, 8_000_000),
    },
];

const LOCATIONS: &[&str] = &["Kochi", "Ernakulam", "Aluva", "Thrissur", "Kakkanad", "Thripunithura"];

/// Maximum number of candidates fabricated per fetch.
const MAX_BATCH: usize = 4;

/// Simulated fetch delay bounds in milliseconds.
const DELAY_MS: (u64, u64) = (120, 450);

/// A [`TenderSource`] that fabricates listings instead of scraping.
pub struct MockTenderSource {
    rng: Mutex<StdRng>,
    simulate_delay: bool,
}

impl MockTenderSource {
    /// Create a generator seeded from OS entropy.
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
            simulate_delay: true,
        }
    }

    /// Create a deterministic generator with no simulated delay.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
            simulate_delay: false,
        }
    }

    fn generate(&self, portal: &Portal) -> Vec<TenderDraft> {
        let mut rng = match self.rng.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        let now = Utc::now();
        let count = rng.gen_range(0..=MAX_BATCH);
        let batch_tag: u32 = rng.gen_range(1000..10_000);

        (0..count)
            .map(|n| {
                let template = TEMPLATES
                    .choose(&mut *rng)
                    .unwrap_or(&TEMPLATES[0]);
                let location = LOCATIONS.choose(&mut *rng).unwrap_or(&LOCATIONS[0]);
                let value = rng.gen_range(template.value_range.0..=template.value_range.1);
                let published_days_ago = rng.gen_range(0..6);
                let deadline_days = rng.gen_range(7..60);

                TenderDraft {
                    external_id: format!(
                        "{}-{}-{}-{}",
                        portal.id.to_uppercase(),
                        now.format("%Y%m%d"),
                        batch_tag,
                        n
                    ),
                    title: template.title.to_string(),
                    organization: template.organization.to_string(),
                    description: format!(
                        "{} invites bids for: {}. Location: {}.",
                        template.organization, template.title, location
                    ),
                    value,
                    publish_date: now - ChronoDuration::days(published_days_ago),
                    submission_deadline: now + ChronoDuration::days(deadline_days),
                    location: location.to_string(),
                    category: template.category.to_string(),
                    keywords: template.keywords.iter().map(|k| k.to_string()).collect(),
                    source_name: portal.name.clone(),
                    source_url: portal.url.clone(),
                }
            })
            .collect()
    }
}

impl Default for MockTenderSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TenderSource for MockTenderSource {
    async fn fetch(&self, portal: &Portal) -> AppResult<Vec<TenderDraft>> {
        let drafts = self.generate(portal);

        if self.simulate_delay {
            let delay = {
                let mut rng = match self.rng.lock() {
                    Ok(guard) => guard,
                    Err(poisoned) => poisoned.into_inner(),
                };
                rng.gen_range(DELAY_MS.0..=DELAY_MS.1)
            };
            tokio::time::sleep(Duration::from_millis(delay)).await;
        }

        debug!(portal = %portal.id, candidates = drafts.len(), "Generated mock listings");
        Ok(drafts)
    }
}
