use crate::api::{download_image, fetch_card_page};
use crate::card::CardData;
use crate::error::ScrapeError;
use crate::lotr::scrape_lotr_card;
use crate::markdown::write_card;
use reqwest::Client;
use std::ops::AddAssign;
use std::path::Path;
use tracing::{info, warn};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub saved: usize,
    pub failed: usize,
}

impl AddAssign for RunSummary {
    fn add_assign(&mut self, other: RunSummary) {
        self.saved += other.saved;
        self.failed += other.failed;
    }
}

pub fn card_url(base_url: &str, set: u32, index: u32) -> String {
    format!("{}/lotr{:02}{:03}", base_url, set, index)
}

/// Scrapes every set in order. Per-card failures are logged and counted,
/// never returned.
pub async fn scrape_sets(
    client: &Client,
    base_url: &str,
    output_dir: &Path,
    sets: &[u32],
) -> RunSummary {
    let mut summary = RunSummary::default();
    for &set in sets {
        summary += scrape_set(client, base_url, output_dir, set).await;
    }
    info!(
        "Done: {} cards saved, {} failed",
        summary.saved, summary.failed
    );
    summary
}

/// Walks card indexes from 1 until the site stops answering 200 or a page
/// no longer parses as a card.
pub async fn scrape_set(client: &Client, base_url: &str, output_dir: &Path, set: u32) -> RunSummary {
    info!("Scraping set {}", set);
    let mut summary = RunSummary::default();

    for index in 1.. {
        let url = card_url(base_url, set, index);
        info!("Fetching {}", url);

        let body = match fetch_card_page(client, &url).await {
            Ok(body) => body,
            Err(ScrapeError::HttpNonOk { status, .. }) => {
                info!("Set {} ended at {} ({})", set, url, status);
                break;
            }
            Err(e @ ScrapeError::ParseFailed(_)) => {
                warn!("Error reading {}: {}", url, e);
                summary.failed += 1;
                break;
            }
            Err(e) => {
                warn!("Error fetching {}: {}", url, e);
                break;
            }
        };

        let mut card = match scrape_lotr_card(body.as_slice(), base_url) {
            Ok(card) => card,
            Err(e) => {
                warn!("Error scraping {}: {}", url, e);
                summary.failed += 1;
                break;
            }
        };
        card.renumber(set, index);

        match save_card(client, output_dir, &card).await {
            Ok(()) => summary.saved += 1,
            Err(e) => {
                warn!("Error saving {}: {}", url, e);
                summary.failed += 1;
            }
        }
    }

    summary
}

async fn save_card(client: &Client, output_dir: &Path, card: &CardData) -> Result<(), ScrapeError> {
    let set_dir = output_dir.join(&card.set_no);
    // No image means no markdown either.
    download_image(client, &card.image_url, &set_dir, &card.image_path).await?;

    let md_path = write_card(output_dir, card)?;
    info!(
        "Card {} {} saved: {}",
        card.card_id(),
        card.title,
        md_path.display()
    );
    Ok(())
}
