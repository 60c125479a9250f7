//! Card-by-card extraction of job listings from the careers page markup.
//!
//! Extraction is best-effort: a card that can't be turned into a job is
//! skipped and logged, the rest of the page still counts. Zero jobs is a
//! valid result.

use anyhow::{anyhow, Result};
use chrono::NaiveDateTime;
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, warn};
use url::Url;

use crate::domains::listings::models::{
    JobRecord, JobSnapshot, MonitorTarget, DISTANCE_NOT_APPLICABLE,
};

const CARD_SELECTOR: &str =
    r#"li.results-list__item[data-testid="jobs-list-only_jobs-list_item"]"#;
const TITLE_SELECTOR: &str = "a.results-list__item-title--link";
const LOCATION_SELECTOR: &str = "span.results-list__item-street--label";
const BRAND_SELECTOR: &str = "span.results-list__item-brand--label";
const DISTANCE_SELECTOR: &str = "span.results-list__item-distance--label";

/// Why a card didn't produce a job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    MissingTitleAnchor,
    EmptyTitle,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardOutcome {
    Parsed(JobRecord),
    Skipped(SkipReason),
}

struct CardSelectors {
    card: Selector,
    title: Selector,
    location: Selector,
    brand: Selector,
    distance: Selector,
}

impl CardSelectors {
    fn new() -> Result<Self> {
        Ok(Self {
            card: parse_selector(CARD_SELECTOR)?,
            title: parse_selector(TITLE_SELECTOR)?,
            location: parse_selector(LOCATION_SELECTOR)?,
            brand: parse_selector(BRAND_SELECTOR)?,
            distance: parse_selector(DISTANCE_SELECTOR)?,
        })
    }
}

fn parse_selector(selector: &str) -> Result<Selector> {
    Selector::parse(selector).map_err(|e| anyhow!("invalid selector {:?}: {}", selector, e))
}

/// Parse the listing page into jobs keyed by identity, in page order.
///
/// Errors only when the page itself can't be processed; individual cards
/// never fail the page.
pub fn extract_jobs(
    html: &str,
    target: &MonitorTarget,
    found_at: NaiveDateTime,
) -> Result<JobSnapshot> {
    let selectors = CardSelectors::new()?;
    let document = Html::parse_document(html);

    let mut jobs = JobSnapshot::new();
    let mut skipped = 0usize;

    for card in document.select(&selectors.card) {
        match parse_card(card, &selectors, target, found_at) {
            CardOutcome::Parsed(job) => {
                let id = job.id();
                if jobs.insert(id.clone(), job).is_some() {
                    warn!(job_id = %id, "Duplicate job identity on page, keeping the last card");
                }
            }
            CardOutcome::Skipped(reason) => {
                skipped += 1;
                debug!(?reason, "Skipping job card");
            }
        }
    }

    debug!(jobs = jobs.len(), skipped, "Extracted job cards");
    Ok(jobs)
}

fn parse_card(
    card: ElementRef<'_>,
    selectors: &CardSelectors,
    target: &MonitorTarget,
    found_at: NaiveDateTime,
) -> CardOutcome {
    let Some(anchor) = card.select(&selectors.title).next() else {
        return CardOutcome::Skipped(SkipReason::MissingTitleAnchor);
    };

    let title = element_text(anchor);
    if title.is_empty() {
        return CardOutcome::Skipped(SkipReason::EmptyTitle);
    }

    let link = absolute_link(anchor.value().attr("href").unwrap_or(""), &target.origin);

    let location = first_text(card, &selectors.location)
        .unwrap_or_else(|| target.default_location.clone());
    let brand =
        first_text(card, &selectors.brand).unwrap_or_else(|| target.default_brand.clone());
    let distance =
        first_text(card, &selectors.distance).filter(|d| d != DISTANCE_NOT_APPLICABLE);

    CardOutcome::Parsed(JobRecord {
        title,
        location,
        brand,
        distance,
        link,
        found_date: found_at,
    })
}

fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

fn first_text(card: ElementRef<'_>, selector: &Selector) -> Option<String> {
    card.select(selector).next().map(element_text)
}

/// Rewrite a relative apply link against the site origin.
pub fn absolute_link(href: &str, origin: &str) -> String {
    if href.is_empty() || href.starts_with("http") {
        return href.to_string();
    }

    Url::parse(origin)
        .and_then(|base| base.join(href))
        .map(|url| url.to_string())
        .unwrap_or_else(|_| format!("{}{}", origin, href))
}
