use chrono::NaiveDate;
use job_monitor_core::domains::listings::models::{JobId, JobRecord, JobSnapshot};
use job_monitor_core::Config;

/// One listing card as the careers page renders it. Cards carry no location
/// label, so every job gets the default location.
pub fn job_card(title: &str, brand: &str) -> String {
    format!(
        r#"<li class="results-list__item" data-testid="jobs-list-only_jobs-list_item">
             <a class="results-list__item-title--link" href="/jobs/{slug}">{title}</a>
             <span class="results-list__item-brand--label">{brand}</span>
           </li>"#,
        slug = title.to_lowercase().replace(' ', "-"),
        title = title,
        brand = brand,
    )
}

/// A listing page containing one card per title.
pub fn listing_page(titles: &[&str]) -> String {
    let cards: String = titles.iter().map(|t| job_card(t, "No Frills")).collect();
    format!(
        "<html><body><ul class=\"results-list\">{}</ul></body></html>",
        cards
    )
}

/// Snapshot equivalent to what `listing_page(titles)` extracts.
pub fn snapshot_of(titles: &[&str]) -> JobSnapshot {
    let found = NaiveDate::from_ymd_opt(2024, 1, 1)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap();

    titles
        .iter()
        .map(|title| {
            let job = JobRecord {
                title: title.to_string(),
                location: "Windsor, ON".to_string(),
                brand: "No Frills".to_string(),
                distance: None,
                link: format!(
                    "https://careers.loblaw.ca/jobs/{}",
                    title.to_lowercase().replace(' ', "-")
                ),
                found_date: found,
            };
            (JobId::from_parts(title, "Windsor, ON"), job)
        })
        .collect()
}

pub fn configured() -> Config {
    Config {
        telegram_bot_token: Some("123456:test-token".to_string()),
        telegram_chat_id: Some("-1001".to_string()),
        ..Config::default()
    }
}

pub fn keys(snapshot: &JobSnapshot) -> Vec<String> {
    let mut keys: Vec<String> = snapshot.keys().map(|k| k.to_string()).collect();
    keys.sort();
    keys
}
