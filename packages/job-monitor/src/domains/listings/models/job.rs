use chrono::NaiveDateTime;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Distance text used in snapshots when a card has no distance label.
pub const DISTANCE_NOT_APPLICABLE: &str = "N/A";

/// Timestamp format used for `found_date` in snapshots and messages.
pub const FOUND_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Identity of a listing across runs, derived from title and location.
///
/// Two postings with the same title and location share an identity and
/// collapse into one snapshot entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobId(String);

impl JobId {
    pub fn from_parts(title: &str, location: &str) -> Self {
        let raw = format!("{}_{}", title, location);
        Self(raw.replace(' ', "_").replace(',', ""))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobRecord {
    pub title: String,
    pub location: String,
    pub brand: String,
    #[serde(with = "distance_format")]
    pub distance: Option<String>,
    pub link: String,
    #[serde(with = "found_date_format")]
    pub found_date: NaiveDateTime,
}

impl JobRecord {
    pub fn id(&self) -> JobId {
        JobId::from_parts(&self.title, &self.location)
    }
}

/// Jobs known at a point in time, keyed by identity, in page order.
pub type JobSnapshot = IndexMap<JobId, JobRecord>;

mod distance_format {
    use super::DISTANCE_NOT_APPLICABLE;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Option<String>, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(value.as_deref().unwrap_or(DISTANCE_NOT_APPLICABLE))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
        let raw = Option::<String>::deserialize(d)?;
        Ok(raw.filter(|v| v != DISTANCE_NOT_APPLICABLE))
    }
}

mod found_date_format {
    use super::FOUND_DATE_FORMAT;
    use chrono::NaiveDateTime;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &NaiveDateTime, s: S) -> Result<S::Ok, S::Error> {
        s.collect_str(&value.format(FOUND_DATE_FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(d)?;
        NaiveDateTime::parse_from_str(&raw, FOUND_DATE_FORMAT).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample() -> JobRecord {
        JobRecord {
            title: "Cashier".to_string(),
            location: "Windsor, ON".to_string(),
            brand: "No Frills".to_string(),
            distance: None,
            link: "https://careers.loblaw.ca/jobs/1".to_string(),
            found_date: NaiveDate::from_ymd_opt(2024, 3, 1)
                .unwrap()
                .and_hms_opt(9, 30, 0)
                .unwrap(),
        }
    }

    #[test]
    fn id_replaces_spaces_and_drops_commas() {
        let id = JobId::from_parts("Deli Clerk", "3100 Howard Ave, Windsor, ON");
        assert_eq!(id.as_str(), "Deli_Clerk_3100_Howard_Ave_Windsor_ON");
    }

    #[test]
    fn same_title_and_location_collide() {
        let a = JobId::from_parts("Cashier", "Windsor, ON");
        let b = JobId::from_parts("Cashier", "Windsor, ON");
        assert_eq!(a, b);
    }

    #[test]
    fn record_serializes_to_snapshot_shape() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "title": "Cashier",
                "location": "Windsor, ON",
                "brand": "No Frills",
                "distance": "N/A",
                "link": "https://careers.loblaw.ca/jobs/1",
                "found_date": "2024-03-01 09:30:00",
            })
        );
    }

    #[test]
    fn snapshot_written_by_earlier_deployments_parses() {
        let raw = r#"{
            "Cashier_Windsor_ON": {
                "title": "Cashier",
                "location": "Windsor, ON",
                "brand": "No Frills",
                "distance": "4.2 km",
                "link": "https://careers.loblaw.ca/jobs/1",
                "found_date": "2024-03-01 09:30:00"
            }
        }"#;

        let snapshot: JobSnapshot = serde_json::from_str(raw).unwrap();
        let job = &snapshot[&JobId::from_parts("Cashier", "Windsor, ON")];
        assert_eq!(job.distance.as_deref(), Some("4.2 km"));
        assert_eq!(job.found_date.to_string(), "2024-03-01 09:30:00");
    }
}
