/// The careers page being watched and the labels used when describing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonitorTarget {
    /// Employer name used in message headers ("Loblaw Job Monitor Started!").
    pub name: String,
    /// Listing page, with the geographic and employment-type filters baked in.
    pub url: String,
    /// Site origin that relative apply links are resolved against.
    pub origin: String,
    pub location_label: String,
    pub employment_label: String,
    /// Used when a card has no location sub-element.
    pub default_location: String,
    /// Used when a card has no brand sub-element.
    pub default_brand: String,
}

impl Default for MonitorTarget {
    fn default() -> Self {
        Self {
            name: "Loblaw".to_string(),
            url: "https://careers.loblaw.ca/jobs?location_name=Windsor%2C%20ON%2C%20Canada&location_type=2&filter%5Bemployment_type%5D%5B0%5D=Part%20Time".to_string(),
            origin: "https://careers.loblaw.ca".to_string(),
            location_label: "Windsor, ON".to_string(),
            employment_label: "Part-Time".to_string(),
            default_location: "Windsor, ON".to_string(),
            default_brand: "Loblaw".to_string(),
        }
    }
}
