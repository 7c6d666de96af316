//! Wire shape of the events resource.
//!
//! [`RawEvent`] mirrors one object of `events.json` as written by the content
//! editors. The date is kept as text here; it is only validated when the
//! record is normalized into a [`cvoca_core::Event`].

use serde::{Deserialize, Serialize};

/// One record of the events resource, before validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawEvent {
    pub id: u64,
    pub title: String,
    /// `YYYY-MM-DD`, unvalidated.
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub committee: String,
    #[serde(default)]
    pub tags: Vec<String>,
    /// `"Free"` or a currency amount; absent means free.
    #[serde(default)]
    pub cost: Option<String>,
    #[serde(default)]
    pub full_pricing: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub registration_link: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl RawEvent {
    /// Creates a raw record with the required fields.
    pub fn new(id: u64, title: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            date: date.into(),
            time: String::new(),
            location: String::new(),
            committee: String::new(),
            tags: Vec::new(),
            cost: None,
            full_pricing: None,
            description: String::new(),
            registration_link: None,
            image_url: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_full_record() {
        let json = r#"{
            "id": 12,
            "title": "Budget Analysis 2024",
            "date": "2024-02-03",
            "time": "6:00 PM - 9:00 PM",
            "location": "Online (Zoom)",
            "committee": "Direct Tax",
            "tags": ["Budget", "Webinar"],
            "cost": "₹200",
            "fullPricing": "Members ₹200, Non-members ₹400",
            "description": "Key changes explained",
            "registrationLink": "https://forms.example.org/budget",
            "imageUrl": "https://res.cloudinary.com/demo/image/upload/budget.jpg"
        }"#;
        let raw: RawEvent = serde_json::from_str(json).unwrap();
        assert_eq!(raw.id, 12);
        assert_eq!(raw.tags, vec!["Budget", "Webinar"]);
        assert_eq!(raw.cost.as_deref(), Some("₹200"));
        assert!(raw.full_pricing.is_some());
        assert!(raw.registration_link.is_some());
    }

    #[test]
    fn optional_fields_default() {
        let raw: RawEvent = serde_json::from_str(r#"{"id": 1, "title": "AGM"}"#).unwrap();
        assert_eq!(raw, RawEvent::new(1, "AGM", ""));
    }

    #[test]
    fn rejects_records_without_title() {
        assert!(serde_json::from_str::<RawEvent>(r#"{"id": 1}"#).is_err());
    }
}
