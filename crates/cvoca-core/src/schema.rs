//! JSON-LD structured data for search engines.
//!
//! Builders return [`serde_json::Value`] trees following the schema.org
//! vocabulary, ready to be embedded in a `<script type="application/ld+json">`.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::event::Event;

const SCHEMA_CONTEXT: &str = "https://schema.org";

/// Site-level facts shared by every structured-data document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteInfo {
    /// Canonical site URL, without trailing slash.
    pub base_url: String,
    /// Full organization name.
    pub name: String,
    /// Short organization name.
    pub short_name: String,
    /// Logo path relative to the base URL.
    pub logo_path: String,
    /// Locality used for in-person venues.
    pub locality: String,
    /// Region used for in-person venues.
    pub region: String,
    /// ISO country code.
    pub country: String,
    /// ISO currency code for offers.
    pub currency: String,
}

impl Default for SiteInfo {
    fn default() -> Self {
        Self {
            base_url: "https://cvoca.org".to_string(),
            name: "CVO Chartered & Cost Accountants Association".to_string(),
            short_name: "CVOCA".to_string(),
            logo_path: "/images/logo-light-theme.webp".to_string(),
            locality: "Mumbai".to_string(),
            region: "Maharashtra".to_string(),
            country: "IN".to_string(),
            currency: "INR".to_string(),
        }
    }
}

impl SiteInfo {
    /// Builder method to set the canonical site URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Returns the absolute logo URL.
    pub fn logo_url(&self) -> String {
        format!("{}{}", self.base_url, self.logo_path)
    }

    /// Returns an absolute URL for a site path.
    pub fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// A single entry of a breadcrumb trail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Breadcrumb {
    pub name: String,
    pub url: String,
}

impl Breadcrumb {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

/// Builds the `Event` document for one event.
///
/// Online events get a `VirtualLocation` pointing at the registration link
/// (or the site), in-person events a `Place` in the site's locality.
pub fn event_schema(event: &Event, site: &SiteInfo) -> Value {
    let is_online = event.is_virtual();

    let location = if is_online {
        json!({
            "@type": "VirtualLocation",
            "url": event.registration_link.clone().unwrap_or_else(|| site.base_url.clone()),
        })
    } else {
        json!({
            "@type": "Place",
            "name": event.location,
            "address": {
                "@type": "PostalAddress",
                "addressLocality": site.locality,
                "addressRegion": site.region,
                "addressCountry": site.country,
            },
        })
    };

    let attendance_mode = if is_online {
        "https://schema.org/OnlineEventAttendanceMode"
    } else {
        "https://schema.org/OfflineEventAttendanceMode"
    };

    json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "Event",
        "name": event.title,
        "description": event.description,
        "startDate": event.date.to_string(),
        "location": location,
        "image": event.image_url.clone().unwrap_or_else(|| site.logo_url()),
        "organizer": {
            "@type": "Organization",
            "name": site.short_name,
            "url": site.base_url,
        },
        "offers": {
            "@type": "Offer",
            "price": event.price_digits(),
            "priceCurrency": site.currency,
            "availability": "https://schema.org/InStock",
            "url": event.registration_link.clone().unwrap_or_else(|| site.url_for("/events")),
        },
        "eventStatus": "https://schema.org/EventScheduled",
        "eventAttendanceMode": attendance_mode,
    })
}

/// Builds the `Organization` document used across the site.
pub fn organization_schema(site: &SiteInfo) -> Value {
    json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "ProfessionalService",
        "@id": site.url_for("/#organization"),
        "name": site.name,
        "alternateName": site.short_name,
        "url": site.base_url,
        "logo": site.logo_url(),
        "address": {
            "@type": "PostalAddress",
            "addressLocality": site.locality,
            "addressRegion": site.region,
            "addressCountry": site.country,
        },
    })
}

/// Builds a `BreadcrumbList` document, positions starting at 1.
pub fn breadcrumb_schema(items: &[Breadcrumb]) -> Value {
    let elements: Vec<Value> = items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            json!({
                "@type": "ListItem",
                "position": index + 1,
                "name": item.name,
                "item": item.url,
            })
        })
        .collect();

    json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "BreadcrumbList",
        "itemListElement": elements,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::Cost;
    use chrono::NaiveDate;

    fn seminar() -> Event {
        Event::new(5, "Transfer Pricing", NaiveDate::from_ymd_opt(2024, 8, 10).unwrap())
            .with_location("CVOCA Hall, Dadar")
            .with_description("Documentation essentials")
            .with_cost(Cost::parse("₹1,000"))
    }

    #[test]
    fn in_person_event() {
        let schema = event_schema(&seminar(), &SiteInfo::default());
        assert_eq!(schema["@type"], "Event");
        assert_eq!(schema["startDate"], "2024-08-10");
        assert_eq!(schema["location"]["@type"], "Place");
        assert_eq!(schema["location"]["address"]["addressLocality"], "Mumbai");
        assert_eq!(schema["offers"]["price"], "1000");
        assert_eq!(schema["offers"]["url"], "https://cvoca.org/events");
        assert_eq!(schema["image"], "https://cvoca.org/images/logo-light-theme.webp");
        assert_eq!(
            schema["eventAttendanceMode"],
            "https://schema.org/OfflineEventAttendanceMode"
        );
    }

    #[test]
    fn online_event() {
        let event = seminar()
            .with_location("Zoom webinar")
            .with_cost(Cost::Free)
            .with_registration_link("https://forms.example.org/tp")
            .with_image_url("https://res.cloudinary.com/demo/image/upload/tp.jpg");
        let schema = event_schema(&event, &SiteInfo::default());

        assert_eq!(schema["location"]["@type"], "VirtualLocation");
        assert_eq!(schema["location"]["url"], "https://forms.example.org/tp");
        assert_eq!(schema["offers"]["price"], "0");
        assert_eq!(schema["offers"]["url"], "https://forms.example.org/tp");
        assert_eq!(
            schema["image"],
            "https://res.cloudinary.com/demo/image/upload/tp.jpg"
        );
        assert_eq!(
            schema["eventAttendanceMode"],
            "https://schema.org/OnlineEventAttendanceMode"
        );
    }

    #[test]
    fn organization_uses_site_base() {
        let site = SiteInfo::default().with_base_url("https://staging.cvoca.org/");
        let schema = organization_schema(&site);
        assert_eq!(schema["@id"], "https://staging.cvoca.org/#organization");
        assert_eq!(schema["alternateName"], "CVOCA");
    }

    #[test]
    fn breadcrumbs_are_one_based() {
        let schema = breadcrumb_schema(&[
            Breadcrumb::new("Home", "https://cvoca.org/"),
            Breadcrumb::new("Events", "https://cvoca.org/events"),
        ]);
        let items = schema["itemListElement"].as_array().unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0]["position"], 1);
        assert_eq!(items[1]["position"], 2);
        assert_eq!(items[1]["name"], "Events");
    }

    #[test]
    fn event_document_snapshot() {
        let schema = event_schema(&seminar(), &SiteInfo::default());
        insta::assert_json_snapshot!(schema["offers"], @r###"
        {
          "@type": "Offer",
          "availability": "https://schema.org/InStock",
          "price": "1000",
          "priceCurrency": "INR",
          "url": "https://cvoca.org/events"
        }
        "###);
    }
}
