//! Committee roster types and search.

use serde::{Deserialize, Serialize};

/// A member listed on a committee roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoreMember {
    /// Member name.
    pub name: String,
    /// Native place, shown next to the name.
    #[serde(default)]
    pub native_place: String,
}

impl CoreMember {
    /// Creates a new roster entry.
    pub fn new(name: impl Into<String>, native_place: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            native_place: native_place.into(),
        }
    }

    fn matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.native_place.to_lowercase().contains(needle)
    }
}

/// A committee of the association, which also acts as an event organizer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Committee {
    /// Committee name, matching the `committee` field of events.
    pub name: String,
    #[serde(default)]
    pub chairperson: Option<CoreMember>,
    #[serde(default)]
    pub advisors: Vec<CoreMember>,
    #[serde(default)]
    pub convenors: Vec<CoreMember>,
    #[serde(default)]
    pub joint_convenors: Vec<CoreMember>,
    #[serde(default)]
    pub special_invitees: Vec<CoreMember>,
    #[serde(default)]
    pub sub_committee: Vec<CoreMember>,
}

impl Committee {
    /// Creates an empty committee with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Iterates over every listed member, chairperson first.
    pub fn members(&self) -> impl Iterator<Item = &CoreMember> {
        self.chairperson
            .iter()
            .chain(&self.advisors)
            .chain(&self.convenors)
            .chain(&self.joint_convenors)
            .chain(&self.special_invitees)
            .chain(&self.sub_committee)
    }

    /// Case-insensitive match on the committee name or any member's name or native place.
    pub fn matches(&self, query: &str) -> bool {
        let needle = query.to_lowercase();
        self.name.to_lowercase().contains(&needle) || self.members().any(|m| m.matches(&needle))
    }
}

/// Returns the committees matching the query, in input order.
pub fn search_committees(committees: &[Committee], query: &str) -> Vec<Committee> {
    committees
        .iter()
        .filter(|c| c.matches(query))
        .cloned()
        .collect()
}

/// Returns the committee names, used as the organizer choices of the events listing.
pub fn committee_names(committees: &[Committee]) -> Vec<String> {
    committees.iter().map(|c| c.name.clone()).collect()
}
