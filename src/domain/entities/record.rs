//! Content records: the data carried by person, organization, place and event pages.
//!
//! A record is a page plus three components:
//!
//! - [`RecordFields`] shared by every content kind
//! - [`AgentProfile`] present only on people and organizations
//! - [`RecordDetails`] the kind-specific fields and relationship sets
//!
//! Relationship sets hold ids of other pages or snippets. They behave as sets:
//! duplicates collapse to their first occurrence and insertion order is kept.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use validator::Validate;

use super::image::GalleryImage;
use super::page::{Page, PageKind};
use super::snippet::CategoryKind;
use crate::domain::geo::{Coordinate, GeoPoint};
use crate::domain::vocabularies::{DEFAULT_COUNTRY, DEFAULT_LOCALITY, DEFAULT_REGION};

/// Landing page of the Chicago Public Library artists archive.
pub const CPL_ARTIST_FILES_URL: &str = "https://www.chipublib.org/fa-chicago-artists-archive/";

/// Fields shared by every content kind.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct RecordFields {
    /// Rich text, stored as authored.
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    #[validate(url(message = "Invalid URL format"), length(max = 200))]
    pub same_as: Option<String>,
    #[serde(default)]
    pub oclc_fast_id: Option<i32>,
    #[serde(default)]
    pub in_cpl_artistfiles: bool,
    #[serde(default)]
    pub source_id: Option<i64>,
}

impl RecordFields {
    /// Link to the library artist files when the record is part of them.
    pub fn cpl_url(&self) -> Option<&'static str> {
        self.in_cpl_artistfiles.then_some(CPL_ARTIST_FILES_URL)
    }
}

/// Identity cross-references and contacts of a person or organization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentProfile {
    #[serde(default)]
    pub getty_ulan_id: Option<i32>,
    #[serde(default)]
    pub emails: Vec<i64>,
    #[serde(default)]
    pub phones: Vec<i64>,
    #[serde(default)]
    pub social_accounts: Vec<i64>,
    #[serde(default)]
    pub extra_names: Vec<i64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    #[serde(rename = "m")]
    Male,
    #[serde(rename = "f")]
    Female,
    #[serde(rename = "x")]
    Other,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "m",
            Gender::Female => "f",
            Gender::Other => "x",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Other => "other",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "m" => Some(Gender::Male),
            "f" => Some(Gender::Female),
            "x" => Some(Gender::Other),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventStatus {
    Cancelled,
}

impl EventStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventStatus::Cancelled => "cancelled",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "cancelled" => Some(EventStatus::Cancelled),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonDetails {
    #[serde(default)]
    pub gender: Option<Gender>,
    #[serde(default)]
    pub categories: Vec<i64>,
    /// People this person lists as friends. Stored in one direction only.
    #[serde(default)]
    pub friends: Vec<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrganizationDetails {
    #[serde(default = "default_true")]
    pub nonprofit: bool,
    #[serde(default)]
    pub categories: Vec<i64>,
    #[serde(default)]
    pub employees: Vec<i64>,
    #[serde(default)]
    pub members: Vec<i64>,
    #[serde(default)]
    pub locations: Vec<i64>,
}

impl Default for OrganizationDetails {
    fn default() -> Self {
        Self {
            nonprofit: true,
            categories: Vec::new(),
            employees: Vec::new(),
            members: Vec::new(),
            locations: Vec::new(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_locality() -> Option<String> {
    Some(DEFAULT_LOCALITY.to_string())
}

fn default_region() -> Option<String> {
    Some(DEFAULT_REGION.to_string())
}

fn default_country() -> Option<String> {
    Some(DEFAULT_COUNTRY.to_string())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaceDetails {
    pub latitude: Coordinate,
    pub longitude: Coordinate,
    #[serde(default)]
    pub altitude: Option<Coordinate>,
    #[serde(default)]
    pub street: Option<String>,
    #[serde(default = "default_locality")]
    pub locality: Option<String>,
    #[serde(default = "default_region")]
    pub region: Option<String>,
    #[serde(default)]
    pub postal_code: Option<String>,
    #[serde(default = "default_country")]
    pub country: Option<String>,
    #[serde(default)]
    pub categories: Vec<i64>,
}

impl PlaceDetails {
    pub fn point(&self) -> GeoPoint {
        GeoPoint {
            latitude: self.latitude,
            longitude: self.longitude,
            altitude: self.altitude,
        }
    }
}

impl fmt::Display for PlaceDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let street = self
            .street
            .as_deref()
            .unwrap_or_default()
            .replace("\r\n", ", ")
            .replace('\n', ", ");
        write!(
            f,
            "{}, {} {}",
            street,
            self.locality.as_deref().unwrap_or_default(),
            self.region.as_deref().unwrap_or_default()
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventDetails {
    #[serde(default = "Utc::now")]
    pub start_date: DateTime<Utc>,
    #[serde(default)]
    pub duration: i32,
    #[serde(default)]
    pub precision: i32,
    #[serde(default)]
    pub status: Option<EventStatus>,
    #[serde(default)]
    pub categories: Vec<i64>,
    /// Free-form tag names, matched exactly.
    #[serde(default)]
    pub tags: Vec<String>,
    /// People or organizations running the event.
    #[serde(default)]
    pub organizers: Vec<i64>,
}

/// Kind-specific part of a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RecordDetails {
    Person(PersonDetails),
    Organization(OrganizationDetails),
    Place(PlaceDetails),
    Event(EventDetails),
}

impl RecordDetails {
    pub fn kind(&self) -> PageKind {
        match self {
            RecordDetails::Person(_) => PageKind::Person,
            RecordDetails::Organization(_) => PageKind::Organization,
            RecordDetails::Place(_) => PageKind::Place,
            RecordDetails::Event(_) => PageKind::Event,
        }
    }

    pub fn category_kind(&self) -> CategoryKind {
        match self {
            RecordDetails::Person(_) => CategoryKind::Person,
            RecordDetails::Organization(_) => CategoryKind::Organization,
            RecordDetails::Place(_) => CategoryKind::Place,
            RecordDetails::Event(_) => CategoryKind::Event,
        }
    }

    pub fn categories(&self) -> &[i64] {
        match self {
            RecordDetails::Person(d) => &d.categories,
            RecordDetails::Organization(d) => &d.categories,
            RecordDetails::Place(d) => &d.categories,
            RecordDetails::Event(d) => &d.categories,
        }
    }

    /// Page references held by this record, grouped by the kinds they may point to.
    pub fn page_references(&self) -> Vec<(&'static str, &[i64], &'static [PageKind])> {
        const PEOPLE: &[PageKind] = &[PageKind::Person];
        const PLACES: &[PageKind] = &[PageKind::Place];
        const AGENTS: &[PageKind] = &[PageKind::Person, PageKind::Organization];

        match self {
            RecordDetails::Person(d) => vec![("friends", d.friends.as_slice(), PEOPLE)],
            RecordDetails::Organization(d) => vec![
                ("employees", d.employees.as_slice(), PEOPLE),
                ("members", d.members.as_slice(), PEOPLE),
                ("locations", d.locations.as_slice(), PLACES),
            ],
            RecordDetails::Place(_) => Vec::new(),
            RecordDetails::Event(d) => vec![("organizers", d.organizers.as_slice(), AGENTS)],
        }
    }

    /// Removes a page id from every relationship set.
    pub fn forget_page(&mut self, page_id: i64) {
        match self {
            RecordDetails::Person(d) => d.friends.retain(|id| *id != page_id),
            RecordDetails::Organization(d) => {
                d.employees.retain(|id| *id != page_id);
                d.members.retain(|id| *id != page_id);
                d.locations.retain(|id| *id != page_id);
            }
            RecordDetails::Place(_) => {}
            RecordDetails::Event(d) => d.organizers.retain(|id| *id != page_id),
        }
    }

    /// Removes a category id from the category set.
    pub fn forget_category(&mut self, category_id: i64) {
        match self {
            RecordDetails::Person(d) => d.categories.retain(|id| *id != category_id),
            RecordDetails::Organization(d) => d.categories.retain(|id| *id != category_id),
            RecordDetails::Place(d) => d.categories.retain(|id| *id != category_id),
            RecordDetails::Event(d) => d.categories.retain(|id| *id != category_id),
        }
    }

    fn normalize(&mut self) {
        match self {
            RecordDetails::Person(d) => {
                dedup(&mut d.categories);
                dedup(&mut d.friends);
            }
            RecordDetails::Organization(d) => {
                dedup(&mut d.categories);
                dedup(&mut d.employees);
                dedup(&mut d.members);
                dedup(&mut d.locations);
            }
            RecordDetails::Place(d) => dedup(&mut d.categories),
            RecordDetails::Event(d) => {
                dedup(&mut d.categories);
                dedup(&mut d.organizers);
                for tag in d.tags.iter_mut() {
                    *tag = tag.trim().to_string();
                }
                d.tags.retain(|t| !t.is_empty());
                dedup(&mut d.tags);
            }
        }
    }
}

impl AgentProfile {
    fn normalize(&mut self) {
        dedup(&mut self.emails);
        dedup(&mut self.phones);
        dedup(&mut self.social_accounts);
        dedup(&mut self.extra_names);
    }

    /// Removes a snippet id from every contact set. Callers must hand out
    /// snippet ids from one sequence shared by all contact kinds.
    pub fn forget_snippet(&mut self, snippet_id: i64) {
        self.emails.retain(|id| *id != snippet_id);
        self.phones.retain(|id| *id != snippet_id);
        self.social_accounts.retain(|id| *id != snippet_id);
        self.extra_names.retain(|id| *id != snippet_id);
    }
}

/// Keeps the first occurrence of every value, preserving order.
pub fn dedup<T: PartialEq + Clone>(values: &mut Vec<T>) {
    let mut seen: Vec<T> = Vec::with_capacity(values.len());
    values.retain(|v| {
        if seen.contains(v) {
            false
        } else {
            seen.push(v.clone());
            true
        }
    });
}

/// The writable part of a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordData {
    pub fields: RecordFields,
    pub agent: Option<AgentProfile>,
    pub details: RecordDetails,
}

impl RecordData {
    /// Collapses duplicate references and attaches an empty agent profile to
    /// agent kinds that were submitted without one.
    pub fn normalized(mut self) -> Self {
        self.details.normalize();
        if self.details.kind().is_agent() {
            let mut agent = self.agent.unwrap_or_default();
            agent.normalize();
            self.agent = Some(agent);
        }
        self
    }
}

/// A fully loaded content page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContentRecord {
    pub page: Page,
    pub fields: RecordFields,
    pub agent: Option<AgentProfile>,
    pub details: RecordDetails,
    pub gallery: Vec<GalleryImage>,
}

impl ContentRecord {
    pub fn kind(&self) -> PageKind {
        self.details.kind()
    }

    /// First gallery image in display order.
    pub fn main_image(&self) -> Option<&GalleryImage> {
        self.gallery.first()
    }
}
