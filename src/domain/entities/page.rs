//! Page tree nodes and the placement rules between page kinds.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Every concrete page type that can live in the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageKind {
    Root,
    PersonIndex,
    OrganizationIndex,
    PlaceIndex,
    EventIndex,
    EventTagIndex,
    Person,
    Organization,
    Place,
    Event,
}

impl PageKind {
    pub const ALL: [PageKind; 10] = [
        PageKind::Root,
        PageKind::PersonIndex,
        PageKind::OrganizationIndex,
        PageKind::PlaceIndex,
        PageKind::EventIndex,
        PageKind::EventTagIndex,
        PageKind::Person,
        PageKind::Organization,
        PageKind::Place,
        PageKind::Event,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PageKind::Root => "root",
            PageKind::PersonIndex => "person_index",
            PageKind::OrganizationIndex => "organization_index",
            PageKind::PlaceIndex => "place_index",
            PageKind::EventIndex => "event_index",
            PageKind::EventTagIndex => "event_tag_index",
            PageKind::Person => "person",
            PageKind::Organization => "organization",
            PageKind::Place => "place",
            PageKind::Event => "event",
        }
    }

    pub fn verbose_name(&self) -> &'static str {
        match self {
            PageKind::Root => "root",
            PageKind::PersonIndex => "person index",
            PageKind::OrganizationIndex => "organization index",
            PageKind::PlaceIndex => "place index",
            PageKind::EventIndex => "event index",
            PageKind::EventTagIndex => "event tag index",
            PageKind::Person => "person",
            PageKind::Organization => "organization",
            PageKind::Place => "place",
            PageKind::Event => "event",
        }
    }

    pub fn verbose_name_plural(&self) -> &'static str {
        match self {
            PageKind::Person => "people",
            PageKind::PersonIndex => "person indexes",
            PageKind::OrganizationIndex => "organization indexes",
            PageKind::PlaceIndex => "place indexes",
            PageKind::EventIndex => "event indexes",
            PageKind::EventTagIndex => "event tag indexes",
            PageKind::Organization => "organizations",
            PageKind::Place => "places",
            PageKind::Event => "events",
            PageKind::Root => "roots",
        }
    }

    /// Structured-data vocabulary identifier exported for this kind.
    pub fn schema(&self) -> Option<&'static str> {
        match self {
            PageKind::Root => None,
            PageKind::PersonIndex
            | PageKind::OrganizationIndex
            | PageKind::PlaceIndex
            | PageKind::EventIndex
            | PageKind::EventTagIndex => Some("http://schema.org/ItemList"),
            PageKind::Person => Some("http://schema.org/Person"),
            PageKind::Organization => Some("http://schema.org/Organization"),
            PageKind::Place => Some("http://schema.org/Place"),
            PageKind::Event => Some("http://schema.org/Event"),
        }
    }

    /// Parent kinds a page of this kind may be created or moved under.
    ///
    /// An empty slice means the kind can never be placed (only the root).
    pub fn allowed_parent_kinds(&self) -> &'static [PageKind] {
        match self {
            PageKind::Root => &[],
            PageKind::PersonIndex
            | PageKind::OrganizationIndex
            | PageKind::PlaceIndex
            | PageKind::EventIndex
            | PageKind::EventTagIndex => &[PageKind::Root],
            PageKind::Person => &[PageKind::PersonIndex, PageKind::Organization],
            PageKind::Organization => &[PageKind::OrganizationIndex, PageKind::Organization],
            PageKind::Place => &[PageKind::PlaceIndex],
            PageKind::Event => &[PageKind::EventIndex],
        }
    }

    pub fn can_be_placed_under(&self, parent: PageKind) -> bool {
        self.allowed_parent_kinds().contains(&parent)
    }

    /// True for container pages whose only behavior is listing children.
    pub fn is_index(&self) -> bool {
        matches!(
            self,
            PageKind::PersonIndex
                | PageKind::OrganizationIndex
                | PageKind::PlaceIndex
                | PageKind::EventIndex
                | PageKind::EventTagIndex
        )
    }

    /// True for content kinds carrying the record component.
    pub fn is_record(&self) -> bool {
        matches!(
            self,
            PageKind::Person | PageKind::Organization | PageKind::Place | PageKind::Event
        )
    }

    /// True for content kinds carrying the agent profile component.
    pub fn is_agent(&self) -> bool {
        matches!(self, PageKind::Person | PageKind::Organization)
    }
}

impl fmt::Display for PageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PageKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PageKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| format!("unknown page kind '{s}'"))
    }
}

/// A node in the page tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page {
    pub id: i64,
    pub parent_id: Option<i64>,
    pub kind: PageKind,
    pub title: String,
    pub slug: String,
    pub url_path: String,
    pub depth: i32,
    pub position: i32,
    pub intro: Option<String>,
    pub live: bool,
    pub first_published_at: Option<DateTime<Utc>>,
    pub last_published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Page {
    /// Returns true if the page is live and its first publication is not in the future.
    pub fn is_visible_at(&self, now: DateTime<Utc>) -> bool {
        self.live && self.first_published_at.is_some_and(|t| t <= now)
    }

    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }

    /// Url path of a child of this page with the given slug.
    pub fn child_url_path(&self, slug: &str) -> String {
        format!("{}{}/", self.url_path, slug)
    }

    /// Returns true if `other` sits somewhere below this page.
    pub fn is_ancestor_of(&self, other: &Page) -> bool {
        other.url_path.len() > self.url_path.len() && other.url_path.starts_with(&self.url_path)
    }
}

/// Input data for creating a new page node.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPage {
    pub parent_id: i64,
    pub kind: PageKind,
    pub title: String,
    pub slug: String,
    pub intro: Option<String>,
}

/// Partial update of a page node. `None` fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PagePatch {
    pub title: Option<String>,
    /// `Some(None)` clears the intro.
    pub intro: Option<Option<String>>,
}
