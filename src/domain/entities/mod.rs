//! Core domain entities of the archive.
//!
//! - [`Page`] - A node of the page tree, with its [`PageKind`]
//! - [`ContentRecord`] - A person, organization, place or event page with its data
//! - [`Snippet`] - A reusable record living outside the tree
//! - [`Image`] - Image metadata referenced by galleries and category icons
//!
//! Creation inputs live next to the entities they create (`NewPage`, `NewImage`,
//! `NewGalleryImage`, `RecordData`).

pub mod image;
pub mod page;
pub mod record;
pub mod snippet;

pub use image::{GalleryImage, Image, NewGalleryImage, NewImage};
pub use page::{NewPage, Page, PageKind, PagePatch};
pub use record::{
    AgentProfile, ContentRecord, EventDetails, EventStatus, Gender, OrganizationDetails,
    PersonDetails, PlaceDetails, RecordData, RecordDetails, RecordFields,
};
pub use snippet::{
    CategoryData, CategoryKind, ContactLabel, EmailData, ExtraNameData, PhoneData, Snippet,
    SnippetData, SnippetKind, SocialAccountData, SocialService, SourceCategory, SourceData,
    WebsiteData,
};
