//! Reusable records managed outside the page tree.
//!
//! Snippets are referenced by many pages and never owned by one. Each kind has
//! its own field set, collected in [`SnippetData`], and an optional uniqueness
//! key enforced by every storage backend.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::fmt;
use std::str::FromStr;
use validator::Validate;

use super::record::dedup;
use crate::error::AppError;

/// Label attached to emails and phone numbers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactLabel {
    #[default]
    Primary,
    Secondary,
    Work,
    Personal,
}

impl ContactLabel {
    pub const ALL: [ContactLabel; 4] = [
        ContactLabel::Primary,
        ContactLabel::Secondary,
        ContactLabel::Work,
        ContactLabel::Personal,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContactLabel::Primary => "primary",
            ContactLabel::Secondary => "secondary",
            ContactLabel::Work => "work",
            ContactLabel::Personal => "personal",
        }
    }
}

impl FromStr for ContactLabel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ContactLabel::ALL
            .into_iter()
            .find(|l| l.as_str() == s)
            .ok_or_else(|| format!("unknown contact label '{s}'"))
    }
}

/// Social network services an account can belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialService {
    Askfm,
    Facebook,
    Flickr,
    Foursquare,
    Github,
    Googleplus,
    Instagram,
    Linkedin,
    Meetup,
    Pinterest,
    Reddit,
    Snapchat,
    Tumblr,
    Twitter,
    Vine,
    Whatsapp,
    Yelp,
    Youtube,
}

impl SocialService {
    pub const ALL: [SocialService; 18] = [
        SocialService::Askfm,
        SocialService::Facebook,
        SocialService::Flickr,
        SocialService::Foursquare,
        SocialService::Github,
        SocialService::Googleplus,
        SocialService::Instagram,
        SocialService::Linkedin,
        SocialService::Meetup,
        SocialService::Pinterest,
        SocialService::Reddit,
        SocialService::Snapchat,
        SocialService::Tumblr,
        SocialService::Twitter,
        SocialService::Vine,
        SocialService::Whatsapp,
        SocialService::Yelp,
        SocialService::Youtube,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SocialService::Askfm => "askfm",
            SocialService::Facebook => "facebook",
            SocialService::Flickr => "flickr",
            SocialService::Foursquare => "foursquare",
            SocialService::Github => "github",
            SocialService::Googleplus => "googleplus",
            SocialService::Instagram => "instagram",
            SocialService::Linkedin => "linkedin",
            SocialService::Meetup => "meetup",
            SocialService::Pinterest => "pinterest",
            SocialService::Reddit => "reddit",
            SocialService::Snapchat => "snapchat",
            SocialService::Tumblr => "tumblr",
            SocialService::Twitter => "twitter",
            SocialService::Vine => "vine",
            SocialService::Whatsapp => "whatsapp",
            SocialService::Yelp => "yelp",
            SocialService::Youtube => "youtube",
        }
    }

    /// Human readable service name.
    pub fn display_name(&self) -> &'static str {
        match self {
            SocialService::Askfm => "Ask.fm",
            SocialService::Facebook => "Facebook",
            SocialService::Flickr => "Flickr",
            SocialService::Foursquare => "Foursquare",
            SocialService::Github => "GitHub",
            SocialService::Googleplus => "Google+",
            SocialService::Instagram => "Instagram",
            SocialService::Linkedin => "LinkedIn",
            SocialService::Meetup => "Meetup",
            SocialService::Pinterest => "Pinterest",
            SocialService::Reddit => "Reddit",
            SocialService::Snapchat => "SnapChat",
            SocialService::Tumblr => "Tumblr",
            SocialService::Twitter => "Twitter",
            SocialService::Vine => "Vine",
            SocialService::Whatsapp => "WhatsApp",
            SocialService::Yelp => "Yelp",
            SocialService::Youtube => "YouTube",
        }
    }
}

impl FromStr for SocialService {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SocialService::ALL
            .into_iter()
            .find(|svc| svc.as_str() == s)
            .ok_or_else(|| format!("unknown social service '{s}'"))
    }
}

/// Kind of bibliographic source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceCategory {
    Website,
    Book,
    JournalArticle,
    NewspaperArticle,
}

impl SourceCategory {
    pub const ALL: [SourceCategory; 4] = [
        SourceCategory::Website,
        SourceCategory::Book,
        SourceCategory::JournalArticle,
        SourceCategory::NewspaperArticle,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SourceCategory::Website => "website",
            SourceCategory::Book => "book",
            SourceCategory::JournalArticle => "journal_article",
            SourceCategory::NewspaperArticle => "newspaper_article",
        }
    }
}

impl FromStr for SourceCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SourceCategory::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| format!("unknown source category '{s}'"))
    }
}

/// Which content kind a category classifies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryKind {
    Person,
    Organization,
    Place,
    Event,
}

impl CategoryKind {
    pub const ALL: [CategoryKind; 4] = [
        CategoryKind::Person,
        CategoryKind::Organization,
        CategoryKind::Place,
        CategoryKind::Event,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryKind::Person => "person",
            CategoryKind::Organization => "organization",
            CategoryKind::Place => "place",
            CategoryKind::Event => "event",
        }
    }

    pub fn snippet_kind(&self) -> SnippetKind {
        match self {
            CategoryKind::Person => SnippetKind::PersonCategory,
            CategoryKind::Organization => SnippetKind::OrganizationCategory,
            CategoryKind::Place => SnippetKind::PlaceCategory,
            CategoryKind::Event => SnippetKind::EventCategory,
        }
    }
}

impl FromStr for CategoryKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CategoryKind::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| format!("unknown category kind '{s}'"))
    }
}

/// Every registered snippet type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SnippetKind {
    Email,
    Phone,
    SocialAccount,
    Website,
    Source,
    ExtraName,
    PersonCategory,
    OrganizationCategory,
    PlaceCategory,
    EventCategory,
}

impl SnippetKind {
    pub const ALL: [SnippetKind; 10] = [
        SnippetKind::Email,
        SnippetKind::Phone,
        SnippetKind::SocialAccount,
        SnippetKind::Website,
        SnippetKind::Source,
        SnippetKind::ExtraName,
        SnippetKind::PersonCategory,
        SnippetKind::OrganizationCategory,
        SnippetKind::PlaceCategory,
        SnippetKind::EventCategory,
    ];

    /// Path segment used by the API.
    pub fn as_str(&self) -> &'static str {
        match self {
            SnippetKind::Email => "email",
            SnippetKind::Phone => "phone",
            SnippetKind::SocialAccount => "social-account",
            SnippetKind::Website => "website",
            SnippetKind::Source => "source",
            SnippetKind::ExtraName => "extra-name",
            SnippetKind::PersonCategory => "person-category",
            SnippetKind::OrganizationCategory => "organization-category",
            SnippetKind::PlaceCategory => "place-category",
            SnippetKind::EventCategory => "event-category",
        }
    }

    pub fn category_kind(&self) -> Option<CategoryKind> {
        match self {
            SnippetKind::PersonCategory => Some(CategoryKind::Person),
            SnippetKind::OrganizationCategory => Some(CategoryKind::Organization),
            SnippetKind::PlaceCategory => Some(CategoryKind::Place),
            SnippetKind::EventCategory => Some(CategoryKind::Event),
            _ => None,
        }
    }
}

impl fmt::Display for SnippetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SnippetKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SnippetKind::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| format!("unknown snippet kind '{s}'"))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct EmailData {
    #[serde(default)]
    pub label: ContactLabel,
    #[validate(email(message = "Invalid email address"), length(max = 254))]
    pub address: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct PhoneData {
    #[serde(default)]
    pub label: ContactLabel,
    #[serde(default = "default_phone_country")]
    #[validate(range(min = 0))]
    pub country: i32,
    #[validate(range(min = 0))]
    pub area_code: i32,
    #[validate(range(min = 0))]
    pub exchange_code: i32,
    #[validate(range(min = 0))]
    pub number: i32,
    #[serde(default)]
    #[validate(length(min = 1, max = 25))]
    pub extension: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

fn default_phone_country() -> i32 {
    1
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct SocialAccountData {
    pub service: SocialService,
    #[validate(length(min = 1, max = 250))]
    pub account: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct WebsiteData {
    #[validate(url(message = "Invalid URL format"), length(max = 200))]
    pub url: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct SourceData {
    #[validate(length(min = 1, max = 250))]
    pub title: String,
    #[serde(default)]
    #[validate(length(max = 250))]
    pub authors: Option<String>,
    #[serde(default)]
    #[validate(length(max = 250))]
    pub editors: Option<String>,
    #[serde(default)]
    #[validate(length(max = 250))]
    pub translators: Option<String>,
    #[serde(default)]
    #[validate(length(max = 250))]
    pub identifiers: Option<String>,
    #[serde(default)]
    #[validate(length(max = 250))]
    pub archive: Option<String>,
    #[serde(default)]
    #[validate(length(max = 250))]
    pub edition: Option<String>,
    #[serde(default)]
    #[validate(length(max = 250))]
    pub pages: Option<String>,
    #[serde(default)]
    #[validate(length(max = 250))]
    pub volume: Option<String>,
    #[serde(default)]
    #[validate(length(max = 250))]
    pub series: Option<String>,
    #[serde(default)]
    pub category: Option<SourceCategory>,
    /// Website snippets describing the same work. Duplicates collapse to the
    /// first occurrence.
    #[serde(default)]
    pub same_as: Vec<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct ExtraNameData {
    #[validate(length(min = 1, max = 250))]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryData {
    pub kind: CategoryKind,
    pub name: String,
    pub icon_id: Option<i64>,
}

/// Category payload as submitted; the kind comes from the snippet path.
#[derive(Debug, Deserialize, Validate)]
struct CategoryInput {
    #[validate(length(min = 1, max = 255))]
    name: String,
    #[serde(default)]
    icon_id: Option<i64>,
}

/// Field set of one snippet, tagged by kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SnippetData {
    Email(EmailData),
    Phone(PhoneData),
    SocialAccount(SocialAccountData),
    Website(WebsiteData),
    Source(SourceData),
    ExtraName(ExtraNameData),
    Category(CategoryData),
}

fn parse<T: serde::de::DeserializeOwned>(kind: SnippetKind, value: Value) -> Result<T, AppError> {
    serde_json::from_value(value).map_err(|e| {
        AppError::bad_request(
            "Invalid snippet payload",
            json!({ "kind": kind.as_str(), "reason": e.to_string() }),
        )
    })
}

fn category(kind: CategoryKind, value: Value) -> Result<SnippetData, AppError> {
    let input: CategoryInput = parse(kind.snippet_kind(), value)?;
    input.validate()?;
    Ok(SnippetData::Category(CategoryData {
        kind,
        name: input.name,
        icon_id: input.icon_id,
    }))
}

impl SnippetData {
    /// Decodes and validates a JSON payload for the given snippet kind.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the payload does not match the kind's
    /// field set or fails field validation.
    pub fn from_json(kind: SnippetKind, value: Value) -> Result<Self, AppError> {
        let data = match kind {
            SnippetKind::Email => SnippetData::Email(parse(kind, value)?),
            SnippetKind::Phone => SnippetData::Phone(parse(kind, value)?),
            SnippetKind::SocialAccount => SnippetData::SocialAccount(parse(kind, value)?),
            SnippetKind::Website => SnippetData::Website(parse(kind, value)?),
            SnippetKind::Source => {
                let mut source: SourceData = parse(kind, value)?;
                dedup(&mut source.same_as);
                SnippetData::Source(source)
            }
            SnippetKind::ExtraName => SnippetData::ExtraName(parse(kind, value)?),
            SnippetKind::PersonCategory => category(CategoryKind::Person, value)?,
            SnippetKind::OrganizationCategory => category(CategoryKind::Organization, value)?,
            SnippetKind::PlaceCategory => category(CategoryKind::Place, value)?,
            SnippetKind::EventCategory => category(CategoryKind::Event, value)?,
        };
        data.validate()?;
        Ok(data)
    }

    pub fn kind(&self) -> SnippetKind {
        match self {
            SnippetData::Email(_) => SnippetKind::Email,
            SnippetData::Phone(_) => SnippetKind::Phone,
            SnippetData::SocialAccount(_) => SnippetKind::SocialAccount,
            SnippetData::Website(_) => SnippetKind::Website,
            SnippetData::Source(_) => SnippetKind::Source,
            SnippetData::ExtraName(_) => SnippetKind::ExtraName,
            SnippetData::Category(c) => c.kind.snippet_kind(),
        }
    }

    /// Runs field validation for the wrapped data.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] describing the offending fields.
    pub fn validate(&self) -> Result<(), AppError> {
        match self {
            SnippetData::Email(d) => d.validate()?,
            SnippetData::Phone(d) => d.validate()?,
            SnippetData::SocialAccount(d) => d.validate()?,
            SnippetData::Website(d) => d.validate()?,
            SnippetData::Source(d) => d.validate()?,
            SnippetData::ExtraName(d) => d.validate()?,
            SnippetData::Category(d) => {
                if d.name.is_empty() || d.name.chars().count() > 255 {
                    return Err(AppError::bad_request(
                        "Invalid category name length",
                        json!({"min": 1, "max": 255}),
                    ));
                }
            }
        }
        Ok(())
    }

    /// Key that must be unique among snippets of the same kind, if any.
    ///
    /// Missing optional values take part in the key, so two phones without an
    /// extension collide just like two phones with the same extension.
    pub fn unique_key(&self) -> Option<String> {
        match self {
            SnippetData::Email(d) => Some(d.address.clone()),
            SnippetData::Phone(d) => Some(format!(
                "{}|{}|{}|{}|{:?}",
                d.country, d.area_code, d.exchange_code, d.number, d.extension
            )),
            SnippetData::SocialAccount(d) => Some(format!("{}|{}", d.service.as_str(), d.account)),
            SnippetData::Website(d) => Some(d.url.clone()),
            SnippetData::Source(d) => Some(format!("{:?}|{:?}|{:?}", d.title, d.authors, d.edition)),
            SnippetData::ExtraName(_) => None,
            SnippetData::Category(d) => Some(format!("{}|{}", d.kind.as_str(), d.name)),
        }
    }

    /// Image referenced by this snippet, if any.
    pub fn icon_id(&self) -> Option<i64> {
        match self {
            SnippetData::Category(c) => c.icon_id,
            _ => None,
        }
    }
}

impl fmt::Display for SnippetData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SnippetData::Email(d) => write!(f, "{} ({})", d.address, d.label.as_str()),
            SnippetData::Phone(d) => {
                write!(
                    f,
                    "{} ({}) {}-{}",
                    d.country, d.area_code, d.exchange_code, d.number
                )?;
                if let Some(ext) = d.extension.as_deref().filter(|e| !e.is_empty()) {
                    write!(f, "x{ext}")?;
                }
                Ok(())
            }
            SnippetData::SocialAccount(d) => write!(f, "{}: {}", d.service.as_str(), d.account),
            SnippetData::Website(d) => f.write_str(&d.url),
            SnippetData::Source(d) => match &d.authors {
                Some(authors) => write!(f, "{} by {}", d.title, authors),
                None => f.write_str(&d.title),
            },
            SnippetData::ExtraName(d) => f.write_str(&d.name),
            SnippetData::Category(d) => f.write_str(&d.name),
        }
    }
}

/// A stored snippet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snippet {
    pub id: i64,
    pub data: SnippetData,
}

impl Snippet {
    pub fn kind(&self) -> SnippetKind {
        self.data.kind()
    }
}

impl fmt::Display for Snippet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.data.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_same_as_collapses_duplicates() {
        let data = SnippetData::from_json(
            SnippetKind::Source,
            json!({"title": "Art", "same_as": [4, 2, 4, 2]}),
        )
        .unwrap();

        let SnippetData::Source(source) = data else {
            panic!("expected a source");
        };
        assert_eq!(source.same_as, vec![4, 2]);
    }

    fn phone(extension: Option<&str>) -> SnippetData {
        SnippetData::Phone(PhoneData {
            label: ContactLabel::Work,
            country: 1,
            area_code: 312,
            exchange_code: 555,
            number: 100,
            extension: extension.map(str::to_string),
            description: None,
        })
    }

    #[test]
    fn test_snippet_kind_round_trips_through_str() {
        for kind in SnippetKind::ALL {
            assert_eq!(kind.as_str().parse::<SnippetKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_social_services_closed_list() {
        assert_eq!(SocialService::ALL.len(), 18);
        assert_eq!("github".parse::<SocialService>().unwrap().display_name(), "GitHub");
        assert!("myspace".parse::<SocialService>().is_err());
    }

    #[test]
    fn test_email_defaults_and_display() {
        let data = SnippetData::from_json(
            SnippetKind::Email,
            json!({"address": "curator@example.org"}),
        )
        .unwrap();

        assert_eq!(data.kind(), SnippetKind::Email);
        assert_eq!(data.to_string(), "curator@example.org (primary)");
    }

    #[test]
    fn test_email_must_be_valid() {
        let result = SnippetData::from_json(SnippetKind::Email, json!({"address": "nope"}));
        assert!(matches!(result, Err(AppError::Validation { .. })));
    }

    #[test]
    fn test_phone_display() {
        assert_eq!(phone(None).to_string(), "1 (312) 555-100");
        assert_eq!(phone(Some("12")).to_string(), "1 (312) 555-100x12");
    }

    #[test]
    fn test_phone_unique_key_includes_extension() {
        assert_ne!(phone(None).unique_key(), phone(Some("12")).unique_key());
        assert_eq!(phone(None).unique_key(), phone(None).unique_key());
    }

    #[test]
    fn test_phone_country_defaults_to_one() {
        let data = SnippetData::from_json(
            SnippetKind::Phone,
            json!({"area_code": 312, "exchange_code": 555, "number": 100}),
        )
        .unwrap();

        match data {
            SnippetData::Phone(p) => {
                assert_eq!(p.country, 1);
                assert_eq!(p.label, ContactLabel::Primary);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_category_kind_comes_from_path() {
        let data = SnippetData::from_json(SnippetKind::PlaceCategory, json!({"name": "Gallery"}))
            .unwrap();

        assert_eq!(data.kind(), SnippetKind::PlaceCategory);
        assert_eq!(data.unique_key().unwrap(), "place|Gallery");
    }

    #[test]
    fn test_source_display_and_key() {
        let data = SnippetData::from_json(
            SnippetKind::Source,
            json!({"title": "Art in Chicago", "authors": "M. Warren", "category": "book"}),
        )
        .unwrap();

        assert_eq!(data.to_string(), "Art in Chicago by M. Warren");
        assert!(data.unique_key().is_some());
    }

    #[test]
    fn test_unknown_field_type_is_rejected() {
        let result = SnippetData::from_json(
            SnippetKind::SocialAccount,
            json!({"service": "myspace", "account": "tom"}),
        );
        assert!(matches!(result, Err(AppError::Validation { .. })));
    }

    #[test]
    fn test_extra_names_are_never_unique() {
        let data =
            SnippetData::from_json(SnippetKind::ExtraName, json!({"name": "Studio Moniker"}))
                .unwrap();
        assert!(data.unique_key().is_none());
    }
}
