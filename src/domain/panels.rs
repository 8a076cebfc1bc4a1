//! Admin form layout for every page and snippet kind.
//!
//! Layouts are plain static data; nothing here renders a form. They are served
//! read-only so an editor front end can build its forms from them.

use serde::Serialize;

use super::entities::{PageKind, SnippetKind};

/// Input widget override for a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Widget {
    Default,
    /// Full-width rich text editor.
    RichText,
    CheckboxSelectMultiple,
}

/// One element of an edit form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Panel {
    Field {
        name: &'static str,
        widget: Widget,
    },
    FieldRow {
        children: &'static [Panel],
    },
    MultiField {
        heading: &'static str,
        children: &'static [Panel],
    },
    Inline {
        relation: &'static str,
        label: &'static str,
    },
    ImageChooser {
        name: &'static str,
    },
    SnippetChooser {
        name: &'static str,
    },
}

const fn field(name: &'static str) -> Panel {
    Panel::Field {
        name,
        widget: Widget::Default,
    }
}

const fn rich(name: &'static str) -> Panel {
    Panel::Field {
        name,
        widget: Widget::RichText,
    }
}

const fn checkboxes(name: &'static str) -> Panel {
    Panel::Field {
        name,
        widget: Widget::CheckboxSelectMultiple,
    }
}

/// Ordered panels plus the fields declared for search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FormLayout {
    pub panels: &'static [Panel],
    pub search_fields: &'static [&'static str],
}

const PAGE_SEARCH: &[&str] = &["title"];

const ROOT_PANELS: &[Panel] = &[field("title")];

const INDEX_PANELS: &[Panel] = &[field("title"), rich("intro")];

const PERSON_PANELS: &[Panel] = &[
    field("title"),
    rich("body"),
    field("same_as"),
    field("oclc_fast_id"),
    field("in_cpl_artistfiles"),
    Panel::SnippetChooser { name: "source" },
    field("getty_ulan_id"),
    checkboxes("emails"),
    checkboxes("phones"),
    checkboxes("social_accounts"),
    checkboxes("extra_names"),
    field("gender"),
    checkboxes("categories"),
    checkboxes("friends"),
    Panel::Inline {
        relation: "gallery",
        label: "Gallery images",
    },
];

const ORGANIZATION_PANELS: &[Panel] = &[
    field("title"),
    rich("body"),
    field("same_as"),
    field("oclc_fast_id"),
    field("in_cpl_artistfiles"),
    Panel::SnippetChooser { name: "source" },
    field("getty_ulan_id"),
    checkboxes("emails"),
    checkboxes("phones"),
    checkboxes("social_accounts"),
    checkboxes("extra_names"),
    field("nonprofit"),
    checkboxes("categories"),
    checkboxes("employees"),
    checkboxes("members"),
    checkboxes("locations"),
];

const PLACE_PANELS: &[Panel] = &[
    field("title"),
    rich("body"),
    field("same_as"),
    field("oclc_fast_id"),
    Panel::SnippetChooser { name: "source" },
    Panel::MultiField {
        heading: "Coordinates",
        children: &[
            Panel::FieldRow {
                children: &[field("latitude"), field("longitude"), field("altitude")],
            },
        ],
    },
    Panel::MultiField {
        heading: "Address",
        children: &[
            field("street"),
            field("locality"),
            field("region"),
            field("postal_code"),
            field("country"),
        ],
    },
    checkboxes("categories"),
];

const EVENT_PANELS: &[Panel] = &[
    field("title"),
    Panel::MultiField {
        heading: "Event information",
        children: &[
            field("start_date"),
            field("duration"),
            field("precision"),
            field("status"),
            field("tags"),
            checkboxes("categories"),
            checkboxes("organizers"),
        ],
    },
    rich("body"),
    field("same_as"),
    Panel::SnippetChooser { name: "source" },
    Panel::Inline {
        relation: "gallery",
        label: "Gallery images",
    },
];

/// Edit form layout of a page kind.
pub fn page_layout(kind: PageKind) -> FormLayout {
    match kind {
        PageKind::Root => FormLayout {
            panels: ROOT_PANELS,
            search_fields: PAGE_SEARCH,
        },
        PageKind::PersonIndex
        | PageKind::OrganizationIndex
        | PageKind::PlaceIndex
        | PageKind::EventIndex
        | PageKind::EventTagIndex => FormLayout {
            panels: INDEX_PANELS,
            search_fields: PAGE_SEARCH,
        },
        PageKind::Person => FormLayout {
            panels: PERSON_PANELS,
            search_fields: &["title", "gender"],
        },
        PageKind::Organization => FormLayout {
            panels: ORGANIZATION_PANELS,
            search_fields: PAGE_SEARCH,
        },
        PageKind::Place => FormLayout {
            panels: PLACE_PANELS,
            search_fields: &["title", "locality"],
        },
        PageKind::Event => FormLayout {
            panels: EVENT_PANELS,
            search_fields: &["title", "body"],
        },
    }
}

const CATEGORY_PANELS: &[Panel] = &[field("name"), Panel::ImageChooser { name: "icon" }];

const EMAIL_PANELS: &[Panel] = &[field("label"), field("address"), field("description")];

const PHONE_PANELS: &[Panel] = &[
    field("label"),
    Panel::FieldRow {
        children: &[
            field("country"),
            field("area_code"),
            field("exchange_code"),
            field("number"),
            field("extension"),
        ],
    },
    field("description"),
];

const SOCIAL_ACCOUNT_PANELS: &[Panel] = &[field("service"), field("account"), field("description")];

const WEBSITE_PANELS: &[Panel] = &[field("url"), field("description")];

const SOURCE_PANELS: &[Panel] = &[
    field("title"),
    field("authors"),
    field("editors"),
    field("translators"),
    field("identifiers"),
    field("archive"),
    field("edition"),
    field("pages"),
    field("volume"),
    field("series"),
    field("category"),
    checkboxes("same_as"),
];

const EXTRA_NAME_PANELS: &[Panel] = &[field("name"), field("description")];

/// Edit form layout of a snippet kind.
pub fn snippet_layout(kind: SnippetKind) -> FormLayout {
    let panels = match kind {
        SnippetKind::Email => EMAIL_PANELS,
        SnippetKind::Phone => PHONE_PANELS,
        SnippetKind::SocialAccount => SOCIAL_ACCOUNT_PANELS,
        SnippetKind::Website => WEBSITE_PANELS,
        SnippetKind::Source => SOURCE_PANELS,
        SnippetKind::ExtraName => EXTRA_NAME_PANELS,
        SnippetKind::PersonCategory
        | SnippetKind::OrganizationCategory
        | SnippetKind::PlaceCategory
        | SnippetKind::EventCategory => CATEGORY_PANELS,
    };
    FormLayout {
        panels,
        search_fields: &[],
    }
}
