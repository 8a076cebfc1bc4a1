//! DTOs for snippet endpoints.

use serde::Serialize;

use crate::domain::entities::{Snippet, SnippetData, SnippetKind};
use crate::domain::registry::SnippetRegistration;

/// A stored snippet with its display label.
#[derive(Debug, Serialize)]
pub struct SnippetItem {
    pub id: i64,
    pub kind: SnippetKind,
    pub label: String,
    pub data: SnippetData,
}

impl From<Snippet> for SnippetItem {
    fn from(snippet: Snippet) -> Self {
        SnippetItem {
            id: snippet.id,
            kind: snippet.kind(),
            label: snippet.to_string(),
            data: snippet.data,
        }
    }
}

/// One registered snippet kind, without its form layout.
#[derive(Debug, Serialize)]
pub struct SnippetKindItem {
    pub kind: SnippetKind,
    pub path: &'static str,
    pub verbose_name: &'static str,
    pub verbose_name_plural: &'static str,
}

impl From<&SnippetRegistration> for SnippetKindItem {
    fn from(entry: &SnippetRegistration) -> Self {
        SnippetKindItem {
            kind: entry.kind,
            path: entry.path,
            verbose_name: entry.verbose_name,
            verbose_name_plural: entry.verbose_name_plural,
        }
    }
}
