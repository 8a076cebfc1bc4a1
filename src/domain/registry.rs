//! Snippet kinds exposed to clients.
//!
//! The registry is assembled explicitly at startup (see [`SnippetRegistry::standard`])
//! and stored in the application state. Handlers only serve kinds found here.

use serde::Serialize;

use super::entities::SnippetKind;
use super::panels::{FormLayout, snippet_layout};

/// One registered snippet kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SnippetRegistration {
    pub kind: SnippetKind,
    /// Path segment under `/api/snippets/`.
    pub path: &'static str,
    pub verbose_name: &'static str,
    pub verbose_name_plural: &'static str,
    pub layout: FormLayout,
}

#[derive(Debug, Clone, Default)]
pub struct SnippetRegistry {
    entries: Vec<SnippetRegistration>,
}

impl SnippetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding every snippet kind of the archive.
    pub fn standard() -> Self {
        let mut registry = Self::new();
        registry
            .register(SnippetKind::Email, "email", "emails")
            .register(SnippetKind::Phone, "phone", "phones")
            .register(SnippetKind::SocialAccount, "social account", "social accounts")
            .register(SnippetKind::Website, "website", "websites")
            .register(SnippetKind::Source, "source", "sources")
            .register(SnippetKind::ExtraName, "extra name", "extra names")
            .register(SnippetKind::PersonCategory, "person category", "person categories")
            .register(
                SnippetKind::OrganizationCategory,
                "organization category",
                "organization categories",
            )
            .register(SnippetKind::PlaceCategory, "place category", "place categories")
            .register(SnippetKind::EventCategory, "event category", "event categories");
        registry
    }

    /// Adds a kind. Registering a kind twice replaces the earlier entry.
    pub fn register(
        &mut self,
        kind: SnippetKind,
        verbose_name: &'static str,
        verbose_name_plural: &'static str,
    ) -> &mut Self {
        let entry = SnippetRegistration {
            kind,
            path: kind.as_str(),
            verbose_name,
            verbose_name_plural,
            layout: snippet_layout(kind),
        };
        match self.entries.iter_mut().find(|e| e.kind == kind) {
            Some(existing) => *existing = entry,
            None => self.entries.push(entry),
        }
        self
    }

    pub fn get(&self, kind: SnippetKind) -> Option<&SnippetRegistration> {
        self.entries.iter().find(|e| e.kind == kind)
    }

    /// Resolves an API path segment such as `social-account`.
    pub fn resolve(&self, path: &str) -> Option<&SnippetRegistration> {
        self.entries.iter().find(|e| e.path == path)
    }

    pub fn entries(&self) -> &[SnippetRegistration] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_registry_covers_every_kind() {
        let registry = SnippetRegistry::standard();
        assert_eq!(registry.len(), SnippetKind::ALL.len());
        for kind in SnippetKind::ALL {
            assert!(registry.get(kind).is_some(), "{kind} not registered");
        }
    }

    #[test]
    fn test_resolve_by_path() {
        let registry = SnippetRegistry::standard();
        let entry = registry.resolve("event-category").unwrap();
        assert_eq!(entry.kind, SnippetKind::EventCategory);
        assert_eq!(entry.verbose_name_plural, "event categories");
        assert!(registry.resolve("event_category").is_none());
    }

    #[test]
    fn test_register_replaces_existing() {
        let mut registry = SnippetRegistry::new();
        registry
            .register(SnippetKind::Email, "email", "emails")
            .register(SnippetKind::Email, "e-mail", "e-mails");

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get(SnippetKind::Email).unwrap().verbose_name, "e-mail");
    }

    #[test]
    fn test_empty_registry_serves_nothing() {
        let registry = SnippetRegistry::new();
        assert!(registry.is_empty());
        assert!(registry.resolve("email").is_none());
    }
}
