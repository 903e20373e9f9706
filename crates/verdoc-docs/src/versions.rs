//! Published documentation versions.

use serde::Serialize;

/// A single published version.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DocVersion {
    /// Identifier used in URLs (e.g., "5.8", "master").
    pub id: String,
    /// Human-readable label for version pickers.
    pub label: String,
}

/// Ordered set of published versions, keyed by id.
///
/// Order is preserved as given by the backend. Adding an id that is already
/// present replaces its label in place.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DocVersions {
    items: Vec<DocVersion>,
}

impl DocVersions {
    /// Create an empty version set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a version, or relabel it if the id is already present.
    pub fn insert(&mut self, id: impl Into<String>, label: impl Into<String>) {
        let id = id.into();
        let label = label.into();
        match self.items.iter_mut().find(|v| v.id == id) {
            Some(existing) => existing.label = label,
            None => self.items.push(DocVersion { id, label }),
        }
    }

    /// Check if `id` is a published version.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Look up a version by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&DocVersion> {
        self.items.iter().find(|v| v.id == id)
    }

    /// Iterate over versions in order.
    pub fn iter(&self) -> std::slice::Iter<'_, DocVersion> {
        self.items.iter()
    }

    /// Iterate over version ids in order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(|v| v.id.as_str())
    }

    /// Number of versions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if no versions are published.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<'a> IntoIterator for &'a DocVersions {
    type Item = &'a DocVersion;
    type IntoIter = std::slice::Iter<'a, DocVersion>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K: Into<String>, L: Into<String>> FromIterator<(K, L)> for DocVersions {
    fn from_iter<I: IntoIterator<Item = (K, L)>>(iter: I) -> Self {
        let mut versions = Self::new();
        for (id, label) in iter {
            versions.insert(id, label);
        }
        versions
    }
}
