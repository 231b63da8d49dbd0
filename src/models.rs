use serde::{Deserialize, Serialize};
use std::ops::Deref;
use std::sync::Arc;

/// A labeled link destination shown in the top navigation bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationEntry {
    pub label: String,
    pub path: String,
}

impl NavigationEntry {
    pub fn new<L: Into<String>, P: Into<String>>(label: L, path: P) -> Self {
        Self {
            label: label.into(),
            path: path.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NavigationNodes {
    pub nodes: Vec<NavigationEntry>,
}

/// Result shape of the site-wide navigation query.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NavigationQuery {
    #[serde(rename = "allNavigationDataJson")]
    pub all_navigation_data_json: NavigationNodes,
}

impl NavigationQuery {
    pub fn nodes(&self) -> &[NavigationEntry] {
        &self.all_navigation_data_json.nodes
    }
}

impl From<Vec<NavigationEntry>> for NavigationQuery {
    fn from(nodes: Vec<NavigationEntry>) -> Self {
        Self {
            all_navigation_data_json: NavigationNodes { nodes },
        }
    }
}

/// Immutable snapshot of the navigation entries, provided to the render tree as context.
///
/// Cloning only bumps a reference count, so every render shares the same list.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NavigationSnapshot(Arc<Vec<NavigationEntry>>);

impl NavigationSnapshot {
    pub fn new(entries: Vec<NavigationEntry>) -> Self {
        Self(Arc::new(entries))
    }
}

// deref so the snapshot can be iterated like a slice
impl Deref for NavigationSnapshot {
    type Target = [NavigationEntry];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<NavigationQuery> for NavigationSnapshot {
    fn from(query: NavigationQuery) -> Self {
        Self::new(query.all_navigation_data_json.nodes)
    }
}

impl From<Vec<NavigationEntry>> for NavigationSnapshot {
    fn from(entries: Vec<NavigationEntry>) -> Self {
        Self::new(entries)
    }
}
