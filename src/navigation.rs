use std::path::PathBuf;

use crate::error::AppError;
use crate::models::{NavigationEntry, NavigationQuery, NavigationSnapshot};

/// Anything that can answer the site-wide navigation query.
pub trait NavigationSource {
    fn query(&self) -> Result<NavigationQuery, AppError>;

    fn snapshot(&self) -> Result<NavigationSnapshot, AppError> {
        Ok(self.query()?.into())
    }
}

/// Reads navigation data from a JSON file.
///
/// The file may hold either a bare array of `{label, path}` objects or the full
/// `{ "allNavigationDataJson": { "nodes": [...] } }` query result.
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }
}

impl NavigationSource for JsonFileSource {
    fn query(&self) -> Result<NavigationQuery, AppError> {
        let raw = std::fs::read_to_string(&self.path)?;
        let query = match raw.trim_start().as_bytes().first() {
            Some(b'{') => serde_json::from_str::<NavigationQuery>(&raw)?,
            _ => NavigationQuery::from(serde_json::from_str::<Vec<NavigationEntry>>(&raw)?),
        };
        tracing::debug!(
            "Loaded {} navigation entries from {}",
            query.nodes().len(),
            self.path.display()
        );
        Ok(query)
    }
}
