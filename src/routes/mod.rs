//! Route table - maps document identifiers to public routed paths
//!
//! The table is produced by the hosting build (a JSON artifact written next
//! to the content tree) and only ever read here. The index builder treats a
//! missing entry as a build misconfiguration, not a skippable condition.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Mapping from document identifier to public routed path
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RouteTable {
    routes: HashMap<String, String>,
}

impl RouteTable {
    /// Build a route table from identifier/path pairs
    pub fn from_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            routes: entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Load the route table from a JSON build artifact
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = tokio::fs::read_to_string(path.as_ref()).await?;
        let table: RouteTable = serde_json::from_str(&content)?;

        tracing::debug!("Loaded {} routes from {:?}", table.len(), path.as_ref());

        Ok(table)
    }

    /// Resolve an identifier to its routed path
    pub fn resolve(&self, id: &str) -> Option<&str> {
        self.routes.get(id).map(String::as_str)
    }

    /// Number of routes in the table
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Whether the table has no routes
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}
