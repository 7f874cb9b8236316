//! Index configuration (blog.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Blog index configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BlogConfig {
    /// Directory holding post documents, relative to the base directory
    pub content_dir: String,

    /// File suffix a post document must carry
    pub post_suffix: String,

    /// Route table build artifact, relative to the base directory
    pub routes_file: String,
}

impl Default for BlogConfig {
    fn default() -> Self {
        Self {
            content_dir: "posts".to_string(),
            post_suffix: ".mdx".to_string(),
            routes_file: "routes.json".to_string(),
        }
    }
}

impl BlogConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: BlogConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }
}
