//! Front-matter parsing

use anyhow::{anyhow, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Front-matter data from a post document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frontmatter {
    pub title: String,
    pub description: String,
    /// Publish date as ISO-8601 text; lexical order is chronological order
    pub published: String,
    /// Whether the post is highlighted on the landing page
    #[serde(default)]
    pub featured: bool,
}

impl Frontmatter {
    /// Parse front-matter from document content.
    /// Returns (front_matter, remaining_content).
    ///
    /// Post documents must open with a YAML fence (`---`) on the first line;
    /// a document without one is not a valid post.
    pub fn parse(content: &str) -> Result<(Self, &str)> {
        let rest = content
            .strip_prefix("---")
            .ok_or_else(|| anyhow!("document does not start with a front-matter fence"))?;
        let rest = rest.trim_start_matches(['\n', '\r']);

        if let Some(end_pos) = rest.find("\n---") {
            let yaml_content = &rest[..end_pos];
            let remaining = &rest[end_pos + 4..]; // Skip \n---
            let remaining = remaining.trim_start_matches(['\n', '\r']);

            let fm: Frontmatter = serde_yaml::from_str(yaml_content)
                .map_err(|e| anyhow!("invalid front-matter: {}", e))?;
            Ok((fm, remaining))
        } else {
            Err(anyhow!("unterminated front-matter fence"))
        }
    }

    /// Parse the published field into a typed date
    pub fn published_date(&self) -> Option<NaiveDate> {
        let s = self.published.trim();
        NaiveDate::parse_from_str(s, "%Y-%m-%d").ok().or_else(|| {
            chrono::DateTime::parse_from_rfc3339(s)
                .ok()
                .map(|dt| dt.date_naive())
        })
    }
}
