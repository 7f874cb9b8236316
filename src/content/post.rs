//! Post models

use serde::{Deserialize, Serialize};

use super::Frontmatter;

/// A post document enumerated from the content root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Canonical identifier: content-root-relative path, suffix stripped
    pub id: String,

    /// Parsed front-matter
    pub frontmatter: Frontmatter,
}

/// The publishable identity of a post: its routed path and front-matter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostMeta {
    /// Public routed path, assigned by the hosting build
    pub path: String,

    /// Front-matter of the source document
    pub frontmatter: Frontmatter,
}
