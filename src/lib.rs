//! blog-index: build-time post index for an MDX blog
//!
//! This crate discovers post documents under a content root, resolves each
//! document's public routed path through a route table produced by the
//! hosting build, and returns the posts sorted by publish date descending.
//! Rendering the documents themselves is someone else's job.

pub mod config;
pub mod content;
pub mod helpers;
pub mod index;
pub mod routes;

use anyhow::Result;
use std::path::Path;

use content::loader::ContentLoader;
use content::PostMeta;
use routes::RouteTable;

/// A blog content tree rooted at a base directory
#[derive(Debug, Clone)]
pub struct Blog {
    /// Index configuration
    pub config: config::BlogConfig,
    /// Base directory
    pub base_dir: std::path::PathBuf,
    /// Content directory holding post documents
    pub content_dir: std::path::PathBuf,
    /// Route table build artifact
    pub routes_path: std::path::PathBuf,
}

impl Blog {
    /// Create a new Blog instance from a directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("blog.yml");

        let config = if config_path.exists() {
            config::BlogConfig::load(&config_path)?
        } else {
            config::BlogConfig::default()
        };

        let content_dir = base_dir.join(&config.content_dir);
        let routes_path = base_dir.join(&config.routes_file);

        Ok(Self {
            config,
            base_dir,
            content_dir,
            routes_path,
        })
    }

    /// All posts, sorted by publish date descending.
    ///
    /// Scans the content root, loads the route table artifact, and builds
    /// the index. Either the full sorted list is returned or an error; a
    /// document without a route entry fails the whole call.
    pub async fn get_posts(&self) -> Result<Vec<PostMeta>> {
        let loader = ContentLoader::new(&self.content_dir, &self.config.post_suffix);
        let documents = loader.load_documents()?;

        let routes = RouteTable::load(&self.routes_path).await?;

        let posts = index::build(documents, &routes)?;
        tracing::info!("Indexed {} posts", posts.len());

        Ok(posts)
    }

    /// Posts carrying the featured flag, in the same order as `get_posts`
    pub async fn get_featured_posts(&self) -> Result<Vec<PostMeta>> {
        let mut posts = self.get_posts().await?;
        posts.retain(|p| p.frontmatter.featured);
        Ok(posts)
    }
}
