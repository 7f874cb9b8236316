//! Content loader - discovers post documents under the content root

use anyhow::{anyhow, Result};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::{Document, Frontmatter};

/// Discovers post documents under a content root
pub struct ContentLoader {
    content_dir: PathBuf,
    post_suffix: String,
}

impl ContentLoader {
    /// Create a new content loader
    pub fn new<P: AsRef<Path>>(content_dir: P, post_suffix: &str) -> Self {
        Self {
            content_dir: content_dir.as_ref().to_path_buf(),
            post_suffix: post_suffix.to_string(),
        }
    }

    /// Enumerate all post documents under the content root.
    ///
    /// Directory iteration order is filesystem-dependent, so the result is
    /// sorted by identifier to keep repeated scans identical.
    pub fn load_documents(&self) -> Result<Vec<Document>> {
        if !self.content_dir.exists() {
            return Ok(Vec::new());
        }

        let mut documents = Vec::new();

        for entry in WalkDir::new(&self.content_dir)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if path.is_file() && self.is_post_file(path) {
                documents.push(self.load_document(path)?);
            }
        }

        documents.sort_by(|a, b| a.id.cmp(&b.id));

        tracing::debug!(
            "Found {} documents under {:?}",
            documents.len(),
            self.content_dir
        );

        Ok(documents)
    }

    /// Load a single document from a file
    fn load_document(&self, path: &Path) -> Result<Document> {
        let content = fs::read_to_string(path)?;
        let (frontmatter, _body) = Frontmatter::parse(&content)
            .map_err(|e| anyhow!("invalid post document {:?}: {}", path, e))?;

        let id = self.document_id(path);
        tracing::debug!("Loaded document {}", id);

        Ok(Document { id, frontmatter })
    }

    /// Derive the canonical identifier: the path relative to the content
    /// root, with the post suffix stripped and forward-slash separators
    fn document_id(&self, path: &Path) -> String {
        let relative = path.strip_prefix(&self.content_dir).unwrap_or(path);
        let relative = relative.to_string_lossy().replace('\\', "/");
        relative
            .strip_suffix(self.post_suffix.as_str())
            .unwrap_or(&relative)
            .to_string()
    }

    /// Check if a file matches the post naming pattern
    fn is_post_file(&self, path: &Path) -> bool {
        path.file_name()
            .and_then(|n| n.to_str())
            .map(|n| n.ends_with(&self.post_suffix))
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_post(dir: &Path, name: &str, published: &str) {
        let content = format!(
            "---\ntitle: {name}\ndescription: about {name}\npublished: {published}\n---\n\nBody.\n"
        );
        fs::write(dir.join(name), content).unwrap();
    }

    #[test]
    fn test_load_documents_sorted_by_id() {
        let tmp = TempDir::new().unwrap();
        write_post(tmp.path(), "zebra.mdx", "2024-01-01");
        write_post(tmp.path(), "apple.mdx", "2024-02-01");
        write_post(tmp.path(), "mango.mdx", "2024-03-01");

        let loader = ContentLoader::new(tmp.path(), ".mdx");
        let documents = loader.load_documents().unwrap();

        let ids: Vec<_> = documents.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["apple", "mango", "zebra"]);
    }

    #[test]
    fn test_nested_directories_use_forward_slashes() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("2024/june")).unwrap();
        write_post(&tmp.path().join("2024/june"), "launch.mdx", "2024-06-15");

        let loader = ContentLoader::new(tmp.path(), ".mdx");
        let documents = loader.load_documents().unwrap();

        assert_eq!(documents.len(), 1);
        assert_eq!(documents[0].id, "2024/june/launch");
    }

    #[test]
    fn test_non_post_files_are_skipped() {
        let tmp = TempDir::new().unwrap();
        write_post(tmp.path(), "real.mdx", "2024-01-01");
        fs::write(tmp.path().join("notes.txt"), "not a post").unwrap();
        fs::write(tmp.path().join("draft.md"), "# also not a post").unwrap();

        let loader = ContentLoader::new(tmp.path(), ".mdx");
        let documents = loader.load_documents().unwrap();

        assert_eq!(documents.len(), 1);
        assert_eq!(documents[0].id, "real");
    }

    #[test]
    fn test_missing_content_dir_yields_empty() {
        let tmp = TempDir::new().unwrap();
        let loader = ContentLoader::new(tmp.path().join("nowhere"), ".mdx");
        assert!(loader.load_documents().unwrap().is_empty());
    }

    #[test]
    fn test_document_without_frontmatter_is_an_error() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("broken.mdx"), "No fence here.\n").unwrap();

        let loader = ContentLoader::new(tmp.path(), ".mdx");
        let err = loader.load_documents().unwrap_err();
        assert!(err.to_string().contains("broken.mdx"));
    }
}
