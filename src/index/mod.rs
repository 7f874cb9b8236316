//! Post index builder
//!
//! The core of the crate: turns enumerated documents plus a route table into
//! the ordered list a listing page renders. The operation is all-or-nothing;
//! a document without a route aborts the whole build.

use thiserror::Error;

use crate::content::{Document, PostMeta};
use crate::helpers::{sort_by, Direction};
use crate::routes::RouteTable;

/// Error building the post index
#[derive(Debug, Error, PartialEq, Eq)]
pub enum IndexError {
    /// A document identifier has no entry in the route table
    #[error("no route for {id}")]
    UnresolvedRoute { id: String },
}

/// Build the ordered post index: resolve every document's routed path and
/// sort by publish date, newest first.
///
/// Fails on the first document whose identifier has no route table entry;
/// no partial index is ever returned. Documents sharing a publish date keep
/// their identifier order (the loader enumerates in ascending identifier
/// order and the sort is stable).
pub fn build(documents: Vec<Document>, routes: &RouteTable) -> Result<Vec<PostMeta>, IndexError> {
    let mut posts = Vec::with_capacity(documents.len());

    for doc in documents {
        let path = routes
            .resolve(&doc.id)
            .ok_or_else(|| IndexError::UnresolvedRoute { id: doc.id.clone() })?;

        posts.push(PostMeta {
            path: path.to_string(),
            frontmatter: doc.frontmatter,
        });
    }

    Ok(sort_by(
        posts,
        |post| post.frontmatter.published.clone(),
        Direction::Descending,
    ))
}
