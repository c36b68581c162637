//! Tag resolution over a [Repository]
//!
//! Pure orchestration over the accessor's queries, kept separate so the
//! logic can be exercised against [crate::git::MockRepository] without a
//! real repository on disk.

use crate::error::Result;
use crate::git::{Repository, TagRef};
use git2::Oid;
use std::collections::HashMap;

/// Find the tag pointing exactly at HEAD, if any.
///
/// When several tags share the HEAD commit, the first one in `tags()` order
/// wins; with equal target timestamps that is the lexicographically
/// smallest name.
pub fn current_tag<R: Repository>(repo: &R) -> Result<Option<TagRef>> {
    let head = repo.head_commit()?;

    for tag in repo.tags()? {
        if tag.target == head {
            return Ok(Some(tag));
        }
    }

    Ok(None)
}

/// Find the nearest tagged ancestor of HEAD.
///
/// Builds a commit-to-tag index from `tags()`, where later entries overwrite
/// earlier ones for the same commit (among tags sharing a commit, the last
/// in `tags()` order wins), then walks the history from the most recent
/// commit backwards and returns the first tagged commit. Returns `None`
/// when no reachable commit is tagged.
pub fn last_tag<R: Repository>(repo: &R) -> Result<Option<TagRef>> {
    let mut tags_by_commit: HashMap<Oid, TagRef> = HashMap::new();
    for tag in repo.tags()? {
        tags_by_commit.insert(tag.target, tag);
    }

    for oid in repo.commits()? {
        if let Some(tag) = tags_by_commit.get(&oid) {
            return Ok(Some(tag.clone()));
        }
    }

    Ok(None)
}
