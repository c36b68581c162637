use crate::error::{GitVersionError, Result};
use crate::git::{Repository, TagRef};
use git2::Oid;

/// Mock repository for testing without actual git operations
///
/// Models a linear history: commits are stored most recent first, matching
/// the order `commits()` reports, and distance is the index difference
/// between two commits.
pub struct MockRepository {
    commits: Vec<Oid>,
    tags: Vec<TagRef>,
}

impl MockRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        MockRepository {
            commits: Vec::new(),
            tags: Vec::new(),
        }
    }

    /// Set the history, most recent commit first
    pub fn set_commits(&mut self, commits: Vec<Oid>) {
        self.commits = commits;
    }

    /// Add a tag pointing to an OID; tags are reported in insertion order
    pub fn add_tag(&mut self, name: impl Into<String>, target: Oid) {
        self.tags.push(TagRef::new(name, target));
    }

    fn position(&self, oid: Oid) -> Result<usize> {
        self.commits
            .iter()
            .position(|&c| c == oid)
            .ok_or_else(|| GitVersionError::repository(format!("Commit not found: {}", oid)))
    }
}

impl Default for MockRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl Repository for MockRepository {
    fn head_commit(&self) -> Result<Oid> {
        self.commits
            .first()
            .copied()
            .ok_or_else(|| GitVersionError::repository("Repository has no commits"))
    }

    fn commits(&self) -> Result<Vec<Oid>> {
        Ok(self.commits.clone())
    }

    fn tags(&self) -> Result<Vec<TagRef>> {
        Ok(self.tags.clone())
    }

    fn distance(&self, from: Oid, to: Oid) -> Result<usize> {
        let from_idx = self.position(from)?;
        let to_idx = self.position(to)?;

        Ok(to_idx.saturating_sub(from_idx))
    }
}
