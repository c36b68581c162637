//! Git repository abstraction layer
//!
//! This module provides a trait-based abstraction over the read-only git
//! queries that version resolution needs, allowing for multiple
//! implementations including real Git repositories and mock implementations
//! for testing.
//!
//! The primary abstraction is the [Repository] trait. The concrete
//! implementations include:
//!
//! - [repository::Git2Repository]: A real implementation using the `git2` crate
//! - [mock::MockRepository]: A mock implementation for testing
//!
//! Most code should depend on the [Repository] trait rather than concrete
//! implementations to enable easy testing and flexibility.

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use crate::error::Result;
use git2::Oid;

/// Length of the short-form commit identifier
pub const SHORT_HASH_LEN: usize = 7;

/// A tag together with the commit it points at
///
/// Annotated tags are peeled to the commit they ultimately reference, so
/// `target` is always a commit OID.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagRef {
    /// The tag's display name (e.g., "v1.2.3")
    pub name: String,
    /// OID of the tagged commit
    pub target: Oid,
}

impl TagRef {
    /// Create a new tag reference
    pub fn new(name: impl Into<String>, target: Oid) -> Self {
        TagRef {
            name: name.into(),
            target,
        }
    }
}

/// Render the short form of a commit identifier (first 7 hex characters)
pub fn short_hash(oid: Oid) -> String {
    oid.to_string()[..SHORT_HASH_LEN].to_string()
}

/// Read-only git queries needed for version resolution
///
/// All implementors must be `Send + Sync` to allow safe sharing across
/// threads. Methods return [crate::error::Result], mapping backend errors
/// (like `git2::Error`) to [crate::error::GitVersionError] variants.
/// Implementations never mutate the repository.
pub trait Repository: Send + Sync {
    /// Get the OID of the commit HEAD currently points to
    ///
    /// # Returns
    /// * `Ok(Oid)` - Object ID of the HEAD commit
    /// * `Err` - If the repository has no commits (unborn HEAD) or a Git
    ///   error occurs
    fn head_commit(&self) -> Result<Oid>;

    /// Get all commits reachable from HEAD, most recent first
    ///
    /// Produces a fresh read per call; results are never cached across
    /// calls, since history may change between calls in a long-lived
    /// process.
    ///
    /// # Returns
    /// * `Ok(Vec<Oid>)` - Commit OIDs in reverse chronological order
    /// * `Err` - If HEAD cannot be resolved or a Git error occurs
    fn commits(&self) -> Result<Vec<Oid>>;

    /// Get all tags, most recently created first
    ///
    /// Recency is approximated by the timestamp of the tagged commit,
    /// newest first. Tags whose targets share a timestamp keep the backend
    /// listing order (lexicographic for git2). Tags pointing at objects
    /// other than commits are skipped.
    ///
    /// # Returns
    /// * `Ok(Vec<TagRef>)` - Tags in recency order
    /// * `Err` - If tag listing fails
    fn tags(&self) -> Result<Vec<TagRef>>;

    /// Count the commits reachable from `from` but not from `to`
    ///
    /// `to` is exclusive and `from` inclusive: over a linear history
    /// `[C3, C2, C1]`, `distance(C3, C1)` is 2.
    ///
    /// # Arguments
    /// * `from` - End of the range (inclusive)
    /// * `to` - Baseline commit (exclusive)
    ///
    /// # Returns
    /// * `Ok(usize)` - Number of commits in the range
    /// * `Err` - If either OID doesn't exist or a Git error occurs
    fn distance(&self, from: Oid, to: Oid) -> Result<usize>;
}
