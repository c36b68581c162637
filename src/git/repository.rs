use crate::error::{GitVersionError, Result};
use crate::git::TagRef;
use git2::{Oid, Repository as Git2Repo};
use std::path::Path;

/// Wrapper around git2::Repository with our trait interface
pub struct Git2Repository {
    repo: Git2Repo,
}

impl Git2Repository {
    /// Open or discover a git repository at or above `path`
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Git2Repo::discover(path.as_ref()).map_err(|e| {
            GitVersionError::repository(format!(
                "Not a git repository at '{}': {}",
                path.as_ref().display(),
                e
            ))
        })?;

        Ok(Git2Repository { repo })
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Git2Repo) -> Self {
        Git2Repository { repo }
    }
}

impl super::Repository for Git2Repository {
    fn head_commit(&self) -> Result<Oid> {
        let head = self.repo.head().map_err(|e| {
            GitVersionError::repository(format!("Cannot resolve HEAD: {}", e))
        })?;

        let commit = head.peel_to_commit().map_err(|e| {
            GitVersionError::repository(format!("HEAD does not point to a commit: {}", e))
        })?;

        Ok(commit.id())
    }

    fn commits(&self) -> Result<Vec<Oid>> {
        let head = self.head_commit()?;

        let mut revwalk = self.repo.revwalk()?;
        revwalk.push(head)?;

        let mut commits = Vec::new();
        for oid_result in revwalk {
            commits.push(oid_result?);
        }

        Ok(commits)
    }

    fn tags(&self) -> Result<Vec<TagRef>> {
        let names = self.repo.tag_names(None)?;

        // Collect (commit time, tag); annotated tags peel to their commit,
        // tags pointing at non-commit objects are skipped
        let mut tags = Vec::new();
        for name in names.iter().flatten() {
            let reference = match self.repo.find_reference(&format!("refs/tags/{}", name)) {
                Ok(reference) => reference,
                Err(_) => continue,
            };

            if let Ok(commit) = reference.peel_to_commit() {
                tags.push((commit.time().seconds(), TagRef::new(name, commit.id())));
            }
        }

        // Newest target first; ties keep git2's lexicographic listing order
        tags.sort_by_key(|(time, _)| std::cmp::Reverse(*time));

        Ok(tags.into_iter().map(|(_, tag)| tag).collect())
    }

    fn distance(&self, from: Oid, to: Oid) -> Result<usize> {
        let mut revwalk = self.repo.revwalk()?;
        revwalk.push(from)?;
        revwalk.hide(to)?;

        let mut count = 0;
        for oid_result in revwalk {
            oid_result?;
            count += 1;
        }

        Ok(count)
    }
}

// SAFETY: Git2Repository wraps git2::Repository which is Send + Sync.
// git2 library is thread-safe for read operations via libgit2's thread-safe design.
unsafe impl Sync for Git2Repository {}
