use crate::config::Config;
use crate::error::Result;
use crate::git::{short_hash, Repository};
use crate::parser::parse_tag;
use crate::resolver;
use crate::version::VersionInfo;

/// Resolves and caches the version state of a repository checkout
///
/// All repository reads happen once, at construction; rendering afterwards
/// derives from the cached [VersionInfo] without touching the repository
/// again. Construct a fresh instance to observe a changed repository.
pub struct Versioner {
    version_info: VersionInfo,
}

impl Versioner {
    /// Resolve the version state of `repo`.
    ///
    /// Finds the nearest tagged ancestor of HEAD, measures the commit
    /// distance to it, and parses its name into version components. With no
    /// tag anywhere in history the components default to zero and the
    /// distance covers the entire history, root commit included. The short
    /// HEAD hash is attached only when `config.pre_release_commit_hash` is
    /// set.
    ///
    /// # Returns
    /// * `Ok(Versioner)` - Resolved version state
    /// * `Err` - If the repository is unreadable or has no commits
    pub fn new<R: Repository>(repo: &R, config: &Config) -> Result<Self> {
        let head = repo.head_commit()?;
        let last_tag = resolver::last_tag(repo)?;

        let distance = match &last_tag {
            Some(tag) => repo.distance(head, tag.target)?,
            None => repo.commits()?.len(),
        };

        let parsed = parse_tag(last_tag.as_ref().map(|tag| tag.name.as_str()));

        let commit_hash_short = if config.pre_release_commit_hash {
            Some(short_hash(head))
        } else {
            None
        };

        Ok(Versioner {
            version_info: VersionInfo::new(parsed, distance, commit_hash_short),
        })
    }

    /// The resolved version state
    pub fn info(&self) -> &VersionInfo {
        &self.version_info
    }

    /// Render the version string
    pub fn version(&self) -> String {
        self.version_info.to_string()
    }
}

/// Resolve the formatted version string for `repo` in one call
pub fn resolve_version<R: Repository>(repo: &R, config: &Config) -> Result<String> {
    Ok(Versioner::new(repo, config)?.version())
}
