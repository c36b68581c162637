use crate::parser::ParsedVersion;
use std::fmt;

/// Fully resolved version state for a repository checkout
///
/// Immutable once constructed; the only derived operation is rendering to a
/// string via [fmt::Display].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionInfo {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
    /// Number of commits since the resolved tag
    pub distance: usize,
    /// Short HEAD commit identifier, when configured
    pub commit_hash_short: Option<String>,
    pub pre_release: String,
    pub build_metadata: String,
}

impl VersionInfo {
    /// Combine parsed tag components with the measured distance and an
    /// optional short commit identifier
    pub fn new(parsed: ParsedVersion, distance: usize, commit_hash_short: Option<String>) -> Self {
        VersionInfo {
            major: parsed.major,
            minor: parsed.minor,
            patch: parsed.patch,
            distance,
            commit_hash_short,
            pre_release: parsed.pre_release,
            build_metadata: parsed.build_metadata,
        }
    }
}

impl fmt::Display for VersionInfo {
    /// Render `MAJOR.MINOR.PATCH`, appending `a<distance>` when distance is
    /// nonzero and `+<short-hash>` when a commit hash is attached. A zero
    /// distance renders with no suffix regardless of hash availability.
    ///
    /// `pre_release` and `build_metadata` are carried for callers but are
    /// not part of the rendered string.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;

        if self.distance > 0 {
            write!(f, "a{}", self.distance)?;
            if let Some(hash) = &self.commit_hash_short {
                write!(f, "+{}", hash)?;
            }
        }

        Ok(())
    }
}
