use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Configuration for git-version.
///
/// Read from the `[tool.git-version]` section of a project manifest.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq, Default)]
pub struct Config {
    /// Append the short HEAD commit hash to pre-release version strings
    #[serde(default)]
    pub pre_release_commit_hash: bool,
}

/// Manifest wrapper matching the `[tool.git-version]` layout
#[derive(Debug, Deserialize, Default)]
struct Manifest {
    #[serde(default)]
    tool: ToolSection,
}

#[derive(Debug, Deserialize, Default)]
struct ToolSection {
    #[serde(rename = "git-version", default)]
    git_version: Option<Config>,
}

/// Loads configuration from a manifest file or returns defaults.
///
/// Attempts to locate a manifest in the following order:
/// 1. Custom path provided as parameter
/// 2. `gitversion.toml` in current directory
/// 3. `.gitversion.toml` in the user config directory
///
/// A missing file, an unreadable file, or a malformed `[tool.git-version]`
/// section all fall back to the default configuration; parse failures are
/// logged as warnings. Loading never fails.
///
/// # Arguments
/// * `config_path` - Optional path to a manifest carrying a
///   `[tool.git-version]` section
pub fn load_config(config_path: Option<&Path>) -> Config {
    let path = match resolve_path(config_path) {
        Some(path) => path,
        None => {
            debug!("No configuration file found. Using default config");
            return Config::default();
        }
    };

    debug!("Reading configuration from {}", path.display());
    let contents = match fs::read_to_string(&path) {
        Ok(contents) => contents,
        Err(e) => {
            warn!(
                "Could not read configuration at {}: {}. Using default config",
                path.display(),
                e
            );
            return Config::default();
        }
    };

    match toml::from_str::<Manifest>(&contents) {
        Ok(manifest) => manifest.tool.git_version.unwrap_or_default(),
        Err(e) => {
            warn!("Could not parse configuration: {}. Using default config", e);
            Config::default()
        }
    }
}

fn resolve_path(config_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = config_path {
        return Some(path.to_path_buf());
    }

    let local = Path::new("./gitversion.toml");
    if local.exists() {
        return Some(local.to_path_buf());
    }

    if let Some(config_dir) = dirs::config_dir() {
        let path = config_dir.join(".gitversion.toml");
        if path.exists() {
            return Some(path);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(!config.pre_release_commit_hash);
    }

    #[test]
    fn test_parse_tool_section() {
        let manifest: Manifest = toml::from_str(
            r#"
[tool.git-version]
pre_release_commit_hash = true
"#,
        )
        .unwrap();

        assert_eq!(
            manifest.tool.git_version,
            Some(Config {
                pre_release_commit_hash: true
            })
        );
    }

    #[test]
    fn test_parse_manifest_without_tool_section() {
        let manifest: Manifest = toml::from_str(
            r#"
[package]
name = "something-else"
"#,
        )
        .unwrap();

        assert_eq!(manifest.tool.git_version, None);
    }
}
