use regex::Regex;
use tracing::warn;

/// Version components extracted from a tag name
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParsedVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
    pub pre_release: String,
    pub build_metadata: String,
}

/// Parse a tag name into version components.
///
/// Accepts an optional leading 'v', then `MAJOR.MINOR.PATCH` (each
/// one-or-more digits), then an optional `-pre-release` and `+build-metadata`
/// suffix. `None` resolves to all-zero defaults; so does any name that does
/// not match the pattern, after logging a warning. Parsing is total and
/// never fails.
///
/// # Example
/// ```
/// use git_version::parser::parse_tag;
///
/// let parsed = parse_tag(Some("v1.2.3-rc.1"));
/// assert_eq!(parsed.major, 1);
/// assert_eq!(parsed.pre_release, "rc.1");
///
/// assert_eq!(parse_tag(Some("v1.2.3.4")).major, 0);
/// ```
pub fn parse_tag(tag_name: Option<&str>) -> ParsedVersion {
    let name = match tag_name {
        Some(name) => name,
        None => return ParsedVersion::default(),
    };

    let captures = Regex::new(
        r"^v?(?P<major>\d+)\.(?P<minor>\d+)\.(?P<patch>\d+)(?:-(?P<pre_release>[0-9A-Za-z.-]+))?(?:\+(?P<build_metadata>[0-9A-Za-z.-]+))?$",
    )
    .ok()
    .and_then(|re| re.captures(name));

    let captures = match captures {
        Some(captures) => captures,
        None => {
            warn!("Could not parse tag '{}'. Returning default values", name);
            return ParsedVersion::default();
        }
    };

    let number = |group: &str| {
        captures
            .name(group)
            .and_then(|m| m.as_str().parse::<u32>().ok())
            .unwrap_or(0)
    };
    let text = |group: &str| {
        captures
            .name(group)
            .map(|m| m.as_str().to_string())
            .unwrap_or_default()
    };

    ParsedVersion {
        major: number("major"),
        minor: number("minor"),
        patch: number("patch"),
        pre_release: text("pre_release"),
        build_metadata: text("build_metadata"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tag_with_v_prefix() {
        let parsed = parse_tag(Some("v1.2.3"));
        assert_eq!(parsed.major, 1);
        assert_eq!(parsed.minor, 2);
        assert_eq!(parsed.patch, 3);
        assert_eq!(parsed.pre_release, "");
        assert_eq!(parsed.build_metadata, "");
    }

    #[test]
    fn test_parse_tag_without_prefix() {
        let parsed = parse_tag(Some("1.2.3"));
        assert_eq!(parsed, ParsedVersion {
            major: 1,
            minor: 2,
            patch: 3,
            pre_release: String::new(),
            build_metadata: String::new(),
        });
    }

    #[test]
    fn test_parse_tag_with_pre_release() {
        let parsed = parse_tag(Some("v1.2.3-alpha.1"));
        assert_eq!(parsed.major, 1);
        assert_eq!(parsed.pre_release, "alpha.1");
        assert_eq!(parsed.build_metadata, "");
    }

    #[test]
    fn test_parse_tag_with_build_metadata() {
        let parsed = parse_tag(Some("v1.2.3+build.42"));
        assert_eq!(parsed.patch, 3);
        assert_eq!(parsed.pre_release, "");
        assert_eq!(parsed.build_metadata, "build.42");
    }

    #[test]
    fn test_parse_tag_with_pre_release_and_metadata() {
        let parsed = parse_tag(Some("2.0.0-rc.1+build.7"));
        assert_eq!(parsed.major, 2);
        assert_eq!(parsed.pre_release, "rc.1");
        assert_eq!(parsed.build_metadata, "build.7");
    }

    #[test]
    fn test_parse_tag_four_components_fails() {
        let parsed = parse_tag(Some("v1.2.3.4"));
        assert_eq!(parsed, ParsedVersion::default());
    }

    #[test]
    fn test_parse_tag_non_numeric_fails() {
        assert_eq!(parse_tag(Some("release-2024")), ParsedVersion::default());
        assert_eq!(parse_tag(Some("v1.x.3")), ParsedVersion::default());
    }

    #[test]
    fn test_parse_tag_too_few_components_fails() {
        assert_eq!(parse_tag(Some("v1.2")), ParsedVersion::default());
    }

    #[test]
    fn test_parse_tag_none() {
        assert_eq!(parse_tag(None), ParsedVersion::default());
    }
}
