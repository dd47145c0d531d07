use crate::core::version::parse_strict;
use semver::Version;
use std::fmt;

/// A user's version request, classified by shape alone (no network call)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionRequest {
    /// Most recent release that has at least one asset
    Head,
    /// The catalog's designated latest release
    Latest,
    /// Oldest release whose version is at least this one
    AtLeast(Version),
    /// A release tag, taken verbatim
    Tag(String),
}

impl VersionRequest {
    /// Classify a request string
    ///
    /// `head` and `latest` are literals. Anything that parses as a full
    /// semantic version (optionally prefixed with `v`) is a constraint.
    /// Everything else, including partial and zero-padded versions such as
    /// `8.2` or `v9.1.0000`, is an explicit tag.
    pub fn parse(input: &str) -> Self {
        let input = input.trim();
        match input {
            "head" => VersionRequest::Head,
            "latest" => VersionRequest::Latest,
            _ => match parse_strict(input) {
                Some(version) => VersionRequest::AtLeast(version),
                None => VersionRequest::Tag(input.to_string()),
            },
        }
    }
}

impl fmt::Display for VersionRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VersionRequest::Head => write!(f, "head"),
            VersionRequest::Latest => write!(f, "latest"),
            VersionRequest::AtLeast(version) => write!(f, ">={}", version),
            VersionRequest::Tag(tag) => write!(f, "tag {}", tag),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aliases() {
        assert_eq!(VersionRequest::parse("head"), VersionRequest::Head);
        assert_eq!(VersionRequest::parse(" latest "), VersionRequest::Latest);
    }

    #[test]
    fn test_semver_constraint() {
        assert_eq!(
            VersionRequest::parse("v0.9.5"),
            VersionRequest::AtLeast(Version::new(0, 9, 5))
        );
        assert_eq!(
            VersionRequest::parse("9.0.1"),
            VersionRequest::AtLeast(Version::new(9, 0, 1))
        );
    }

    #[test]
    fn test_explicit_tags() {
        assert_eq!(
            VersionRequest::parse("stable"),
            VersionRequest::Tag("stable".to_string())
        );
        assert_eq!(
            VersionRequest::parse("v9.1.0000"),
            VersionRequest::Tag("v9.1.0000".to_string())
        );
        assert_eq!(
            VersionRequest::parse("HEAD"),
            VersionRequest::Tag("HEAD".to_string())
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(VersionRequest::parse("v1.2.3").to_string(), ">=1.2.3");
        assert_eq!(VersionRequest::parse("nightly").to_string(), "tag nightly");
    }
}
