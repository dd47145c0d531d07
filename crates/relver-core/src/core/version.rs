//! Release tag normalization.
//!
//! Release tags come in several shapes: proper semver (`v0.10.0`),
//! zero-padded semver (`v9.1.0000`), short forms (`8.2`) and symbolic tags
//! (`stable`, `nightly`). [`normalize`] maps the first three onto a
//! comparable [`semver::Version`] and rejects the last.

use semver::{BuildMetadata, Version};

/// Convert a release tag into a comparable semantic version.
///
/// Returns `None` unless the tag starts with an optional `v` followed by a
/// digit. Leading zeros are stripped from every numeric component, then the
/// first `MAJOR(.MINOR(.PATCH))` run is coerced into a version with missing
/// components set to zero. Pre-release and build suffixes are dropped.
pub fn normalize(tag: &str) -> Option<Version> {
    let body = tag.strip_prefix('v').unwrap_or(tag);
    if !body.starts_with(|c: char| c.is_ascii_digit()) {
        return None;
    }

    coerce(&strip_leading_zeros(body))
}

/// Parse a version request strictly (an optional leading `v` is allowed).
///
/// Unlike [`normalize`], this rejects partial (`8.2`) and zero-padded
/// (`8.2.0000`) forms, so those are treated as explicit tags by the resolver.
/// Build metadata is dropped: it carries no precedence, and release tags
/// never keep it after normalization.
pub fn parse_strict(request: &str) -> Option<Version> {
    let body = request.trim();
    let body = body.strip_prefix('v').unwrap_or(body);
    let mut version = Version::parse(body).ok()?;
    version.build = BuildMetadata::EMPTY;
    Some(version)
}

/// Whether a string looks like a full 40 character git commit SHA.
pub fn is_commit_sha(value: &str) -> bool {
    value.len() == 40 && value.bytes().all(|b| b.is_ascii_hexdigit())
}

/// `8.2.0000` -> `8.2.0`, `09.1` -> `9.1`. Non-numeric components are kept.
fn strip_leading_zeros(version: &str) -> String {
    version
        .split('.')
        .map(|part| {
            if !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit()) {
                let trimmed = part.trim_start_matches('0');
                if trimmed.is_empty() {
                    "0"
                } else {
                    trimmed
                }
            } else {
                part
            }
        })
        .collect::<Vec<_>>()
        .join(".")
}

fn coerce(version: &str) -> Option<Version> {
    let mut parts = [0u64; 3];
    let mut rest = version;

    for (i, slot) in parts.iter_mut().enumerate() {
        if i > 0 {
            match rest.strip_prefix('.') {
                Some(r) if r.starts_with(|c: char| c.is_ascii_digit()) => rest = r,
                _ => break,
            }
        }
        let end = rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(rest.len());
        *slot = rest[..end].parse().ok()?;
        rest = &rest[end..];
    }

    Some(Version::new(parts[0], parts[1], parts[2]))
}
