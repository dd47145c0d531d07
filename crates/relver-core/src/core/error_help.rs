use crate::core::error::RelverError;

/// User-facing hints attached to errors when printed by the CLI.
pub trait ErrorHelp {
    /// A short suggestion for resolving the error, if one applies.
    fn help(&self) -> Option<String>;
}

impl ErrorHelp for RelverError {
    fn help(&self) -> Option<String> {
        match self {
            RelverError::RateLimited(_) => Some(
                "Set GITHUB_TOKEN (or run `relver login`) to raise the rate limit to 5000/hour."
                    .to_string(),
            ),
            RelverError::GitHub { status: 401, .. } | RelverError::GitHub { status: 403, .. } => {
                Some("Check that your GitHub token is valid and has not expired.".to_string())
            }
            RelverError::ReleaseNotFound(_) => Some(
                "Use `head`, `latest`, a semver version such as `v0.10.0`, or an existing release tag."
                    .to_string(),
            ),
            RelverError::AssetNotFound { .. } => Some(
                "Pass --pattern with a regular expression matching one of the available assets."
                    .to_string(),
            ),
            RelverError::Credential(_) => {
                Some("Export GITHUB_TOKEN instead of using the OS keychain.".to_string())
            }
            _ => None,
        }
    }
}

/// Format an error followed by its help text, if any.
pub fn format_error_with_help(error: &RelverError) -> String {
    match error.help() {
        Some(help) => format!("Error: {}\n\n  help: {}", error, help),
        None => format!("Error: {}", error),
    }
}
