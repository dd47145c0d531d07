use thiserror::Error;

pub type RelverResult<T> = Result<T, RelverError>;

#[derive(Error, Debug)]
pub enum RelverError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Path error: {0}")]
    Path(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Credential error: {0}")]
    Credential(String),

    /// The GitHub API answered with a non-success status.
    #[error("GitHub API error: HTTP {status} for {url}")]
    GitHub { status: u16, url: String },

    #[error("GitHub API rate limit exceeded: {0}")]
    RateLimited(String),

    /// No release satisfies the request (empty acceptance run, or the
    /// tag / latest lookup returned nothing).
    #[error("Target release not found: {0}")]
    ReleaseNotFound(String),

    /// Asset lookup for a version that this resolver never returned.
    #[error("Unknown version '{0}': resolve it before downloading")]
    UnknownVersion(String),

    #[error("No asset matching /{pattern}/ (available: {})", .available.join(", "))]
    AssetNotFound {
        pattern: String,
        available: Vec<String>,
    },

    #[error("Install error: {0}")]
    Install(String),
}
