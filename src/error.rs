use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Browser launch failed: {0}")]
    LaunchError(String),

    #[error("Navigation failed: {0}")]
    NavigationError(String),

    #[error("Element not found: {0}")]
    ElementNotFound(String),

    #[error("Click failed: {0}")]
    ClickError(String),

    #[error("Attribute read failed: {0}")]
    AttributeError(String),

    #[error("Attribute `{attribute}` missing on {selector}")]
    MissingAttribute { selector: String, attribute: String },

    /// The page rendered, but carried no playable news entry.
    #[error("No entries found for selector: {0}")]
    NoEntries(String),

    #[error("Refusing to build a feed record with an empty stream URL")]
    EmptyStreamUrl,

    #[error("CDP error: {0}")]
    CdpError(#[from] chromiumoxide::error::CdpError),

    #[error("Feed serialization failed: {0}")]
    SerializeError(#[from] serde_json::Error),

    #[error("Failed to write {}: {source}", path.display())]
    WriteError {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
