use thiserror::Error;

#[derive(Error, Debug)]
pub enum PrepError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Zip operation failed: {0}")]
    ZipError(#[from] zip::result::ZipError),

    #[error("Descriptor parse error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Download failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),

    #[error("Malformed ivy dependency {coordinate}")]
    MalformedCoordinate { coordinate: String },

    #[error("Must specify scalaVersion for ivy dependency {coordinate}")]
    MissingScalaVersion { coordinate: String },

    #[error("Malformed Scala version {version}")]
    MalformedScalaVersion { version: String },

    #[error("Only Scala 2.X.Y versions are supported, got {version}")]
    UnsupportedScalaVersion { version: String },

    #[error("Invalid dependency descriptor {path}: {reason}")]
    InvalidDescriptor { path: String, reason: String },

    #[error("Attempting to jar duplicate filename {path}")]
    DuplicateJarEntry { path: String },

    #[error("Unexpected non-file and non-directory path {path}")]
    UnexpectedEntryType { path: String },

    #[error(
        "SHA256 mismatch for {path}!\n  Expected: {expected}\n  Got:      {actual}\nPlease delete the install directory and re-run"
    )]
    ChecksumMismatch {
        path: String,
        expected: String,
        actual: String,
    },

    #[error("Unable to fetch dependencies [{coordinates}]")]
    FetchFailed { coordinates: String },

    #[error("Configuration error: {field}: {reason}")]
    InvalidConfig { field: String, reason: String },
}

pub type Result<T> = std::result::Result<T, PrepError>;
