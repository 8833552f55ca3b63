use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the slider library.
#[derive(Debug, Error)]
pub enum SliderError {
    /// A jump target outside `[0, len)`.
    #[error("slide index {index} out of range (slide count {len})")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("failed to parse configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("no image files found in directory: {0:?}")]
    NoImages(PathBuf),
}

pub type Result<T> = std::result::Result<T, SliderError>;
