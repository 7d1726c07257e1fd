use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppIconError {
    #[error("Contents.json not found at {}", .0.display())]
    ManifestNotFound(PathBuf),

    #[error("an error occurred while parsing the icon set manifest: {0}")]
    ManifestParse(serde_json::Error),

    #[error("the icon set manifest is not a JSON object")]
    ManifestNotObject,

    #[error("the images field of the icon set manifest is not a list")]
    ImagesNotArray,

    #[error("an error occurred while serializing the icon set manifest: {0}")]
    ManifestSerialize(serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
