use crate::error::AppIconError;
use serde_json::{Map, Value};
use std::path::Path;

/// The `Contents.json` document of an icon set.
///
/// Kept as a raw JSON object so that keys the updater does not know about,
/// and the order of all keys, survive a load and save cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct Manifest {
    document: Map<String, Value>,
}

impl Manifest {
    /// Parses a manifest from its JSON text.
    pub fn parse(data: &str) -> Result<Self, AppIconError> {
        let value = serde_json::from_str::<Value>(data).map_err(AppIconError::ManifestParse)?;

        match value {
            Value::Object(document) => Ok(Self { document }),
            _ => Err(AppIconError::ManifestNotObject),
        }
    }

    /// Reads and parses the manifest at the given path.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, AppIconError> {
        let data = std::fs::read_to_string(path)?;
        Self::parse(&data)
    }

    /// Retrieves the image entries of the manifest.
    ///
    /// A manifest without an `images` key has no entries.
    pub fn images_mut(&mut self) -> Result<&mut [Value], AppIconError> {
        match self.document.get_mut("images") {
            None => Ok(Default::default()),
            Some(Value::Array(images)) => Ok(images.as_mut_slice()),
            Some(_) => Err(AppIconError::ImagesNotArray),
        }
    }

    #[cfg(test)]
    pub fn document(&self) -> &Map<String, Value> {
        &self.document
    }

    /// Serializes the manifest with 2-space indentation and a trailing newline.
    pub fn to_pretty_string(&self) -> Result<String, AppIconError> {
        let mut data =
            serde_json::to_string_pretty(&self.document).map_err(AppIconError::ManifestSerialize)?;
        data.push('\n');
        Ok(data)
    }

    /// Writes the manifest to the given path, replacing its contents.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), AppIconError> {
        let data = self.to_pretty_string()?;
        std::fs::write(path, data)?;
        Ok(())
    }
}
