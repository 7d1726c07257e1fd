mod manifest;
mod meta;
mod table;

pub use crate::iconset::manifest::Manifest;
use crate::error::AppIconError;
use crate::iconset::meta::ImageKeys;
use serde::Deserialize;
use serde_json::Value;
use std::path::{Path, PathBuf};

/// The name of the manifest file inside an icon set directory.
pub const MANIFEST_FILE_NAME: &str = "Contents.json";

/// An icon filename written into an image entry.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct AssignedIcon {
    /// The position of the entry in the manifest's image list
    pub index: usize,

    /// The filename now referenced by the entry
    pub filename: &'static str,
}

/// The result of resolving the icon files of a manifest.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct UpdateSummary {
    /// The number of image entries visited
    pub entries: usize,

    /// The entries which received a filename
    pub assigned: Vec<AssignedIcon>,

    /// The number of entries with a known icon whose file does not exist
    pub missing: usize,
}

/// The outcome of a full update run.
#[derive(Debug)]
pub struct UpdateOutcome {
    /// The manifest as it has been written to disk
    pub manifest: Manifest,

    /// What has changed
    pub summary: UpdateSummary,
}

/// Fills in the filename of each image entry whose icon file exists.
///
/// `icon_exists` is asked for every filename found in the icon table, entries
/// without a table hit or without an existing file are left untouched.
pub fn apply_icon_files<F>(
    manifest: &mut Manifest,
    icon_exists: F,
) -> Result<UpdateSummary, AppIconError>
where
    F: Fn(&str) -> bool,
{
    let images = manifest.images_mut()?;
    let mut summary = UpdateSummary {
        entries: images.len(),
        ..Default::default()
    };

    for (index, image) in images.iter_mut().enumerate() {
        let filename = match resolve_icon_filename(image) {
            Some(v) => v,
            None => continue,
        };

        if !icon_exists(filename) {
            tracing::debug!("Image {} wants {}, but it does not exist", index, filename);
            summary.missing += 1;
            continue;
        }

        // Entries which are not objects have no lookup keys and never get here
        if let Value::Object(entry) = image {
            tracing::debug!("Image {} references {}", index, filename);
            entry.insert("filename".to_owned(), Value::String(filename.to_owned()));
            summary.assigned.push(AssignedIcon { index, filename });
        }
    }

    Ok(summary)
}

fn resolve_icon_filename(image: &Value) -> Option<&'static str> {
    if !image.is_object() {
        return None;
    }

    let keys = match ImageKeys::deserialize(image) {
        Ok(v) => v,
        Err(err) => {
            tracing::debug!("Skipping image entry with unexpected keys: {}", err);
            return None;
        }
    };

    let (size, scale) = keys.icon_key()?;
    table::lookup(size, scale)
}

pub struct IconSetUpdater {
    icon_set_dir: PathBuf,
    manifest_path: PathBuf,
    manifest: Manifest,
}

impl IconSetUpdater {
    /// Loads the manifest of the icon set in the given directory.
    pub fn from_dir(icon_set_dir: impl AsRef<Path>) -> Result<Self, AppIconError> {
        let icon_set_dir = icon_set_dir.as_ref().to_path_buf();
        let manifest_path = icon_set_dir.join(MANIFEST_FILE_NAME);

        if !manifest_path.exists() {
            return Err(AppIconError::ManifestNotFound(manifest_path));
        }

        tracing::debug!("Loading manifest from {}", manifest_path.display());
        let manifest = Manifest::load(&manifest_path)?;

        Ok(Self {
            icon_set_dir,
            manifest_path,
            manifest,
        })
    }

    /// References every icon file present in the icon set directory.
    pub fn apply(&mut self) -> Result<UpdateSummary, AppIconError> {
        let icon_set_dir = &self.icon_set_dir;
        apply_icon_files(&mut self.manifest, |filename| {
            icon_set_dir.join(filename).exists()
        })
    }

    /// Writes the manifest back to the icon set directory.
    pub fn save(&self) -> Result<(), AppIconError> {
        tracing::debug!("Writing manifest to {}", self.manifest_path.display());
        self.manifest.save(&self.manifest_path)
    }

    pub fn into_manifest(self) -> Manifest {
        self.manifest
    }
}

/// Updates the `Contents.json` of the icon set in `icon_set_dir` in place.
///
/// Icon files are always looked up next to the manifest, `icons_dir` does not
/// change the outcome.
pub fn update(
    icon_set_dir: impl AsRef<Path>,
    icons_dir: Option<&Path>,
) -> Result<UpdateOutcome, AppIconError> {
    if let Some(icons_dir) = icons_dir {
        tracing::debug!("Icons directory {} is not consulted", icons_dir.display());
    }

    let mut updater = IconSetUpdater::from_dir(icon_set_dir)?;
    let summary = updater.apply()?;
    updater.save()?;

    Ok(UpdateOutcome {
        manifest: updater.into_manifest(),
        summary,
    })
}
