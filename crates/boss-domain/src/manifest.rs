use std::{fs, io, path::Path};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Conventional manifest file name, relative to the project root.
pub const BOSS_MANIFEST_FILE: &str = "boss.json";

#[derive(thiserror::Error, Debug)]
pub enum ManifestError {
    #[error("failed to read or write manifest: {0}")]
    Io(#[from] io::Error),
    #[error("manifest is not a valid boss.json document: {0}")]
    Deserialize(#[source] serde_json::Error),
    #[error("manifest could not be encoded: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// In-memory model of a project's `boss.json`.
///
/// Every field defaults when absent from the persisted document, so partial
/// manifests load without error. `dependencies` maps canonical repository
/// addresses to version constraints; insertion order is preserved and key
/// lookup is case-insensitive. An absent map serializes as `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Manifest {
    pub name: String,
    pub description: String,
    pub version: String,
    pub homepage: String,
    pub mainsrc: String,
    pub projects: Vec<String>,
    pub scripts: Vec<String>,
    pub dependencies: Option<IndexMap<String, String>>,
}

impl Manifest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read and deserialize the manifest at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ManifestError> {
        let bytes = fs::read(path)?;
        serde_json::from_slice(&bytes).map_err(ManifestError::Deserialize)
    }

    /// Serialize with stable two-space indentation and write back to `path`.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ManifestError> {
        let buf = serde_json::to_vec_pretty(self).map_err(ManifestError::Serialize)?;
        fs::write(path, buf)?;
        Ok(())
    }

    /// Insert or update a dependency entry.
    ///
    /// Keys match case-insensitively: an existing entry keeps its original
    /// casing and only its version is overwritten, so the map never holds two
    /// case-insensitive duplicates.
    pub fn add_dependency(&mut self, repository: &str, version: &str) {
        let dependencies = self.dependencies.get_or_insert_with(IndexMap::new);
        for (existing, constraint) in dependencies.iter_mut() {
            if existing.eq_ignore_ascii_case(repository) {
                *constraint = version.to_string();
                return;
            }
        }
        dependencies.insert(repository.to_string(), version.to_string());
    }

    /// Remove every entry whose key matches `repository` case-insensitively.
    ///
    /// At most one such key can exist. Removing an absent dependency is a
    /// silent no-op.
    pub fn remove_dependency(&mut self, repository: &str) {
        if let Some(dependencies) = self.dependencies.as_mut() {
            dependencies.retain(|existing, _| !existing.eq_ignore_ascii_case(repository));
        }
    }
}
