use std::path::PathBuf;

use serde_json::json;
use tracing::debug;

use boss_domain::{resolve_specifier, Manifest, ManifestError};

use crate::outcome::ExecutionOutcome;

#[derive(Clone, Debug)]
pub struct UninstallRequest {
    pub manifest_path: PathBuf,
    pub packages: Vec<String>,
    pub no_save: bool,
}

/// Remove dependency specifiers from the manifest at `request.manifest_path`.
///
/// Tokens are resolved to repository addresses without version splitting or
/// lower-casing; removal matches keys case-insensitively. Unlike `install`,
/// the manifest is always persisted, even under `no_save` (see DESIGN.md).
///
/// # Errors
/// Returns a [`ManifestError`] when the manifest cannot be loaded or saved.
pub fn uninstall(request: &UninstallRequest) -> Result<ExecutionOutcome, ManifestError> {
    if request.packages.is_empty() {
        return Ok(ExecutionOutcome::user_error(
            "provide at least one dependency",
            json!({ "hint": "run `boss uninstall <pkg>`" }),
        ));
    }

    let mut manifest = Manifest::load(&request.manifest_path)?;
    let mut removed = Vec::new();
    for token in &request.packages {
        let repository = resolve_specifier(token);
        debug!(token = %token, repository = %repository, "resolved removal target");
        manifest.remove_dependency(&repository);
        removed.push(repository);
    }

    manifest.save(&request.manifest_path)?;
    Ok(ExecutionOutcome::success(
        format!("removed {} package(s)", removed.len()),
        json!({
            "manifest": request.manifest_path.display().to_string(),
            "removed": removed,
        }),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn write_manifest(dir: &std::path::Path, contents: &str) -> PathBuf {
        let path = dir.join("boss.json");
        fs::write(&path, contents).expect("write manifest");
        path
    }

    #[test]
    fn bare_token_removes_default_organization_entry() -> Result<(), ManifestError> {
        let dir = tempdir()?;
        let path = write_manifest(
            dir.path(),
            r#"{"dependencies":{"github.com/HashLoad/widgets":"1.0.0"}}"#,
        );

        uninstall(&UninstallRequest {
            manifest_path: path.clone(),
            packages: vec!["widgets".to_string()],
            no_save: false,
        })?;

        let manifest = Manifest::load(&path)?;
        assert_eq!(manifest.dependencies.map(|deps| deps.len()), Some(0));
        Ok(())
    }

    #[test]
    fn removal_matches_case_insensitively() -> Result<(), ManifestError> {
        let dir = tempdir()?;
        let path = write_manifest(
            dir.path(),
            r#"{"dependencies":{"github.com/HashLoad/Widgets":"1.0.0"}}"#,
        );

        uninstall(&UninstallRequest {
            manifest_path: path.clone(),
            packages: vec!["widgets".to_string()],
            no_save: false,
        })?;

        let manifest = Manifest::load(&path)?;
        assert_eq!(manifest.dependencies.map(|deps| deps.len()), Some(0));
        Ok(())
    }

    #[test]
    fn unknown_host_is_silently_accepted() -> Result<(), ManifestError> {
        let dir = tempdir()?;
        let path = write_manifest(
            dir.path(),
            r#"{"dependencies":{"github.com/HashLoad/horse":"1.0.0"}}"#,
        );

        let outcome = uninstall(&UninstallRequest {
            manifest_path: path.clone(),
            packages: vec!["widgets".to_string()],
            no_save: false,
        })?;
        assert_eq!(outcome.status, crate::CommandStatus::Ok);

        let manifest = Manifest::load(&path)?;
        assert_eq!(manifest.dependencies.map(|deps| deps.len()), Some(1));
        Ok(())
    }

    #[test]
    fn persists_even_under_no_save() -> Result<(), ManifestError> {
        let dir = tempdir()?;
        let path = write_manifest(
            dir.path(),
            r#"{"dependencies":{"github.com/HashLoad/widgets":"1.0.0"}}"#,
        );

        uninstall(&UninstallRequest {
            manifest_path: path.clone(),
            packages: vec!["widgets".to_string()],
            no_save: true,
        })?;

        let manifest = Manifest::load(&path)?;
        assert_eq!(manifest.dependencies.map(|deps| deps.len()), Some(0));
        Ok(())
    }

    #[test]
    fn missing_manifest_propagates_io_error() {
        let dir = tempdir().expect("tempdir");
        let err = uninstall(&UninstallRequest {
            manifest_path: dir.path().join("boss.json"),
            packages: vec!["widgets".to_string()],
            no_save: false,
        })
        .expect_err("no manifest on disk");
        assert!(matches!(err, ManifestError::Io(_)));
    }
}
