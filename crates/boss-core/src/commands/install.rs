use std::path::PathBuf;

use serde_json::json;
use tracing::{debug, info};

use boss_domain::{split_specifier, Manifest, ManifestError};

use crate::outcome::ExecutionOutcome;

#[derive(Clone, Debug)]
pub struct InstallRequest {
    pub manifest_path: PathBuf,
    pub packages: Vec<String>,
    pub no_save: bool,
}

/// Add dependency specifiers to the manifest at `request.manifest_path`.
///
/// Tokens are processed in input order; two tokens normalizing to the same
/// repository resolve last-write-wins. Persistence is skipped under
/// `no_save`.
///
/// # Errors
/// Returns a [`ManifestError`] when the manifest cannot be loaded or saved.
pub fn install(request: &InstallRequest) -> Result<ExecutionOutcome, ManifestError> {
    if request.packages.is_empty() {
        return Ok(ExecutionOutcome::user_error(
            "provide at least one dependency",
            json!({ "hint": "run `boss install <pkg>` or `boss install <pkg>@<version>`" }),
        ));
    }

    let mut manifest = Manifest::load(&request.manifest_path)?;
    let mut installed = Vec::new();
    for token in &request.packages {
        let spec = split_specifier(token);
        debug!(token = %token, repository = %spec.repository, version = %spec.version, "resolved dependency specifier");
        manifest.add_dependency(&spec.repository, &spec.version);
        installed.push(json!({
            "repository": spec.repository,
            "version": spec.version,
        }));
    }

    // Placeholder for the fetch/build pipeline.
    info!("Installing modules...");

    let details = json!({
        "manifest": request.manifest_path.display().to_string(),
        "installed": installed,
        "saved": !request.no_save,
    });
    if request.no_save {
        return Ok(ExecutionOutcome::success(
            format!("installed {} package(s) without saving", request.packages.len()),
            details,
        ));
    }
    manifest.save(&request.manifest_path)?;
    Ok(ExecutionOutcome::success(
        format!("installed {} package(s)", request.packages.len()),
        details,
    ))
}
