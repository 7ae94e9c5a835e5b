#![deny(clippy::all, warnings)]

mod commands;
mod outcome;

pub use boss_domain::{
    resolve_specifier, split_specifier, Manifest, ManifestError, ParsedSpecifier,
    BOSS_MANIFEST_FILE, MINIMAL_DEPENDENCY_VERSION,
};

pub use crate::commands::install::{install, InstallRequest};
pub use crate::commands::uninstall::{uninstall, UninstallRequest};
pub use crate::outcome::{manifest_error_outcome, CommandStatus, ExecutionOutcome};
