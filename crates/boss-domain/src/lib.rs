#![deny(clippy::all, warnings)]
#![allow(clippy::missing_errors_doc, clippy::must_use_candidate)]

pub mod manifest;
pub mod specifier;

pub use manifest::{Manifest, ManifestError, BOSS_MANIFEST_FILE};
pub use specifier::{
    resolve_specifier, split_specifier, ParsedSpecifier, MINIMAL_DEPENDENCY_VERSION,
};
