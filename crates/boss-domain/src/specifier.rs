use once_cell::sync::Lazy;
use regex::Regex;
use tracing::trace;

/// Organization prefix applied to bare package names.
pub const DEFAULT_ORGANIZATION: &str = "github.com/HashLoad/";

/// Host prefix applied to `org/name` tokens.
pub const DEFAULT_HOST: &str = "github.com/";

/// Version constraint recorded when a specifier carries no version suffix.
pub const MINIMAL_DEPENDENCY_VERSION: &str = ">0.0.0";

// Specifier grammar, compiled once for the process lifetime.
static PATH_MARKER: Lazy<Regex> = Lazy::new(|| Regex::new(r"[?^/].*").expect("path marker"));
static SECOND_PATH_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[?^/].*[?^/].*").expect("second path marker"));
static VERSION_SUFFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<host>.*):(?P<version>[\^~]?[0-9]+\.[0-9]+(?:\.[0-9]+)?)$")
        .expect("version suffix")
});

/// Parsed form of one raw dependency token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedSpecifier {
    pub repository: String,
    pub version: String,
}

/// Resolve a raw token into a canonical repository address.
///
/// Bare names get the default organization, `org/name` tokens get the
/// default host, anything with a full `host/org/name` path passes through
/// unchanged. Total: every input, including the empty string, falls through
/// the same three branches.
pub fn resolve_specifier(token: &str) -> String {
    if !PATH_MARKER.is_match(token) {
        return format!("{DEFAULT_ORGANIZATION}{token}");
    }
    if !SECOND_PATH_MARKER.is_match(token) {
        return format!("{DEFAULT_HOST}{token}");
    }
    token.to_string()
}

/// Split a raw token into a canonical repository address and a version
/// constraint.
///
/// The token is lower-cased, a trailing `:<version>` suffix (optional `^`/`~`
/// prefix, `MAJOR.MINOR[.PATCH]`) is split off when present, a trailing
/// `.git` is stripped from the host, and the host is resolved through
/// [`resolve_specifier`]. The suffix grammar is anchored to the end of the
/// token; a colon anywhere else stays part of the host.
pub fn split_specifier(token: &str) -> ParsedSpecifier {
    let lowered = token.to_lowercase();
    let (mut host, version) = match VERSION_SUFFIX.captures(&lowered) {
        Some(caps) => (caps["host"].to_string(), caps["version"].to_string()),
        None => (lowered.clone(), MINIMAL_DEPENDENCY_VERSION.to_string()),
    };
    if host.ends_with(".git") {
        host.truncate(host.len() - 4);
    }
    let repository = resolve_specifier(&host);
    trace!(raw = token, repository = %repository, version = %version, "split dependency specifier");
    ParsedSpecifier {
        repository,
        version,
    }
}
