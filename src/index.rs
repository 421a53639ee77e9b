//! Package-index queries for latest-release lookup.
//!
//! [`PackageIndex`] is the seam between the reporter and the external
//! package-index command, so rendering can be exercised against a stub.
//! The reporter reads stdout only; a failed or empty query degrades to an
//! empty latest-release label rather than an error.

use crate::error::Result;
use crate::shell::{self, CommandResult};

/// Queries a package index for the newest published version of a package.
pub trait PackageIndex {
    /// Run one index query for `package`, returning the raw command result.
    fn query_latest(&self, package: &str) -> Result<CommandResult>;
}

/// Package index backed by `pip index versions`.
///
/// The first stdout line has the form `name (x.y.z)`, which is what
/// [`extract_release`] picks apart. The query runs with no timeout and
/// its exit status is never inspected by callers.
pub struct PipIndex;

impl PackageIndex for PipIndex {
    fn query_latest(&self, package: &str) -> Result<CommandResult> {
        shell::capture(&format!("python3 -m pip index versions {package}"))
    }
}

/// Extract the first parenthesized substring from index query output.
///
/// Returns the text between the first `(` and the first `)` that follows
/// it, or `None` when either delimiter is missing.
pub fn extract_release(text: &str) -> Option<&str> {
    let start = text.find('(')?;
    let rest = &text[start + 1..];
    let end = rest.find(')')?;
    Some(&rest[..end])
}
