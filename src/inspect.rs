//! Installed-version collection.
//!
//! Builds the [`StackReport`]: system/runtime entries read from the
//! environment and the `python3` interpreter, and domain entries probed
//! with `pip show` for each package of the RADICAL family. A probe that
//! reports failure (interpreter missing, package not installed) drops its
//! entry; only a failure to run the shell at all propagates as an error.

use crate::error::Result;
use crate::shell;
use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

/// Packages of the audited family.
pub const DOMAIN_PACKAGES: &[&str] = &[
    "radical.utils",
    "radical.saga",
    "radical.pilot",
    "radical.entk",
    "radical.analytics",
];

static PYTHON_VERSION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+\.\d+\S*").unwrap());

/// Installed versions, split into system/runtime and domain entries.
///
/// Both maps stay unordered; ordering is imposed at the presentation
/// boundary when the report is rendered. The report is constructed once
/// per invocation and read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct StackReport {
    /// Runtime/system components (interpreter, OS, environment paths).
    pub system: HashMap<String, String>,

    /// Installed domain packages, by distribution name.
    pub domain: HashMap<String, String>,
}

/// Collect installed versions from the current environment.
pub fn collect() -> Result<StackReport> {
    let mut system = HashMap::new();
    system.insert("os".to_string(), std::env::consts::OS.to_string());
    system.insert(
        "pythonpath".to_string(),
        std::env::var("PYTHONPATH").unwrap_or_default(),
    );
    system.insert("virtualenv".to_string(), active_environment());

    if let Some(version) = python_version()? {
        system.insert("python".to_string(), version);
    } else {
        tracing::debug!("no python3 interpreter found");
    }

    let mut domain = HashMap::new();
    for package in DOMAIN_PACKAGES {
        match installed_version(package)? {
            Some(version) => {
                domain.insert(package.to_string(), version);
            }
            None => tracing::debug!("{} not installed, skipping", package),
        }
    }

    Ok(StackReport { system, domain })
}

/// Name of the active virtualenv, falling back to the active conda env.
///
/// An empty value counts as unset, so a stale empty `VIRTUAL_ENV` does not
/// shadow a conda environment.
fn active_environment() -> String {
    ["VIRTUAL_ENV", "CONDA_DEFAULT_ENV"]
        .iter()
        .find_map(|var| std::env::var(var).ok().filter(|v| !v.is_empty()))
        .unwrap_or_default()
}

/// Probe the python3 interpreter version.
fn python_version() -> Result<Option<String>> {
    let result = shell::capture("python3 --version")?;
    if !result.success {
        return Ok(None);
    }

    // Python 2 printed the banner to stderr; check both streams.
    let text = if result.stdout.trim().is_empty() {
        &result.stderr
    } else {
        &result.stdout
    };
    Ok(parse_python_version(text))
}

/// Pull the version token out of `python3 --version` output.
fn parse_python_version(text: &str) -> Option<String> {
    PYTHON_VERSION_RE.find(text).map(|m| m.as_str().to_string())
}

/// Probe the installed version of one domain package.
fn installed_version(package: &str) -> Result<Option<String>> {
    let result = shell::capture(&format!("python3 -m pip show {package}"))?;
    if !result.success {
        return Ok(None);
    }
    Ok(parse_pip_show(&result.stdout))
}

/// Extract the `Version:` line from `pip show` output.
fn parse_pip_show(output: &str) -> Option<String> {
    output.lines().find_map(|line| {
        line.strip_prefix("Version:")
            .map(|rest| rest.trim().to_string())
    })
}
