//! Radstack - RADICAL stack version reporting.
//!
//! Radstack prints the versions of the Python runtime and of the RADICAL
//! family of packages installed in the current environment. With
//! `-v`/`--verbose` it additionally queries the package index for the
//! latest published release of each installed package.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and the top-level run entry point
//! - [`error`] - Error types and result alias
//! - [`index`] - Package-index queries for latest-release lookup
//! - [`inspect`] - Installed-version collection
//! - [`report`] - Sorted, fixed-width report rendering
//! - [`shell`] - Shell command execution
//!
//! # Example
//!
//! ```
//! use radstack::inspect::StackReport;
//! use radstack::report;
//!
//! let mut stack = StackReport::default();
//! stack.system.insert("os".to_string(), "linux".to_string());
//! let rendered = report::render(&stack, None);
//! assert!(rendered.contains("  os                   : linux"));
//! ```

pub mod cli;
pub mod error;
pub mod index;
pub mod inspect;
pub mod report;
pub mod shell;

pub use error::{RadstackError, Result};
