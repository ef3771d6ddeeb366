//! Source discovery: decide what to look at.
//!
//! This module handles the first stage of the pipeline. It provides:
//!
//! - **Ignore patterns**: defaults plus the project's `.gitignore`
//! - **Package metadata**: the project name from `package.json`
//!
//! ## Example
//!
//! ```rust,ignore
//! use howtypedlib::source::{package_name, IgnorePatterns};
//!
//! let ignore = IgnorePatterns::resolve(".");
//! let name = package_name(".").unwrap_or_else(|| ".".to_string());
//! ```

pub mod ignore;
pub mod package;

pub use ignore::{IgnorePatterns, DEFAULT_IGNORE_PATTERNS};
pub use package::package_name;
