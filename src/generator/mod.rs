//! Rule text generation for Yarn Berry constraints.
//!
//! This module provides:
//! - Single-rule generation from a form-style request (`rule`)
//! - Manifest parsing for pasted `package.json` sections (`manifest`)
//! - Whitelist synthesis from a parsed manifest (`whitelist`)

pub mod manifest;
pub mod rule;
pub mod whitelist;

pub use manifest::{DependencyGroup, Manifest};
pub use rule::{ANY_WORKSPACE, DependencyType, RuleRequest, VersionSpec, generate_rule};
pub use whitelist::{PARSE_ERROR_TEXT, generate_whitelist, whitelist_or_error};
