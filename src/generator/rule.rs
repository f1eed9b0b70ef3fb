//! Single-rule generation for the `rule` subcommand.
//!
//! Builds one `gen_enforced_dependency/4` rule from a request describing the
//! module, the version requirement, the dependency section, and an optional
//! project scope. Generation is total: every request produces syntactically
//! valid Prolog, even when the module name is empty.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which `package.json` section a rule applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DependencyType {
    /// Any section; rendered as the Prolog wildcard `_`.
    #[default]
    Any,
    Dependencies,
    DevDependencies,
    PeerDependencies,
}

impl DependencyType {
    /// The token used in rule text for this section.
    pub fn token(self) -> &'static str {
        match self {
            DependencyType::Any => "_",
            DependencyType::Dependencies => "dependencies",
            DependencyType::DevDependencies => "devDependencies",
            DependencyType::PeerDependencies => "peerDependencies",
        }
    }
}

impl fmt::Display for DependencyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Version requirement for a generated rule.
///
/// `None` bans the module outright (the rule enforces the `null` range);
/// `Exact` pins it to the given range text, which is passed through verbatim
/// with no semver validation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum VersionSpec {
    #[default]
    None,
    Exact(String),
}

impl VersionSpec {
    fn token(&self) -> String {
        match self {
            VersionSpec::None => "null".to_owned(),
            VersionSpec::Exact(version) => format!("'{version}'"),
        }
    }
}

/// Everything needed to generate one rule.
#[derive(Debug, Clone, Default)]
pub struct RuleRequest {
    pub module_name: String,
    pub version: VersionSpec,
    pub dependency_type: DependencyType,
    /// Limits the rule to one workspace by name. Empty or whitespace-only
    /// means "all workspaces".
    pub project: String,
}

/// Prolog variable matching any workspace.
pub const ANY_WORKSPACE: &str = "WorkspaceCwd";

/// Generate one `gen_enforced_dependency` rule.
///
/// The scope argument is `WorkspaceCwd` unless the request names a project,
/// in which case the trimmed name becomes a quoted literal. When a version is
/// required, the rule is conditioned on the dependency actually being present
/// so it pins rather than introduces it.
pub fn generate_rule(request: &RuleRequest) -> String {
    let project = request.project.trim();
    let scope = if project.is_empty() {
        ANY_WORKSPACE.to_owned()
    } else {
        format!("'{project}'")
    };

    let head = format!(
        "gen_enforced_dependency({scope}, '{module}', {version}, {dep_type})",
        module = request.module_name,
        version = request.version.token(),
        dep_type = request.dependency_type.token(),
    );

    match request.version {
        VersionSpec::None => format!("{head}."),
        VersionSpec::Exact(_) => format!(
            "{head} :-\n  workspace_has_dependency({scope}, '{module}', _, {dep_type}).",
            module = request.module_name,
            dep_type = request.dependency_type.token(),
        ),
    }
}
