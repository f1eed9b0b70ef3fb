//! Canned constraint recipes for common policies.
//!
//! These are ready-to-paste rules for people who do not want to build one
//! field by field: keeping dependency ranges consistent across workspaces,
//! banning a module outright, and enforcing a `package.json` field value.

use crate::generator::rule::{RuleRequest, VersionSpec, generate_rule};
use crate::utils::error::RuleproError;

/// Rule forcing every workspace that shares a dependency to agree on its
/// range. Straight from the upstream Yarn constraints documentation.
pub const NO_CONFLICTS: &str = "\
gen_enforced_dependency(WorkspaceCwd, DependencyIdent, DependencyRange2, DependencyType) :-
  workspace_has_dependency(WorkspaceCwd, DependencyIdent, DependencyRange, DependencyType),
  workspace_has_dependency(OtherWorkspaceCwd, DependencyIdent, DependencyRange2, DependencyType2),
  DependencyRange \\= DependencyRange2.";

/// Rule banning `module` at any version in any workspace.
pub fn ban_module(module: &str) -> String {
    generate_rule(&RuleRequest {
        module_name: module.to_owned(),
        version: VersionSpec::None,
        ..RuleRequest::default()
    })
}

/// Rule enforcing a `package.json` field value across all workspaces, e.g.
/// `license = MIT`.
pub fn enforce_field(field: &str, value: &str) -> String {
    format!("gen_enforced_field(WorkspaceCwd, '{field}', '{value}').")
}

/// A canned recipe by name, with the module/field/value parameters applied
/// where the recipe takes them.
pub fn by_name(
    name: &str,
    module: &str,
    field: &str,
    value: &str,
) -> Result<String, RuleproError> {
    match name {
        "no-conflicts" => Ok(NO_CONFLICTS.to_owned()),
        "ban-module" => Ok(ban_module(module)),
        "enforce-field" => Ok(enforce_field(field, value)),
        other => Err(RuleproError::unknown_recipe(other)),
    }
}

/// Every recipe with its default parameters, for `rulepro recipes` with no
/// name argument.
pub fn all(module: &str, field: &str, value: &str) -> Vec<(&'static str, String)> {
    vec![
        ("no-conflicts", NO_CONFLICTS.to_owned()),
        ("ban-module", ban_module(module)),
        ("enforce-field", enforce_field(field, value)),
    ]
}
