//! Whitelist generation for the `whitelist` subcommand.
//!
//! Derives "forbid anything not listed here" rules from a pasted
//! `package.json`: one exclusion rule per non-empty dependency group, and
//! optionally one version-lock rule per declared dependency. Rule order
//! follows the manifest's own key order.

use crate::generator::manifest::{DependencyGroup, Manifest};
use crate::generator::rule::{ANY_WORKSPACE, DependencyType};

/// Fixed text shown in place of output when the pasted manifest cannot be
/// parsed. This is the only failure the whitelist flow surfaces.
pub const PARSE_ERROR_TEXT: &str =
    "Unable to parse manifest. Paste the contents of a valid package.json.";

/// Generate the whitelist block for a parsed manifest.
///
/// Emits, in order: the `dependencies` exclusion rule, the `devDependencies`
/// exclusion rule, then (when `lock_versions` is set) one version-lock rule
/// per dependency, `dependencies` entries first. Rules are separated by one
/// blank line; an empty manifest yields an empty string.
pub fn generate_whitelist(manifest: &Manifest, lock_versions: bool) -> String {
    let mut rules = Vec::with_capacity(2 + if lock_versions { manifest.len() } else { 0 });

    for (group, dep_type) in groups(manifest) {
        if let Some(rule) = exclusion_rule(group, dep_type) {
            rules.push(rule);
        }
    }

    if lock_versions {
        for (group, dep_type) in groups(manifest) {
            for (name, version) in group {
                rules.push(version_lock_rule(name, version, dep_type));
            }
        }
    }

    rules.join("\n\n")
}

/// Parse raw manifest text and generate the whitelist, degrading a parse
/// failure to [`PARSE_ERROR_TEXT`] instead of propagating it.
pub fn whitelist_or_error(raw: &str, lock_versions: bool) -> String {
    match Manifest::parse(raw) {
        Ok(manifest) => generate_whitelist(&manifest, lock_versions),
        Err(err) => {
            tracing::debug!("manifest rejected: {err}");
            PARSE_ERROR_TEXT.to_owned()
        }
    }
}

fn groups(manifest: &Manifest) -> [(&DependencyGroup, DependencyType); 2] {
    [
        (&manifest.dependencies, DependencyType::Dependencies),
        (&manifest.dev_dependencies, DependencyType::DevDependencies),
    ]
}

/// One rule forbidding any dependency in `dep_type` that the group does not
/// name. Returns `None` for an empty group: no declarations means nothing to
/// whitelist, not "forbid everything".
fn exclusion_rule(group: &DependencyGroup, dep_type: DependencyType) -> Option<String> {
    if group.is_empty() {
        return None;
    }

    let mut clauses = Vec::with_capacity(group.len() + 1);
    clauses.push(format!(
        "workspace_has_dependency({ANY_WORKSPACE}, DependencyIdent, _, {dep_type})"
    ));
    for (name, _) in group {
        clauses.push(format!("DependencyIdent \\= '{name}'"));
    }

    Some(format!(
        "gen_enforced_dependency({ANY_WORKSPACE}, DependencyIdent, null, {dep_type}) :-\n  {}.",
        clauses.join(",\n  ")
    ))
}

fn version_lock_rule(name: &str, version: &str, dep_type: DependencyType) -> String {
    format!(
        "gen_enforced_dependency({ANY_WORKSPACE}, '{name}', '{version}', {dep_type}) :-\n  \
         workspace_has_dependency({ANY_WORKSPACE}, '{name}', _, {dep_type})."
    )
}
