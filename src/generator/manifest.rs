//! Parsing of pasted `package.json` dependency sections.
//!
//! Only the `dependencies` and `devDependencies` maps are read; everything
//! else in the document is ignored. Key order is preserved so generated
//! rules come out in the same order the manifest declares them.

use crate::generator::rule::DependencyType;
use crate::utils::error::RuleproError;
use serde::Deserialize;
use serde_json::Map;

/// One dependency group: package name to version-range text, in manifest
/// declaration order.
pub type DependencyGroup = Vec<(String, String)>;

/// The dependency sections of a parsed manifest.
///
/// Absent sections are coerced to empty groups at the parse boundary, so
/// downstream code never distinguishes "missing" from "empty".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest {
    pub dependencies: DependencyGroup,
    pub dev_dependencies: DependencyGroup,
}

#[derive(Debug, Deserialize)]
struct RawManifest {
    #[serde(default)]
    dependencies: Map<String, serde_json::Value>,
    #[serde(default, rename = "devDependencies")]
    dev_dependencies: Map<String, serde_json::Value>,
}

impl Manifest {
    /// Parse manifest text. Fails on invalid JSON and on any version value
    /// that is not a string; both fold into [`RuleproError::Manifest`].
    pub fn parse(raw: &str) -> Result<Self, RuleproError> {
        let parsed: RawManifest = serde_json::from_str(raw)?;
        Ok(Self {
            dependencies: into_group(parsed.dependencies, DependencyType::Dependencies)?,
            dev_dependencies: into_group(parsed.dev_dependencies, DependencyType::DevDependencies)?,
        })
    }

    /// True when neither group declares anything.
    pub fn is_empty(&self) -> bool {
        self.dependencies.is_empty() && self.dev_dependencies.is_empty()
    }

    /// Total number of declared dependencies across both groups.
    pub fn len(&self) -> usize {
        self.dependencies.len() + self.dev_dependencies.len()
    }
}

fn into_group(
    map: Map<String, serde_json::Value>,
    group: DependencyType,
) -> Result<DependencyGroup, RuleproError> {
    map.into_iter()
        .map(|(name, value)| match value {
            serde_json::Value::String(version) => Ok((name, version)),
            other => Err(RuleproError::manifest(format!(
                "version for '{name}' in {group} must be a string, got {other}"
            ))),
        })
        .collect()
}
