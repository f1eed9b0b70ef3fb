//! File writing for generated rule text.
//!
//! This module handles the write stage of a run:
//! - Determining the output path (default `constraints.pro`)
//! - Detecting file conflicts
//! - Creating backup files
//! - Writing the rule text to disk

use crate::output::CONSTRAINTS_FILE;
use crate::utils::error::RuleproError;
use std::path::{Path, PathBuf};

/// Options for controlling output file writing.
#[derive(Debug, Clone)]
pub struct WriteOptions {
    /// Base directory for the output file (usually the workspace root)
    pub base_path: PathBuf,
    /// Custom output path (overrides the `constraints.pro` default)
    pub output_path: Option<PathBuf>,
    /// Whether to create a backup of an existing file
    pub create_backup: bool,
    /// Whether to overwrite an existing file without confirmation
    pub force: bool,
}

impl WriteOptions {
    /// Create new write options with the given base path.
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
            output_path: None,
            create_backup: true,
            force: false,
        }
    }

    /// Set a custom output path.
    pub fn with_output_path(mut self, path: Option<PathBuf>) -> Self {
        self.output_path = path;
        self
    }

    /// Set whether to create a backup before overwriting.
    pub fn with_backup(mut self, create_backup: bool) -> Self {
        self.create_backup = create_backup;
        self
    }

    /// Set whether to force overwrite.
    pub fn with_force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }
}

/// Result of writing the rule file.
#[derive(Debug, Clone)]
pub struct WriteResult {
    /// Path where the file was written
    pub path: PathBuf,
    /// Path to the backup file (if one was created)
    pub backup_path: Option<PathBuf>,
    /// Whether the file was newly created (vs overwritten)
    pub is_new: bool,
}

/// Write generated rule text to disk.
///
/// A trailing newline is ensured so the file concatenates cleanly with
/// hand-written rules. Refuses to overwrite an existing file unless
/// `options.force` is set, taking a `.bak` backup first when enabled.
pub fn write_rules(text: &str, options: &WriteOptions) -> Result<WriteResult, RuleproError> {
    let output_path = determine_output_path(options);

    let is_new = !output_path.exists();
    let mut backup_path = None;

    if !is_new {
        if !options.force {
            return Err(RuleproError::Output(format!(
                "Output file already exists: {}. Use --force to overwrite.",
                output_path.display()
            )));
        }
        if options.create_backup {
            backup_path = Some(create_backup(&output_path)?);
        }
    }

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent).map_err(|e| {
                RuleproError::Output(format!(
                    "Failed to create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    let mut content = text.to_owned();
    if !content.is_empty() && !content.ends_with('\n') {
        content.push('\n');
    }

    std::fs::write(&output_path, content).map_err(|e| {
        RuleproError::Output(format!("Failed to write {}: {}", output_path.display(), e))
    })?;

    tracing::info!("Wrote rules to {}", output_path.display());

    Ok(WriteResult {
        path: output_path,
        backup_path,
        is_new,
    })
}

/// Determine the output path, honoring a custom override.
fn determine_output_path(options: &WriteOptions) -> PathBuf {
    match &options.output_path {
        Some(custom) if custom.is_absolute() => custom.clone(),
        Some(custom) => options.base_path.join(custom),
        None => options.base_path.join(CONSTRAINTS_FILE),
    }
}

/// Create a backup of an existing file, returning the backup path.
fn create_backup(path: &Path) -> Result<PathBuf, RuleproError> {
    let backup_path = generate_backup_path(path);

    std::fs::copy(path, &backup_path).map_err(|e| {
        RuleproError::Output(format!(
            "Failed to create backup of {}: {}",
            path.display(),
            e
        ))
    })?;

    tracing::debug!(
        "Created backup: {} -> {}",
        path.display(),
        backup_path.display()
    );

    Ok(backup_path)
}

/// Generate a backup path for a file.
///
/// Uses simple `.bak` suffix: `constraints.pro` -> `constraints.pro.bak`
fn generate_backup_path(path: &Path) -> PathBuf {
    let backup_name = format!(
        "{}.bak",
        path.file_name()
            .map(|s| s.to_string_lossy())
            .unwrap_or_default()
    );

    path.with_file_name(backup_name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_determine_output_path_default() {
        let options = WriteOptions::new("/project");
        let path = determine_output_path(&options);
        assert_eq!(path, PathBuf::from("/project/constraints.pro"));
    }

    #[test]
    fn test_determine_output_path_custom_relative() {
        let options = WriteOptions::new("/project")
            .with_output_path(Some(PathBuf::from("rules/deps.pro")));
        let path = determine_output_path(&options);
        assert_eq!(path, PathBuf::from("/project/rules/deps.pro"));
    }

    #[test]
    fn test_generate_backup_path() {
        let path = Path::new("/project/constraints.pro");
        let backup = generate_backup_path(path);
        assert_eq!(backup, PathBuf::from("/project/constraints.pro.bak"));
    }

    #[test]
    fn test_write_new_file_adds_trailing_newline() {
        let temp_dir = TempDir::new().unwrap();
        let options = WriteOptions::new(temp_dir.path());

        let result = write_rules("gen_enforced_field(WorkspaceCwd, 'license', 'MIT').", &options)
            .unwrap();

        assert!(result.is_new);
        assert!(result.backup_path.is_none());
        let written = fs::read_to_string(result.path).unwrap();
        assert!(written.ends_with(".\n"));
    }

    #[test]
    fn test_refuses_overwrite_without_force() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("constraints.pro"), "existing").unwrap();

        let options = WriteOptions::new(temp_dir.path());
        let err = write_rules("new rules.", &options).unwrap_err();
        assert!(err.to_string().contains("--force"));
    }

    #[test]
    fn test_force_overwrite_creates_backup() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("constraints.pro");
        fs::write(&target, "old rules.\n").unwrap();

        let options = WriteOptions::new(temp_dir.path()).with_force(true);
        let result = write_rules("new rules.", &options).unwrap();

        assert!(!result.is_new);
        let backup = result.backup_path.expect("backup should be created");
        assert_eq!(fs::read_to_string(backup).unwrap(), "old rules.\n");
        assert_eq!(fs::read_to_string(target).unwrap(), "new rules.\n");
    }

    #[test]
    fn test_force_without_backup() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("constraints.pro");
        fs::write(&target, "old").unwrap();

        let options = WriteOptions::new(temp_dir.path())
            .with_force(true)
            .with_backup(false);
        let result = write_rules("new rules.", &options).unwrap();

        assert!(result.backup_path.is_none());
        assert!(!temp_dir.path().join("constraints.pro.bak").exists());
    }
}
