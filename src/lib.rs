//! # rulepro
//!
//! rulepro generates `yarn constraints` rule text in Prolog notation so Yarn
//! Berry users do not have to write the Prolog themselves. Three commands:
//!
//! 1. **rule** - Build one `gen_enforced_dependency` rule from module,
//!    version requirement, dependency section, and optional project scope
//! 2. **whitelist** - Derive exclusion and version-lock rules from a
//!    `package.json` manifest
//! 3. **recipes** - Print canned rules for common policies
//!
//! ## Architecture
//!
//! The generators in [`generator`] are pure functions over their inputs; all
//! I/O (manifest reading, `constraints.pro` writing, logging) lives in the
//! CLI shell around them. Configuration follows hierarchical precedence:
//!
//! 1. Config files (`~/.config/rulepro/config.toml`, workspace-root and
//!    current-directory `rulepro.toml`, explicit `--config`)
//! 2. Environment variables (`RULEPRO_*`)
//! 3. CLI flags (highest precedence)

pub mod cli;
pub mod generator;
pub mod output;
pub mod recipes;
pub mod utils;

use anyhow::{Context, Result};
use cli::args::{Args, Command};
use cli::config::Config;
use console::style;
use generator::rule::{DependencyType, RuleRequest, VersionSpec, generate_rule};
use generator::whitelist::whitelist_or_error;
use output::writer::{WriteOptions, write_rules};
use std::path::{Path, PathBuf};

/// Final resolved output settings after merging CLI flags over config file
/// values. Boolean flags are additive: a flag set in either place wins.
#[derive(Debug, Clone)]
pub struct Settings {
    pub output: Option<PathBuf>,
    pub force: bool,
    pub backup: bool,
    pub quiet: bool,
}

impl Settings {
    pub fn merge(args: &Args, config: &Config) -> Self {
        Self {
            output: args.output.clone().or_else(|| config.general.output.clone()),
            force: args.force || config.general.force,
            backup: config.general.backup && !args.no_backup,
            quiet: args.quiet,
        }
    }
}

/// Initialize logging based on verbosity level.
pub fn init_logging(verbose: u8, quiet: bool) {
    let level = if quiet {
        tracing::Level::ERROR
    } else {
        match verbose {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        }
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();
}

/// Run the selected command: generate rule text, then print it or write it
/// to the output file.
pub fn run(args: &Args, config: &Config) -> Result<()> {
    let settings = Settings::merge(args, config);
    tracing::debug!(
        "rulepro v{} output={:?} force={} backup={}",
        env!("CARGO_PKG_VERSION"),
        settings.output,
        settings.force,
        settings.backup
    );

    let text = match &args.command {
        Command::Rule {
            module,
            require_version,
            dependency_type,
            project,
        } => {
            let request = RuleRequest {
                module_name: module.clone(),
                version: require_version
                    .clone()
                    .map_or(VersionSpec::None, VersionSpec::Exact),
                dependency_type: dependency_type
                    .as_ref()
                    .map(|section| DependencyType::from(*section))
                    .or(config.rule.dependency_type)
                    .unwrap_or_default(),
                project: project.clone(),
            };
            generate_rule(&request)
        }
        Command::Whitelist {
            manifest,
            lock_versions,
        } => {
            let raw = read_manifest(manifest)?;
            whitelist_or_error(&raw, *lock_versions || config.whitelist.lock_versions)
        }
        Command::Recipes {
            name,
            module,
            field,
            value,
        } => match name {
            Some(name) => recipes::by_name(name, module, field, value)?,
            None => recipes::all(module, field, value)
                .into_iter()
                .map(|(name, rule)| format!("% {name}\n{rule}"))
                .collect::<Vec<_>>()
                .join("\n\n"),
        },
    };

    emit(&text, &settings)
}

/// Read manifest text from a file, or from stdin when the path is `-`.
fn read_manifest(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        std::io::read_to_string(std::io::stdin()).context("Failed to read manifest from stdin")
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read manifest: {}", path.display()))
    }
}

fn emit(text: &str, settings: &Settings) -> Result<()> {
    match &settings.output {
        Some(_) => {
            let options = WriteOptions::new(".")
                .with_output_path(settings.output.clone())
                .with_backup(settings.backup)
                .with_force(settings.force);
            let result = write_rules(text, &options)?;

            if !settings.quiet {
                let verb = if result.is_new { "Wrote" } else { "Updated" };
                eprintln!(
                    "{} {} {}",
                    style("\u{2713}").green(),
                    verb,
                    style(result.path.display()).bold()
                );
                if let Some(backup) = result.backup_path {
                    eprintln!("  backup saved to {}", backup.display());
                }
            }
        }
        None => println!("{text}"),
    }
    Ok(())
}
