use crate::generator::rule::DependencyType;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI-facing spelling of [`DependencyType`], matching the section names
/// used in `package.json`.
#[derive(Debug, Clone, Copy, ValueEnum)]
#[value(rename_all = "camelCase")]
pub enum DependencyTypeArg {
    Any,
    Dependencies,
    DevDependencies,
    PeerDependencies,
}

impl From<DependencyTypeArg> for DependencyType {
    fn from(arg: DependencyTypeArg) -> Self {
        match arg {
            DependencyTypeArg::Any => DependencyType::Any,
            DependencyTypeArg::Dependencies => DependencyType::Dependencies,
            DependencyTypeArg::DevDependencies => DependencyType::DevDependencies,
            DependencyTypeArg::PeerDependencies => DependencyType::PeerDependencies,
        }
    }
}

/// CLI argument parsing with environment variable support.
///
/// Environment variables follow the pattern `RULEPRO_*` and are overridden by
/// CLI flags. Example: `RULEPRO_OUTPUT=rules.pro` is overridden by
/// `--output constraints.pro`.
#[derive(Parser, Debug)]
#[command(name = "rulepro")]
#[command(about = "Generate Yarn Berry constraints.pro rules without writing the Prolog yourself")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Config file path
    #[arg(
        short,
        long,
        default_value = "rulepro.toml",
        env = "RULEPRO_CONFIG",
        global = true
    )]
    pub config: PathBuf,

    /// Write to a file instead of stdout
    #[arg(short, long, env = "RULEPRO_OUTPUT", global = true)]
    pub output: Option<PathBuf>,

    /// Overwrite an existing output file
    #[arg(long, global = true)]
    pub force: bool,

    /// Skip the .bak backup when overwriting
    #[arg(long, global = true)]
    pub no_backup: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build one dependency rule from module, version, section, and scope
    Rule {
        /// Module the rule applies to
        #[arg(short, long)]
        module: String,

        /// Require this range instead of banning the module outright
        #[arg(short = 'r', long, value_name = "RANGE")]
        require_version: Option<String>,

        /// Which package.json section the rule applies to
        #[arg(short = 't', long = "type", value_enum)]
        dependency_type: Option<DependencyTypeArg>,

        /// Limit the rule to the workspace with this name
        #[arg(short, long, default_value = "")]
        project: String,
    },

    /// Derive whitelist rules from a package.json manifest
    Whitelist {
        /// Manifest path, or '-' to read from stdin
        #[arg(default_value = "package.json")]
        manifest: PathBuf,

        /// Also pin every declared dependency to its current range
        #[arg(short, long)]
        lock_versions: bool,
    },

    /// Print canned recipes ready to paste into constraints.pro
    Recipes {
        /// Recipe name (no-conflicts, ban-module, enforce-field); prints all
        /// when omitted
        name: Option<String>,

        /// Module parameter for the ban-module recipe
        #[arg(long, default_value = "lodash")]
        module: String,

        /// Field parameter for the enforce-field recipe
        #[arg(long, default_value = "license")]
        field: String,

        /// Value parameter for the enforce-field recipe
        #[arg(long, default_value = "MIT")]
        value: String,
    },
}

pub fn parse() -> Args {
    Args::parse()
}
