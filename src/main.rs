use anyhow::Result;
use rulepro::utils::error::{RuleproError, format_error};
use rulepro::{cli, run};

fn main() {
    // Try to determine verbose mode early for better error formatting
    // Default to false for early errors (before args are parsed)
    let verbose = std::env::args().any(|arg| matches!(arg.as_str(), "-v" | "-vv" | "-vvv"));

    if let Err(e) = run_main() {
        display_error(&e, verbose);
        std::process::exit(1);
    }
}

/// Display an error with contextual formatting.
///
/// Tries to downcast to `RuleproError` for rich formatting, falls back to
/// anyhow's error chain display for other errors.
fn display_error(error: &anyhow::Error, verbose: bool) {
    if let Some(rulepro_error) = error.downcast_ref::<RuleproError>() {
        eprintln!("{}", format_error(rulepro_error, verbose));
    } else {
        eprintln!("\n\u{26a0} Error: {}", error);

        let causes: Vec<_> = error.chain().skip(1).collect();
        if !causes.is_empty() {
            eprintln!("\nCaused by:");
            for (i, cause) in causes.iter().enumerate() {
                let prefix = if i == causes.len() - 1 {
                    "\u{2514}\u{2500}"
                } else {
                    "\u{251c}\u{2500}"
                };
                eprintln!("{} {}", prefix, cause);
            }
        }
    }
}

fn run_main() -> Result<()> {
    // Parse CLI arguments (includes env vars)
    let args = cli::args::parse();

    // Load config from files + env vars (already merged)
    let config = cli::config::load(&args)?;

    // Initialize logging based on verbosity
    rulepro::init_logging(args.verbose, args.quiet);

    // Run the selected command
    run(&args, &config)
}
