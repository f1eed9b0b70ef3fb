use thiserror::Error;

#[derive(Debug, Error)]
pub enum RuleproError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("File system error: {0}")]
    FileSystem(#[from] std::io::Error),

    #[error("Manifest error: {message}")]
    Manifest {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("Output error: {0}")]
    Output(String),

    #[error("Validation error: {message}\nSuggestion: {suggestion}")]
    Validation { message: String, suggestion: String },
}

impl RuleproError {
    pub fn manifest(message: impl Into<String>) -> Self {
        RuleproError::Manifest {
            message: message.into(),
            source: None,
        }
    }

    pub fn unknown_recipe(name: &str) -> Self {
        RuleproError::Validation {
            message: format!("Unknown recipe: '{name}'"),
            suggestion: "Valid recipes are: no-conflicts, ban-module, enforce-field".to_owned(),
        }
    }
}

impl From<serde_json::Error> for RuleproError {
    fn from(err: serde_json::Error) -> Self {
        RuleproError::Manifest {
            message: "manifest is not valid JSON".to_owned(),
            source: Some(Box::new(err)),
        }
    }
}

/// Render an error for terminal display.
///
/// Validation errors keep their suggestion on its own line; in verbose mode
/// the source chain is appended so the underlying JSON or I/O failure is
/// visible.
pub fn format_error(error: &RuleproError, verbose: bool) -> String {
    let mut message = format!("\u{26a0} {error}");

    if verbose {
        let mut source = std::error::Error::source(error);
        while let Some(cause) = source {
            message.push_str(&format!("\n  caused by: {cause}"));
            source = std::error::Error::source(cause);
        }
    }

    message
}
