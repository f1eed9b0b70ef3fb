pub mod writer;

pub use writer::{WriteOptions, WriteResult, write_rules};

/// Conventional file name consumed by `yarn constraints`.
pub const CONSTRAINTS_FILE: &str = "constraints.pro";
