pub mod env;
pub mod error;
mod helpers;
pub mod project;
pub mod webpack;

// Re-export main types
pub use env::{is_truthy, Environment, Mode};
pub use error::*;
pub use helpers::{DEFAULT_DEST_DIR, DEFAULT_ENTRY, DEFAULT_INJECT, DEFAULT_NAMESPACE};
pub use project::*;
pub use webpack::*;
