//! Synthesis errors. Every variant aborts the whole invocation.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, SynthError>;

#[derive(Debug, Error)]
pub enum SynthError {
    #[error("could not determine project root path")]
    RootUndetermined,

    #[error("project root path must be absolute: {}", path.display())]
    RootNotAbsolute { path: PathBuf },

    #[error("html template `{template}` contains forbidden delimiter `{delimiter}`")]
    InvalidTemplate { template: String, delimiter: char },
}
