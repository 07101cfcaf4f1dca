//! Generator errors.

use std::io;
use std::path::PathBuf;

use lang_cases::RegistryError;
use thiserror::Error;

/// Failure while writing fixture files.
#[derive(Debug, Error)]
pub enum EmitError {
    #[error("cannot create output directory `{}`: {source}", path.display())]
    DirectoryCreation { path: PathBuf, source: io::Error },

    #[error("cannot write fixture for case `{case}` to `{}`: {source}", path.display())]
    FileWrite {
        case: String,
        path: PathBuf,
        source: io::Error,
    },
}

/// Any failure of a generator run.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("invalid case catalog: {0}")]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    Emit(#[from] EmitError),

    #[error("cannot serialize case manifest: {0}")]
    Manifest(#[from] serde_json::Error),

    #[error("cannot write generated output: {0}")]
    Output(#[from] io::Error),
}
