use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum UsageError {
    #[error("expected exactly one argument, got {0}")]
    ArgumentCount(usize),

    #[error("help requested")]
    Help,
}

#[derive(Debug, Error)]
pub enum WordWizardError {
    #[error("failed to read word list at {}", path.display())]
    ReadWordList {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
