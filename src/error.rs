use std::path::PathBuf;

use thiserror::Error;

/// Failures while loading the caption file or printing guidance.
#[derive(Error, Debug)]
pub enum Error {
    /// The caption file does not exist
    #[error("{}: file not found", path.display())]
    NotFound { path: PathBuf },
    /// The caption file is not valid UTF-8
    #[error("{}: invalid UTF-8 at byte {valid_up_to}", path.display())]
    Decode { path: PathBuf, valid_up_to: usize },
    /// Any other failure opening or reading the caption file
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write guidance: {0}")]
    Output(#[source] std::io::Error),
}
