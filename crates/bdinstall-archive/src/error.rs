use std::path::PathBuf;
use std::process::ExitStatus;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("7z executable not found on PATH")]
    ExtractorMissing,

    #[error("failed to run extractor: {0}")]
    Process(#[from] bdinstall_platform::Error),

    #[error("extraction of '{path}' exited with {status}")]
    ExtractionFailed { path: PathBuf, status: ExitStatus },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
