use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("srcFolder is required")]
    MissingSourceFolder,
    #[error("fonts[{0}]: filePath is required")]
    MissingFilePath(usize),
    #[error("no targets declared for font '{0}'")]
    NoTargets(String),
    #[error("'{0}' exists but is not a directory")]
    ExpectedDirectory(PathBuf),
    #[error("Missing file '{0}'")]
    FileExpected(PathBuf),
    #[error("no <dict> found in '{0}'")]
    NoDictionary(PathBuf),
    #[error("no target named '{0}' in the native project")]
    TargetNotFound(String),
    #[error("io failed for '{path}': '{source}'")]
    FileIo {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl Error {
    pub(crate) fn file_io(path: impl Into<PathBuf>, source: io::Error) -> Error {
        Error::FileIo {
            path: path.into(),
            source,
        }
    }
}
