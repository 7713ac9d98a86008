use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::{Builder, NamedTempFile};
use thiserror::Error;

const PARTIAL_PREFIX: &str = ".pdfmagic-";
const PARTIAL_SUFFIX: &str = ".part";

#[derive(Debug, Error)]
pub enum SaveError {
    #[error("{} is not a directory", .0.display())]
    NotADirectory(PathBuf),
    #[error("cannot create output directory {}: {source}", dir.display())]
    CreateDir {
        dir: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cannot write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Creates `dir` (and parents) unless it already exists as a directory.
pub fn ensure_output_dir(dir: &Path) -> Result<(), SaveError> {
    if dir.exists() && !dir.is_dir() {
        return Err(SaveError::NotADirectory(dir.to_path_buf()));
    }
    fs::create_dir_all(dir).map_err(|source| SaveError::CreateDir {
        dir: dir.to_path_buf(),
        source,
    })
}

/// Writes generated PDFs into one output directory.
///
/// The bytes land in a hidden `.part` file next to the target and are renamed
/// over `<dir>/<file_name>` only once fully written and synced. Until then any
/// earlier output under that name is left as it was; the partial file is
/// deleted when its handle drops.
#[derive(Debug, Clone)]
pub struct PdfSaver {
    dir: PathBuf,
}

impl PdfSaver {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn save(&self, file_name: &str, bytes: &[u8]) -> Result<PathBuf, SaveError> {
        ensure_output_dir(&self.dir)?;
        let target = self.dir.join(file_name);

        let partial = self.write_partial(bytes).map_err(|source| SaveError::Write {
            path: target.clone(),
            source,
        })?;
        partial.persist(&target).map_err(|err| SaveError::Write {
            path: target.clone(),
            source: err.error,
        })?;
        Ok(target)
    }

    fn write_partial(&self, bytes: &[u8]) -> io::Result<NamedTempFile> {
        let mut partial = Builder::new()
            .prefix(PARTIAL_PREFIX)
            .suffix(PARTIAL_SUFFIX)
            .tempfile_in(&self.dir)?;
        partial.write_all(bytes)?;
        partial.as_file().sync_all()?;
        Ok(partial)
    }
}
