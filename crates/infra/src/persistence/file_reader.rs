// crates/infra/src/persistence/file_reader.rs
use std::{
    fs::File,
    io::{self, Read},
    path::Path,
};

use livecount_shared_kernel::{InfraResult, InfrastructureError};

/// Convenience helpers for reading files with consistent error handling.
pub struct FileReader;

impl FileReader {
    /// Open the file at `path`.
    pub fn open(path: &Path) -> InfraResult<File> {
        File::open(path).map_err(|source| InfrastructureError::FileRead { path: path.to_path_buf(), source })
    }

    /// Read the entire file into memory.
    pub fn read_to_end(path: &Path) -> InfraResult<Vec<u8>> {
        let mut file = Self::open(path)?;
        let mut buf = Vec::new();
        file.read_to_end(&mut buf)
            .map_err(|source| InfrastructureError::FileRead { path: path.to_path_buf(), source })?;
        Ok(buf)
    }

    /// Read the file as text. Invalid UTF-8 sequences become U+FFFD.
    pub fn read_text(path: &Path) -> InfraResult<String> {
        Self::read_to_end(path).map(into_text)
    }

    /// Read all of standard input as text.
    pub fn read_stdin() -> InfraResult<String> {
        let mut buf = Vec::new();
        io::stdin()
            .lock()
            .read_to_end(&mut buf)
            .map_err(|source| InfrastructureError::FileRead { path: "<stdin>".into(), source })?;
        Ok(into_text(buf))
    }
}

fn into_text(bytes: Vec<u8>) -> String {
    String::from_utf8(bytes).unwrap_or_else(|err| String::from_utf8_lossy(err.as_bytes()).into_owned())
}
