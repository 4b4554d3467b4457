// crates/infra/src/persistence/file_reader.rs
use std::{
    fs::File,
    io::{self, BufReader, Read},
    path::{Path, PathBuf},
};

use textutils_shared_kernel::{InfrastructureError, Result};

/// Where the text to analyze comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
    Inline(String),
}

impl InputSource {
    /// `-` means stdin, anything else is a path.
    pub fn from_arg(arg: Option<PathBuf>) -> Self {
        match arg {
            Some(path) if path.as_os_str() != "-" => Self::File(path),
            _ => Self::Stdin,
        }
    }

    /// Human-readable name used in errors and logs.
    pub fn describe(&self) -> String {
        match self {
            Self::Stdin => "<stdin>".to_string(),
            Self::File(path) => path.display().to_string(),
            Self::Inline(_) => "<--text>".to_string(),
        }
    }

    /// Load the whole text.
    ///
    /// # Errors
    ///
    /// [`InfrastructureError::InputRead`] when the file or stdin cannot be read.
    pub fn read(&self) -> Result<String> {
        let text = match self {
            Self::Inline(text) => return Ok(text.clone()),
            Self::Stdin => FileReader::read_text(io::stdin().lock()),
            Self::File(path) => FileReader::read_path(path),
        }
        .map_err(|source| InfrastructureError::InputRead { source_name: self.describe(), source })?;
        log::debug!("read {} bytes from {}", text.len(), self.describe());
        Ok(text)
    }
}

/// Convenience helpers for reading text with consistent error handling.
pub struct FileReader;

impl FileReader {
    /// Open the file at `path` with buffered reading.
    pub fn open_buffered(path: &Path) -> io::Result<BufReader<File>> {
        File::open(path).map(BufReader::new)
    }

    /// Read the file at `path` as text.
    pub fn read_path(path: &Path) -> io::Result<String> {
        Self::read_text(Self::open_buffered(path)?)
    }

    /// Drain `reader` into a string. Invalid UTF-8 is replaced with U+FFFD.
    pub fn read_text(mut reader: impl Read) -> io::Result<String> {
        let mut buf = Vec::new();
        reader.read_to_end(&mut buf)?;
        Ok(match String::from_utf8(buf) {
            Ok(text) => text,
            Err(err) => {
                log::warn!("input is not valid UTF-8; invalid sequences replaced");
                String::from_utf8_lossy(err.as_bytes()).into_owned()
            }
        })
    }
}
