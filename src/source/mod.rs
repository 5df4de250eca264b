//! Menu input sources.
//!
//! The menu description comes from a file argument or from piped stdin, read
//! once at startup. See [`parse_menu`] for the format.

use crate::model::error::InputError;
use crate::model::menu::{parse_menu, MenuItem};
use std::io::{IsTerminal, Read};
use std::path::{Path, PathBuf};
use tracing::info;

/// Where the menu description is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// A file on disk.
    File(PathBuf),
    /// Piped standard input.
    Stdin,
}

impl InputSource {
    /// Read and parse the whole menu.
    ///
    /// # Errors
    ///
    /// `FileNotFound` if the file disappeared since detection, `Io` for any
    /// other read failure.
    pub fn read_items(&self) -> Result<Vec<MenuItem>, InputError> {
        let items = match self {
            InputSource::File(path) => read_file(path)?,
            InputSource::Stdin => read_menu(std::io::stdin().lock())?,
        };
        info!(source = ?self, items = items.len(), "Loaded menu");
        Ok(items)
    }
}

/// Choose the input source.
///
/// 1. A file path, if given (it must exist)
/// 2. Stdin, if it is piped
/// 3. Otherwise `InputError::NoInput`
///
/// # Errors
///
/// `FileNotFound` for a missing file, `NoInput` when stdin is a terminal.
pub fn detect_input_source(file: Option<PathBuf>) -> Result<InputSource, InputError> {
    match file {
        Some(path) if path.exists() => Ok(InputSource::File(path)),
        Some(path) => Err(InputError::FileNotFound { path }),
        None if std::io::stdin().is_terminal() => Err(InputError::NoInput),
        None => Ok(InputSource::Stdin),
    }
}

/// Read a menu from any reader.
///
/// # Errors
///
/// Returns `InputError::Io` if reading fails or the input is not UTF-8.
pub fn read_menu<R: Read>(mut reader: R) -> Result<Vec<MenuItem>, InputError> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    Ok(parse_menu(&text))
}

fn read_file(path: &Path) -> Result<Vec<MenuItem>, InputError> {
    let file = std::fs::File::open(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => InputError::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => InputError::Io(e),
    })?;
    read_menu(file)
}
