//! Error types for listport.
//!
//! Errors are defined with `thiserror` and compose via `?` and `From`
//! conversions.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level error for the binary
//!   - [`ListError`] - Failures raised while operating on a list (item actions)
//!   - [`InputError`] - Menu input could not be read from file or stdin
//!   - [`ConfigError`] - Config file exists but could not be read or parsed
//!   - [`LoggingError`] - Tracing subscriber could not be installed
//!   - `std::io::Error` - Terminal failures
//!
//! # Recovery Strategy
//!
//! Index math never fails: out-of-range insertion points and selections are
//! clamped. The only runtime failures come from caller-supplied handlers
//! (menu item actions). Those propagate unchanged to whoever triggered the
//! event and abort the rest of that event; state that was already committed
//! (selection, synthetic row positions) stays as it was.

use std::path::PathBuf;
use thiserror::Error;

pub use crate::config::loader::ConfigError;
pub use crate::logging::LoggingError;

/// Boxed error returned by caller-supplied item handlers.
pub type HandlerError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Failures surfaced by list operations.
#[derive(Debug, Error)]
pub enum ListError {
    /// A menu item's press handler returned an error.
    ///
    /// The handler's error is carried as the source without modification so
    /// callers can downcast it.
    #[error("Action for '{label}' failed: {source}")]
    Action {
        /// Label of the item whose handler failed.
        label: String,
        /// The handler's own error.
        #[source]
        source: HandlerError,
    },

    /// An explicit index argument does not name an item in the list.
    ///
    /// # Examples
    ///
    /// ```
    /// use listport::model::error::ListError;
    ///
    /// let err = ListError::IndexOutOfRange { index: 7, len: 3 };
    /// assert_eq!(err.to_string(), "No item at index 7 (list has 3 items)");
    /// ```
    #[error("No item at index {index} (list has {len} items)")]
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// The list length at the time of the request.
        len: usize,
    },
}

/// Errors encountered when reading the menu description.
#[derive(Debug, Error)]
pub enum InputError {
    /// The specified input file does not exist.
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was attempted.
        path: PathBuf,
    },

    /// No file argument and stdin is an interactive terminal.
    #[error("No input source: provide a file path or pipe data to stdin")]
    NoInput,

    /// Any other I/O failure while reading input.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Top-level application error.
#[derive(Debug, Error)]
pub enum AppError {
    /// A list operation failed.
    #[error("List error: {0}")]
    List(#[from] ListError),

    /// Input could not be read.
    #[error("Failed to read input: {0}")]
    Input(#[from] InputError),

    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Logging could not be initialised.
    #[error("Logging error: {0}")]
    Logging(#[from] LoggingError),

    /// Terminal I/O failed.
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[derive(Debug, Error)]
    #[error("remote rejected")]
    struct Rejected;

    #[test]
    fn action_error_keeps_handler_error_as_source() {
        let err = ListError::Action {
            label: "push".to_string(),
            source: Box::new(Rejected),
        };

        assert_eq!(err.to_string(), "Action for 'push' failed: remote rejected");
        let source = err.source().expect("action error should expose its source");
        assert!(source.downcast_ref::<Rejected>().is_some());
    }

    #[test]
    fn file_not_found_mentions_path() {
        let err = InputError::FileNotFound {
            path: PathBuf::from("/tmp/missing-menu.txt"),
        };
        assert!(err.to_string().contains("/tmp/missing-menu.txt"));
    }

    #[test]
    fn list_error_converts_into_app_error() {
        fn fails() -> Result<(), AppError> {
            let press: Result<(), ListError> = Err(ListError::IndexOutOfRange { index: 1, len: 0 });
            press?;
            Ok(())
        }

        match fails() {
            Err(AppError::List(ListError::IndexOutOfRange { index, len })) => {
                assert_eq!((index, len), (1, 0));
            }
            other => panic!("expected AppError::List, got {:?}", other),
        }
    }

    #[test]
    fn io_error_converts_into_input_error() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: InputError = io.into();
        assert!(matches!(err, InputError::Io(_)));
    }
}
