use std::io;
use thiserror::Error;

use crate::io::SourceError;

/// Top-level application errors unifying all layer errors
#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Source error: {0}")]
    Source(#[from] SourceError),

    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn error_display_formats_correctly() {
        assert_eq!(
            AppError::InvalidArguments("too many files".to_string()).to_string(),
            "Invalid arguments: too many files"
        );
    }

    #[test]
    fn io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::BrokenPipe, "stdout closed");
        let app_err = AppError::from(io_err);

        match app_err {
            AppError::Io(_) => {}
            _ => panic!("Expected Io error variant"),
        }
    }

    #[test]
    fn source_error_conversion() {
        let source_err = SourceError::Open {
            path: PathBuf::from("nav.dat.gz"),
            source: io::Error::new(io::ErrorKind::NotFound, "file not found"),
        };
        let app_err = AppError::from(source_err);

        assert!(matches!(app_err, AppError::Source(SourceError::Open { .. })));
        assert_eq!(
            app_err.to_string(),
            "Source error: Failed to open nav.dat.gz: file not found"
        );
    }
}
