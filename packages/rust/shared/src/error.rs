//! Error types for docnav.
//!
//! Library crates use [`DocNavError`] via `thiserror`.
//! The CLI wraps this with `color-eyre` for rich diagnostics.

use std::path::PathBuf;

/// Top-level error type for all docnav operations.
#[derive(Debug, thiserror::Error)]
pub enum DocNavError {
    /// The site configuration file to patch does not exist.
    #[error("{} not found", .path.display())]
    ConfigNotFound { path: PathBuf },

    /// Settings file (`docnav.toml`) loading or validation error.
    #[error("settings error: {message}")]
    Settings { message: String },

    /// Filesystem I/O error.
    #[error("I/O error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Convenience alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, DocNavError>;

impl DocNavError {
    /// Create a settings error from any displayable message.
    pub fn settings(msg: impl Into<String>) -> Self {
        Self::Settings {
            message: msg.into(),
        }
    }

    /// Wrap a `std::io::Error` with a path for context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Report a missing site configuration file.
    pub fn config_not_found(path: impl Into<PathBuf>) -> Self {
        Self::ConfigNotFound { path: path.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_formatting() {
        let err = DocNavError::config_not_found("mkdocs.yml");
        assert_eq!(err.to_string(), "mkdocs.yml not found");

        let err = DocNavError::settings("section dir must not be empty");
        assert_eq!(
            err.to_string(),
            "settings error: section dir must not be empty"
        );
    }

    #[test]
    fn io_error_keeps_path() {
        let source = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = DocNavError::io("/tmp/mkdocs.yml", source);
        let msg = err.to_string();
        assert!(msg.contains("/tmp/mkdocs.yml"));
        assert!(msg.contains("denied"));
    }
}
