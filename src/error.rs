//! Errors raised while aggregating a finite-fault directory.
//!
//! Every failure is fatal for the run: the caller receives the error and
//! any partially built document is discarded. Nothing is logged or
//! swallowed inside the core.

use std::path::PathBuf;

/// Errors that can arise when discovering or parsing finite-fault files.
#[derive(Debug)]
pub enum WaveError {
    /// The input directory does not exist. Raised before any file is read.
    DirectoryNotFound(PathBuf),
    /// A discovered file could not be opened or read.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// A discovered file failed numeric parsing. `line` is 1-based.
    Parse {
        path: PathBuf,
        line: usize,
        reason: String,
    },
}

impl std::fmt::Display for WaveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WaveError::DirectoryNotFound(path) => {
                write!(f, "input directory does not exist: {}", path.display())
            }
            WaveError::Io { path, source } => {
                write!(f, "failed to read {}: {}", path.display(), source)
            }
            WaveError::Parse { path, line, reason } => {
                write!(f, "failed to parse {} (line {}): {}", path.display(), line, reason)
            }
        }
    }
}

impl std::error::Error for WaveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            WaveError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_path() {
        let err = WaveError::DirectoryNotFound(PathBuf::from("/no/such/dir"));
        assert!(err.to_string().contains("/no/such/dir"));
    }

    #[test]
    fn test_parse_display_includes_line_number() {
        let err = WaveError::Parse {
            path: PathBuf::from("ABC.S.dat"),
            line: 3,
            reason: "expected two numeric columns".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("ABC.S.dat"));
        assert!(msg.contains("line 3"));
    }

    #[test]
    fn test_io_error_exposes_source() {
        use std::error::Error;
        let err = WaveError::Io {
            path: PathBuf::from("ABC.S.dat"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert!(err.source().is_some());
    }
}
