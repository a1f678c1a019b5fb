use miette::Diagnostic;
use thiserror::Error;

/// Main error type for iconsmith operations
#[derive(Error, Diagnostic, Debug)]
pub enum IconError {
    #[error("IO error: {0}")]
    #[diagnostic(code(iconsmith::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(iconsmith::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Invalid geometry: {message}")]
    #[diagnostic(code(iconsmith::geometry))]
    InvalidGeometry {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Unsupported size: {message}")]
    #[diagnostic(code(iconsmith::size))]
    UnsupportedSize {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(iconsmith::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Export failed for {failed} bucket(s)")]
    #[diagnostic(code(iconsmith::export))]
    Export {
        failed: usize,
        #[help]
        help: Option<String>,
    },
}

impl IconError {
    /// Shorthand for an [`IconError::InvalidGeometry`] without help text.
    pub fn geometry(message: impl Into<String>) -> Self {
        IconError::InvalidGeometry {
            message: message.into(),
            help: None,
        }
    }

    /// Aggregate [`IconError::Export`] listing one failure per line.
    pub fn export_failures(listing: Vec<String>) -> Self {
        IconError::Export {
            failed: listing.len(),
            help: Some(listing.join("\n")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_failures_lists_each_line() {
        let err = IconError::export_failures(vec![
            "hdpi launcher: boom".to_string(),
            "xhdpi launcher: boom".to_string(),
        ]);

        assert_eq!(err.to_string(), "Export failed for 2 bucket(s)");
        match err {
            IconError::Export { failed, help } => {
                assert_eq!(failed, 2);
                assert_eq!(
                    help.as_deref(),
                    Some("hdpi launcher: boom\nxhdpi launcher: boom")
                );
            }
            other => panic!("expected export error, got {:?}", other),
        }
    }
}

pub type Result<T> = std::result::Result<T, IconError>;
