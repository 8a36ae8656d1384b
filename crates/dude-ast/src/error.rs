use std::fmt;
use std::path::PathBuf;

/// Failure to obtain a [`Program`](crate::Program) from its serialized form.
#[derive(Debug)]
pub enum LoadError {
    /// The file could not be read.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The JSON was not a well-formed tree: bad syntax, a missing field, or a
    /// field of the wrong shape.
    Decode(serde_json::Error),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read '{}': {source}", path.display())
            }
            Self::Decode(e) => write!(f, "malformed syntax tree: {e}"),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Decode(e) => Some(e),
        }
    }
}
