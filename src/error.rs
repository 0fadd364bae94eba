use glob::{GlobError, PatternError};
use gtmpl::TemplateError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid glob pattern {pattern}: {source}")]
    Pattern {
        pattern: String,
        source: PatternError,
    },
    #[error("pattern matches no files: {0}")]
    NoMatch(String),
    #[error(transparent)]
    Glob(#[from] GlobError),
    #[error("unable to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("template {name}: {source}")]
    Parse {
        name: String,
        source: TemplateError,
    },
    #[error("{source}")]
    Execute {
        output: String,
        source: TemplateError,
    },
}

impl Error {
    /// Output written before execution failed.
    pub fn partial_output(&self) -> Option<&str> {
        match *self {
            Error::Execute { ref output, .. } => Some(output),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
