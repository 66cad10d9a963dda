use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// A nested message the engine always sends is absent.
    #[error("malformed execution result: missing {0}")]
    Missing(&'static str),

    #[error("cannot decode execution result: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("cannot render report document: {0}")]
    Render(#[from] serde_yaml::Error),

    #[error("i/o failure at '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot resolve settings: {0}")]
    Config(#[from] config::ConfigError),
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}
