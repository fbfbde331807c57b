use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DeckError {
    #[error("failed to read deck {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid deck: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("carousel #{0} has an empty name")]
    EmptyName(usize),

    #[error("carousel name `{0}` is used more than once")]
    DuplicateName(String),

    #[error("carousel `{carousel}`: {field} = {value} is out of range")]
    OutOfRange {
        carousel: String,
        field: &'static str,
        value: f32,
    },
}

pub type Result<T> = std::result::Result<T, DeckError>;
