use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum HuffmanError {
    /// A symbol of the input has no code in the table built from that same input.
    #[error("symbol {0:?} has no code in the table")]
    MissingCode(char),

    #[error("packed header holds an invalid unicode scalar value {0:#x}")]
    InvalidSymbol(u32),

    #[error("{field} {value} does not fit the packed header")]
    HeaderOverflow { field: &'static str, value: usize },

    #[error("separator {0:?} contains code digits and would make the output ambiguous")]
    InvalidSeparator(String),

    #[error("Tree export could not be written to \"{:?}\"", .path.as_path())]
    Export {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Configuration file not found at \"{:?}\"", .config_file_path.as_path())]
    MissingConfigurationFile {
        config_file_path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid configuration file")]
    InvalidConfig(#[from] toml::de::Error),

    #[error("Generic I/O error")]
    IoError(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, HuffmanError>;
