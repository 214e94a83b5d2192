use std::{fs, path::PathBuf};

use serde_derive::Deserialize;

use crate::{encoder::DEFAULT_SEPARATOR, HuffmanError};

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Placed between consecutive codes in the spaced output.
    pub separator: String,
    /// Where to write the Graphviz export of the tree, if anywhere.
    pub dot_output: Option<PathBuf>,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            separator: String::from(DEFAULT_SEPARATOR),
            dot_output: None,
            log_level: String::from("warn"),
        }
    }
}

impl Config {
    pub fn new(path: &PathBuf) -> Result<Self, HuffmanError> {
        let content = fs::read_to_string(path).map_err(|e| HuffmanError::MissingConfigurationFile {
            config_file_path: path.clone(),
            source: e,
        })?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self, HuffmanError> {
        let config: Self = toml::from_str(content).map_err(HuffmanError::InvalidConfig)?;
        // Codes are only made of '0' and '1', an empty separator is fine
        if config.separator.contains(['0', '1']) {
            return Err(HuffmanError::InvalidSeparator(config.separator));
        }
        Ok(config)
    }
}
