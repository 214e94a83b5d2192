//! Deterministic Huffman coding of text.
//!
//! The pipeline is `text -> frequencies -> tree -> code table -> encoded text`.
//! Every call works on its own data, so all of it can be used from several
//! threads at once.
//!
//! ```
//! let encoding = rhuff::encode("aabbbcccc").unwrap();
//! assert_eq!(encoding.codes.get('c'), Some("0"));
//! assert_eq!(encoding.encoded, "10 10 11 11 11 0 0 0 0");
//! ```

use std::path::{Path, PathBuf};

mod bitmanipulation;
pub mod codes;
pub mod config;
pub mod encoder;
pub mod error;
pub mod export;
mod frequency;
pub mod header;
pub mod tree;

pub use codes::CodeTable;
pub use config::Config;
pub use encoder::{Encoding, HuffmanEncoder};
pub use error::HuffmanError;
pub use frequency::count_frequencies;
pub use header::Header;
pub use tree::HuffmanTree;

/// Encodes `text` with codes joined by a single space.
///
/// Empty text gives an empty encoding and an empty table.
pub fn encode(text: &str) -> Result<Encoding, HuffmanError> {
    HuffmanEncoder::new(text).encode(text)
}

/// An encoding and the outcome of writing its tree export.
#[derive(Debug)]
pub struct Report {
    pub encoding: Encoding,
    /// `None` when no export was requested or the text was empty.
    pub export: Option<Result<PathBuf, HuffmanError>>,
}

/// Encodes `text` with `separator` between codes, then writes the tree to
/// `dot_output` if given. A failed export is kept in the report and never
/// replaces the encoding.
pub fn encode_with_export(
    text: &str,
    separator: &str,
    dot_output: Option<&Path>,
) -> Result<Report, HuffmanError> {
    let encoder = HuffmanEncoder::new(text);
    let encoding = Encoding {
        encoded: encoder.encode_spaced(text, separator)?,
        codes: encoder.codes().clone(),
    };

    let export = match (encoder.tree(), dot_output) {
        (Some(tree), Some(path)) => {
            Some(export::write_dot(tree, path).map(|()| path.to_path_buf()))
        }
        _ => None,
    };

    Ok(Report { encoding, export })
}
