use std::io::Write;

use serde_derive::Serialize;
use tracing::debug;

use crate::{
    bitmanipulation::BitWriter,
    codes::CodeTable,
    count_frequencies,
    error::{HuffmanError, Result},
    header::Header,
    tree::HuffmanTree,
};

pub const DEFAULT_SEPARATOR: &str = " ";

/// Result of encoding one text: the joined codes and the table used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Encoding {
    pub encoded: String,
    pub codes: CodeTable,
}

/// Code table and tree built for one input text.
#[derive(Debug)]
pub struct HuffmanEncoder {
    counts: Vec<(char, usize)>,
    tree: Option<HuffmanTree>,
    codes: CodeTable,
}

impl HuffmanEncoder {
    pub fn new(text: &str) -> Self {
        let counts = count_frequencies(text);
        debug!(symbols = counts.len(), "counted frequencies");

        let tree = HuffmanTree::create(&counts);
        let codes = match &tree {
            Some(tree) => CodeTable::from_tree(tree),
            None => {
                debug!("empty input, nothing to encode");
                CodeTable::empty()
            }
        };
        debug!(codes = codes.len(), "built code table");

        HuffmanEncoder {
            counts,
            tree,
            codes,
        }
    }

    /// `None` for empty input.
    pub fn tree(&self) -> Option<&HuffmanTree> {
        self.tree.as_ref()
    }

    pub fn codes(&self) -> &CodeTable {
        &self.codes
    }

    pub fn counts(&self) -> &[(char, usize)] {
        &self.counts
    }

    fn code(&self, symbol: char) -> Result<&str> {
        self.codes
            .get(symbol)
            .ok_or(HuffmanError::MissingCode(symbol))
    }

    /// Joins the code of every symbol of `text` with `separator`.
    pub fn encode_spaced(&self, text: &str, separator: &str) -> Result<String> {
        let codes = text
            .chars()
            .map(|symbol| self.code(symbol))
            .collect::<Result<Vec<_>>>()?;
        Ok(codes.join(separator))
    }

    /// Writes a [`Header`] followed by the codes of `text` packed into bytes.
    pub fn encode_packed<W: Write>(&self, text: &str, sink: &mut W) -> Result<()> {
        let codes = text
            .chars()
            .map(|symbol| self.code(symbol))
            .collect::<Result<Vec<_>>>()?;

        let header = Header {
            counts: self.counts.clone(),
            bit_len: codes.iter().map(|code| code.len()).sum(),
        };
        header.write(sink)?;

        let mut writer = BitWriter::new(sink);
        for code in codes {
            writer.write_code(code)?;
        }
        debug!(bits = writer.bits_written(), "packed encoding");
        writer.flush()?;

        Ok(())
    }

    pub fn encode(&self, text: &str) -> Result<Encoding> {
        Ok(Encoding {
            encoded: self.encode_spaced(text, DEFAULT_SEPARATOR)?,
            codes: self.codes.clone(),
        })
    }
}
