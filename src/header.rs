use std::io::{Read, Write};

use crate::error::{HuffmanError, Result};

const MAX_PREALLOCATED_ENTRIES: usize = 1024;

/// Preamble of the packed format. Holds what a reader needs to rebuild the
/// tree and to tell payload bits from padding.
///
/// Layout, little endian:
/// `bit_len: u64`, `entries: u32`, then `entries` times `symbol: u32, count: u32`.
#[derive(Debug, PartialEq, Eq)]
pub struct Header {
    pub counts: Vec<(char, usize)>,
    pub bit_len: usize,
}

impl Header {
    /// Fails without writing anything when a field does not fit its slot.
    pub fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        let bit_len =
            u64::try_from(self.bit_len).map_err(|_| overflow("bit length", self.bit_len))?;
        let size = to_u32("entry count", self.counts.len())?;
        let counts = self
            .counts
            .iter()
            .map(|&(symbol, count)| Ok((u32::from(symbol), to_u32("symbol count", count)?)))
            .collect::<Result<Vec<_>>>()?;

        writer.write_all(&bit_len.to_le_bytes())?;
        writer.write_all(&size.to_le_bytes())?;
        for (symbol, count) in counts {
            writer.write_all(&symbol.to_le_bytes())?;
            writer.write_all(&count.to_le_bytes())?;
        }
        Ok(())
    }

    pub fn read<R: Read>(reader: &mut R) -> Result<Header> {
        let mut bit_len_buf = [0; 8];
        reader.read_exact(&mut bit_len_buf)?;
        let bit_len = u64::from_le_bytes(bit_len_buf) as usize;

        let mut size_buf = [0; 4];
        reader.read_exact(&mut size_buf)?;
        let size = u32::from_le_bytes(size_buf);

        // The entry count is untrusted, read_exact reports a short header
        let mut counts = Vec::with_capacity((size as usize).min(MAX_PREALLOCATED_ENTRIES));
        let mut buf = [0; 8];
        for _ in 0..size {
            reader.read_exact(&mut buf)?;
            let raw = u32::from_le_bytes([buf[0], buf[1], buf[2], buf[3]]);
            let symbol = char::from_u32(raw).ok_or(HuffmanError::InvalidSymbol(raw))?;
            let count = u32::from_le_bytes([buf[4], buf[5], buf[6], buf[7]]) as usize;
            counts.push((symbol, count));
        }

        Ok(Self { counts, bit_len })
    }
}

fn overflow(field: &'static str, value: usize) -> HuffmanError {
    HuffmanError::HeaderOverflow { field, value }
}

fn to_u32(field: &'static str, value: usize) -> Result<u32> {
    u32::try_from(value).map_err(|_| overflow(field, value))
}
