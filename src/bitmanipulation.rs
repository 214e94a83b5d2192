use std::io::{self, Write};

/// Packs bits into bytes, least significant bit first.
pub(crate) struct BitWriter<W: Write> {
    index: u8,
    current: u8,
    written: usize,
    sink: W,
}

impl<W: Write> BitWriter<W> {
    pub fn new(sink: W) -> Self {
        BitWriter {
            index: 0,
            current: 0,
            written: 0,
            sink,
        }
    }

    /// Writes every bit of `code`, a string over '0' and '1'.
    pub fn write_code(&mut self, code: &str) -> io::Result<()> {
        for bit in code.bytes() {
            self.write_bit(bit == b'1')?;
        }
        Ok(())
    }

    pub fn write_bit(&mut self, bit: bool) -> io::Result<()> {
        if bit {
            self.current |= 1 << self.index;
        }
        self.index += 1;
        self.written += 1;
        if self.index > 7 {
            self.sink.write_all(&[self.current])?;
            self.current = 0;
            self.index = 0;
        }
        Ok(())
    }

    /// Number of bits written so far, padding excluded.
    pub fn bits_written(&self) -> usize {
        self.written
    }

    /// Emits the last partial byte, zero padded, and flushes the sink.
    pub fn flush(&mut self) -> io::Result<()> {
        if self.index > 0 {
            self.sink.write_all(&[self.current])?;
            self.current = 0;
            self.index = 0;
        }
        self.sink.flush()
    }
}
