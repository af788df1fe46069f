//! Line reading for the store's text sources
//!
//! Sources are read as raw bytes and decoded per line. A line holding bytes
//! that are not valid UTF-8 is decoded lossily (U+FFFD), so one stray byte
//! affects only its own line. The `\n` terminator and a trailing `\r` are
//! stripped.

use std::io::{self, BufRead};

/// Iterator over the lines of a [`BufRead`], decoded lossily.
///
/// Yields `Err` only for read failures of the underlying source.
#[derive(Debug)]
pub struct LossyLines<R> {
    reader: R,
    buf: Vec<u8>,
}

/// Read `reader` line by line. See [`LossyLines`].
pub fn lossy_lines<R: BufRead>(reader: R) -> LossyLines<R> {
    LossyLines {
        reader,
        buf: Vec::new(),
    }
}

impl<R: BufRead> Iterator for LossyLines<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        self.buf.clear();
        match self.reader.read_until(b'\n', &mut self.buf) {
            Ok(0) => None,
            Ok(_) => {
                let mut line = self.buf.as_slice();
                if let Some(rest) = line.strip_suffix(b"\n") {
                    line = rest;
                }
                if let Some(rest) = line.strip_suffix(b"\r") {
                    line = rest;
                }
                Some(Ok(String::from_utf8_lossy(line).into_owned()))
            }
            Err(e) => Some(Err(e)),
        }
    }
}
