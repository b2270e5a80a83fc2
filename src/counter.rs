// src/counter.rs
use crate::decode::{DecodeMode, Utf8Decoder};
use crate::error::{Result, ScanError};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;

const BUFFER_SIZE: usize = 64 * 1024;

/// Incremental line-record counter.
///
/// `\n`, `\r\n` and a lone `\r` each end one record; a trailing record without
/// a terminator is counted by [`LineTally::finish`]. Text may be fed in pieces
/// split at any byte, including between the `\r` and `\n` of a pair.
#[derive(Debug, Default, Clone)]
pub struct LineTally {
    lines: usize,
    open: bool,
    after_cr: bool,
}

impl LineTally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn feed(&mut self, text: &str) {
        // 改行バイトは UTF-8 のマルチバイト列に現れないのでバイト単位で走査できる
        self.feed_bytes(text.as_bytes());
    }

    fn feed_bytes(&mut self, bytes: &[u8]) {
        if bytes.is_empty() {
            return;
        }

        if memchr::memchr(b'\r', bytes).is_none() {
            let mut rest = bytes;
            if self.after_cr {
                self.after_cr = false;
                if rest[0] == b'\n' {
                    rest = &rest[1..];
                }
                if rest.is_empty() {
                    return;
                }
            }
            self.lines += bytecount::count(rest, b'\n');
            self.open = rest.last() != Some(&b'\n');
            return;
        }

        let mut start = 0;
        for pos in memchr::memchr2_iter(b'\n', b'\r', bytes) {
            if pos > start {
                self.open = true;
                self.after_cr = false;
            }
            match bytes[pos] {
                b'\n' if self.after_cr => self.after_cr = false,
                b'\n' => {
                    self.lines += 1;
                    self.open = false;
                }
                _ => {
                    self.lines += 1;
                    self.open = false;
                    self.after_cr = true;
                }
            }
            start = pos + 1;
        }
        if start < bytes.len() {
            self.open = true;
            self.after_cr = false;
        }
    }

    /// Total records seen, including an unterminated final one.
    pub fn finish(&self) -> usize {
        self.lines + usize::from(self.open)
    }
}

/// Count the line records of `reader`'s decoded text.
///
/// `path` is only used to label errors.
///
/// # Errors
/// Returns [`ScanError::FileRead`] on an I/O failure and, in strict mode,
/// [`ScanError::InvalidUtf8`] on the first undecodable sequence.
pub fn count_lines<R: Read>(reader: R, mode: DecodeMode, path: &Path) -> Result<usize> {
    let mut reader = BufReader::with_capacity(BUFFER_SIZE, reader);
    let mut decoder = Utf8Decoder::new(mode);
    let mut tally = LineTally::new();

    loop {
        let buf = match reader.fill_buf() {
            Ok(buf) => buf,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(ScanError::file_read(path, e)),
        };
        if buf.is_empty() {
            break;
        }

        decoder
            .decode(buf, &mut |text: &str| tally.feed(text))
            .map_err(|e| ScanError::InvalidUtf8 {
                path: path.to_path_buf(),
                offset: e.offset,
            })?;

        let len = buf.len();
        reader.consume(len);
    }

    decoder.finish().map_err(|e| ScanError::InvalidUtf8 {
        path: path.to_path_buf(),
        offset: e.offset,
    })?;

    Ok(tally.finish())
}

/// Open `path` and count its line records.
///
/// # Errors
/// See [`count_lines`]; opening the file can also fail with
/// [`ScanError::FileRead`].
pub fn count_file_lines(path: &Path, mode: DecodeMode) -> Result<usize> {
    let file = File::open(path).map_err(|e| ScanError::file_read(path, e))?;
    let lines = count_lines(file, mode, path)?;
    log::debug!("{}: {lines} lines", path.display());
    Ok(lines)
}
