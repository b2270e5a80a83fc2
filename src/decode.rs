// src/decode.rs
//! Streaming UTF-8 decoding for chunked file reads.
//!
//! Files are read through a fixed buffer, so a multi-byte sequence can be
//! split across two chunks. [`Utf8Decoder`] carries the incomplete tail over
//! to the next chunk and hands only complete text to its sink.

use std::str;

/// How undecodable bytes are treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DecodeMode {
    /// Invalid sequences are dropped and decoding carries on.
    #[default]
    Permissive,
    /// The first invalid sequence fails the file.
    Strict,
}

/// Position of the first invalid sequence, in bytes from the start of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Utf8Error {
    pub offset: u64,
}

#[derive(Debug)]
pub struct Utf8Decoder {
    mode: DecodeMode,
    carry: Vec<u8>,
    offset: u64,
}

impl Utf8Decoder {
    pub fn new(mode: DecodeMode) -> Self {
        Self {
            mode,
            carry: Vec::with_capacity(4),
            offset: 0,
        }
    }

    /// Decode the next chunk, passing every valid run of text to `sink`.
    ///
    /// # Errors
    /// Only in [`DecodeMode::Strict`], on the first invalid sequence.
    pub fn decode<F>(&mut self, chunk: &[u8], sink: &mut F) -> Result<(), Utf8Error>
    where
        F: FnMut(&str),
    {
        if self.carry.is_empty() {
            return self.decode_slice(chunk, sink);
        }

        // 前チャンクの途中で切れたシーケンスを連結して再デコード
        let mut joined = std::mem::take(&mut self.carry);
        joined.extend_from_slice(chunk);
        self.decode_slice(&joined, sink)
    }

    /// Flush the decoder at end of input.
    ///
    /// # Errors
    /// In strict mode, when the input ended inside a multi-byte sequence.
    pub fn finish(&mut self) -> Result<(), Utf8Error> {
        if self.carry.is_empty() {
            return Ok(());
        }
        self.carry.clear();
        match self.mode {
            DecodeMode::Permissive => Ok(()),
            DecodeMode::Strict => Err(Utf8Error {
                offset: self.offset,
            }),
        }
    }

    fn decode_slice<F>(&mut self, mut bytes: &[u8], sink: &mut F) -> Result<(), Utf8Error>
    where
        F: FnMut(&str),
    {
        loop {
            match str::from_utf8(bytes) {
                Ok(text) => {
                    if !text.is_empty() {
                        sink(text);
                    }
                    self.offset += bytes.len() as u64;
                    return Ok(());
                }
                Err(err) => {
                    let valid = err.valid_up_to();
                    if let Ok(text) = str::from_utf8(&bytes[..valid])
                        && !text.is_empty()
                    {
                        sink(text);
                    }
                    self.offset += valid as u64;

                    match err.error_len() {
                        Some(invalid) => {
                            if self.mode == DecodeMode::Strict {
                                return Err(Utf8Error {
                                    offset: self.offset,
                                });
                            }
                            self.offset += invalid as u64;
                            bytes = &bytes[valid + invalid..];
                        }
                        None => {
                            // Incomplete sequence at the end of the chunk.
                            self.carry.extend_from_slice(&bytes[valid..]);
                            return Ok(());
                        }
                    }
                }
            }
        }
    }
}
