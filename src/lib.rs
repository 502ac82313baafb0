//! huffpack: lossless text compression via canonical Huffman coding.
//!
//! Pipeline: frequency analysis, prefix-tree construction over a min-heap,
//! code assignment, and MSB-first bit packing with an explicit padding
//! header; decompression inverts each step exactly. The compressed stream
//! embeds the frequency table, so every artifact is self-describing — the
//! decompressor rebuilds the identical tree and code table from it.
//!
//! The codec is a pure, single-threaded, in-memory transform. File and
//! terminal I/O are the caller's concern.

pub mod code;
pub mod config;
pub mod decode;
pub mod error;
pub mod freq;
pub mod pack;
pub mod tree;

use crate::code::CodeTable;
use crate::config::CodecConfig;
use crate::error::CodecError;
use crate::freq::FrequencyTable;
use tracing::debug;

/// The codec engine
pub struct Codec {
    config: CodecConfig,
}

impl Codec {
    /// Create a codec with the given configuration
    pub fn new(config: CodecConfig) -> Self {
        Self { config }
    }

    /// Create a codec with default configuration
    pub fn default() -> Self {
        Self::new(CodecConfig::default())
    }

    /// Compress a byte sequence into a self-describing stream.
    ///
    /// Stream layout: `[num_symbols: u16 LE]`, then per symbol in ascending
    /// order `[symbol: u8][count: u32 LE]`, then the packed payload
    /// (`[padding: u8][code bits...]`). Empty input produces just the
    /// two-byte zero-symbol header.
    pub fn compress(&self, data: &[u8]) -> Result<Vec<u8>, CodecError> {
        if data.len() > self.config.max_input_size {
            return Err(CodecError::InputTooLarge {
                size: data.len(),
                max: self.config.max_input_size,
            });
        }
        // counts travel as u32
        if data.len() > u32::MAX as usize {
            return Err(CodecError::InputTooLarge {
                size: data.len(),
                max: u32::MAX as usize,
            });
        }
        if data.is_empty() {
            return Ok(vec![0, 0]);
        }

        let freqs = freq::analyze(data);
        let root = tree::build(&freqs)?;
        let table = CodeTable::from_tree(&root)?;
        let packed = pack::pack(data, &table)?;

        let mut output = Vec::with_capacity(2 + freqs.len() * 5 + packed.len());
        output.extend_from_slice(&(freqs.len() as u16).to_le_bytes());
        for (&sym, &count) in &freqs {
            output.push(sym);
            output.extend_from_slice(&(count as u32).to_le_bytes());
        }
        output.extend_from_slice(&packed);

        debug!(
            original = data.len(),
            compressed = output.len(),
            distinct_symbols = freqs.len(),
            entropy_bits = shannon_entropy(data),
            "compressed"
        );
        Ok(output)
    }

    /// Decompress a stream produced by [`Codec::compress`].
    pub fn decompress(&self, data: &[u8]) -> Result<Vec<u8>, CodecError> {
        if data.len() < 2 {
            return Err(CodecError::MalformedStream(
                "stream shorter than the symbol table header".into(),
            ));
        }
        let num_symbols = u16::from_le_bytes([data[0], data[1]]) as usize;
        if num_symbols == 0 {
            if data.len() > 2 {
                return Err(CodecError::MalformedStream(
                    "trailing bytes after empty-input header".into(),
                ));
            }
            return Ok(Vec::new());
        }

        let mut pos = 2;
        let mut freqs = FrequencyTable::new();
        let mut expected_len = 0u64;
        let mut prev: Option<u8> = None;
        for _ in 0..num_symbols {
            if pos + 5 > data.len() {
                return Err(CodecError::MalformedStream(
                    "truncated symbol table".into(),
                ));
            }
            let sym = data[pos];
            let count = u32::from_le_bytes([
                data[pos + 1],
                data[pos + 2],
                data[pos + 3],
                data[pos + 4],
            ]) as u64;
            pos += 5;

            if count == 0 {
                return Err(CodecError::MalformedStream(format!(
                    "zero count for symbol {sym:#04x}"
                )));
            }
            if prev.is_some_and(|p| sym <= p) {
                return Err(CodecError::MalformedStream(
                    "symbol table not in ascending order".into(),
                ));
            }
            prev = Some(sym);
            freqs.insert(sym, count);
            expected_len += count;
        }

        // same deterministic construction as the compressor
        let root = tree::build(&freqs)?;
        let table = CodeTable::from_tree(&root)?;

        let bits = decode::unpack(&data[pos..])?;
        let output = decode::resolve(&bits, &table)?;

        if self.config.verify_length && output.len() as u64 != expected_len {
            return Err(CodecError::MalformedStream(format!(
                "decoded {} symbols but the header promised {}",
                output.len(),
                expected_len
            )));
        }

        debug!(
            compressed = data.len(),
            decompressed = output.len(),
            distinct_symbols = num_symbols,
            "decompressed"
        );
        Ok(output)
    }
}

/// Shannon entropy of the input in bits per byte, for diagnostics.
fn shannon_entropy(data: &[u8]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    let mut counts = [0u64; 256];
    for &b in data {
        counts[b as usize] += 1;
    }
    let len = data.len() as f64;
    let mut entropy = 0.0;
    for &c in &counts {
        if c > 0 {
            let p = c as f64 / len;
            entropy -= p * p.log2();
        }
    }
    entropy
}
