//! Packed-stream decoding
//!
//! Two passes: `unpack` strips the padding header and expands bytes back
//! into bits, `resolve` greedily matches bit prefixes against the code
//! table. The code is prefix-free, so matching never backtracks.

use crate::code::CodeTable;
use crate::error::CodecError;

/// Expand a packed stream into its code bits, dropping the padding.
pub fn unpack(stream: &[u8]) -> Result<Vec<bool>, CodecError> {
    let (&padding, payload) = stream.split_first().ok_or_else(|| {
        CodecError::MalformedStream("stream shorter than the padding header".into())
    })?;
    if padding > 7 {
        return Err(CodecError::MalformedStream(format!(
            "padding length {padding} out of range 0..=7"
        )));
    }

    let mut bits = Vec::with_capacity(payload.len() * 8);
    for &byte in payload {
        for shift in (0..8).rev() {
            bits.push((byte >> shift) & 1 == 1);
        }
    }

    let padding = padding as usize;
    if padding > bits.len() {
        return Err(CodecError::MalformedStream(
            "padding exceeds payload length".into(),
        ));
    }
    bits.truncate(bits.len() - padding);
    Ok(bits)
}

/// Resolve a bit sequence back into symbols via the reverse mapping.
///
/// Bits accumulate until they match a codeword, then the accumulator
/// resets. Anything left over at the end means the stream was truncated or
/// corrupted.
pub fn resolve(bits: &[bool], table: &CodeTable) -> Result<Vec<u8>, CodecError> {
    let mut output = Vec::new();
    let mut current: Vec<bool> = Vec::new();
    for &bit in bits {
        current.push(bit);
        if let Some(sym) = table.symbol(&current) {
            output.push(sym);
            current.clear();
        }
    }
    if !current.is_empty() {
        return Err(CodecError::MalformedStream(format!(
            "{} unresolved trailing bits",
            current.len()
        )));
    }
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::code::CodeTable;
    use crate::{freq, pack, tree};

    fn table_for(data: &[u8]) -> CodeTable {
        let root = tree::build(&freq::analyze(data)).unwrap();
        CodeTable::from_tree(&root).unwrap()
    }

    #[test]
    fn test_unpack_strips_header_and_padding() {
        let bits = unpack(&[0x07, 0x1F, 0x80]).unwrap();
        let expected: Vec<bool> = "000111110".chars().map(|c| c == '1').collect();
        assert_eq!(bits, expected);
    }

    #[test]
    fn test_unpack_empty_stream() {
        assert!(matches!(
            unpack(&[]),
            Err(CodecError::MalformedStream(_))
        ));
    }

    #[test]
    fn test_unpack_padding_out_of_range() {
        assert!(matches!(
            unpack(&[8, 0xFF]),
            Err(CodecError::MalformedStream(_))
        ));
    }

    #[test]
    fn test_unpack_padding_larger_than_payload() {
        assert!(matches!(
            unpack(&[3]),
            Err(CodecError::MalformedStream(_))
        ));
    }

    #[test]
    fn test_resolve_known_stream() {
        let data = b"aaabbc";
        let table = table_for(data);
        let bits = unpack(&pack::pack(data, &table).unwrap()).unwrap();
        assert_eq!(resolve(&bits, &table).unwrap(), data);
    }

    #[test]
    fn test_resolve_rejects_dangling_bits() {
        let data = b"aaabbc";
        let table = table_for(data);
        let mut bits = unpack(&pack::pack(data, &table).unwrap()).unwrap();
        bits.push(true); // half of b's "11" code
        assert!(matches!(
            resolve(&bits, &table),
            Err(CodecError::MalformedStream(_))
        ));
    }
}
