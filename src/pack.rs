//! Bit packing
//!
//! Concatenates per-symbol codes in input order and packs them MSB-first
//! behind a one-byte header recording how many trailing zero bits were
//! added to reach a byte boundary.

use crate::code::CodeTable;
use crate::error::CodecError;

/// Encode a symbol sequence into a packed stream.
///
/// Layout: `[padding: u8 (0..=7)]` followed by the concatenated code bits,
/// most-significant bit first, zero-padded at the end. When the bit count
/// is already a multiple of 8 the padding is 0, never 8.
pub fn pack(data: &[u8], table: &CodeTable) -> Result<Vec<u8>, CodecError> {
    let mut bits: Vec<bool> = Vec::with_capacity(data.len() * 2);
    for &sym in data {
        let code = table
            .code(sym)
            .ok_or(CodecError::MissingCode { symbol: sym })?;
        bits.extend_from_slice(code);
    }

    let padding = (8 - bits.len() % 8) % 8;
    let mut output = Vec::with_capacity(1 + (bits.len() + padding) / 8);
    output.push(padding as u8);

    let mut byte = 0u8;
    let mut filled = 0;
    for &bit in &bits {
        byte <<= 1;
        if bit {
            byte |= 1;
        }
        filled += 1;
        if filled == 8 {
            output.push(byte);
            byte = 0;
            filled = 0;
        }
    }
    if filled > 0 {
        output.push(byte << (8 - filled));
    }

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{freq, tree};

    fn table_for(data: &[u8]) -> CodeTable {
        let root = tree::build(&freq::analyze(data)).unwrap();
        CodeTable::from_tree(&root).unwrap()
    }

    #[test]
    fn test_known_stream() {
        // codes {a:"0", b:"11", c:"10"}, payload "000111110" is 9 bits,
        // so 7 bits of padding and two payload bytes
        let data = b"aaabbc";
        let packed = pack(data, &table_for(data)).unwrap();
        assert_eq!(packed, vec![0x07, 0x1F, 0x80]);
    }

    #[test]
    fn test_byte_aligned_payload_has_zero_padding() {
        // eight one-bit codes land exactly on a byte boundary
        let data = b"aaaaaaaa";
        let packed = pack(data, &table_for(data)).unwrap();
        assert_eq!(packed[0], 0);
        assert_eq!(packed.len(), 2);
    }

    #[test]
    fn test_empty_payload() {
        let packed = pack(b"", &table_for(b"ab")).unwrap();
        assert_eq!(packed, vec![0]);
    }

    #[test]
    fn test_symbol_outside_table() {
        let table = table_for(b"ab");
        let result = pack(b"abz", &table);
        assert!(matches!(
            result,
            Err(CodecError::MissingCode { symbol: b'z' })
        ));
    }
}
