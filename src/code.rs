//! Code table generation
//!
//! Walks the prefix tree once and records both directions of the mapping:
//! symbol to bitstring for encoding, bitstring to symbol for decoding.

use crate::error::CodecError;
use crate::tree::TreeNode;
use std::collections::HashMap;

/// Paired symbol→code and code→symbol mappings. The codes are prefix-free
/// by construction since each is the path to a distinct leaf.
#[derive(Debug, Clone, Default)]
pub struct CodeTable {
    forward: HashMap<u8, Vec<bool>>,
    reverse: HashMap<Vec<bool>, u8>,
}

impl CodeTable {
    /// Derive the table from a tree root: 0 descends left, 1 descends
    /// right, and each leaf records the accumulated path as its code.
    pub fn from_tree(root: &TreeNode) -> Result<Self, CodecError> {
        let mut table = CodeTable::default();
        table.walk(root, Vec::new())?;
        Ok(table)
    }

    fn walk(&mut self, node: &TreeNode, prefix: Vec<bool>) -> Result<(), CodecError> {
        if let Some(sym) = node.symbol {
            // A lone-leaf tree would otherwise get a zero-length code,
            // which is a prefix of everything.
            let code = if prefix.is_empty() { vec![false] } else { prefix };
            if self.reverse.insert(code.clone(), sym).is_some() {
                return Err(CodecError::AmbiguousCode { symbol: sym });
            }
            self.forward.insert(sym, code);
            return Ok(());
        }
        if let Some(ref left) = node.left {
            let mut path = prefix.clone();
            path.push(false);
            self.walk(left, path)?;
        }
        if let Some(ref right) = node.right {
            let mut path = prefix;
            path.push(true);
            self.walk(right, path)?;
        }
        Ok(())
    }

    /// Code bits for a symbol, if the symbol occurred in the source.
    pub fn code(&self, symbol: u8) -> Option<&[bool]> {
        self.forward.get(&symbol).map(Vec::as_slice)
    }

    /// Symbol for an exact code, if one matches.
    pub fn symbol(&self, code: &[bool]) -> Option<u8> {
        self.reverse.get(code).copied()
    }

    /// Iterate all (symbol, code) pairs.
    pub fn codes(&self) -> impl Iterator<Item = (u8, &[bool])> {
        self.forward.iter().map(|(&sym, code)| (sym, code.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.forward.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }
}
