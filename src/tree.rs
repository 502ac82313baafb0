//! Huffman prefix-tree construction
//!
//! Merges a frequency table into a binary tree via a min-heap; leaf depth
//! becomes code length, so rarer symbols end up deeper.

use crate::error::CodecError;
use crate::freq::FrequencyTable;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// A node of the prefix tree. Leaves carry a symbol; internal nodes carry
/// the combined frequency of exactly two owned children.
#[derive(Debug, Clone)]
pub struct TreeNode {
    pub freq: u64,
    pub symbol: Option<u8>,
    pub left: Option<Box<TreeNode>>,
    pub right: Option<Box<TreeNode>>,
}

impl TreeNode {
    fn leaf(symbol: u8, freq: u64) -> Self {
        Self {
            freq,
            symbol: Some(symbol),
            left: None,
            right: None,
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.symbol.is_some()
    }
}

/// Heap entry wrapping a subtree. Equal frequencies break ties by insertion
/// sequence, so merge order is identical on every run over the same table —
/// the decompressor relies on rebuilding the exact same tree.
struct HeapEntry {
    node: TreeNode,
    seq: u64,
}

impl Eq for HeapEntry {}
impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.node.freq == other.node.freq && self.seq == other.seq
    }
}
impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // reversed: BinaryHeap is a max-heap, we want the smallest out first
        other
            .node
            .freq
            .cmp(&self.node.freq)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Build the prefix tree for a frequency table.
///
/// The heap is seeded with one leaf per symbol in ascending symbol order,
/// then the two lightest subtrees are repeatedly merged (first extraction
/// becomes the left child) until one root remains. A single-symbol table
/// yields a lone leaf root; code generation still assigns it a one-bit
/// code. An empty table is an `EmptyAlphabet` error.
pub fn build(table: &FrequencyTable) -> Result<TreeNode, CodecError> {
    if table.is_empty() {
        return Err(CodecError::EmptyAlphabet);
    }

    let mut heap = BinaryHeap::with_capacity(table.len());
    let mut seq = 0u64;
    for (&sym, &freq) in table {
        heap.push(HeapEntry {
            node: TreeNode::leaf(sym, freq),
            seq,
        });
        seq += 1;
    }

    while heap.len() > 1 {
        let first = match heap.pop() {
            Some(e) => e.node,
            None => break,
        };
        let second = match heap.pop() {
            Some(e) => e.node,
            None => break,
        };
        heap.push(HeapEntry {
            node: TreeNode {
                freq: first.freq + second.freq,
                symbol: None,
                left: Some(Box::new(first)),
                right: Some(Box::new(second)),
            },
            seq,
        });
        seq += 1;
    }

    heap.pop()
        .map(|e| e.node)
        .ok_or(CodecError::EmptyAlphabet)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::freq;

    fn count_internal(node: &TreeNode) -> usize {
        match (&node.left, &node.right) {
            (Some(l), Some(r)) => 1 + count_internal(l) + count_internal(r),
            _ => 0,
        }
    }

    fn check_freq_sums(node: &TreeNode) {
        if let (Some(l), Some(r)) = (&node.left, &node.right) {
            assert_eq!(node.freq, l.freq + r.freq);
            check_freq_sums(l);
            check_freq_sums(r);
        }
    }

    #[test]
    fn test_empty_table_rejected() {
        let result = build(&FrequencyTable::new());
        assert!(matches!(result, Err(CodecError::EmptyAlphabet)));
    }

    #[test]
    fn test_single_symbol_is_leaf_root() {
        let root = build(&freq::analyze(b"aaaa")).unwrap();
        assert!(root.is_leaf());
        assert_eq!(root.symbol, Some(b'a'));
        assert_eq!(root.freq, 4);
    }

    #[test]
    fn test_root_freq_is_input_length() {
        let data = b"abracadabra";
        let root = build(&freq::analyze(data)).unwrap();
        assert_eq!(root.freq, data.len() as u64);
    }

    #[test]
    fn test_internal_node_invariants() {
        let table = freq::analyze(b"aaabbc");
        let root = build(&table).unwrap();
        check_freq_sums(&root);
        assert_eq!(count_internal(&root), table.len() - 1);
    }

    #[test]
    fn test_tie_break_is_deterministic() {
        // four symbols with equal frequency, run twice
        let table = freq::analyze(b"wxyz");
        let a = build(&table).unwrap();
        let b = build(&table).unwrap();
        assert_eq!(format!("{:?}", a), format!("{:?}", b));
    }
}
