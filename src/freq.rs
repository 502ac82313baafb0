//! Symbol frequency analysis

use std::collections::BTreeMap;

/// Per-symbol occurrence counts. A BTreeMap keeps iteration in ascending
/// symbol order, which fixes heap seeding order downstream and therefore
/// makes code assignment reproducible across calls.
pub type FrequencyTable = BTreeMap<u8, u64>;

/// Count occurrences of each distinct symbol in the input.
///
/// Pure function of the input; an empty input yields an empty table.
pub fn analyze(data: &[u8]) -> FrequencyTable {
    let mut counts = [0u64; 256];
    for &b in data {
        counts[b as usize] += 1;
    }

    counts
        .iter()
        .enumerate()
        .filter(|&(_, &c)| c > 0)
        .map(|(sym, &c)| (sym as u8, c))
        .collect()
}
