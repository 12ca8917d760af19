use std::collections::HashSet;

/// True if two alphabets contain the same symbols, ignoring order.
#[inline]
pub fn alphabet_equal(a: &[char], b: &[char]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let set1 = a.iter().collect::<HashSet<_>>();
    let set2 = b.iter().collect::<HashSet<_>>();
    set1 == set2
}

/// Canonical key for a set of NFA state indices, used to memoize subset
/// construction's epsilon-closure lookups: sorted and deduplicated so that
/// two closures reaching the same set of states hash identically regardless
/// of discovery order.
pub fn canonical_key(mut states: Vec<usize>) -> Vec<usize> {
    states.sort_unstable();
    states.dedup();
    states
}
