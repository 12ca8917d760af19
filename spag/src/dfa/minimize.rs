use crate::dfa::{Dfa, DfaState};
use std::collections::{HashMap, HashSet};
use std::rc::Rc;

/// Hopcroft's partition-refinement algorithm. The initial partition groups
/// states by accept label (each distinct token name is its own block, plus
/// one block for every non-accepting state including the sink); refinement
/// then splits blocks apart whenever two of their states would transition
/// into different blocks on the same letter.
pub fn minimize(dfa: Dfa) -> Dfa {
    let n = dfa.states.len();
    let alphabet_len = dfa.alphabet.len();

    let mut partition: Vec<HashSet<usize>> = initial_partition(&dfa);
    let mut worklist: Vec<HashSet<usize>> = partition.clone();

    while let Some(splitter) = worklist.pop() {
        for letter in 0..alphabet_len {
            let x: HashSet<usize> = (0..n)
                .filter(|&s| splitter.contains(&dfa.states[s].transitions[letter]))
                .collect();
            if x.is_empty() {
                continue;
            }

            let mut next_partition = Vec::with_capacity(partition.len());
            for block in partition.drain(..) {
                let in_x: HashSet<usize> = block.intersection(&x).copied().collect();
                let out_x: HashSet<usize> = block.difference(&x).copied().collect();

                if !in_x.is_empty() && !out_x.is_empty() {
                    if let Some(pos) = worklist.iter().position(|w| w == &block) {
                        worklist.swap_remove(pos);
                        worklist.push(in_x.clone());
                        worklist.push(out_x.clone());
                    } else if in_x.len() <= out_x.len() {
                        worklist.push(in_x.clone());
                    } else {
                        worklist.push(out_x.clone());
                    }
                    next_partition.push(in_x);
                    next_partition.push(out_x);
                } else {
                    next_partition.push(block);
                }
            }
            partition = next_partition;
        }
    }

    rebuild(&dfa, partition)
}

fn initial_partition(dfa: &Dfa) -> Vec<HashSet<usize>> {
    let mut groups: HashMap<Option<Rc<str>>, HashSet<usize>> = HashMap::new();
    for (i, state) in dfa.states.iter().enumerate() {
        groups.entry(state.accept.clone()).or_default().insert(i);
    }
    groups.into_values().collect()
}

fn rebuild(dfa: &Dfa, partition: Vec<HashSet<usize>>) -> Dfa {
    let mut block_of = vec![0usize; dfa.states.len()];
    for (block_idx, block) in partition.iter().enumerate() {
        for &s in block {
            block_of[s] = block_idx;
        }
    }

    let states = partition
        .iter()
        .map(|block| {
            let representative = *block.iter().min().unwrap();
            let transitions = dfa.states[representative]
                .transitions
                .iter()
                .map(|&t| block_of[t])
                .collect();
            DfaState {
                accept: dfa.states[representative].accept.clone(),
                transitions,
            }
        })
        .collect();

    Dfa {
        name: dfa.name.clone(),
        alphabet: dfa.alphabet.clone(),
        states,
        start: block_of[dfa.start],
        sink: block_of[dfa.sink],
    }
}
