//! Thompson-constructed NFAs: the intermediate form between a regex AST and
//! a DFA.

pub mod thompson;

use std::collections::HashSet;
use std::rc::Rc;

/// One state in an NFA arena. `out` holds `(label, target)` pairs; a `None`
/// label is an epsilon move. `accept` is set only on states that finish a
/// named pattern (the synthetic start state and every interior state leave
/// it `None`).
#[derive(Debug, Clone)]
pub struct NfaState {
    pub accept: Option<Rc<str>>,
    pub out: Vec<(Option<char>, usize)>,
}

impl NfaState {
    fn new() -> Self {
        NfaState {
            accept: None,
            out: Vec::new(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Nfa {
    pub states: Vec<NfaState>,
    pub start: usize,
}

impl Nfa {
    /// The union of every character labeling a non-epsilon edge, sorted and
    /// deduplicated.
    pub fn alphabet(&self) -> Vec<char> {
        let mut set = HashSet::new();
        for state in &self.states {
            for (label, _) in &state.out {
                if let Some(c) = label {
                    set.insert(*c);
                }
            }
        }
        let mut v: Vec<char> = set.into_iter().collect();
        v.sort_unstable();
        v
    }

    /// The epsilon closure of a set of states: every state reachable from
    /// them via zero or more epsilon moves, as a canonical sorted key.
    pub fn epsilon_closure(&self, states: &[usize]) -> Vec<usize> {
        let mut seen: HashSet<usize> = states.iter().copied().collect();
        let mut worklist: Vec<usize> = states.to_vec();
        while let Some(s) = worklist.pop() {
            for (label, target) in &self.states[s].out {
                if label.is_none() && seen.insert(*target) {
                    worklist.push(*target);
                }
            }
        }
        crate::util::canonical_key(seen.into_iter().collect())
    }

    /// States reachable from `states` by consuming `c`, without taking the
    /// epsilon closure.
    pub fn step(&self, states: &[usize], c: char) -> Vec<usize> {
        let mut out = Vec::new();
        for &s in states {
            for (label, target) in &self.states[s].out {
                if *label == Some(c) {
                    out.push(*target);
                }
            }
        }
        crate::util::canonical_key(out)
    }

    /// The token name accepted by this set of NFA states, if any — the one
    /// whose accepting state has the lowest index, which by construction is
    /// also the earliest-declared pattern (declaration order is the
    /// tie-break when multiple patterns could accept the same string).
    pub fn accept_label(&self, states: &[usize]) -> Option<&Rc<str>> {
        states
            .iter()
            .filter_map(|&s| self.states[s].accept.as_ref().map(|name| (s, name)))
            .min_by_key(|(idx, _)| *idx)
            .map(|(_, name)| name)
    }
}
