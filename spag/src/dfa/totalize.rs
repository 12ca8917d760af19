use crate::dfa::subset::{PartialDfa, PartialState};
use crate::dfa::{Dfa, DfaState};
use std::rc::Rc;

/// Turns a possibly-partial subset-construction result into a total DFA:
/// appends a non-accepting sink state (reachable from itself on every
/// letter) and routes every missing transition to it. If the construction
/// already happened to be total, no extra state is appended and an
/// existing self-looping non-accepting state is reused as the sink.
pub fn totalize(partial: PartialDfa, name: Rc<str>) -> Dfa {
    let PartialDfa {
        alphabet,
        mut states,
        start,
    } = partial;

    let is_total = states
        .iter()
        .all(|s| s.transitions.iter().all(Option::is_some));

    let sink = if is_total {
        find_existing_sink(&states).unwrap_or_else(|| append_sink(&mut states, alphabet.len()))
    } else {
        append_sink(&mut states, alphabet.len())
    };

    let states: Vec<DfaState> = states
        .into_iter()
        .map(|s| DfaState {
            accept: s.accept,
            transitions: s
                .transitions
                .into_iter()
                .map(|t| t.unwrap_or(sink))
                .collect(),
        })
        .collect();

    Dfa {
        name,
        alphabet: Rc::from(alphabet),
        states,
        start,
        sink,
    }
}

fn append_sink(states: &mut Vec<PartialState>, alphabet_len: usize) -> usize {
    let idx = states.len();
    states.push(PartialState {
        accept: None,
        transitions: vec![Some(idx); alphabet_len],
    });
    idx
}

fn find_existing_sink(states: &[PartialState]) -> Option<usize> {
    states.iter().enumerate().find_map(|(i, s)| {
        let self_loop = s.accept.is_none() && s.transitions.iter().all(|t| *t == Some(i));
        self_loop.then_some(i)
    })
}
