use crate::nfa::Nfa;
use std::collections::HashMap;
use std::rc::Rc;

/// A DFA state before totalization: `transitions[i]` is `None` when no NFA
/// state set is reachable on `alphabet[i]` from this state.
pub struct PartialState {
    pub accept: Option<Rc<str>>,
    pub transitions: Vec<Option<usize>>,
}

pub struct PartialDfa {
    pub alphabet: Vec<char>,
    pub states: Vec<PartialState>,
    pub start: usize,
}

/// Subset construction: only the states reachable from the NFA's start are
/// built, via BFS over epsilon-closure keys memoized by their canonical
/// sorted state-set.
pub fn construct(nfa: &Nfa) -> PartialDfa {
    let alphabet = nfa.alphabet();
    let start_key = nfa.epsilon_closure(&[nfa.start]);

    let mut index_of: HashMap<Vec<usize>, usize> = HashMap::new();
    let mut states: Vec<PartialState> = Vec::new();
    let mut worklist: Vec<Vec<usize>> = Vec::new();

    index_of.insert(start_key.clone(), 0);
    states.push(PartialState {
        accept: nfa.accept_label(&start_key).cloned(),
        transitions: vec![None; alphabet.len()],
    });
    worklist.push(start_key);

    while let Some(key) = worklist.pop() {
        let from_idx = index_of[&key];
        for (i, &c) in alphabet.iter().enumerate() {
            let moved = nfa.step(&key, c);
            if moved.is_empty() {
                continue;
            }
            let closure = nfa.epsilon_closure(&moved);
            let to_idx = match index_of.get(&closure) {
                Some(&idx) => idx,
                None => {
                    let idx = states.len();
                    index_of.insert(closure.clone(), idx);
                    states.push(PartialState {
                        accept: nfa.accept_label(&closure).cloned(),
                        transitions: vec![None; alphabet.len()],
                    });
                    worklist.push(closure);
                    idx
                }
            };
            states[from_idx].transitions[i] = Some(to_idx);
        }
    }

    PartialDfa {
        alphabet,
        states,
        start: 0,
    }
}
