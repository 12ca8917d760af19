//! Deterministic finite automata, built from an [`Nfa`](crate::nfa::Nfa) in
//! three stages: [`subset`] construction (reachable states only), then
//! [`totalize`] (explicit sink for missing transitions), then [`minimize`]
//! (Hopcroft partition refinement). [`compile`] runs all three.

pub mod minimize;
pub mod subset;
pub mod totalize;

use crate::nfa::Nfa;
use std::collections::HashMap;
use std::rc::Rc;

#[derive(Debug, Clone)]
pub struct DfaState {
    pub accept: Option<Rc<str>>,
    pub transitions: Vec<usize>,
}

/// A total, deterministic automaton: every state has exactly
/// `alphabet.len()` outgoing transitions.
#[derive(Debug, Clone)]
pub struct Dfa {
    pub(crate) name: Rc<str>,
    pub(crate) alphabet: Rc<[char]>,
    pub(crate) states: Vec<DfaState>,
    pub(crate) start: usize,
    pub(crate) sink: usize,
}

impl Dfa {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn alphabet(&self) -> &[char] {
        &self.alphabet
    }

    pub fn states(&self) -> &[DfaState] {
        &self.states
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn sink(&self) -> usize {
        self.sink
    }

    /// State index to the token name it accepts, for every accepting
    /// state.
    pub fn accepting(&self) -> HashMap<usize, Rc<str>> {
        self.states
            .iter()
            .enumerate()
            .filter_map(|(i, s)| s.accept.clone().map(|name| (i, name)))
            .collect()
    }

    /// The raw transition table: `transitions[state][letter_index]`.
    pub fn transitions(&self) -> Vec<Vec<usize>> {
        self.states.iter().map(|s| s.transitions.clone()).collect()
    }

    pub fn evaluator(&self) -> DfaEvaluator<'_> {
        DfaEvaluator::from(self)
    }

    /// Language equivalence: both DFAs must share an alphabet and accept
    /// the same strings (same token label per accepting state, since these
    /// DFAs distinguish which pattern matched). Walks reachable state pairs
    /// from the two starts rather than comparing minimized forms directly,
    /// so it works even if either side isn't already minimal.
    pub fn equivalent_to(&self, other: &Dfa) -> bool {
        self.walk_equivalence(other, |a, b| a == b)
    }

    /// Like [`equivalent_to`](Dfa::equivalent_to), but ignores *which*
    /// token two accepting states are labeled with and only asks whether
    /// they accept the same set of strings — i.e. whether the two DFAs
    /// were compiled from patterns describing the same language. Used to
    /// detect a pattern that's fully shadowed by an earlier one sharing
    /// its language (see [`crate::scanner::shadowed_patterns`]).
    pub fn same_language_as(&self, other: &Dfa) -> bool {
        self.walk_equivalence(other, |a, b| a.is_some() == b.is_some())
    }

    fn walk_equivalence(&self, other: &Dfa, accept_matches: impl Fn(&Option<Rc<str>>, &Option<Rc<str>>) -> bool) -> bool {
        if !crate::util::alphabet_equal(&self.alphabet, &other.alphabet) {
            return false;
        }

        let mut seen = std::collections::HashSet::new();
        let mut worklist = vec![(self.start, other.start)];
        seen.insert((self.start, other.start));

        while let Some((a, b)) = worklist.pop() {
            if !accept_matches(&self.states[a].accept, &other.states[b].accept) {
                return false;
            }
            for (i, &letter) in self.alphabet.iter().enumerate() {
                let other_i = other.alphabet.iter().position(|c| c == &letter).unwrap();
                let pair = (
                    self.states[a].transitions[i],
                    other.states[b].transitions[other_i],
                );
                if seen.insert(pair) {
                    worklist.push(pair);
                }
            }
        }
        true
    }
}

/// Full compilation pipeline from a Thompson NFA to a minimal total DFA.
pub fn compile(nfa: &Nfa, name: Rc<str>) -> Dfa {
    let partial = subset::construct(nfa);
    let total = totalize::totalize(partial, name);
    minimize::minimize(total)
}

#[derive(Debug, Clone)]
pub struct DfaEvaluator<'a> {
    dfa: &'a Dfa,
    rev_map: HashMap<char, usize>,
    current: usize,
}

impl<'a> DfaEvaluator<'a> {
    pub fn is_accepting(&self) -> bool {
        self.dfa.states[self.current].accept.is_some()
    }

    pub fn current_state(&self) -> usize {
        self.current
    }

    pub fn token(&self) -> Option<&Rc<str>> {
        self.dfa.states[self.current].accept.as_ref()
    }

    /// Steps on one character. Characters outside the DFA's alphabet are
    /// routed to the sink, matching the "total over its declared alphabet"
    /// contract — anything else is simply never accepted.
    pub fn step(&mut self, c: char) {
        self.current = match self.rev_map.get(&c) {
            Some(&i) => self.dfa.states[self.current].transitions[i],
            None => self.dfa.sink,
        };
    }

    pub fn step_str(&mut self, s: &str) {
        for c in s.chars() {
            self.step(c);
        }
    }
}

impl<'a> From<&'a Dfa> for DfaEvaluator<'a> {
    fn from(dfa: &'a Dfa) -> Self {
        let rev_map = dfa
            .alphabet
            .iter()
            .enumerate()
            .map(|(i, &c)| (c, i))
            .collect();
        DfaEvaluator {
            dfa,
            rev_map,
            current: dfa.start,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nfa::thompson::compile_scanner;
    use std::rc::Rc;

    fn one_pattern_dfa(name: &str, pattern: &str) -> Dfa {
        let name_rc: Rc<str> = Rc::from(name);
        let pattern_rc: Rc<str> = Rc::from(pattern);
        let nfa = compile_scanner([(&name_rc, &pattern_rc)]).unwrap();
        compile(&nfa, Rc::from("scanner"))
    }

    #[test]
    fn accepts_matching_strings() {
        let dfa = one_pattern_dfa("ab_star", "ab*");
        let mut ev = dfa.evaluator();
        ev.step_str("abbb");
        assert!(ev.is_accepting());
        assert_eq!(ev.token().map(|s| s.as_ref()), Some("ab_star"));
    }

    #[test]
    fn rejects_and_sticks_in_sink() {
        let dfa = one_pattern_dfa("ab_star", "ab*");
        let mut ev = dfa.evaluator();
        ev.step_str("ba");
        assert!(!ev.is_accepting());
        assert_eq!(ev.current_state(), dfa.sink());
        ev.step('a');
        assert_eq!(ev.current_state(), dfa.sink());
    }

    #[test]
    fn equivalent_to_is_insensitive_to_phrasing() {
        let a = one_pattern_dfa("ab_star", "ab*");
        let b = one_pattern_dfa("ab_star", "a(b*)");
        assert!(a.equivalent_to(&b));
    }

    #[test]
    fn equivalent_to_detects_different_languages() {
        let a = one_pattern_dfa("ab_star", "ab*");
        let b = one_pattern_dfa("ab_star", "a+b*");
        assert!(!a.equivalent_to(&b));
    }

    #[test]
    fn every_state_is_total() {
        let dfa = one_pattern_dfa("ab_star", "ab*");
        for state in dfa.states() {
            assert_eq!(state.transitions.len(), dfa.alphabet().len());
        }
    }
}
