use crate::bnf::Grammar;
use std::collections::{HashMap, HashSet};
use std::rc::Rc;

fn epsilon() -> Rc<str> {
    Rc::from("ε")
}

/// FIRST(X) for every nonterminal X, computed as a least fixpoint.
/// Contains the epsilon sentinel for any nonterminal that can derive the
/// empty string — needed to compute FOLLOW and PREDICT, stripped out
/// before those are returned to callers.
pub fn first_sets(grammar: &Grammar) -> HashMap<Rc<str>, HashSet<Rc<str>>> {
    let eps = epsilon();
    let mut first: HashMap<Rc<str>, HashSet<Rc<str>>> = grammar
        .nonterminals()
        .iter()
        .map(|nt| (nt.clone(), HashSet::new()))
        .collect();

    loop {
        let mut changed = false;
        for prod in grammar.productions() {
            if prod.rhs.is_empty() {
                changed |= first.get_mut(&prod.lhs).unwrap().insert(eps.clone());
                continue;
            }

            let mut nullable_prefix = true;
            for sym in &prod.rhs {
                if grammar.is_terminal(sym) {
                    changed |= first.get_mut(&prod.lhs).unwrap().insert(sym.clone());
                    nullable_prefix = false;
                    break;
                }
                let sym_first = first.get(sym).cloned().unwrap_or_default();
                for t in sym_first.iter().filter(|t| t.as_ref() != eps.as_ref()) {
                    changed |= first.get_mut(&prod.lhs).unwrap().insert(t.clone());
                }
                if !sym_first.contains(&eps) {
                    nullable_prefix = false;
                    break;
                }
            }
            if nullable_prefix {
                changed |= first.get_mut(&prod.lhs).unwrap().insert(eps.clone());
            }
        }
        if !changed {
            break;
        }
    }

    first
}

/// FIRST of a symbol sequence (e.g. the tail of a production's RHS):
/// returns the non-epsilon terminals that can start it, plus whether the
/// whole sequence can derive the empty string.
fn first_of_sequence(
    symbols: &[Rc<str>],
    grammar: &Grammar,
    first: &HashMap<Rc<str>, HashSet<Rc<str>>>,
) -> (HashSet<Rc<str>>, bool) {
    let eps = epsilon();
    let mut result = HashSet::new();
    for sym in symbols {
        if grammar.is_terminal(sym) {
            result.insert(sym.clone());
            return (result, false);
        }
        let sym_first = first.get(sym).cloned().unwrap_or_default();
        result.extend(sym_first.iter().filter(|t| t.as_ref() != eps.as_ref()).cloned());
        if !sym_first.contains(&eps) {
            return (result, false);
        }
    }
    (result, true)
}

/// FOLLOW(A) for every nonterminal A, computed as a least fixpoint seeded
/// with `$` in FOLLOW(start).
pub fn follow_sets(
    grammar: &Grammar,
    first: &HashMap<Rc<str>, HashSet<Rc<str>>>,
) -> HashMap<Rc<str>, HashSet<Rc<str>>> {
    let end: Rc<str> = Rc::from("$");
    let mut follow: HashMap<Rc<str>, HashSet<Rc<str>>> = grammar
        .nonterminals()
        .iter()
        .map(|nt| (nt.clone(), HashSet::new()))
        .collect();
    if let Some(s) = follow.get_mut(grammar.start()) {
        s.insert(end.clone());
    }

    loop {
        let mut changed = false;
        for prod in grammar.productions() {
            for i in 0..prod.rhs.len() {
                let sym = &prod.rhs[i];
                if !grammar.is_nonterminal(sym) {
                    continue;
                }
                let (rest_first, rest_nullable) = first_of_sequence(&prod.rhs[i + 1..], grammar, first);
                let entry = follow.get_mut(sym).unwrap();
                for t in &rest_first {
                    changed |= entry.insert(t.clone());
                }
                if rest_nullable {
                    let lhs_follow = follow.get(&prod.lhs).cloned().unwrap_or_default();
                    let entry = follow.get_mut(sym).unwrap();
                    for t in &lhs_follow {
                        changed |= entry.insert(t.clone());
                    }
                }
            }
        }
        if !changed {
            break;
        }
    }

    follow
}

/// PREDICT(p) for every production p, in declaration order: FIRST of its
/// RHS, plus FOLLOW of its LHS if the RHS is nullable.
pub fn predict_sets(
    grammar: &Grammar,
    first: &HashMap<Rc<str>, HashSet<Rc<str>>>,
    follow: &HashMap<Rc<str>, HashSet<Rc<str>>>,
) -> Vec<HashSet<Rc<str>>> {
    grammar
        .productions()
        .iter()
        .map(|prod| {
            let (mut predict, nullable) = first_of_sequence(&prod.rhs, grammar, first);
            if nullable {
                predict.extend(follow.get(&prod.lhs).cloned().unwrap_or_default());
            }
            predict
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bnf::internalize::{internalize, RawGrammar};

    fn rc(s: &str) -> Rc<str> {
        Rc::from(s)
    }

    fn grammar() -> Grammar {
        // S -> a S b | ε
        internalize(RawGrammar {
            name: rc("g"),
            start: rc("S"),
            productions: vec![
                (rc("S"), vec![rc("a"), rc("S"), rc("b")]),
                (rc("S"), vec![]),
            ],
        })
        .unwrap()
    }

    #[test]
    fn first_of_nullable_nonterminal_contains_epsilon_and_a() {
        let g = grammar();
        let first = first_sets(&g);
        let s_first = &first[&rc("S")];
        assert!(s_first.contains(&rc("a")));
        assert!(s_first.contains(&epsilon()));
    }

    #[test]
    fn follow_of_start_contains_end_marker_and_b() {
        let g = grammar();
        let first = first_sets(&g);
        let follow = follow_sets(&g, &first);
        let s_follow = &follow[&rc("S")];
        assert!(s_follow.contains(&rc("$")));
        assert!(s_follow.contains(&rc("b")));
    }

    #[test]
    fn predict_of_empty_production_is_follow_of_lhs() {
        let g = grammar();
        let first = first_sets(&g);
        let follow = follow_sets(&g, &first);
        let predict = predict_sets(&g, &first, &follow);
        // production index 1 is `S -> ε`
        assert_eq!(predict[1], follow[&rc("S")]);
    }
}
