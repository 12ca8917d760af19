use crate::bnf::{Grammar, Production};
use std::rc::Rc;
use thiserror::Error;

/// What a BNF source file parser hands to the internalizer: productions in
/// declaration order, with no classification of which symbols are
/// terminals yet.
#[derive(Debug, Clone)]
pub struct RawGrammar {
    pub name: Rc<str>,
    pub start: Rc<str>,
    pub productions: Vec<(Rc<str>, Vec<Rc<str>>)>,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GrammarError {
    #[error("start symbol {0:?} is never defined as a nonterminal")]
    UndefinedStart(Rc<str>),
    #[error("grammar has no productions")]
    NoProductions,
    #[error("malformed grammar: {reason}")]
    Malformed { reason: String },
}

const END_MARKER: &str = "$";

/// Classifies every RHS symbol by whether it appears as some production's
/// LHS: LHS symbols are nonterminals (in first-appearance order), anything
/// else is a terminal. The end marker `$` is appended to the terminal list
/// and never accepted as a source RHS symbol.
pub fn internalize(raw: RawGrammar) -> Result<Grammar, GrammarError> {
    if raw.productions.is_empty() {
        return Err(GrammarError::NoProductions);
    }

    let mut nonterminals: Vec<Rc<str>> = Vec::new();
    for (lhs, _) in &raw.productions {
        if !nonterminals.contains(lhs) {
            nonterminals.push(lhs.clone());
        }
    }

    if !nonterminals.contains(&raw.start) {
        return Err(GrammarError::UndefinedStart(raw.start.clone()));
    }

    let mut terminals: Vec<Rc<str>> = Vec::new();
    for (_, rhs) in &raw.productions {
        for sym in rhs {
            if sym.as_ref() == END_MARKER {
                return Err(GrammarError::Malformed {
                    reason: format!("{END_MARKER:?} is reserved and cannot appear in a production"),
                });
            }
            if !nonterminals.contains(sym) && !terminals.contains(sym) {
                terminals.push(sym.clone());
            }
        }
    }
    terminals.push(Rc::from(END_MARKER));

    let productions = raw
        .productions
        .into_iter()
        .map(|(lhs, rhs)| Production { lhs, rhs })
        .collect();

    Ok(Grammar {
        name: raw.name,
        start: raw.start,
        terminals,
        nonterminals,
        productions,
    })
}
