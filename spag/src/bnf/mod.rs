//! BNF grammar ingestion and LL(1) parse table construction: internalize →
//! FIRST/FOLLOW/PREDICT → table build with conflict detection.

pub mod internalize;
pub mod sets;
pub mod table;

pub use internalize::{GrammarError, RawGrammar};
pub use table::{build, Conflict, ParseTable};

use std::rc::Rc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Production {
    pub lhs: Rc<str>,
    pub rhs: Vec<Rc<str>>,
}

/// An internalized grammar: terminals, nonterminals and the end marker
/// `$` have already been classified and ordered by first appearance.
#[derive(Debug, Clone)]
pub struct Grammar {
    pub(crate) name: Rc<str>,
    pub(crate) start: Rc<str>,
    pub(crate) terminals: Vec<Rc<str>>,
    pub(crate) nonterminals: Vec<Rc<str>>,
    pub(crate) productions: Vec<Production>,
}

impl Grammar {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn start(&self) -> &str {
        &self.start
    }

    pub fn terminals(&self) -> &[Rc<str>] {
        &self.terminals
    }

    pub fn nonterminals(&self) -> &[Rc<str>] {
        &self.nonterminals
    }

    pub fn productions(&self) -> &[Production] {
        &self.productions
    }

    pub fn is_terminal(&self, symbol: &str) -> bool {
        self.terminals.iter().any(|t| t.as_ref() == symbol)
    }

    pub fn is_nonterminal(&self, symbol: &str) -> bool {
        self.nonterminals.iter().any(|n| n.as_ref() == symbol)
    }
}

/// Compiles a raw grammar straight through to an LL(1) parse table.
pub fn compile(raw: RawGrammar) -> Result<ParseTable, GrammarError> {
    let grammar = internalize::internalize(raw)?;
    Ok(table::build(&grammar))
}
