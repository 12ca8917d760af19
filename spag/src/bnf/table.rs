use crate::bnf::sets::{first_sets, follow_sets, predict_sets};
use crate::bnf::Grammar;
use std::collections::HashMap;
use std::rc::Rc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conflict {
    pub nonterminal: Rc<str>,
    pub terminal: Rc<str>,
    pub productions: Vec<usize>,
}

/// An LL(1) parse table: `table[(A, a)]` holds the production indices to
/// try when the parser has `A` on the stack and `a` as lookahead. A cell
/// with more than one production is a conflict, also recorded in
/// `conflicts` — building a table never fails, even for non-LL(1)
/// grammars.
#[derive(Debug, Clone)]
pub struct ParseTable {
    pub(crate) name: Rc<str>,
    pub(crate) start: Rc<str>,
    pub(crate) terminals: Vec<Rc<str>>,
    pub(crate) nonterminals: Vec<Rc<str>>,
    pub(crate) productions: Vec<crate::bnf::Production>,
    pub(crate) table: HashMap<(Rc<str>, Rc<str>), Vec<usize>>,
    pub(crate) conflicts: Vec<Conflict>,
}

impl ParseTable {
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

    pub fn productions(&self) -> &[crate::bnf::Production] {
        &self.productions
    }

    pub fn cell(&self, nonterminal: &str, terminal: &str) -> Option<&[usize]> {
        self.table
            .get(&(Rc::from(nonterminal), Rc::from(terminal)))
            .map(|v| v.as_slice())
    }

    pub fn table(&self) -> &HashMap<(Rc<str>, Rc<str>), Vec<usize>> {
        &self.table
    }

    pub fn conflicts(&self) -> &[Conflict] {
        &self.conflicts
    }

    pub fn is_ll1(&self) -> bool {
        self.conflicts.is_empty()
    }
}

pub fn build(grammar: &Grammar) -> ParseTable {
    let first = first_sets(grammar);
    let follow = follow_sets(grammar, &first);
    let predict = predict_sets(grammar, &first, &follow);

    let mut table: HashMap<(Rc<str>, Rc<str>), Vec<usize>> = HashMap::new();
    for (idx, prod) in grammar.productions().iter().enumerate() {
        for terminal in &predict[idx] {
            table
                .entry((prod.lhs.clone(), terminal.clone()))
                .or_default()
                .push(idx);
        }
    }

    let mut conflicts = Vec::new();
    for ((nonterminal, terminal), productions) in &table {
        if productions.len() > 1 {
            conflicts.push(Conflict {
                nonterminal: nonterminal.clone(),
                terminal: terminal.clone(),
                productions: productions.clone(),
            });
        }
    }
    conflicts.sort_by(|a, b| {
        (a.nonterminal.as_ref(), a.terminal.as_ref())
            .cmp(&(b.nonterminal.as_ref(), b.terminal.as_ref()))
    });

    ParseTable {
        name: grammar.name.clone(),
        start: grammar.start.clone(),
        terminals: grammar.terminals.clone(),
        nonterminals: grammar.nonterminals.clone(),
        productions: grammar.productions.clone(),
        table,
        conflicts,
    }
}
