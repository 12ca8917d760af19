use crate::nfa::{Nfa, NfaState};
use crate::regex::lexer::RegexError;
use crate::regex::{Ast, Regex};
use std::rc::Rc;

/// Growable arena backing Thompson construction. Kept separate from `Nfa`
/// itself so a scanner compiling many patterns can build one shared arena
/// before wiring the synthetic start state.
#[derive(Default)]
pub struct NfaBuilder {
    states: Vec<NfaState>,
}

impl NfaBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    fn new_state(&mut self) -> usize {
        self.states.push(NfaState {
            accept: None,
            out: Vec::new(),
        });
        self.states.len() - 1
    }

    fn add_edge(&mut self, from: usize, label: Option<char>, to: usize) {
        self.states[from].out.push((label, to));
    }

    /// Compiles one AST into a Thompson fragment, returning its entry and
    /// exit state indices. The exit state has no outgoing edges until the
    /// caller wires it further (e.g. into a union, or marks it accepting).
    pub fn compile(&mut self, ast: &Ast) -> (usize, usize) {
        match ast {
            Ast::Atom(c) => {
                let (entry, exit) = (self.new_state(), self.new_state());
                self.add_edge(entry, Some(*c), exit);
                (entry, exit)
            }
            Ast::Class(members) => {
                let (entry, exit) = (self.new_state(), self.new_state());
                for &c in members {
                    self.add_edge(entry, Some(c), exit);
                }
                (entry, exit)
            }
            Ast::Concat(a, b) => {
                let (ea, xa) = self.compile(a);
                let (eb, xb) = self.compile(b);
                self.add_edge(xa, None, eb);
                (ea, xb)
            }
            Ast::Union(a, b) => {
                let (ea, xa) = self.compile(a);
                let (eb, xb) = self.compile(b);
                let entry = self.new_state();
                let exit = self.new_state();
                self.add_edge(entry, None, ea);
                self.add_edge(entry, None, eb);
                self.add_edge(xa, None, exit);
                self.add_edge(xb, None, exit);
                (entry, exit)
            }
            Ast::Star(a) => {
                let (ea, xa) = self.compile(a);
                let entry = self.new_state();
                let exit = self.new_state();
                self.add_edge(entry, None, ea);
                self.add_edge(entry, None, exit);
                self.add_edge(xa, None, ea);
                self.add_edge(xa, None, exit);
                (entry, exit)
            }
            Ast::Plus(a) => {
                let (ea, xa) = self.compile(a);
                let exit = self.new_state();
                self.add_edge(xa, None, ea);
                self.add_edge(xa, None, exit);
                (ea, exit)
            }
            Ast::Question(a) => {
                let (ea, xa) = self.compile(a);
                let entry = self.new_state();
                let exit = self.new_state();
                self.add_edge(entry, None, ea);
                self.add_edge(entry, None, exit);
                self.add_edge(xa, None, exit);
                (entry, exit)
            }
        }
    }

    pub fn finish(self, start: usize) -> Nfa {
        Nfa {
            states: self.states,
            start,
        }
    }

    pub fn mark_accepting(&mut self, state: usize, token: Rc<str>) {
        self.states[state].accept = Some(token);
    }
}

/// Compiles a full set of named patterns into one NFA: each pattern is
/// compiled independently, then wired under a fresh synthetic start state
/// with an epsilon edge to every pattern's entry. A pattern's exit state is
/// marked accepting with its token name.
///
/// Every pattern is attempted; failures are collected rather than
/// short-circuiting on the first bad pattern, so a caller can report every
/// broken expression in one pass.
pub fn compile_scanner<'a, I>(patterns: I) -> Result<Nfa, Vec<(Rc<str>, RegexError)>>
where
    I: IntoIterator<Item = (&'a Rc<str>, &'a Rc<str>)>,
{
    let mut builder = NfaBuilder::new();
    let mut entries = Vec::new();
    let mut errors = Vec::new();

    for (name, pattern) in patterns {
        match Regex::parse(pattern) {
            Ok(regex) => {
                let (entry, exit) = builder.compile(regex.ast());
                builder.mark_accepting(exit, name.clone());
                entries.push(entry);
            }
            Err(e) => errors.push((name.clone(), e)),
        }
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    let start = builder.new_state();
    for entry in entries {
        builder.add_edge(start, None, entry);
    }

    Ok(builder.finish(start))
}
