//! # spag
//!
//! `spag` compiles scanner and parser specifications into the tables a
//! generated lexer/parser runs against. It is two independent pipelines:
//!
//! * **Scanner compiler** — a set of named regular expressions is lexed,
//!   parsed into an AST, Thompson-constructed into an NFA, then reduced by
//!   subset construction, totalization and Hopcroft minimization into a
//!   single minimal total DFA.
//! * **Parser compiler** — a BNF grammar is internalized (classifying
//!   terminals and nonterminals by LHS membership), then FIRST, FOLLOW and
//!   PREDICT sets are solved as least fixpoints and used to build an LL(1)
//!   parse table. Conflicts in non-LL(1) grammars are recorded as data on
//!   the table rather than raised as errors.
//!
//! Both pipelines are pure: compiling the same input always produces the
//! same artifact, and nothing here runs the scanner or parser it builds.
//!
//! ## Usage
//!
//! ```rust
//! use spag::scanner::{self, RegexSource};
//! use std::rc::Rc;
//!
//! let source = RegexSource::new(
//!     "demo",
//!     vec![
//!         (Rc::from("ident"), Rc::from("[a-zA-Z_][a-zA-Z0-9_]*")),
//!         (Rc::from("num"), Rc::from("[0-9]+")),
//!     ],
//! )
//! .unwrap();
//! let dfa = scanner::compile(&source).unwrap();
//! let mut ev = dfa.evaluator();
//! ev.step_str("x1");
//! assert!(ev.is_accepting());
//! ```
//!
//! ```rust
//! use spag::bnf::{self, internalize::RawGrammar};
//! use std::rc::Rc;
//!
//! let raw = RawGrammar {
//!     name: Rc::from("arith"),
//!     start: Rc::from("E"),
//!     productions: vec![
//!         (Rc::from("E"), vec![Rc::from("id")]),
//!     ],
//! };
//! let table = bnf::compile(raw).unwrap();
//! assert!(table.is_ll1());
//! ```

pub mod bnf;
pub mod dfa;
pub mod nfa;
pub mod parser;
pub mod regex;
pub mod scanner;
pub mod table;
mod util;

#[cfg(test)]
mod tests;
