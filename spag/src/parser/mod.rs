//! # spag file formats
//! This module parses the two on-disk source formats the CLI driver reads:
//! a named set of regex patterns (a "scanner source"), and a BNF grammar.
//!
//! ## Scanner source format
//! ```text
//! scanner ident_and_num
//! ident = [a-zA-Z_][a-zA-Z0-9_]*
//! num   = [0-9]+
//! ```
//! A header line `scanner <name>`, then one `<token> = <pattern>` line per
//! pattern, in declaration order (which is also the tie-break order when
//! two patterns could both match the same string). `#` starts a
//! line comment; blank lines are ignored.
//!
//! ## BNF grammar format
//! ```text
//! grammar arith
//! start <E>
//! <E> -> <T> <E'>
//! <E'> -> + <T> <E'> | ε
//! <T> -> id
//! ```
//! A `grammar <name>` header, a `start <S>` header, then one or more
//! production lines `<LHS> -> rhs | rhs | ...`. Symbols may be written
//! bracketed (`<S>`) or bare; classification into terminals and
//! nonterminals happens afterward, by LHS membership, not by bracketing.
//! `ε` and `eps` both denote the empty production.

mod bnf_source;
mod regex_source;

use crate::bnf::internalize::RawGrammar;
use crate::scanner::{RegexSource, ScannerError};
use nom::error::Error as NomError;
use nom::{combinator::all_consuming, Finish};
use std::rc::Rc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SourceFileError {
    #[error("syntax error: {0}")]
    Syntax(String),
    #[error(transparent)]
    Scanner(#[from] ScannerError),
}

pub fn regex_source(input: &str) -> Result<RegexSource, SourceFileError> {
    let (_, parsed) = all_consuming(regex_source::full)(input)
        .finish()
        .map_err(render_nom_error)?;
    let expressions = parsed
        .entries
        .iter()
        .map(|(name, pattern)| (Rc::from(*name), Rc::from(*pattern)))
        .collect();
    RegexSource::new(parsed.name, expressions).map_err(SourceFileError::from)
}

pub fn bnf_source(input: &str) -> Result<RawGrammar, SourceFileError> {
    let (_, parsed) = all_consuming(bnf_source::full)(input)
        .finish()
        .map_err(render_nom_error)?;
    let productions = parsed
        .productions
        .into_iter()
        .map(|(lhs, rhs)| (Rc::from(lhs), rhs.into_iter().map(Rc::from).collect()))
        .collect();
    Ok(RawGrammar {
        name: Rc::from(parsed.name),
        start: Rc::from(parsed.start),
        productions,
    })
}

fn render_nom_error(e: NomError<&str>) -> SourceFileError {
    let snippet: String = e.input.chars().take(40).collect();
    SourceFileError::Syntax(format!("{:?} near {snippet:?}", e.code))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_scanner_source() {
        let src = "scanner ids\nident = [a-z]+\nnum = [0-9]+\n";
        let source = regex_source(src).unwrap();
        assert_eq!(source.name(), "ids");
        assert_eq!(source.expressions().len(), 2);
        assert_eq!(source.expressions()[0].0.as_ref(), "ident");
    }

    #[test]
    fn parses_scanner_source_with_comments_and_blanks() {
        let src = "# a scanner\nscanner ids\n\n# ident first\nident = [a-z]+ # letters\n\nnum = [0-9]+\n";
        let source = regex_source(src).unwrap();
        assert_eq!(source.expressions().len(), 2);
    }

    #[test]
    fn parses_bnf_source() {
        let src = "grammar arith\nstart <E>\n<E> -> <T> <E'>\n<E'> -> + <T> <E'> | ε\n<T> -> id\n";
        let raw = bnf_source(src).unwrap();
        assert_eq!(raw.name.as_ref(), "arith");
        assert_eq!(raw.start.as_ref(), "E");
        assert_eq!(raw.productions.len(), 4);
    }
}
