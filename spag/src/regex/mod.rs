//! Regex parsing: validating/expanding lexer (escapes, classes, ranges,
//! negation), shunting-yard, and the resulting AST.
//!
//! Grammar (see the crate's top-level docs for the full reserved-character
//! list): literal characters are themselves; `\` escapes a reserved
//! character or a whitespace shorthand (`\s \n \t \r \f \v`); `[...]` is a
//! character class, `[^...]` its negation, with `a-z`-style ranges;
//! `|` alternates, `*`/`+`/`?` are postfix repetition/optionality, `()`
//! groups, and adjacency is implicit concatenation.

pub mod ast;
pub mod lexer;
pub mod shunting;

pub use ast::Ast;
pub use lexer::RegexError;

use std::rc::Rc;

/// A parsed regular expression: its original source text plus the AST the
/// lexer and shunting-yard stage built from it.
#[derive(Debug, Clone)]
pub struct Regex {
    source: Rc<str>,
    ast: Ast,
}

impl Regex {
    pub fn parse(pattern: &str) -> Result<Regex, RegexError> {
        let lexemes = lexer::lex(pattern)?;
        let ast = shunting::parse(lexemes)?;
        Ok(Regex {
            source: Rc::from(pattern),
            ast,
        })
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn ast(&self) -> &Ast {
        &self.ast
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_literal_sequence() {
        let r = Regex::parse("abc").unwrap();
        assert_eq!(
            r.ast(),
            &Ast::Concat(
                Box::new(Ast::Concat(
                    Box::new(Ast::Atom('a')),
                    Box::new(Ast::Atom('b'))
                )),
                Box::new(Ast::Atom('c'))
            )
        );
    }

    #[test]
    fn star_binds_tighter_than_concat() {
        let r = Regex::parse("ab*").unwrap();
        assert_eq!(
            r.ast(),
            &Ast::Concat(
                Box::new(Ast::Atom('a')),
                Box::new(Ast::Star(Box::new(Ast::Atom('b'))))
            )
        );
    }

    #[test]
    fn union_binds_looser_than_concat() {
        let r = Regex::parse("ab|c").unwrap();
        assert_eq!(
            r.ast(),
            &Ast::Union(
                Box::new(Ast::Concat(
                    Box::new(Ast::Atom('a')),
                    Box::new(Ast::Atom('b'))
                )),
                Box::new(Ast::Atom('c'))
            )
        );
    }

    #[test]
    fn plus_expands_via_ast_node_not_desugaring() {
        let r = Regex::parse("a+").unwrap();
        assert_eq!(r.ast(), &Ast::Plus(Box::new(Ast::Atom('a'))));
    }

    #[test]
    fn reverse_range_is_equivalent_to_ascending_range() {
        let reverse = Regex::parse("[c-a]").unwrap();
        let ascending = Regex::parse("[a-c]").unwrap();
        assert_eq!(reverse.ast(), ascending.ast());
    }

    #[test]
    fn reverse_range_with_caret_is_a_plain_range() {
        let r = Regex::parse("[b-^]").unwrap();
        assert_eq!(r.ast(), &Ast::Class(vec!['^', '_', '`', 'a', 'b']));
    }

    #[test]
    fn negated_range_with_leading_caret_negates_the_whole_range() {
        let negated = Regex::parse("[^^-b]").unwrap();
        let Ast::Class(members) = negated.ast() else {
            panic!("expected a class");
        };
        for c in ['^', '_', '`', 'a', 'b'] {
            assert!(!members.contains(&c));
        }
        assert!(members.contains(&'c'));
    }

    #[test]
    fn empty_negation_is_the_full_alphabet() {
        let r = Regex::parse("[^]").unwrap();
        let Ast::Class(members) = r.ast() else {
            panic!("expected a class");
        };
        assert_eq!(members, &ast::extended_alphabet());
    }

    #[test]
    fn trailing_operator_is_malformed() {
        let r = Regex::parse("a|");
        assert!(matches!(r, Err(RegexError::MalformedExpression { .. })));
    }

    #[test]
    fn unmatched_open_paren_is_unbalanced_group() {
        let r = Regex::parse("(a");
        assert!(matches!(
            r,
            Err(RegexError::InvalidPattern {
                kind: lexer::InvalidPatternKind::UnbalancedGroup,
                ..
            })
        ));
    }

    #[test]
    fn unmatched_close_paren_is_unbalanced_group() {
        let r = Regex::parse("a)");
        assert!(matches!(
            r,
            Err(RegexError::InvalidPattern {
                kind: lexer::InvalidPatternKind::UnbalancedGroup,
                ..
            })
        ));
    }

    #[test]
    fn dangling_star_is_malformed() {
        let r = Regex::parse("*a");
        assert!(matches!(r, Err(RegexError::MalformedExpression { .. })));
    }

    #[test]
    fn empty_pattern_is_invalid() {
        let r = Regex::parse("");
        assert!(matches!(
            r,
            Err(RegexError::InvalidPattern {
                kind: lexer::InvalidPatternKind::EmptyPattern,
                position: 0,
            })
        ));
    }

    #[test]
    fn s_escape_matches_a_literal_space() {
        let r = Regex::parse("\\s").unwrap();
        assert_eq!(r.ast(), &Ast::Atom(' '));
    }

    #[test]
    fn embedded_whitespace_is_a_literal_character_not_skipped() {
        let r = Regex::parse("a b").unwrap();
        assert_eq!(
            r.ast(),
            &Ast::Concat(
                Box::new(Ast::Concat(
                    Box::new(Ast::Atom('a')),
                    Box::new(Ast::Atom(' '))
                )),
                Box::new(Ast::Atom('b'))
            )
        );
    }

    #[test]
    fn unknown_escape_is_invalid_pattern() {
        let r = Regex::parse("\\q");
        assert!(matches!(
            r,
            Err(RegexError::InvalidPattern {
                kind: lexer::InvalidPatternKind::UnknownEscape,
                ..
            })
        ));
    }
}
