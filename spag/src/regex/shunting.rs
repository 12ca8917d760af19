use crate::regex::ast::Ast;
use crate::regex::lexer::{Lexeme, RegexError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Op {
    Concat,
    Union,
    LParen,
}

impl Op {
    fn precedence(self) -> u8 {
        match self {
            Op::Union => 1,
            Op::Concat => 2,
            Op::LParen => 0,
        }
    }
}

fn malformed(reason: &str) -> RegexError {
    RegexError::MalformedExpression {
        reason: reason.to_string(),
    }
}

fn apply(op: Op, output: &mut Vec<Ast>) -> Result<(), RegexError> {
    match op {
        Op::Concat => {
            let rhs = output
                .pop()
                .ok_or_else(|| malformed("operator '.' missing right operand"))?;
            let lhs = output
                .pop()
                .ok_or_else(|| malformed("operator '.' missing left operand"))?;
            output.push(Ast::Concat(Box::new(lhs), Box::new(rhs)));
        }
        Op::Union => {
            let rhs = output
                .pop()
                .ok_or_else(|| malformed("operator '|' missing right operand"))?;
            let lhs = output
                .pop()
                .ok_or_else(|| malformed("operator '|' missing left operand"))?;
            output.push(Ast::Union(Box::new(lhs), Box::new(rhs)));
        }
        Op::LParen => unreachable!("LParen is never reduced through apply"),
    }
    Ok(())
}

/// Shunting-yard: turns a flat token stream into an AST, inserting the
/// implicit concatenation operator between adjacent operand-like tokens
/// (two atoms, an atom followed by `(`, or `)` followed by an atom).
pub fn parse(lexemes: Vec<Lexeme>) -> Result<Ast, RegexError> {
    // `lexer::lex` already rejects an empty pattern string before this
    // stage ever sees it; an empty token stream here only happens if a
    // caller builds one directly, which has no tree to reduce to.
    if lexemes.is_empty() {
        return Err(malformed("empty token stream"));
    }

    let mut output: Vec<Ast> = Vec::new();
    let mut ops: Vec<Op> = Vec::new();
    let mut prev_operand_like = false;

    let push_operator = |op: Op, ops: &mut Vec<Op>, output: &mut Vec<Ast>| -> Result<(), RegexError> {
        while let Some(&top) = ops.last() {
            if top != Op::LParen && top.precedence() >= op.precedence() {
                ops.pop();
                apply(top, output)?;
            } else {
                break;
            }
        }
        ops.push(op);
        Ok(())
    };

    for lexeme in lexemes {
        match lexeme {
            Lexeme::Char(c) => {
                if prev_operand_like {
                    push_operator(Op::Concat, &mut ops, &mut output)?;
                }
                output.push(Ast::Atom(c));
                prev_operand_like = true;
            }
            Lexeme::Class(members) => {
                if prev_operand_like {
                    push_operator(Op::Concat, &mut ops, &mut output)?;
                }
                output.push(Ast::Class(members));
                prev_operand_like = true;
            }
            Lexeme::LParen => {
                if prev_operand_like {
                    push_operator(Op::Concat, &mut ops, &mut output)?;
                }
                ops.push(Op::LParen);
                prev_operand_like = false;
            }
            Lexeme::RParen => {
                if !prev_operand_like {
                    return Err(malformed("empty parenthesized group"));
                }
                let mut found = false;
                while let Some(top) = ops.pop() {
                    if top == Op::LParen {
                        found = true;
                        break;
                    }
                    apply(top, &mut output)?;
                }
                if !found {
                    return Err(malformed("unmatched ')'"));
                }
                prev_operand_like = true;
            }
            Lexeme::Union => {
                if !prev_operand_like {
                    return Err(malformed("operator '|' missing left operand"));
                }
                push_operator(Op::Union, &mut ops, &mut output)?;
                prev_operand_like = false;
            }
            Lexeme::Star => {
                if !prev_operand_like {
                    return Err(malformed("operator '*' missing operand"));
                }
                let operand = output
                    .pop()
                    .ok_or_else(|| malformed("operator '*' missing operand"))?;
                output.push(Ast::Star(Box::new(operand)));
            }
            Lexeme::Plus => {
                if !prev_operand_like {
                    return Err(malformed("operator '+' missing operand"));
                }
                let operand = output
                    .pop()
                    .ok_or_else(|| malformed("operator '+' missing operand"))?;
                output.push(Ast::Plus(Box::new(operand)));
            }
            Lexeme::Question => {
                if !prev_operand_like {
                    return Err(malformed("operator '?' missing operand"));
                }
                let operand = output
                    .pop()
                    .ok_or_else(|| malformed("operator '?' missing operand"))?;
                output.push(Ast::Question(Box::new(operand)));
            }
        }
    }

    if !prev_operand_like {
        return Err(malformed("expression ends with a dangling operator"));
    }

    while let Some(top) = ops.pop() {
        if top == Op::LParen {
            return Err(malformed("unmatched '('"));
        }
        apply(top, &mut output)?;
    }

    if output.len() != 1 {
        return Err(malformed("expression does not reduce to a single tree"));
    }
    Ok(output.pop().unwrap())
}
