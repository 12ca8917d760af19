use crate::regex::ast::extended_alphabet;
use std::fmt;
use thiserror::Error;

/// A single lexical token out of a regex pattern, tagged with the byte
/// offset it started at so later stages can report precise error
/// positions without re-walking the source string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lexeme {
    Char(char),
    Class(Vec<char>),
    Union,
    Star,
    Plus,
    Question,
    LParen,
    RParen,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidPatternKind {
    EmptyPattern,
    UnbalancedGroup,
    UnterminatedClass,
    /// Reserved for a range whose endpoints can't form a valid interval.
    /// Unreachable under this crate's range semantics: any two single
    /// characters form a valid (possibly swapped) interval, per the
    /// endpoint-order-insensitive reading of `[c-a]` documented in
    /// `DESIGN.md`'s Open Question decisions. Kept in the enum so the
    /// error taxonomy matches the spec's closed set.
    MalformedRange,
    TrailingBackslash,
    UnknownEscape,
    EmptyClass,
    UnsupportedChar,
}

impl fmt::Display for InvalidPatternKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            InvalidPatternKind::EmptyPattern => "pattern is empty",
            InvalidPatternKind::UnbalancedGroup => "unbalanced '(' / ')'",
            InvalidPatternKind::UnterminatedClass => "unterminated character class",
            InvalidPatternKind::MalformedRange => "malformed character range",
            InvalidPatternKind::TrailingBackslash => "trailing backslash with nothing to escape",
            InvalidPatternKind::UnknownEscape => "unknown escape sequence",
            InvalidPatternKind::EmptyClass => "character class matches nothing",
            InvalidPatternKind::UnsupportedChar => "character outside the supported alphabet",
        };
        write!(f, "{s}")
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegexError {
    #[error("invalid pattern at position {position}: {kind}")]
    InvalidPattern {
        position: usize,
        kind: InvalidPatternKind,
    },
    #[error("malformed expression: {reason}")]
    MalformedExpression { reason: String },
}

const RESERVED: [char; 9] = ['(', ')', '[', ']', '|', '*', '+', '?', '\\'];

fn is_reserved(c: char) -> bool {
    RESERVED.contains(&c)
}

/// Resolves a single escape character (the character right after `\`) to
/// its literal meaning.
fn resolve_escape(c: char) -> Option<char> {
    match c {
        's' => Some(' '),
        'n' => Some('\n'),
        't' => Some('\t'),
        'r' => Some('\r'),
        'f' => Some('\x0C'),
        'v' => Some('\x0B'),
        '0' => Some('\0'),
        c if is_reserved(c) => Some(c),
        '-' | '^' => Some(c),
        _ => None,
    }
}

pub fn lex(pattern: &str) -> Result<Vec<Lexeme>, RegexError> {
    if pattern.is_empty() {
        return Err(RegexError::InvalidPattern {
            position: 0,
            kind: InvalidPatternKind::EmptyPattern,
        });
    }
    let chars: Vec<(usize, char)> = pattern.char_indices().collect();
    let mut out = Vec::new();
    let mut i = 0;
    // Tracks the byte position of every still-open '(' so an unmatched one
    // is reported at the group it opened, not at end-of-pattern.
    let mut open_parens: Vec<usize> = Vec::new();
    while i < chars.len() {
        let (pos, c) = chars[i];
        match c {
            '(' => {
                open_parens.push(pos);
                out.push(Lexeme::LParen);
                i += 1;
            }
            ')' => {
                if open_parens.pop().is_none() {
                    return Err(RegexError::InvalidPattern {
                        position: pos,
                        kind: InvalidPatternKind::UnbalancedGroup,
                    });
                }
                out.push(Lexeme::RParen);
                i += 1;
            }
            '|' => {
                out.push(Lexeme::Union);
                i += 1;
            }
            '*' => {
                out.push(Lexeme::Star);
                i += 1;
            }
            '+' => {
                out.push(Lexeme::Plus);
                i += 1;
            }
            '?' => {
                out.push(Lexeme::Question);
                i += 1;
            }
            '\\' => {
                let Some(&(_, esc)) = chars.get(i + 1) else {
                    return Err(RegexError::InvalidPattern {
                        position: pos,
                        kind: InvalidPatternKind::TrailingBackslash,
                    });
                };
                let Some(resolved) = resolve_escape(esc) else {
                    return Err(RegexError::InvalidPattern {
                        position: pos,
                        kind: InvalidPatternKind::UnknownEscape,
                    });
                };
                out.push(Lexeme::Char(resolved));
                i += 2;
            }
            '[' => {
                let (class, consumed) = lex_class(&chars[i..], pos)?;
                out.push(Lexeme::Class(class));
                i += consumed;
            }
            ']' => {
                return Err(RegexError::InvalidPattern {
                    position: pos,
                    kind: InvalidPatternKind::UnsupportedChar,
                });
            }
            c if !is_extended(c) => {
                return Err(RegexError::InvalidPattern {
                    position: pos,
                    kind: InvalidPatternKind::UnsupportedChar,
                });
            }
            c => {
                out.push(Lexeme::Char(c));
                i += 1;
            }
        }
    }
    if let Some(&pos) = open_parens.first() {
        return Err(RegexError::InvalidPattern {
            position: pos,
            kind: InvalidPatternKind::UnbalancedGroup,
        });
    }
    Ok(out)
}

fn is_extended(c: char) -> bool {
    extended_alphabet().contains(&c)
}

/// Lexes a `[...]` character class starting at `chars[0] == '['`. Returns
/// the normalized (sorted, deduplicated) set of matched characters and the
/// number of input characters consumed, including both brackets.
fn lex_class(chars: &[(usize, char)], start_pos: usize) -> Result<(Vec<char>, usize), RegexError> {
    let mut i = 1; // skip '['
    let negate = matches!(chars.get(i), Some(&(_, '^')));
    if negate {
        i += 1;
    }

    let mut members: Vec<char> = Vec::new();
    let mut saw_close = false;

    while i < chars.len() {
        let (pos, c) = chars[i];
        if c == ']' {
            saw_close = true;
            i += 1;
            break;
        }

        let lo = read_class_char(chars, &mut i, pos)?;

        if matches!(chars.get(i), Some(&(_, '-'))) && !matches!(chars.get(i + 1), Some(&(_, ']')) | None) {
            i += 1;
            let (hi_pos, _) = chars[i];
            let hi = read_class_char(chars, &mut i, hi_pos)?;
            // A range's endpoints are ordered by codepoint regardless of
            // declaration order: `[c-a]` is the same set as `[a-c]`.
            let (lo, hi) = if lo <= hi { (lo, hi) } else { (hi, lo) };
            for code in (lo as u32)..=(hi as u32) {
                if let Some(ch) = char::from_u32(code) {
                    if is_extended(ch) {
                        members.push(ch);
                    }
                }
            }
        } else {
            members.push(lo);
        }
    }

    if !saw_close {
        return Err(RegexError::InvalidPattern {
            position: start_pos,
            kind: InvalidPatternKind::UnterminatedClass,
        });
    }

    let resolved: Vec<char> = if negate {
        extended_alphabet()
            .into_iter()
            .filter(|c| !members.contains(c))
            .collect()
    } else {
        members
    };

    let mut resolved = resolved;
    resolved.sort_unstable();
    resolved.dedup();

    if resolved.is_empty() {
        return Err(RegexError::InvalidPattern {
            position: start_pos,
            kind: InvalidPatternKind::EmptyClass,
        });
    }

    Ok((resolved, i))
}

fn read_class_char(
    chars: &[(usize, char)],
    i: &mut usize,
    pos: usize,
) -> Result<char, RegexError> {
    let (_, c) = chars[*i];
    if c == '\\' {
        *i += 1;
        let Some(&(_, esc)) = chars.get(*i) else {
            return Err(RegexError::InvalidPattern {
                position: pos,
                kind: InvalidPatternKind::TrailingBackslash,
            });
        };
        let Some(resolved) = resolve_escape(esc) else {
            return Err(RegexError::InvalidPattern {
                position: pos,
                kind: InvalidPatternKind::UnknownEscape,
            });
        };
        *i += 1;
        Ok(resolved)
    } else {
        *i += 1;
        Ok(c)
    }
}
