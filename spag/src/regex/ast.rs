/// A parsed, not-yet-compiled regular expression.
///
/// `Class` already holds a normalized (sorted, deduplicated, negation
/// resolved) set of characters — by the time an `Ast` exists, ranges and
/// `^`-negation have been expanded against the extended alphabet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Ast {
    Atom(char),
    Class(Vec<char>),
    Concat(Box<Ast>, Box<Ast>),
    Union(Box<Ast>, Box<Ast>),
    Star(Box<Ast>),
    Plus(Box<Ast>),
    Question(Box<Ast>),
}

/// The extended alphabet over which ranges and negated classes are
/// resolved: printable, 7-bit ASCII plus the common whitespace escapes.
pub fn extended_alphabet() -> Vec<char> {
    let mut v: Vec<char> = (0x20u8..=0x7E).map(|b| b as char).collect();
    for c in ['\n', '\t', '\r', '\x0B', '\x0C'] {
        if !v.contains(&c) {
            v.push(c);
        }
    }
    v.sort_unstable();
    v
}
