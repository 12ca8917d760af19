//! Column-aligned text rendering, used by the CLI driver to print compiled
//! artifacts for inspection.

use crate::bnf::ParseTable;
use crate::dfa::Dfa;
use std::cmp::max;

#[derive(Default, Debug, Clone)]
pub struct Table {
    row_len: Vec<usize>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn push_row(&mut self, row: Vec<String>) {
        if row.len() > self.row_len.len() {
            self.row_len.resize(row.len(), 0);
        }
        self.row_len
            .iter_mut()
            .zip(&row)
            .for_each(|(max_len, s)| *max_len = max(*max_len, s.chars().count()));
        self.rows.push(row);
    }

    pub fn to_string_sep(&self, sep: &str) -> String {
        let pad = |s: &str, l: usize| {
            let cs = s.chars().count();
            if cs < l {
                format!("{s}{}", " ".repeat(l - cs))
            } else {
                s.to_string()
            }
        };
        self.rows
            .iter()
            .map(|row| {
                row.iter()
                    .zip(&self.row_len)
                    .map(|(s, l)| format!("{}{sep}", pad(s, *l)))
                    .collect::<Vec<_>>()
                    .join("")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Renders a DFA as a transition table: header row is the alphabet, one row
/// per state, `->` marks the start state and `*name` marks an accepting
/// state labeled with its token.
pub fn dfa_table(dfa: &Dfa) -> String {
    let mut table = Table::default();
    let mut header = vec![String::new(), String::new()];
    header.extend(dfa.alphabet().iter().map(|c| c.to_string()));
    table.push_row(header);

    for (i, state) in dfa.states().iter().enumerate() {
        let mut row = vec![
            if i == dfa.start() { "->".to_string() } else { String::new() },
            match &state.accept {
                Some(name) => format!("*s{i}({name})"),
                None => format!("s{i}"),
            },
        ];
        row.extend(state.transitions.iter().map(|&t| format!("s{t}")));
        table.push_row(row);
    }
    table.to_string_sep(" ")
}

/// Renders an LL(1) parse table: rows are nonterminals, columns terminals,
/// cells list production indices (more than one index marks a conflict).
pub fn parse_table_table(table: &ParseTable) -> String {
    let mut t = Table::default();
    let mut header = vec![String::new()];
    header.extend(table.terminals().iter().map(|s| s.to_string()));
    t.push_row(header);

    for nt in table.nonterminals() {
        let mut row = vec![nt.to_string()];
        for term in table.terminals() {
            let cell = table
                .cell(nt, term)
                .map(|prods| {
                    prods
                        .iter()
                        .map(|p| p.to_string())
                        .collect::<Vec<_>>()
                        .join("/")
                })
                .unwrap_or_default();
            row.push(cell);
        }
        t.push_row(row);
    }
    t.to_string_sep(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scanner::{compile, RegexSource};
    use std::rc::Rc;

    #[test]
    fn dfa_table_has_one_row_per_state_plus_header() {
        let src = RegexSource::new("s", vec![(Rc::from("a"), Rc::from("a"))]).unwrap();
        let dfa = compile(&src).unwrap();
        let rendered = dfa_table(&dfa);
        assert_eq!(rendered.lines().count(), dfa.states().len() + 1);
    }
}
