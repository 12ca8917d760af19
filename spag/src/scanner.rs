//! Orchestrates the regex-to-DFA pipeline over a named set of patterns.

use crate::dfa::{self, Dfa};
use crate::nfa::thompson::compile_scanner;
use crate::regex::RegexError;
use std::collections::HashSet;
use std::rc::Rc;
use thiserror::Error;

/// A named set of patterns to compile into one scanner. Order is
/// significant: it is the tie-break when two patterns could both accept
/// the same string.
#[derive(Debug, Clone)]
pub struct RegexSource {
    name: Rc<str>,
    expressions: Vec<(Rc<str>, Rc<str>)>,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScannerError {
    #[error("duplicate token name {0:?}")]
    DuplicateName(Rc<str>),
    #[error("{} pattern(s) failed to compile", .0.len())]
    InvalidPatterns(Vec<(Rc<str>, RegexError)>),
}

impl RegexSource {
    pub fn new(
        name: impl Into<Rc<str>>,
        expressions: Vec<(Rc<str>, Rc<str>)>,
    ) -> Result<Self, ScannerError> {
        let mut seen = HashSet::new();
        for (name, _) in &expressions {
            if !seen.insert(name.clone()) {
                return Err(ScannerError::DuplicateName(name.clone()));
            }
        }
        Ok(RegexSource {
            name: name.into(),
            expressions,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn expressions(&self) -> &[(Rc<str>, Rc<str>)] {
        &self.expressions
    }
}

/// Compiles a [`RegexSource`] into a minimal total DFA: every pattern is
/// lexed, parsed and Thompson-constructed (collecting *all* per-pattern
/// errors rather than stopping at the first), then merged, subset
/// constructed, totalized, and minimized.
pub fn compile(source: &RegexSource) -> Result<Dfa, ScannerError> {
    let pairs: Vec<(&Rc<str>, &Rc<str>)> = source
        .expressions
        .iter()
        .map(|(name, pattern)| (name, pattern))
        .collect();

    let nfa = compile_scanner(pairs).map_err(ScannerError::InvalidPatterns)?;
    Ok(dfa::compile(&nfa, source.name.clone()))
}

/// Pairs of (earlier, later) token names whose patterns describe exactly
/// the same language. The earlier name always wins the declaration-order
/// tie-break, so the later one can never be produced by the compiled
/// DFA — this surfaces that as data instead of leaving it silent.
/// Patterns that fail to compile on their own are skipped rather than
/// reported; [`compile`] already surfaces those as errors.
pub fn shadowed_patterns(source: &RegexSource) -> Vec<(Rc<str>, Rc<str>)> {
    let solo: Vec<(Rc<str>, Option<Dfa>)> = source
        .expressions
        .iter()
        .map(|(name, pattern)| {
            let one = RegexSource {
                name: name.clone(),
                expressions: vec![(name.clone(), pattern.clone())],
            };
            (name.clone(), compile(&one).ok())
        })
        .collect();

    let mut warnings = Vec::new();
    for i in 0..solo.len() {
        let Some(dfa_i) = &solo[i].1 else { continue };
        for (name_j, dfa_j) in &solo[i + 1..] {
            let Some(dfa_j) = dfa_j else { continue };
            if dfa_i.same_language_as(dfa_j) {
                warnings.push((solo[i].0.clone(), name_j.clone()));
            }
        }
    }
    warnings
}
