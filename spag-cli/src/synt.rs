use crate::{read_source, Target};
use clap::Args;
use spag::bnf::{self, GrammarError};
use spag::parser::{self, SourceFileError};
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct SyntArgs {
    /// BNF grammar source file (see `spag::parser` for the file format).
    file: PathBuf,

    /// Target-language stub; no generator is registered, so this is
    /// accepted but otherwise unused.
    #[arg(long, value_enum, default_value_t = Target::Parser)]
    target: Target,

    /// Exit with a nonzero status if the grammar isn't LL(1).
    #[arg(long)]
    fail_on_conflict: bool,
}

pub fn run(args: &SyntArgs) -> Result<(), String> {
    if args.target != Target::Parser {
        eprintln!("note: no generator is registered for target {:?}; printing the table instead", args.target);
    }
    let text = read_source(&args.file)?;
    let raw = parser::bnf_source(&text).map_err(render_source_error)?;
    let table = bnf::compile(raw).map_err(render_grammar_error)?;
    println!("{}", spag::table::parse_table_table(&table));

    if !table.is_ll1() {
        eprintln!("\n{} conflict(s):", table.conflicts().len());
        for conflict in table.conflicts() {
            eprintln!(
                "  ({}, {}): productions {:?}",
                conflict.nonterminal, conflict.terminal, conflict.productions
            );
        }
        if args.fail_on_conflict {
            return Err("grammar is not LL(1)".to_string());
        }
    }
    Ok(())
}

fn render_source_error(e: SourceFileError) -> String {
    format!("failed to parse grammar source: {e}")
}

fn render_grammar_error(e: GrammarError) -> String {
    format!("failed to internalize grammar: {e}")
}
