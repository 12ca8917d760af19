use crate::{read_source, Target};
use clap::Args;
use spag::parser::{self, SourceFileError};
use spag::scanner::{self, ScannerError};
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ScanArgs {
    /// Regex-set source file (see `spag::parser` for the file format).
    file: PathBuf,

    /// Target-language stub; no generator is registered, so this is
    /// accepted but otherwise unused.
    #[arg(long, value_enum, default_value_t = Target::Scanner)]
    target: Target,
}

pub fn run(args: &ScanArgs) -> Result<(), String> {
    if args.target != Target::Scanner {
        eprintln!("note: no generator is registered for target {:?}; printing the table instead", args.target);
    }
    let text = read_source(&args.file)?;
    let source = parser::regex_source(&text).map_err(render_source_error)?;
    let dfa = scanner::compile(&source).map_err(render_scanner_error)?;
    println!("{}", spag::table::dfa_table(&dfa));

    for (earlier, later) in scanner::shadowed_patterns(&source) {
        eprintln!("note: {later:?} accepts exactly the same language as {earlier:?} declared earlier; {later:?} can never be the matched token");
    }
    Ok(())
}

fn render_source_error(e: SourceFileError) -> String {
    format!("failed to parse scanner source: {e}")
}

fn render_scanner_error(e: ScannerError) -> String {
    match e {
        ScannerError::DuplicateName(name) => format!("duplicate token name {name:?}"),
        ScannerError::InvalidPatterns(errs) => errs
            .iter()
            .map(|(name, err)| format!("pattern {name:?}: {err}"))
            .collect::<Vec<_>>()
            .join("\n"),
    }
}
