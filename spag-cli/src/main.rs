mod scan;
mod synt;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Compiles scanner and parser specifications into their tables.
///
/// `spag-cli` is a thin driver over the `spag` core: it reads a source
/// file, compiles it, and prints the resulting table (or every error the
/// core found). It emits no generated code itself — per-target-language
/// generators are a separate concern this binary doesn't implement.
#[derive(Debug, Parser)]
#[command(name = "spag-cli", version, about)]
struct CliArgs {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Compile a regex-set source file into a minimal DFA.
    Scan(scan::ScanArgs),
    /// Compile a BNF grammar source file into an LL(1) parse table.
    Synt(synt::SyntArgs),
}

/// Stands in for the target-language selector a generator-bearing build
/// would read. No generator is registered in this binary, so the only
/// observable effect of picking the "wrong" target for a subcommand is a
/// printed note — the table itself is always produced.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Target {
    #[default]
    Scanner,
    Parser,
}

fn read_source(path: &PathBuf) -> Result<String, String> {
    std::fs::read_to_string(path).map_err(|e| format!("error reading {}: {e}", path.display()))
}

fn main() {
    let args = CliArgs::parse();
    let result = match &args.command {
        Command::Scan(scan_args) => scan::run(scan_args),
        Command::Synt(synt_args) => synt::run(synt_args),
    };
    if let Err(message) = result {
        eprintln!("{message}");
        std::process::exit(1);
    }
}
