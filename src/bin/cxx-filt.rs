use std::io::{self, BufRead, Write};
use std::process;

use clap::Parser;
use cxx_mangle_rs::{ast_to_mangled_symbol, MangledSymbol};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
    name = "cxx-filt",
    version,
    about = "Demangles Itanium C++ symbol names",
    long_about = None
)]
struct Cli {
    /// Symbols to demangle. Lines are read from stdin when none are given.
    symbols: Vec<String>,

    #[arg(short, long, help = "Log parse failures to stderr")]
    verbose: bool,

    #[arg(long, help = "Report symbols that fail to parse and exit with status 1")]
    strict: bool,

    #[arg(long, help = "Print the canonical mangled form instead of the demangled one")]
    remangle: bool,
}

fn register_console_tracer(verbose: bool) {
    let default_level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };

    let filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .with_env_var("CXXFILT_LOG")
        .from_env_lossy();

    tracing_subscriber::fmt()
        .compact()
        .with_target(false)
        .with_writer(io::stderr)
        .with_env_filter(filter)
        .init();
}

/// Write one output line for `raw`. Returns `false` if `raw` looked mangled
/// but could not be parsed.
fn filter_symbol<W: Write>(cli: &Cli, raw: &str, out: &mut W) -> io::Result<bool> {
    let symbol = MangledSymbol::new(raw);

    if let Some(err) = symbol.error() {
        if cli.strict {
            eprintln!("{}: {}", symbol.raw(), err);
        }
    }

    match symbol.symbol() {
        Some(parsed) if cli.remangle => writeln!(out, "{}", ast_to_mangled_symbol(parsed))?,
        _ => writeln!(out, "{}", symbol)?,
    }

    Ok(symbol.error().is_none())
}

fn run(cli: &Cli) -> io::Result<bool> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut all_parsed = true;

    if cli.symbols.is_empty() {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            all_parsed &= filter_symbol(cli, line?.trim_end(), &mut out)?;
        }
    } else {
        for raw in &cli.symbols {
            all_parsed &= filter_symbol(cli, raw, &mut out)?;
        }
    }

    out.flush()?;
    Ok(all_parsed)
}

fn main() {
    let cli = Cli::parse();
    register_console_tracer(cli.verbose);

    match run(&cli) {
        Ok(all_parsed) => {
            if cli.strict && !all_parsed {
                process::exit(1);
            }
        }
        Err(ref err) if err.kind() == io::ErrorKind::BrokenPipe => {}
        Err(err) => {
            eprintln!("error: {}", err);
            process::exit(2);
        }
    }
}
