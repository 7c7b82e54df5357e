//! CLI argument parsing: a single executable, one positional input file
//! and a handful of flags, no subcommands (unlike the teacher's
//! build/setup split — carbono only ever does one thing).

use std::path::PathBuf;

use clap::Parser;

/// Compiles a carbono source file to portable C, then (unless `--emit-c`)
/// invokes the host C compiler to produce an executable or shared object.
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Path to the `.carbono` source file to compile.
    #[arg(index = 1)]
    pub input: PathBuf,

    /// Override the output base name (default: the input file stem).
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// Stop after emitting the generated C; do not invoke the host compiler.
    #[arg(long)]
    pub emit_c: bool,

    /// Run the built binary after a successful build and propagate its exit code.
    #[arg(short = 'r', long)]
    pub run: bool,

    /// Emit an AST dump and verbose progress logging.
    #[arg(short = 'd', long)]
    pub debug: bool,
}

impl Cli {
    pub fn init() -> Self {
        Cli::parse()
    }
}
