//! The `carbono` binary: reads a `.carbono` source file, lowers it to C
//! (and, for embeds, a companion `.S`), and invokes the host C compiler
//! unless `--emit-c` asks us to stop short.

mod cli;

use std::error::Error;
use std::fs;
use std::process::Command;

use log::{debug, info, LevelFilter};

use carbono::ast;
use carbono::hostcc;
use carbono::lowering;

use cli::Cli;

fn main() -> Result<(), Box<dyn Error>> {
    let args = Cli::init();

    let level = if args.debug { LevelFilter::Debug } else { LevelFilter::Info };
    simple_logger::SimpleLogger::new()
        .with_level(level)
        .init()
        .ok();

    match run(&args) {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            log::error!("{err}");
            std::process::exit(1);
        }
    }
}

fn run(args: &Cli) -> Result<i32, Box<dyn Error>> {
    let source = fs::read_to_string(&args.input)?;
    let file_name = args.input.to_string_lossy().into_owned();

    info!("Compilando '{file_name}'...");

    let root = ast::parse_source(&source, &file_name).map_err(|e| e.to_string())?;

    if args.debug {
        debug!("AST:\n{root:#?}");
    }

    let lowered = lowering::lower(&root, &args.input);

    for diagnostic in &lowered.diagnostics {
        log::warn!("{diagnostic}");
    }

    let out_base = args
        .output
        .clone()
        .unwrap_or_else(|| args.input.with_extension(""));

    if args.emit_c {
        let c_path = out_base.with_extension("c");
        fs::write(&c_path, &lowered.c_source)?;
        if let Some(asm) = &lowered.asm_source {
            fs::write(out_base.with_extension("S"), asm)?;
        }
        info!("C gerado em '{}'.", c_path.display());
        return Ok(0);
    }

    let binary_path = hostcc::build(&lowered, &root.kind, &out_base)?;
    info!("Build concluido: '{}'.", binary_path.display());

    if args.run {
        let status = Command::new(&binary_path).status()?;
        return Ok(status.code().unwrap_or(1));
    }

    Ok(0)
}
