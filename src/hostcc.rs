//! Host C compiler invocation: shells out to `cc` the same way the
//! teacher shells out to `nasm`/`cc` for assembly — the transpiler never
//! links anything itself, it just builds the right argument list.

use std::error::Error;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::Command;

use log::{error, info};

use crate::ast::Kind;
use crate::lowering::LoweredOutput;

/// Directory bundled alongside the compiler carrying `basalto.h`/`core.c`
/// plus the vendored `sds.h`/`sds.c` and `stb_ds.h` single-header
/// libraries the generated C `#include`s.
const RUNTIME_DIR: &str = "runtime";

/// Writes the lowered C (and, if present, the companion assembly) to disk
/// alongside `out_base`, then invokes `cc` to produce either an
/// executable (`Kind::Programa`) or a position-independent shared object
/// (`Kind::Biblioteca`).
pub fn build(
    lowered: &LoweredOutput,
    kind: &Kind,
    out_base: &Path,
) -> Result<PathBuf, Box<dyn Error>> {
    let c_path = out_base.with_extension("c");
    File::create(&c_path)?.write_all(lowered.c_source.as_bytes())?;

    let asm_path = out_base.with_extension("S");
    if let Some(asm) = &lowered.asm_source {
        File::create(&asm_path)?.write_all(asm.as_bytes())?;
    }

    let target = match kind {
        Kind::Programa => out_base.to_path_buf(),
        Kind::Biblioteca => out_base.with_extension("so"),
    };

    info!("Invoking host compiler for '{}'...", target.display());

    let mut args: Vec<String> = vec![
        "-std=gnu11".to_owned(),
        "-I".to_owned(),
        RUNTIME_DIR.to_owned(),
        c_path.to_string_lossy().into_owned(),
        format!("{}/core.c", RUNTIME_DIR),
    ];

    if lowered.asm_source.is_some() {
        args.push(asm_path.to_string_lossy().into_owned());
    }

    if matches!(kind, Kind::Biblioteca) {
        args.push("-shared".to_owned());
        args.push("-fPIC".to_owned());
    }

    args.push("-ldl".to_owned());
    args.push("-o".to_owned());
    args.push(target.to_string_lossy().into_owned());

    let output = Command::new("cc").args(&args).output()?;

    let stderr = std::str::from_utf8(&output.stderr)?;
    if !stderr.is_empty() {
        error!("{stderr}");
    }

    if !output.status.success() {
        return Err(format!("host compiler exited with status {:?}", output.status.code()).into());
    }

    Ok(target)
}
