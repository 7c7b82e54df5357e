use std::{
    error::Error,
    io, str,
    path::Path,
    process::{Command, Output},
};

const CARBONO_PATH: &str = "./target/debug/carbono";

pub struct Expected<'a> {
    pub stdout: &'a str,
    pub stderr: &'a str,
}

impl<'a> Expected<'a> {
    fn assert_matches(self, output: &Output) -> Result<(), Box<dyn Error>> {
        assert_eq!(str::from_utf8(&output.stdout)?, self.stdout);
        assert_eq!(str::from_utf8(&output.stderr)?, self.stderr);
        Ok(())
    }
}

fn run_emit_c(src_path: &Path) -> Result<Output, io::Error> {
    Command::new(CARBONO_PATH)
        .arg(src_path)
        .arg("--emit-c")
        .output()
}

/// Compile a `.carbono` source and run the host C compiler + resulting
/// binary, then assert its stdout/stderr match `expected`.
pub fn check_compilation(src_path: &Path, expected: Expected) -> Result<(), Box<dyn Error>> {
    let out_base = src_path.with_extension("");

    let compile_output = Command::new(CARBONO_PATH)
        .arg(src_path)
        .arg("-o")
        .arg(&out_base)
        .output()?;

    let compile_stderr = str::from_utf8(&compile_output.stderr)?;
    assert!(compile_stderr.is_empty(), "{}", compile_stderr);
    assert!(
        compile_output.status.success(),
        "carbono exited with status {:?}",
        compile_output.status.code()
    );

    let output = Command::new(&out_base).output()?;
    expected.assert_matches(&output)?;
    assert!(
        output.status.success(),
        "compiled program exited with status {:?}",
        output.status.code()
    );

    Ok(())
}

/// Run `carbono --emit-c` on a source file and return the generated C text
/// without invoking a host compiler. Used by tests that only assert on the
/// shape of the lowered output.
pub fn emit_c(src_path: &Path) -> Result<String, Box<dyn Error>> {
    let output = run_emit_c(src_path)?;
    assert!(
        output.status.success(),
        "carbono --emit-c failed: {}",
        str::from_utf8(&output.stderr)?
    );
    let c_path = src_path.with_extension("c");
    Ok(std::fs::read_to_string(c_path)?)
}
