use std::{error::Error, path::Path};

use carbono_test_utils::{check_compilation, Expected};

const SRC_PATH: &str = "./demos/embed.carbono";
const EXPECTED: Expected = Expected {
    stdout: "Ola mundo\n",
    stderr: "",
};

#[test]
fn compile_and_run_embed() -> Result<(), Box<dyn Error>> {
    check_compilation(Path::new(SRC_PATH), EXPECTED)
}
