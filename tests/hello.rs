use std::{error::Error, path::Path};

use carbono_test_utils::{check_compilation, Expected};

const SRC_PATH: &str = "./demos/hello.carbono";
const EXPECTED: Expected = Expected {
    stdout: "Oi\n",
    stderr: "",
};

#[test]
fn compile_and_run_hello() -> Result<(), Box<dyn Error>> {
    check_compilation(Path::new(SRC_PATH), EXPECTED)
}
