use std::{error::Error, path::Path};

use carbono_test_utils::{check_compilation, Expected};

const SRC_PATH: &str = "./demos/interpolation.carbono";
const EXPECTED: Expected = Expected {
    stdout: "pi=3.14\n",
    stderr: "",
};

#[test]
fn compile_and_run_interpolation() -> Result<(), Box<dyn Error>> {
    check_compilation(Path::new(SRC_PATH), EXPECTED)
}
