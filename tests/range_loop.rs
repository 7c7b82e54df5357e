use std::{error::Error, path::Path};

use carbono_test_utils::{check_compilation, Expected};

const SRC_PATH: &str = "./demos/range_loop.carbono";
const EXPECTED: Expected = Expected {
    stdout: "0\n1\n2\n",
    stderr: "",
};

#[test]
fn compile_and_run_range_loop() -> Result<(), Box<dyn Error>> {
    check_compilation(Path::new(SRC_PATH), EXPECTED)
}
