use std::{error::Error, path::Path};

use carbono_test_utils::{check_compilation, Expected};

const SRC_PATH: &str = "./demos/struct_reference.carbono";
const EXPECTED: Expected = Expected {
    stdout: "10\n",
    stderr: "",
};

#[test]
fn compile_and_run_struct_reference() -> Result<(), Box<dyn Error>> {
    check_compilation(Path::new(SRC_PATH), EXPECTED)
}
