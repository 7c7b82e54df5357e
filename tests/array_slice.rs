use std::{error::Error, path::Path};

use carbono_test_utils::{check_compilation, Expected};

const SRC_PATH: &str = "./demos/array_slice.carbono";
const EXPECTED: Expected = Expected {
    stdout: "2\n3\n2\n4\n",
    stderr: "",
};

#[test]
fn compile_and_run_array_slice() -> Result<(), Box<dyn Error>> {
    check_compilation(Path::new(SRC_PATH), EXPECTED)
}
