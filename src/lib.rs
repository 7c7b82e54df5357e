//! carbono: a transpiler from a Portuguese-keyword procedural language to
//! portable C. The binary (`src/main.rs`) wires CLI args, this library's
//! parse/lower pipeline, and the host C compiler together; everything
//! semantically interesting lives here so it can be exercised from tests
//! without shelling out.

pub mod ast;
pub mod diagnostics;
pub mod embed;
pub mod hostcc;
pub mod interp;
pub mod lowering;
pub mod parser;
pub mod sinks;
pub mod symtab;
