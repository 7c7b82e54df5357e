//! Output sinks the lowering engine writes into: buffered, append-only,
//! flushed once at the end of translation. A write failure to either is
//! fatal (spec-level IO failure), so every write method returns
//! `std::fmt::Result`-shaped errors bubble up through `?`.

use std::fmt::Write as _;

/// The generated C source, built up as one big string and written to disk
/// once lowering completes.
#[derive(Debug, Default)]
pub struct CSink {
    buf: String,
}

impl CSink {
    pub fn new() -> CSink {
        CSink::default()
    }

    pub fn write_str(&mut self, s: &str) {
        self.buf.push_str(s);
    }

    pub fn write_line(&mut self, s: &str) {
        self.buf.push_str(s);
        self.buf.push('\n');
    }

    pub fn write_fmt_args(&mut self, args: std::fmt::Arguments<'_>) {
        self.buf.write_fmt(args).expect("writing to an in-memory String never fails");
    }

    pub fn as_str(&self) -> &str {
        &self.buf
    }

    pub fn into_string(self) -> String {
        self.buf
    }
}

/// The companion `.S` file carrying one `.global` + `.incbin` triple per
/// embed directive.
#[derive(Debug, Default)]
pub struct AsmSink {
    buf: String,
}

impl AsmSink {
    pub fn new() -> AsmSink {
        AsmSink::default()
    }

    pub fn write_line(&mut self, s: &str) {
        self.buf.push_str(s);
        self.buf.push('\n');
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn into_string(self) -> String {
        self.buf
    }
}

#[macro_export]
macro_rules! emit {
    ($sink:expr, $($arg:tt)*) => {
        $sink.write_fmt_args(format_args!($($arg)*))
    };
}
