//! Small, per-concern error types rather than one catch-all enum, following
//! the error-struct convention used throughout the pieces this compiler is
//! built on: a `message` plus a source `Position`, with a hand-written
//! `Display`.

use std::error::Error;
use std::fmt::Display;

use crate::ast::Position;

/// A fatal lowering failure: IO or host-compiler errors. Everything else
/// (unresolved names, unknown node kinds) is recorded as a [`Diagnostic`]
/// and does not stop lowering.
#[derive(Debug)]
pub struct LoweringError {
    pub message: String,
    pub position: Option<Position>,
}

impl Display for LoweringError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.position {
            Some((file, line, col)) => write!(f, "{} ({file}:{line}:{col})", self.message),
            None => f.write_str(&self.message),
        }
    }
}

impl Error for LoweringError {}

impl LoweringError {
    pub fn new(message: impl Into<String>, position: Position) -> LoweringError {
        LoweringError {
            message: message.into(),
            position: Some(position),
        }
    }

    pub fn without_position(message: impl Into<String>) -> LoweringError {
        LoweringError {
            message: message.into(),
            position: None,
        }
    }
}

/// A non-fatal finding surfaced during lowering: an unresolved name that
/// fell back to a documented default, or a node kind the engine doesn't
/// recognize. Lowering continues; these accumulate and are reported once
/// translation finishes, at `--debug` verbosity.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    pub message: String,
    pub position: Position,
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (file, line, col) = &self.position;
        write!(f, "{} ({file}:{line}:{col})", self.message)
    }
}

impl Diagnostic {
    pub fn unresolved_name(name: &str, fallback: &str, position: Position) -> Diagnostic {
        Diagnostic {
            message: format!("unresolved name '{name}', falling back to {fallback}"),
            position,
        }
    }

    pub fn unknown_kind(kind: &str, position: Position) -> Diagnostic {
        Diagnostic {
            message: format!("unknown AST kind '{kind}', emitting comment marker"),
            position,
        }
    }
}
