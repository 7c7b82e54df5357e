//! The parser: an external collaborator of the lowering core.
//!
//! Turns UTF-8 source text into a [`pest`] parse tree. The core never sees
//! tokens or parse trees directly; [`crate::ast`] walks this tree once to
//! build the typed AST that the rest of the compiler consumes.
use log::error;
use pest::{iterators::Pairs, Parser};

#[derive(pest_derive::Parser)]
#[grammar = "grammar/carbono.pest"]
pub struct CarbonoParser;

/// A parse failure. The parser is the authority on syntax; the lowering
/// engine assumes it never sees a malformed tree.
#[derive(Debug)]
pub struct ParseError(String);

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for ParseError {}

impl CarbonoParser {
    /// Parse a whole source file into its single `root` parse node.
    pub fn parse_program(source: &str) -> Result<Pairs<'_, Rule>, ParseError> {
        Self::parse(Rule::program, source).map_err(|err| {
            error!("failed to parse source: {err}");
            ParseError(err.to_string())
        })
    }

    /// Parses an arbitrary grammar rule starting at the beginning of
    /// `source`, without requiring the whole input to be consumed. Used by
    /// the interpolation engine to parse `${EXPR}` fragments with the exact
    /// same expression grammar the main parser uses, instead of a
    /// hand-rolled scanner over dotted identifiers.
    pub fn parse_rule(rule: Rule, source: &str) -> Result<Pairs<'_, Rule>, ParseError> {
        Self::parse(rule, source).map_err(|err| {
            error!("failed to parse fragment: {err}");
            ParseError(err.to_string())
        })
    }
}
