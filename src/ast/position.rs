use pest::iterators::Pair;

use crate::parser::Rule;

/// A position within a source file: `(file, line, column)`.
///
/// Carried on every AST node, widened with the file
/// path so diagnostics and the embed pipeline can resolve relative paths
/// without threading the file name through every call.
pub type Position = (String, usize, usize);

pub fn position_of(pair: &Pair<Rule>, file: &str) -> Position {
    let (line, col) = pair.line_col();
    (file.to_owned(), line, col)
}
