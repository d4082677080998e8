/// The evaluator module executes parsed calls.
///
/// It looks each call up in the operation table, checks its argument count,
/// runs the operation and routes every produced value to the output sink.
pub mod evaluator;
/// The lexer module tokenizes call scripts.
///
/// The lexer reads the raw source text and produces a stream of tokens:
/// operation names, numeric literals, signs, parentheses and separators. Line
/// numbers are tracked for error reporting.
pub mod lexer;
/// The parser module turns tokens into call statements.
///
/// Each statement is a single operation call with literal numeric arguments.
pub mod parser;
