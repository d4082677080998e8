//! # leet
//!
//! leet is a small collection of independent toy operations: doubling a
//! number, multiplying two numbers, checking positivity, taking a square root,
//! greeting, and a few fixed loops that print short sequences. Every operation
//! is a plain Rust function in [`ops`]; the printing ones write to a
//! caller-supplied [`ops::Sink`] so their output can be captured.
//!
//! A tiny call language (`double(4)`, `countdown()`) lets a host program run
//! the operations from text, see [`run_script`].

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use logos::Logos;

use crate::{
    error::ParseError,
    interpreter::{
        evaluator::core::Context,
        lexer::{LexerExtras, Token},
        parser::parse_statement,
    },
    ops::Sink,
};

/// Defines the structure of parsed call scripts.
///
/// A script is a list of [`ast::Call`] statements, each naming one operation
/// and carrying its literal arguments and source line.
pub mod ast;
/// Provides the error types of the crate.
///
/// The operations themselves only ever fail with a
/// [`DomainError`](error::DomainError). Parsing and evaluating call scripts add
/// [`ParseError`](error::ParseError) and
/// [`RuntimeError`](error::RuntimeError), both carrying the source line.
pub mod error;
/// Runs call scripts.
///
/// Ties together the lexer, parser and evaluator so that a host program can
/// invoke operations by name from text.
pub mod interpreter;
/// The operations.
///
/// Pure functions over primitive numbers, plus the fixed-bound printing loops
/// and the sinks they print to.
pub mod ops;
/// Runtime values.
///
/// [`value::Number`] is the numeric operand type, [`value::Value`] anything an
/// operation can return or print.
pub mod value;

/// Runs every call in `source`, in order, writing all output to `sink`.
///
/// Values returned by an operation are emitted to the sink right after the
/// call, the same way printing operations emit their lines. Statements are
/// separated by newlines or `;`, and `//` starts a comment.
///
/// The whole script is tokenized and parsed before the first call runs, so a
/// syntax error anywhere produces no output at all. Evaluation errors stop
/// execution at the failing call; output from earlier calls stays in the sink.
///
/// # Errors
/// Returns an error if the script cannot be tokenized or parsed, names an
/// unknown operation, passes the wrong number of arguments, takes the square
/// root of a negative number, or if the sink fails.
///
/// # Examples
/// ```
/// use leet::run_script;
///
/// let mut lines: Vec<String> = Vec::new();
/// run_script("sayHello()\ndouble(21)", &mut lines).unwrap();
/// assert_eq!(lines, ["Hello!", "42"]);
///
/// // Square roots of negative numbers are rejected.
/// assert!(run_script("squareRoot(-1)", &mut lines).is_err());
/// ```
pub fn run_script(source: &str, sink: &mut dyn Sink) -> Result<(), Box<dyn std::error::Error>> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer_with_extras(source, LexerExtras { line: 1 });

    while let Some(token) = lexer.next() {
        if let Ok(tok) = token {
            // The newline callback has already moved on to the next line.
            let line = if tok == Token::NewLine {
                lexer.extras.line - 1
            } else {
                lexer.extras.line
            };
            tokens.push((tok, line));
        } else {
            let slice = lexer.slice();
            return Err(Box::new(ParseError::UnexpectedToken { token: slice.to_string(),
                                                              line:  lexer.extras.line, }));
        }
    }

    let mut iter = tokens.iter().peekable();
    let mut calls = Vec::new();

    while iter.peek().is_some() {
        while let Some((Token::NewLine | Token::Semicolon, _)) = iter.peek() {
            iter.next();
        }
        if iter.peek().is_none() {
            break;
        }
        calls.push(parse_statement(&mut iter)?);
    }

    let mut context = Context::new(sink);
    for call in &calls {
        context.eval_statement(call)?;
    }

    Ok(())
}
