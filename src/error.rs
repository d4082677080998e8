/// The domain error raised by the operations themselves.
///
/// Only `squareRoot` can fail: it rejects operands below zero, the way a real
/// square root does.
pub mod domain_error;
/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of a call
/// script, such as unexpected tokens or missing parentheses.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while evaluating a call:
/// unknown operation names, wrong argument counts, domain errors and failed
/// writes to the output sink.
pub mod runtime_error;

pub use domain_error::DomainError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
