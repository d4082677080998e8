/// Core evaluation logic and context management.
///
/// Holds the evaluation context that owns the output sink and runs call
/// statements one after another.
pub mod core;

/// Operation dispatch.
///
/// Maps operation names to their arity and implementation and turns each
/// operation's result into a printable value.
pub mod operation;
