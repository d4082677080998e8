use std::io;

use crate::{
    error::RuntimeError,
    interpreter::evaluator::core::EvalResult,
    ops::{self, Sink},
    value::{Number, Value},
};

/// Type alias for operation handlers.
///
/// A handler receives the literal arguments, the output sink and the line
/// number. It returns the value the operation produced, or `None` if the
/// operation only printed.
type OperationFn = fn(&[Number], &mut dyn Sink, usize) -> EvalResult<Option<Value>>;

/// Defines the operations by generating a lookup table and a name list.
///
/// Each entry provides:
/// - a string name,
/// - the number of arguments,
/// - a function pointer implementing the operation.
///
/// The macro produces:
/// - `OperationDef` (internal metadata),
/// - `OPERATION_TABLE` (static table for lookup),
/// - `OPERATIONS` (public list of operation names).
macro_rules! operations {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        struct OperationDef {
            name:  &'static str,
            arity: usize,
            func:  OperationFn,
        }
        static OPERATION_TABLE: &[OperationDef] = &[
            $(
                OperationDef { name: $name, arity: $arity, func: $func },
            )*
        ];
        /// Names of every operation a script can call, in table order.
        pub const OPERATIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

operations! {
    "double"             => { arity: 1, func: |args, _, _| Ok(Some(ops::double(args[0]).into())) },
    "countdown"          => { arity: 0, func: |_, sink, line| printed(ops::countdown(sink), line) },
    "isPositive"         => { arity: 1, func: |args, _, _| Ok(Some(ops::is_positive(args[0]).into())) },
    "hiRepeat"           => { arity: 0, func: |_, sink, line| printed(ops::hi_repeat(sink), line) },
    "squareRoot"         => { arity: 1, func: square_root },
    "evensUpTo10"        => { arity: 0, func: |_, sink, line| printed(ops::evens_up_to_10(sink), line) },
    "multiply"           => { arity: 2, func: |args, _, _| Ok(Some(ops::multiply(args[0], args[1]).into())) },
    "countdownFrom10To5" => { arity: 0, func: |_, sink, line| printed(ops::countdown_from_10_to_5(sink), line) },
    "sayHello"           => { arity: 0, func: |_, _, _| Ok(Some(ops::say_hello().into())) },
    "loopCount1To3"      => { arity: 0, func: |_, sink, line| printed(ops::loop_count_1_to_3(sink), line) },
}

/// Evaluates a call to a named operation.
///
/// The name must match an entry of [`OPERATIONS`] exactly (names are
/// case-sensitive) and the argument count must match the operation's arity.
///
/// # Parameters
/// - `name`: Operation name.
/// - `args`: Literal argument values.
/// - `sink`: Destination for printed lines.
/// - `line`: Line number for error reporting.
///
/// # Returns
/// The returned value, or `None` for printing operations.
///
/// # Errors
/// - `UnknownFunction` for a name that is not in the table.
/// - `ArgumentCountMismatch` for the wrong number of arguments.
/// - Whatever the operation itself reports.
pub fn eval_operation(name: &str,
                      args: &[Number],
                      sink: &mut dyn Sink,
                      line: usize)
                      -> EvalResult<Option<Value>> {
    let operation = OPERATION_TABLE.iter()
                                   .find(|op| op.name == name)
                                   .ok_or_else(|| RuntimeError::UnknownFunction { name: name.to_string(),
                                                                                  line })?;

    if args.len() != operation.arity {
        return Err(RuntimeError::ArgumentCountMismatch { name: name.to_string(),
                                                         expected: operation.arity,
                                                         found: args.len(),
                                                         line });
    }

    (operation.func)(args, sink, line)
}

/// Runs `squareRoot`, attaching the line number to a domain error.
fn square_root(args: &[Number], _: &mut dyn Sink, line: usize) -> EvalResult<Option<Value>> {
    ops::square_root(args[0]).map(|root| Some(Value::Real(root)))
                             .map_err(|source| RuntimeError::Domain { source, line })
}

/// Maps the outcome of a printing operation to an evaluation result.
fn printed(result: io::Result<()>, line: usize) -> EvalResult<Option<Value>> {
    result.map(|()| None)
          .map_err(|e| RuntimeError::Output { details: e.to_string(),
                                              line })
}
