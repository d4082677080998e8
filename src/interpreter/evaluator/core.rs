use crate::{
    ast::Call,
    error::RuntimeError,
    interpreter::evaluator::operation::eval_operation,
    ops::Sink,
    value::Value,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Stores the runtime evaluation context.
///
/// The operations are stateless, so the only thing a context carries is the
/// sink that receives printed lines and returned values.
pub struct Context<'s> {
    sink: &'s mut dyn Sink,
}

impl<'s> Context<'s> {
    /// Creates a context writing to `sink`.
    pub fn new(sink: &'s mut dyn Sink) -> Self {
        Self { sink }
    }

    /// Evaluates a call and returns the value it produced.
    ///
    /// Printing operations write their lines to the sink and return `None`;
    /// every other operation returns `Some(value)` without touching the sink.
    ///
    /// # Example
    /// ```
    /// use leet::{
    ///     ast::Call,
    ///     interpreter::evaluator::core::Context,
    ///     value::{Number, Value},
    /// };
    ///
    /// let mut lines: Vec<String> = Vec::new();
    /// let mut context = Context::new(&mut lines);
    ///
    /// let call = Call { name: "double".into(), args: vec![Number::Integer(8)], line: 1 };
    /// assert_eq!(context.eval_call(&call).unwrap(), Some(Value::Integer(16)));
    /// ```
    pub fn eval_call(&mut self, call: &Call) -> EvalResult<Option<Value>> {
        eval_operation(&call.name, &call.args, &mut *self.sink, call.line)
    }

    /// Evaluates a call as a statement.
    ///
    /// A returned value is emitted to the sink after the call, so a script
    /// prints both what operations return and what they print, in order.
    pub fn eval_statement(&mut self, call: &Call) -> EvalResult<()> {
        if let Some(value) = self.eval_call(call)? {
            self.sink
                .emit(&value)
                .map_err(|e| RuntimeError::Output { details: e.to_string(),
                                                    line:    call.line, })?;
        }

        Ok(())
    }
}
