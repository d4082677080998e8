use crate::value::Number;

/// A single call statement, such as `multiply(3, -2.5)` or `countdown`.
///
/// Arguments are numeric literals; the call language has no variables or
/// nested expressions.
#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    /// The operation name as written, for example `isPositive`.
    pub name: String,
    /// The literal arguments, in order.
    pub args: Vec<Number>,
    /// The source line of the operation name.
    pub line: usize,
}
