/// An operand fell outside the mathematical domain of an operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DomainError {
    /// The name of the operation that rejected the operand.
    pub operation: &'static str,
    /// The rejected operand.
    pub value:     f64,
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f,
               "math domain error: {} requires a non-negative operand, found {}",
               self.operation, self.value)
    }
}

impl std::error::Error for DomainError {}
