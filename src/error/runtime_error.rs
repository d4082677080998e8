use crate::error::DomainError;

#[derive(Debug)]
/// Represents all errors that can occur while evaluating a call.
pub enum RuntimeError {
    /// Called an unknown operation.
    UnknownFunction {
        /// The name of the operation.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// The wrong number of arguments was supplied to an operation.
    ArgumentCountMismatch {
        /// The name of the operation.
        name:     String,
        /// How many arguments the operation takes.
        expected: usize,
        /// How many arguments were supplied.
        found:    usize,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// An operation rejected its operand.
    Domain {
        /// The underlying domain error.
        source: DomainError,
        /// The source line where the error occurred.
        line:   usize,
    },
    /// Writing to the output sink failed.
    Output {
        /// Details reported by the sink.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownFunction { name, line } => {
                write!(f, "Error on line {line}: Unknown function '{name}'.")
            },
            Self::ArgumentCountMismatch { name,
                                          expected,
                                          found,
                                          line, } => write!(f,
                                                            "Error on line {line}: Argument count mismatch: '{name}' takes {expected}, but {found} were given."),
            Self::Domain { source, line } => write!(f, "Error on line {line}: {source}."),
            Self::Output { details, line } => {
                write!(f, "Error on line {line}: Failed to write output: {details}.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Domain { source, .. } => Some(source),
            _ => None,
        }
    }
}
