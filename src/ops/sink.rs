use std::io::{self, Write};

use crate::value::Value;

/// Receives the lines produced by the printing operations.
///
/// Implementations decide where a line goes: a console, a buffer, a test
/// capture. Lines arrive in order, one call per line.
pub trait Sink {
    /// Emits a single line.
    ///
    /// # Errors
    /// Returns the underlying I/O error if the line could not be written.
    fn emit(&mut self, value: &Value) -> io::Result<()>;
}

/// Captures emitted values as they are.
impl Sink for Vec<Value> {
    fn emit(&mut self, value: &Value) -> io::Result<()> {
        self.push(value.clone());
        Ok(())
    }
}

/// Captures emitted values in their rendered form.
impl Sink for Vec<String> {
    fn emit(&mut self, value: &Value) -> io::Result<()> {
        self.push(value.to_string());
        Ok(())
    }
}

/// Writes each emitted value to a writer, one per line.
///
/// # Example
/// ```
/// use leet::ops::{Console, Sink};
///
/// let mut console = Console::new(Vec::<u8>::new());
/// console.emit(&"Hi".into()).unwrap();
/// console.emit(&3_i64.into()).unwrap();
///
/// assert_eq!(console.into_inner(), b"Hi\n3\n");
/// ```
#[derive(Debug)]
pub struct Console<W> {
    writer: W,
}

impl<W: Write> Console<W> {
    /// Wraps a writer.
    pub const fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Returns the wrapped writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl Console<io::Stdout> {
    /// A console writing to standard output.
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Sink for Console<W> {
    fn emit(&mut self, value: &Value) -> io::Result<()> {
        writeln!(self.writer, "{value}")
    }
}

/// Emits every value of `values` to `sink`, stopping at the first error.
pub(crate) fn emit_all<S, I>(sink: &mut S, values: I) -> io::Result<()>
    where S: Sink + ?Sized,
          I: IntoIterator<Item = Value>
{
    for value in values {
        sink.emit(&value)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Broken;

    impl Write for Broken {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::other("closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn console_surfaces_write_errors() {
        let mut console = Console::new(Broken);
        assert!(console.emit(&Value::Integer(1)).is_err());
    }

    #[test]
    fn emit_all_preserves_order() {
        let mut lines: Vec<String> = Vec::new();
        emit_all(&mut lines, [Value::Integer(2), Value::Integer(1)]).unwrap();
        assert_eq!(lines, ["2", "1"]);
    }
}
