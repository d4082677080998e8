/// Numeric operand accepted by the operations.
///
/// Integer inputs stay integers as long as the result is exactly
/// representable; anything involving a real is computed in `f64`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// A 64 bit integer.
    Integer(i64),
    /// A double precision floating-point number.
    Real(f64),
}

impl Number {
    /// Converts the number to an `f64`.
    ///
    /// Integers beyond `2^53` lose precision, which matches what a real square
    /// root or a mixed product would see anyway.
    ///
    /// # Example
    /// ```
    /// use leet::value::Number;
    ///
    /// assert_eq!(Number::Integer(-3).as_real(), -3.0);
    /// assert_eq!(Number::Real(0.5).as_real(), 0.5);
    /// ```
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub const fn as_real(self) -> f64 {
        match self {
            Self::Integer(n) => n as f64,
            Self::Real(r) => r,
        }
    }
}

impl From<i32> for Number {
    fn from(v: i32) -> Self {
        Self::Integer(i64::from(v))
    }
}

impl From<i64> for Number {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<f64> for Number {
    fn from(v: f64) -> Self {
        Self::Real(v)
    }
}

/// A returned or printed value.
///
/// Every operation either returns one of these or emits a finite sequence of
/// them to a [`Sink`](crate::ops::sink::Sink).
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// An integer value (64 bit integer).
    Integer(i64),
    /// A numeric value (double precision floating-point).
    Real(f64),
    /// A boolean value (`true` or `false`).
    Bool(bool),
    /// A piece of literal text, such as `Hello!`.
    Text(String),
    /// Several values printed on one line, separated by a single space.
    Tuple(Vec<Self>),
}

impl From<Number> for Value {
    fn from(n: Number) -> Self {
        match n {
            Number::Integer(i) => Self::Integer(i),
            Number::Real(r) => Self::Real(r),
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Real(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Real(r) => write!(f, "{r}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Text(s) => write!(f, "{s}"),
            Self::Tuple(items) => {
                for (index, value) in items.iter().enumerate() {
                    if index > 0 {
                        write!(f, " ")?;
                    }

                    write!(f, "{value}")?;
                }

                Ok(())
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tuple_renders_space_separated() {
        let v = Value::Tuple(vec!["Loop".into(), 2_i64.into()]);
        assert_eq!(v.to_string(), "Loop 2");
    }

    #[test]
    fn number_keeps_its_kind_as_value() {
        assert_eq!(Value::from(Number::Integer(7)), Value::Integer(7));
        assert_eq!(Value::from(Number::Real(7.5)), Value::Real(7.5));
    }

    #[test]
    fn small_integers_widen() {
        assert_eq!(Number::from(-4), Number::Integer(-4));
    }
}
