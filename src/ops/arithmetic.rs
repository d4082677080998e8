use crate::{error::DomainError, value::Number};

/// Returns twice the given number.
///
/// Integers stay integers unless doubling overflows `i64`, in which case the
/// result is promoted to a real.
///
/// # Example
/// ```
/// use leet::{ops::double, value::Number};
///
/// assert_eq!(double(21), Number::Integer(42));
/// assert_eq!(double(-1.25), Number::Real(-2.5));
/// ```
#[must_use]
pub fn double(x: impl Into<Number>) -> Number {
    match x.into() {
        Number::Integer(n) => n.checked_mul(2)
                               .map_or_else(|| Number::Real(Number::Integer(n).as_real() * 2.0),
                                            Number::Integer),
        Number::Real(r) => Number::Real(r * 2.0),
    }
}

/// Returns the product of two numbers.
///
/// Two integers multiply exactly when the product fits in `i64`; an
/// overflowing product, or any real operand, is computed in `f64`.
///
/// # Example
/// ```
/// use leet::{ops::multiply, value::Number};
///
/// assert_eq!(multiply(6, 7), Number::Integer(42));
/// assert_eq!(multiply(3, 0.5), Number::Real(1.5));
/// ```
#[must_use]
pub fn multiply(a: impl Into<Number>, b: impl Into<Number>) -> Number {
    match (a.into(), b.into()) {
        (Number::Integer(x), Number::Integer(y)) => {
            x.checked_mul(y).map_or_else(|| {
                                             Number::Real(Number::Integer(x).as_real()
                                                          * Number::Integer(y).as_real())
                                         },
                                         Number::Integer)
        },
        (a, b) => Number::Real(a.as_real() * b.as_real()),
    }
}

/// Tests whether a number is strictly greater than zero.
///
/// Zero (including `-0.0`) and NaN are not positive.
///
/// # Example
/// ```
/// use leet::ops::is_positive;
///
/// assert!(is_positive(3));
/// assert!(!is_positive(0));
/// assert!(!is_positive(f64::NAN));
/// ```
#[must_use]
pub fn is_positive(n: impl Into<Number>) -> bool {
    match n.into() {
        Number::Integer(i) => i > 0,
        Number::Real(r) => r > 0.0,
    }
}

/// Computes the principal square root of a non-negative number.
///
/// The operand is converted to `f64` first. Only operands below zero are
/// rejected, so `-0.0` and NaN pass through `f64::sqrt` unchanged.
///
/// # Errors
/// Returns a [`DomainError`] if `n < 0`.
///
/// # Example
/// ```
/// use leet::ops::square_root;
///
/// assert_eq!(square_root(9).unwrap(), 3.0);
/// assert!(square_root(-1).is_err());
/// ```
pub fn square_root(n: impl Into<Number>) -> Result<f64, DomainError> {
    let x = n.into().as_real();

    if x < 0.0 {
        return Err(DomainError { operation: "squareRoot",
                                 value:     x, });
    }

    Ok(x.sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn double_promotes_on_overflow() {
        assert_eq!(double(i64::MAX), Number::Real(2.0 * 9_223_372_036_854_775_807.0));
        assert_eq!(double(i64::MIN / 2), Number::Integer(i64::MIN));
    }

    #[test]
    fn multiply_promotes_on_overflow() {
        assert!(matches!(multiply(i64::MAX, 2), Number::Real(_)));
        assert_eq!(multiply(-4, 5), Number::Integer(-20));
    }

    #[test]
    fn negative_zero_is_not_a_domain_error() {
        let r = square_root(-0.0).unwrap();
        assert_eq!(r, 0.0);
        assert!(r.is_sign_negative());
    }

    #[test]
    fn domain_error_reports_operand() {
        let e = square_root(-2.5).unwrap_err();
        assert_eq!(e.operation, "squareRoot");
        assert_eq!(e.value, -2.5);
    }
}
