use std::io;

use crate::{
    ops::sink::{Sink, emit_all},
    value::Value,
};

/// Number of times `hiRepeat` says hi.
const HI_REPEATS: usize = 3;

/// The countdown `5, 4, 3, 2, 1`.
pub fn countdown_sequence() -> impl Iterator<Item = Value> + Clone {
    (1..=5_i64).rev().map(Value::Integer)
}

/// Prints the countdown `5, 4, 3, 2, 1`, one number per line.
///
/// # Errors
/// Returns the sink's I/O error, if any.
///
/// # Example
/// ```
/// use leet::ops::countdown;
///
/// let mut lines: Vec<String> = Vec::new();
/// countdown(&mut lines).unwrap();
///
/// assert_eq!(lines, ["5", "4", "3", "2", "1"]);
/// ```
pub fn countdown<S: Sink + ?Sized>(sink: &mut S) -> io::Result<()> {
    emit_all(sink, countdown_sequence())
}

/// The literal `Hi`, three times.
pub fn hi_repeat_sequence() -> impl Iterator<Item = Value> + Clone {
    std::iter::repeat_n("Hi", HI_REPEATS).map(Value::from)
}

/// Prints `Hi` three times.
///
/// # Errors
/// Returns the sink's I/O error, if any.
pub fn hi_repeat<S: Sink + ?Sized>(sink: &mut S) -> io::Result<()> {
    emit_all(sink, hi_repeat_sequence())
}

/// The even numbers from 2 up to and including 10.
pub fn evens_up_to_10_sequence() -> impl Iterator<Item = Value> + Clone {
    (2..=10_i64).step_by(2).map(Value::Integer)
}

/// Prints `2, 4, 6, 8, 10`, one number per line.
///
/// # Errors
/// Returns the sink's I/O error, if any.
pub fn evens_up_to_10<S: Sink + ?Sized>(sink: &mut S) -> io::Result<()> {
    emit_all(sink, evens_up_to_10_sequence())
}

/// The countdown `10, 9, 8, 7, 6, 5`.
pub fn countdown_from_10_to_5_sequence() -> impl Iterator<Item = Value> + Clone {
    (5..=10_i64).rev().map(Value::Integer)
}

/// Prints the countdown from 10 down to and including 5.
///
/// # Errors
/// Returns the sink's I/O error, if any.
pub fn countdown_from_10_to_5<S: Sink + ?Sized>(sink: &mut S) -> io::Result<()> {
    emit_all(sink, countdown_from_10_to_5_sequence())
}

/// The pairs `("Loop", 1)`, `("Loop", 2)` and `("Loop", 3)`.
pub fn loop_count_1_to_3_sequence() -> impl Iterator<Item = Value> + Clone {
    (1..=3_i64).map(|i| Value::Tuple(vec!["Loop".into(), Value::Integer(i)]))
}

/// Prints `Loop 1`, `Loop 2` and `Loop 3`.
///
/// # Errors
/// Returns the sink's I/O error, if any.
///
/// # Example
/// ```
/// use leet::{ops::loop_count_1_to_3, value::Value};
///
/// let mut values: Vec<Value> = Vec::new();
/// loop_count_1_to_3(&mut values).unwrap();
///
/// assert_eq!(values[0], Value::Tuple(vec!["Loop".into(), 1_i64.into()]));
/// assert_eq!(values.len(), 3);
/// ```
pub fn loop_count_1_to_3<S: Sink + ?Sized>(sink: &mut S) -> io::Result<()> {
    emit_all(sink, loop_count_1_to_3_sequence())
}
