/// Arithmetic operations returning a single value.
///
/// `double`, `multiply`, `is_positive` and `square_root`. Integer operands
/// keep integer results while they fit; the square root always works in
/// `f64`.
pub mod arithmetic;
/// Operations returning a fixed piece of text.
pub mod greeting;
/// Fixed-bound loops that print an ordered sequence of lines.
///
/// Each operation comes in two halves: a pure producer returning the finite
/// sequence as an iterator, and an emitter that writes that sequence to a
/// [`sink::Sink`] in order.
pub mod sequence;
/// Output destinations for the printing operations.
pub mod sink;

pub use arithmetic::{double, is_positive, multiply, square_root};
pub use greeting::say_hello;
pub use sequence::{
    countdown, countdown_from_10_to_5, countdown_from_10_to_5_sequence, countdown_sequence,
    evens_up_to_10, evens_up_to_10_sequence, hi_repeat, hi_repeat_sequence, loop_count_1_to_3,
    loop_count_1_to_3_sequence,
};
pub use sink::{Console, Sink};
