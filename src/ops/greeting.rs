/// Returns the literal greeting `Hello!`.
///
/// # Example
/// ```
/// use leet::ops::say_hello;
///
/// assert_eq!(say_hello(), "Hello!");
/// ```
#[must_use]
pub const fn say_hello() -> &'static str {
    "Hello!"
}
