/// Error returned when an operation is handed an argument it cannot work
/// with, such as a zero-capacity destination buffer for
/// [`StrView::copy_to_cstr`](crate::StrView::copy_to_cstr).
///
/// # Example
///
/// ```rust
/// # use sview::*;
/// let mut buf = [0u8; 0];
/// let result = sv!("hello").copy_to_cstr(&mut buf);
///
/// assert!(matches!(result, Err(InvalidArgumentError)));
/// ```
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error,
)]
#[display("invalid argument: destination buffer has zero capacity")]
pub struct InvalidArgumentError;
