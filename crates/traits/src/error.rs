//! Error types for checksum inputs.
//!
//! Minimal, allocation-free error types. Individual crates may define
//! additional errors as needed.

use core::fmt;

/// A value handed in as a "byte" is outside `0..=255`.
///
/// Returned by the validating entry points before any CRC work starts, so a
/// caller never observes a checksum over silently truncated input.
///
/// # Examples
///
/// ```
/// use traits::InvalidInput;
///
/// fn to_byte(index: usize, value: i32) -> Result<u8, InvalidInput> {
///   u8::try_from(value).map_err(|_| InvalidInput::new(index, i128::from(value)))
/// }
///
/// assert_eq!(to_byte(0, 0x31), Ok(0x31));
///
/// let err = to_byte(2, 0x1FF).unwrap_err();
/// assert_eq!(err.index(), 2);
/// assert_eq!(err.value(), 0x1FF);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub struct InvalidInput {
  index: usize,
  value: i128,
}

impl InvalidInput {
  /// Create a new error for the element at `index` holding `value`.
  #[inline]
  #[must_use]
  pub const fn new(index: usize, value: i128) -> Self {
    Self { index, value }
  }

  /// Position of the first offending element.
  #[inline]
  #[must_use]
  pub const fn index(&self) -> usize {
    self.index
  }

  /// The offending value, widened to `i128` so every primitive integer
  /// is reported exactly.
  #[inline]
  #[must_use]
  pub const fn value(&self) -> i128 {
    self.value
  }
}

impl fmt::Display for InvalidInput {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "invalid input: element {} has value {} which is not a byte (0..=255)",
      self.index, self.value
    )
  }
}

impl core::error::Error for InvalidInput {}
