//! Byte-sequence boundary: conversion and validation.
//!
//! The engines take `&[u8]` and nothing else. Callers holding wider integers,
//! signed bytes or text convert here first. Every element must lie in
//! `0..=255`; anything else is rejected with [`InvalidInput`] before the CRC
//! register is touched. Values are never masked down to their low byte and
//! negative values are never reinterpreted as two's-complement bytes.
//!
//! ```
//! use bitcrc::input;
//!
//! let wide: [u16; 3] = [0x00A3, 0x0057, 0x0011];
//! assert_eq!(input::try_compute16(&wide), Ok(0x1E0E));
//!
//! let err = input::validate(&[0x31_i32, 0x32, 0x133]).unwrap_err();
//! assert_eq!((err.index(), err.value()), (2, 0x133));
//! ```

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

use traits::InvalidInput;

use crate::{
  engine,
  params::{CRC16_ARC, CRC32_ISO_HDLC, CrcParams},
  register::Register,
};

// Pointer-sized integers widen through `as`, which is lossless below 128 bits.
const _: () = assert!(usize::BITS < i128::BITS);

mod sealed {
  pub trait Sealed {}
}

/// A scalar that may or may not denote a byte.
///
/// Sealed: implemented for the primitive integers and `char`.
pub trait ByteSource: sealed::Sealed + Copy {
  /// The value as a byte, or `None` if it lies outside `0..=255`.
  fn to_byte(self) -> Option<u8>;

  /// The exact value, widened for error reporting.
  fn widen(self) -> i128;
}

macro_rules! impl_byte_source {
  ($($ty:ty => |$v:ident| $widen:expr),* $(,)?) => {$(
    impl sealed::Sealed for $ty {}

    impl ByteSource for $ty {
      #[inline]
      fn to_byte(self) -> Option<u8> {
        u8::try_from(self).ok()
      }

      #[inline]
      fn widen(self) -> i128 {
        let $v = self;
        $widen
      }
    }
  )*};
}

impl_byte_source!(
  u8 => |v| i128::from(v),
  i8 => |v| i128::from(v),
  u16 => |v| i128::from(v),
  i16 => |v| i128::from(v),
  u32 => |v| i128::from(v),
  i32 => |v| i128::from(v),
  u64 => |v| i128::from(v),
  i64 => |v| i128::from(v),
  usize => |v| v as i128,
  isize => |v| v as i128,
);

impl sealed::Sealed for char {}

impl ByteSource for char {
  /// Code points up to U+00FF map to their Latin-1 byte.
  #[inline]
  fn to_byte(self) -> Option<u8> {
    u8::try_from(self).ok()
  }

  #[inline]
  fn widen(self) -> i128 {
    i128::from(u32::from(self))
  }
}

/// Check that every element of `values` is a byte.
///
/// # Errors
///
/// Returns [`InvalidInput`] naming the first element outside `0..=255`.
pub fn validate<T: ByteSource>(values: &[T]) -> Result<(), InvalidInput> {
  for (index, &value) in values.iter().enumerate() {
    if value.to_byte().is_none() {
      return Err(InvalidInput::new(index, value.widen()));
    }
  }
  Ok(())
}

/// Validate `values`, then compute the CRC described by `params`.
/// No CRC work is done when validation fails.
pub(crate) fn try_checksum<R, T>(params: &CrcParams<R>, values: &[T]) -> Result<R, InvalidInput>
where
  R: Register,
  T: ByteSource,
{
  validate(values)?;
  // Validated above: `to_byte` is `Some` for every element.
  let bytes = values.iter().filter_map(|v| v.to_byte());
  Ok(engine::finalize(params, engine::fold_bytes(params, params.init, bytes)))
}

/// Validate `values`, then compute their CRC-16/ARC.
///
/// # Errors
///
/// Returns [`InvalidInput`] naming the first element outside `0..=255`;
/// no CRC work is done in that case.
pub fn try_compute16<T: ByteSource>(values: &[T]) -> Result<u16, InvalidInput> {
  try_checksum(&CRC16_ARC, values)
}

/// Validate `values`, then compute their CRC-32/ISO-HDLC.
///
/// # Errors
///
/// Returns [`InvalidInput`] naming the first element outside `0..=255`;
/// no CRC work is done in that case.
pub fn try_compute32<T: ByteSource>(values: &[T]) -> Result<u32, InvalidInput> {
  try_checksum(&CRC32_ISO_HDLC, values)
}

/// Convert `values` to an owned byte vector.
///
/// # Errors
///
/// Returns [`InvalidInput`] naming the first element outside `0..=255`.
#[cfg(feature = "alloc")]
pub fn to_bytes<T: ByteSource>(values: &[T]) -> Result<Vec<u8>, InvalidInput> {
  values
    .iter()
    .enumerate()
    .map(|(index, &value)| value.to_byte().ok_or_else(|| InvalidInput::new(index, value.widen())))
    .collect()
}

/// Convert text to the sequence of its character codes, one byte per `char`.
///
/// This is not UTF-8 encoding: `"é"` becomes `[0xE9]`, and any character
/// above U+00FF is rejected. `index` in the error counts characters.
///
/// # Errors
///
/// Returns [`InvalidInput`] for the first character above U+00FF.
#[cfg(feature = "alloc")]
pub fn char_codes(text: &str) -> Result<Vec<u8>, InvalidInput> {
  text
    .chars()
    .enumerate()
    .map(|(index, ch)| ch.to_byte().ok_or_else(|| InvalidInput::new(index, ch.widen())))
    .collect()
}
