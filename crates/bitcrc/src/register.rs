//! Fixed-width CRC registers.
//!
//! The register type *is* the CRC width: `u16` for CRC-16, `u32` for CRC-32.
//! Both are unsigned, so every `>>` is a logical shift and no intermediate
//! value can carry a sign bit or spill past the declared width.

use core::{
  fmt::{Debug, LowerHex},
  ops::{BitAnd, BitXor, Shr},
};

mod sealed {
  pub trait Sealed {}
}

/// An unsigned CRC register.
///
/// Sealed and crate-private: implemented for `u16` and `u32` only.
pub(crate) trait Register:
  sealed::Sealed
  + Copy
  + Eq
  + Debug
  + Default
  + LowerHex
  + BitAnd<Output = Self>
  + BitXor<Output = Self>
  + Shr<u32, Output = Self>
  + Send
  + Sync
  + 'static
{
  /// Register width in bits.
  const WIDTH: u32;
  /// All bits clear.
  const ZERO: Self;

  /// Zero-extend a byte into the low 8 bits of the register.
  fn from_byte(byte: u8) -> Self;

  /// Single-bit value `1 << index`, or zero when `index >= WIDTH`.
  fn bit(index: u32) -> Self;

  /// All ones if the least significant bit is set, otherwise zero.
  fn lsb_mask(self) -> Self;

  /// One reflected division step: shift right and conditionally reduce.
  #[inline]
  #[must_use]
  fn step(self, poly: Self) -> Self {
    (self >> 1) ^ (poly & self.lsb_mask())
  }

  /// Whether bit `index` is set.
  #[inline]
  #[must_use]
  fn is_set(self, index: u32) -> bool {
    self & Self::bit(index) != Self::ZERO
  }
}

macro_rules! impl_register {
  ($($ty:ty),* $(,)?) => {$(
    impl sealed::Sealed for $ty {}

    impl Register for $ty {
      const WIDTH: u32 = <$ty>::BITS;
      const ZERO: Self = 0;

      #[inline]
      fn from_byte(byte: u8) -> Self {
        Self::from(byte)
      }

      #[inline]
      fn bit(index: u32) -> Self {
        (1 as $ty).checked_shl(index).unwrap_or(0)
      }

      #[inline]
      fn lsb_mask(self) -> Self {
        (0 as $ty).wrapping_sub(self & 1)
      }
    }
  )*};
}

impl_register!(u16, u32);
