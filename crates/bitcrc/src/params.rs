//! CRC algorithm parameters.
//!
//! This module defines the parameters for the supported CRC algorithms
//! following the conventions from the
//! [CRC Catalogue](https://reveng.sourceforge.io/crc-catalogue/).
//!
//! Both variants are reflected (`refin = refout = true`), which maps to
//! LSB-first processing with right shifts and the bit-reversed polynomial.

/// CRC algorithm parameters.
///
/// # Parameters
///
/// - `width`: Number of bits in the CRC (16 or 32)
/// - `poly`: The generator polynomial, normal form, without the implicit high bit
/// - `poly_reflected`: `poly` bit-reversed across `width` bits
/// - `init`: Initial value for the CRC register
/// - `xor_out`: Value to XOR with the final register
/// - `check`: CRC of the ASCII string `"123456789"`
/// - `residue`: Raw register after folding a message followed by its own CRC
///
/// The only instances are [`CRC16_ARC`] and [`CRC32_ISO_HDLC`]; fields are
/// read through accessors. `xor_out` is carried even when it is zero so that
/// the engine applies the final transform unconditionally.
///
/// ```
/// use bitcrc::CRC16_ARC;
///
/// assert_eq!((CRC16_ARC.poly(), CRC16_ARC.check()), (0x8005, 0xBB3D));
/// ```
///
/// Other variants cannot be built outside this crate:
///
/// ```compile_fail
/// let mcrf4xx = bitcrc::CrcParams { poly_reflected: 0x8408, init: 0xFFFF, ..bitcrc::CRC16_ARC };
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CrcParams<R> {
  pub(crate) name: &'static str,
  pub(crate) width: u8,
  pub(crate) poly: R,
  pub(crate) poly_reflected: R,
  pub(crate) init: R,
  pub(crate) xor_out: R,
  pub(crate) check: R,
  pub(crate) residue: R,
}

impl<R: Copy> CrcParams<R> {
  /// Reflect-in flag. Always true for the supported variants.
  pub const REFLECT_IN: bool = true;
  /// Reflect-out flag. Always true for the supported variants.
  pub const REFLECT_OUT: bool = true;

  /// Catalogue name.
  #[inline]
  #[must_use]
  pub const fn name(&self) -> &'static str {
    self.name
  }

  /// Width in bits.
  #[inline]
  #[must_use]
  pub const fn width(&self) -> u8 {
    self.width
  }

  /// Generator polynomial (normal form).
  #[inline]
  #[must_use]
  pub const fn poly(&self) -> R {
    self.poly
  }

  /// Generator polynomial (reflected form).
  #[inline]
  #[must_use]
  pub const fn poly_reflected(&self) -> R {
    self.poly_reflected
  }

  /// Initial value for the CRC register.
  #[inline]
  #[must_use]
  pub const fn init(&self) -> R {
    self.init
  }

  /// XOR value applied to the final register.
  #[inline]
  #[must_use]
  pub const fn xor_out(&self) -> R {
    self.xor_out
  }

  /// Check value over `b"123456789"`.
  #[inline]
  #[must_use]
  pub const fn check(&self) -> R {
    self.check
  }

  /// Register contents after folding a valid codeword.
  #[inline]
  #[must_use]
  pub const fn residue(&self) -> R {
    self.residue
  }
}

/// CRC-16/ARC (also CRC-16/IBM, CRC-16/LHA): ARC, LHA, Modbus framing, USB.
pub const CRC16_ARC: CrcParams<u16> = CrcParams {
  name: "CRC-16/ARC",
  width: 16,
  poly: 0x8005,
  poly_reflected: 0xA001,
  init: 0x0000,
  xor_out: 0x0000,
  check: 0xBB3D,
  residue: 0x0000,
};

/// CRC-32/ISO-HDLC (the "CRC-32" of Ethernet, gzip, zip and PNG).
pub const CRC32_ISO_HDLC: CrcParams<u32> = CrcParams {
  name: "CRC-32/ISO-HDLC",
  width: 32,
  poly: 0x04C1_1DB7,
  poly_reflected: 0xEDB8_8320,
  init: 0xFFFF_FFFF,
  xor_out: 0xFFFF_FFFF,
  check: 0xCBF4_3926,
  residue: 0xDEBB_20E3,
};

const _: () = assert!(CRC16_ARC.poly.reverse_bits() == CRC16_ARC.poly_reflected);
const _: () = assert!(CRC32_ISO_HDLC.poly.reverse_bits() == CRC32_ISO_HDLC.poly_reflected);
const _: () = assert!(CRC16_ARC.width as u32 == u16::BITS);
const _: () = assert!(CRC32_ISO_HDLC.width as u32 == u32::BITS);

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_polynomials() {
    assert_eq!(CRC16_ARC.poly_reflected, 0xA001);
    assert_eq!(CRC32_ISO_HDLC.poly_reflected, 0xEDB8_8320);
  }

  #[test]
  fn test_arc_final_xor_is_identity() {
    assert_eq!(CRC16_ARC.xor_out, 0);
    assert_eq!(CRC16_ARC.init, 0);
  }

  #[test]
  fn test_iso_hdlc_inverts() {
    assert_eq!(CRC32_ISO_HDLC.init, u32::MAX);
    assert_eq!(CRC32_ISO_HDLC.xor_out, u32::MAX);
  }

  #[test]
  fn test_accessors_match_catalogue() {
    assert_eq!(CRC16_ARC.name(), "CRC-16/ARC");
    assert_eq!(CRC16_ARC.width(), 16);
    assert_eq!(CRC16_ARC.poly(), 0x8005);
    assert_eq!(CRC16_ARC.check(), 0xBB3D);
    assert_eq!(CRC32_ISO_HDLC.poly_reflected(), 0xEDB8_8320);
    assert_eq!(CRC32_ISO_HDLC.init(), u32::MAX);
    assert_eq!(CRC32_ISO_HDLC.xor_out(), u32::MAX);
    assert_eq!(CRC32_ISO_HDLC.residue(), 0xDEBB_20E3);
  }

  #[test]
  fn test_reflection_flags() {
    assert!(CrcParams::<u16>::REFLECT_IN);
    assert!(CrcParams::<u32>::REFLECT_OUT);
  }
}
