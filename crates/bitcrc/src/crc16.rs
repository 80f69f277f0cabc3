//! CRC-16/ARC (aka CRC-16/IBM, CRC-16/LHA) checksum.
//!
//! Parameters (CRC Catalogue):
//! - width: 16
//! - poly: 0x8005 (reflected: 0xA001)
//! - init: 0x0000
//! - refin/refout: true
//! - xorout: 0x0000
//! - check: 0xBB3D
//!
//! # Usage
//!
//! ```
//! use bitcrc::{Checksum, Crc16Arc};
//!
//! let crc = Crc16Arc::checksum(b"123456789");
//! assert_eq!(crc, 0xBB3D);
//! ```

use traits::{Checksum, ChecksumCombine, InvalidInput};

use crate::{
  combine, engine,
  input::{self, ByteSource},
  params::{CRC16_ARC, CrcParams},
};

/// CRC-16/ARC checksum.
///
/// Stateless: every call owns its register, so concurrent calls need no
/// synchronisation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Crc16Arc;

impl Crc16Arc {
  /// Algorithm parameters.
  pub const PARAMS: CrcParams<u16> = CRC16_ARC;

  /// Compute CRC-16/ARC of `data` in one shot.
  #[inline]
  #[must_use]
  pub fn checksum(data: &[u8]) -> u16 {
    engine::checksum(&CRC16_ARC, data)
  }

  /// Validate `values` as bytes, then compute their CRC-16/ARC.
  ///
  /// # Errors
  ///
  /// Returns [`InvalidInput`] for the first element outside `0..=255`.
  #[inline]
  pub fn try_checksum<T: ByteSource>(values: &[T]) -> Result<u16, InvalidInput> {
    input::try_checksum(&CRC16_ARC, values)
  }

  /// Combine two CRC-16/ARC values: `crc(A || B)` from `crc(A)`, `crc(B)`, `len(B)`.
  #[inline]
  #[must_use]
  pub fn combine(crc_a: u16, crc_b: u16, len_b: usize) -> u16 {
    combine::combine(&CRC16_ARC, crc_a, crc_b, len_b)
  }
}

impl Checksum for Crc16Arc {
  const NAME: &'static str = CRC16_ARC.name;
  const OUTPUT_SIZE: usize = 2;
  type Output = u16;

  #[inline]
  fn checksum(data: &[u8]) -> u16 {
    Crc16Arc::checksum(data)
  }
}

impl ChecksumCombine for Crc16Arc {
  #[inline]
  fn combine(crc_a: u16, crc_b: u16, len_b: usize) -> u16 {
    Crc16Arc::combine(crc_a, crc_b, len_b)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_check_value() {
    assert_eq!(Crc16Arc::checksum(b"123456789"), 0xBB3D);
  }

  #[test]
  fn test_trait_dispatch() {
    assert_eq!(<Crc16Arc as Checksum>::checksum(b"hello mr cat"), 0x6435);
    assert!(<Crc16Arc as Checksum>::verify(b"hello martians!", 0x0D6A));
    assert_eq!(<Crc16Arc as Checksum>::NAME, "CRC-16/ARC");
  }

  #[test]
  fn test_try_checksum_accepts_wide_integers() {
    let values: [i16; 3] = [0x00A3, 0x0057, 0x0011];
    assert_eq!(Crc16Arc::try_checksum(&values), Ok(0x1E0E));
  }

  #[test]
  fn test_try_checksum_rejects_out_of_range() {
    let values: [i16; 3] = [0x00A3, 0x0157, 0x0011];
    assert_eq!(Crc16Arc::try_checksum(&values), Err(InvalidInput::new(1, 0x0157)));
  }

  #[test]
  fn test_combine() {
    let (a, b) = b"123456789ABCDEF".split_at(9);
    let combined = Crc16Arc::combine(Crc16Arc::checksum(a), Crc16Arc::checksum(b), b.len());
    assert_eq!(combined, 0x1B71);
  }
}
