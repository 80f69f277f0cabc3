//! CRC-32/ISO-HDLC checksum (the CRC-32 of Ethernet, gzip, zip and PNG).
//!
//! Parameters (CRC Catalogue):
//! - width: 32
//! - poly: 0x04C11DB7 (reflected: 0xEDB88320)
//! - init: 0xFFFFFFFF
//! - refin/refout: true
//! - xorout: 0xFFFFFFFF
//! - check: 0xCBF43926
//!
//! # Usage
//!
//! ```
//! use bitcrc::{Checksum, Crc32IsoHdlc};
//!
//! let crc = Crc32IsoHdlc::checksum(b"123");
//! assert_eq!(crc, 0x8848_63D2);
//! ```

use traits::{Checksum, ChecksumCombine, InvalidInput};

use crate::{
  combine, engine,
  input::{self, ByteSource},
  params::{CRC32_ISO_HDLC, CrcParams},
};

/// CRC-32/ISO-HDLC checksum.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Crc32IsoHdlc;

impl Crc32IsoHdlc {
  /// Algorithm parameters.
  pub const PARAMS: CrcParams<u32> = CRC32_ISO_HDLC;

  /// Compute CRC-32/ISO-HDLC of `data` in one shot.
  #[inline]
  #[must_use]
  pub fn checksum(data: &[u8]) -> u32 {
    engine::checksum(&CRC32_ISO_HDLC, data)
  }

  /// Validate `values` as bytes, then compute their CRC-32/ISO-HDLC.
  ///
  /// # Errors
  ///
  /// Returns [`InvalidInput`] for the first element outside `0..=255`.
  #[inline]
  pub fn try_checksum<T: ByteSource>(values: &[T]) -> Result<u32, InvalidInput> {
    input::try_checksum(&CRC32_ISO_HDLC, values)
  }

  /// Combine two CRC-32 values: `crc(A || B)` from `crc(A)`, `crc(B)`, `len(B)`.
  #[inline]
  #[must_use]
  pub fn combine(crc_a: u32, crc_b: u32, len_b: usize) -> u32 {
    combine::combine(&CRC32_ISO_HDLC, crc_a, crc_b, len_b)
  }
}

impl Checksum for Crc32IsoHdlc {
  const NAME: &'static str = CRC32_ISO_HDLC.name;
  const OUTPUT_SIZE: usize = 4;
  type Output = u32;

  #[inline]
  fn checksum(data: &[u8]) -> u32 {
    Crc32IsoHdlc::checksum(data)
  }
}

impl ChecksumCombine for Crc32IsoHdlc {
  #[inline]
  fn combine(crc_a: u32, crc_b: u32, len_b: usize) -> u32 {
    Crc32IsoHdlc::combine(crc_a, crc_b, len_b)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_check_value() {
    assert_eq!(Crc32IsoHdlc::checksum(b"123456789"), 0xCBF4_3926);
  }

  #[test]
  fn test_empty() {
    assert_eq!(Crc32IsoHdlc::checksum(b""), 0);
  }

  #[test]
  fn test_signed_byte_source() {
    // Sources that arrive as signed 8-bit values are accepted when non-negative.
    let values: [i8; 3] = [0x31, 0x32, 0x33];
    assert_eq!(Crc32IsoHdlc::try_checksum(&values), Ok(0x8848_63D2));

    let negative: [i8; 2] = [0x31, -1];
    assert_eq!(Crc32IsoHdlc::try_checksum(&negative), Err(InvalidInput::new(1, -1)));
  }

  #[test]
  fn test_result_is_unsigned() {
    // The inverted register has its top bit set; it must stay a positive u32.
    let crc = Crc32IsoHdlc::checksum(b"123456789");
    assert!(crc > 0x8000_0000);
    assert_eq!(u64::from(crc), 0xCBF4_3926);
  }

  #[test]
  fn test_combine() {
    let (a, b) = b"123".split_at(1);
    let combined = Crc32IsoHdlc::combine(Crc32IsoHdlc::checksum(a), Crc32IsoHdlc::checksum(b), b.len());
    assert_eq!(combined, 0x8848_63D2);
  }
}
