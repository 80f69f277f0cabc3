//! Known-answer test vectors.
//!
//! A small self-test: every vector is computed through the public engines and
//! compared with its published value.
//!
//! ```
//! let passed = bitcrc::vectors::verify_all().expect("known-answer tests");
//! assert_eq!(passed, bitcrc::vectors::VECTORS.len());
//! ```

use core::fmt;

use crate::catalogue::Algorithm;

/// A single known-answer vector.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TestVector {
  /// Human-readable description of `data`.
  pub label: &'static str,
  /// Algorithm under test.
  pub algorithm: Algorithm,
  /// Message bytes.
  pub data: &'static [u8],
  /// Expected checksum, zero-extended.
  pub expected: u64,
}

impl TestVector {
  const fn new(algorithm: Algorithm, label: &'static str, data: &'static [u8], expected: u64) -> Self {
    Self {
      label,
      algorithm,
      data,
      expected,
    }
  }

  /// Compute the checksum and compare it with `expected`.
  ///
  /// # Errors
  ///
  /// Returns [`VectorMismatch`] carrying both values when they differ.
  pub fn run(&self) -> Result<u64, VectorMismatch> {
    let actual = self.algorithm.checksum(self.data);
    if actual == self.expected {
      Ok(actual)
    } else {
      Err(VectorMismatch {
        label: self.label,
        algorithm: self.algorithm,
        expected: self.expected,
        actual,
      })
    }
  }
}

/// Every built-in vector.
pub static VECTORS: &[TestVector] = &[
  // CRC-16/ARC
  TestVector::new(Algorithm::Crc16Arc, "", b"", 0x0000),
  TestVector::new(Algorithm::Crc16Arc, "\\xA3\\x57\\x11", &[0xA3, 0x57, 0x11], 0x1E0E),
  TestVector::new(Algorithm::Crc16Arc, "123456789", b"123456789", 0xBB3D),
  TestVector::new(Algorithm::Crc16Arc, "hello mr cat", b"hello mr cat", 0x6435),
  TestVector::new(Algorithm::Crc16Arc, "hello martians!", b"hello martians!", 0x0D6A),
  TestVector::new(Algorithm::Crc16Arc, "123456789ABCDEF", b"123456789ABCDEF", 0x1B71),
  // CRC-32/ISO-HDLC
  TestVector::new(Algorithm::Crc32IsoHdlc, "", b"", 0x0000_0000),
  TestVector::new(Algorithm::Crc32IsoHdlc, "\\x00", &[0x00], 0xD202_EF8D),
  TestVector::new(Algorithm::Crc32IsoHdlc, "123", &[0x31, 0x32, 0x33], 0x8848_63D2),
  TestVector::new(Algorithm::Crc32IsoHdlc, "123456789", b"123456789", 0xCBF4_3926),
  TestVector::new(
    Algorithm::Crc32IsoHdlc,
    "The quick brown fox jumps over the lazy dog",
    b"The quick brown fox jumps over the lazy dog",
    0x414F_A339,
  ),
];

/// Run every vector in [`VECTORS`], stopping at the first mismatch.
///
/// # Errors
///
/// Returns the first [`VectorMismatch`].
pub fn verify_all() -> Result<usize, VectorMismatch> {
  VECTORS.iter().try_fold(0, |passed, v| v.run().map(|_| passed + 1))
}

/// A vector produced a different checksum than published.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub struct VectorMismatch {
  /// Label of the failing vector.
  pub label: &'static str,
  /// Algorithm under test.
  pub algorithm: Algorithm,
  /// Published value.
  pub expected: u64,
  /// Computed value.
  pub actual: u64,
}

impl fmt::Display for VectorMismatch {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let w = usize::from(self.algorithm.width() / 4);
    write!(
      f,
      "{} vector {:?}: expected 0x{:0w$x}, got 0x{:0w$x}",
      self.algorithm.name(),
      self.label,
      self.expected,
      self.actual,
    )
  }
}

impl core::error::Error for VectorMismatch {}

#[cfg(test)]
mod tests {
  use alloc::string::ToString;

  use super::*;

  #[test]
  fn test_all_vectors_pass() {
    assert_eq!(verify_all(), Ok(VECTORS.len()));
  }

  #[test]
  fn test_every_algorithm_covered() {
    for alg in Algorithm::ALL {
      assert!(VECTORS.iter().any(|v| v.algorithm == alg && v.data.is_empty()));
      assert!(VECTORS.iter().any(|v| v.algorithm == alg && v.data == b"123456789"));
    }
  }

  #[test]
  fn test_mismatch_reported() {
    let bad = TestVector::new(Algorithm::Crc16Arc, "123456789", b"123456789", 0xBEEF);
    let err = bad.run().unwrap_err();
    assert_eq!(err.actual, 0xBB3D);
    assert_eq!(
      err.to_string(),
      "CRC-16/ARC vector \"123456789\": expected 0xbeef, got 0xbb3d"
    );
  }
}
