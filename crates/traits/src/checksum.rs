//! Non-cryptographic checksum traits.
//!
//! Traits for whole-message checksum algorithms like CRC-16 and CRC-32.
//!
//! - **One-shot**: The full message is available at call time
//! - **Pure**: Identical input always yields identical output
//! - **Parallelism**: Combine operation for independently checksummed chunks

use core::fmt::Debug;

/// Non-cryptographic checksum algorithm.
///
/// Implementors are stateless: every call owns its own register, so the
/// trait carries only associated functions.
///
/// # Usage
///
/// ```rust,ignore
/// use bitcrc::{Checksum, Crc32IsoHdlc};
///
/// let crc = Crc32IsoHdlc::checksum(b"123");
/// assert_eq!(crc, 0x8848_63D2);
/// ```
///
/// # Implementor Requirements
///
/// - `checksum(&[])` must return the algorithm's empty-message value
/// - `checksum()` must be a pure function of its input
/// - `Output` must be exactly as wide as the algorithm's register
pub trait Checksum {
  /// Catalogue name of the algorithm (for example `CRC-16/ARC`).
  const NAME: &'static str;

  /// Output size in bytes.
  ///
  /// - CRC16: 2
  /// - CRC32: 4
  const OUTPUT_SIZE: usize;

  /// The checksum output type.
  ///
  /// `u16` for CRC16, `u32` for CRC32.
  type Output: Copy + Eq + Debug + Default;

  /// Compute the checksum of data in one shot.
  #[must_use]
  fn checksum(data: &[u8]) -> Self::Output;

  /// Check `data` against an expected checksum.
  #[inline]
  #[must_use]
  fn verify(data: &[u8], expected: Self::Output) -> bool {
    Self::checksum(data) == expected
  }
}

/// Checksums that support parallel computation via combination.
///
/// The combine operation computes `crc(A || B)` from `crc(A)`, `crc(B)`, and `len(B)`
/// in O(log n) time. This enables parallel checksum computation:
///
/// 1. Split data into chunks
/// 2. Compute checksums in parallel
/// 3. Combine results
///
/// # Mathematical Background
///
/// For CRC, this works because:
///
/// ```text
/// crc(A || B) = crc(A) * x^(8*len(B)) mod G(x) XOR crc(B)
/// ```
///
/// The exponentiation uses square-and-multiply for O(log n) complexity.
///
/// # Usage
///
/// ```rust,ignore
/// use bitcrc::{Checksum, ChecksumCombine, Crc16Arc};
///
/// let data = b"hello mr cat";
/// let (a, b) = data.split_at(6);
///
/// let crc_a = Crc16Arc::checksum(a);
/// let crc_b = Crc16Arc::checksum(b);
///
/// // Combine produces crc(a || b)
/// let combined = Crc16Arc::combine(crc_a, crc_b, b.len());
/// assert_eq!(combined, Crc16Arc::checksum(data));
/// ```
pub trait ChecksumCombine: Checksum {
  /// Combine two checksums.
  ///
  /// Given `crc_a = crc(A)` and `crc_b = crc(B)`, computes `crc(A || B)`.
  ///
  /// # Arguments
  ///
  /// * `crc_a` - Checksum of the first part (A)
  /// * `crc_b` - Checksum of the second part (B)
  /// * `len_b` - Length of the second part in bytes
  #[must_use]
  fn combine(crc_a: Self::Output, crc_b: Self::Output, len_b: usize) -> Self::Output;
}
