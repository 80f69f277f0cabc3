//! Table-less CRC-16/ARC and CRC-32/ISO-HDLC.
//!
//! Both algorithms are computed bit by bit with no lookup tables: one shift
//! and one conditional XOR per input bit, on an unsigned register exactly as
//! wide as the CRC.
//!
//! # Supported Algorithms
//!
//! | Type | Polynomial | Init | XorOut | Output | Check |
//! |------|------------|------|--------|--------|-------|
//! | [`Crc16Arc`] | 0x8005 (0xA001 reflected) | 0x0000 | 0x0000 | `u16` | 0xBB3D |
//! | [`Crc32IsoHdlc`] | 0x04C11DB7 (0xEDB88320 reflected) | 0xFFFFFFFF | 0xFFFFFFFF | `u32` | 0xCBF43926 |
//!
//! Both are instantiations of one crate-internal generic routine,
//! parameterised by a [`CrcParams`]. The parameter sets are fixed: there is
//! no public way to build another variant or to resume a partial register:
//!
//! ```compile_fail
//! let register = bitcrc::engine::fold(&bitcrc::CRC16_ARC, 0, b"1234");
//! ```
//!
//! # Example
//!
//! ```rust
//! use bitcrc::{Checksum, ChecksumCombine, Crc16Arc, compute16, compute32};
//!
//! assert_eq!(compute16(b"123456789"), 0xBB3D);
//! assert_eq!(compute32(b"123"), 0x8848_63D2);
//!
//! // Parallel combine (useful for multi-threaded processing)
//! let data = b"hello mr cat";
//! let (a, b) = data.split_at(5);
//! let combined = Crc16Arc::combine(Crc16Arc::checksum(a), Crc16Arc::checksum(b), b.len());
//! assert_eq!(combined, 0x6435);
//! ```
//!
//! Input that is not already `&[u8]` goes through [`input`], which rejects
//! out-of-range values instead of truncating them:
//!
//! ```rust
//! let err = bitcrc::input::try_compute16(&[0x31_u16, 0x3132]).unwrap_err();
//! assert_eq!(err.index(), 1);
//! ```
//!
//! # Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `std` | Yes | Threaded chunked checksums (implies `alloc`) |
//! | `alloc` | Yes | `Vec`-returning input conversions |
//!
//! # no_std Support
//!
//! This crate is `no_std` compatible. Disable default features for embedded use:
//!
//! ```toml
//! [dependencies]
//! bitcrc = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(any(feature = "alloc", test))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

mod catalogue;
mod combine;
mod crc16;
mod crc32;
mod engine;
mod register;

pub mod input;
pub mod parallel;
pub mod params;
pub mod reference;
pub mod vectors;

pub use catalogue::Algorithm;
pub use crc16::Crc16Arc;
pub use crc32::Crc32IsoHdlc;
pub use params::{CRC16_ARC, CRC32_ISO_HDLC, CrcParams};
// Re-export traits for convenience
pub use traits::{Checksum, ChecksumCombine, InvalidInput};

/// Compute CRC-16/ARC over `bytes`.
///
/// Total over all byte sequences; `compute16(&[])` is `0x0000`.
///
/// ```
/// assert_eq!(bitcrc::compute16(&[0xA3, 0x57, 0x11]), 0x1E0E);
/// ```
#[inline]
#[must_use]
pub fn compute16(bytes: &[u8]) -> u16 {
  engine::checksum(&CRC16_ARC, bytes)
}

/// Compute CRC-32/ISO-HDLC over `bytes`.
///
/// Total over all byte sequences; `compute32(&[])` is `0x00000000`.
///
/// ```
/// assert_eq!(bitcrc::compute32(b"123456789"), 0xCBF4_3926);
/// ```
#[inline]
#[must_use]
pub fn compute32(bytes: &[u8]) -> u32 {
  engine::checksum(&CRC32_ISO_HDLC, bytes)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_known_vectors() {
    assert_eq!(compute16(&[0xA3, 0x57, 0x11]), 0x1E0E);
    assert_eq!(compute16(b"123456789"), 0xBB3D);
    assert_eq!(compute16(b"hello mr cat"), 0x6435);
    assert_eq!(compute16(b"hello martians!"), 0x0D6A);
    assert_eq!(compute16(b"123456789ABCDEF"), 0x1B71);
    assert_eq!(compute32(&[0x31, 0x32, 0x33]), 0x8848_63D2);
  }

  #[test]
  fn test_empty() {
    assert_eq!(compute16(&[]), 0x0000);
    assert_eq!(compute32(&[]), 0x0000_0000);
  }

  #[test]
  fn test_engine_matches_reference() {
    let data = b"The quick brown fox jumps over the lazy dog";
    for len in 0..=data.len() {
      let msg = &data[..len];
      assert_eq!(compute16(msg), reference::crc16_arc_reference(msg));
      assert_eq!(compute32(msg), reference::crc32_iso_hdlc_reference(msg));
    }
  }

  #[test]
  fn test_params_are_fixed_constants() {
    assert_eq!(Crc16Arc::PARAMS, CRC16_ARC);
    assert_eq!(Crc32IsoHdlc::PARAMS, CRC32_ISO_HDLC);
    assert_eq!(compute16(b"123456789"), Crc16Arc::PARAMS.check());
    assert_eq!(compute32(b"123456789"), Crc32IsoHdlc::PARAMS.check());
  }
}
