//! The bit-serial CRC routine shared by every width.
//!
//! One register lifecycle per call:
//!
//! ```text
//! crc = init
//! for each byte:
//!   crc ^= byte                             // low 8 bits only
//!   repeat 8: crc = (crc >> 1) ^ (poly & -(crc & 1))
//! return crc ^ xor_out
//! ```
//!
//! The raw-register helpers stay inside the crate. Callers get one-shot
//! checksums and [`combine`](crate::Crc16Arc::combine), never a resumable
//! register.

use crate::{params::CrcParams, register::Register};

/// Fold one byte into a raw register.
#[inline]
#[must_use]
pub(crate) fn fold_byte<R: Register>(poly_reflected: R, crc: R, byte: u8) -> R {
  let mut crc = crc ^ R::from_byte(byte);
  for _ in 0..8 {
    crc = crc.step(poly_reflected);
  }
  crc
}

/// Fold `data` into a raw register. No initial value or final transform is applied.
#[inline]
#[must_use]
pub(crate) fn fold<R: Register>(params: &CrcParams<R>, crc: R, data: &[u8]) -> R {
  fold_bytes(params, crc, data.iter().copied())
}

/// Fold an iterator of bytes into a raw register.
#[inline]
#[must_use]
pub(crate) fn fold_bytes<R, I>(params: &CrcParams<R>, crc: R, bytes: I) -> R
where
  R: Register,
  I: IntoIterator<Item = u8>,
{
  let poly = params.poly_reflected;
  bytes.into_iter().fold(crc, |crc, byte| fold_byte(poly, crc, byte))
}

/// Apply the final XOR to a raw register.
#[inline]
#[must_use]
pub(crate) fn finalize<R: Register>(params: &CrcParams<R>, crc: R) -> R {
  crc ^ params.xor_out
}

/// Compute the CRC of `data` in one shot.
#[inline]
#[must_use]
pub(crate) fn checksum<R: Register>(params: &CrcParams<R>, data: &[u8]) -> R {
  finalize(params, fold(params, params.init, data))
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::params::{CRC16_ARC, CRC32_ISO_HDLC};

  #[test]
  fn test_check_values() {
    assert_eq!(checksum(&CRC16_ARC, b"123456789"), CRC16_ARC.check);
    assert_eq!(checksum(&CRC32_ISO_HDLC, b"123456789"), CRC32_ISO_HDLC.check);
  }

  #[test]
  fn test_empty_returns_transformed_init() {
    assert_eq!(checksum(&CRC16_ARC, b""), 0x0000);
    assert_eq!(checksum(&CRC32_ISO_HDLC, b""), 0x0000_0000);
  }

  #[test]
  fn test_fold_empty_is_identity() {
    assert_eq!(fold(&CRC32_ISO_HDLC, 0x1234_5678, b""), 0x1234_5678);
    assert_eq!(fold(&CRC16_ARC, 0xBEEF, b""), 0xBEEF);
  }

  #[test]
  fn test_single_byte_matches_unrolled_steps() {
    let byte = 0xA3;
    let mut manual = CRC16_ARC.init ^ u16::from(byte);
    for _ in 0..8 {
      manual = if manual & 1 != 0 { (manual >> 1) ^ 0xA001 } else { manual >> 1 };
    }
    assert_eq!(fold(&CRC16_ARC, CRC16_ARC.init, &[byte]), manual);

    let mut manual = CRC32_ISO_HDLC.init ^ u32::from(byte);
    for _ in 0..8 {
      manual = if manual & 1 != 0 { (manual >> 1) ^ 0xEDB8_8320 } else { manual >> 1 };
    }
    assert_eq!(fold(&CRC32_ISO_HDLC, CRC32_ISO_HDLC.init, &[byte]), manual);
  }

  #[test]
  fn test_incremental() {
    let data = b"hello martians!";
    let oneshot = checksum(&CRC32_ISO_HDLC, data);

    for split in 0..=data.len() {
      let (a, b) = data.split_at(split);
      let crc = fold(&CRC32_ISO_HDLC, CRC32_ISO_HDLC.init, a);
      let crc = finalize(&CRC32_ISO_HDLC, fold(&CRC32_ISO_HDLC, crc, b));
      assert_eq!(crc, oneshot, "mismatch at split {}", split);
    }
  }

  #[test]
  fn test_residue() {
    let msg = b"123456789";

    let mut codeword = msg.to_vec();
    codeword.extend_from_slice(&checksum(&CRC16_ARC, msg).to_le_bytes());
    assert_eq!(fold(&CRC16_ARC, CRC16_ARC.init, &codeword), CRC16_ARC.residue);

    let mut codeword = msg.to_vec();
    codeword.extend_from_slice(&checksum(&CRC32_ISO_HDLC, msg).to_le_bytes());
    assert_eq!(fold(&CRC32_ISO_HDLC, CRC32_ISO_HDLC.init, &codeword), CRC32_ISO_HDLC.residue);
  }

  #[test]
  fn test_fold_bytes_matches_fold() {
    let data = b"123456789ABCDEF";
    assert_eq!(
      fold_bytes(&CRC16_ARC, 0, data.iter().copied()),
      fold(&CRC16_ARC, 0, data)
    );
  }
}

#[cfg(test)]
mod proptests {
  use alloc::vec::Vec;

  use proptest::prelude::*;

  use super::*;
  use crate::params::{CRC16_ARC, CRC32_ISO_HDLC};

  fn arb_data() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..512)
  }

  fn arb_split() -> impl Strategy<Value = (Vec<u8>, usize)> {
    arb_data().prop_flat_map(|data| {
      let len = data.len();
      (Just(data), 0..=len)
    })
  }

  proptest! {
    #[test]
    fn crc16_register_resumes((data, split) in arb_split()) {
      let (a, b) = data.split_at(split);
      let register = fold(&CRC16_ARC, CRC16_ARC.init, a);
      let resumed = finalize(&CRC16_ARC, fold(&CRC16_ARC, register, b));
      prop_assert_eq!(resumed, checksum(&CRC16_ARC, &data));
    }

    #[test]
    fn crc32_register_resumes((data, split) in arb_split()) {
      let (a, b) = data.split_at(split);
      let register = fold(&CRC32_ISO_HDLC, CRC32_ISO_HDLC.init, a);
      let resumed = finalize(&CRC32_ISO_HDLC, fold(&CRC32_ISO_HDLC, register, b));
      prop_assert_eq!(resumed, checksum(&CRC32_ISO_HDLC, &data));
    }

    #[test]
    fn crc16_codeword_leaves_residue(data in arb_data()) {
      let mut codeword = data.clone();
      codeword.extend_from_slice(&checksum(&CRC16_ARC, &data).to_le_bytes());
      prop_assert_eq!(fold(&CRC16_ARC, CRC16_ARC.init, &codeword), CRC16_ARC.residue);
    }

    #[test]
    fn crc32_codeword_leaves_residue(data in arb_data()) {
      let mut codeword = data.clone();
      codeword.extend_from_slice(&checksum(&CRC32_ISO_HDLC, &data).to_le_bytes());
      prop_assert_eq!(fold(&CRC32_ISO_HDLC, CRC32_ISO_HDLC.init, &codeword), CRC32_ISO_HDLC.residue);
    }

    #[test]
    fn byte_at_a_time_matches_oneshot(data in arb_data()) {
      let register = data.iter().fold(CRC32_ISO_HDLC.init, |r, &b| fold(&CRC32_ISO_HDLC, r, &[b]));
      prop_assert_eq!(finalize(&CRC32_ISO_HDLC, register), checksum(&CRC32_ISO_HDLC, &data));
    }
  }
}
