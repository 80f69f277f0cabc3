//! Branchy, one-bit-at-a-time reference implementations.
//!
//! These follow the textbook formulation of each algorithm literally and
//! share no code with the generic routine behind [`compute16`](crate::compute16)
//! and [`compute32`](crate::compute32). They are:
//!
//! - **Obviously correct**: one `if` per bit, straight from the definition
//! - **Independent**: a test oracle for the generic path
//! - **Const-evaluable**: check values are verified at compile time
//!
//! # CRC Model
//!
//! | Algorithm | width | poly | init | refin | refout | xorout |
//! |-----------|-------|------|------|-------|--------|--------|
//! | CRC-16/ARC | 16 | 0x8005 | 0x0000 | true | true | 0x0000 |
//! | CRC-32/ISO-HDLC | 32 | 0x04C11DB7 | 0xFFFFFFFF | true | true | 0xFFFFFFFF |

use crate::params::{CRC16_ARC, CRC32_ISO_HDLC};

// ─────────────────────────────────────────────────────────────────────────────
// CRC-16/ARC Reference Implementation
// ─────────────────────────────────────────────────────────────────────────────

/// CRC-16/ARC using a separate working byte register.
///
/// The low byte of the CRC is combined with the input byte, divided through
/// eight times, then folded back into the shifted high byte.
#[must_use]
pub const fn crc16_arc_reference(data: &[u8]) -> u16 {
  let poly = CRC16_ARC.poly_reflected;
  let mut crc = CRC16_ARC.init;

  let mut rest = data;
  while let [byte, tail @ ..] = rest {
    let mut working = (crc & 0xFF) ^ *byte as u16;
    let mut bit = 0;
    while bit < 8 {
      working = if working & 1 != 0 { (working >> 1) ^ poly } else { working >> 1 };
      bit += 1;
    }
    crc = (crc >> 8) ^ working;
    rest = tail;
  }

  crc ^ CRC16_ARC.xor_out
}

// ─────────────────────────────────────────────────────────────────────────────
// CRC-32/ISO-HDLC Reference Implementation
// ─────────────────────────────────────────────────────────────────────────────

/// CRC-32/ISO-HDLC with an explicit branch per bit and a final bitwise NOT.
#[must_use]
pub const fn crc32_iso_hdlc_reference(data: &[u8]) -> u32 {
  let poly = CRC32_ISO_HDLC.poly_reflected;
  let mut crc = CRC32_ISO_HDLC.init;

  let mut rest = data;
  while let [byte, tail @ ..] = rest {
    crc ^= *byte as u32;
    let mut bit = 0;
    while bit < 8 {
      if crc & 1 != 0 {
        crc = (crc >> 1) ^ poly;
      } else {
        crc >>= 1;
      }
      bit += 1;
    }
    rest = tail;
  }

  !crc
}

// ─────────────────────────────────────────────────────────────────────────────
// Compile-Time Verification
// ─────────────────────────────────────────────────────────────────────────────

/// Standard test input for CRC check values.
const CHECK_INPUT: &[u8] = b"123456789";

const _: () = assert!(crc16_arc_reference(CHECK_INPUT) == CRC16_ARC.check);
const _: () = assert!(crc32_iso_hdlc_reference(CHECK_INPUT) == CRC32_ISO_HDLC.check);

const _: () = assert!(crc16_arc_reference(&[]) == 0x0000);
const _: () = assert!(crc32_iso_hdlc_reference(&[]) == 0x0000_0000);

const _: () = assert!(crc16_arc_reference(&[0xA3, 0x57, 0x11]) == 0x1E0E);
const _: () = assert!(crc32_iso_hdlc_reference(&[0x31, 0x32, 0x33]) == 0x8848_63D2);

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_arc_vectors() {
    assert_eq!(crc16_arc_reference(b"123456789"), 0xBB3D);
    assert_eq!(crc16_arc_reference(b"hello mr cat"), 0x6435);
    assert_eq!(crc16_arc_reference(b"hello martians!"), 0x0D6A);
    assert_eq!(crc16_arc_reference(b"123456789ABCDEF"), 0x1B71);
  }

  #[test]
  fn test_iso_hdlc_vectors() {
    assert_eq!(crc32_iso_hdlc_reference(b"123456789"), 0xCBF4_3926);
    assert_eq!(crc32_iso_hdlc_reference(b"The quick brown fox jumps over the lazy dog"), 0x414F_A339);
  }
}
