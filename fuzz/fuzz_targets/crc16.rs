//! Fuzz target for CRC-16/ARC.
//!
//! Tests that:
//! - No panics on arbitrary input
//! - Generic and reference paths agree
//! - A message followed by its own CRC checksums to the residue
//! - Combine reproduces the one-shot result
//! - The table-driven `crc` crate agrees

#![no_main]

use arbitrary::Arbitrary;
use bitcrc::{CRC16_ARC, Crc16Arc, reference};
use libfuzzer_sys::fuzz_target;

const ARC: crc::Crc<u16> = crc::Crc::<u16>::new(&crc::CRC_16_ARC);

#[derive(Arbitrary, Debug)]
struct Input {
  data: Vec<u8>,
  split_point: usize,
}

fuzz_target!(|input: Input| {
  let data = &input.data;
  let split = input.split_point % (data.len() + 1);

  let oneshot = bitcrc::compute16(data);
  assert_eq!(oneshot, reference::crc16_arc_reference(data), "crc16 reference mismatch");
  assert_eq!(oneshot, ARC.checksum(data), "crc16 crc-crate mismatch");

  let mut codeword = data.clone();
  codeword.extend_from_slice(&oneshot.to_le_bytes());
  assert_eq!(bitcrc::compute16(&codeword), CRC16_ARC.residue() ^ CRC16_ARC.xor_out(), "crc16 residue mismatch");

  let (a, b) = data.split_at(split);
  let combined = Crc16Arc::combine(Crc16Arc::checksum(a), Crc16Arc::checksum(b), b.len());
  assert_eq!(oneshot, combined, "crc16 combine mismatch");
});
