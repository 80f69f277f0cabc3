//! Fuzz target for CRC-32/ISO-HDLC.
//!
//! Tests that:
//! - No panics on arbitrary input
//! - Generic and reference paths agree
//! - A message followed by its own CRC checksums to the residue
//! - Combine reproduces the one-shot result
//! - The table-driven `crc` crate agrees

#![no_main]

use arbitrary::Arbitrary;
use bitcrc::{CRC32_ISO_HDLC, Crc32IsoHdlc, reference};
use libfuzzer_sys::fuzz_target;

const ISO_HDLC: crc::Crc<u32> = crc::Crc::<u32>::new(&crc::CRC_32_ISO_HDLC);

#[derive(Arbitrary, Debug)]
struct Input {
  data: Vec<u8>,
  split_point: usize,
}

fuzz_target!(|input: Input| {
  let data = &input.data;
  let split = input.split_point % (data.len() + 1);

  let oneshot = bitcrc::compute32(data);
  assert_eq!(oneshot, reference::crc32_iso_hdlc_reference(data), "crc32 reference mismatch");
  assert_eq!(oneshot, ISO_HDLC.checksum(data), "crc32 crc-crate mismatch");

  let mut codeword = data.clone();
  codeword.extend_from_slice(&oneshot.to_le_bytes());
  assert_eq!(bitcrc::compute32(&codeword), CRC32_ISO_HDLC.residue() ^ CRC32_ISO_HDLC.xor_out(), "crc32 residue mismatch");

  let (a, b) = data.split_at(split);
  let combined = Crc32IsoHdlc::combine(Crc32IsoHdlc::checksum(a), Crc32IsoHdlc::checksum(b), b.len());
  assert_eq!(oneshot, combined, "crc32 combine mismatch");
});
