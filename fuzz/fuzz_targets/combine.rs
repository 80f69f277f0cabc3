//! Fuzz target for CRC combine operations.
//!
//! Tests combine correctness over an arbitrary chain of splits.

#![no_main]

use arbitrary::Arbitrary;
use bitcrc::{ChecksumCombine, Crc16Arc, Crc32IsoHdlc, parallel};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
  data: Vec<u8>,
  splits: Vec<usize>,
}

fuzz_target!(|input: Input| {
  let data = &input.data;

  // Normalize splits to valid range and sort
  let mut splits: Vec<usize> = input.splits.iter().map(|s| s % (data.len() + 1)).collect();
  splits.sort();
  splits.dedup();

  let mut chunks = Vec::new();
  let mut prev = 0;
  for &split in &splits {
    chunks.push(&data[prev..split]);
    prev = split;
  }
  chunks.push(&data[prev..]);

  check_chain::<Crc16Arc>(data, &chunks, "crc16");
  check_chain::<Crc32IsoHdlc>(data, &chunks, "crc32");
});

fn check_chain<C: ChecksumCombine>(data: &[u8], chunks: &[&[u8]], name: &str) {
  let expected = C::checksum(data);

  assert_eq!(parallel::checksum_chunks::<C>(chunks), expected, "{name} chunk chain mismatch");

  let partials: Vec<(C::Output, usize)> = chunks.iter().map(|c| (C::checksum(c), c.len())).collect();
  assert_eq!(parallel::combine_checksums::<C>(&partials), expected, "{name} combine_checksums mismatch");
}
