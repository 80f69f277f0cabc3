//! Fuzz target for the byte-input boundary.
//!
//! Tests that:
//! - Validation accepts exactly the values in 0..=255
//! - A validated input checksums identically to its byte slice
//! - Rejection names the first offending element

#![no_main]

use bitcrc::input;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|values: Vec<i32>| {
  let first_bad = values.iter().position(|v| !(0..=255).contains(v));

  match (input::to_bytes(&values), first_bad) {
    (Ok(bytes), None) => {
      assert_eq!(input::try_compute16(&values), Ok(bitcrc::compute16(&bytes)));
      assert_eq!(input::try_compute32(&values), Ok(bitcrc::compute32(&bytes)));
    }
    (Err(err), Some(idx)) => {
      assert_eq!(err.index(), idx);
      assert_eq!(err.value(), i128::from(values[idx]));
      assert_eq!(input::try_compute32(&values), Err(err));
    }
    (result, expected) => panic!("validation disagreed: {result:?} vs first bad {expected:?}"),
  }
});
