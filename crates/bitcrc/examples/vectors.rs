//! Known-answer table: every built-in vector with its checksum in hex and binary.
//!
//! Run with: `cargo run --example vectors -p bitcrc`
//!
//! Extra arguments are treated as text, converted to character codes, and
//! checksummed with both algorithms.

use bitcrc::{Algorithm, input, vectors};

fn main() {
  println!("{:<16} {:<12} {:<34} {:<44} PASSED", "ALGORITHM", "HEX", "BIN", "DATA");
  println!("{}", "_".repeat(116));

  let mut failures = 0usize;
  for v in vectors::VECTORS {
    let (actual, passed) = match v.run() {
      Ok(actual) => (actual, "passed"),
      Err(mismatch) => {
        failures += 1;
        eprintln!("{mismatch}");
        (mismatch.actual, "failed")
      }
    };
    let digits = usize::from(v.algorithm.width() / 4);
    let bits = usize::from(v.algorithm.width());
    println!(
      "{:<16} 0x{:0digits$x}{:pad$} {:0bits$b}{:bpad$} {:<44} {}",
      v.algorithm.name(),
      actual,
      "",
      actual,
      "",
      v.label,
      passed,
      pad = 10 - digits,
      bpad = 34 - bits,
    );
  }

  let args: Vec<String> = std::env::args().skip(1).collect();
  if !args.is_empty() {
    println!();
    for arg in &args {
      match input::char_codes(arg) {
        Ok(bytes) => {
          for alg in Algorithm::ALL {
            println!("{:<16} 0x{:x}\t{arg}", alg.name(), alg.checksum(&bytes));
          }
        }
        Err(err) => {
          failures += 1;
          eprintln!("{arg:?}: {err}");
        }
      }
    }
  }

  if failures != 0 {
    std::process::exit(1);
  }
}
