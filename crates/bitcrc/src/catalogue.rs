//! Algorithm catalogue for introspection.
//!
//! Each supported algorithm renders as a CRC RevEng catalogue line, which is
//! the most useful thing to print when a checksum disagrees with another
//! implementation.
//!
//! ```
//! use bitcrc::Algorithm;
//!
//! for alg in Algorithm::ALL {
//!   println!("{alg}");
//! }
//!
//! assert_eq!(
//!   Algorithm::Crc16Arc.to_string(),
//!   "width=16 poly=0x8005 init=0x0000 refin=true refout=true xorout=0x0000 check=0xbb3d residue=0x0000 name=\"CRC-16/ARC\""
//! );
//! ```

use core::fmt;

use crate::{
  engine,
  params::{CRC16_ARC, CRC32_ISO_HDLC, CrcParams},
  register::Register,
};

/// A supported CRC algorithm.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
  /// CRC-16/ARC.
  Crc16Arc,
  /// CRC-32/ISO-HDLC.
  Crc32IsoHdlc,
}

impl Algorithm {
  /// Every supported algorithm, narrowest first.
  pub const ALL: [Self; 2] = [Self::Crc16Arc, Self::Crc32IsoHdlc];

  /// Catalogue name.
  #[inline]
  #[must_use]
  pub const fn name(self) -> &'static str {
    match self {
      Self::Crc16Arc => CRC16_ARC.name,
      Self::Crc32IsoHdlc => CRC32_ISO_HDLC.name,
    }
  }

  /// Register width in bits.
  #[inline]
  #[must_use]
  pub const fn width(self) -> u8 {
    match self {
      Self::Crc16Arc => CRC16_ARC.width,
      Self::Crc32IsoHdlc => CRC32_ISO_HDLC.width,
    }
  }

  /// Compute the checksum of `data`, zero-extended to `u64`.
  #[inline]
  #[must_use]
  pub fn checksum(self, data: &[u8]) -> u64 {
    match self {
      Self::Crc16Arc => u64::from(engine::checksum(&CRC16_ARC, data)),
      Self::Crc32IsoHdlc => u64::from(engine::checksum(&CRC32_ISO_HDLC, data)),
    }
  }

  /// Look an algorithm up by catalogue name or a common alias (case-insensitive).
  #[must_use]
  pub fn from_name(name: &str) -> Option<Self> {
    const ALIASES: [(&str, Algorithm); 7] = [
      ("CRC-16/ARC", Algorithm::Crc16Arc),
      ("ARC", Algorithm::Crc16Arc),
      ("CRC-16/IBM", Algorithm::Crc16Arc),
      ("CRC-16/LHA", Algorithm::Crc16Arc),
      ("CRC-32/ISO-HDLC", Algorithm::Crc32IsoHdlc),
      ("CRC-32", Algorithm::Crc32IsoHdlc),
      ("CRC-32/ADCCP", Algorithm::Crc32IsoHdlc),
    ];

    ALIASES
      .iter()
      .find(|(alias, _)| alias.eq_ignore_ascii_case(name))
      .map(|&(_, alg)| alg)
  }
}

impl fmt::Display for Algorithm {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Crc16Arc => write_params(f, &CRC16_ARC),
      Self::Crc32IsoHdlc => write_params(f, &CRC32_ISO_HDLC),
    }
  }
}

fn write_params<R: Register>(f: &mut fmt::Formatter<'_>, p: &CrcParams<R>) -> fmt::Result {
  let digits = usize::from(p.width / 4);
  write!(
    f,
    "width={} poly=0x{:0w$x} init=0x{:0w$x} refin={} refout={} xorout=0x{:0w$x} check=0x{:0w$x} residue=0x{:0w$x} name=\"{}\"",
    p.width,
    p.poly,
    p.init,
    CrcParams::<R>::REFLECT_IN,
    CrcParams::<R>::REFLECT_OUT,
    p.xor_out,
    p.check,
    p.residue,
    p.name,
    w = digits,
  )
}
