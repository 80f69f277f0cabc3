//! GF(2) matrix operations for CRC combination.
//!
//! When you have `crc(A)` and `crc(B)`, you can compute `crc(A || B)` without
//! reprocessing `A`. This is done in O(W² log n) time using matrix
//! exponentiation over GF(2).
//!
//! # Mathematical Background
//!
//! Folding `n` zero bytes into a raw register is a linear map `L_n`. Folding
//! arbitrary bytes is affine: `fold(r, B) = L_|B|(r) ^ fold(0, B)`. Writing
//! the final value as `crc(X) = fold(init, X) ^ xor_out` gives
//!
//! ```text
//! crc(A || B) = L_|B|(crc(A) ^ xor_out ^ init) ^ crc(B)
//! ```
//!
//! For both supported variants `init == xor_out`, so the correction term
//! cancels, but it is applied anyway.

use crate::{params::CrcParams, register::Register};

/// Largest supported register width.
const MAX_WIDTH: usize = 32;

// ─────────────────────────────────────────────────────────────────────────────
// GF(2) Matrix
// ─────────────────────────────────────────────────────────────────────────────

/// A `W x W` GF(2) matrix stored as `W` column registers.
///
/// Column `i` is the image of the unit vector with bit `i` set. Only the
/// first `R::WIDTH` columns are meaningful.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Gf2Matrix<R> {
  cols: [R; MAX_WIDTH],
}

impl<R: Register> Gf2Matrix<R> {
  /// The operator that folds a single zero bit into a reflected register.
  ///
  /// Bit 0 of the input triggers the polynomial; every other bit `j`
  /// moves to `j - 1`.
  #[must_use]
  pub(crate) fn shift1(poly_reflected: R) -> Self {
    let mut cols = [R::ZERO; MAX_WIDTH];
    for (j, col) in cols.iter_mut().enumerate().take(R::WIDTH as usize) {
      *col = match j {
        0 => poly_reflected,
        _ => R::bit(j as u32 - 1),
      };
    }
    Self { cols }
  }

  /// The operator that folds one zero byte: `shift1^8`.
  #[must_use]
  pub(crate) fn shift8(poly_reflected: R) -> Self {
    Self::shift1(poly_reflected).square().square().square()
  }

  /// Multiply matrix by a vector.
  #[inline]
  #[must_use]
  pub(crate) fn mul_vec(&self, vec: R) -> R {
    self
      .cols
      .iter()
      .take(R::WIDTH as usize)
      .enumerate()
      .filter(|&(i, _)| vec.is_set(i as u32))
      .fold(R::ZERO, |acc, (_, &col)| acc ^ col)
  }

  /// Multiply two matrices (`self * other`).
  #[must_use]
  pub(crate) fn mul_mat(&self, other: &Self) -> Self {
    let mut cols = [R::ZERO; MAX_WIDTH];
    for (dst, &src) in cols.iter_mut().zip(other.cols.iter()).take(R::WIDTH as usize) {
      *dst = self.mul_vec(src);
    }
    Self { cols }
  }

  /// Square the matrix.
  #[inline]
  #[must_use]
  pub(crate) fn square(&self) -> Self {
    self.mul_mat(self)
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Combine
// ─────────────────────────────────────────────────────────────────────────────

/// Advance a raw register past `len` zero bytes.
#[must_use]
pub(crate) fn shift_zeros<R: Register>(params: &CrcParams<R>, crc: R, len: usize) -> R {
  let mut op = Gf2Matrix::shift8(params.poly_reflected);
  let mut crc = crc;
  let mut n = len;
  while n != 0 {
    if n & 1 != 0 {
      crc = op.mul_vec(crc);
    }
    n >>= 1;
    if n != 0 {
      op = op.square();
    }
  }
  crc
}

/// Combine two finalized CRCs: `crc(A || B)` from `crc(A)`, `crc(B)`, `len(B)`.
#[must_use]
pub(crate) fn combine<R: Register>(params: &CrcParams<R>, crc_a: R, crc_b: R, len_b: usize) -> R {
  shift_zeros(params, crc_a ^ params.xor_out ^ params.init, len_b) ^ crc_b
}
