//! Chunked and parallel checksum computation.
//!
//! The CRC combine operation computes `crc(A || B)` from `crc(A)`, `crc(B)`,
//! and `len(B)` in O(log n) time. This module provides utilities that
//! leverage this property.
//!
//! Users can bring their own parallelism (rayon, `std::thread`, tokio, ...)
//! and use [`combine_checksums`] to merge per-chunk results. With the `std`
//! feature, [`checksum_threaded`] does the split/compute/combine itself on
//! scoped threads.
//!
//! # Example: Manual Parallelism
//!
//! ```
//! use bitcrc::{Checksum, Crc32IsoHdlc, parallel::checksum_chunks};
//!
//! let data = b"The quick brown fox jumps over the lazy dog";
//! let chunks: Vec<&[u8]> = data.chunks(16).collect();
//!
//! // Sequential combination (works everywhere including no_std)
//! let crc = checksum_chunks::<Crc32IsoHdlc>(&chunks);
//! assert_eq!(crc, Crc32IsoHdlc::checksum(data));
//! ```

use traits::ChecksumCombine;

/// Compute checksum over multiple chunks by combining their individual checksums.
///
/// # Complexity
///
/// - Checksum computation: O(total_bytes)
/// - Combine operations: O(n × log(max_chunk_len)) where n = number of chunks
///
/// # Empty Input
///
/// Returns the checksum of empty data.
///
/// ```
/// use bitcrc::{Checksum, Crc16Arc, parallel::checksum_chunks};
///
/// let empty: &[&[u8]] = &[];
/// assert_eq!(checksum_chunks::<Crc16Arc>(empty), Crc16Arc::checksum(b""));
/// ```
#[inline]
pub fn checksum_chunks<C: ChecksumCombine>(chunks: &[&[u8]]) -> C::Output {
  let Some((first, rest)) = chunks.split_first() else {
    return C::checksum(&[]);
  };

  let mut result = C::checksum(first);
  for chunk in rest {
    let chunk_crc = C::checksum(chunk);
    result = C::combine(result, chunk_crc, chunk.len());
  }

  result
}

/// Combine pre-computed checksums into a single checksum.
///
/// # Arguments
///
/// * `checksums` - Slice of (checksum, chunk_length) pairs in order
///
/// # Example
///
/// ```
/// use bitcrc::{Checksum, Crc16Arc, parallel::combine_checksums};
///
/// let data = b"hello martians!";
/// let (a, b) = data.split_at(6);
///
/// // Compute separately (could be in parallel)
/// let checksums = [(Crc16Arc::checksum(a), a.len()), (Crc16Arc::checksum(b), b.len())];
///
/// assert_eq!(combine_checksums::<Crc16Arc>(&checksums), 0x0D6A);
/// ```
#[inline]
pub fn combine_checksums<C: ChecksumCombine>(checksums: &[(C::Output, usize)]) -> C::Output {
  let Some((&(first, _), rest)) = checksums.split_first() else {
    return C::checksum(&[]);
  };

  rest
    .iter()
    .fold(first, |acc, &(crc, len)| C::combine(acc, crc, len))
}

/// Checksum `data` on scoped threads and combine the partial results in order.
///
/// `chunk_len` is the minimum slice handed to a worker. The number of workers
/// never exceeds [`std::thread::available_parallelism`] (one if unknown), so
/// each worker gets a single contiguous slice of at least `chunk_len` bytes.
/// A `chunk_len` of zero is treated as "one chunk". The result always equals
/// `C::checksum(data)`.
///
/// ```
/// use bitcrc::{Checksum, Crc32IsoHdlc, parallel::checksum_threaded};
///
/// let data = vec![0x5A_u8; 10_000];
/// assert_eq!(checksum_threaded::<Crc32IsoHdlc>(&data, 1024), Crc32IsoHdlc::checksum(&data));
/// ```
#[cfg(feature = "std")]
pub fn checksum_threaded<C>(data: &[u8], chunk_len: usize) -> C::Output
where
  C: ChecksumCombine,
  C::Output: Send,
{
  use alloc::vec::Vec;

  let workers = std::thread::available_parallelism().map_or(1, core::num::NonZeroUsize::get);
  let slice_len = worker_slice_len(data.len(), chunk_len, workers);
  if data.len() <= slice_len {
    return C::checksum(data);
  }

  let partials: Vec<(C::Output, usize)> = std::thread::scope(|scope| {
    let handles: Vec<_> = data
      .chunks(slice_len)
      .map(|slice| scope.spawn(move || (C::checksum(slice), slice.len())))
      .collect();

    handles
      .into_iter()
      .map(|handle| handle.join().unwrap_or_else(|payload| std::panic::resume_unwind(payload)))
      .collect()
  });

  combine_checksums::<C>(&partials)
}

/// Slice length giving at most `workers` slices of at least `chunk_len` bytes.
#[cfg(feature = "std")]
fn worker_slice_len(len: usize, chunk_len: usize, workers: usize) -> usize {
  if chunk_len == 0 {
    return len;
  }
  chunk_len.max(len.div_ceil(workers.max(1)))
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{Crc16Arc, Crc32IsoHdlc};

  #[test]
  fn test_checksum_chunks() {
    let data = b"123456789ABCDEF";
    for size in 1..=data.len() {
      let chunks: alloc::vec::Vec<&[u8]> = data.chunks(size).collect();
      assert_eq!(checksum_chunks::<Crc16Arc>(&chunks), 0x1B71, "chunk size {size}");
    }
  }

  #[test]
  fn test_combine_checksums_single() {
    let crc = Crc32IsoHdlc::checksum(b"123");
    assert_eq!(combine_checksums::<Crc32IsoHdlc>(&[(crc, 3)]), crc);
  }

  #[test]
  fn test_combine_checksums_empty() {
    assert_eq!(combine_checksums::<Crc32IsoHdlc>(&[]), 0);
  }

  #[cfg(feature = "std")]
  #[test]
  fn test_threaded_matches_oneshot() {
    let data: alloc::vec::Vec<u8> = (0..5000u32).map(|i| (i * 31 % 251) as u8).collect();
    for chunk_len in [0, 64, 1000, 4999, 5000, 6000] {
      assert_eq!(
        checksum_threaded::<Crc16Arc>(&data, chunk_len),
        Crc16Arc::checksum(&data),
        "chunk_len={chunk_len}"
      );
      assert_eq!(
        checksum_threaded::<Crc32IsoHdlc>(&data, chunk_len),
        Crc32IsoHdlc::checksum(&data),
        "chunk_len={chunk_len}"
      );
    }
  }

  #[cfg(feature = "std")]
  #[test]
  fn test_threaded_many_more_chunks_than_cores() {
    let data = alloc::vec![0x5A_u8; 200_000];
    assert_eq!(checksum_threaded::<Crc32IsoHdlc>(&data, 1), Crc32IsoHdlc::checksum(&data));
    assert_eq!(checksum_threaded::<Crc16Arc>(&data, 1), Crc16Arc::checksum(&data));
  }

  #[cfg(feature = "std")]
  #[test]
  fn test_worker_slice_len_bounds_slice_count() {
    for (len, chunk_len, workers) in [(200_000, 1, 8), (200_000, 1, 1), (10, 3, 64), (7, 1, 3), (0, 1, 4)] {
      let slice_len = worker_slice_len(len, chunk_len, workers);
      assert!(slice_len >= chunk_len);
      assert!(len.div_ceil(slice_len.max(1)) <= workers, "len={len} chunk_len={chunk_len} workers={workers}");
    }
    assert_eq!(worker_slice_len(100, 0, 8), 100);
    assert_eq!(worker_slice_len(100, 1, 0), 100);
  }

  #[cfg(feature = "std")]
  #[test]
  fn test_threaded_byte_chunks() {
    assert_eq!(checksum_threaded::<Crc32IsoHdlc>(b"123", 1), 0x8848_63D2);
  }
}
