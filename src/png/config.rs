use super::*;

/// Options for a decode.
///
/// The defaults are lenient: the stream may end without an `IEND` chunk, and
/// empty `IDAT` chunks are allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PngDecodeConfig {
  /// If running out of data before an `IEND` chunk is an error.
  ///
  /// When this is `false` the stream just ends, and no decompression happens
  /// (there's no `IEND` to trigger it).
  pub require_iend: bool,
  /// If a zero length `IDAT` chunk is an error.
  pub reject_empty_idat: bool,
  /// Starting size of the decompression output buffer. It doubles as needed.
  pub initial_inflate_capacity: usize,
  /// The most decompressed bytes allowed, if there's a limit.
  pub max_decompressed_len: Option<usize>,
}
impl PngDecodeConfig {
  /// The default starting size of the decompression buffer, 1 MiB.
  pub const DEFAULT_INFLATE_CAPACITY: usize = 1024 * 1024;

  /// The default config.
  #[inline]
  #[must_use]
  pub const fn new() -> Self {
    Self {
      require_iend: false,
      reject_empty_idat: false,
      initial_inflate_capacity: Self::DEFAULT_INFLATE_CAPACITY,
      max_decompressed_len: None,
    }
  }

  /// Sets [`require_iend`](Self::require_iend).
  #[inline]
  #[must_use]
  pub const fn with_require_iend(self, require_iend: bool) -> Self {
    Self { require_iend, ..self }
  }

  /// Sets [`reject_empty_idat`](Self::reject_empty_idat).
  #[inline]
  #[must_use]
  pub const fn with_reject_empty_idat(self, reject_empty_idat: bool) -> Self {
    Self { reject_empty_idat, ..self }
  }

  /// Sets [`initial_inflate_capacity`](Self::initial_inflate_capacity).
  #[inline]
  #[must_use]
  pub const fn with_initial_inflate_capacity(self, initial_inflate_capacity: usize) -> Self {
    Self { initial_inflate_capacity, ..self }
  }

  /// Sets [`max_decompressed_len`](Self::max_decompressed_len).
  #[inline]
  #[must_use]
  pub const fn with_max_decompressed_len(self, max_decompressed_len: Option<usize>) -> Self {
    Self { max_decompressed_len, ..self }
  }
}
impl Default for PngDecodeConfig {
  #[inline]
  fn default() -> Self {
    Self::new()
  }
}
