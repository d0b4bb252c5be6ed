use core::fmt;

use crate::png::PngChunkType;

/// An error from the `pngload` crate.
///
/// Every error is fatal to the decode that produced it. Nothing decoded before
/// the error is handed back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PngError {
  /// The first 8 bytes were not the PNG signature (or weren't there at all).
  InvalidContainer,

  /// The source ran out of bytes in the middle of a chunk.
  TruncatedChunk {
    /// The chunk being read, if its type tag was already known.
    ty: Option<PngChunkType>,
  },

  /// The CRC stored after a chunk doesn't match the chunk's contents.
  ChecksumMismatch {
    /// The chunk that failed.
    ty: PngChunkType,
    /// The CRC value stored in the chunk trailer.
    declared: u32,
    /// The CRC value computed from the chunk type and data.
    actual: u32,
  },

  /// A chunk with a fixed size declared some other length.
  MalformedFixedLength {
    /// The chunk that failed.
    ty: PngChunkType,
    /// The only length this kind of chunk may have.
    expected: u32,
    /// The declared length.
    found: u32,
  },

  /// The `IEND` chunk declared a non-zero length.
  MalformedTerminalChunk {
    /// The declared length.
    found: u32,
  },

  /// A chunk whose layout depends on its length had a length that doesn't
  /// select any layout.
  InvalidShape {
    /// The chunk that failed.
    ty: PngChunkType,
    /// The declared length.
    found: u32,
  },

  /// The header's color type code isn't one of 0, 2, 3, 4, or 6.
  InvalidColorType(u8),

  /// A chunk declared a length over the format's limit of `2^31 - 1`.
  ChunkTooLong {
    /// The chunk that failed.
    ty: PngChunkType,
  },

  /// The stream ended before any `IEND` chunk.
  ///
  /// Only reported when [`require_iend`](crate::png::PngDecodeConfig) is set.
  MissingTerminalChunk,

  /// An `IDAT` chunk had no data.
  ///
  /// Only reported when
  /// [`reject_empty_idat`](crate::png::PngDecodeConfig) is set.
  EmptyImageData,

  /// The decompressor couldn't be set up.
  DecompressorInitFailed,

  /// The compressed image data is corrupt or incomplete.
  DecompressionStreamError,

  /// The decompressed data would go over the configured limit.
  DecompressedTooLarge,

  /// The allocator couldn't give us enough space.
  OutOfMemory,

  /// The byte source reported an I/O error (other than running out of data).
  #[cfg(feature = "std")]
  Io(std::io::ErrorKind),
}

impl From<alloc::collections::TryReserveError> for PngError {
  #[inline]
  fn from(_: alloc::collections::TryReserveError) -> Self {
    Self::OutOfMemory
  }
}

#[cfg(feature = "std")]
impl From<std::io::Error> for PngError {
  #[inline]
  fn from(e: std::io::Error) -> Self {
    match e.kind() {
      std::io::ErrorKind::UnexpectedEof => Self::TruncatedChunk { ty: None },
      kind => Self::Io(kind),
    }
  }
}

impl fmt::Display for PngError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::InvalidContainer => write!(f, "not a valid PNG file"),
      Self::TruncatedChunk { ty: Some(ty) } => write!(f, "{ty} chunk is truncated"),
      Self::TruncatedChunk { ty: None } => write!(f, "chunk header is truncated"),
      Self::ChecksumMismatch { ty, declared, actual } => {
        write!(f, "{ty} chunk CRC mismatch (declared {declared:08X}, actual {actual:08X})")
      }
      Self::MalformedFixedLength { ty, expected, found } => {
        write!(f, "{ty} chunk must be {expected} bytes, found {found}")
      }
      Self::MalformedTerminalChunk { found } => {
        write!(f, "IEND chunk must be empty, found {found} bytes")
      }
      Self::InvalidShape { ty, found } => write!(f, "{ty} chunk can't be {found} bytes"),
      Self::InvalidColorType(code) => write!(f, "invalid color type {code}"),
      Self::ChunkTooLong { ty } => write!(f, "{ty} chunk declares an illegal length"),
      Self::MissingTerminalChunk => write!(f, "stream ended without an IEND chunk"),
      Self::EmptyImageData => write!(f, "IDAT chunk is empty"),
      Self::DecompressorInitFailed => write!(f, "couldn't initialize the decompressor"),
      Self::DecompressionStreamError => write!(f, "image data is not a valid zlib stream"),
      Self::DecompressedTooLarge => write!(f, "decompressed image data is over the limit"),
      Self::OutOfMemory => write!(f, "out of memory"),
      #[cfg(feature = "std")]
      Self::Io(kind) => write!(f, "I/O error: {kind}"),
    }
  }
}

#[cfg(feature = "std")]
impl std::error::Error for PngError {}

/// Shorthand for a result with a [`PngError`].
pub type PngResult<T> = Result<T, PngError>;
