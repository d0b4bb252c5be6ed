//! Sequential byte sources for the decoder to read from.
//!
//! The decoder never seeks. All it needs is "fill this buffer, and tell me how
//! much you could actually fill". A count short of the buffer length means the
//! source has run dry.

use crate::PngError;

/// A sequential, seek-free source of bytes.
pub trait ByteSource {
  /// Fills as much of `buf` as the source can.
  ///
  /// Returns the number of bytes written to the front of `buf`. Any count less
  /// than `buf.len()` means the source is exhausted. Errors are only for
  /// failures of the source itself, never for running out of data.
  fn fill(&mut self, buf: &mut [u8]) -> Result<usize, PngError>;
}

impl<S: ByteSource + ?Sized> ByteSource for &mut S {
  #[inline]
  fn fill(&mut self, buf: &mut [u8]) -> Result<usize, PngError> {
    (**self).fill(buf)
  }
}

impl ByteSource for &[u8] {
  #[inline]
  fn fill(&mut self, buf: &mut [u8]) -> Result<usize, PngError> {
    let count = buf.len().min(self.len());
    let (head, tail) = self.split_at(count);
    buf[..count].copy_from_slice(head);
    *self = tail;
    Ok(count)
  }
}

/// Adapts any [`Read`](std::io::Read) type into a [`ByteSource`].
///
/// Interrupted reads are retried, and a zero-byte read is taken as the end of
/// the data.
#[cfg(feature = "std")]
#[cfg_attr(docs_rs, doc(cfg(feature = "std")))]
#[derive(Debug, Clone, Default)]
pub struct IoSource<R>(pub R);
#[cfg(feature = "std")]
impl<R: std::io::Read> ByteSource for IoSource<R> {
  fn fill(&mut self, buf: &mut [u8]) -> Result<usize, PngError> {
    let mut filled = 0;
    while filled < buf.len() {
      match self.0.read(&mut buf[filled..]) {
        Ok(0) => break,
        Ok(n) => filled += n,
        Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
        Err(e) => return Err(PngError::from(e)),
      }
    }
    Ok(filled)
  }
}

#[test]
fn test_slice_source_short_fill() {
  let mut src: &[u8] = &[1, 2, 3];
  let mut buf = [0_u8; 2];
  assert_eq!(src.fill(&mut buf), Ok(2));
  assert_eq!(buf, [1, 2]);
  assert_eq!(src.fill(&mut buf), Ok(1));
  assert_eq!(buf[0], 3);
  assert_eq!(src.fill(&mut buf), Ok(0));
}
