use super::*;

/// All of the `IDAT` data seen so far, joined end to end.
///
/// PNG images can split their compressed data over any number of `IDAT`
/// chunks. All of them together form a single zlib data stream, in the order
/// the chunks appear.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct CompressedPayload(Vec<u8>);
impl CompressedPayload {
  /// Makes an empty payload.
  #[inline]
  #[must_use]
  pub const fn new() -> Self {
    Self(Vec::new())
  }

  /// Adds the data of one more `IDAT` chunk to the end.
  #[inline]
  pub fn append(&mut self, data: &[u8]) -> PngResult<()> {
    self.0.try_reserve(data.len())?;
    self.0.extend_from_slice(data);
    Ok(())
  }

  /// The bytes gathered so far.
  #[inline]
  #[must_use]
  pub fn as_bytes(&self) -> &[u8] {
    &self.0
  }

  /// Number of bytes gathered so far.
  #[inline]
  #[must_use]
  pub fn len(&self) -> usize {
    self.0.len()
  }

  /// If no bytes have been gathered.
  #[inline]
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }
}
impl Debug for CompressedPayload {
  #[inline]
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_tuple("CompressedPayload")
      .field(&&self.0[..self.0.len().min(12)])
      .field(&self.0.len())
      .finish()
  }
}

#[test]
fn test_payload_keeps_arrival_order() {
  let mut payload = CompressedPayload::new();
  payload.append(&[1, 2]).unwrap();
  payload.append(&[]).unwrap();
  payload.append(&[3]).unwrap();
  assert_eq!(payload.as_bytes(), &[1, 2, 3]);
  assert_eq!(payload.len(), 3);
}
