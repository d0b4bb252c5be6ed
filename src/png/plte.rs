use super::*;

/// `PLTE`: Palette
///
/// Palette entries are always RGB, 8 bits per channel.
///
/// If you want to have a paletted image with transparency then the transparency
/// info goes in a separate transparency chunk.
#[derive(Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PLTE(pub Vec<RGB8>);
impl PLTE {
  /// Gets the entries as a slice.
  #[inline]
  #[must_use]
  pub fn entries(&self) -> &[RGB8] {
    &self.0
  }
}
impl From<&[u8]> for PLTE {
  /// Any partial entry left over at the end of the data is ignored.
  #[inline]
  fn from(data: &[u8]) -> Self {
    let whole = data.len() - (data.len() % 3);
    if whole != data.len() {
      log::warn!("PLTE chunk is {} bytes, ignoring the partial entry at the end", data.len());
    }
    // RGB8 is three bytes with align 1, so any multiple of 3 bytes casts
    Self(bytemuck::cast_slice::<u8, RGB8>(&data[..whole]).to_vec())
  }
}
impl Debug for PLTE {
  #[inline]
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    // currently prints no more than 4 palette entries
    f.debug_tuple("PLTE").field(&&self.0[..self.0.len().min(4)]).field(&self.0.len()).finish()
  }
}

#[test]
fn test_plte_entries() {
  let plte = PLTE::from(&[1, 2, 3, 4, 5, 6][..]);
  assert_eq!(plte.entries(), &[RGB8 { r: 1, g: 2, b: 3 }, RGB8 { r: 4, g: 5, b: 6 }]);
  let ragged = PLTE::from(&[1, 2, 3, 4][..]);
  assert_eq!(ragged.entries(), &[RGB8 { r: 1, g: 2, b: 3 }]);
  assert!(PLTE::from(&[][..]).entries().is_empty());
}
