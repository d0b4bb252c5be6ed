use super::*;

/// `bKGD`: Background colour
///
/// Gives an intended background color for the image. Which variant you get
/// depends only on the chunk's length: 1 byte is a palette index, 6 bytes is
/// an RGB color. RGB colors are always given as `u16` values, the actual color
/// should stay within the bit depth range of the rest of the image.
///
/// See [bKGD](https://www.w3.org/TR/png/#11bKGD)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(nonstandard_style)]
#[allow(missing_docs)]
pub enum bKGD {
  Index { i: u8 },
  RGB { r: u16, g: u16, b: u16 },
}
impl TryFrom<&[u8]> for bKGD {
  type Error = PngError;
  #[inline]
  fn try_from(slice: &[u8]) -> Result<Self, Self::Error> {
    Ok(match *slice {
      [i] => bKGD::Index { i },
      [r0, r1, g0, g1, b0, b1] => bKGD::RGB {
        r: u16::from_be_bytes([r0, r1]),
        g: u16::from_be_bytes([g0, g1]),
        b: u16::from_be_bytes([b0, b1]),
      },
      _ => {
        return Err(PngError::InvalidShape { ty: PngChunkType::bKGD, found: slice.len() as u32 })
      }
    })
  }
}
impl core::fmt::Display for bKGD {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    match self {
      Self::Index { i } => writeln!(f, "\tBackground Color Index: {i}"),
      Self::RGB { r, g, b } => writeln!(f, "\tBackground Color: R: {r}, G: {g}, B: {b}"),
    }
  }
}

#[test]
fn test_bkgd_shape_follows_length() {
  assert_eq!(bKGD::try_from(&[7][..]), Ok(bKGD::Index { i: 7 }));
  assert_eq!(
    bKGD::try_from(&[0, 1, 1, 0, 0xFF, 0xFF][..]),
    Ok(bKGD::RGB { r: 1, g: 256, b: u16::MAX })
  );
  for len in [0_usize, 2, 3, 5, 7] {
    let data = [0_u8; 8];
    assert_eq!(
      bKGD::try_from(&data[..len]),
      Err(PngError::InvalidShape { ty: PngChunkType::bKGD, found: len as u32 })
    );
  }
}
