use super::*;

/// The types of color that PNG supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum PngColorType {
  /// Greyscale
  Y = 0,
  /// Red, Green, Blue
  RGB = 2,
  /// Index into a palette.
  ///
  /// The palette will have RGB8 data. There may optionally be a transparency
  /// chunk.
  Index = 3,
  /// Greyscale + Alpha
  YA = 4,
  /// Red, Green, Blue, Alpha
  RGBA = 6,
}
impl PngColorType {
  /// The number of channels in this type of color.
  #[inline]
  #[must_use]
  pub const fn channel_count(self) -> u32 {
    match self {
      Self::Y => 1,
      Self::RGB => 3,
      Self::Index => 1,
      Self::YA => 2,
      Self::RGBA => 4,
    }
  }

  /// A human readable name.
  #[inline]
  #[must_use]
  pub const fn name(self) -> &'static str {
    match self {
      Self::Y => "Grayscale",
      Self::RGB => "Truecolor (RGB)",
      Self::Index => "Indexed-color (Palette)",
      Self::YA => "Grayscale with alpha",
      Self::RGBA => "Truecolor with alpha (RGBA)",
    }
  }
}
impl TryFrom<u8> for PngColorType {
  type Error = PngError;
  #[inline]
  fn try_from(value: u8) -> Result<Self, Self::Error> {
    Ok(match value {
      0 => PngColorType::Y,
      2 => PngColorType::RGB,
      3 => PngColorType::Index,
      4 => PngColorType::YA,
      6 => PngColorType::RGBA,
      _ => return Err(PngError::InvalidColorType(value)),
    })
  }
}

/// `IHDR`: Image header
///
/// See [IHDR](https://www.w3.org/TR/png/#11IHDR)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IHDR {
  /// width in pixels
  pub width: u32,
  /// height in pixels
  pub height: u32,
  /// bits per channel (or per index, for indexed color)
  pub bit_depth: u8,
  /// pixel color type
  pub color_type: PngColorType,
  /// Should always be 0 (zlib deflate).
  pub compression_method: u8,
  /// Should always be 0 (adaptive filtering).
  pub filter_method: u8,
  /// 0 for no interlacing, 1 for Adam7.
  pub interlace_method: u8,
}
impl IHDR {
  /// The number of channels per pixel, from the color type.
  #[inline]
  #[must_use]
  pub const fn channel_count(&self) -> u32 {
    self.color_type.channel_count()
  }

  /// If the image data is stored interlaced.
  #[inline]
  #[must_use]
  pub const fn is_interlaced(&self) -> bool {
    self.interlace_method != 0
  }
}
impl TryFrom<&[u8]> for IHDR {
  type Error = PngError;
  #[inline]
  fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
    match *value {
      [w0, w1, w2, w3, h0, h1, h2, h3, bit_depth, color_type, compression_method, filter_method, interlace_method] => {
        Ok(Self {
          width: u32::from_be_bytes([w0, w1, w2, w3]),
          height: u32::from_be_bytes([h0, h1, h2, h3]),
          bit_depth,
          color_type: PngColorType::try_from(color_type)?,
          compression_method,
          filter_method,
          interlace_method,
        })
      }
      _ => Err(PngError::MalformedFixedLength {
        ty: PngChunkType::IHDR,
        expected: 13,
        found: value.len() as u32,
      }),
    }
  }
}
impl core::fmt::Display for IHDR {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    writeln!(f, "\tWidth: {}", self.width)?;
    writeln!(f, "\tHeight: {}", self.height)?;
    writeln!(f, "\tChannels: {}", self.channel_count())?;
    writeln!(f, "\tBit Depth: {}", self.bit_depth)?;
    writeln!(f, "\tColor Type: {}", self.color_type.name())?;
    writeln!(f, "\tCompression Method: {}", self.compression_method)?;
    writeln!(f, "\tFilter Method: {}", self.filter_method)?;
    writeln!(f, "\tInterlace Method: {}", self.interlace_method)
  }
}

#[test]
fn test_ihdr_channel_counts() {
  for (code, channels) in [(0, 1), (2, 3), (3, 1), (4, 2), (6, 4)] {
    let data = [0, 0, 0, 1, 0, 0, 0, 1, 8, code, 0, 0, 0];
    assert_eq!(IHDR::try_from(&data[..]).unwrap().channel_count(), channels);
  }
  for code in [1, 5, 7, 255] {
    let data = [0, 0, 0, 1, 0, 0, 0, 1, 8, code, 0, 0, 0];
    assert_eq!(IHDR::try_from(&data[..]), Err(PngError::InvalidColorType(code)));
  }
}

#[test]
fn test_ihdr_fields_are_big_endian() {
  let data = [0, 0, 1, 0, 0, 0, 0, 200, 16, 6, 0, 0, 1];
  let ihdr = IHDR::try_from(&data[..]).unwrap();
  assert_eq!(ihdr.width, 256);
  assert_eq!(ihdr.height, 200);
  assert_eq!(ihdr.bit_depth, 16);
  assert_eq!(ihdr.color_type, PngColorType::RGBA);
  assert!(ihdr.is_interlaced());
}
