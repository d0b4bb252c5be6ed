use super::*;

/// The four byte type tag of a PNG chunk.
///
/// Case is significant. Bit 5 of each byte (lowercase vs uppercase) carries a
/// property of the chunk, which this crate only reports and never acts on.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct PngChunkType(pub AsciiArray<4>);
#[allow(nonstandard_style)]
#[allow(missing_docs)]
impl PngChunkType {
  pub const IHDR: Self = Self::new(*b"IHDR");
  pub const PLTE: Self = Self::new(*b"PLTE");
  pub const IDAT: Self = Self::new(*b"IDAT");
  pub const IEND: Self = Self::new(*b"IEND");
  pub const tRNS: Self = Self::new(*b"tRNS");
  pub const cHRM: Self = Self::new(*b"cHRM");
  pub const gAMA: Self = Self::new(*b"gAMA");
  pub const iCCP: Self = Self::new(*b"iCCP");
  pub const sBIT: Self = Self::new(*b"sBIT");
  pub const sRGB: Self = Self::new(*b"sRGB");
  pub const cICP: Self = Self::new(*b"cICP");
  pub const tEXt: Self = Self::new(*b"tEXt");
  pub const zTXt: Self = Self::new(*b"zTXt");
  pub const iTXt: Self = Self::new(*b"iTXt");
  pub const bKGD: Self = Self::new(*b"bKGD");
  pub const hIST: Self = Self::new(*b"hIST");
  pub const pHYs: Self = Self::new(*b"pHYs");
  pub const sPLT: Self = Self::new(*b"sPLT");
  pub const sTER: Self = Self::new(*b"sTER");
  pub const eXIf: Self = Self::new(*b"eXIf");
  pub const tIME: Self = Self::new(*b"tIME");
  pub const dSIG: Self = Self::new(*b"dSIG");
}
impl PngChunkType {
  /// Wraps four tag bytes.
  #[inline]
  #[must_use]
  pub const fn new(bytes: [u8; 4]) -> Self {
    Self(AsciiArray(bytes))
  }

  /// The tag bytes.
  #[inline]
  #[must_use]
  pub const fn to_bytes(self) -> [u8; 4] {
    self.0 .0
  }

  /// Critical chunks (uppercase first letter) are needed to display the image.
  #[inline]
  #[must_use]
  pub const fn is_critical(self) -> bool {
    (self.0 .0[0] & 0x20) == 0
  }

  /// Public chunks (uppercase second letter) are part of the PNG standard.
  #[inline]
  #[must_use]
  pub const fn is_public(self) -> bool {
    (self.0 .0[1] & 0x20) == 0
  }

  /// The third letter is reserved and should always be uppercase.
  #[inline]
  #[must_use]
  pub const fn is_reserved_bit_valid(self) -> bool {
    (self.0 .0[2] & 0x20) == 0
  }

  /// Safe-to-copy chunks (lowercase last letter) can be kept by editors that
  /// don't understand them, even after the image data changes.
  #[inline]
  #[must_use]
  pub const fn is_safe_to_copy(self) -> bool {
    (self.0 .0[3] & 0x20) != 0
  }
}
impl Debug for PngChunkType {
  #[inline]
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    Debug::fmt(&self.0, f)
  }
}
impl core::fmt::Display for PngChunkType {
  #[inline]
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    core::fmt::Display::fmt(&self.0, f)
  }
}
impl From<[u8; 4]> for PngChunkType {
  #[inline]
  fn from(bytes: [u8; 4]) -> Self {
    Self::new(bytes)
  }
}

/// Every kind of chunk that the decoder knows how to check.
///
/// Chunks with any other type tag are still framed correctly and skipped, but
/// their CRC isn't checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(nonstandard_style)]
pub enum PngChunkKind {
  /// Image header
  IHDR,
  /// Palette
  PLTE,
  /// Image data
  IDAT,
  /// Image trailer
  IEND,
  /// Transparency
  tRNS,
  /// Primary chromaticities and white point
  cHRM,
  /// Image gamma
  gAMA,
  /// Embedded ICC profile
  iCCP,
  /// Significant bits
  sBIT,
  /// Standard RGB colour space
  sRGB,
  /// Coding-independent code points
  cICP,
  /// Textual data
  tEXt,
  /// Compressed textual data
  zTXt,
  /// International textual data
  iTXt,
  /// Background colour
  bKGD,
  /// Image histogram
  hIST,
  /// Physical pixel dimensions
  pHYs,
  /// Suggested palette
  sPLT,
  /// Stereo image indicator
  sTER,
  /// Exchangeable image file profile
  eXIf,
  /// Image last-modification time
  tIME,
  /// Digital signature
  dSIG,
}
impl PngChunkKind {
  /// The tag to kind lookup table.
  pub const KNOWN: [(PngChunkType, PngChunkKind); 22] = [
    (PngChunkType::IHDR, PngChunkKind::IHDR),
    (PngChunkType::PLTE, PngChunkKind::PLTE),
    (PngChunkType::IDAT, PngChunkKind::IDAT),
    (PngChunkType::IEND, PngChunkKind::IEND),
    (PngChunkType::tRNS, PngChunkKind::tRNS),
    (PngChunkType::cHRM, PngChunkKind::cHRM),
    (PngChunkType::gAMA, PngChunkKind::gAMA),
    (PngChunkType::iCCP, PngChunkKind::iCCP),
    (PngChunkType::sBIT, PngChunkKind::sBIT),
    (PngChunkType::sRGB, PngChunkKind::sRGB),
    (PngChunkType::cICP, PngChunkKind::cICP),
    (PngChunkType::tEXt, PngChunkKind::tEXt),
    (PngChunkType::zTXt, PngChunkKind::zTXt),
    (PngChunkType::iTXt, PngChunkKind::iTXt),
    (PngChunkType::bKGD, PngChunkKind::bKGD),
    (PngChunkType::hIST, PngChunkKind::hIST),
    (PngChunkType::pHYs, PngChunkKind::pHYs),
    (PngChunkType::sPLT, PngChunkKind::sPLT),
    (PngChunkType::sTER, PngChunkKind::sTER),
    (PngChunkType::eXIf, PngChunkKind::eXIf),
    (PngChunkType::tIME, PngChunkKind::tIME),
    (PngChunkType::dSIG, PngChunkKind::dSIG),
  ];

  /// Looks up the kind for a type tag, if it's one we know.
  #[inline]
  #[must_use]
  pub fn from_type(ty: PngChunkType) -> Option<Self> {
    Self::KNOWN.iter().find(|(known_ty, _)| *known_ty == ty).map(|(_, kind)| *kind)
  }

  /// The type tag for this kind.
  #[inline]
  #[must_use]
  pub fn chunk_type(self) -> PngChunkType {
    // every kind has exactly one table entry
    Self::KNOWN[self as usize].0
  }

  /// The payload length this kind of chunk must have, if it's fixed.
  #[inline]
  #[must_use]
  pub const fn fixed_len(self) -> Option<u32> {
    match self {
      Self::IHDR => Some(13),
      Self::IEND => Some(0),
      Self::pHYs => Some(9),
      Self::cHRM => Some(32),
      _ => None,
    }
  }
}

#[test]
fn test_chunk_kind_table_is_in_order() {
  for (i, (ty, kind)) in PngChunkKind::KNOWN.iter().enumerate() {
    assert_eq!(*kind as usize, i);
    assert_eq!(kind.chunk_type(), *ty);
    assert_eq!(PngChunkKind::from_type(*ty), Some(*kind));
  }
  assert_eq!(PngChunkKind::from_type(PngChunkType::new(*b"iHDR")), None);
  assert_eq!(PngChunkKind::from_type(PngChunkType::new(*b"prVt")), None);
}

#[test]
fn test_chunk_type_property_bits() {
  let ihdr = PngChunkType::IHDR;
  assert!(ihdr.is_critical() && ihdr.is_public() && ihdr.is_reserved_bit_valid());
  assert!(!ihdr.is_safe_to_copy());
  let text = PngChunkType::tEXt;
  assert!(!text.is_critical());
  assert!(text.is_safe_to_copy());
  let private = PngChunkType::new(*b"prVt");
  assert!(!private.is_public());
}
