use super::*;

/// Everything a decode gathers from a PNG stream.
///
/// The fields fill in as their chunks are parsed. `decompressed` is set once,
/// when the `IEND` chunk is reached, so a stream that just runs out of data
/// (with `require_iend` off) comes back with `decompressed: None` and the raw
/// `compressed` data still available.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[allow(missing_docs)]
pub struct DecodedImageProperties {
  pub ihdr: Option<IHDR>,
  pub palette: Option<PLTE>,
  pub phys: Option<pHYs>,
  pub bkgd: Option<bKGD>,
  pub chrm: Option<cHRM>,
  pub compressed: CompressedPayload,
  pub decompressed: Option<Vec<u8>>,
}
impl DecodedImageProperties {
  /// An empty set of properties, as at the start of a decode.
  #[inline]
  #[must_use]
  pub const fn new() -> Self {
    Self {
      ihdr: None,
      palette: None,
      phys: None,
      bkgd: None,
      chrm: None,
      compressed: CompressedPayload::new(),
      decompressed: None,
    }
  }

  /// The channel count from the header, if there was a header.
  #[inline]
  #[must_use]
  pub fn channel_count(&self) -> Option<u32> {
    self.ihdr.map(|ihdr| ihdr.channel_count())
  }

  /// The decompressed image data, or an empty slice if there isn't any.
  #[inline]
  #[must_use]
  pub fn decompressed_bytes(&self) -> &[u8] {
    self.decompressed.as_deref().unwrap_or(&[])
  }
}

/// Overwrites `slot`, with a warning when something was already there.
#[inline]
pub(crate) fn replace_with_warning<T>(slot: &mut Option<T>, value: T, ty: PngChunkType) {
  if slot.replace(value).is_some() {
    log::warn!("duplicate {ty} chunk, keeping the later one");
  }
}
