use super::*;

/// The largest length a chunk is allowed to declare.
pub const MAX_CHUNK_LEN: u32 = (1 << 31) - 1;

/// Framed reads grow their buffer by at most this much at a time, so a corrupt
/// length on a short stream fails as truncation instead of as a huge
/// allocation.
const FRAME_STEP: usize = 64 * 1024;

/// The length and type tag that start every chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PngChunkHeader {
  /// Length of the chunk's data, not counting the type tag or the CRC.
  pub length: u32,
  /// The chunk's type tag.
  pub ty: PngChunkType,
}

/// A chunk read off of the stream, with its CRC not yet checked.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct PngRawChunk {
  pub(crate) ty: PngChunkType,
  pub(crate) data: Vec<u8>,
  pub(crate) declared_crc: u32,
}
impl Debug for PngRawChunk {
  #[inline]
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_struct("PngRawChunk")
      .field("ty", &self.ty)
      .field("data", &(&self.data[..self.data.len().min(12)], self.data.len()))
      .field("declared_crc", &self.declared_crc)
      .finish()
  }
}
impl PngRawChunk {
  /// The chunk's type tag.
  #[inline]
  #[must_use]
  pub const fn ty(&self) -> PngChunkType {
    self.ty
  }
  /// The chunk's data bytes.
  #[inline]
  #[must_use]
  pub fn data(&self) -> &[u8] {
    &self.data
  }
  /// The CRC stored in the chunk's trailer.
  #[inline]
  #[must_use]
  pub const fn declared_crc(&self) -> u32 {
    self.declared_crc
  }
  /// The CRC computed from the chunk's type and data.
  #[inline]
  #[must_use]
  pub fn actual_crc(&self) -> u32 {
    chunk_crc(self.ty, &self.data)
  }
  /// Passes the chunk through only if the declared and actual CRC agree.
  #[inline]
  pub fn verify(self) -> PngResult<Self> {
    let actual = self.actual_crc();
    if actual == self.declared_crc {
      Ok(self)
    } else {
      log::debug!("{} CRC mismatch: declared {:08X}, actual {actual:08X}", self.ty, self.declared_crc);
      Err(PngError::ChecksumMismatch { ty: self.ty, declared: self.declared_crc, actual })
    }
  }
}

/// Either fills all of `buf` (`true`) or reports that the source ran dry.
#[inline]
pub(crate) fn fill_exact<S: ByteSource>(src: &mut S, buf: &mut [u8]) -> PngResult<bool> {
  Ok(src.fill(buf)? == buf.len())
}

/// Reads the 8 byte signature and checks it.
pub fn read_signature<S: ByteSource>(src: &mut S) -> PngResult<()> {
  let mut signature = [0_u8; 8];
  if fill_exact(src, &mut signature)? && signature == PNG_SIGNATURE {
    Ok(())
  } else {
    log::debug!("bad signature: {signature:02X?}");
    Err(PngError::InvalidContainer)
  }
}

/// Reads the next chunk's length and type tag.
///
/// When the source doesn't even have 4 bytes for the length, that's the end of
/// the chunk sequence and you get `Ok(None)`. Running out after the length
/// means the chunk is truncated.
pub fn read_chunk_header<S: ByteSource>(src: &mut S) -> PngResult<Option<PngChunkHeader>> {
  let mut len_bytes = [0_u8; 4];
  if !fill_exact(src, &mut len_bytes)? {
    return Ok(None);
  }
  let mut ty_bytes = [0_u8; 4];
  if !fill_exact(src, &mut ty_bytes)? {
    return Err(PngError::TruncatedChunk { ty: None });
  }
  Ok(Some(PngChunkHeader { length: u32::from_be_bytes(len_bytes), ty: PngChunkType::from(ty_bytes) }))
}

/// Reads exactly `total` bytes into a new buffer.
fn read_frame<S: ByteSource>(src: &mut S, ty: PngChunkType, total: usize) -> PngResult<Vec<u8>> {
  let mut frame: Vec<u8> = Vec::new();
  while frame.len() < total {
    let start = frame.len();
    let step = (total - start).min(FRAME_STEP);
    frame.try_reserve(step)?;
    frame.resize(start + step, 0);
    if !fill_exact(src, &mut frame[start..])? {
      return Err(PngError::TruncatedChunk { ty: Some(ty) });
    }
  }
  Ok(frame)
}

/// Reads the data and CRC of a chunk whose header was just read.
///
/// This does *not* check the CRC, see [`PngRawChunk::verify`].
pub fn read_raw_chunk<S: ByteSource>(
  src: &mut S, header: PngChunkHeader,
) -> PngResult<PngRawChunk> {
  let PngChunkHeader { length, ty } = header;
  if length > MAX_CHUNK_LEN {
    return Err(PngError::ChunkTooLong { ty });
  }
  let mut data = read_frame(src, ty, length as usize + 4)?;
  let trailer = data.split_off(length as usize);
  let (declared_crc, _) =
    try_pull_u32_be(&trailer).ok_or(PngError::TruncatedChunk { ty: Some(ty) })?;
  log::trace!("read {ty} chunk: {length} bytes, declared CRC {declared_crc:08X}");
  Ok(PngRawChunk { ty, data, declared_crc })
}

/// Reads past the data and CRC of a chunk without keeping (or checking) any of
/// it.
pub fn skip_chunk<S: ByteSource>(src: &mut S, header: PngChunkHeader) -> PngResult<()> {
  let PngChunkHeader { length, ty } = header;
  if length > MAX_CHUNK_LEN {
    return Err(PngError::ChunkTooLong { ty });
  }
  let mut scratch = [0_u8; 1024];
  let mut remaining = length as usize + 4;
  while remaining > 0 {
    let step = remaining.min(scratch.len());
    if !fill_exact(src, &mut scratch[..step])? {
      return Err(PngError::TruncatedChunk { ty: Some(ty) });
    }
    remaining -= step;
  }
  Ok(())
}

/// Reads a chunk of a known kind: checks any fixed length before reading,
/// then reads the frame and checks the CRC.
pub fn read_known_chunk<S: ByteSource>(
  src: &mut S, header: PngChunkHeader, kind: PngChunkKind,
) -> PngResult<PngRawChunk> {
  match kind.fixed_len() {
    Some(expected) if expected != header.length => {
      return Err(if kind == PngChunkKind::IEND {
        PngError::MalformedTerminalChunk { found: header.length }
      } else {
        PngError::MalformedFixedLength { ty: header.ty, expected, found: header.length }
      });
    }
    _ => (),
  }
  read_raw_chunk(src, header)?.verify()
}

/// One step of the chunk sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PngChunkRecord {
  /// A chunk of a known kind, with its CRC already checked.
  Known {
    /// Which kind of chunk.
    kind: PngChunkKind,
    /// The verified chunk.
    chunk: PngRawChunk,
  },
  /// A chunk of an unknown kind that was skipped over.
  Skipped(PngChunkHeader),
}

/// Reads the chunks of a PNG stream one at a time.
///
/// The signature is checked before the first chunk is read. Known chunk kinds
/// are CRC checked, unknown kinds are skipped over using their length.
///
/// As an [`Iterator`] this gives `Result` items, and it stops after the first
/// error, after the `IEND` chunk, or when the source runs out.
#[derive(Debug)]
pub struct PngChunkReader<S> {
  src: S,
  signature_checked: bool,
  finished: bool,
}
impl<S: ByteSource> PngChunkReader<S> {
  /// Wraps a source that's positioned at the start of the PNG signature.
  #[inline]
  #[must_use]
  pub const fn new(src: S) -> Self {
    Self { src, signature_checked: false, finished: false }
  }

  /// Checks the signature, if that hasn't happened already.
  pub fn read_signature(&mut self) -> PngResult<()> {
    if !self.signature_checked {
      read_signature(&mut self.src)?;
      self.signature_checked = true;
    }
    Ok(())
  }

  /// Reads the next chunk.
  ///
  /// Gives `Ok(None)` once the source is out of data.
  pub fn next_record(&mut self) -> PngResult<Option<PngChunkRecord>> {
    self.read_signature()?;
    let header = match read_chunk_header(&mut self.src)? {
      Some(header) => header,
      None => return Ok(None),
    };
    match PngChunkKind::from_type(header.ty) {
      Some(kind) => {
        let chunk = read_known_chunk(&mut self.src, header, kind)?;
        Ok(Some(PngChunkRecord::Known { kind, chunk }))
      }
      None => {
        log::warn!("skipping unknown {} chunk ({} bytes)", header.ty, header.length);
        skip_chunk(&mut self.src, header)?;
        Ok(Some(PngChunkRecord::Skipped(header)))
      }
    }
  }

  /// Gives back the source, positioned after the last chunk read.
  #[inline]
  #[must_use]
  pub fn into_source(self) -> S {
    self.src
  }
}
impl<S: ByteSource> Iterator for PngChunkReader<S> {
  type Item = PngResult<PngChunkRecord>;
  #[inline]
  fn next(&mut self) -> Option<Self::Item> {
    if self.finished {
      return None;
    }
    let out = self.next_record().transpose();
    self.finished = match &out {
      None | Some(Err(_)) => true,
      Some(Ok(PngChunkRecord::Known { kind, .. })) => *kind == PngChunkKind::IEND,
      Some(Ok(PngChunkRecord::Skipped(_))) => false,
    };
    out
  }
}
