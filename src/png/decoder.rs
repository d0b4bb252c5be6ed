use super::*;

/// Where the decoder is in the stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DecodeState {
  /// Nothing read yet, the signature is next.
  Signature,
  /// Between chunks, a chunk header (or the end of data) is next.
  ChunkHeader,
  /// `IEND` was handled, or the data ran out.
  Finished,
}

/// Decodes one PNG stream from a [`ByteSource`].
///
/// The decoder owns the source for the whole decode and reads it strictly in
/// order. Use [`decode`](Self::decode) to run it to completion.
#[derive(Debug)]
pub struct PngDecoder<S> {
  reader: PngChunkReader<S>,
  config: PngDecodeConfig,
  state: DecodeState,
  props: DecodedImageProperties,
}
impl<S: ByteSource> PngDecoder<S> {
  /// Makes a decoder with the default config.
  #[inline]
  #[must_use]
  pub fn new(src: S) -> Self {
    Self::with_config(src, PngDecodeConfig::default())
  }

  /// Makes a decoder with the config given.
  #[inline]
  #[must_use]
  pub fn with_config(src: S, config: PngDecodeConfig) -> Self {
    Self {
      reader: PngChunkReader::new(src),
      config,
      state: DecodeState::Signature,
      props: DecodedImageProperties::new(),
    }
  }

  /// Runs the decode to the end.
  ///
  /// ## Failure
  /// The first problem found stops the decode and is returned. Nothing that was
  /// decoded before that point is kept.
  pub fn decode(mut self) -> PngResult<DecodedImageProperties> {
    loop {
      match self.state {
        DecodeState::Signature => {
          self.reader.read_signature()?;
          log::debug!("PNG signature OK");
          self.state = DecodeState::ChunkHeader;
        }
        DecodeState::ChunkHeader => match self.reader.next_record()? {
          Some(PngChunkRecord::Known { kind, chunk }) => self.handle_chunk(kind, chunk)?,
          Some(PngChunkRecord::Skipped(_)) => (),
          None => {
            if self.config.require_iend {
              return Err(PngError::MissingTerminalChunk);
            }
            log::debug!("stream ended without IEND, stopping");
            self.state = DecodeState::Finished;
          }
        },
        DecodeState::Finished => return Ok(self.props),
      }
    }
  }

  /// Merges one verified chunk into the properties.
  fn handle_chunk(&mut self, kind: PngChunkKind, chunk: PngRawChunk) -> PngResult<()> {
    let ty = chunk.ty();
    let data = chunk.data();
    log::debug!("{ty} chunk OK ({} bytes)", data.len());
    match kind {
      PngChunkKind::IHDR => {
        replace_with_warning(&mut self.props.ihdr, IHDR::try_from(data)?, ty);
      }
      PngChunkKind::PLTE => {
        replace_with_warning(&mut self.props.palette, PLTE::from(data), ty);
      }
      PngChunkKind::pHYs => {
        replace_with_warning(&mut self.props.phys, pHYs::try_from(data)?, ty);
      }
      PngChunkKind::bKGD => {
        replace_with_warning(&mut self.props.bkgd, bKGD::try_from(data)?, ty);
      }
      PngChunkKind::cHRM => {
        replace_with_warning(&mut self.props.chrm, cHRM::try_from(data)?, ty);
      }
      PngChunkKind::IDAT => {
        if data.is_empty() && self.config.reject_empty_idat {
          return Err(PngError::EmptyImageData);
        }
        self.props.compressed.append(data)?;
      }
      PngChunkKind::IEND => {
        let decompressed = inflate_zlib(self.props.compressed.as_bytes(), &self.config)?;
        self.props.decompressed = Some(decompressed);
        self.state = DecodeState::Finished;
      }
      PngChunkKind::tRNS
      | PngChunkKind::gAMA
      | PngChunkKind::iCCP
      | PngChunkKind::sBIT
      | PngChunkKind::sRGB
      | PngChunkKind::cICP
      | PngChunkKind::tEXt
      | PngChunkKind::zTXt
      | PngChunkKind::iTXt
      | PngChunkKind::hIST
      | PngChunkKind::sPLT
      | PngChunkKind::sTER
      | PngChunkKind::eXIf
      | PngChunkKind::tIME
      | PngChunkKind::dSIG => (),
    }
    Ok(())
  }
}

/// Decodes a PNG stream with the default config.
#[inline]
pub fn decode_png<S: ByteSource>(src: S) -> PngResult<DecodedImageProperties> {
  PngDecoder::new(src).decode()
}

/// Decodes a PNG stream with the config given.
#[inline]
pub fn decode_png_with<S: ByteSource>(
  src: S, config: PngDecodeConfig,
) -> PngResult<DecodedImageProperties> {
  PngDecoder::with_config(src, config).decode()
}

/// Decodes PNG bytes that are already in memory, with the default config.
#[inline]
pub fn decode_png_bytes(bytes: &[u8]) -> PngResult<DecodedImageProperties> {
  decode_png(bytes)
}
