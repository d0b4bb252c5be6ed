use super::*;

use miniz_oxide::inflate::{
  core::{
    decompress,
    inflate_flags::{TINFL_FLAG_PARSE_ZLIB_HEADER, TINFL_FLAG_USING_NON_WRAPPING_OUTPUT_BUF},
    DecompressorOxide,
  },
  TINFLStatus,
};

/// Inflates a complete zlib data stream.
///
/// The output buffer starts at `config.initial_inflate_capacity` bytes and
/// doubles whenever the decompressor says that there's more output than fits.
/// The returned buffer is truncated to exactly the decompressed length.
///
/// ## Failure
/// * [`PngError::DecompressorInitFailed`] if the starting output buffer can't
///   be allocated (`initial_inflate_capacity` too large). The decompressor's
///   own state is a small fixed-size box that's allocated normally.
/// * [`PngError::DecompressionStreamError`] if the data isn't a complete, valid
///   zlib stream (this includes the Adler-32 check at the end).
/// * [`PngError::OutOfMemory`] if the buffer can't grow.
/// * [`PngError::DecompressedTooLarge`] if the output would go past
///   `config.max_decompressed_len`.
pub fn inflate_zlib(compressed: &[u8], config: &PngDecodeConfig) -> PngResult<Vec<u8>> {
  let limit = config.max_decompressed_len.unwrap_or(usize::MAX);
  let initial_len = config.initial_inflate_capacity.max(1).min(limit.max(1));

  let mut out: Vec<u8> = Vec::new();
  out.try_reserve_exact(initial_len).map_err(|_| PngError::DecompressorInitFailed)?;
  out.resize(initial_len, 0);
  let mut decompressor = Box::<DecompressorOxide>::default();

  let flags = TINFL_FLAG_PARSE_ZLIB_HEADER | TINFL_FLAG_USING_NON_WRAPPING_OUTPUT_BUF;
  let mut in_pos = 0;
  let mut out_pos = 0;
  loop {
    let (status, in_consumed, out_written) =
      decompress(&mut decompressor, &compressed[in_pos..], &mut out, out_pos, flags);
    in_pos += in_consumed;
    out_pos += out_written;
    match status {
      TINFLStatus::Done => {
        if out_pos > limit {
          return Err(PngError::DecompressedTooLarge);
        }
        out.truncate(out_pos);
        log::debug!("inflated {in_pos} bytes into {out_pos} bytes");
        return Ok(out);
      }
      TINFLStatus::HasMoreOutput => {
        if out.len() >= limit {
          return Err(PngError::DecompressedTooLarge);
        }
        let new_len = out.len().saturating_mul(2).min(limit);
        log::trace!("inflate buffer full at {} bytes, growing to {new_len}", out.len());
        out.try_reserve_exact(new_len - out.len())?;
        out.resize(new_len, 0);
      }
      other => {
        log::debug!("inflate failed with {other:?} after {in_pos} input bytes");
        return Err(PngError::DecompressionStreamError);
      }
    }
  }
}
