use super::*;

use alloc::vec;
use miniz_oxide::deflate::compress_to_vec_zlib;

fn chunk(ty: &[u8; 4], data: &[u8]) -> Vec<u8> {
  let mut out = Vec::new();
  out.extend_from_slice(&(data.len() as u32).to_be_bytes());
  out.extend_from_slice(ty);
  out.extend_from_slice(data);
  out.extend_from_slice(&chunk_crc(PngChunkType::new(*ty), data).to_be_bytes());
  out
}

fn png_from(chunks: &[Vec<u8>]) -> Vec<u8> {
  let mut out = PNG_SIGNATURE.to_vec();
  for c in chunks {
    out.extend_from_slice(c);
  }
  out
}

fn ihdr_1x1_rgb() -> Vec<u8> {
  chunk(b"IHDR", &[0, 0, 0, 1, 0, 0, 0, 1, 8, 2, 0, 0, 0])
}

fn iend() -> Vec<u8> {
  chunk(b"IEND", &[])
}

fn single_ff_png() -> Vec<u8> {
  png_from(&[ihdr_1x1_rgb(), chunk(b"IDAT", &compress_to_vec_zlib(&[0xFF], 6)), iend()])
}

#[test]
fn test_decode_single_pixel() {
  let props = decode_png_bytes(&single_ff_png()).unwrap();
  let ihdr = props.ihdr.unwrap();
  assert_eq!((ihdr.width, ihdr.height), (1, 1));
  assert_eq!(ihdr.bit_depth, 8);
  assert_eq!(ihdr.color_type, PngColorType::RGB);
  assert!(!ihdr.is_interlaced());
  assert_eq!(props.channel_count(), Some(3));
  assert_eq!(props.decompressed, Some(vec![0xFF]));
  assert!(props.palette.is_none() && props.phys.is_none());
}

#[test]
fn test_ihdr_crc_off_by_one_bit() {
  let mut png = single_ff_png();
  // signature (8) + length (4) + type (4) + data (13), then the CRC
  png[8 + 4 + 4 + 13 + 3] ^= 1;
  match decode_png_bytes(&png) {
    Err(PngError::ChecksumMismatch { ty, declared, actual }) => {
      assert_eq!(ty, PngChunkType::IHDR);
      assert_eq!(declared ^ actual, 1);
    }
    other => panic!("expected a checksum mismatch, got {other:?}"),
  }
}

#[test]
fn test_any_flipped_data_byte_fails_that_chunk() {
  let chunks = [
    ihdr_1x1_rgb(),
    chunk(b"tEXt", b"Title\0hello"),
    chunk(b"pHYs", &[0, 0, 0, 1, 0, 0, 0, 1, 0]),
    chunk(b"IDAT", &compress_to_vec_zlib(&[0xFF], 6)),
  ];
  let png = png_from(&[chunks[0].clone(), chunks[1].clone(), chunks[2].clone(), chunks[3].clone(), iend()]);
  let mut start = PNG_SIGNATURE.len();
  for c in chunks.iter() {
    let ty = PngChunkType::new([c[4], c[5], c[6], c[7]]);
    let data_len = c.len() - 12;
    for i in 0..data_len {
      let mut bad = png.clone();
      bad[start + 8 + i] ^= 0x40;
      match decode_png_bytes(&bad) {
        Err(PngError::ChecksumMismatch { ty: failed, .. }) => assert_eq!(failed, ty),
        other => panic!("{ty} byte {i}: expected a checksum mismatch, got {other:?}"),
      }
    }
    start += c.len();
  }
}

#[test]
fn test_bad_signature() {
  let mut png = single_ff_png();
  png[1] = b'p';
  assert_eq!(decode_png_bytes(&png), Err(PngError::InvalidContainer));
  assert_eq!(decode_png_bytes(&PNG_SIGNATURE[..7]), Err(PngError::InvalidContainer));
  assert_eq!(decode_png_bytes(&[]), Err(PngError::InvalidContainer));
}

#[test]
fn test_truncated_final_chunk() {
  let png = single_ff_png();
  // cut into the IEND CRC
  let cut = &png[..png.len() - 2];
  assert_eq!(decode_png_bytes(cut), Err(PngError::TruncatedChunk { ty: Some(PngChunkType::IEND) }));
  // cut into the IDAT data
  let idat = chunk(b"IDAT", &compress_to_vec_zlib(&[0xFF; 64], 6));
  let png = png_from(&[ihdr_1x1_rgb(), idat.clone()]);
  let cut = &png[..png.len() - idat.len() / 2];
  assert_eq!(decode_png_bytes(cut), Err(PngError::TruncatedChunk { ty: Some(PngChunkType::IDAT) }));
  // cut in the type tag
  let png = png_from(&[ihdr_1x1_rgb()]);
  let mut cut = png.clone();
  cut.extend_from_slice(&[0, 0, 0, 0, b'I', b'E']);
  assert_eq!(decode_png_bytes(&cut), Err(PngError::TruncatedChunk { ty: None }));
}

#[test]
fn test_ihdr_wrong_length_fails_fast() {
  for len in [0_u32, 12, 14] {
    let mut png = PNG_SIGNATURE.to_vec();
    png.extend_from_slice(&len.to_be_bytes());
    png.extend_from_slice(b"IHDR");
    // no data at all follows, so anything that tried to read would be truncated
    assert_eq!(
      decode_png_bytes(&png),
      Err(PngError::MalformedFixedLength { ty: PngChunkType::IHDR, expected: 13, found: len })
    );
  }
}

#[test]
fn test_ihdr_bad_color_type() {
  let png = png_from(&[chunk(b"IHDR", &[0, 0, 0, 1, 0, 0, 0, 1, 8, 5, 0, 0, 0]), iend()]);
  assert_eq!(decode_png_bytes(&png), Err(PngError::InvalidColorType(5)));
}

#[test]
fn test_iend_must_be_empty() {
  let png = png_from(&[ihdr_1x1_rgb(), chunk(b"IEND", &[0])]);
  assert_eq!(decode_png_bytes(&png), Err(PngError::MalformedTerminalChunk { found: 1 }));
}

#[test]
fn test_bkgd_through_decoder() {
  let idat = chunk(b"IDAT", &compress_to_vec_zlib(&[0xFF], 6));
  let png = png_from(&[ihdr_1x1_rgb(), chunk(b"bKGD", &[3]), idat.clone(), iend()]);
  assert_eq!(decode_png_bytes(&png).unwrap().bkgd, Some(bKGD::Index { i: 3 }));
  let png = png_from(&[ihdr_1x1_rgb(), chunk(b"bKGD", &[0, 1, 0, 2, 0, 3]), idat.clone(), iend()]);
  assert_eq!(decode_png_bytes(&png).unwrap().bkgd, Some(bKGD::RGB { r: 1, g: 2, b: 3 }));
  let png = png_from(&[ihdr_1x1_rgb(), chunk(b"bKGD", &[0, 1]), idat, iend()]);
  assert_eq!(
    decode_png_bytes(&png),
    Err(PngError::InvalidShape { ty: PngChunkType::bKGD, found: 2 })
  );
}

#[test]
fn test_decoded_fields() {
  let mut chrm = Vec::new();
  for v in [31270_u32, 32900, 64000, 33000, 30000, 60000, 15000, 6000] {
    chrm.extend_from_slice(&v.to_be_bytes());
  }
  let png = png_from(&[
    chunk(b"IHDR", &[0, 0, 0, 2, 0, 0, 0, 1, 8, 3, 0, 0, 0]),
    chunk(b"cHRM", &chrm),
    chunk(b"pHYs", &[0, 0, 0x0B, 0x13, 0, 0, 0x0B, 0x13, 1]),
    chunk(b"PLTE", &[255, 0, 0, 0, 255, 0]),
    chunk(b"IDAT", &compress_to_vec_zlib(&[0, 0, 1], 6)),
    iend(),
  ]);
  let props = decode_png_bytes(&png).unwrap();
  assert_eq!(props.channel_count(), Some(1));
  assert_eq!(
    props.palette.as_ref().unwrap().entries(),
    &[RGB8 { r: 255, g: 0, b: 0 }, RGB8 { r: 0, g: 255, b: 0 }]
  );
  assert_eq!(props.phys, Some(pHYs { ppu_x: 2835, ppu_y: 2835, unit: PhysUnit::Meter }));
  assert_eq!(props.chrm.unwrap().white_x, 31270);
  assert_eq!(props.chrm.unwrap().blue_y, 6000);
  assert_eq!(props.decompressed_bytes(), &[0, 0, 1]);
}

#[test]
fn test_fixed_length_ancillary_chunks() {
  let png = png_from(&[ihdr_1x1_rgb(), chunk(b"cHRM", &[0; 31]), iend()]);
  assert_eq!(
    decode_png_bytes(&png),
    Err(PngError::MalformedFixedLength { ty: PngChunkType::cHRM, expected: 32, found: 31 })
  );
  let png = png_from(&[ihdr_1x1_rgb(), chunk(b"pHYs", &[0; 10]), iend()]);
  assert_eq!(
    decode_png_bytes(&png),
    Err(PngError::MalformedFixedLength { ty: PngChunkType::pHYs, expected: 9, found: 10 })
  );
}

#[test]
fn test_idat_data_is_joined_in_order() {
  let original: Vec<u8> = (0..=255).cycle().take(3000).collect();
  let compressed = compress_to_vec_zlib(&original, 6);
  let (a, rest) = compressed.split_at(compressed.len() / 3);
  let (b, c) = rest.split_at(1);
  let png = png_from(&[
    ihdr_1x1_rgb(),
    chunk(b"IDAT", a),
    chunk(b"IDAT", b),
    chunk(b"IDAT", &[]),
    chunk(b"IDAT", c),
    iend(),
  ]);
  let props = decode_png_bytes(&png).unwrap();
  assert_eq!(props.compressed.as_bytes(), &compressed[..]);
  assert_eq!(props.decompressed, Some(original));
}

#[test]
fn test_empty_idat_policy() {
  let png = png_from(&[
    ihdr_1x1_rgb(),
    chunk(b"IDAT", &[]),
    chunk(b"IDAT", &compress_to_vec_zlib(&[0xFF], 6)),
    iend(),
  ]);
  assert!(decode_png_bytes(&png).is_ok());
  let strict = PngDecodeConfig::new().with_reject_empty_idat(true);
  assert_eq!(decode_png_with(&png[..], strict), Err(PngError::EmptyImageData));
}

#[test]
fn test_unknown_chunks_are_skipped() {
  let mut odd = chunk(b"prVt", &[9; 2000]);
  // the CRC of unknown chunks isn't checked
  let last = odd.len() - 1;
  odd[last] ^= 0xFF;
  let png = png_from(&[
    ihdr_1x1_rgb(),
    odd,
    chunk(b"IDAT", &compress_to_vec_zlib(&[0xFF], 6)),
    chunk(b"zzZZ", &[]),
    iend(),
  ]);
  assert_eq!(decode_png_bytes(&png).unwrap().decompressed, Some(vec![0xFF]));
}

#[test]
fn test_checked_but_discarded_chunks() {
  let png = png_from(&[
    ihdr_1x1_rgb(),
    chunk(b"gAMA", &45455_u32.to_be_bytes()),
    chunk(b"sRGB", &[0]),
    chunk(b"tIME", &[7, 232, 1, 2, 3, 4, 5]),
    chunk(b"iTXt", b"k\0\0\0\0\0text"),
    chunk(b"IDAT", &compress_to_vec_zlib(&[0xFF], 6)),
    chunk(b"eXIf", b"MM\0*"),
    iend(),
  ]);
  assert!(decode_png_bytes(&png).is_ok());
  let mut bad_time = chunk(b"tIME", &[7, 232, 1, 2, 3, 4, 5]);
  bad_time[9] ^= 1;
  let png = png_from(&[ihdr_1x1_rgb(), bad_time, iend()]);
  assert!(matches!(
    decode_png_bytes(&png),
    Err(PngError::ChecksumMismatch { ty: PngChunkType::tIME, .. })
  ));
}

#[test]
fn test_end_of_data_without_iend() {
  let png = png_from(&[ihdr_1x1_rgb(), chunk(b"IDAT", &compress_to_vec_zlib(&[0xFF], 6))]);
  let props = decode_png_bytes(&png).unwrap();
  assert!(props.ihdr.is_some());
  assert!(props.decompressed.is_none());
  assert!(!props.compressed.is_empty());
  // a few stray bytes where a length would be are still a clean stop
  let mut stray = png.clone();
  stray.extend_from_slice(&[0, 0]);
  assert!(decode_png_bytes(&stray).is_ok());
  let strict = PngDecodeConfig::new().with_require_iend(true);
  assert_eq!(decode_png_with(&png[..], strict), Err(PngError::MissingTerminalChunk));
}

#[test]
fn test_nothing_read_after_iend() {
  let mut png = single_ff_png();
  png.extend_from_slice(b"any trailing garbage at all");
  let mut src: &[u8] = &png;
  let props = decode_png(&mut src).unwrap();
  assert_eq!(props.decompressed, Some(vec![0xFF]));
  assert_eq!(src, b"any trailing garbage at all");
}

#[test]
fn test_iend_with_bad_image_data() {
  let png = png_from(&[ihdr_1x1_rgb(), chunk(b"IDAT", &[1, 2, 3, 4]), iend()]);
  assert_eq!(decode_png_bytes(&png), Err(PngError::DecompressionStreamError));
  let png = png_from(&[ihdr_1x1_rgb(), iend()]);
  assert_eq!(decode_png_bytes(&png), Err(PngError::DecompressionStreamError));
}

#[test]
fn test_huge_declared_length() {
  let mut png = png_from(&[ihdr_1x1_rgb()]);
  png.extend_from_slice(&u32::MAX.to_be_bytes());
  png.extend_from_slice(b"IDAT");
  assert_eq!(decode_png_bytes(&png), Err(PngError::ChunkTooLong { ty: PngChunkType::IDAT }));
  // legal length, but the data isn't there
  let mut png = png_from(&[ihdr_1x1_rgb()]);
  png.extend_from_slice(&MAX_CHUNK_LEN.to_be_bytes());
  png.extend_from_slice(b"tEXt");
  png.extend_from_slice(&[0; 100]);
  assert_eq!(decode_png_bytes(&png), Err(PngError::TruncatedChunk { ty: Some(PngChunkType::tEXt) }));
}

#[test]
fn test_chunk_reader_records() {
  let png = png_from(&[ihdr_1x1_rgb(), chunk(b"abCD", &[1, 2, 3]), iend()]);
  let records: Vec<_> = PngChunkReader::new(&png[..]).collect::<Result<_, _>>().unwrap();
  assert_eq!(records.len(), 3);
  assert!(matches!(&records[0], PngChunkRecord::Known { kind: PngChunkKind::IHDR, .. }));
  assert_eq!(
    records[1],
    PngChunkRecord::Skipped(PngChunkHeader { length: 3, ty: PngChunkType::new(*b"abCD") })
  );
  match &records[2] {
    PngChunkRecord::Known { kind: PngChunkKind::IEND, chunk } => {
      assert_eq!(chunk.declared_crc(), 0xAE42_6082);
      assert!(chunk.data().is_empty());
    }
    other => panic!("expected IEND, got {other:?}"),
  }
  // the reader stops at IEND and leaves the rest of the source alone
  let mut png = png;
  png.extend_from_slice(b"trailer");
  let mut reader = PngChunkReader::new(&png[..]);
  assert_eq!(reader.by_ref().count(), 3);
  assert_eq!(reader.into_source(), b"trailer");
  // stops after the first error
  let mut it = PngChunkReader::new(&b"not a png"[..]);
  assert_eq!(it.next(), Some(Err(PngError::InvalidContainer)));
  assert_eq!(it.next(), None);
}
