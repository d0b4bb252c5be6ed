use pngload::{
  png::{
    decode_png, decode_png_bytes, PhysUnit, PngChunkKind, PngChunkReader, PngChunkRecord,
    PngColorType, PNG_SIGNATURE,
  },
  IoSource, PngError, RGB8,
};
use walkdir::WalkDir;

#[test]
fn test_decode_png_no_panics() {
  // decode ALL files in the test folder, even non-png files shouldn't panic.
  for entry in WalkDir::new("tests/").into_iter().filter_map(|e| e.ok()) {
    println!("{}", entry.path().display());
    let v = match std::fs::read(entry.path()) {
      Ok(v) => v,
      Err(e) => {
        println!("Error reading file: {e:?}");
        continue;
      }
    };
    let _ = decode_png_bytes(&v);
    for _ in PngChunkReader::new(&v[..]) {
      //
    }
  }
  // even totally random data should never panic the decoder!
  for _ in 0..10 {
    let v = super::rand_bytes(1024);
    let _ = decode_png_bytes(&v);
    let mut with_signature = PNG_SIGNATURE.to_vec();
    with_signature.extend_from_slice(&v);
    let _ = decode_png_bytes(&with_signature);
  }
}

#[test]
fn test_decode_rgba_file() {
  let file = std::fs::File::open("tests/png/files/rgba_2x2.png").unwrap();
  let props = decode_png(IoSource(std::io::BufReader::new(file))).unwrap();
  let ihdr = props.ihdr.unwrap();
  assert_eq!((ihdr.width, ihdr.height), (2, 2));
  assert_eq!(ihdr.color_type, PngColorType::RGBA);
  assert_eq!(ihdr.channel_count(), 4);
  let phys = props.phys.unwrap();
  assert_eq!((phys.ppu_x, phys.ppu_y, phys.unit), (2835, 2835, PhysUnit::Meter));
  // two filterlines: 1 filter byte + 2 pixels * 4 channels
  assert_eq!(
    props.decompressed.unwrap(),
    [0, 255, 0, 0, 255, 0, 255, 0, 255, 0, 0, 0, 255, 255, 255, 255, 255, 0]
  );
}

#[test]
fn test_decode_indexed_file() {
  let bytes = std::fs::read("tests/png/files/indexed_4x1.png").unwrap();
  let props = decode_png_bytes(&bytes).unwrap();
  let ihdr = props.ihdr.unwrap();
  assert_eq!(ihdr.color_type, PngColorType::Index);
  assert_eq!(ihdr.bit_depth, 2);
  assert_eq!(props.channel_count(), Some(1));
  assert_eq!(props.palette.as_ref().map(|p| p.entries().len()), Some(4));
  assert_eq!(props.palette.as_ref().unwrap().entries()[1], RGB8 { r: 255, g: 0, b: 0 });
  assert_eq!(props.bkgd, Some(pngload::png::bKGD::Index { i: 2 }));
  assert_eq!(props.decompressed_bytes(), &[0, 0b00011011]);
}

#[test]
fn test_chunk_listing_of_file() {
  let bytes = std::fs::read("tests/png/files/rgba_2x2.png").unwrap();
  let kinds: Vec<PngChunkKind> = PngChunkReader::new(&bytes[..])
    .map(|record| match record.unwrap() {
      PngChunkRecord::Known { kind, .. } => kind,
      PngChunkRecord::Skipped(header) => panic!("unexpected unknown chunk {header:?}"),
    })
    .collect();
  assert_eq!(
    kinds,
    [
      PngChunkKind::IHDR,
      PngChunkKind::pHYs,
      PngChunkKind::tEXt,
      PngChunkKind::IDAT,
      PngChunkKind::IDAT,
      PngChunkKind::IEND
    ]
  );
}

#[test]
fn test_truncated_file_through_io() {
  let bytes = std::fs::read("tests/png/files/rgba_2x2.png").unwrap();
  for cut in [20, 40, bytes.len() - 1] {
    let result = decode_png(IoSource(&bytes[..cut]));
    assert!(
      matches!(result, Err(PngError::TruncatedChunk { .. })),
      "cut at {cut}: {result:?}"
    );
  }
}

#[test]
fn test_error_display() {
  let e = PngError::ChecksumMismatch {
    ty: pngload::png::PngChunkType::IHDR,
    declared: 1,
    actual: 0xABCD,
  };
  assert_eq!(e.to_string(), "IHDR chunk CRC mismatch (declared 00000001, actual 0000ABCD)");
  let boxed: Box<dyn std::error::Error> = Box::new(PngError::InvalidContainer);
  assert_eq!(boxed.to_string(), "not a valid PNG file");
}
