use pngload::png::{PngChunkReader, PngChunkRecord};

fn main() {
  let args: Vec<String> = std::env::args().collect();
  println!("ARGS: {args:?}");
  for file_arg in args[1..].iter() {
    let path = std::path::Path::new(file_arg);
    print!("Reading `{}`... ", path.display());
    let bytes = match std::fs::read(path) {
      Ok(bytes) => {
        println!("got {} bytes.", bytes.len());
        bytes
      }
      Err(e) => {
        println!("{e:?}");
        continue;
      }
    };
    for (n, record) in PngChunkReader::new(&bytes[..]).enumerate() {
      match record {
        Ok(PngChunkRecord::Known { kind, chunk }) => {
          println!("{n}: {kind:?}, {} bytes, CRC {:08X} OK", chunk.data().len(), chunk.declared_crc())
        }
        Ok(PngChunkRecord::Skipped(header)) => {
          println!("{n}: {} (unknown), {} bytes, CRC not checked", header.ty, header.length)
        }
        Err(e) => println!("{n}: {e}"),
      }
    }
  }
}
