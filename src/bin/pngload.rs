use std::{
  io::{BufReader, Write},
  process::ExitCode,
};

use log::{LevelFilter, Log, Metadata, Record};
use pngload::{png::decode_png, IoSource};

const DEFAULT_OUTPUT: &str = "decompressed_image.bin";

/// Writes every enabled record to stderr.
struct StderrLogger;
impl Log for StderrLogger {
  fn enabled(&self, metadata: &Metadata) -> bool {
    metadata.level() <= log::max_level()
  }
  fn log(&self, record: &Record) {
    if self.enabled(record.metadata()) {
      eprintln!("[{}] {}", record.level(), record.args());
    }
  }
  fn flush(&self) {
    let _ = std::io::stderr().flush();
  }
}
static LOGGER: StderrLogger = StderrLogger;

fn level_from_env() -> LevelFilter {
  match std::env::var("PNGLOAD_LOG") {
    Ok(s) => s.parse().unwrap_or_else(|_| {
      eprintln!("PNGLOAD_LOG: unknown level `{s}`, using `info`");
      LevelFilter::Info
    }),
    Err(_) => LevelFilter::Info,
  }
}

fn main() -> ExitCode {
  if log::set_logger(&LOGGER).is_ok() {
    log::set_max_level(level_from_env());
  }

  let args: Vec<String> = std::env::args().collect();
  let Some(input) = args.get(1) else {
    eprintln!("usage: {} <input.png> [output.bin]", args.first().map_or("pngload", |s| s));
    return ExitCode::FAILURE;
  };
  let output = args.get(2).map_or(DEFAULT_OUTPUT, |s| s.as_str());

  let file = match std::fs::File::open(input) {
    Ok(file) => file,
    Err(e) => {
      eprintln!("couldn't open `{input}`: {e}");
      return ExitCode::FAILURE;
    }
  };
  let props = match decode_png(IoSource(BufReader::new(file))) {
    Ok(props) => props,
    Err(e) => {
      eprintln!("`{input}`: {e}");
      return ExitCode::FAILURE;
    }
  };

  if let Some(ihdr) = &props.ihdr {
    print!("IHDR:\n{ihdr}");
  }
  if let Some(palette) = &props.palette {
    println!("PLTE:\n\tEntries: {}", palette.entries().len());
  }
  if let Some(phys) = &props.phys {
    print!("pHYs:\n{phys}");
  }
  if let Some(bkgd) = &props.bkgd {
    print!("bKGD:\n{bkgd}");
  }
  if let Some(chrm) = &props.chrm {
    print!("cHRM:\n{chrm}");
  }
  println!("Compressed image data: {} bytes", props.compressed.len());

  let Some(decompressed) = &props.decompressed else {
    log::warn!("no IEND chunk, so nothing was decompressed");
    return ExitCode::SUCCESS;
  };
  println!("Decompressed image data: {} bytes", decompressed.len());
  if let Err(e) = std::fs::write(output, decompressed) {
    eprintln!("couldn't write `{output}`: {e}");
    return ExitCode::FAILURE;
  }
  log::info!("wrote `{output}`");
  ExitCode::SUCCESS
}
