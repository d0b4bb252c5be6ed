#![no_std]
#![cfg_attr(docs_rs, feature(doc_cfg))]
#![warn(missing_docs)]

//! A crate for checking PNG chunk streams and inflating their image data.
//!
//! The decoder reads the PNG signature, walks the chunk sequence, verifies the
//! CRC of every chunk it knows about, decodes the handful of chunks that carry
//! fields other code tends to want (header, palette, physical scale,
//! background, chromaticity), gathers all of the `IDAT` data, and inflates it
//! once the `IEND` chunk is reached.
//!
//! Turning the inflated bytes into actual pixels (unfiltering, de-interlacing,
//! bit depth expansion) is *not* done by this crate.
//!
//! ```no_run
//! # fn main() -> Result<(), pngload::PngError> {
//! let bytes: &[u8] = unimplemented!("data from somewhere");
//! let props = pngload::png::decode_png_bytes(bytes)?;
//! if let Some(ihdr) = props.ihdr {
//!   println!("{}x{} with {} channels", ihdr.width, ihdr.height, ihdr.channel_count());
//! }
//! # Ok(())
//! # }
//! ```

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

#[cfg(target_pointer_width = "16")]
compile_error!("this crate assumes 32-bit or bigger pointers!");

mod error;
pub use error::*;

pub mod pixel_formats;
pub use pixel_formats::*;

pub mod ascii_array;
pub use ascii_array::*;

mod parser_helpers;
pub(crate) use parser_helpers::*;

pub mod source;
pub use source::*;

pub mod png;
