//! Holds all the tools for checking and decompressing PNG data.
//!
//! * [Portable Network Graphics Specification (Third Edition)][png-spec]
//!
//! [png-spec]: https://www.w3.org/TR/png/
//!
//! ## Automatic Decoding
//!
//! Call [`decode_png`] (or [`decode_png_bytes`] for data that's already in
//! memory) and you get back a [`DecodedImageProperties`] holding the header,
//! the palette and other decoded fields, and all of the image data, inflated.
//! Use [`decode_png_with`] to pass a [`PngDecodeConfig`].
//!
//! ## The Chunk Stream
//!
//! A PNG is an 8 byte signature followed by a series of "chunks". Each chunk
//! is:
//!
//! * A 4 byte big-endian length.
//! * A 4 byte type tag, such as `IHDR`.
//! * `length` bytes of data.
//! * A 4 byte big-endian CRC-32 of the type tag and the data.
//!
//! The decoder reads the chunks strictly in order:
//!
//! * Every chunk of a kind listed in [`PngChunkKind`] has its CRC checked. A
//!   bad CRC stops the whole decode, there's no "mostly trust it" mode.
//! * Chunks of any other kind are skipped over by their length.
//! * `IHDR`, `PLTE`, `pHYs`, `bKGD`, and `cHRM` are decoded into fields. The
//!   rest of the known kinds are only checked.
//! * The data of every `IDAT` chunk is gathered, in order, into one zlib data
//!   stream.
//! * When the `IEND` chunk arrives that stream gets inflated and the decode is
//!   done.
//!
//! If you want to look at the chunks yourself, [`PngChunkReader`] gives them
//! to you one at a time, already CRC checked.
//!
//! ## What You Get
//!
//! The inflated data is still *filtered*: each scanline has a filter type byte
//! on the front, and interlaced images are stored as seven reduced images.
//! Reversing that is up to you.

#![forbid(unsafe_code)]

use core::fmt::Debug;

use alloc::{boxed::Box, vec::Vec};

use crate::{pixel_formats::RGB8, *};

/// The first eight bytes of a PNG datastream should match these bytes.
pub const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

mod chunk_type;
pub use chunk_type::*;

mod crc32;
pub use crc32::*;

mod raw_chunk;
pub use raw_chunk::*;

mod ihdr;
pub use ihdr::*;

mod plte;
pub use plte::*;

mod bkgd;
pub use bkgd::*;

mod phys;
pub use phys::*;

mod chrm;
pub use chrm::*;

mod idat;
pub use idat::*;

mod inflate;
pub use inflate::*;

mod config;
pub use config::*;

mod properties;
pub use properties::*;

mod decoder;
pub use decoder::*;

#[cfg(test)]
mod tests;
