//! Pixel formats for the bits of color data that chunks carry.
//!
//! Decoding the image's own pixels isn't something this crate does, so all
//! that's here is what palette entries need.

use bytemuck::{Pod, Zeroable};

/// An RGB value, 8-bits per channel.
///
/// This is the layout of each `PLTE` entry, so palette data can be cast
/// straight from the chunk bytes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Pod, Zeroable)]
#[repr(C)]
#[allow(missing_docs)]
pub struct RGB8 {
  pub r: u8,
  pub g: u8,
  pub b: u8,
}
