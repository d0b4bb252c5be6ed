use super::*;

/// The unit of a [`pHYs`] chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PhysUnit {
  /// No unit, the values only give the pixel aspect ratio.
  Unspecified,
  /// Pixels per meter.
  Meter,
  /// Any other unit byte. Not an error, just not something we understand.
  Unknown(u8),
}
impl From<u8> for PhysUnit {
  #[inline]
  fn from(value: u8) -> Self {
    match value {
      0 => Self::Unspecified,
      1 => Self::Meter,
      other => Self::Unknown(other),
    }
  }
}
impl PhysUnit {
  /// A human readable name.
  #[inline]
  #[must_use]
  pub const fn name(self) -> &'static str {
    match self {
      Self::Unspecified => "unspecified",
      Self::Meter => "per meter",
      Self::Unknown(_) => "unknown",
    }
  }
}

/// `pHYs`: Physical pixel dimensions
///
/// Specifies the intended pixel size or aspect ratio for display of the image.
///
/// See [pHYs](https://www.w3.org/TR/png/#11pHYs)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(nonstandard_style)]
pub struct pHYs {
  /// Pixels per unit, X axis
  pub ppu_x: u32,
  /// Pixels per unit, Y axis
  pub ppu_y: u32,
  /// What the unit is
  pub unit: PhysUnit,
}
impl TryFrom<&[u8]> for pHYs {
  type Error = PngError;
  #[inline]
  fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
    match *value {
      [x0, x1, x2, x3, y0, y1, y2, y3, unit] => {
        let unit = PhysUnit::from(unit);
        if let PhysUnit::Unknown(u) = unit {
          log::warn!("pHYs chunk has unknown unit {u}");
        }
        Ok(Self {
          ppu_x: u32::from_be_bytes([x0, x1, x2, x3]),
          ppu_y: u32::from_be_bytes([y0, y1, y2, y3]),
          unit,
        })
      }
      _ => Err(PngError::MalformedFixedLength {
        ty: PngChunkType::pHYs,
        expected: 9,
        found: value.len() as u32,
      }),
    }
  }
}
impl core::fmt::Display for pHYs {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    let unit = self.unit.name();
    writeln!(f, "\tPixels per unit (X): {} {unit}", self.ppu_x)?;
    writeln!(f, "\tPixels per unit (Y): {} {unit}", self.ppu_y)
  }
}

#[test]
fn test_phys_units() {
  let mut data = [0, 0, 0x0B, 0x13, 0, 0, 0x0B, 0x13, 1];
  let phys = pHYs::try_from(&data[..]).unwrap();
  assert_eq!(phys, pHYs { ppu_x: 2835, ppu_y: 2835, unit: PhysUnit::Meter });
  data[8] = 0;
  assert_eq!(pHYs::try_from(&data[..]).unwrap().unit, PhysUnit::Unspecified);
  data[8] = 9;
  assert_eq!(pHYs::try_from(&data[..]).unwrap().unit, PhysUnit::Unknown(9));
  assert!(pHYs::try_from(&data[..8]).is_err());
}
