use super::*;

/// `cHRM`: Primary chromaticities and white point
///
/// Values are stored as an integer 100,000 times the floating point value.
/// A value of 0.3127 would be stored as the integer 31270.
///
/// An `sRGB` chunk or `iCCP` chunk, when present and recognized, overrides the
/// `cHRM` chunk.
///
/// See [cHRM](https://www.w3.org/TR/png/#11cHRM)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(nonstandard_style)]
#[allow(missing_docs)]
pub struct cHRM {
  pub white_x: u32,
  pub white_y: u32,
  pub red_x: u32,
  pub red_y: u32,
  pub green_x: u32,
  pub green_y: u32,
  pub blue_x: u32,
  pub blue_y: u32,
}
impl TryFrom<&[u8]> for cHRM {
  type Error = PngError;
  fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
    let malformed = PngError::MalformedFixedLength {
      ty: PngChunkType::cHRM,
      expected: 32,
      found: value.len() as u32,
    };
    if value.len() != 32 {
      return Err(malformed);
    }
    let mut values = [0_u32; 8];
    let mut rest = value;
    for v in values.iter_mut() {
      let (x, tail) = try_pull_u32_be(rest).ok_or(malformed)?;
      *v = x;
      rest = tail;
    }
    let [white_x, white_y, red_x, red_y, green_x, green_y, blue_x, blue_y] = values;
    Ok(Self { white_x, white_y, red_x, red_y, green_x, green_y, blue_x, blue_y })
  }
}
impl core::fmt::Display for cHRM {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    writeln!(f, "\tWhite X: {}, Y: {}", self.white_x, self.white_y)?;
    writeln!(f, "\tRed X: {}, Y: {}", self.red_x, self.red_y)?;
    writeln!(f, "\tGreen X: {}, Y: {}", self.green_x, self.green_y)?;
    writeln!(f, "\tBlue X: {}, Y: {}", self.blue_x, self.blue_y)
  }
}

#[test]
fn test_chrm_wire_order() {
  // the sRGB primaries
  let values: [u32; 8] = [31270, 32900, 64000, 33000, 30000, 60000, 15000, 6000];
  let mut data = Vec::new();
  for v in values {
    data.extend_from_slice(&v.to_be_bytes());
  }
  let chrm = cHRM::try_from(&data[..]).unwrap();
  assert_eq!((chrm.white_x, chrm.white_y), (31270, 32900));
  assert_eq!((chrm.red_x, chrm.red_y), (64000, 33000));
  assert_eq!((chrm.green_x, chrm.green_y), (30000, 60000));
  assert_eq!((chrm.blue_x, chrm.blue_y), (15000, 6000));
  assert!(cHRM::try_from(&data[..31]).is_err());
}
