#![forbid(unsafe_code)]

//! Shorthands for pulling big-endian values off the front of a byte slice.
//!
//! PNG stores every multi-byte integer in network (big-endian) order.

#[inline]
#[must_use]
pub(crate) fn try_pull_byte_array<const N: usize>(bytes: &[u8]) -> Option<([u8; N], &[u8])> {
  bytes.split_first_chunk::<N>().map(|(head, tail)| (*head, tail))
}

#[inline]
#[must_use]
pub(crate) fn try_pull_u32_be(bytes: &[u8]) -> Option<(u32, &[u8])> {
  try_pull_byte_array::<4>(bytes).map(|(a, tail)| (u32::from_be_bytes(a), tail))
}

#[test]
fn test_try_pull_be() {
  let bytes = [0x00, 0x00, 0x01, 0x02, 0xAB, 0xCD, 0xEF];
  let (x, rest) = try_pull_u32_be(&bytes).unwrap();
  assert_eq!(x, 0x0102);
  assert_eq!(rest, &[0xAB, 0xCD, 0xEF]);
  assert!(try_pull_u32_be(rest).is_none());
  let (arr, rest) = try_pull_byte_array::<2>(rest).unwrap();
  assert_eq!(arr, [0xAB, 0xCD]);
  assert!(try_pull_byte_array::<0>(rest).is_some());
}
