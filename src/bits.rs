use std::{convert::Infallible, fmt};

use thiserror::Error;

use crate::consts::BYTE_BITS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BitError {
    #[error("bit index {index} out of range 0..={max}", max = BYTE_BITS - 1)]
    InvalidIndex { index: i128 },
}

impl From<Infallible> for BitError {
    fn from(never: Infallible) -> Self {
        match never {}
    }
}

/// Position of a single bit inside a byte, 0 (LSB) through 7 (MSB).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BitIndex(u8);

impl BitIndex {
    pub const LSB: BitIndex = BitIndex(0);
    pub const MSB: BitIndex = BitIndex(BYTE_BITS - 1);
    pub const ALL: [BitIndex; BYTE_BITS as usize] = [
        BitIndex(0),
        BitIndex(1),
        BitIndex(2),
        BitIndex(3),
        BitIndex(4),
        BitIndex(5),
        BitIndex(6),
        BitIndex(7),
    ];

    pub const fn new(index: u8) -> Result<Self, BitError> {
        if index < BYTE_BITS {
            Ok(BitIndex(index))
        } else {
            Err(BitError::InvalidIndex {
                index: index as i128,
            })
        }
    }

    pub const fn get(self) -> u8 {
        self.0
    }

    pub const fn is_lsb(self) -> bool {
        self.0 == Self::LSB.0
    }

    pub const fn is_msb(self) -> bool {
        self.0 == Self::MSB.0
    }
}

impl fmt::Display for BitIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

macro_rules! impl_try_from_int {
    ($($type:ty),*) => {
        $(impl TryFrom<$type> for BitIndex {
            type Error = BitError;

            fn try_from(value: $type) -> Result<Self, Self::Error> {
                match u8::try_from(value) {
                    Ok(index) => BitIndex::new(index),
                    Err(_) => Err(BitError::InvalidIndex {
                        index: value as i128,
                    }),
                }
            }
        })*
    };
}

impl_try_from_int!(u8, u16, u32, u64, usize, i8, i16, i32, i64);

pub trait IntoBit {
    fn into_bit(self) -> u8;
}

impl IntoBit for bool {
    fn into_bit(self) -> u8 {
        if self {
            1
        } else {
            0
        }
    }
}

/// A byte with only the bit at `index` set.
pub const fn mask(index: BitIndex) -> u8 {
    1 << index.0
}

pub const fn extract_at(byte: u8, index: BitIndex) -> bool {
    (byte & mask(index)) != 0
}

/// Reads bit `index` of `byte`. Indices outside 0..=7 are rejected, not clamped.
pub fn extract<I>(byte: u8, index: I) -> Result<bool, BitError>
where
    I: TryInto<BitIndex>,
    BitError: From<I::Error>,
{
    let index = index.try_into()?;
    Ok(extract_at(byte, index))
}

/// Isolates bit `index` and moves it down to bit 0, giving 0 or 1.
pub const fn extract_shifted(byte: u8, index: BitIndex) -> u8 {
    let isolated = byte & mask(index);
    isolated >> index.0
}

pub fn lsb_first(byte: u8) -> impl DoubleEndedIterator<Item = (BitIndex, bool)> {
    BitIndex::ALL
        .into_iter()
        .map(move |index| (index, extract_at(byte, index)))
}

pub fn msb_first(byte: u8) -> impl DoubleEndedIterator<Item = (BitIndex, u8)> {
    BitIndex::ALL
        .into_iter()
        .rev()
        .map(move |index| (index, extract_shifted(byte, index)))
}

/// Rebuilds a byte from its bits, `bits[0]` being the LSB.
pub fn assemble(bits: [bool; BYTE_BITS as usize]) -> u8 {
    bits.into_iter()
        .zip(BitIndex::ALL)
        .fold(0, |byte, (bit, index)| byte | (bit.into_bit() << index.0))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::consts::STATUS_BYTE;

    const EXPECTED: [u8; 8] = [0, 1, 0, 0, 1, 1, 0, 1];

    #[test]
    fn test_extract_status_byte() {
        for (i, expected) in EXPECTED.iter().enumerate() {
            assert_eq!(extract(STATUS_BYTE, i).unwrap().into_bit(), *expected);
        }
    }

    #[test]
    fn test_reference_calls() {
        assert!(extract(STATUS_BYTE, 7).unwrap());
        assert!(!extract(STATUS_BYTE, 6).unwrap());
        assert!(extract(STATUS_BYTE, 1).unwrap());
        assert!(!extract(STATUS_BYTE, 0).unwrap());
    }

    #[test]
    fn test_extract_matches_shift_for_all_bytes() {
        for byte in 0..=u8::MAX {
            for i in 0..8u32 {
                let expected = (byte >> i) & 1 == 1;
                assert_eq!(extract(byte, i).unwrap(), expected, "byte {byte:#04X} bit {i}");
            }
        }
    }

    #[test]
    fn test_shifted_form_matches_bool_form() {
        for byte in 0..=u8::MAX {
            for index in BitIndex::ALL {
                assert_eq!(
                    extract_shifted(byte, index),
                    extract_at(byte, index).into_bit()
                );
            }
        }
    }

    #[test]
    fn test_assemble_round_trip() {
        for byte in 0..=u8::MAX {
            let mut bits = [false; 8];
            for (index, bit) in lsb_first(byte) {
                bits[index.get() as usize] = bit;
            }
            assert_eq!(assemble(bits), byte);
        }
    }

    #[test]
    fn test_traversal_orders_are_reversed() {
        for byte in 0..=u8::MAX {
            let forward: Vec<(BitIndex, u8)> = lsb_first(byte)
                .map(|(index, bit)| (index, bit.into_bit()))
                .collect();
            let mut backward: Vec<(BitIndex, u8)> = msb_first(byte).collect();
            backward.reverse();
            assert_eq!(forward, backward);
        }

        let msb: Vec<u8> = msb_first(STATUS_BYTE).map(|(_, bit)| bit).collect();
        assert_eq!(msb, [1, 0, 1, 1, 0, 0, 1, 0]);
    }

    #[test]
    fn test_mask() {
        assert_eq!(mask(BitIndex::LSB), 0b0000_0001);
        assert_eq!(mask(BitIndex::new(2).unwrap()), 0b0000_0100);
        assert_eq!(mask(BitIndex::MSB), 0b1000_0000);
    }

    #[test]
    fn test_invalid_index() {
        assert_eq!(
            extract(STATUS_BYTE, 8u8),
            Err(BitError::InvalidIndex { index: 8 })
        );
        assert_eq!(
            extract(STATUS_BYTE, 255u8),
            Err(BitError::InvalidIndex { index: 255 })
        );
        assert_eq!(
            extract(STATUS_BYTE, -1i32),
            Err(BitError::InvalidIndex { index: -1 })
        );
        assert_eq!(
            extract(STATUS_BYTE, usize::MAX),
            Err(BitError::InvalidIndex {
                index: usize::MAX as i128
            })
        );
        assert_eq!(
            BitError::InvalidIndex { index: 8 }.to_string(),
            "bit index 8 out of range 0..=7"
        );
    }

    #[test]
    fn test_invalid_index_reports_caller_value() {
        assert_eq!(
            BitIndex::try_from(u64::MAX),
            Err(BitError::InvalidIndex {
                index: u64::MAX as i128
            })
        );
        assert_eq!(
            extract(0, u64::MAX).unwrap_err().to_string(),
            "bit index 18446744073709551615 out of range 0..=7"
        );
        assert_eq!(
            BitIndex::try_from(i64::MIN),
            Err(BitError::InvalidIndex {
                index: i64::MIN as i128
            })
        );
    }

    #[test]
    fn test_index_conversions_per_int_type() {
        assert_eq!(BitIndex::try_from(7u16), Ok(BitIndex::MSB));
        assert_eq!(
            BitIndex::try_from(300u16),
            Err(BitError::InvalidIndex { index: 300 })
        );
        assert_eq!(BitIndex::try_from(0u32), Ok(BitIndex::LSB));
        assert_eq!(
            BitIndex::try_from(8u32),
            Err(BitError::InvalidIndex { index: 8 })
        );
        assert_eq!(BitIndex::try_from(3u64), BitIndex::new(3));
        assert_eq!(BitIndex::try_from(5i8), BitIndex::new(5));
        assert_eq!(
            BitIndex::try_from(i8::MIN),
            Err(BitError::InvalidIndex { index: -128 })
        );
        assert_eq!(
            BitIndex::try_from(-7i16),
            Err(BitError::InvalidIndex { index: -7 })
        );
        assert_eq!(BitIndex::try_from(6i64), BitIndex::new(6));
        assert_eq!(
            BitIndex::try_from(8i64),
            Err(BitError::InvalidIndex { index: 8 })
        );
    }

    #[test]
    fn test_extract_accepts_bit_index() {
        assert_eq!(extract(STATUS_BYTE, BitIndex::MSB), Ok(true));
        assert!(BitIndex::MSB.is_msb());
        assert!(BitIndex::LSB.is_lsb());
    }
}
