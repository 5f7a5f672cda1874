use borsh::io::{Read, Result, Write};
use borsh::{BorshDeserialize, BorshSerialize};

use crate::{FixedArray, FixedCharBuffer};

/// Requires crate feature `"borsh"`
impl<T: BorshSerialize, const N: usize> BorshSerialize for FixedArray<T, N> {
    fn serialize<W: Write>(&self, writer: &mut W) -> Result<()> {
        for elt in self {
            elt.serialize(writer)?;
        }
        Ok(())
    }
}

/// Requires crate feature `"borsh"`
impl<T: BorshDeserialize, const N: usize> BorshDeserialize for FixedArray<T, N> {
    fn deserialize_reader<R: Read>(reader: &mut R) -> Result<Self> {
        <[T; N]>::deserialize_reader(reader).map(FixedArray::from)
    }
}

/// All `N` bytes are written, terminator included.
///
/// Requires crate feature `"borsh"`
impl<const N: usize> BorshSerialize for FixedCharBuffer<N> {
    fn serialize<W: Write>(&self, writer: &mut W) -> Result<()> {
        self.as_array().serialize(writer)
    }
}

/// Requires crate feature `"borsh"`
impl<const N: usize> BorshDeserialize for FixedCharBuffer<N> {
    fn deserialize_reader<R: Read>(reader: &mut R) -> Result<Self> {
        FixedArray::<u8, N>::deserialize_reader(reader).map(FixedCharBuffer::from)
    }
}
