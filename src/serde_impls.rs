use std::fmt;
use std::marker::PhantomData;
use std::str;

use serde::de::{self, IgnoredAny, SeqAccess, Visitor};
use serde::ser::SerializeTuple;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{FixedArray, FixedCharBuffer};

/// Requires crate feature `"serde"`
impl<T: Serialize, const N: usize> Serialize for FixedArray<T, N> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut tuple = serializer.serialize_tuple(N)?;
        for elt in self {
            tuple.serialize_element(elt)?;
        }
        tuple.end()
    }
}

struct FixedArrayVisitor<T, const N: usize>(PhantomData<T>);

impl<'de, T: Deserialize<'de>, const N: usize> Visitor<'de> for FixedArrayVisitor<T, N> {
    type Value = FixedArray<T, N>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "an array of length {}", N)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut slots = FixedArray::<Option<T>, N>::from_fn(|_| None);
        for (i, slot) in slots.iter_mut().enumerate() {
            match seq.next_element()? {
                Some(elt) => *slot = Some(elt),
                None => return Err(de::Error::invalid_length(i, &self)),
            }
        }
        if seq.next_element::<IgnoredAny>()?.is_some() {
            return Err(de::Error::invalid_length(N + 1, &self));
        }
        Ok(FixedArray::from_fn(|i| slots[i].take().expect("every slot is filled")))
    }
}

/// Requires crate feature `"serde"`
impl<'de, T: Deserialize<'de>, const N: usize> Deserialize<'de> for FixedArray<T, N> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_tuple(N, FixedArrayVisitor::<T, N>(PhantomData))
    }
}

/// Requires crate feature `"serde"`
impl<const N: usize> Serialize for FixedCharBuffer<N> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.get_string())
    }
}

struct FixedCharBufferVisitor<const N: usize>;

impl<'de, const N: usize> Visitor<'de> for FixedCharBufferVisitor<N> {
    type Value = FixedCharBuffer<N>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "a string without nul bytes no more than {} bytes long",
               N.saturating_sub(1))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        if v.len() >= N {
            return Err(E::invalid_length(v.len(), &self));
        }
        if v.as_bytes().contains(&0) {
            return Err(E::invalid_value(de::Unexpected::Str(v), &self));
        }
        Ok(FixedCharBuffer::from_str_truncate(v))
    }

    fn visit_bytes<E: de::Error>(self, v: &[u8]) -> Result<Self::Value, E> {
        let s = str::from_utf8(v).map_err(|_| E::invalid_value(de::Unexpected::Bytes(v), &self))?;
        self.visit_str(s)
    }
}

/// Requires crate feature `"serde"`
impl<'de, const N: usize> Deserialize<'de> for FixedCharBuffer<N> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_str(FixedCharBufferVisitor::<N>)
    }
}
