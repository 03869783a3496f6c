//! Length-prefixed composite codecs: strings, sequences, and maps.
//!
//! Every composite encodes a 4-byte little-endian count followed by its
//! contents via the element codecs, recursively. The wire is
//! container-agnostic: a `Vec`, `VecDeque`, and `LinkedList` holding the
//! same logical sequence produce identical bytes.

use std::collections::{BTreeMap, HashMap, LinkedList, VecDeque};
use std::hash::Hash;

use crate::codec::{Codec, LEN_PREFIX_SIZE};

impl Codec for String {
    fn serialized_size(&self) -> usize {
        LEN_PREFIX_SIZE + self.len()
    }

    fn serialize(&self, buf: &mut [u8]) -> usize {
        if self.len() > u32::MAX as usize {
            return 0;
        }
        let total = self.serialized_size();
        if buf.len() < total {
            return 0;
        }
        (self.len() as u32).serialize(buf);
        buf[LEN_PREFIX_SIZE..total].copy_from_slice(self.as_bytes());
        total
    }

    fn deserialize(&mut self, buf: &[u8]) -> usize {
        let mut count = 0u32;
        let read = count.deserialize(buf);
        if read == 0 {
            return 0;
        }
        let len = count as usize;
        if buf.len() - read < len {
            return 0;
        }
        match std::str::from_utf8(&buf[read..read + len]) {
            Ok(s) => {
                self.clear();
                self.push_str(s);
                read + len
            }
            Err(_) => 0,
        }
    }
}

macro_rules! seq_codec {
    ($($seq:ident :: $push:ident),* $(,)?) => {$(
        impl<T: Codec + Default> Codec for $seq<T> {
            fn serialized_size(&self) -> usize {
                LEN_PREFIX_SIZE
                    + self.iter().map(Codec::serialized_size).sum::<usize>()
            }

            fn serialize(&self, buf: &mut [u8]) -> usize {
                if self.len() > u32::MAX as usize {
                    return 0;
                }
                let mut written = (self.len() as u32).serialize(buf);
                if written == 0 {
                    return 0;
                }
                for item in self {
                    let n = item.serialize(&mut buf[written..]);
                    if n == 0 {
                        return 0;
                    }
                    written += n;
                }
                written
            }

            fn deserialize(&mut self, buf: &[u8]) -> usize {
                self.clear();
                let mut count = 0u32;
                let mut read = count.deserialize(buf);
                if read == 0 {
                    return 0;
                }
                // Elements are decoded one at a time; the advertised count
                // never drives allocation.
                for _ in 0..count {
                    let mut item = T::default();
                    let n = item.deserialize(&buf[read..]);
                    if n == 0 {
                        return 0;
                    }
                    read += n;
                    self.$push(item);
                }
                read
            }
        }
    )*};
}

seq_codec! {
    Vec::push,
    VecDeque::push_back,
    LinkedList::push_back,
}

fn serialize_pairs<'a, K, V, I>(len: usize, pairs: I, buf: &mut [u8]) -> usize
where
    K: Codec + 'a,
    V: Codec + 'a,
    I: Iterator<Item = (&'a K, &'a V)>,
{
    if len > u32::MAX as usize {
        return 0;
    }
    let mut written = (len as u32).serialize(buf);
    if written == 0 {
        return 0;
    }
    for (key, value) in pairs {
        let n = key.serialize(&mut buf[written..]);
        if n == 0 {
            return 0;
        }
        written += n;
        let n = value.serialize(&mut buf[written..]);
        if n == 0 {
            return 0;
        }
        written += n;
    }
    written
}

fn deserialize_pairs<K, V, F>(buf: &[u8], mut insert: F) -> usize
where
    K: Codec + Default,
    V: Codec + Default,
    F: FnMut(K, V),
{
    let mut count = 0u32;
    let mut read = count.deserialize(buf);
    if read == 0 {
        return 0;
    }
    for _ in 0..count {
        let mut key = K::default();
        let n = key.deserialize(&buf[read..]);
        if n == 0 {
            return 0;
        }
        read += n;
        let mut value = V::default();
        let n = value.deserialize(&buf[read..]);
        if n == 0 {
            return 0;
        }
        read += n;
        insert(key, value);
    }
    read
}

fn pairs_size<'a, K, V, I>(pairs: I) -> usize
where
    K: Codec + 'a,
    V: Codec + 'a,
    I: Iterator<Item = (&'a K, &'a V)>,
{
    LEN_PREFIX_SIZE
        + pairs
            .map(|(k, v)| k.serialized_size() + v.serialized_size())
            .sum::<usize>()
}

impl<K, V> Codec for HashMap<K, V>
where
    K: Codec + Default + Eq + Hash,
    V: Codec + Default,
{
    fn serialized_size(&self) -> usize {
        pairs_size(self.iter())
    }

    fn serialize(&self, buf: &mut [u8]) -> usize {
        // Pairs go out in the map's native iteration order; the receiver
        // rebuilds by insertion, so only value equality is preserved.
        serialize_pairs(self.len(), self.iter(), buf)
    }

    fn deserialize(&mut self, buf: &[u8]) -> usize {
        self.clear();
        deserialize_pairs(buf, |key, value| {
            self.insert(key, value);
        })
    }
}

impl<K, V> Codec for BTreeMap<K, V>
where
    K: Codec + Default + Ord,
    V: Codec + Default,
{
    fn serialized_size(&self) -> usize {
        pairs_size(self.iter())
    }

    fn serialize(&self, buf: &mut [u8]) -> usize {
        serialize_pairs(self.len(), self.iter(), buf)
    }

    fn deserialize(&mut self, buf: &[u8]) -> usize {
        self.clear();
        deserialize_pairs(buf, |key, value| {
            self.insert(key, value);
        })
    }
}
