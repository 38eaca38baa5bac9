use std::hash::{BuildHasher, Hash, Hasher};

/// A value which hashes to a caller-chosen number instead of anything derived from its contents.
///
/// Paired with [`BadHasherBuilder`], this pins values to exact buckets, which is how the hash set
/// tests construct collision runs on purpose. Equality still compares the values, so two
/// ManualHashes can collide without being equal.
#[derive(Debug)]
#[allow(unused)]
pub struct ManualHash<T: Eq> {
    hash: u64,
    value: T,
}

impl<T: Eq> ManualHash<T> {
    #[allow(unused)]
    pub const fn new(hash: u64, value: T) -> ManualHash<T> {
        ManualHash {
            hash,
            value,
        }
    }

    #[allow(unused)]
    pub fn value(self) -> T {
        self.value
    }
}

impl<T: Eq> Hash for ManualHash<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash);
    }
}

impl<T: Eq> PartialEq for ManualHash<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T: Eq> Eq for ManualHash<T> {}

/// A transparent hasher: a written `u64` becomes the finished hash unchanged, so a
/// [`ManualHash`]'s number passes straight through to the table's bucket arithmetic.
///
/// Anything else that gets written is folded in bytewise, which at least terminates, but no
/// promises are made about distribution. Strictly for tests.
#[derive(Debug, Default)]
pub struct BadHasher(u64);

impl Hasher for BadHasher {
    fn finish(&self) -> u64 {
        self.0
    }

    fn write_u64(&mut self, i: u64) {
        self.0 = i;
    }

    fn write(&mut self, bytes: &[u8]) {
        for byte in bytes {
            self.0 = self.0.rotate_left(8) ^ u64::from(*byte);
        }
    }
}

#[derive(Debug, Default)]
pub struct BadHasherBuilder;

impl BuildHasher for BadHasherBuilder {
    type Hasher = BadHasher;

    fn build_hasher(&self) -> Self::Hasher {
        BadHasher::default()
    }
}
