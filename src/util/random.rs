use std::hash::{BuildHasher, RandomState};

/// A xorshift64 generator. Not remotely cryptographic, but plenty for deciding skip list node
/// heights, which only need to look like independent coin flips.
#[derive(Debug, Clone)]
pub(crate) struct XorShift64 {
    state: u64,
}

impl XorShift64 {
    /// Creates a generator seeded from the process's [`RandomState`] entropy, so two lists don't
    /// share a level sequence.
    pub fn from_entropy() -> XorShift64 {
        // The state must be non-zero or the generator gets stuck at zero forever.
        XorShift64 {
            state: RandomState::new().hash_one(0x9E37_79B9_7F4A_7C15_u64) | 1,
        }
    }

    /// Creates a generator from a fixed seed, for reproducible sequences. The low bit is forced
    /// on so the state can never be zero.
    pub const fn with_seed(seed: u64) -> XorShift64 {
        XorShift64 {
            state: seed | 1,
        }
    }

    pub const fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }

    /// A fair coin flip.
    pub const fn coin_flip(&mut self) -> bool {
        // The low bits of xorshift are the weakest, so use a high one.
        self.next_u64() >> 63 == 1
    }
}
