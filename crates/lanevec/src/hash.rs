const PRIME2: u32 = 0x85EB_CA77;
const PRIME3: u32 = 0xC2B2_AE3D;
const PRIME4: u32 = 0x27D4_EB2F;

/// Order-sensitive hash combiner used for vector hash codes.
///
/// Derived from the xxHash32 round and avalanche steps, without a seed:
///
/// ```text
/// add:    acc = rotl(acc + h * P3, 17) * P4
/// finish: acc ^= acc >> 15; acc *= P2; acc ^= acc >> 13; acc *= P3; acc ^= acc >> 16
/// ```
///
/// The accumulator starts at the first lane's hash. Results are stable across
/// runs and platforms, so they can key persistent maps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashCombiner {
    acc: u32,
}

impl HashCombiner {
    #[inline]
    pub const fn new(seed: u32) -> Self {
        Self { acc: seed }
    }

    #[inline]
    pub const fn add(mut self, hash: u32) -> Self {
        self.acc = self
            .acc
            .wrapping_add(hash.wrapping_mul(PRIME3))
            .rotate_left(17)
            .wrapping_mul(PRIME4);
        self
    }

    #[inline]
    pub const fn finish(self) -> u32 {
        let mut acc = self.acc;
        acc ^= acc >> 15;
        acc = acc.wrapping_mul(PRIME2);
        acc ^= acc >> 13;
        acc = acc.wrapping_mul(PRIME3);
        acc ^= acc >> 16;
        acc
    }

    /// Seeds with the first hash and folds in the rest. Empty input gives `0`.
    pub fn combine(hashes: impl IntoIterator<Item = u32>) -> u32 {
        let mut iter = hashes.into_iter();
        let Some(first) = iter.next() else {
            return 0;
        };
        iter.fold(Self::new(first), Self::add).finish()
    }
}
