//! Deterministic address corpora shared by the benchmarks.

use std::net::{Ipv4Addr, Ipv6Addr};

pub const CORPUS_LEN: usize = 1000;

/// SplitMix64, seeded so every run benchmarks the same literals.
pub struct SplitMix(u64);

impl SplitMix {
    pub fn new(seed: u64) -> Self {
        Self(seed)
    }

    pub fn next_u64(&mut self) -> u64 {
        self.0 = self.0.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.0;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }
}

pub fn ipv4_literals() -> Vec<String> {
    let mut rng = SplitMix::new(0xDEAD_BEEF);
    (0..CORPUS_LEN)
        .map(|_| Ipv4Addr::from(rng.next_u64() as u32).to_string())
        .collect()
}

/// Random addresses, with every fourth one sparse so `::` elision shows up.
pub fn ipv6_literals() -> Vec<String> {
    let mut rng = SplitMix::new(0xFEED_F00D);
    (0..CORPUS_LEN)
        .map(|i| {
            let hi = rng.next_u64();
            let lo = rng.next_u64();
            let bits = if i % 4 == 0 {
                (u128::from(hi & 0xFFFF_0000_0000_0000) << 64) | u128::from(lo & 0xFFFF)
            } else {
                (u128::from(hi) << 64) | u128::from(lo)
            };
            // Mapped/compatible addresses would print with a dotted tail.
            let bits = if bits >> 32 == 0xFFFF || bits >> 32 == 0 {
                bits | (1 << 127)
            } else {
                bits
            };
            Ipv6Addr::from_bits(bits).to_string()
        })
        .collect()
}
