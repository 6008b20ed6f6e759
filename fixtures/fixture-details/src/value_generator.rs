// Copyright (c) The kmap-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use proptest::{
    strategy::{Strategy, ValueTree},
    test_runner::{Config, RngAlgorithm, TestRng, TestRunner},
};
use std::hash::{Hash, Hasher};
use twox_hash::XxHash64;

/// Generates values out of proptest strategies, deterministically for a given seed.
#[derive(Debug)]
pub struct ValueGenerator {
    runner: TestRunner,
}

impl ValueGenerator {
    /// Creates a generator whose ChaCha RNG is seeded from the hash of `seed`.
    pub fn from_seed(seed: impl Hash) -> Self {
        // ChaCha takes a 32-byte seed: fill it with four differently seeded hashes.
        let mut bytes = [0_u8; 32];
        for (ix, chunk) in bytes.chunks_exact_mut(8).enumerate() {
            let mut hasher = XxHash64::with_seed(ix as u64);
            seed.hash(&mut hasher);
            chunk.copy_from_slice(&hasher.finish().to_le_bytes());
        }

        let rng = TestRng::from_seed(RngAlgorithm::ChaCha, &bytes);
        Self {
            runner: TestRunner::new_with_rng(Config::default(), rng),
        }
    }

    /// Forks off a new generator whose RNG is derived from this one.
    ///
    /// Values drawn from the fork don't affect the values this generator produces next.
    pub fn partial_clone(&mut self) -> Self {
        Self {
            runner: TestRunner::new_with_rng(Config::default(), self.runner.new_rng()),
        }
    }

    pub fn generate<S: Strategy>(&mut self, strategy: S) -> S::Value {
        strategy
            .new_tree(&mut self.runner)
            .expect("creating a new value should succeed")
            .current()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_deterministic() {
        let values = |seed| {
            let mut value_gen = ValueGenerator::from_seed(seed);
            (0..8)
                .map(|_| value_gen.partial_clone().generate(any::<u64>()))
                .collect::<Vec<_>>()
        };
        assert_eq!(values("kmap-min"), values("kmap-min"));
        assert_ne!(values("kmap-min"), values("kmap-min-2"));
    }
}
