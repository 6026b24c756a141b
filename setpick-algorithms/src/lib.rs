use ahash::RandomState;

pub fn seeded_hasher(seed: &[u8; 32]) -> RandomState {
    let words: [u64; 4] =
        std::array::from_fn(|i| u64::from_be_bytes(std::array::from_fn(|j| seed[i * 8 + j])));
    RandomState::with_seeds(words[0], words[1], words[2], words[3])
}
pub(crate) type HashMap<K, V> = std::collections::HashMap<K, V, RandomState>;

pub mod problem_set;
