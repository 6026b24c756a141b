#![allow(dead_code)]

use rand::{rngs::SmallRng, Rng, SeedableRng};
use setpick_challenges::problem_set::{Challenge, Problem};

pub const TOPICS: [&str; 4] = ["a", "b", "c", "d"];

/// `(id, points, difficulty, topic, length)`
pub fn challenge(
    threshold: u64,
    preferred_topics: &[&str],
    problems: &[(u32, u64, u32, &str, u32)],
) -> Challenge<u64> {
    Challenge {
        threshold,
        preferred_topics: preferred_topics.iter().map(|t| t.to_string()).collect(),
        problems: problems
            .iter()
            .map(|&(id, points, difficulty, topic, length)| Problem {
                id,
                points,
                difficulty,
                topic: topic.to_string(),
                length,
            })
            .collect(),
    }
}

/// Small random instance. Ids are shuffled so catalog orders differ, and the
/// threshold is sometimes out of reach.
pub fn random_challenge(seed: u64, max_items: usize) -> Challenge<u64> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let n = rng.gen_range(1..=max_items);
    let mut ids: Vec<u32> = (1..=n as u32).collect();
    for i in (1..ids.len()).rev() {
        let j = rng.gen_range(0..=i);
        ids.swap(i, j);
    }
    let problems: Vec<Problem<u64>> = ids
        .into_iter()
        .map(|id| Problem {
            id,
            points: rng.gen_range(0..=40),
            difficulty: rng.gen_range(0..=4),
            topic: TOPICS[rng.gen_range(0..TOPICS.len())].to_string(),
            length: rng.gen_range(0..=3),
        })
        .collect();
    let total: u64 = problems.iter().map(|p| p.points).sum();
    let threshold = rng.gen_range(0..=total + 10);
    let num_preferred = rng.gen_range(0..=TOPICS.len());
    Challenge {
        threshold,
        preferred_topics: TOPICS[..num_preferred].iter().map(|t| t.to_string()).collect(),
        problems,
    }
}
