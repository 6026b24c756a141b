use super::{Challenge, Problem};
use anyhow::{anyhow, Result};
use rand::{rngs::SmallRng, seq::SliceRandom, Rng, SeedableRng};
use serde::{Deserialize, Serialize};

pub const BASE_TOPICS: [&str; 10] = [
    "dp", "graphs", "trees", "stacks", "queues", "greedy", "arrays", "heaps", "math", "strings",
];

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorSettings {
    pub min_items: usize,
    pub max_items: usize,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            min_items: 50,
            max_items: 60,
        }
    }
}

impl Challenge<u64> {
    /// Random instance in which every problem is worth at least a tenth of the
    /// required points, so any answer needs at most ten problems.
    ///
    /// A base value `P` fixes the scale: points lie in `[P, 2P]` and the
    /// threshold in `[5P, 10P]`.
    pub fn generate_instance(seed: &[u8; 32], settings: &GeneratorSettings) -> Result<Self> {
        if settings.min_items == 0 || settings.min_items > settings.max_items {
            return Err(anyhow!(
                "Invalid item range [{}, {}]",
                settings.min_items,
                settings.max_items
            ));
        }
        let mut rng = SmallRng::from_seed(seed.clone());
        let num_problems = rng.gen_range(settings.min_items..=settings.max_items);

        let base: u64 = rng.gen_range(100_000_000_000_000..=500_000_000_000_000);
        let problems = (1..=num_problems as u32)
            .map(|id| Problem {
                id,
                points: rng.gen_range(base..=2 * base),
                difficulty: rng.gen_range(5..=10),
                topic: BASE_TOPICS
                    .choose(&mut rng)
                    .map(|t| t.to_string())
                    .unwrap_or_default(),
                length: rng.gen_range(100..=1000),
            })
            .collect();
        let threshold = rng.gen_range(5 * base..=10 * base);

        Ok(Challenge {
            threshold,
            preferred_topics: BASE_TOPICS.iter().map(|t| t.to_string()).collect(),
            problems,
        })
    }
}

/// Hand-written inputs with their expected answers.
pub fn sample_instances() -> Vec<(&'static str, &'static str)> {
    vec![
        (
            "10 4\n\
             dp graphs arrays\n\
             1 5 3 dp 120\n\
             2 6 5 graphs 200\n\
             3 4 1 arrays 50\n\
             4 8 4 dp 300\n",
            "3 4",
        ),
        (
            "10 3\n\
             stacks queues trees\n\
             1 2 1 stacks 100\n\
             2 2 1 stacks 100\n\
             3 10 9 trees 100\n",
            "3",
        ),
        (
            "100000000000000 4\n\
             greedy dijkstra strings\n\
             1 60000000000000 3 greedy 5000\n\
             2 50000000000000 2 dijkstra 8000\n\
             3 40000000000000 1 strings 2000\n\
             4 70000000000000 5 greedy 10000\n",
            "1 3",
        ),
    ]
}

/// Hand-written instances covering long catalogs, wide values, uniform
/// difficulties, a single preferred topic and ragged whitespace. Expected
/// answers come from solving, not from fixtures.
pub fn edge_instances() -> Vec<String> {
    let mut instances: Vec<String> = EDGE_INSTANCES.iter().map(|text| text.to_string()).collect();
    instances.insert(3, uniform_difficulty_instance());
    instances
}

// Three tiers of points at the same difficulty.
fn uniform_difficulty_instance() -> String {
    let mut text = format!("180 25\n{}\n", BASE_TOPICS.join(" "));
    for id in 1..=25usize {
        let (points, length) = match id {
            1..=9 => (60, 200),
            10..=19 => (30, 150),
            _ => (10, 100),
        };
        let topic = BASE_TOPICS[(id - 1) % BASE_TOPICS.len()];
        text.push_str(&format!("{} {} 3 {} {}\n", id, points, topic, length));
    }
    text
}

const EDGE_INSTANCES: [&str; 9] = [
    "500 25\n\
     dp graphs trees stacks queues greedy arrays heaps math strings\n\
     1 200 2 dp 500\n\
     2 150 3 graphs 400\n\
     3 180 4 trees 350\n\
     4 50 1 stacks 300\n\
     5 60 1 queues 250\n\
     6 70 2 greedy 200\n\
     7 40 1 arrays 180\n\
     8 30 2 heaps 160\n\
     9 25 1 math 140\n\
     10 20 2 strings 130\n\
     11 15 1 dp 120\n\
     12 14 1 graphs 110\n\
     13 13 1 trees 100\n\
     14 12 1 stacks 95\n\
     15 11 1 queues 90\n\
     16 10 1 greedy 85\n\
     17 9 1 arrays 80\n\
     18 8 1 heaps 75\n\
     19 7 1 math 70\n\
     20 6 1 strings 65\n\
     21 5 1 dp 60\n\
     22 4 1 graphs 55\n\
     23 3 1 trees 50\n\
     24 2 1 stacks 45\n\
     25 1 1 queues 40\n",
    "1500000000000000 18\n\
     dp graphs trees stacks queues greedy arrays heaps math strings\n\
     1 300000000000000 5 dp 500\n\
     2 250000000000000 4 graphs 480\n\
     3 200000000000000 4 trees 460\n\
     4 180000000000000 3 stacks 440\n\
     5 150000000000000 3 queues 420\n\
     6 140000000000000 3 greedy 400\n\
     7 130000000000000 2 arrays 380\n\
     8 120000000000000 2 heaps 360\n\
     9 110000000000000 2 math 340\n\
     10 100000000000000 1 strings 320\n\
     11 90000000000000  1 dp 300\n\
     12 80000000000000  1 graphs 290\n\
     13 70000000000000  1 trees 280\n\
     14 60000000000000  1 stacks 270\n\
     15 50000000000000  1 queues 260\n\
     16 40000000000000  1 greedy 250\n\
     17 30000000000000  1 arrays 240\n\
     18 20000000000000  1 heaps 230\n",
    "120 18\n\
     dp graphs trees stacks queues greedy arrays heaps math strings\n\
     1 7 3 dp 200\n\
     2 6 3 graphs 180\n\
     3 8 3 trees 160\n\
     4 5 3 stacks 210\n\
     5 9 3 queues 190\n\
     6 7 3 greedy 170\n\
     7 8 3 arrays 160\n\
     8 6 3 heaps 150\n\
     9 9 3 math 140\n\
     10 5 3 strings 130\n\
     11 7 3 dp 200\n\
     12 6 3 graphs 180\n\
     13 8 3 trees 160\n\
     14 5 3 stacks 210\n\
     15 9 3 queues 195\n\
     16 7 3 greedy 170\n\
     17 8 3 arrays 165\n\
     18 6 3 heaps 155\n",
    "200 25\n\
     dp\n\
     1 50 2 dp 2000\n\
     2 60 2 dp 1900\n\
     3 70 2 dp 1800\n\
     4 80 2 dp 1700\n\
     5 40 2 dp 1600\n\
     6 30 2 dp 1500\n\
     7 20 2 dp 1400\n\
     8 25 2 dp 1300\n\
     9 35 2 dp 1200\n\
     10 45 2 dp 1100\n\
     11 15 2 dp 1000\n\
     12 18 2 dp 900\n\
     13 22 2 dp 800\n\
     14 29 2 dp 700\n\
     15 33 2 dp 600\n\
     16 37 2 dp 500\n\
     17 41 2 dp 400\n\
     18 44 2 dp 300\n\
     19 48 2 dp 200\n\
     20 52 2 dp 100\n\
     21 5 2 dp 90\n\
     22 8 2 dp 80\n\
     23 10 2 dp 70\n\
     24 12 2 dp 60\n\
     25 14 2 dp 50\n",
    "220 20\n\
     dp graphs trees stacks queues greedy arrays heaps math strings\n\
     1 40 3 dp 200\n\
     2 35 3 graphs 190\n\
     3 30 3 trees 185\n\
     4 28 4 stacks 180\n\
     5 27 4 queues 175\n\
     6 10 2 greedy 150\n\
     7 10 2 arrays 145\n\
     8 9 2 heaps 140\n\
     9 9 2 math 135\n\
     10 8 2 strings 130\n\
     11 7 2 dp 120\n\
     12 7 2 graphs 115\n\
     13 6 2 trees 110\n\
     14 6 2 stacks 105\n\
     15 5 2 queues 100\n\
     16 4 1 greedy 90\n\
     17 4 1 arrays 80\n\
     18 4 1 heaps 70\n\
     19 3 1 math 60\n\
     20 3 1 strings 50\n",
    "500000000000 25\n\
     dp graphs trees stacks queues greedy arrays heaps math strings\n\
     1 300000000000 4 dp 2000\n\
     2 250000000000 3 graphs 1900\n\
     3 200000000000 5 trees 1800\n\
     4 100000000000 2 stacks 1700\n\
     5 150000000000 3 queues 1600\n\
     6 120000000000 2 greedy 1500\n\
     7 110000000000 4 arrays 1400\n\
     8 90000000000 5 heaps 1300\n\
     9 80000000000 3 math 1200\n\
     10 70000000000 2 strings 1100\n\
     11 60000000000 2 dp 1000\n\
     12 50000000000 3 graphs 900\n\
     13 40000000000 3 trees 800\n\
     14 30000000000 4 stacks 700\n\
     15 20000000000 5 queues 600\n\
     16 18000000000 1 greedy 500\n\
     17 16000000000 1 arrays 450\n\
     18 14000000000 1 heaps 400\n\
     19 12000000000 1 math 350\n\
     20 10000000000 1 strings 300\n\
     21 9000000000 1 dp 260\n\
     22 8000000000 1 graphs 240\n\
     23 7000000000 1 trees 220\n\
     24 6000000000 1 stacks 200\n\
     25 5000000000 1 queues 180\n",
    "300000000000000 25\n\
     dp graphs trees stacks queues greedy arrays heaps math strings\n\
     1 80000000000000 4 dp 500\n\
     2 70000000000000 5 graphs 480\n\
     3 60000000000000 3 trees 460\n\
     4 50000000000000 3 stacks 440\n\
     5 40000000000000 2 queues 420\n\
     6 30000000000000 1 greedy 400\n\
     7 25000000000000 2 arrays 380\n\
     8 20000000000000 1 heaps 360\n\
     9 18000000000000 1 math 340\n\
     10 16000000000000 1 strings 320\n\
     11 14000000000000 2 dp 300\n\
     12 13000000000000 2 graphs 290\n\
     13 12000000000000 3 trees 280\n\
     14 11000000000000 3 stacks 270\n\
     15 10000000000000 1 queues 260\n\
     16 9000000000000 1 greedy 250\n\
     17 8000000000000 1 arrays 240\n\
     18 7000000000000 1 heaps 230\n\
     19 6000000000000 1 math 220\n\
     20 5000000000000 1 strings 210\n\
     21 4000000000000 1 dp 200\n\
     22 3000000000000 1 graphs 190\n\
     23 2000000000000 1 trees 180\n\
     24 1000000000000 1 stacks 170\n\
     25 900000000000 1 queues 160\n",
    "300 25\n\
     dp graphs trees stacks queues greedy arrays heaps math strings\n\
     1 100 5 dp 500\n\
     2 100 5 graphs 450\n\
     3 100 5 trees 480\n\
     4 90 5 stacks 430\n\
     5 90 5 queues 420\n\
     6 80 5 greedy 410\n\
     7 80 5 arrays 400\n\
     8 70 5 heaps 390\n\
     9 70 5 math 380\n\
     10 60 5 strings 370\n\
     11 50 5 dp 360\n\
     12 50 5 graphs 350\n\
     13 50 5 trees 340\n\
     14 40 5 stacks 330\n\
     15 40 5 queues 320\n\
     16 40 5 greedy 310\n\
     17 30 5 arrays 300\n\
     18 30 5 heaps 290\n\
     19 30 5 math 280\n\
     20 30 5 strings 270\n\
     21 20 5 dp 260\n\
     22 20 5 graphs 250\n\
     23 20 5 trees 240\n\
     24 20 5 stacks 230\n\
     25 20 5 queues 220\n",
    "260 18\n\
     dp graphs trees stacks queues greedy arrays heaps math strings\n\
     1 60 3 dp      300\n\
     2 55 3 graphs  280\n\
     3 50 4 trees   260\n\
     4 45 4 stacks  240\n\
     5 40 5 queues  230\n\
     6 20 2 greedy  200\n\
     7 18 2 arrays  195\n\
     8 17 2 heaps   190\n\
     9 15 2 math    185\n\
     10 14 2 strings 180\n\
     11 12 1 dp      160\n\
     12 12 1 graphs  150\n\
     13 10 1 trees   140\n\
     14 10 1 stacks  130\n\
     15 9  1 queues  120\n\
     16 8  1 greedy  100\n\
     17 7  1 arrays   90\n\
     18 6  1 heaps    80\n",
];
