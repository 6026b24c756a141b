mod catalog;
mod format;
mod generator;
mod ranking;
mod validator;

pub use catalog::*;
pub use format::*;
pub use generator::*;
pub use ranking::*;
pub use validator::*;

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use setpick_utils::Points;
use std::{
    collections::{HashMap, HashSet},
    fmt,
    str::FromStr,
};

pub type ProblemId = u32;

/// One problem as it appears in the input, before topic ranking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Problem<V> {
    pub id: ProblemId,
    pub points: V,
    pub difficulty: u32,
    pub topic: String,
    pub length: u32,
}

/// Aggregates that decide which subset is better. The derived `Ord` is
/// lexicographic in field order: cost, then count, then negated preference,
/// then length.
#[derive(
    Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default,
)]
pub struct CostKey {
    pub cost: u64,
    pub count: u32,
    pub neg_preference: i64,
    pub length: u64,
}

impl CostKey {
    pub fn extend<V>(&self, item: &Item<V>) -> CostKey {
        CostKey {
            cost: self.cost + item.cost as u64,
            count: self.count + 1,
            neg_preference: self.neg_preference - item.rank as i64,
            length: self.length + item.length as u64,
        }
    }
}

impl fmt::Display for CostKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "cost={} count={} preference={} length={}",
            self.cost, self.count, -self.neg_preference, self.length
        )
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct Solution {
    pub items: Vec<ProblemId>,
}

impl Solution {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ids: Vec<String> = self.items.iter().map(|id| id.to_string()).collect();
        write!(f, "{}", ids.join(" "))
    }
}

impl FromStr for Solution {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let items = s
            .split_whitespace()
            .map(|token| {
                token
                    .parse::<ProblemId>()
                    .map_err(|e| anyhow!("Invalid problem id '{}': {}", token, e))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Solution { items })
    }
}

#[derive(Debug, Clone)]
pub struct Challenge<V> {
    pub threshold: V,
    pub preferred_topics: Vec<String>,
    pub problems: Vec<Problem<V>>,
}

impl<V: Points> Challenge<V> {
    pub fn num_problems(&self) -> usize {
        self.problems.len()
    }

    pub fn ranking(&self) -> TopicRanking {
        TopicRanking::new(&self.preferred_topics)
    }

    pub fn catalog(&self, order: CatalogOrder) -> Catalog<V> {
        let ranking = self.ranking();
        let items = self
            .problems
            .iter()
            .map(|p| Item {
                id: p.id,
                value: p.points,
                cost: p.difficulty,
                length: p.length,
                rank: ranking.rank(&p.topic),
            })
            .collect();
        Catalog::new(items, order)
    }

    /// Checks that `solution` names distinct known problems, respects the size
    /// cap and reaches the threshold. Returns the solution's cost key.
    pub fn verify_solution(
        &self,
        solution: &Solution,
        max_subset_size: Option<usize>,
    ) -> Result<CostKey> {
        let selected: HashSet<ProblemId> = solution.items.iter().cloned().collect();
        if selected.len() != solution.items.len() {
            return Err(anyhow!("Duplicate problems selected."));
        }
        if let Some(cap) = max_subset_size {
            if solution.items.len() > cap {
                return Err(anyhow!(
                    "Selected {} problems, more than the maximum of {}",
                    solution.items.len(),
                    cap
                ));
            }
        }

        let ranking = self.ranking();
        let by_id: HashMap<ProblemId, &Problem<V>> =
            self.problems.iter().map(|p| (p.id, p)).collect();
        let mut key = CostKey::default();
        let mut total = V::zero();
        for id in &solution.items {
            let problem = by_id
                .get(id)
                .ok_or_else(|| anyhow!("Problem ({}) does not exist", id))?;
            key = key.extend(&Item {
                id: problem.id,
                value: problem.points,
                cost: problem.difficulty,
                length: problem.length,
                rank: ranking.rank(&problem.topic),
            });
            total = total.saturating_sum(problem.points);
        }

        if total < self.threshold {
            return Err(anyhow!(
                "Total points ({}) is less than required ({})",
                total,
                self.threshold
            ));
        }
        Ok(key)
    }
}
