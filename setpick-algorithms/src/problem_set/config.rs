use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use setpick_challenges::problem_set::{CatalogOrder, ProblemId, Solution};
use setpick_utils::{dejsonify, ValueWidth};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    #[default]
    BestFirst,
    Exhaustive,
    Dynamic,
}

/// Order of the ids in a reported solution.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum OutputOrder {
    #[default]
    Ascending,
    /// The order in which the search added the problems.
    Accumulation,
}

impl OutputOrder {
    pub fn finish(&self, mut items: Vec<ProblemId>) -> Solution {
        if *self == OutputOrder::Ascending {
            items.sort_unstable();
        }
        Solution { items }
    }
}

/// What the dominance table compares before discarding a candidate.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum DominanceRule {
    /// Same aggregates, no less value, and a frontier index no greater than
    /// the candidate's. Never discards the optimum.
    #[default]
    IndexAware,
    /// Same aggregates and no less value, whatever the frontier index. Prunes
    /// more, but a discarded candidate may have been the only route to the
    /// optimum.
    Aggregate,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct SearchConfig {
    pub algorithm: Algorithm,
    pub value_width: ValueWidth,
    pub catalog_order: CatalogOrder,
    pub output_order: OutputOrder,
    pub max_subset_size: Option<usize>,
    pub prune_dominated: bool,
    pub dominance_rule: DominanceRule,
    pub max_frontier_len: Option<usize>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::default(),
            value_width: ValueWidth::default(),
            catalog_order: CatalogOrder::default(),
            output_order: OutputOrder::default(),
            max_subset_size: None,
            prune_dominated: true,
            dominance_rule: DominanceRule::default(),
            max_frontier_len: None,
        }
    }
}

impl SearchConfig {
    /// Merges `hyperparameters` over the defaults.
    pub fn initialize(hyperparameters: &Option<Map<String, Value>>) -> Result<Self> {
        let mut merged = serde_json::to_value(Self::default())?;
        if let (Value::Object(ref mut obj), Some(map)) = (&mut merged, hyperparameters) {
            for (k, v) in map {
                obj.insert(k.clone(), v.clone());
            }
        }
        let config: Self =
            serde_json::from_value(merged).map_err(|e| anyhow!("Invalid search config: {}", e))?;
        config.check()?;
        Ok(config)
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let hyperparameters = dejsonify::<Option<Map<String, Value>>>(json)
            .map_err(|e| anyhow!("Search config must be a json object: {}", e))?;
        Self::initialize(&hyperparameters)
    }

    pub fn check(&self) -> Result<()> {
        if self.max_frontier_len == Some(0) {
            return Err(anyhow!("max_frontier_len must be at least 1"));
        }
        Ok(())
    }

    pub fn admits(&self, count: usize) -> bool {
        self.max_subset_size.map_or(true, |cap| count <= cap)
    }
}
