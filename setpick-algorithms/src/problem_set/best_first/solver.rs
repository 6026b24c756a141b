use super::{DominanceTable, Frontier, PathArena, SearchState};
use crate::problem_set::SearchConfig;
use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use setpick_challenges::problem_set::{Catalog, Challenge, CostKey, Solution};
use setpick_utils::Points;
use tracing::{debug, trace};

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub states_popped: u64,
    pub states_pushed: u64,
    pub pruned_dominated: u64,
    pub rejected_by_size: u64,
    pub peak_frontier_len: usize,
    pub dominance_keys: usize,
}

#[derive(Debug, Clone)]
pub struct SearchOutcome {
    /// `None` when the frontier ran dry without reaching the threshold.
    pub solution: Option<Solution>,
    pub key: Option<CostKey>,
    pub stats: SearchStats,
}

/// Best-first branch and bound over subsets of a catalog.
///
/// States leave the frontier in ascending cost-key order and a child's key
/// is never smaller than its parent's, so the first state that reaches the
/// threshold has the smallest key of any qualifying subset. Each subset is
/// built once, by adding items in increasing catalog index.
pub struct Solver<V> {
    catalog: Catalog<V>,
    threshold: V,
    config: SearchConfig,
}

impl<V: Points> Solver<V> {
    pub fn new(challenge: &Challenge<V>, config: &SearchConfig) -> Self {
        Self::from_catalog(
            challenge.catalog(config.catalog_order),
            challenge.threshold,
            config,
        )
    }

    pub fn from_catalog(catalog: Catalog<V>, threshold: V, config: &SearchConfig) -> Self {
        Self {
            catalog,
            threshold,
            config: config.clone(),
        }
    }

    pub fn catalog(&self) -> &Catalog<V> {
        &self.catalog
    }

    pub fn solve(&self) -> Result<SearchOutcome> {
        debug!(
            num_items = self.catalog.len(),
            threshold = %self.threshold,
            config = ?self.config,
            "starting best-first search"
        );
        let mut frontier = Frontier::new();
        let mut dominance = DominanceTable::new(self.config.dominance_rule);
        let mut paths = PathArena::new();
        let mut stats = SearchStats::default();

        frontier.push(SearchState::<V>::initial());
        stats.states_pushed += 1;

        while let Some(state) = frontier.pop() {
            stats.states_popped += 1;
            trace!(key = ?state.key, value = %state.value, "pop");

            if state.reached(&self.threshold) {
                let ids = paths.collect(state.path);
                stats.peak_frontier_len = frontier.peak_len();
                stats.dominance_keys = dominance.len();
                debug!(key = %state.key, stats = ?stats, "threshold reached");
                return Ok(SearchOutcome {
                    solution: Some(self.config.output_order.finish(ids)),
                    key: Some(state.key),
                    stats,
                });
            }

            let start = state.successor_start();
            if start >= self.catalog.len() {
                continue;
            }
            if !self.config.admits(state.key.count as usize + 1) {
                stats.rejected_by_size += (self.catalog.len() - start) as u64;
                continue;
            }

            for (index, item) in self.catalog.items().iter().enumerate().skip(start) {
                if self.config.prune_dominated {
                    let key = state.key.extend(item);
                    let value = state.value.saturating_sum(item.value);
                    if dominance.should_prune(key, index, value) {
                        stats.pruned_dominated += 1;
                        continue;
                    }
                }
                if let Some(limit) = self.config.max_frontier_len {
                    if frontier.len() >= limit {
                        return Err(anyhow!(
                            "Frontier would hold {} states, over the limit of {}",
                            frontier.len() + 1,
                            limit
                        ));
                    }
                }
                frontier.push(state.extend(index, item, &mut paths));
                stats.states_pushed += 1;
            }
        }

        stats.peak_frontier_len = frontier.peak_len();
        stats.dominance_keys = dominance.len();
        debug!(stats = ?stats, "frontier exhausted");
        Ok(SearchOutcome {
            solution: None,
            key: None,
            stats,
        })
    }
}
