use super::SearchConfig;
use anyhow::Result;
use setpick_challenges::problem_set::{Challenge, CostKey, ProblemId, Solution};
use setpick_utils::Points;
use std::collections::BTreeMap;
use tracing::debug;

/// Knapsack over exact point totals. For every reachable `(points, count)`
/// pair it keeps the smallest cost key seen, then picks the best entry that
/// reaches the threshold. Lexicographic order survives adding the same item
/// to both sides, so keeping one entry per pair is exact. The table grows
/// with the number of distinct totals, which makes this slow on large point
/// values.
pub fn solve_challenge<V: Points>(
    challenge: &Challenge<V>,
    config: &SearchConfig,
) -> Result<Option<Solution>> {
    let catalog = challenge.catalog(config.catalog_order);

    let mut dp: BTreeMap<(V, u32), (CostKey, Vec<ProblemId>)> = BTreeMap::new();
    dp.insert((V::zero(), 0), (CostKey::default(), Vec::new()));

    for item in catalog.items() {
        let current_states: Vec<((V, u32), CostKey, Vec<ProblemId>)> = dp
            .iter()
            .map(|(&k, (key, path))| (k, *key, path.clone()))
            .collect();
        for ((points, count), key, path) in current_states {
            if !config.admits(count as usize + 1) {
                continue;
            }
            let new_points = points.saturating_sum(item.value);
            let new_key = key.extend(item);
            let slot = (new_points, count + 1);
            let better = dp.get(&slot).map_or(true, |(k, _)| new_key < *k);
            if better {
                let mut new_path = path;
                new_path.push(item.id);
                dp.insert(slot, (new_key, new_path));
            }
        }
    }
    debug!(states = dp.len(), "dynamic table built");

    let best = dp
        .into_iter()
        .filter(|((points, _), _)| *points >= challenge.threshold)
        .map(|(_, entry)| entry)
        .min_by(|a, b| a.0.cmp(&b.0));
    Ok(best.map(|(_, path)| config.output_order.finish(path)))
}
