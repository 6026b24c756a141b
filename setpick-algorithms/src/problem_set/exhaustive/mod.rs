use super::SearchConfig;
use anyhow::{anyhow, Result};
use setpick_challenges::problem_set::{Catalog, Challenge, CostKey, ProblemId, Solution};
use setpick_utils::Points;

/// Enumeration visits every subset, so it is only offered for small catalogs.
pub const MAX_PROBLEMS: usize = 24;

struct Best {
    key: CostKey,
    ids: Vec<ProblemId>,
}

pub fn solve_challenge<V: Points>(
    challenge: &Challenge<V>,
    config: &SearchConfig,
) -> Result<Option<Solution>> {
    let catalog = challenge.catalog(config.catalog_order);
    Ok(best_subset(&catalog, challenge.threshold, config)?
        .map(|(_, ids)| config.output_order.finish(ids)))
}

/// Smallest cost key over every subset that reaches `threshold`, and the
/// first subset found with it, enumerating in increasing catalog index.
pub fn best_subset<V: Points>(
    catalog: &Catalog<V>,
    threshold: V,
    config: &SearchConfig,
) -> Result<Option<(CostKey, Vec<ProblemId>)>> {
    if catalog.len() > MAX_PROBLEMS {
        return Err(anyhow!(
            "Exhaustive search supports at most {} problems, got {}",
            MAX_PROBLEMS,
            catalog.len()
        ));
    }
    let mut best: Option<Best> = None;
    let mut chosen = Vec::with_capacity(catalog.len());
    visit(
        catalog,
        threshold,
        config,
        0,
        CostKey::default(),
        V::zero(),
        &mut chosen,
        &mut best,
    );
    Ok(best.map(|b| (b.key, b.ids)))
}

#[allow(clippy::too_many_arguments)]
fn visit<V: Points>(
    catalog: &Catalog<V>,
    threshold: V,
    config: &SearchConfig,
    start: usize,
    key: CostKey,
    value: V,
    chosen: &mut Vec<ProblemId>,
    best: &mut Option<Best>,
) {
    if value >= threshold && best.as_ref().map_or(true, |b| key < b.key) {
        *best = Some(Best {
            key,
            ids: chosen.clone(),
        });
    }
    if !config.admits(chosen.len() + 1) {
        return;
    }
    for index in start..catalog.len() {
        let item = &catalog[index];
        chosen.push(item.id);
        visit(
            catalog,
            threshold,
            config,
            index + 1,
            key.extend(item),
            value.saturating_sum(item.value),
            chosen,
            best,
        );
        chosen.pop();
    }
}
