pub mod best_first;
mod config;
pub mod dynamic;
pub mod exhaustive;

pub use config::*;

use anyhow::Result;
use setpick_challenges::problem_set::{Challenge, Solution};
use setpick_utils::Points;

pub type SolveFn<V> = fn(&Challenge<V>, &SearchConfig) -> Result<Option<Solution>>;

pub fn algorithm_exists_name(name: &str) -> bool {
    get_algorithm_by_name::<u64>(name).is_some()
}

pub fn get_algorithm_by_name<V: Points>(name: &str) -> Option<SolveFn<V>> {
    match name {
        "best_first" => Some(get_algorithm(Algorithm::BestFirst)),
        "exhaustive" => Some(get_algorithm(Algorithm::Exhaustive)),
        "dynamic" => Some(get_algorithm(Algorithm::Dynamic)),
        _ => None,
    }
}

pub fn get_algorithm<V: Points>(algorithm: Algorithm) -> SolveFn<V> {
    match algorithm {
        Algorithm::BestFirst => best_first::solve_challenge::<V>,
        Algorithm::Exhaustive => exhaustive::solve_challenge::<V>,
        Algorithm::Dynamic => dynamic::solve_challenge::<V>,
    }
}

/// Runs the algorithm named in `config`. `Ok(None)` means no subset of the
/// catalog reaches the threshold.
pub fn solve_challenge<V: Points>(
    challenge: &Challenge<V>,
    config: &SearchConfig,
) -> Result<Option<Solution>> {
    config.check()?;
    get_algorithm::<V>(config.algorithm)(challenge, config)
}
