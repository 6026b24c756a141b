mod dominance;
mod frontier;
mod solver;
mod state;

pub use dominance::DominanceTable;
pub use frontier::Frontier;
pub use solver::{SearchOutcome, SearchStats, Solver};
pub use state::{PathArena, PathIndex, SearchState};

use super::SearchConfig;
use anyhow::Result;
use setpick_challenges::problem_set::{Challenge, Solution};
use setpick_utils::Points;

pub fn solve_challenge<V: Points>(
    challenge: &Challenge<V>,
    config: &SearchConfig,
) -> Result<Option<Solution>> {
    Ok(Solver::new(challenge, config).solve()?.solution)
}
