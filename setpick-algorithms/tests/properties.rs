mod common;

use common::random_challenge;
use setpick_algorithms::problem_set::{best_first::Solver, exhaustive, *};
use setpick_challenges::problem_set::*;
use std::collections::HashSet;

const NUM_CASES: u64 = 300;
const MAX_ITEMS: usize = 10;

fn configs() -> Vec<SearchConfig> {
    let mut out = Vec::new();
    for catalog_order in [CatalogOrder::Identifier, CatalogOrder::CostLengthIdentifier] {
        for max_subset_size in [None, Some(1), Some(3)] {
            out.push(SearchConfig {
                catalog_order,
                max_subset_size,
                ..Default::default()
            });
        }
    }
    out
}

#[test]
fn test_matches_exhaustive_enumeration() {
    for seed in 0..NUM_CASES {
        let challenge = random_challenge(seed, MAX_ITEMS);
        for config in configs() {
            let expected = exhaustive::best_subset(
                &challenge.catalog(config.catalog_order),
                challenge.threshold,
                &config,
            )
            .unwrap()
            .map(|(key, _)| key);
            let outcome = Solver::new(&challenge, &config).solve().unwrap();
            assert_eq!(outcome.key, expected, "seed {} config {:?}", seed, config);

            if let Some(solution) = outcome.solution {
                // distinct known ids, within the cap, reaching the threshold
                let key = challenge
                    .verify_solution(&solution, config.max_subset_size)
                    .unwrap();
                assert_eq!(Some(key), expected);
            }
        }
    }
}

#[test]
fn test_pruning_never_changes_the_optimum() {
    for seed in 0..NUM_CASES {
        let challenge = random_challenge(seed, MAX_ITEMS);
        for config in configs() {
            let unpruned = SearchConfig {
                prune_dominated: false,
                ..config.clone()
            };
            let a = Solver::new(&challenge, &config).solve().unwrap();
            let b = Solver::new(&challenge, &unpruned).solve().unwrap();
            assert_eq!(a.key, b.key, "seed {}", seed);
            assert_eq!(a.solution.is_some(), b.solution.is_some());
        }
    }
}

#[test]
fn test_unpruned_search_visits_each_subset_once() {
    for seed in 0..50 {
        let challenge = random_challenge(seed, 8);
        // unreachable threshold forces a full sweep
        let challenge = Challenge {
            threshold: u64::MAX,
            ..challenge
        };
        let config = SearchConfig {
            prune_dominated: false,
            ..Default::default()
        };
        let outcome = Solver::new(&challenge, &config).solve().unwrap();
        assert!(outcome.solution.is_none());
        let n = challenge.num_problems() as u32;
        assert_eq!(outcome.stats.states_pushed, 1u64 << n);
        assert_eq!(outcome.stats.states_popped, 1u64 << n);
    }
}

#[test]
fn test_solutions_have_distinct_ids() {
    for seed in 0..NUM_CASES {
        let challenge = random_challenge(seed, MAX_ITEMS);
        let config = SearchConfig {
            output_order: OutputOrder::Accumulation,
            ..Default::default()
        };
        if let Some(solution) = best_first::solve_challenge(&challenge, &config).unwrap() {
            let ids: HashSet<ProblemId> = solution.items.iter().cloned().collect();
            assert_eq!(ids.len(), solution.items.len());
        }
    }
}

#[test]
fn test_accumulation_order_follows_catalog_index() {
    for seed in 0..NUM_CASES {
        let challenge = random_challenge(seed, MAX_ITEMS);
        for catalog_order in [CatalogOrder::Identifier, CatalogOrder::CostLengthIdentifier] {
            let config = SearchConfig {
                catalog_order,
                output_order: OutputOrder::Accumulation,
                ..Default::default()
            };
            let solver = Solver::new(&challenge, &config);
            let position: Vec<usize> = match solver.solve().unwrap().solution {
                Some(solution) => solution
                    .items
                    .iter()
                    .map(|id| {
                        solver
                            .catalog()
                            .items()
                            .iter()
                            .position(|item| item.id == *id)
                            .unwrap()
                    })
                    .collect(),
                None => continue,
            };
            assert!(position.windows(2).all(|w| w[0] < w[1]), "seed {}", seed);
        }
    }
}

#[test]
fn test_all_algorithms_agree() {
    for seed in 0..NUM_CASES {
        let challenge = random_challenge(seed, MAX_ITEMS);
        for config in configs() {
            let keys: Vec<Option<CostKey>> =
                [Algorithm::BestFirst, Algorithm::Exhaustive, Algorithm::Dynamic]
                    .into_iter()
                    .map(|algorithm| {
                        let config = SearchConfig {
                            algorithm,
                            ..config.clone()
                        };
                        solve_challenge(&challenge, &config)
                            .unwrap()
                            .map(|s| {
                                challenge
                                    .verify_solution(&s, config.max_subset_size)
                                    .unwrap()
                            })
                    })
                    .collect();
            assert_eq!(keys[0], keys[1], "seed {}", seed);
            assert_eq!(keys[0], keys[2], "seed {}", seed);
        }
    }
}
