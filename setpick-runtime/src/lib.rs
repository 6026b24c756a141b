use anyhow::{anyhow, Context, Result};
use serde::Serialize;
use setpick_algorithms::problem_set::{best_first, solve_challenge, Algorithm, SearchConfig};
use setpick_challenges::problem_set::{
    parse_instance, render_answer, render_instance, validate_instance, Challenge, CostKey,
    GeneratorSettings, Solution,
};
use setpick_utils::{jsonify, u8s_from_str, Points, ValueWidth, U256};
use std::{fs, io::Read};
use tracing::info;

macro_rules! dispatch_width {
    ($width:expr, $f:ident ( $($arg:expr),* $(,)? )) => {
        match $width {
            ValueWidth::U64 => $f::<u64>($($arg),*),
            ValueWidth::U128 => $f::<u128>($($arg),*),
            ValueWidth::U256 => $f::<U256>($($arg),*),
        }
    };
}

#[derive(Serialize, Debug, Clone)]
pub struct Report {
    pub answer: String,
    pub solution: Option<Solution>,
    pub key: Option<CostKey>,
    pub stats: Option<best_first::SearchStats>,
}

impl Report {
    pub fn to_json(&self) -> String {
        jsonify(self)
    }
}

/// Reads `source` from stdin when it is `-`, otherwise from the file it names.
pub fn load_text(source: &str) -> Result<String> {
    if source == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read from stdin")?;
        Ok(buffer)
    } else {
        fs::read_to_string(source).with_context(|| format!("Failed to read file: {}", source))
    }
}

/// `config` is a json string or a path to a json file.
pub fn load_config(config: Option<&str>) -> Result<SearchConfig> {
    match config {
        None => Ok(SearchConfig::default()),
        Some(config) if config.ends_with(".json") => {
            let json = fs::read_to_string(config)
                .with_context(|| format!("Failed to read config file: {}", config))?;
            SearchConfig::from_json_str(&json)
        }
        Some(config) => SearchConfig::from_json_str(config),
    }
}

/// `solution` is `-` for stdin, `@<path>` for a file, or the id line itself.
pub fn load_solution(solution: &str) -> Result<Solution> {
    let line = if solution == "-" {
        load_text(solution)?
    } else if let Some(path) = solution.strip_prefix('@') {
        fs::read_to_string(path)
            .with_context(|| format!("Failed to read solution file: {}", path))?
    } else {
        solution.to_string()
    };
    line.trim().parse()
}

pub fn solve(text: &str, config: &SearchConfig) -> Result<Report> {
    info!(width = %config.value_width, algorithm = ?config.algorithm, "solving");
    dispatch_width!(config.value_width, solve_with(text, config))
}

fn solve_with<V: Points>(text: &str, config: &SearchConfig) -> Result<Report> {
    let challenge: Challenge<V> = parse_instance(text)?;
    info!(
        num_problems = challenge.num_problems(),
        threshold = %challenge.threshold,
        "instance loaded"
    );
    let (solution, key, stats) = match config.algorithm {
        Algorithm::BestFirst => {
            let outcome = best_first::Solver::new(&challenge, config).solve()?;
            (outcome.solution, outcome.key, Some(outcome.stats))
        }
        _ => {
            let solution = solve_challenge(&challenge, config)?;
            let key = match &solution {
                Some(s) => Some(challenge.verify_solution(s, config.max_subset_size)?),
                None => None,
            };
            (solution, key, None)
        }
    };
    Ok(Report {
        answer: render_answer(solution.as_ref()),
        solution,
        key,
        stats,
    })
}

pub fn verify(text: &str, solution: &Solution, config: &SearchConfig) -> Result<CostKey> {
    dispatch_width!(config.value_width, verify_with(text, solution, config))
}

fn verify_with<V: Points>(text: &str, solution: &Solution, config: &SearchConfig) -> Result<CostKey> {
    let challenge: Challenge<V> = parse_instance(text)?;
    challenge
        .verify_solution(solution, config.max_subset_size)
        .map_err(|e| anyhow!("Invalid solution: {}", e))
}

pub fn validate(text: &str) -> Result<()> {
    validate_instance(text).map_err(|e| anyhow!("Invalid instance: {}", e))
}

pub fn generate(seed: &str, settings: &GeneratorSettings) -> Result<String> {
    let challenge = Challenge::<u64>::generate_instance(&u8s_from_str(seed), settings)?;
    Ok(render_instance(&challenge))
}
