use super::{Challenge, Problem, Solution};
use anyhow::{anyhow, bail, Context, Result};
use setpick_utils::Points;

/// Answer printed when no subset reaches the threshold.
pub const NO_SOLUTION: &str = "-1";

/// Parses the text format:
///
/// ```text
/// M N
/// topic topic ...
/// id points difficulty topic length   (N lines)
/// ```
///
/// Tokens may be separated by any amount of whitespace. The topic line may be
/// empty. Use [`validate_instance`](super::validate_instance) for the strict
/// format.
pub fn parse_instance<V: Points>(text: &str) -> Result<Challenge<V>> {
    let mut lines = text.lines();

    let header = lines
        .next()
        .ok_or_else(|| anyhow!("Input is empty"))?;
    let mut tokens = header.split_whitespace();
    let threshold = match tokens.next() {
        Some(token) => V::from_dec_str(token).context("Invalid required points on line 1")?,
        None => bail!("Line 1: expected 'M N'"),
    };
    let num_problems = match tokens.next() {
        Some(token) => token
            .parse::<usize>()
            .map_err(|e| anyhow!("Line 1: invalid problem count '{}': {}", token, e))?,
        None => bail!("Line 1: expected 'M N'"),
    };
    if tokens.next().is_some() {
        bail!("Line 1: unexpected trailing tokens");
    }

    let preferred_topics: Vec<String> = lines
        .next()
        .unwrap_or("")
        .split_whitespace()
        .map(|t| t.to_string())
        .collect();

    let mut problems = Vec::with_capacity(num_problems.min(text.len()));
    for (offset, line) in lines.enumerate() {
        let line_no = offset + 3;
        if line.trim().is_empty() {
            continue;
        }
        if problems.len() == num_problems {
            bail!("Line {}: more than {} problems given", line_no, num_problems);
        }
        problems.push(parse_problem(line).with_context(|| format!("Line {}", line_no))?);
    }
    if problems.len() != num_problems {
        bail!(
            "Expected {} problems, found {}",
            num_problems,
            problems.len()
        );
    }

    Ok(Challenge {
        threshold,
        preferred_topics,
        problems,
    })
}

fn parse_problem<V: Points>(line: &str) -> Result<Problem<V>> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    if parts.len() != 5 {
        bail!(
            "expected 'id points difficulty topic length', found {} fields",
            parts.len()
        );
    }
    Ok(Problem {
        id: parts[0]
            .parse()
            .map_err(|e| anyhow!("invalid id '{}': {}", parts[0], e))?,
        points: V::from_dec_str(parts[1]).context("invalid points")?,
        difficulty: parts[2]
            .parse()
            .map_err(|e| anyhow!("invalid difficulty '{}': {}", parts[2], e))?,
        topic: parts[3].to_string(),
        length: parts[4]
            .parse()
            .map_err(|e| anyhow!("invalid length '{}': {}", parts[4], e))?,
    })
}

pub fn render_instance<V: Points>(challenge: &Challenge<V>) -> String {
    let mut out = format!("{} {}\n", challenge.threshold, challenge.problems.len());
    out.push_str(&challenge.preferred_topics.join(" "));
    out.push('\n');
    for p in &challenge.problems {
        out.push_str(&format!(
            "{} {} {} {} {}\n",
            p.id, p.points, p.difficulty, p.topic, p.length
        ));
    }
    out
}

pub fn render_answer(solution: Option<&Solution>) -> String {
    match solution {
        Some(solution) => solution.to_string(),
        None => NO_SOLUTION.to_string(),
    }
}
