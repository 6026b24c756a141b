use anyhow::{anyhow, bail, Result};
use setpick_utils::U256;
use std::collections::HashSet;

pub const MAX_DIFFICULTY: u32 = 10;
pub const MAX_TEXT_LENGTH: u32 = 10_000;

/// Strict check of the input format. Single spaces between fields, `\n`
/// line endings, no leading zeros, every problem topic in the preference
/// list, ids a permutation of `1..=N`, and no trailing input.
pub fn validate_instance(text: &str) -> Result<()> {
    let body = text
        .strip_suffix('\n')
        .ok_or_else(|| anyhow!("Input must end with a newline"))?;
    let lines: Vec<&str> = body.split('\n').collect();

    let header: Vec<&str> = lines[0].split(' ').collect();
    if header.len() != 2 || !is_non_negative(header[0]) || !is_positive(header[1]) {
        bail!("Bad format on first line");
    }
    let threshold = U256::from_dec_str(header[0])
        .map_err(|e| anyhow!("Required points out of range: {:?}", e))?;
    let num_problems: usize = header[1]
        .parse()
        .map_err(|_| anyhow!("Problem count out of range"))?;

    let topics_line = lines
        .get(1)
        .ok_or_else(|| anyhow!("Missing topic preference list"))?;
    if topics_line.is_empty() {
        bail!("Topic preference list cannot be empty when problems exist");
    }
    let preferred_topics: Vec<&str> = topics_line.split(' ').collect();
    if preferred_topics.iter().any(|t| !is_token(t)) {
        bail!("Bad format on topics line");
    }
    let topic_set: HashSet<&str> = preferred_topics.iter().cloned().collect();
    if topic_set.len() != preferred_topics.len() {
        bail!("Duplicate topics in preference list");
    }

    if num_problems > lines.len().saturating_sub(2) {
        bail!("Unexpected end of input while reading problems");
    }

    let mut seen_ids = HashSet::with_capacity(num_problems);
    for i in 0..num_problems {
        let line_no = i + 3;
        let line = lines
            .get(i + 2)
            .ok_or_else(|| anyhow!("Unexpected end of input while reading problems"))?;
        let fields: Vec<&str> = line.split(' ').collect();
        if fields.len() != 5
            || !is_positive(fields[0])
            || !is_non_negative(fields[1])
            || !is_positive(fields[2])
            || !is_token(fields[3])
            || !is_positive(fields[4])
            || fields[4].len() > 5
        {
            bail!("Line {}: bad format in problem line", line_no);
        }
        if !topic_set.contains(fields[3]) {
            bail!(
                "Line {}: topic '{}' not found in preference list",
                line_no,
                fields[3]
            );
        }

        let id: usize = fields[0]
            .parse()
            .map_err(|_| anyhow!("Line {}: problem id out of range", line_no))?;
        if id < 1 || id > num_problems {
            bail!("Line {}: problem id out of range", line_no);
        }
        if !seen_ids.insert(id) {
            bail!("Line {}: duplicate problem id", line_no);
        }

        let points = U256::from_dec_str(fields[1])
            .map_err(|_| anyhow!("Line {}: points out of range", line_no))?;
        if points > threshold {
            bail!("Line {}: points out of range", line_no);
        }

        let difficulty: u32 = fields[2]
            .parse()
            .map_err(|_| anyhow!("Line {}: difficulty out of range", line_no))?;
        if !(1..=MAX_DIFFICULTY).contains(&difficulty) {
            bail!("Line {}: difficulty out of range", line_no);
        }

        let length: u32 = fields[4]
            .parse()
            .map_err(|_| anyhow!("Line {}: text length out of range", line_no))?;
        if !(1..=MAX_TEXT_LENGTH).contains(&length) {
            bail!("Line {}: text length out of range", line_no);
        }
    }

    if lines.len() > num_problems + 2 {
        bail!("Extra input detected");
    }
    Ok(())
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

fn is_non_negative(s: &str) -> bool {
    is_digits(s) && (s == "0" || !s.starts_with('0'))
}

fn is_positive(s: &str) -> bool {
    is_digits(s) && !s.starts_with('0')
}

fn is_token(s: &str) -> bool {
    !s.is_empty() && !s.chars().any(char::is_whitespace)
}
