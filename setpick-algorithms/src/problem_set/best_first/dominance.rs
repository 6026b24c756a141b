use crate::{problem_set::DominanceRule, seeded_hasher, HashMap};
use setpick_challenges::problem_set::CostKey;
use setpick_utils::Points;

/// Best value recorded for each cost key, together with the frontier index
/// it was reached at.
///
/// Every record belongs to a state that went into the frontier. A record
/// `(index, value)` dominates a candidate with the same key when
/// `index <= candidate index` and `value >= candidate value`: the recorded
/// state can append every item the candidate can, and ends up with at least
/// as much value for the same key. Under [`DominanceRule::Aggregate`] the
/// index is ignored, which leaves one record per key.
pub struct DominanceTable<V> {
    rule: DominanceRule,
    records: HashMap<CostKey, Vec<(usize, V)>>,
}

impl<V: Points> DominanceTable<V> {
    pub fn new(rule: DominanceRule) -> Self {
        Self {
            rule,
            records: HashMap::with_hasher(seeded_hasher(&[0u8; 32])),
        }
    }

    /// Returns `true` if the candidate is dominated and must be dropped.
    /// Otherwise records it and drops any records it now dominates.
    pub fn should_prune(&mut self, key: CostKey, frontier_index: usize, value: V) -> bool {
        let index = match self.rule {
            DominanceRule::IndexAware => frontier_index,
            DominanceRule::Aggregate => 0,
        };
        let records = self.records.entry(key).or_default();
        if records.iter().any(|&(i, v)| i <= index && v >= value) {
            return true;
        }
        records.retain(|&(i, v)| !(i >= index && v <= value));
        records.push((index, value));
        false
    }

    /// Number of distinct cost keys seen.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
