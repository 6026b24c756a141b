use std::collections::HashMap;

/// Maps topics to preference scores. With `k` topics listed, the first gets
/// `k`, the next `k - 1`, down to `1`. Unlisted topics score `0`. A topic
/// listed twice keeps the score of its last occurrence.
#[derive(Debug, Clone, Default)]
pub struct TopicRanking {
    scores: HashMap<String, u32>,
}

impl TopicRanking {
    pub fn new<S: AsRef<str>>(preferred_topics: &[S]) -> Self {
        let mut scores = HashMap::with_capacity(preferred_topics.len());
        let mut rank_counter = preferred_topics.len() as u32;
        for topic in preferred_topics {
            scores.insert(topic.as_ref().to_string(), rank_counter);
            rank_counter -= 1;
        }
        Self { scores }
    }

    pub fn rank(&self, topic: &str) -> u32 {
        self.scores.get(topic).cloned().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}
