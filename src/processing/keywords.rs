//! Frequency-based keyword ranking

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordEntry {
    pub token: String,
    pub count: usize,
}

/// Rank distinct tokens by occurrence count, descending. Ties are broken by
/// first-occurrence position in the stream (earlier appearance ranks
/// higher), which keeps the output reproducible run to run. Returns at most
/// `limit` entries; an empty stream yields an empty ranking.
pub fn rank(tokens: &[String], limit: usize) -> Vec<KeywordEntry> {
    let mut counts: HashMap<&str, (usize, usize)> = HashMap::new();

    for (position, token) in tokens.iter().enumerate() {
        let entry = counts.entry(token.as_str()).or_insert((0, position));
        entry.0 += 1;
    }

    let mut ranked: Vec<(&str, usize, usize)> = counts
        .into_iter()
        .map(|(token, (count, first_seen))| (token, count, first_seen))
        .collect();

    // First-seen positions are unique, so this is a total order.
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));
    ranked.truncate(limit);

    ranked
        .into_iter()
        .map(|(token, count, _)| KeywordEntry {
            token: token.to_string(),
            count,
        })
        .collect()
}
