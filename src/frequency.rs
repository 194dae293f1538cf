use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Occurrence count per distinct character, ordered by character.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FrequencyTable {
    counts: BTreeMap<char, u64>,
}

impl FrequencyTable {
    /// Count every character of `text`. Characters compare by code point, nothing is normalized.
    pub fn from_text(text: &str) -> Self {
        let mut counts = BTreeMap::new();
        for ch in text.chars() {
            *counts.entry(ch).or_insert(0) += 1;
        }
        FrequencyTable { counts }
    }

    pub fn get(&self, ch: char) -> Option<u64> {
        self.counts.get(&ch).copied()
    }

    /// Number of distinct characters.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts, i.e. the length in characters of the counted text.
    /// Saturates at `u64::MAX`; see [`FrequencyTable::checked_total`].
    pub fn total(&self) -> u64 {
        self.checked_total().unwrap_or(u64::MAX)
    }

    /// Sum of all counts, or `None` if it does not fit in a `u64`.
    pub fn checked_total(&self) -> Option<u64> {
        self.counts
            .values()
            .try_fold(0u64, |sum, &count| sum.checked_add(count))
    }

    /// Entries in ascending character order.
    pub fn iter(&self) -> impl Iterator<Item = (char, u64)> + '_ {
        self.counts.iter().map(|(&ch, &count)| (ch, count))
    }

    pub(crate) fn has_zero_count(&self) -> bool {
        self.counts.values().any(|&count| count == 0)
    }
}

// Zero counts are dropped and repeated characters accumulate.
impl FromIterator<(char, u64)> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = (char, u64)>>(iter: I) -> Self {
        let mut counts = BTreeMap::new();
        for (ch, count) in iter {
            if count > 0 {
                let entry = counts.entry(ch).or_insert(0u64);
                *entry = entry.saturating_add(count);
            }
        }
        FrequencyTable { counts }
    }
}
