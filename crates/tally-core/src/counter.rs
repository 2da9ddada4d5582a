// Occurrence counting over an ordered sequence of items

use std::collections::HashMap;
use std::hash::Hash;

/// Occurrence count of one distinct item plus the position it was first seen at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tally {
    pub count: usize,
    pub first_index: usize,
}

/// Mapping from each distinct item of an input sequence to its occurrence count
///
/// Keys borrow from the input, so the map lives no longer than the sequence it
/// was built from. Plain iteration order is unspecified; use [`entries`],
/// [`most_common`] or [`at_least`] for deterministic ordering.
///
/// [`entries`]: FrequencyMap::entries
/// [`most_common`]: FrequencyMap::most_common
/// [`at_least`]: FrequencyMap::at_least
#[derive(Debug, Clone)]
pub struct FrequencyMap<'a, T> {
    counts: HashMap<&'a T, Tally>,
    total: usize,
}

impl<'a, T> FrequencyMap<'a, T>
where
    T: Eq + Hash,
{
    pub fn from_items(items: &'a [T]) -> Self {
        let mut counts: HashMap<&'a T, Tally> = HashMap::with_capacity(items.len());

        for (index, item) in items.iter().enumerate() {
            counts
                .entry(item)
                .and_modify(|tally| tally.count += 1)
                .or_insert(Tally {
                    count: 1,
                    first_index: index,
                });
        }

        Self {
            counts,
            total: items.len(),
        }
    }

    /// Number of times `item` occurred, 0 if it never did
    pub fn count_of(&self, item: &T) -> usize {
        self.counts.get(item).map_or(0, |tally| tally.count)
    }

    pub fn first_index(&self, item: &T) -> Option<usize> {
        self.counts.get(item).map(|tally| tally.first_index)
    }

    pub fn tally(&self, item: &T) -> Option<Tally> {
        self.counts.get(item).copied()
    }

    pub fn contains(&self, item: &T) -> bool {
        self.counts.contains_key(item)
    }

    /// Number of distinct items
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts, equal to the length of the input sequence
    pub fn total(&self) -> usize {
        self.total
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'a T, usize)> + '_ {
        self.counts.iter().map(|(item, tally)| (*item, tally.count))
    }

    /// All distinct items in order of first occurrence
    pub fn entries(&self) -> Vec<(&'a T, Tally)> {
        let mut entries: Vec<(&'a T, Tally)> =
            self.counts.iter().map(|(item, tally)| (*item, *tally)).collect();
        entries.sort_by_key(|(_, tally)| tally.first_index);
        entries
    }

    /// Items ordered by count descending, ties broken by first occurrence
    pub fn most_common(&self, limit: Option<usize>) -> Vec<(&'a T, usize)> {
        let mut entries = self.entries();
        // Stable sort keeps first-occurrence order among equal counts
        entries.sort_by(|(_, a), (_, b)| b.count.cmp(&a.count));

        let limit = limit.unwrap_or(entries.len());
        entries
            .into_iter()
            .take(limit)
            .map(|(item, tally)| (item, tally.count))
            .collect()
    }

    /// Items seen at least `min` times, in order of first occurrence
    pub fn at_least(&self, min: usize) -> Vec<(&'a T, usize)> {
        self.entries()
            .into_iter()
            .filter(|(_, tally)| tally.count >= min)
            .map(|(item, tally)| (item, tally.count))
            .collect()
    }
}

/// Count occurrences of every distinct item in `items`
pub fn count_items<T>(items: &[T]) -> FrequencyMap<'_, T>
where
    T: Eq + Hash,
{
    FrequencyMap::from_items(items)
}
