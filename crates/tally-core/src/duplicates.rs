// Duplicate extraction on top of the frequency map

use std::collections::HashSet;
use std::hash::Hash;

use tracing::trace;

use crate::counter::FrequencyMap;

/// A duplicated item with its total count and first position in the input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DuplicateEntry<'a, T> {
    pub item: &'a T,
    pub count: usize,
    pub first_index: usize,
}

/// Items whose count in `frequencies` is at least 2, each emitted once, in
/// order of first occurrence in `items`
///
/// `frequencies` must have been built from the same `items`.
pub fn extract_duplicates<'a, T>(items: &'a [T], frequencies: &FrequencyMap<'a, T>) -> Vec<&'a T>
where
    T: Eq + Hash,
{
    let mut emitted: HashSet<&'a T> = HashSet::new();
    let mut duplicates = Vec::new();

    for item in items {
        if frequencies.count_of(item) >= 2 && emitted.insert(item) {
            duplicates.push(item);
        }
    }

    trace!(
        "extract_duplicates: input_count={}, distinct_count={}, duplicate_count={}",
        items.len(),
        frequencies.len(),
        duplicates.len()
    );

    duplicates
}

/// Every item that occurs more than once in `items`, once each, in order of
/// first occurrence
pub fn find_duplicates<T>(items: &[T]) -> Vec<T>
where
    T: Eq + Hash + Clone,
{
    let frequencies = FrequencyMap::from_items(items);
    extract_duplicates(items, &frequencies)
        .into_iter()
        .cloned()
        .collect()
}

/// Like [`find_duplicates`], but keeps each duplicate's count and first index
pub fn find_duplicate_entries<T>(items: &[T]) -> Vec<DuplicateEntry<'_, T>>
where
    T: Eq + Hash,
{
    let frequencies = FrequencyMap::from_items(items);
    extract_duplicates(items, &frequencies)
        .into_iter()
        .filter_map(|item| {
            frequencies.tally(item).map(|tally| DuplicateEntry {
                item,
                count: tally.count,
                first_index: tally.first_index,
            })
        })
        .collect()
}
