use chrono::Utc;
use tally_models::{AnalysisReport, DuplicateReport, FrequencyReport, ItemCount};
use tracing::debug;

use crate::counter::FrequencyMap;
use crate::duplicates::extract_duplicates;

/// Count `items`, then build both the duplicate and the frequency report
///
/// `min_count` and `top` only shape the frequency entries; the duplicate list
/// always holds every repeated item.
pub fn analyze(source: &str, items: &[String], min_count: usize, top: Option<usize>) -> AnalysisReport {
    let frequencies = FrequencyMap::from_items(items);
    let generated_at = Utc::now();

    debug!(
        "analyze: source={}, total_items={}, distinct_items={}",
        source,
        frequencies.total(),
        frequencies.len()
    );

    let duplicates: Vec<ItemCount> = extract_duplicates(items, &frequencies)
        .into_iter()
        .filter_map(|item| {
            frequencies
                .tally(item)
                .map(|tally| ItemCount::new(item.as_str(), tally.count, tally.first_index))
        })
        .collect();

    let entries: Vec<ItemCount> = frequencies
        .most_common(None)
        .into_iter()
        .filter(|(_, count)| *count >= min_count)
        .take(top.unwrap_or(usize::MAX))
        .filter_map(|(item, count)| {
            frequencies
                .first_index(item)
                .map(|first_index| ItemCount::new(item.as_str(), count, first_index))
        })
        .collect();

    debug!(
        "analyze: source={}, total_items={}, distinct_items={}, duplicate_count={}",
        source,
        frequencies.total(),
        frequencies.len(),
        duplicates.len()
    );

    AnalysisReport {
        duplicates: DuplicateReport {
            source: source.to_string(),
            total_items: frequencies.total(),
            distinct_items: frequencies.len(),
            duplicates,
            generated_at,
        },
        frequencies: FrequencyReport {
            source: source.to_string(),
            total_items: frequencies.total(),
            distinct_items: frequencies.len(),
            entries,
            generated_at,
        },
    }
}
