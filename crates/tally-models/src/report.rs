use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ItemCount;

/// Items that occurred more than once, in order of first occurrence
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DuplicateReport {
    pub source: String,
    pub total_items: usize,
    pub distinct_items: usize,
    pub duplicates: Vec<ItemCount>,
    pub generated_at: DateTime<Utc>,
}

impl DuplicateReport {
    pub fn duplicate_items(&self) -> Vec<&str> {
        self.duplicates.iter().map(|d| d.item.as_str()).collect()
    }

    pub fn has_duplicates(&self) -> bool {
        !self.duplicates.is_empty()
    }
}

/// Occurrence counts, most common first
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FrequencyReport {
    pub source: String,
    pub total_items: usize,
    pub distinct_items: usize,
    pub entries: Vec<ItemCount>,
    pub generated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnalysisReport {
    pub duplicates: DuplicateReport,
    pub frequencies: FrequencyReport,
}
