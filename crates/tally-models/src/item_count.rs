use serde::{Deserialize, Serialize};

/// A single item together with how often it occurred and where it was first seen
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ItemCount {
    pub item: String,
    pub count: usize,
    /// Zero-based index of the first occurrence in the input sequence
    pub first_index: usize,
}

impl ItemCount {
    pub fn new(item: impl Into<String>, count: usize, first_index: usize) -> Self {
        Self {
            item: item.into(),
            count,
            first_index,
        }
    }

    pub fn is_duplicate(&self) -> bool {
        self.count > 1
    }
}
