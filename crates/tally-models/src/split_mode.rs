use serde::{Deserialize, Serialize};

/// How raw input text is turned into items
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum SplitMode {
    /// One item per line
    Lines,
    /// Alphanumeric runs, everything else is a separator
    Words,
    /// A single field of a delimited record (no header row)
    Column { index: usize, delimiter: char },
}

impl Default for SplitMode {
    fn default() -> Self {
        SplitMode::Lines
    }
}

impl SplitMode {
    pub fn name(&self) -> &'static str {
        match self {
            SplitMode::Lines => "lines",
            SplitMode::Words => "words",
            SplitMode::Column { .. } => "column",
        }
    }
}
