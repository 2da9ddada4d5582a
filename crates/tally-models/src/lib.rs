pub mod item_count;
pub mod report;
pub mod split_mode;

pub use item_count::ItemCount;
pub use report::{AnalysisReport, DuplicateReport, FrequencyReport};
pub use split_mode::SplitMode;
