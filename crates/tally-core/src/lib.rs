pub mod counter;
pub mod duplicates;
pub mod error;
pub mod input;
pub mod report;

pub use counter::{count_items, FrequencyMap, Tally};
pub use duplicates::{extract_duplicates, find_duplicate_entries, find_duplicates, DuplicateEntry};
pub use error::{Result, TallyError};
pub use input::{read_input, split_items, InputSource, NormalizeOptions};
pub use report::analyze;
