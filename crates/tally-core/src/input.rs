// Turning raw bytes into a sequence of items

use std::io::Read;
use std::path::PathBuf;

use tally_config::{ConfigError, InputConfig};
use tally_models::SplitMode;
use tracing::{debug, warn};

use crate::error::{Result, TallyError};

/// Where input bytes come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
}

impl InputSource {
    /// `-` means stdin, anything else is a path
    pub fn from_arg(arg: &str) -> Self {
        if arg == "-" {
            InputSource::Stdin
        } else {
            InputSource::File(PathBuf::from(arg))
        }
    }

    pub fn name(&self) -> String {
        match self {
            InputSource::Stdin => "stdin".to_string(),
            InputSource::File(path) => path.display().to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormalizeOptions {
    pub case_sensitive: bool,
    pub trim: bool,
    pub skip_empty: bool,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            case_sensitive: true,
            trim: true,
            skip_empty: true,
        }
    }
}

impl From<&InputConfig> for NormalizeOptions {
    fn from(config: &InputConfig) -> Self {
        Self {
            case_sensitive: config.case_sensitive,
            trim: config.trim,
            skip_empty: config.skip_empty,
        }
    }
}

pub fn read_input(source: &InputSource) -> Result<Vec<u8>> {
    let io_error = |error: std::io::Error| TallyError::Io {
        source_name: source.name(),
        error,
    };

    let bytes = match source {
        InputSource::Stdin => {
            let mut buf = Vec::new();
            std::io::stdin().lock().read_to_end(&mut buf).map_err(io_error)?;
            buf
        }
        InputSource::File(path) => std::fs::read(path).map_err(io_error)?,
    };

    debug!("read_input: source={}, bytes={}", source.name(), bytes.len());
    Ok(bytes)
}

/// Split `bytes` into items according to `mode`, then normalize each item
///
/// A leading UTF-8 byte-order mark is dropped before splitting.
///
/// Fails with [`TallyError::InvalidInput`] when the bytes are not UTF-8 or a
/// delimited record has no field at the requested column, and with
/// [`TallyError::Config`] when a column delimiter is not ASCII.
pub fn split_items(bytes: &[u8], mode: &SplitMode, options: &NormalizeOptions) -> Result<Vec<String>> {
    let text = std::str::from_utf8(bytes).map_err(|e| {
        let line = bytes[..e.valid_up_to()].iter().filter(|b| **b == b'\n').count() + 1;
        TallyError::invalid_input(line, format!("not valid UTF-8 ({})", e))
    })?;
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    let items: Vec<String> = match mode {
        SplitMode::Lines => text
            .lines()
            .filter_map(|line| normalize(line, options))
            .collect(),
        SplitMode::Words => text
            .split(|c: char| !c.is_alphanumeric())
            .filter(|word| !word.is_empty())
            .filter_map(|word| normalize(word, options))
            .collect(),
        SplitMode::Column { index, delimiter } => split_column(text, *index, *delimiter, options)?,
    };

    debug!(
        "split_items: mode={}, bytes={}, items={}",
        mode.name(),
        bytes.len(),
        items.len()
    );

    Ok(items)
}

fn split_column(text: &str, index: usize, delimiter: char, options: &NormalizeOptions) -> Result<Vec<String>> {
    if !delimiter.is_ascii() {
        return Err(ConfigError::InvalidDelimiter(delimiter.to_string()).into());
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(delimiter as u8)
        .from_reader(text.as_bytes());

    let mut items = Vec::new();
    for record in reader.records() {
        let record = record?;
        let line = record
            .position()
            .map(|pos| pos.line() as usize)
            .unwrap_or_default();

        let field = record.get(index).ok_or_else(|| {
            TallyError::invalid_input(
                line,
                format!("record has {} field(s), column {} requested", record.len(), index),
            )
        })?;

        if let Some(item) = normalize(field, options) {
            items.push(item);
        }
    }

    if items.is_empty() && !text.trim().is_empty() {
        warn!("split_items: column {} produced no items", index);
    }

    Ok(items)
}

fn normalize(raw: &str, options: &NormalizeOptions) -> Option<String> {
    let value = if options.trim { raw.trim() } else { raw };

    if options.skip_empty && value.is_empty() {
        return None;
    }

    if options.case_sensitive {
        Some(value.to_string())
    } else {
        Some(value.to_lowercase())
    }
}
