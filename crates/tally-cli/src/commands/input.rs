use color_eyre::eyre::{eyre, Context};
use color_eyre::Result;
use tally_config::{Config, InputMode};
use tally_core::{read_input, split_items, InputSource, NormalizeOptions};
use tracing::debug;

use crate::InputArgs;

pub struct LoadedInput {
    pub source: String,
    pub items: Vec<String>,
}

/// Command line flags win over the configuration file
pub fn apply_input_overrides(config: &mut Config, args: &InputArgs) {
    if let Some(mode) = args.mode {
        config.input.mode = mode.into();
    }
    if let Some(column) = args.column {
        config.input.column = column;
        if args.mode.is_none() {
            config.input.mode = InputMode::Column;
        }
    }
    if let Some(delimiter) = &args.delimiter {
        config.input.delimiter = delimiter.clone();
    }
    if args.ignore_case {
        config.input.case_sensitive = false;
    }
}

/// Read every requested source in order and concatenate their items
pub fn load_items(args: &InputArgs, config: &Config) -> Result<LoadedInput> {
    config
        .validate()
        .map_err(|e| eyre!("Invalid configuration: {}", e))?;

    let mode = config.split_mode()?;
    let options = NormalizeOptions::from(&config.input);

    let sources: Vec<InputSource> = if args.files.is_empty() {
        vec![InputSource::Stdin]
    } else {
        args.files.iter().map(|f| InputSource::from_arg(f)).collect()
    };

    let mut items = Vec::new();
    for source in &sources {
        let bytes = read_input(source)?;
        let mut parsed = split_items(&bytes, &mode, &options)
            .wrap_err_with(|| format!("Failed to parse {}", source.name()))?;
        debug!("load_items: source={}, items={}", source.name(), parsed.len());
        items.append(&mut parsed);
    }

    let source = sources
        .iter()
        .map(InputSource::name)
        .collect::<Vec<_>>()
        .join(", ");

    Ok(LoadedInput { source, items })
}
