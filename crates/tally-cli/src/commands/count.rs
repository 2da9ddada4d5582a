use crate::output::Output;
use crate::InputArgs;
use color_eyre::Result;
use tally_config::Config;
use tally_core::analyze;
use tally_models::FrequencyReport;

use super::count_table;
use super::input::{apply_input_overrides, load_items};

/// Command line `min_count` / `top` win over the `[report]` section
fn apply_report_overrides(config: &mut Config, min_count: Option<usize>, top: Option<usize>) {
    if let Some(min_count) = min_count {
        config.report.min_count = min_count;
    }
    if top.is_some() {
        config.report.top = top;
    }
}

fn frequency_report(args: &InputArgs, config: &Config) -> Result<FrequencyReport> {
    let input = load_items(args, config)?;
    Ok(analyze(&input.source, &input.items, config.report.min_count, config.report.top).frequencies)
}

pub fn run_count(
    args: &InputArgs,
    min_count: Option<usize>,
    top: Option<usize>,
    mut config: Config,
    output: &Output,
) -> Result<()> {
    apply_input_overrides(&mut config, args);
    apply_report_overrides(&mut config, min_count, top);

    let report = frequency_report(args, &config)?;

    if !output.is_human() {
        output.json(&serde_json::to_value(&report)?);
        return Ok(());
    }

    if report.entries.is_empty() {
        output.info(format!(
            "Nothing to show ({} item(s), min count {})",
            report.total_items, config.report.min_count
        ));
        return Ok(());
    }

    output.println(count_table(&report.entries).to_string());
    output.info(format!(
        "{} item(s), {} distinct, {} shown",
        report.total_items,
        report.distinct_items,
        report.entries.len()
    ));

    Ok(())
}
