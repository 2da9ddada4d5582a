use crate::output::Output;
use crate::InputArgs;
use color_eyre::Result;
use tally_config::Config;
use tally_core::analyze;
use tally_models::DuplicateReport;

use super::count_table;
use super::input::{apply_input_overrides, load_items};

fn duplicate_report(args: &InputArgs, config: &Config) -> Result<DuplicateReport> {
    let input = load_items(args, config)?;
    Ok(analyze(&input.source, &input.items, config.report.min_count, config.report.top).duplicates)
}

pub fn run_duplicates(args: &InputArgs, counts: bool, mut config: Config, output: &Output) -> Result<()> {
    apply_input_overrides(&mut config, args);
    let report = duplicate_report(args, &config)?;

    if !output.is_human() {
        output.json(&serde_json::to_value(&report)?);
        return Ok(());
    }

    if !report.has_duplicates() {
        output.info(format!("No duplicates among {} item(s)", report.total_items));
        return Ok(());
    }

    if counts {
        output.println(count_table(&report.duplicates).to_string());
    } else {
        for duplicate in &report.duplicates {
            output.println(&duplicate.item);
        }
    }

    output.info(format!(
        "{} duplicated item(s), {} distinct, {} total",
        report.duplicates.len(),
        report.distinct_items,
        report.total_items
    ));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::OutputFormat;
    use tally_models::ItemCount;
    use tempfile::NamedTempFile;

    fn file_with(content: &str) -> NamedTempFile {
        let file = NamedTempFile::new().unwrap();
        std::fs::write(file.path(), content).unwrap();
        file
    }

    fn args(files: &[&NamedTempFile]) -> InputArgs {
        InputArgs {
            files: files.iter().map(|f| f.path().display().to_string()).collect(),
            mode: None,
            column: None,
            delimiter: None,
            ignore_case: false,
        }
    }

    #[test]
    fn test_duplicates_in_first_seen_order() {
        let file = file_with("a\nb\nc\nb\nd\nm\nn\nn\n");
        let report = duplicate_report(&args(&[&file]), &Config::default()).unwrap();
        assert_eq!(report.duplicate_items(), vec!["b", "n"]);
        assert_eq!(report.duplicates[1], ItemCount::new("n", 2, 6));
    }

    #[test]
    fn test_report_limits_do_not_hide_duplicates() {
        let file = file_with("x\ny\ny\nz\nz\nz\n");
        let mut config = Config::default();
        config.report.min_count = 3;
        config.report.top = Some(1);

        let report = duplicate_report(&args(&[&file]), &config).unwrap();
        assert_eq!(report.duplicate_items(), vec!["y", "z"]);
    }

    #[test]
    fn test_run_duplicates_with_ignore_case_flag() {
        let file = file_with("Apple\napple\npear\n");
        let mut config = Config::default();
        let input = InputArgs {
            ignore_case: true,
            ..args(&[&file])
        };
        apply_input_overrides(&mut config, &input);
        let report = duplicate_report(&input, &config).unwrap();
        assert_eq!(report.duplicate_items(), vec!["apple"]);

        let output = Output::new(OutputFormat::Json, true);
        run_duplicates(&input, true, Config::default(), &output).unwrap();
    }

    #[test]
    fn test_run_duplicates_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = InputArgs {
            files: vec![dir.path().join("absent.txt").display().to_string()],
            ..args(&[])
        };
        let output = Output::new(OutputFormat::Human, true);
        assert!(run_duplicates(&input, false, Config::default(), &output).is_err());
    }
}
