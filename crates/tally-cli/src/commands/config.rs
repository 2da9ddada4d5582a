use crate::output::{Output, OutputFormat};
use crate::ConfigCommands;
use color_eyre::eyre::eyre;
use color_eyre::Result;
use comfy_table::{Cell, Table};
use owo_colors::OwoColorize;
use serde_json::json;
use std::path::Path;
use tally_config::Config;

pub fn run_config(cmd: ConfigCommands, config_path: &Path, config: &Config, output: &Output) -> Result<()> {
    match cmd {
        ConfigCommands::Show => show_config(config_path, config, output),
        ConfigCommands::Init { force } => init_config(config_path, force, output),
        ConfigCommands::Path => {
            output.println(config_path.display().to_string());
            Ok(())
        }
    }
}

fn show_config(config_path: &Path, config: &Config, output: &Output) -> Result<()> {
    let exists = config_path.exists();

    match output.format() {
        OutputFormat::Human => {
            let mut info_table = Table::new();
            info_table.set_header(vec![
                Cell::new("Config File").add_attribute(comfy_table::Attribute::Bold),
                Cell::new(config_path.display().to_string()),
            ]);
            info_table.add_row(vec![
                Cell::new("Status"),
                Cell::new(if exists { "loaded" } else { "not found, using defaults" }),
            ]);
            info_table.load_preset(comfy_table::presets::UTF8_FULL);
            info_table.apply_modifier(comfy_table::modifiers::UTF8_ROUND_CORNERS);
            output.println(info_table.to_string());

            let body = toml::to_string_pretty(config)?;
            output.println(format!("\n{}", body.trim_end().bright_white()));

            if let Err(e) = config.validate() {
                output.warn(format!("Configuration is invalid: {}", e));
            }
        }
        OutputFormat::Json | OutputFormat::JsonPretty => {
            output.json(&json!({
                "path": config_path.display().to_string(),
                "exists": exists,
                "valid": config.validate().is_ok(),
                "config": serde_json::to_value(config)?,
            }));
        }
    }

    Ok(())
}

fn init_config(config_path: &Path, force: bool, output: &Output) -> Result<()> {
    if config_path.exists() && !force {
        output.warn(format!(
            "Configuration already exists at {} (use --force to overwrite)",
            config_path.display()
        ));
        return Ok(());
    }

    Config::default()
        .save_to_file(config_path)
        .map_err(|e| eyre!("Failed to write config to {}: {}", config_path.display(), e))?;

    output.success(format!("Wrote default configuration to {}", config_path.display()));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quiet() -> Output {
        Output::new(OutputFormat::Json, true)
    }

    #[test]
    fn test_init_keeps_existing_file_without_force() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[report]\nmin_count = 4\n").unwrap();

        init_config(&path, false, &quiet()).unwrap();
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "[report]\nmin_count = 4\n"
        );
    }

    #[test]
    fn test_init_force_writes_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[report\nbroken").unwrap();

        init_config(&path, true, &quiet()).unwrap();
        assert_eq!(Config::load_from_file(&path).unwrap(), Config::default());
    }

    #[test]
    fn test_init_creates_missing_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("tally").join("config.toml");

        run_config(ConfigCommands::Init { force: false }, &path, &Config::default(), &quiet()).unwrap();
        assert_eq!(Config::load_from_file(&path).unwrap(), Config::default());
    }

    #[test]
    fn test_show_config_handles_invalid_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut config = Config::default();
        config.input.delimiter = "::".to_string();

        show_config(&path, &config, &quiet()).unwrap();
        show_config(&path, &config, &Output::new(OutputFormat::Human, true)).unwrap();
    }
}
