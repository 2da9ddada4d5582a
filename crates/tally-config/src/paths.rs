use anyhow::Result;
use std::path::{Path, PathBuf};

/// Directory override taken from `TALLY_CONFIG_DIR`, if set
pub fn config_dir_override() -> Option<PathBuf> {
    std::env::var_os("TALLY_CONFIG_DIR").map(PathBuf::from)
}

pub struct PathManager {
    config_dir: PathBuf,
}

impl PathManager {
    pub fn new() -> Result<Self> {
        let base_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?
            .join("tally");

        Ok(Self::with_base(base_dir))
    }

    pub fn with_base(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            config_dir: base_dir.into(),
        }
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join("config.toml")
    }

    pub fn ensure_directories(&self) -> Result<()> {
        std::fs::create_dir_all(&self.config_dir)?;
        Ok(())
    }
}

impl Default for PathManager {
    fn default() -> Self {
        if let Some(dir) = config_dir_override() {
            return Self::with_base(dir);
        }

        // Fall back to the working directory when the platform has no config dir
        Self::new().unwrap_or_else(|_| Self::with_base(".tally"))
    }
}
