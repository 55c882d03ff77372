use crate::error::{Result, ShelfError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "bookshelf.json";
const DEFAULT_DATA_FILE: &str = "books.json";
const DEFAULT_EXPORT_FILE: &str = "books.csv";

/// Configuration for bookshelf, stored in ./bookshelf.json
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShelfConfig {
    /// JSON snapshot rewritten after every change
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,

    /// CSV file written on exit
    #[serde(default = "default_export_file")]
    pub export_file: PathBuf,
}

fn default_data_file() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_FILE)
}

fn default_export_file() -> PathBuf {
    PathBuf::from(DEFAULT_EXPORT_FILE)
}

impl Default for ShelfConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            export_file: default_export_file(),
        }
    }
}

impl ShelfConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: ShelfConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_path, content)?;
        Ok(())
    }

    pub fn with_data_file(mut self, path: Option<PathBuf>) -> Self {
        if let Some(path) = path {
            self.data_file = path;
        }
        self
    }

    pub fn with_export_file(mut self, path: Option<PathBuf>) -> Self {
        if let Some(path) = path {
            self.export_file = path;
        }
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.data_file.as_os_str().is_empty() {
            return Err(ShelfError::Config("data_file is empty".into()));
        }
        if self.export_file.as_os_str().is_empty() {
            return Err(ShelfError::Config("export_file is empty".into()));
        }
        if self.data_file == self.export_file {
            return Err(ShelfError::Config(format!(
                "data_file and export_file are both {}",
                self.data_file.display()
            )));
        }
        Ok(())
    }
}
