use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

const CONFIG_FILE: &str = "config.json";
const DATA_DIR_NAME: &str = ".catz";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatzConfig {
    /// How many days back `catz chart` looks by default.
    #[serde(default = "default_chart_days")]
    pub chart_days: usize,
}

fn default_chart_days() -> usize {
    28
}

impl Default for CatzConfig {
    fn default() -> Self {
        Self {
            chart_days: default_chart_days(),
        }
    }
}

impl CatzConfig {
    /// Read `config.json` from the data directory; a missing file means defaults.
    pub fn load(data_dir: &Path) -> Result<Self, CoreError> {
        let path = data_dir.join(CONFIG_FILE);
        let data = match fs::read_to_string(&path) {
            Ok(d) => d,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => return Err(e.into()),
        };
        serde_json::from_str(&data)
            .map_err(|e| CoreError::Config(format!("{}: {e}", path.display())))
    }

    /// `$HOME/.catz`, falling back to `./.catz` when no home is set.
    pub fn default_data_dir() -> PathBuf {
        std::env::var_os("HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."))
            .join(DATA_DIR_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let tmp = TempDir::new().unwrap();
        assert_eq!(CatzConfig::load(tmp.path()).unwrap(), CatzConfig::default());
    }

    #[test]
    fn test_partial_file() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(CONFIG_FILE), r#"{"chart_days": 7}"#).unwrap();
        assert_eq!(CatzConfig::load(tmp.path()).unwrap().chart_days, 7);

        fs::write(tmp.path().join(CONFIG_FILE), "{}").unwrap();
        assert_eq!(CatzConfig::load(tmp.path()).unwrap().chart_days, 28);
    }

    #[test]
    fn test_malformed_file() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(CONFIG_FILE), r#"{"chart_days": "lots"}"#).unwrap();
        assert!(matches!(
            CatzConfig::load(tmp.path()),
            Err(CoreError::Config(_))
        ));
    }
}
