use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::cli::OutputFormat;
use crate::transform::params::TransformParams;

#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub transform: TransformParams,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_format")]
    pub format: OutputFormat,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
        }
    }
}

fn default_format() -> OutputFormat { OutputFormat::Text }

pub fn load_config(path: &Path) -> Option<Config> {
    let content = std::fs::read_to_string(path).ok()?;
    parse_config(&content)
}

fn parse_config(content: &str) -> Option<Config> {
    match toml::from_str(content) {
        Ok(cfg) => Some(cfg),
        Err(err) => {
            log::debug!("Config parse error: {}", err);
            None
        }
    }
}

/// Explicit path first, then ./pdwt.toml, then the user config directory.
pub fn discover(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    let local = PathBuf::from("pdwt.toml");
    if local.exists() {
        return Some(local);
    }
    if let Some(home) = dirs::home_dir() {
        let xdg = home.join(".config").join("pdwt").join("config.toml");
        if xdg.exists() {
            return Some(xdg);
        }
    }
    if let Some(config_dir) = dirs::config_dir() {
        let platform = config_dir.join("pdwt").join("config.toml");
        if platform.exists() {
            return Some(platform);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_uses_defaults() {
        let cfg = parse_config("").unwrap();
        assert_eq!(cfg.transform, TransformParams::default());
        assert_eq!(cfg.output.format, OutputFormat::Text);
    }

    #[test]
    fn partial_transform_section() {
        let cfg = parse_config(
            r#"
            [transform]
            spectrum_size = 1024
            highest_frequency = 4000.0
            "#,
        )
        .unwrap();
        assert_eq!(cfg.transform.spectrum_size, 1024);
        assert_eq!(cfg.transform.highest_frequency, 4000.0);
        assert_eq!(cfg.transform.sample_rate, 44100);
        assert_eq!(cfg.transform.lowest_frequency, 100.0);
    }

    #[test]
    fn output_format() {
        let cfg = parse_config("[output]\nformat = \"json\"\n").unwrap();
        assert_eq!(cfg.output.format, OutputFormat::Json);
    }

    #[test]
    fn malformed_file_is_rejected() {
        assert!(parse_config("[transform]\nspectrum_size = \"lots\"\n").is_none());
        assert!(parse_config("[output]\nformat = \"xml\"\n").is_none());
    }

    #[test]
    fn explicit_path_wins() {
        let path = Path::new("/tmp/custom.toml");
        assert_eq!(discover(Some(path)), Some(path.to_path_buf()));
    }

    #[test]
    fn missing_file_loads_nothing() {
        assert!(load_config(Path::new("/nonexistent/pdwt/config.toml")).is_none());
    }
}
