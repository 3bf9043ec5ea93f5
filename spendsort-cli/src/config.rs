use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Log filter used when RUST_LOG is unset (e.g. "info", "spendsort_ingest=debug")
    pub log_level: String,
    pub inputs: InputsSection,
    pub outputs: OutputsSection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputsSection {
    /// Discover CSV export
    pub csv: PathBuf,
    /// OCCU PDF statement
    pub pdf: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputsSection {
    pub csv: PathBuf,
    pub pdf: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            inputs: InputsSection::default(),
            outputs: OutputsSection::default(),
        }
    }
}

impl Default for InputsSection {
    fn default() -> Self {
        Self {
            csv: PathBuf::from("Discover-Statement-20240924.csv"),
            pdf: PathBuf::from("download(1).pdf"),
        }
    }
}

impl Default for OutputsSection {
    fn default() -> Self {
        Self {
            csv: PathBuf::from("discover_transactions.csv"),
            pdf: PathBuf::from("occ_transactions.csv"),
        }
    }
}

/// `~/.spendsort/config.toml`. Nothing is created until the config is saved.
pub fn default_config_path() -> Result<PathBuf> {
    let home = std::env::var_os("HOME").context("HOME is not set")?;
    Ok(PathBuf::from(home).join(".spendsort").join("config.toml"))
}

/// Load from `path`, falling back to defaults when the file does not exist.
pub fn load_config(path: &Path) -> Result<Config> {
    if !path.exists() {
        log::debug!("no config at {}, using defaults", path.display());
        return Ok(Config::default());
    }
    let s = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    toml::from_str(&s).with_context(|| format!("parse {}", path.display()))
}

pub fn save_config(path: &Path, cfg: &Config) -> Result<()> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir).with_context(|| format!("create {}", dir.display()))?;
    }
    let s = toml::to_string_pretty(cfg).context("serialize config")?;
    fs::write(path, s).with_context(|| format!("write {}", path.display()))?;
    Ok(())
}

pub fn init_config(path: &Path) -> Result<()> {
    if path.exists() {
        println!("Config already exists: {}", path.display());
        return Ok(());
    }
    save_config(path, &Config::default())?;
    println!("Wrote {}", path.display());
    Ok(())
}
