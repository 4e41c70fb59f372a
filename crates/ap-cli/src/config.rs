// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use ap_types::Curve;
use ap_verifier::OutputKind;
use serde::{Deserialize, Serialize};

pub const SETUP_DIR_ENV: &str = "AP_SETUP_DIR";

/// Where compile/prove/verify take their SRS from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupChoice {
    /// Random τ from `seed`. Deterministic, never safe for real value.
    Test,
    /// Ceremony files under `setup_dir`.
    Trusted,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub setup_dir: String,
    pub output_dir: String,
    pub default_curve: String,
    pub default_kind: String,
    pub seed: u64,
    pub setup: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            setup_dir: "setup".into(),
            output_dir: "build".into(),
            default_curve: Curve::Bls12_381.name().into(),
            default_kind: OutputKind::LogicSig.name().into(),
            seed: 42,
            setup: "test".into(),
        }
    }
}

impl Config {
    pub fn curve(&self) -> Result<Curve> {
        self.default_curve.parse().context("invalid default_curve in config")
    }

    pub fn kind(&self) -> Result<OutputKind> {
        self.default_kind.parse::<OutputKind>().map_err(anyhow::Error::msg)
    }

    pub fn setup_choice(&self) -> Result<SetupChoice> {
        match self.setup.as_str() {
            "test" => Ok(SetupChoice::Test),
            "trusted" => Ok(SetupChoice::Trusted),
            other => anyhow::bail!("invalid setup `{other}` in config: expected test or trusted"),
        }
    }

    pub fn output_dir(&self) -> PathBuf {
        PathBuf::from(&self.output_dir)
    }
}

pub fn config_path() -> Result<PathBuf> {
    let home = dirs::home_dir().context("cannot determine home directory")?;
    Ok(home.join(".avmplonk").join("config.json"))
}

pub fn read_config(path: &Path) -> Result<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }
    let data = fs::read_to_string(path).with_context(|| format!("cannot read config at {}", path.display()))?;
    serde_json::from_str(&data).with_context(|| format!("invalid config JSON at {}", path.display()))
}

pub fn write_config(path: &Path, config: &Config) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).with_context(|| format!("cannot create {}", parent.display()))?;
    }
    let json = serde_json::to_string_pretty(config)?;
    fs::write(path, &json).with_context(|| format!("cannot write {} bytes to {}", json.len(), path.display()))?;
    Ok(())
}

/// Saved config with environment overrides applied.
pub fn load_config() -> Result<Config> {
    let mut config = read_config(&config_path()?)?;
    if let Ok(dir) = std::env::var(SETUP_DIR_ENV) {
        config.setup_dir = dir;
    }
    Ok(config)
}

/// Saved config as is, for editing.
pub fn load_saved_config() -> Result<Config> {
    read_config(&config_path()?)
}

pub fn save_config(config: &Config) -> Result<()> {
    write_config(&config_path()?, config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = read_config(&dir.path().join("config.json")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.setup_choice().unwrap(), SetupChoice::Test);
        assert_eq!(config.curve().unwrap(), Curve::Bls12_381);
    }

    #[test]
    fn test_roundtrip_and_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/config.json");
        let config = Config { seed: 7, setup: "trusted".into(), ..Config::default() };
        write_config(&path, &config).unwrap();
        assert_eq!(read_config(&path).unwrap(), config);

        fs::write(&path, r#"{ "default_curve": "bn254" }"#).unwrap();
        let partial = read_config(&path).unwrap();
        assert_eq!(partial.curve().unwrap(), Curve::Bn254);
        assert_eq!(partial.seed, 42);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let config = Config { setup: "remote".into(), default_kind: "stateful".into(), ..Config::default() };
        assert!(config.setup_choice().is_err());
        assert!(config.kind().is_err());
    }
}
