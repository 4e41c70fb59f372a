// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result};
use ap_types::Curve;
use ap_verifier::OutputKind;

use crate::config::{config_path, load_saved_config, save_config, Config, SETUP_DIR_ENV};
use crate::output::{self, Outcome, Report};

const ALLOWED_KEYS: &[&str] = &["setup_dir", "output_dir", "default_curve", "default_kind", "seed", "setup"];

fn apply(config: &mut Config, key: &str, value: &str) -> Result<()> {
    match key {
        "setup_dir" => config.setup_dir = value.to_string(),
        "output_dir" => config.output_dir = value.to_string(),
        "default_curve" => {
            let curve: Curve = value.parse()?;
            config.default_curve = curve.name().to_string();
        }
        "default_kind" => {
            let kind: OutputKind = value.parse().map_err(anyhow::Error::msg)?;
            config.default_kind = kind.name().to_string();
        }
        "seed" => config.seed = value.parse().context("seed must be an unsigned integer")?,
        "setup" => {
            config.setup = value.to_string();
            config.setup_choice()?;
        }
        _ => {
            return Err(output::hint(
                &format!("unknown config key: {key}"),
                &format!("allowed keys: {}", ALLOWED_KEYS.join(", ")),
            ))
        }
    }
    Ok(())
}

pub fn set(key: &str, value: &str) -> Result<()> {
    let mut config = load_saved_config()?;
    apply(&mut config, key, value)?;
    save_config(&config)?;

    let path = config_path()?;
    Report::new(Outcome::Done, format!("{key} updated"))
        .field("path", path.display().to_string())
        .field(key, value)
        .print();
    Ok(())
}

pub fn show() -> Result<()> {
    let config = load_saved_config()?;
    let path = config_path()?;

    let mut report = Report::new(Outcome::Done, "configuration")
        .field("path", path.display().to_string())
        .field("setup_dir", config.setup_dir.as_str())
        .field("output_dir", config.output_dir.as_str())
        .field("default_curve", config.default_curve.as_str())
        .field("default_kind", config.default_kind.as_str())
        .field("seed", config.seed)
        .field("setup", config.setup.as_str());
    if let Ok(dir) = std::env::var(SETUP_DIR_ENV) {
        report = report.note(format!("{SETUP_DIR_ENV} overrides setup_dir with {dir}"));
    }
    report.print();
    Ok(())
}
