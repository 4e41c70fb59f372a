// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

use anyhow::Result;
use ap_setup::{SetupId, SetupStore, POINT_ENCODING};
use colored::Colorize;

use crate::config::Config;
use crate::output::{Outcome, Report};

/// Ceremony files are read as-is; exports from other toolchains need converting.
fn encoding_note() -> String {
    format!("ceremony points must be {POINT_ENCODING}; gnark-crypto exports are not read directly")
}

pub fn run(config: &Config) -> Result<()> {
    let store = SetupStore::directory(&config.setup_dir);
    let mut report = Report::new(Outcome::Done, "ceremony setups")
        .field("setup_dir", config.setup_dir.as_str())
        .field("encoding", POINT_ENCODING);
    for id in SetupId::ALL {
        let dir = store.ceremony_dir(id).map(|d| d.display().to_string()).unwrap_or_default();
        let available = store.available(id);
        let json = serde_json::json!({
            "curve": id.curve().name(),
            "dir": dir,
            "points": available.as_ref().ok(),
            "error": available.as_ref().err().map(|e| e.to_string()),
        });
        let text = match &available {
            Ok(n) => format!("{} ({n} G1 points) [{}]", "available".green(), id.curve()),
            Err(e) => format!("{} ({e}) [{}]", "missing".red(), id.curve()),
        };
        report = report.entry(id.dir_name(), json, text);
    }
    report.note(encoding_note()).print();
    Ok(())
}
