// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Command reports.
//!
//! Each command ends by printing one [`Report`]: an outcome, a headline and
//! named fields such as artefact paths, blob sizes and verdicts. With `--json`
//! the report is a single object on stdout; otherwise it goes to stderr as
//! colored `key: value` lines.

use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use serde_json::{Map, Value};

static JSON_MODE: AtomicBool = AtomicBool::new(false);

pub fn set_json_mode(enabled: bool) {
    JSON_MODE.store(enabled, Ordering::Relaxed);
}

pub fn is_json() -> bool {
    JSON_MODE.load(Ordering::Relaxed)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Done,
    Accepted,
    Rejected,
}

impl Outcome {
    fn tag(self) -> &'static str {
        match self {
            Outcome::Done => "done",
            Outcome::Accepted => "accepted",
            Outcome::Rejected => "rejected",
        }
    }
}

struct Field {
    key: String,
    json: Value,
    text: String,
}

pub struct Report {
    outcome: Outcome,
    headline: String,
    fields: Vec<Field>,
    notes: Vec<String>,
}

fn plain(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => "-".to_string(),
        other => other.to_string(),
    }
}

impl Report {
    pub fn new(outcome: Outcome, headline: impl Into<String>) -> Self {
        Self { outcome, headline: headline.into(), fields: Vec::new(), notes: Vec::new() }
    }

    pub fn field(self, key: &str, value: impl Into<Value>) -> Self {
        let json = value.into();
        let text = plain(&json);
        self.entry(key, json, text)
    }

    /// A field whose terminal rendering differs from its JSON value.
    pub fn entry(mut self, key: &str, json: Value, text: impl Into<String>) -> Self {
        self.fields.push(Field { key: key.to_string(), json, text: text.into() });
        self
    }

    /// A file this command wrote or read, with its size.
    pub fn artefact(self, key: &str, path: &Path, bytes: u64) -> Self {
        let shown = path.display().to_string();
        let text = format!("{shown} ({bytes} bytes)");
        self.entry(key, serde_json::json!({ "path": shown, "bytes": bytes }), text)
    }

    pub fn note(mut self, msg: impl Into<String>) -> Self {
        self.notes.push(msg.into());
        self
    }

    pub fn is_rejected(&self) -> bool {
        self.outcome == Outcome::Rejected
    }

    fn to_json(&self) -> Value {
        let mut object = Map::new();
        object.insert("outcome".into(), self.outcome.tag().into());
        object.insert("message".into(), self.headline.clone().into());
        for f in &self.fields {
            object.insert(f.key.clone(), f.json.clone());
        }
        if !self.notes.is_empty() {
            object.insert("notes".into(), self.notes.clone().into());
        }
        Value::Object(object)
    }

    fn headline_colored(&self) -> String {
        match self.outcome {
            Outcome::Done | Outcome::Accepted => self.headline.green().to_string(),
            Outcome::Rejected => self.headline.red().to_string(),
        }
    }

    pub fn print(&self) {
        if is_json() {
            let value = self.to_json();
            match serde_json::to_string_pretty(&value) {
                Ok(text) => println!("{text}"),
                Err(_) => println!("{value}"),
            }
            return;
        }
        eprintln!("{}", self.headline_colored());
        for f in &self.fields {
            eprintln!("{} {}", format!("{}:", f.key).bold(), f.text);
        }
        for n in &self.notes {
            warn(n);
        }
    }
}

/// Out-of-band warning, e.g. about an insecure setup. Silent with `--json`.
pub fn warn(msg: &str) {
    if !is_json() {
        eprintln!("{} {}", "warning:".yellow().bold(), msg.yellow());
    }
}

/// Spinner for slow steps (compilation, proving); hidden with `--json`.
pub fn progress(msg: &str) -> ProgressBar {
    if is_json() {
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner()
        .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
        .template("{spinner:.cyan} {msg}")
    {
        pb.set_style(style);
    }
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

pub fn hint(error: &str, hint: &str) -> anyhow::Error {
    anyhow::anyhow!("{}\n{} {}", error.red(), "hint:".bold(), hint)
}
