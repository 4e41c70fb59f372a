// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

mod commands;
mod config;
mod output;
mod session;

use std::path::PathBuf;

use ap_circuits::ExampleCircuit;
use ap_types::Curve;
use ap_verifier::OutputKind;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::session::{Target, VariantArg};

#[derive(Parser)]
#[command(name = "avmplonk", about = "PLONK verifiers for the Algorand Virtual Machine")]
struct Cli {
    /// Machine-readable output on stdout
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Cmd,
}

#[derive(clap::Args)]
struct TargetArgs {
    /// Example circuit: pythagorean or cubic
    #[arg(long, default_value = "pythagorean")]
    circuit: ExampleCircuit,
    /// bn254 or bls12-381 (default from config)
    #[arg(long)]
    curve: Option<Curve>,
    /// Protocol variant
    #[arg(long, value_enum, default_value_t = VariantArg::Folded)]
    variant: VariantArg,
}

#[derive(Subcommand)]
enum Cmd {
    /// Compile a circuit and write its PuyaPy verifier
    ///
    /// Keys are not cached: every command re-derives them from the configured
    /// seed (test setup) or ceremony (trusted setup), which yields the same key
    /// on each run.
    Compile {
        #[command(flatten)]
        target: TargetArgs,
        /// logicsig or smart-contract (default from config)
        #[arg(long)]
        kind: Option<OutputKind>,
    },
    /// Prove a circuit and write .proof / .public_inputs
    Prove {
        #[command(flatten)]
        target: TargetArgs,
        /// Circuit inputs, e.g. `3 4 5` for pythagorean
        #[arg(required = true)]
        inputs: Vec<u64>,
    },
    /// Run the generated verifier on a proof
    Verify {
        #[command(flatten)]
        target: TargetArgs,
        #[arg(long)]
        proof: Option<PathBuf>,
        #[arg(long)]
        public_inputs: Option<PathBuf>,
    },
    /// Encode proof and public inputs as ARC4 byte[32][] arguments
    Abi {
        proof: PathBuf,
        public_inputs: PathBuf,
    },
    /// Show or edit ~/.avmplonk/config.json
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
    /// List ceremony setups found under setup_dir
    SetupInfo,
}

#[derive(Subcommand)]
enum ConfigAction {
    Show,
    Set { key: String, value: String },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    output::set_json_mode(cli.json);
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let target = |config: &config::Config, args: TargetArgs| {
        Target::resolve(config, args.circuit, args.curve, args.variant)
    };

    match cli.command {
        Cmd::Compile { target: args, kind } => {
            let config = config::load_config()?;
            commands::compile::run(&config, target(&config, args)?, kind)?
        }
        Cmd::Prove { target: args, inputs } => {
            let config = config::load_config()?;
            commands::prove::run(&config, target(&config, args)?, &inputs)?
        }
        Cmd::Verify { target: args, proof, public_inputs } => {
            let config = config::load_config()?;
            commands::verify::run(&config, target(&config, args)?, proof, public_inputs)?
        }
        Cmd::Abi { proof, public_inputs } => commands::abi::run(&proof, &public_inputs)?,
        Cmd::Config { action: ConfigAction::Show } => commands::config::show()?,
        Cmd::Config { action: ConfigAction::Set { key, value } } => commands::config::set(&key, &value)?,
        Cmd::SetupInfo => {
            let config = config::load_config()?;
            commands::setup_info::run(&config)?
        }
    }
    Ok(())
}
