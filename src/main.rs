// SPDX-License-Identifier: PMPL-1.0-or-later

//! genomap: create a choropleth map of plastid genome origins per country.
//!
//! Reads a raw count file, resolves country names through a persistent
//! translation cache (prompting the operator for anything neither the
//! cache nor the ISO 3166-1 table knows), aggregates per code, buckets,
//! and writes the map artifact.

use anyhow::Result;
use clap::Parser;
use genomap::pipeline::{self, PipelineConfig};
use genomap::reference::Iso3166Reference;
use genomap::render::JsonArtifactRenderer;
use genomap::resolve::ConsoleOperator;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "genomap")]
#[command(version)]
#[command(about = "Create a choropleth map of plastid genome origins per country")]
struct Cli {
    /// Input count file, one "<count> <country name>" per line
    #[arg(short, long, value_name = "FILE")]
    input: PathBuf,

    /// Country code translation cache (created if absent)
    #[arg(short, long, value_name = "FILE")]
    translate: PathBuf,

    /// Output path for the map artifact
    #[arg(short, long, value_name = "FILE", default_value = "map.json")]
    output: PathBuf,

    /// Map title
    #[arg(long, default_value = "Plastid genome origins per country")]
    title: String,

    /// Use log scale on counts
    #[arg(short, long)]
    log_scale: bool,

    /// Print each resolution as it happens
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    println!("Mapping genome counts from: {}", cli.input.display());

    let config = PipelineConfig {
        input: cli.input,
        translate: cli.translate,
        output: cli.output.clone(),
        title: cli.title,
        log_scale: cli.log_scale,
        verbose: cli.verbose,
    };

    let report = pipeline::run(
        &config,
        &Iso3166Reference,
        &mut ConsoleOperator::new(),
        &JsonArtifactRenderer,
    )?;

    report.print();
    println!("Map artifact saved to: {}", cli.output.display());

    Ok(())
}
