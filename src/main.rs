use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::Parser;
use spdlog::{info, warn};

use pressroom::config::{read_config, Config};
use pressroom::logger::configure_logger;
use pressroom::site_builder::{build_site, write_manifest};

const CFG_FILE_NAME: &str = "pressroom.toml";

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
enum Args {
    /// Run the publication pipeline and write the site manifest
    Build(BuildArgs),
    /// Validate content and report the visibility split without writing
    Check(CheckArgs),
}

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct BuildArgs {
    /// Configuration file. If empty, pressroom.toml next to the executable is used
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output directory, overriding paths.output_dir from the configuration
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct CheckArgs {
    /// Configuration file. If empty, pressroom.toml next to the executable is used
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn open_config(cfg_path: &Option<PathBuf>) -> Result<Config> {
    let cfg_path = match cfg_path {
        Some(path) => path.clone(),
        None => {
            let exe_path = env::current_exe()?;
            let exe_dir = exe_path.parent().context("Could not resolve the executable directory")?;
            exe_dir.join(CFG_FILE_NAME)
        }
    };
    Ok(read_config(&cfg_path)?)
}

fn build_cmd(args: BuildArgs) -> Result<()> {
    let config = open_config(&args.config)?;
    if let Err(err) = configure_logger(&config) {
        warn!("Error creating logger sinks. Using console instead. Desc={}", err);
    }

    // One instant for the whole build, so a post crossing its threshold
    // mid-build cannot split the listings
    let now = Utc::now();
    let manifest = build_site(&config, now)?;

    let output_dir = args.output.unwrap_or_else(|| config.paths.output_dir.clone());
    let manifest_path = write_manifest(&output_dir, &manifest)?;
    info!("Wrote {} with {} eligible posts", manifest_path.display(), manifest.eligible_count);
    Ok(())
}

fn check_cmd(args: CheckArgs) -> Result<()> {
    let config = open_config(&args.config)?;
    if let Err(err) = configure_logger(&config) {
        warn!("Error creating logger sinks. Using console instead. Desc={}", err);
    }

    let now = Utc::now();
    let manifest = build_site(&config, now)?;
    println!("ok: {} eligible posts, {} tags, archive {}",
             manifest.eligible_count,
             manifest.tags.len(),
             if manifest.archive.is_some() { "on" } else { "off" });
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    match args {
        Args::Build(args) => build_cmd(args),
        Args::Check(args) => check_cmd(args),
    }
}
