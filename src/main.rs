use anyhow::{bail, Context};
use clap::Parser;
use env_logger::Env;
use log::info;

use subprofile::profiles::{GeoxUrlPolicy, ProfileRegistry};
use subprofile::{synthesize_str, SynthesisError};

/// A utility to synthesize complete Clash runtime profiles from proxy subscription configs
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the base configuration file
    #[arg(short, long, value_name = "FILE")]
    input: Option<String>,

    /// Output file path for the synthesized configuration
    #[arg(short, long, value_name = "FILE")]
    output: Option<String>,

    /// Profile to apply
    #[arg(short, long, value_name = "NAME")]
    profile: Option<String>,

    /// Acceleration prefix prepended to GEO database download URLs
    #[arg(long, value_name = "URL")]
    geox_prefix: Option<String>,

    /// List available profiles and exit
    #[arg(long)]
    list_profiles: bool,
}

fn main() -> anyhow::Result<()> {
    // Initialize the logger
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let args = Args::parse();

    let geox = match args.geox_prefix {
        Some(prefix) => GeoxUrlPolicy::Accelerated(prefix),
        None => GeoxUrlPolicy::Origin,
    };
    let registry = ProfileRegistry::builtin(&geox)?;

    if args.list_profiles {
        for name in registry.names() {
            println!("{}", name);
        }
        return Ok(());
    }

    let (Some(input), Some(output)) = (&args.input, &args.output) else {
        bail!("--input and --output must be used together");
    };

    let profile = match &args.profile {
        Some(name) => registry
            .get(name)
            .ok_or_else(|| SynthesisError::UnknownProfile(name.clone()))?,
        None => registry
            .default_profile()
            .context("no profiles registered")?,
    };

    let content = std::fs::read_to_string(input)
        .with_context(|| format!("failed to read base configuration from {}", input))?;
    let synthesized = synthesize_str(&content, profile)?;
    std::fs::write(output, synthesized)
        .with_context(|| format!("failed to write synthesized configuration to {}", output))?;

    info!("Wrote profile '{}' to {}", profile.name, output);
    Ok(())
}
