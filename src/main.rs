use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::{info, Level};

use effect_registrar::{EffectRegistry, EffectsConfig};

#[derive(Parser)]
#[command(
    name = "effect-registrar",
    version,
    about = "Validate addressable-LED effect declarations and emit their setter-call plans",
    long_about = "Effect-Registrar checks each declared effect against its configuration schema \
                  (defaults, type coercion, bounds) and prints the ordered setter calls a host \
                  would apply to the effect instances."
)]
struct Cli {
    /// Effect declarations file (TOML)
    #[arg(short, long)]
    config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .init();

    info!("Starting effect-registrar v{}", env!("CARGO_PKG_VERSION"));
    info!("Declarations: {:?}", cli.config);

    let config = EffectsConfig::from_file(&cli.config)?;
    info!("Loaded {} effect declaration(s)", config.effects.len());

    let registry = EffectRegistry::new();
    let plans = config.translate_all(&registry)?;

    for plan in &plans {
        info!(
            "{} -> '{}' ({} setter calls)",
            plan.kind,
            plan.instance,
            plan.calls.len()
        );
        println!("{plan}");
    }

    info!("All declarations valid");
    Ok(())
}
