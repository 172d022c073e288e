//! unidoc
//!
//! University document management back office
//!
//! This is the main entry point for the Dioxus Desktop application.

use anyhow::Context;
use tracing_subscriber::{EnvFilter, FmtSubscriber};
use unidoc_core::AppConfig;

fn main() -> anyhow::Result<()> {
    let (config, source) = AppConfig::discover().context("loading configuration")?;

    // RUST_LOG wins over the configured filter
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.logging.filter))
        .with_context(|| format!("invalid log filter '{}'", config.logging.filter))?;

    FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .pretty()
        .init();

    match &source {
        Some(path) => tracing::info!(path = %path.display(), "configuration loaded"),
        None => tracing::info!("no configuration file, using defaults"),
    }

    println!();
    println!("╔═══════════════════════════════════════════════════════════╗");
    println!("║                                                           ║");
    println!("║   unidoc v{:<48}║", unidoc_ui::VERSION);
    println!("║   Gestión Documental Universitaria                        ║");
    println!("║                                                           ║");
    println!("╚═══════════════════════════════════════════════════════════╝");
    println!();

    unidoc_ui::launch_with_config(&config);
    Ok(())
}
