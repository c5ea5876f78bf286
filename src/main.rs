// src/main.rs
//
// Calcul π — point d’entrée ligne de commande
// -------------------------------------------
// But:
// - journal tracing sur stderr (RUST_LOG, défaut "info")
// - réglages clap (arguments + variables d’environnement)
// - stdout réservé aux chiffres de π
//
// IMPORTANT (structure projet):
// - le calcul vit dans le noyau (src/noyau, exposé par lib.rs)
// - ici: point d’entrée seulement

use anyhow::Result;
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod app;

use app::Reglages;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("calcul_pi v{}", env!("CARGO_PKG_VERSION"));

    let reglages = Reglages::parse();

    if let Err(e) = app::executer(&reglages) {
        error!("{e:#}");
        return Err(e);
    }
    Ok(())
}
