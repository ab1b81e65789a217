use std::io::Write;

use anyhow::Context;
use tracing::info;

use crate::core::{mint, SystemClock, TokenReport};

mod core;
mod models;
mod system;

fn main() -> anyhow::Result<()> {
    system::init_logs();

    let config = system::load_config();

    // Primero se firma: si falla no se imprime nada del informe
    let minted = mint(&config, &SystemClock).context("No se pudo generar el token")?;
    info!(
        "Token issued for '{}', expires at {}",
        minted.claims.sub, minted.expires_at
    );

    let report = TokenReport::new(&minted, &config.deployment);
    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(report.render().as_bytes())
        .and_then(|_| stdout.flush())
        .context("No se pudo escribir el informe")?;

    Ok(())
}
