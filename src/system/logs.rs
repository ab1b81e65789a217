use std::env::var;

use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Inicializa el trazado de logs. Todo va a stderr: stdout queda para el informe.
pub fn init_logs() {
    let log_level = var("RUST_LOG").unwrap_or("warn".to_string());
    let filter = EnvFilter::try_new(&log_level).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
    debug!("Log level: {log_level}");
}
