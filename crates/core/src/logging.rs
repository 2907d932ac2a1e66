//! Système de logging pour seqvis

use tracing_subscriber::{fmt, EnvFilter};

/// Initialise le système de logging depuis `RUST_LOG`
pub fn init_logging() {
    init_logging_with_level("info");
}

/// Initialise le logging avec un niveau par défaut si `RUST_LOG` est absent
pub fn init_logging_with_level(default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    // Un subscriber peut déjà être installé (tests, binaires multiples)
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Macro pour le logging des opérations
#[macro_export]
macro_rules! log_operation {
    ($name:expr, $block:block) => {{
        let span = tracing::span!(tracing::Level::INFO, $name);
        let _enter = span.enter();
        tracing::debug!("Début de l'opération: {}", $name);
        let result = $block;
        tracing::debug!("Fin de l'opération: {}", $name);
        result
    }};
}

/// Macro pour le logging des erreurs
#[macro_export]
macro_rules! log_error {
    ($error:expr) => {{
        tracing::error!("Erreur: {}", $error);
        $error
    }};
}
