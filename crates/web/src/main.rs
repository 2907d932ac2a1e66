//! Serveur web des renderers de cellules
//!
//! Publie les définitions de colonnes et rend les cellules de la grille
//! des alignements de séquences.

use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use tracing_actix_web::TracingLogger;

mod config;
mod models;
mod routes;

use config::AppConfig;
use models::AppState;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Charger la configuration
    let config = match AppConfig::load_from_file("config.toml") {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Erreur de chargement de la configuration: {}. Utilisation des valeurs par défaut.", e);
            AppConfig::default()
        }
    };

    // Initialiser le logging
    init_logging(&config.logging);

    // Initialiser Tera
    let tera = match tera::Tera::new(&format!("{}/*", config.server.templates.display())) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("Erreur d'initialisation de Tera: {}", e);
            std::process::exit(1);
        }
    };

    // Créer l'état de l'application
    let app_state = match AppState::new(config.clone(), tera) {
        Ok(state) => web::Data::new(state),
        Err(e) => {
            tracing::error!("Erreur d'initialisation des renderers: {}", e);
            std::process::exit(1);
        }
    };

    tracing::info!(
        renderers = ?app_state.registry.renderer_names(),
        policy = ?config.visualizer.policy,
        "Démarrage du serveur sur http://{}:{}",
        config.server.host,
        config.server.port
    );

    HttpServer::new(move || {
        // Configurer CORS
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header()
            .max_age(3600);

        App::new()
            .wrap(TracingLogger::default())
            .wrap(cors)
            .app_data(app_state.clone())
            .configure(routes::configure)
    })
    .workers(config.server.workers)
    .bind((config.server.host.clone(), config.server.port))?
    .run()
    .await
}

/// Initialise le système de logging
fn init_logging(config: &crate::config::LoggingConfig) {
    let filter = match config.level.to_lowercase().as_str() {
        "trace" => "trace",
        "debug" => "debug",
        "warn" => "warn",
        "error" => "error",
        _ => "info",
    };

    match config.format.to_lowercase().as_str() {
        "json" => {
            tracing_subscriber::fmt()
                .json()
                .with_env_filter(filter)
                .init();
        }
        _ => {
            tracing_subscriber::fmt()
                .compact()
                .with_env_filter(filter)
                .init();
        }
    }
}
