//! chambers: legal practice management server.
//!
//! Serves a bearer-token-authenticated REST API over customers, cases,
//! engagements, documents, dashboard statistics, and reports, with an
//! append-only audit trail for every tracked mutation.

use std::{path::PathBuf, sync::Arc};

use axum::{
    Router,
    routing::{get, post},
};
use clap::{Parser, Subcommand};
use http::HeaderValue;
use tower_http::{
    cors::{Any, CorsLayer},
    limit::RequestBodyLimitLayer,
    trace::TraceLayer,
};

pub mod auth;
pub mod authz;
pub mod config;
pub mod db;
pub mod middleware;
pub mod models;
mod observability;
pub mod routes;
pub mod services;

#[cfg(test)]
mod tests;

/// Default config file looked up in the working directory when `--config`
/// is not given.
const DEFAULT_CONFIG_PATH: &str = "chambers.toml";

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<config::AppConfig>,
    pub db: Arc<db::DbPool>,
    pub services: services::Services,
    pub tokens: Arc<auth::TokenService>,
}

impl AppState {
    pub async fn new(config: config::AppConfig) -> Result<Self, Box<dyn std::error::Error>> {
        let db = Arc::new(db::DbPool::from_config(&config.database).await?);
        if config.database.run_migrations {
            db.run_migrations().await?;
        }

        let services = services::Services::new(db.clone());
        let tokens = Arc::new(auth::TokenService::new(
            &config.auth.token_secret,
            config.auth.token_ttl_days,
        ));

        Ok(Self {
            config: Arc::new(config),
            db,
            services,
            tokens,
        })
    }

    /// Build state over an existing pool, for tests.
    #[cfg(test)]
    pub fn from_parts(config: config::AppConfig, db: Arc<db::DbPool>) -> Self {
        let services = services::Services::new(db.clone());
        let tokens = Arc::new(auth::TokenService::new(
            &config.auth.token_secret,
            config.auth.token_ttl_days,
        ));
        Self {
            config: Arc::new(config),
            db,
            services,
            tokens,
        }
    }
}

/// Assemble the router. The auth middleware is layered onto the protected
/// subtree only; `/health` and the two `/auth` endpoints stay public.
pub fn build_app(config: &config::AppConfig, state: AppState) -> Router {
    let protected = Router::new()
        .route(
            "/customers",
            get(routes::customers::list).post(routes::customers::create),
        )
        .route(
            "/customers/{id}",
            get(routes::customers::get)
                .put(routes::customers::update)
                .delete(routes::customers::delete),
        )
        .route("/cases", get(routes::cases::list).post(routes::cases::create))
        .route(
            "/cases/{id}",
            get(routes::cases::get)
                .put(routes::cases::update)
                .delete(routes::cases::delete),
        )
        .route(
            "/engagements",
            get(routes::engagements::list).post(routes::engagements::create),
        )
        .route(
            "/engagements/{id}",
            get(routes::engagements::get)
                .put(routes::engagements::update)
                .delete(routes::engagements::delete),
        )
        .route(
            "/documents",
            get(routes::documents::list).post(routes::documents::create),
        )
        .route("/dashboard/stats", get(routes::dashboard::stats))
        .route("/reports/cases", get(routes::reports::cases))
        .route("/reports/engagements", get(routes::reports::engagements))
        .route_layer(axum::middleware::from_fn_with_state(
            state.clone(),
            middleware::auth_middleware,
        ));

    let mut app = Router::new()
        .route("/health", get(routes::health::health_check))
        .route("/auth/login", post(routes::auth::login))
        .route("/auth/register", post(routes::auth::register))
        .merge(protected);

    if let Some(cors) = build_cors(&config.server) {
        app = app.layer(cors);
    }

    app.layer(TraceLayer::new_for_http())
        .layer(RequestBodyLimitLayer::new(config.server.body_limit_bytes))
        .with_state(state)
}

fn build_cors(server: &config::ServerConfig) -> Option<CorsLayer> {
    if server.cors_allowed_origins.is_empty() {
        return None;
    }

    let origins: Vec<HeaderValue> = server
        .cors_allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(origin = %origin, error = %e, "Skipping invalid CORS origin");
                None
            }
        })
        .collect();

    Some(
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any),
    )
}

#[derive(Parser)]
#[command(name = "chambers", version, about = "Legal practice management server")]
struct Args {
    /// Path to the TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Start the HTTP server (default).
    Serve,
    /// Run pending database migrations and exit.
    Migrate,
    /// Write a default configuration file and exit.
    Init {
        /// Destination path for the config file.
        #[arg(long)]
        output: Option<PathBuf>,
        /// Overwrite an existing file.
        #[arg(long)]
        force: bool,
    },
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    match args.command {
        Some(Command::Init { output, force }) => {
            run_init(output, force);
        }
        Some(Command::Migrate) => {
            run_migrate(args.config.as_deref()).await;
        }
        Some(Command::Serve) | None => {
            run_server(args.config.as_deref()).await;
        }
    }
}

fn load_config(path: Option<&std::path::Path>) -> config::AppConfig {
    let resolved = path
        .map(PathBuf::from)
        .or_else(|| {
            let default = PathBuf::from(DEFAULT_CONFIG_PATH);
            default.exists().then_some(default)
        });

    match resolved {
        Some(file) => match config::AppConfig::from_file(&file) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Failed to load config from {}: {}", file.display(), e);
                std::process::exit(1);
            }
        },
        None => config::AppConfig::default(),
    }
}

async fn run_server(config_path: Option<&std::path::Path>) {
    let config = load_config(config_path);
    observability::init_tracing(&config.logging);

    if config.auth.uses_default_secret() {
        tracing::warn!(
            "auth.token_secret is the built-in default. Tokens signed with it can be forged \
             by anyone reading the source. Set a unique secret before deploying."
        );
    }

    let bind_addr = config.server.bind_addr();
    let state = match AppState::new(config.clone()).await {
        Ok(state) => state,
        Err(e) => {
            tracing::error!(error = %e, "Failed to initialize application state");
            std::process::exit(1);
        }
    };

    let app = build_app(&config, state);

    let listener = match tokio::net::TcpListener::bind(bind_addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(error = %e, host = %bind_addr.0, port = bind_addr.1, "Failed to bind");
            std::process::exit(1);
        }
    };

    tracing::info!(host = %bind_addr.0, port = bind_addr.1, "chambers listening");

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        tracing::error!(error = %e, "Server error");
        std::process::exit(1);
    }
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        tracing::warn!("Failed to listen for shutdown signal");
        return;
    }
    tracing::info!("Shutdown signal received");
}

async fn run_migrate(config_path: Option<&std::path::Path>) {
    let config = load_config(config_path);
    observability::init_tracing(&config.logging);

    let db = match db::DbPool::from_config(&config.database).await {
        Ok(db) => db,
        Err(e) => {
            tracing::error!(error = %e, "Failed to open database");
            std::process::exit(1);
        }
    };

    if let Err(e) = db.run_migrations().await {
        tracing::error!(error = %e, "Migration failed");
        std::process::exit(1);
    }
}

fn run_init(output: Option<PathBuf>, force: bool) {
    let path = output.unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));

    if path.exists() && !force {
        eprintln!(
            "Config file already exists: {}\nUse --force to overwrite.",
            path.display()
        );
        std::process::exit(1);
    }

    let rendered = match toml::to_string_pretty(&config::AppConfig::default()) {
        Ok(rendered) => rendered,
        Err(e) => {
            eprintln!("Failed to render default config: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = std::fs::write(&path, rendered) {
        eprintln!("Failed to write {}: {}", path.display(), e);
        std::process::exit(1);
    }

    println!("Created default configuration at: {}", path.display());
}
