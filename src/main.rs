use axum::{
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use attackboard_server::routes::{
    attack_graph, create_team, delete_attack, delete_user, health_check, list_attacks, list_users,
    register_attack, register_user, team_exists, team_stats,
};
use attackboard_server::{AppState, Config, SheetsClient};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "attackboard_server=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Attack Board Server...");

    // Load configuration
    let config = Config::from_env()?;

    tracing::info!("Server: {}", config.server_address());

    // Build the sheet-backed row store
    let store = Arc::new(SheetsClient::from_config(&config)?);

    // Configure CORS
    let cors = CorsLayer::new()
        .allow_origin(
            config
                .allowed_origins
                .iter()
                .map(|s| s.parse())
                .collect::<Result<Vec<HeaderValue>, _>>()?,
        )
        .allow_methods([
            axum::http::Method::GET,
            axum::http::Method::POST,
            axum::http::Method::DELETE,
        ])
        .allow_headers(Any);

    // Create app state
    let state = AppState::new(store, config.clone());

    // Build router
    let app = Router::new()
        .route("/health", get(health_check))
        .route("/users", post(list_users).delete(delete_user))
        .route("/users/register", post(register_user))
        .route("/attacks", post(list_attacks).delete(delete_attack))
        .route("/attacks/register", post(register_attack))
        .route("/teams", get(team_exists).post(create_team))
        .route("/stats", post(team_stats))
        .route("/graph", post(attack_graph))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state);

    // Start server
    let addr: SocketAddr = config.server_address().parse()?;
    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
