use std::net::SocketAddr;

use soccer_server::config::app_config::AppConfig;
use soccer_server::config::database::establish_connection;
use soccer_server::state::AppState;
use soccer_server::utils::logging::init_logging;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // Keep the guard alive so buffered logs flush on shutdown.
    let _guard = init_logging();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    let db = match establish_connection(&config.database_url).await {
        Ok(db) => db,
        Err(e) => {
            tracing::error!("Failed to connect to the database: {}", e);
            std::process::exit(1);
        }
    };

    let server_port = config.server_port;
    let state = AppState { db, config };
    let app = soccer_server::app(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], server_port));
    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("failed to bind server address");
    axum::serve(listener, app)
        .await
        .expect("server error");
}
