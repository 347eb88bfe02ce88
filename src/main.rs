use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use todo_service::api;
use todo_service::config::Config;
use todo_service::db::{self, repository};
use todo_service::state::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "todo_service=debug,tower_http=info".to_string()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    let pool = db::connect_lazy(&config)?;

    // Not fatal: the listener starts either way.
    match repository::ping(&pool).await {
        Ok(()) => info!("database connection established ({})", config.database_url),
        Err(err) => error!("database connection check failed: {}", err),
    }

    let state = AppState::new(pool);

    let app = api::router(state).layer(api::cors_layer(config.cors_origin.as_deref())?);

    let addr = config.addr();
    info!("listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
