// src/main.rs

use std::sync::Arc;
use std::time::Duration;

use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};
use trivia_api::config::Config;
use trivia_api::repository::PgRepository;
use trivia_api::routes;
use trivia_api::state::AppState;

const CONNECT_ATTEMPTS: u32 = 5;
const CONNECT_BACKOFF: Duration = Duration::from_secs(2);

/// Logs to stdout and to a daily `trivia.log` under the configured directory.
/// The returned guard flushes the file writer and must live as long as the server.
fn init_tracing(config: &Config) -> WorkerGuard {
    let (file_writer, guard) =
        tracing_appender::non_blocking(tracing_appender::rolling::daily(&config.log_dir, "trivia.log"));

    tracing_subscriber::registry()
        .with(EnvFilter::new(&config.rust_log))
        .with(fmt::layer().with_writer(std::io::stdout).with_target(false))
        .with(fmt::layer().with_writer(file_writer).with_ansi(false))
        .init();

    guard
}

/// Opens the trivia database, giving Postgres a few chances to come up first.
async fn connect_store(database_url: &str) -> Result<PgPool, sqlx::Error> {
    let mut attempt = 1;
    loop {
        let result = PgPoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(3))
            .connect(database_url)
            .await;

        match result {
            Ok(pool) => return Ok(pool),
            Err(e) if attempt < CONNECT_ATTEMPTS => {
                tracing::warn!(attempt, error = %e, "trivia database unavailable, backing off");
                tokio::time::sleep(CONNECT_BACKOFF).await;
                attempt += 1;
            }
            Err(e) => return Err(e),
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env();
    let _log_guard = init_tracing(&config);

    let pool = connect_store(&config.database_url).await?;
    sqlx::migrate!("./migrations").run(&pool).await?;
    tracing::info!("question and category tables ready");

    let app = routes::create_router(AppState::new(Arc::new(PgRepository::new(pool))));

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, "trivia api accepting requests");

    axum::serve(listener, app).await?;
    Ok(())
}
