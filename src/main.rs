// src/main.rs
use anyhow::{Context, Result};
use greengrocer::application::{
    ports::{security::AdminAuthenticator, time::Clock, util::SlugGenerator},
    services::ApplicationServices,
};
use greengrocer::config::{AppConfig, mask_connection_string};
use greengrocer::domain::{
    category::CategoryRepository, content::ContentBlockRepository, product::ProductRepository,
};
use greengrocer::infrastructure::{
    admin_auth::StaticTokenAuthenticator,
    database,
    repositories::{
        PostgresCategoryRepository, PostgresContentBlockRepository, PostgresProductRepository,
    },
    time::SystemClock,
    util::HebrewSlugGenerator,
};
use greengrocer::presentation::http::{routes::build_router, state::HttpState};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err:#}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;
    tracing::info!(
        database = %mask_connection_string(config.database_url()),
        listen_addr = %config.listen_addr(),
        max_connections = config.db_max_connections(),
        "configuration loaded"
    );

    let pool = database::init_pool(config.database_url(), config.db_max_connections())
        .await
        .context("connecting to postgres")?;
    database::run_migrations(&pool)
        .await
        .context("running migrations")?;

    let category_repo: Arc<dyn CategoryRepository> =
        Arc::new(PostgresCategoryRepository::new(pool.clone()));
    let product_repo: Arc<dyn ProductRepository> =
        Arc::new(PostgresProductRepository::new(pool.clone()));
    let content_repo: Arc<dyn ContentBlockRepository> =
        Arc::new(PostgresContentBlockRepository::new(pool));

    let authenticator: Arc<dyn AdminAuthenticator> =
        Arc::new(StaticTokenAuthenticator::new(config.admin_api_token()));
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let slugger: Arc<dyn SlugGenerator> = Arc::new(HebrewSlugGenerator);

    let services = Arc::new(ApplicationServices::new(
        category_repo,
        product_repo,
        content_repo,
        authenticator,
        clock,
        slugger,
    ));

    let state = HttpState { services };
    let app = build_router(state, config.allowed_origins());

    let listener = tokio::net::TcpListener::bind(config.listen_addr())
        .await
        .with_context(|| format!("binding {}", config.listen_addr()))?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for CTRL+C");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
