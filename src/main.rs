use anyhow::{Context, Result};
use signup_core::application::{
    ports::{security::PasswordHasher, time::Clock},
    services::ApplicationServices,
};
use signup_core::config::AppConfig;
use signup_core::domain::user::UserRepository;
use signup_core::infrastructure::{
    database,
    repositories::SqliteUserRepository,
    security::password::CompositePasswordHasher,
    time::SystemClock,
};
use signup_core::presentation::http::{routes::build_router, state::HttpState};
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

    let pool = database::init_pool(config.database_url(), config.database_max_connections())
        .await
        .context("failed to connect to database")?;
    database::run_migrations(&pool)
        .await
        .context("failed to run migrations")?;
    let pool = Arc::new(pool);

    let user_repo: Arc<dyn UserRepository> =
        Arc::new(SqliteUserRepository::new(Arc::clone(&pool)));
    let password_hasher: Arc<dyn PasswordHasher> = Arc::new(
        CompositePasswordHasher::new(config.password_algorithm(), config.bcrypt_cost())
            .context("invalid password hasher configuration")?,
    );
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);

    tracing::info!(
        algorithm = %config.password_algorithm(),
        bcrypt_cost = config.bcrypt_cost(),
        "password hashing configured"
    );

    let services = Arc::new(ApplicationServices::new(user_repo, password_hasher, clock));
    let state = HttpState { services };

    let app = build_router(state, config.allowed_origins());

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    tracing::info!("database pool closed");

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
        signal::ctrl_c()
            .await
            .expect("failed to install CTRL+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install terminate handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
