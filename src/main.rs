use std::sync::Arc;

use anyhow::Result;
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pressroom_core::application::ports::{
    mail::Mailer,
    time::Clock,
    util::{SlugGenerator, TokenGenerator},
};
use pressroom_core::application::services::{ApplicationServices, ServiceSettings};
use pressroom_core::config::AppConfig;
use pressroom_core::domain::{
    article::repository::ArticleRepository, draft::repository::DraftRepository,
    rate_limit::repository::RateLimitCounterStore, subscriber::repository::SubscriberRepository,
};
use pressroom_core::infrastructure::{
    mail::{LogMailer, SmtpMailer},
    repositories::{
        MemoryArticleRepository, MemoryDraftRepository, MemoryRateLimitStore,
        MemorySubscriberRepository,
    },
    time::SystemClock,
    util::{DefaultSlugGenerator, HexTokenGenerator},
};
use pressroom_core::presentation::http::{routes::build_router, state::HttpState};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    // The store handles are built exactly once here and shared through Arcs;
    // there is no module-level "already initialized" flag to race on.
    let draft_repo: Arc<dyn DraftRepository> = Arc::new(MemoryDraftRepository::new());
    let article_repo: Arc<dyn ArticleRepository> = Arc::new(MemoryArticleRepository::new());
    let subscriber_repo: Arc<dyn SubscriberRepository> =
        Arc::new(MemorySubscriberRepository::new());
    let counter_store: Arc<dyn RateLimitCounterStore> = Arc::new(MemoryRateLimitStore::new());

    let mailer: Arc<dyn Mailer> = match config.smtp() {
        Some(smtp) => Arc::new(SmtpMailer::new(smtp)?),
        None => Arc::new(LogMailer),
    };

    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let slugger: Arc<dyn SlugGenerator> = Arc::new(DefaultSlugGenerator);
    let tokens: Arc<dyn TokenGenerator> = Arc::new(HexTokenGenerator);

    let services = Arc::new(ApplicationServices::new(
        draft_repo,
        article_repo,
        subscriber_repo,
        counter_store,
        mailer,
        clock,
        slugger,
        tokens,
        ServiceSettings {
            site_url: config.site_url().to_string(),
            notify_max_in_flight: config.notify_max_in_flight(),
            rate_limit: config.rate_limit_policy(),
        },
    ));

    let state = HttpState {
        services,
        cron_key: config.cron_key().to_string(),
    };

    let app = build_router(state);
    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info".to_string());

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
