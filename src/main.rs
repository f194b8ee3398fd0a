//! golden-mountain – entry point.
//!
//! Startup order:
//! 1. Load and validate configuration.
//! 2. Initialise tracing (JSON when configured).
//! 3. Build the upstream adapters and shared state.
//! 4. Serve HTTP until SIGINT/SIGTERM.

use std::sync::Arc;

use anyhow::Context;
use secrecy::ExposeSecret;
use tracing::{info, warn};

use golden_mountain::adapters::ai::{AnthropicConfig, AnthropicProvider};
use golden_mountain::adapters::email::{ResendConfig, ResendEmailSender};
use golden_mountain::adapters::http::{app_router, AppState};
use golden_mountain::application::ContactMailbox;
use golden_mountain::config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Configuration
    let config = AppConfig::load().context("failed to load configuration")?;
    config.validate().context("invalid configuration")?;

    // 2. Tracing
    init_tracing(&config);
    info!(
        version = env!("CARGO_PKG_VERSION"),
        environment = ?config.server.environment,
        "golden-mountain starting"
    );

    // 3. Adapters
    let state = build_state(&config)?;
    info!(
        model = %config.ai.model,
        recipient = %config.email.recipient(),
        "upstream adapters ready"
    );

    // 4. HTTP server with graceful shutdown
    let app = app_router(state, &config.server);
    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!(%addr, "HTTP server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("golden-mountain stopped");
    Ok(())
}

/// `RUST_LOG` wins over the configured level.
fn init_tracing(config: &AppConfig) {
    let env_filter = match tracing_subscriber::EnvFilter::try_from_default_env() {
        Ok(f) => f,
        Err(_) => match config.server.log_level.parse::<tracing_subscriber::EnvFilter>() {
            Ok(f) => f,
            Err(e) => {
                eprintln!(
                    "WARN: log level '{}' is not a valid tracing filter ({}); falling back to 'info'",
                    config.server.log_level, e
                );
                tracing_subscriber::EnvFilter::new("info")
            }
        },
    };

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true);

    if config.server.log_json {
        subscriber.json().init();
    } else {
        subscriber.init();
    }
}

fn build_state(config: &AppConfig) -> anyhow::Result<AppState> {
    let anthropic_key = config
        .ai
        .anthropic_api_key
        .as_ref()
        .map(|k| k.expose_secret().clone())
        .unwrap_or_default();
    let provider = AnthropicProvider::new(
        AnthropicConfig::new(anthropic_key)
            .with_model(&config.ai.model)
            .with_base_url(&config.ai.base_url)
            .with_timeout(config.ai.timeout()),
    )
    .context("failed to build Anthropic client")?;

    let resend_key = config
        .email
        .resend_api_key
        .as_ref()
        .map(|k| k.expose_secret().clone())
        .unwrap_or_default();
    let sender = ResendEmailSender::new(
        ResendConfig::new(resend_key)
            .with_base_url(&config.email.base_url)
            .with_timeout(config.email.timeout()),
    )
    .context("failed to build Resend client")?;

    Ok(AppState::new(
        Arc::new(provider),
        Arc::new(sender),
        ContactMailbox::from_config(&config.email),
    ))
}

/// Resolves when SIGINT (Ctrl-C) or SIGTERM is received.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "failed to install CTRL+C signal handler");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut s) => {
                s.recv().await;
            }
            Err(e) => warn!(error = %e, "failed to install SIGTERM handler"),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }

    info!("shutdown signal received; starting graceful shutdown");
}
