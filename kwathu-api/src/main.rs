use std::net::SocketAddr;
use std::sync::Arc;
use anyhow::Context;
use kwathu_api::{app, state::{AppState, AuthConfig}};
use kwathu_booking::{PaymentDesk, PaymentPresenter};
use kwathu_catalog::Catalog;
use kwathu_core::identity::GuestIdentityProvider;
use kwathu_core::payment::NoopPaymentGateway;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "kwathu_api=debug,kwathu_booking=debug,tower_http=debug,axum::rejection=trace".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = kwathu_store::app_config::Config::load().context("Failed to load config")?;
    tracing::info!("Starting Kwathu booking service on port {}", config.server.port);

    let catalog = match &config.catalog.path {
        Some(path) => Catalog::from_json_file(path).context("Failed to load catalog")?,
        None => Catalog::kwathu(),
    };
    tracing::info!("Catalog ready with {} units", catalog.len());

    let store = kwathu_store::connect(&config.handoff)
        .await
        .context("Failed to open handoff store")?;

    let presenter = PaymentPresenter::new(config.handoff.verify_on_read);
    let payments = PaymentDesk::new(Arc::new(NoopPaymentGateway), presenter);

    let app_state = AppState {
        catalog,
        store,
        identity: Arc::new(GuestIdentityProvider),
        presenter,
        payments: Arc::new(payments),
        auth: AuthConfig {
            secret: config.auth.jwt_secret.clone(),
            expiration: config.auth.jwt_expiration_seconds,
        },
    };

    let app = app(app_state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
