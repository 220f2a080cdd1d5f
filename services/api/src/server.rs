use crate::cli::ServeArgs;
use crate::infra::{build_service, AppState};
use crate::routes::with_application_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use hbsa_apply::config::AppConfig;
use hbsa_apply::error::AppError;
use hbsa_apply::telemetry;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::{info, warn};

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry, config.environment)?;

    let service = build_service(&config)?;
    let webhook_configured = service.forwarder().is_configured();
    if !webhook_configured {
        warn!("WEBHOOK_URL is not set; submissions will be refused until it is configured");
    }

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
        webhook_configured,
    };

    let policy = *service.forwarder().policy();
    let app = with_application_routes(service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        max_attempts = policy.max_attempts,
        timeout_ms = config.webhook.timeout.as_millis() as u64,
        "application intake service ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
