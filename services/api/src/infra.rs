use hbsa_apply::applications::{Application, ApplicationService};
use hbsa_apply::catalog::CommitteeCatalog;
use hbsa_apply::config::{AppConfig, ConfirmationConfig};
use hbsa_apply::error::AppError;
use hbsa_apply::forwarder::SubmissionForwarder;
use hbsa_apply::notifications::{
    ConfirmationMessage, ConfirmationPublisher, DisabledConfirmations,
    LoggingConfirmationPublisher, NotificationError,
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
    pub(crate) webhook_configured: bool,
}

/// Confirmation hook picked from `CONFIRMATION_ENABLED`.
#[derive(Debug, Clone, Copy)]
pub(crate) enum ConfiguredConfirmations {
    Logging(LoggingConfirmationPublisher),
    Disabled(DisabledConfirmations),
}

impl ConfiguredConfirmations {
    pub(crate) fn from_config(config: &ConfirmationConfig) -> Self {
        if config.enabled {
            Self::Logging(LoggingConfirmationPublisher)
        } else {
            Self::Disabled(DisabledConfirmations)
        }
    }
}

impl ConfirmationPublisher for ConfiguredConfirmations {
    fn publish(&self, message: ConfirmationMessage) -> Result<(), NotificationError> {
        match self {
            Self::Logging(publisher) => publisher.publish(message),
            Self::Disabled(publisher) => publisher.publish(message),
        }
    }
}

pub(crate) type SubmissionService = ApplicationService<ConfiguredConfirmations>;

pub(crate) fn build_service(config: &AppConfig) -> Result<Arc<SubmissionService>, AppError> {
    let catalog = Arc::new(CommitteeCatalog::standard());
    let forwarder = SubmissionForwarder::from_config(&config.webhook, catalog)?;
    let confirmations = ConfiguredConfirmations::from_config(&config.confirmation);
    Ok(Arc::new(ApplicationService::new(
        Arc::new(forwarder),
        Arc::new(confirmations),
    )))
}

/// Load an application exported by the form as JSON.
pub(crate) fn read_application(path: &Path) -> Result<Application, AppError> {
    let raw = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}
