//! HTTP adapter between the platform's order events and the risk notifiers.
//!
//! The platform posts order-saved and order-declined events as JSON; the
//! gateway turns them into order snapshots and hands them to the notifiers.
//! Structured logging goes through `tracing` and counters are exported in
//! Prometheus format.

pub mod config;
pub mod error;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use metrics_exporter_prometheus::PrometheusHandle;
use notifier::{
    DeclineNotifier, InMemoryDeclineSettings, InMemoryInlineTranslation, InMemoryMailTransport,
    InMemoryOrderRepository, InMemoryRiskApi, NotificationGuard, StateChangeNotifier,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use config::Config;

/// Decline notifier wired to the default collaborators.
pub type DefaultDeclineNotifier = DeclineNotifier<
    InMemoryMailTransport,
    InMemoryOrderRepository,
    InMemoryInlineTranslation,
    InMemoryDeclineSettings,
>;

/// Shared application state accessible from all handlers.
pub struct AppState {
    pub config: Config,
    pub state_change: StateChangeNotifier<InMemoryRiskApi>,
    pub decline: DefaultDeclineNotifier,
}

/// Handles to the default collaborators, for inspection.
#[derive(Debug, Clone)]
pub struct Collaborators {
    pub risk_api: InMemoryRiskApi,
    pub mail: InMemoryMailTransport,
    pub orders: InMemoryOrderRepository,
    pub settings: InMemoryDeclineSettings,
    pub guard: NotificationGuard,
}

/// Creates the Axum application router with all routes and shared state.
pub fn create_app(state: Arc<AppState>, metrics_handle: PrometheusHandle) -> Router {
    let metrics_router = Router::new()
        .route("/metrics", get(routes::status::metrics))
        .with_state(metrics_handle);

    Router::new()
        .route("/health", get(routes::status::health))
        .route("/events/order-saved", post(routes::events::order_saved))
        .route("/events/order-declined", post(routes::events::order_declined))
        .with_state(state)
        .merge(metrics_router)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}

/// Creates the default application state with in-memory collaborators.
pub fn create_default_state(config: Config) -> (Arc<AppState>, Collaborators) {
    let guard = NotificationGuard::new();
    let risk_api = InMemoryRiskApi::new();
    let mail = InMemoryMailTransport::new();
    let orders = InMemoryOrderRepository::new();
    let settings = InMemoryDeclineSettings::new(config.decline.clone());

    let state_change = StateChangeNotifier::new(risk_api.clone(), guard.clone());
    let decline = DeclineNotifier::new(
        mail.clone(),
        orders.clone(),
        InMemoryInlineTranslation::new(),
        settings.clone(),
    );

    let state = Arc::new(AppState {
        config,
        state_change,
        decline,
    });

    let collaborators = Collaborators {
        risk_api,
        mail,
        orders,
        settings,
        guard,
    };

    (state, collaborators)
}
