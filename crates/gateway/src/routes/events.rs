//! Platform order event endpoints.
//!
//! Both endpoints accept the event as soon as it is well-formed. Whether the
//! notification itself succeeded is reported in `outcome` but never turns
//! into an error status: the platform's save pipeline must not be blocked.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use common::{OrderId, StoreId};
use domain::{BillingAddress, LineItem, OrderSnapshot, OrderState};
use serde::{Deserialize, Serialize};

use crate::AppState;
use crate::config::Config;
use crate::error::GatewayError;

// -- Request types --

/// Order as serialized by the platform's event adapter.
#[derive(Debug, Deserialize)]
pub struct OrderPayload {
    pub id: u64,
    pub increment_id: String,
    /// State before the save; absent for new orders.
    #[serde(default)]
    pub previous_state: Option<String>,
    pub state: String,
    #[serde(default)]
    pub customer_name: Option<String>,
    #[serde(default)]
    pub customer_firstname: Option<String>,
    #[serde(default)]
    pub customer_lastname: Option<String>,
    #[serde(default)]
    pub customer_email: String,
    #[serde(default)]
    pub billing_address: Option<BillingAddress>,
    #[serde(default)]
    pub items: Vec<LineItem>,
    #[serde(default)]
    pub store_id: u32,
    #[serde(default)]
    pub store_name: Option<String>,
    #[serde(default)]
    pub order_view_url: Option<String>,
}

impl OrderPayload {
    /// Builds the snapshot, filling store name and view URL from config when
    /// the platform left them out.
    pub fn into_snapshot(self, config: &Config) -> Result<OrderSnapshot, GatewayError> {
        let id = OrderId::new(self.id);
        let current: OrderState = self.state.parse()?;
        let previous = self
            .previous_state
            .filter(|s| !s.is_empty())
            .map(|s| s.parse::<OrderState>())
            .transpose()?;

        let order_view_url = self
            .order_view_url
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| config.order_view_url(id));
        let store_name = self
            .store_name
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| config.store_name.clone());

        let mut builder = OrderSnapshot::builder(id, self.increment_id)
            .states(previous, current)
            .customer_email(self.customer_email)
            .line_items(self.items)
            .store(StoreId::new(self.store_id), store_name)
            .order_view_url(order_view_url);

        if let Some(name) = self.customer_name {
            builder = builder.customer_name(name);
        }
        if let Some(first) = self.customer_firstname {
            builder = builder.customer_first_name(first);
        }
        if let Some(last) = self.customer_lastname {
            builder = builder.customer_last_name(last);
        }
        if let Some(address) = self.billing_address {
            builder = builder.billing_address(address);
        }

        Ok(builder.build())
    }
}

#[derive(Debug, Deserialize)]
pub struct OrderSavedEvent {
    #[serde(default)]
    pub order: Option<OrderPayload>,
    #[serde(default)]
    pub state_changed: bool,
}

#[derive(Debug, Deserialize)]
pub struct OrderDeclinedEvent {
    #[serde(default)]
    pub order: Option<OrderPayload>,
}

// -- Response types --

#[derive(Debug, Serialize)]
pub struct EventAccepted {
    pub status: &'static str,
    pub outcome: &'static str,
}

impl EventAccepted {
    fn new(outcome: &'static str) -> (StatusCode, Json<Self>) {
        (
            StatusCode::ACCEPTED,
            Json(Self {
                status: "accepted",
                outcome,
            }),
        )
    }
}

// -- Handlers --

/// POST /events/order-saved — posts state changes to the risk API.
#[tracing::instrument(skip(state, event))]
pub async fn order_saved(
    State(state): State<Arc<AppState>>,
    Json(event): Json<OrderSavedEvent>,
) -> Result<(StatusCode, Json<EventAccepted>), GatewayError> {
    let Some(payload) = event.order else {
        tracing::debug!("order-saved event without an order");
        return Ok(EventAccepted::new("ignored"));
    };

    let order = payload.into_snapshot(&state.config)?;
    let outcome = state
        .state_change
        .on_order_saved(&order, event.state_changed)
        .await;

    Ok(EventAccepted::new(outcome.as_str()))
}

/// POST /events/order-declined — emails the customer about the decline.
#[tracing::instrument(skip(state, event))]
pub async fn order_declined(
    State(state): State<Arc<AppState>>,
    Json(event): Json<OrderDeclinedEvent>,
) -> Result<(StatusCode, Json<EventAccepted>), GatewayError> {
    let Some(payload) = event.order else {
        tracing::debug!("order-declined event without an order");
        return Ok(EventAccepted::new("ignored"));
    };

    let order = payload.into_snapshot(&state.config)?;
    state.decline.handle_decline(&order).await;

    Ok(EventAccepted::new("handled"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(json: serde_json::Value) -> OrderPayload {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn test_minimal_payload_uses_config_fallbacks() {
        let config = Config {
            store_base_url: "https://shop.example.com".to_string(),
            store_name: "Fallback Store".to_string(),
            ..Config::default()
        };
        let order = payload(serde_json::json!({
            "id": 9,
            "increment_id": "100000009",
            "state": "processing"
        }))
        .into_snapshot(&config)
        .unwrap();

        assert_eq!(order.previous_state(), None);
        assert_eq!(order.current_state(), OrderState::Processing);
        assert_eq!(order.store_name(), "Fallback Store");
        assert_eq!(
            order.order_view_url(),
            "https://shop.example.com/sales/order/view/order_id/9/"
        );
    }

    #[test]
    fn test_full_payload_is_preserved() {
        let order = payload(serde_json::json!({
            "id": 5,
            "increment_id": "100000005",
            "previous_state": "holded",
            "state": "processing",
            "customer_name": "Jane Doe",
            "customer_firstname": "Jane",
            "customer_lastname": "Doe",
            "customer_email": "jane@example.com",
            "billing_address": { "first_name": "Jane", "last_name": "Doe" },
            "items": [{ "name": "A" }, { "name": "B" }],
            "store_id": 2,
            "store_name": "DE Store",
            "order_view_url": "https://de.shop.example.com/order/5"
        }))
        .into_snapshot(&Config::default())
        .unwrap();

        assert_eq!(order.previous_state(), Some(OrderState::Holded));
        assert_eq!(order.customer_name(), Some("Jane Doe"));
        assert_eq!(order.line_items().len(), 2);
        assert_eq!(order.store_id(), StoreId::new(2));
        assert_eq!(order.store_name(), "DE Store");
        assert_eq!(order.order_view_url(), "https://de.shop.example.com/order/5");
    }

    #[test]
    fn test_empty_previous_state_reads_as_none() {
        let order = payload(serde_json::json!({
            "id": 1,
            "increment_id": "100000001",
            "previous_state": "",
            "state": "new"
        }))
        .into_snapshot(&Config::default())
        .unwrap();

        assert_eq!(order.previous_state(), None);
    }

    #[test]
    fn test_unknown_state_is_bad_request() {
        let result = payload(serde_json::json!({
            "id": 1,
            "increment_id": "100000001",
            "state": "shipped"
        }))
        .into_snapshot(&Config::default());

        assert!(matches!(
            result,
            Err(GatewayError::BadRequest(msg)) if msg == "Unknown order state: shipped"
        ));
    }
}
