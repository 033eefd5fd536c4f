//! Order state codes.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::OrderError;

/// The state of an order as defined by the platform.
///
/// Common transitions:
/// ```text
/// New ──► Processing ──► Complete ──► Closed
///  │        │    ▲
///  │        ▼    │ unhold
///  │       Holded
///  └──────────────────► Canceled
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OrderState {
    /// Order was just placed.
    #[default]
    New,

    /// Waiting for an offline or redirect payment to complete.
    PendingPayment,

    /// Payment captured or authorized, order is being fulfilled.
    Processing,

    /// Order has been invoiced and shipped.
    Complete,

    /// Order was refunded in full.
    Closed,

    /// Order was cancelled.
    Canceled,

    /// Order is on hold. The spelling matches the platform's state code.
    Holded,

    /// Payment is under review by the gateway or a fraud screen.
    PaymentReview,
}

impl OrderState {
    /// Returns true when moving from `from` to `self` releases a hold.
    pub fn is_unhold_from(&self, from: Option<OrderState>) -> bool {
        from == Some(OrderState::Holded) && *self == OrderState::Processing
    }

    /// Returns the platform's state code.
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderState::New => "new",
            OrderState::PendingPayment => "pending_payment",
            OrderState::Processing => "processing",
            OrderState::Complete => "complete",
            OrderState::Closed => "closed",
            OrderState::Canceled => "canceled",
            OrderState::Holded => "holded",
            OrderState::PaymentReview => "payment_review",
        }
    }
}

impl std::fmt::Display for OrderState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for OrderState {
    type Err = OrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "new" => Ok(OrderState::New),
            "pending_payment" => Ok(OrderState::PendingPayment),
            "processing" => Ok(OrderState::Processing),
            "complete" => Ok(OrderState::Complete),
            "closed" => Ok(OrderState::Closed),
            "canceled" => Ok(OrderState::Canceled),
            "holded" => Ok(OrderState::Holded),
            "payment_review" => Ok(OrderState::PaymentReview),
            other => Err(OrderError::UnknownState(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [OrderState; 8] = [
        OrderState::New,
        OrderState::PendingPayment,
        OrderState::Processing,
        OrderState::Complete,
        OrderState::Closed,
        OrderState::Canceled,
        OrderState::Holded,
        OrderState::PaymentReview,
    ];

    #[test]
    fn test_default_state_is_new() {
        assert_eq!(OrderState::default(), OrderState::New);
    }

    #[test]
    fn test_unhold_is_only_holded_to_processing() {
        assert!(OrderState::Processing.is_unhold_from(Some(OrderState::Holded)));

        for from in ALL {
            for to in ALL {
                let expected = from == OrderState::Holded && to == OrderState::Processing;
                assert_eq!(to.is_unhold_from(Some(from)), expected, "{from} -> {to}");
            }
        }
        assert!(!OrderState::Processing.is_unhold_from(None));
    }

    #[test]
    fn test_display_matches_state_code() {
        assert_eq!(OrderState::PendingPayment.to_string(), "pending_payment");
        assert_eq!(OrderState::Holded.to_string(), "holded");
        assert_eq!(OrderState::PaymentReview.to_string(), "payment_review");
    }

    #[test]
    fn test_parse_every_state_code() {
        for state in ALL {
            assert_eq!(state.as_str().parse::<OrderState>(), Ok(state));
        }
    }

    #[test]
    fn test_parse_unknown_code() {
        let err = "on_hold".parse::<OrderState>().unwrap_err();
        assert_eq!(err, OrderError::UnknownState("on_hold".to_string()));
    }

    #[test]
    fn test_serialization_uses_state_code() {
        let json = serde_json::to_string(&OrderState::Holded).unwrap();
        assert_eq!(json, "\"holded\"");
        let deserialized: OrderState = serde_json::from_str("\"payment_review\"").unwrap();
        assert_eq!(deserialized, OrderState::PaymentReview);
    }
}
