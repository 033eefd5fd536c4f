//! Notifier error types.

use common::OrderId;
use thiserror::Error;

/// Errors that can occur while notifying about an order.
///
/// None of these reach the event pipeline: the notifiers log and swallow them
/// at their boundary.
#[derive(Debug, Error)]
pub enum NotifierError {
    /// A configured template rendered to an empty string.
    #[error("Email {field} is empty")]
    EmptyTemplate { field: &'static str },

    /// The mail transport failed to deliver the message.
    #[error("Mail transport error: {0}")]
    Transport(String),

    /// The order could not be updated after a successful notification.
    #[error("Order persistence error for order {order_id}: {reason}")]
    Persistence { order_id: OrderId, reason: String },

    /// The risk-decision API rejected or failed the post.
    #[error("Risk API error: {0}")]
    RiskApi(String),
}

/// Convenience type alias for notifier results.
pub type Result<T> = std::result::Result<T, NotifierError>;
