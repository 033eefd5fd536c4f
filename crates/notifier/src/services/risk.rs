//! Risk-decision API trait and in-memory implementation.

use std::sync::{Arc, PoisonError, RwLock};

use async_trait::async_trait;
use common::OrderId;
use domain::OrderSnapshot;
use serde::{Deserialize, Serialize};

use crate::error::NotifierError;

/// Action sent alongside an order to the risk-decision API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskAction {
    /// First submission of a new order.
    Create,
    /// The order changed after it was created.
    Update,
    /// Order submitted for a decision.
    Submit,
    /// Order was cancelled on the platform.
    Cancel,
}

impl RiskAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskAction::Create => "create",
            RiskAction::Update => "update",
            RiskAction::Submit => "submit",
            RiskAction::Cancel => "cancel",
        }
    }
}

impl std::fmt::Display for RiskAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Client for posting orders to the risk-decision service.
///
/// Implementations own network I/O, retry scheduling, and error logging. An
/// `Err` only tells the caller the post did not go through now.
#[async_trait]
pub trait RiskDecisionApi: Send + Sync {
    /// Posts the order with the given action.
    async fn post(&self, order: &OrderSnapshot, action: RiskAction) -> Result<(), NotifierError>;
}

#[derive(Debug, Default)]
struct InMemoryRiskState {
    posts: Vec<(OrderId, RiskAction)>,
    fail_on_post: bool,
}

/// In-memory risk API that records posts.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRiskApi {
    state: Arc<RwLock<InMemoryRiskState>>,
}

impl InMemoryRiskApi {
    /// Creates a new in-memory risk API.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configures the API to fail every post.
    pub fn set_fail_on_post(&self, fail: bool) {
        self.state
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .fail_on_post = fail;
    }

    /// Returns the number of accepted posts.
    pub fn post_count(&self) -> usize {
        self.posts().len()
    }

    /// Returns the accepted posts in call order.
    pub fn posts(&self) -> Vec<(OrderId, RiskAction)> {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .posts
            .clone()
    }
}

#[async_trait]
impl RiskDecisionApi for InMemoryRiskApi {
    async fn post(&self, order: &OrderSnapshot, action: RiskAction) -> Result<(), NotifierError> {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);

        if state.fail_on_post {
            return Err(NotifierError::RiskApi(
                "Risk API unavailable, retry scheduled".to_string(),
            ));
        }

        state.posts.push((order.id(), action));
        tracing::info!(order_id = %order.id(), %action, "order posted to risk API");
        Ok(())
    }
}
