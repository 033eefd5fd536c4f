//! Order persistence trait and in-memory implementation.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use common::OrderId;
use serde::{Deserialize, Serialize};

use crate::error::NotifierError;

/// An entry in an order's status history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryComment {
    pub comment: String,
    pub created_at: DateTime<Utc>,
}

/// Trait for mutating and persisting the live order record.
///
/// `add_history_comment` and `set_customer_notified` stage changes on the
/// record; `save` persists everything staged so far.
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Appends a status history comment.
    async fn add_history_comment(
        &self,
        order_id: OrderId,
        comment: &str,
    ) -> Result<(), NotifierError>;

    /// Sets the flag recording that the customer was notified.
    async fn set_customer_notified(
        &self,
        order_id: OrderId,
        notified: bool,
    ) -> Result<(), NotifierError>;

    /// Persists the order.
    async fn save(&self, order_id: OrderId) -> Result<(), NotifierError>;
}

#[derive(Debug, Clone, Default)]
struct OrderRecord {
    history: Vec<HistoryComment>,
    customer_notified: bool,
}

#[derive(Debug, Default)]
struct InMemoryOrderState {
    staged: HashMap<OrderId, OrderRecord>,
    persisted: HashMap<OrderId, OrderRecord>,
    mutations: usize,
    saves: usize,
    fail_on_save: bool,
}

/// In-memory order repository separating staged and persisted records.
#[derive(Debug, Clone, Default)]
pub struct InMemoryOrderRepository {
    state: Arc<RwLock<InMemoryOrderState>>,
}

impl InMemoryOrderRepository {
    /// Creates a new in-memory order repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configures the repository to fail every save.
    pub fn set_fail_on_save(&self, fail: bool) {
        self.state
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .fail_on_save = fail;
    }

    /// Returns the persisted history of an order.
    pub fn history(&self, order_id: OrderId) -> Vec<HistoryComment> {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .persisted
            .get(&order_id)
            .map(|record| record.history.clone())
            .unwrap_or_default()
    }

    /// Returns the persisted customer-notified flag of an order.
    pub fn is_customer_notified(&self, order_id: OrderId) -> bool {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .persisted
            .get(&order_id)
            .is_some_and(|record| record.customer_notified)
    }

    /// Returns the number of staging calls across all orders.
    pub fn mutation_count(&self) -> usize {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .mutations
    }

    /// Returns the number of successful saves.
    pub fn save_count(&self) -> usize {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .saves
    }
}

#[async_trait]
impl OrderRepository for InMemoryOrderRepository {
    async fn add_history_comment(
        &self,
        order_id: OrderId,
        comment: &str,
    ) -> Result<(), NotifierError> {
        let mut guard = self.state.write().unwrap_or_else(PoisonError::into_inner);
        let state = &mut *guard;
        let record = state
            .staged
            .entry(order_id)
            .or_insert_with(|| state.persisted.get(&order_id).cloned().unwrap_or_default());
        record.history.push(HistoryComment {
            comment: comment.to_string(),
            created_at: Utc::now(),
        });
        state.mutations += 1;
        Ok(())
    }

    async fn set_customer_notified(
        &self,
        order_id: OrderId,
        notified: bool,
    ) -> Result<(), NotifierError> {
        let mut guard = self.state.write().unwrap_or_else(PoisonError::into_inner);
        let state = &mut *guard;
        let record = state
            .staged
            .entry(order_id)
            .or_insert_with(|| state.persisted.get(&order_id).cloned().unwrap_or_default());
        record.customer_notified = notified;
        state.mutations += 1;
        Ok(())
    }

    async fn save(&self, order_id: OrderId) -> Result<(), NotifierError> {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);

        if state.fail_on_save {
            // A failed persist discards whatever was staged.
            state.staged.remove(&order_id);
            return Err(NotifierError::Persistence {
                order_id,
                reason: "Could not save the order".to_string(),
            });
        }

        if let Some(record) = state.staged.remove(&order_id) {
            state.persisted.insert(order_id, record);
        }
        state.saves += 1;
        Ok(())
    }
}
