//! Risk notification on order state changes.

use domain::OrderSnapshot;

use crate::guard::NotificationGuard;
use crate::services::risk::{RiskAction, RiskDecisionApi};

/// What `on_order_saved` did with an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateChangeOutcome {
    /// The save did not change the order state.
    Unchanged,
    /// Releasing a hold is not reported.
    UnholdSuppressed,
    /// Another post held the guard.
    AlreadyInFlight,
    /// The update was posted.
    Posted,
    /// The post failed; the API client owns the retry.
    PostFailed,
}

impl StateChangeOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            StateChangeOutcome::Unchanged => "unchanged",
            StateChangeOutcome::UnholdSuppressed => "unhold_suppressed",
            StateChangeOutcome::AlreadyInFlight => "in_flight",
            StateChangeOutcome::Posted => "posted",
            StateChangeOutcome::PostFailed => "failed",
        }
    }
}

/// Posts `update` actions to the risk-decision API when an order's state
/// changes.
pub struct StateChangeNotifier<R>
where
    R: RiskDecisionApi,
{
    risk_api: R,
    guard: NotificationGuard,
}

impl<R> StateChangeNotifier<R>
where
    R: RiskDecisionApi,
{
    /// Creates a notifier sharing `guard` with every other notifier in the
    /// process.
    pub fn new(risk_api: R, guard: NotificationGuard) -> Self {
        Self { risk_api, guard }
    }

    /// Returns the guard this notifier checks before posting.
    pub fn guard(&self) -> &NotificationGuard {
        &self.guard
    }

    /// Reacts to an order save.
    ///
    /// Never fails: a post error is left to the API client, which has
    /// already logged it and scheduled a retry.
    #[tracing::instrument(
        skip(self, order),
        fields(order_id = %order.id(), increment_id = order.increment_id())
    )]
    pub async fn on_order_saved(
        &self,
        order: &OrderSnapshot,
        state_did_change: bool,
    ) -> StateChangeOutcome {
        let outcome = self.notify(order, state_did_change).await;
        metrics::counter!("risk_notifications_total", "outcome" => outcome.as_str()).increment(1);
        outcome
    }

    async fn notify(&self, order: &OrderSnapshot, state_did_change: bool) -> StateChangeOutcome {
        let current = order.current_state();

        if !state_did_change {
            tracing::debug!(
                state = %current,
                "state didn't change on save - not posting again"
            );
            return StateChangeOutcome::Unchanged;
        }

        let previous = order.previous_state();
        if current.is_unhold_from(previous) {
            tracing::debug!("not notifying on unhold action");
            return StateChangeOutcome::UnholdSuppressed;
        }

        tracing::debug!(
            from = previous.map(|s| s.as_str()).unwrap_or_default(),
            to = %current,
            "state changed"
        );

        let Some(in_flight) = self.guard.try_acquire(order.id()) else {
            tracing::debug!(
                in_flight = ?self.guard.in_flight(),
                "risk post already in flight"
            );
            return StateChangeOutcome::AlreadyInFlight;
        };

        let result = self.risk_api.post(order, RiskAction::Update).await;
        drop(in_flight);

        match result {
            Ok(()) => StateChangeOutcome::Posted,
            Err(e) => {
                tracing::debug!(error = %e, "risk post failed, left to the API retry");
                StateChangeOutcome::PostFailed
            }
        }
    }
}
