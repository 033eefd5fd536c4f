//! Event reactors for the risk-decision integration.
//!
//! Two independent reactors respond to platform order events:
//! 1. `StateChangeNotifier` posts an `update` to the risk-decision API when an
//!    order changes state, guarded against re-entrant posting.
//! 2. `DeclineNotifier` emails the customer when an order is declined and
//!    annotates the order record.
//!
//! Neither reactor propagates failures to the event pipeline; a failed
//! notification must never block the order save.

pub mod decline;
pub mod error;
pub mod guard;
pub mod services;
pub mod settings;
pub mod state_change;
pub mod template;
pub mod translation;

pub use decline::{DeclineNotifier, DeclineOutcome};
pub use error::NotifierError;
pub use guard::{GUARD_KEY, InFlight, NotificationGuard};
pub use services::{
    DECLINE_TEMPLATE_ID, EmailMessage, HistoryComment, InMemoryMailTransport,
    InMemoryOrderRepository, InMemoryRiskApi, MailTransport, OrderRepository, Recipient,
    RiskAction, RiskDecisionApi, Sender, TemplateArea, TemplateOptions,
};
pub use settings::{DeclineConfig, DeclineSettings, InMemoryDeclineSettings};
pub use state_change::{StateChangeNotifier, StateChangeOutcome};
pub use template::{DeclineEmailComposer, RenderedEmail};
pub use translation::{InMemoryInlineTranslation, InlineTranslation, TranslationSuspension};
