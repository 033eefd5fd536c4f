//! External collaborator traits and in-memory implementations.

pub mod mail;
pub mod orders;
pub mod risk;

pub use mail::{
    DECLINE_TEMPLATE_ID, EmailMessage, InMemoryMailTransport, MailTransport, Recipient, Sender,
    TemplateArea, TemplateOptions,
};
pub use orders::{HistoryComment, InMemoryOrderRepository, OrderRepository};
pub use risk::{InMemoryRiskApi, RiskAction, RiskDecisionApi};
