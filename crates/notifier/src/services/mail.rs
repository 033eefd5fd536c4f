//! Mail transport trait and in-memory implementation.

use std::collections::BTreeMap;
use std::sync::{Arc, PoisonError, RwLock};

use async_trait::async_trait;
use common::StoreId;
use serde::Serialize;

use crate::error::NotifierError;

/// Identifier of the outbound template that wraps decline notifications.
pub const DECLINE_TEMPLATE_ID: &str = "riskified_order_declined";

/// Design area the mail template is resolved from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateArea {
    Frontend,
}

/// Where the transport looks up the template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TemplateOptions {
    pub area: TemplateArea,
    pub store: StoreId,
}

/// Sender identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Sender {
    pub email: String,
    pub name: String,
}

/// Message recipient.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recipient {
    pub email: String,
    pub name: String,
}

/// A templated email ready for the transport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmailMessage {
    pub template_id: String,
    pub options: TemplateOptions,
    /// Variables injected into the template.
    pub vars: BTreeMap<String, String>,
    pub from: Sender,
    pub to: Recipient,
}

impl EmailMessage {
    /// Returns a template variable by name.
    pub fn var(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }
}

/// Trait for delivering templated emails.
#[async_trait]
pub trait MailTransport: Send + Sync {
    /// Sends the message.
    async fn send(&self, message: &EmailMessage) -> Result<(), NotifierError>;
}

#[derive(Debug, Default)]
struct InMemoryMailState {
    sent: Vec<EmailMessage>,
    fail_on_send: bool,
}

/// In-memory mail transport that keeps every sent message.
#[derive(Debug, Clone, Default)]
pub struct InMemoryMailTransport {
    state: Arc<RwLock<InMemoryMailState>>,
}

impl InMemoryMailTransport {
    /// Creates a new in-memory mail transport.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configures the transport to fail every send.
    pub fn set_fail_on_send(&self, fail: bool) {
        self.state
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .fail_on_send = fail;
    }

    /// Returns the number of delivered messages.
    pub fn sent_count(&self) -> usize {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .sent
            .len()
    }

    /// Returns the delivered messages in send order.
    pub fn sent(&self) -> Vec<EmailMessage> {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .sent
            .clone()
    }
}

#[async_trait]
impl MailTransport for InMemoryMailTransport {
    async fn send(&self, message: &EmailMessage) -> Result<(), NotifierError> {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);

        if state.fail_on_send {
            return Err(NotifierError::Transport(format!(
                "Unable to send mail to {}",
                message.to.email
            )));
        }

        state.sent.push(message.clone());
        Ok(())
    }
}
