//! Customer notification for declined orders.

use std::collections::BTreeMap;

use domain::OrderSnapshot;

use crate::error::NotifierError;
use crate::services::mail::{
    DECLINE_TEMPLATE_ID, EmailMessage, MailTransport, Recipient, Sender, TemplateArea,
    TemplateOptions,
};
use crate::services::orders::OrderRepository;
use crate::settings::{DeclineConfig, DeclineSettings};
use crate::template::DeclineEmailComposer;
use crate::translation::{InlineTranslation, TranslationSuspension};

/// Result of a decline notification that did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclineOutcome {
    /// Notifications are turned off for the order's store.
    Disabled,
    /// The email was sent and the order annotated.
    Sent,
}

/// Emails customers about declined orders and records it on the order.
pub struct DeclineNotifier<M, O, T, C>
where
    M: MailTransport,
    O: OrderRepository,
    T: InlineTranslation,
    C: DeclineSettings,
{
    mail: M,
    orders: O,
    translation: T,
    settings: C,
    composer: DeclineEmailComposer,
}

impl<M, O, T, C> DeclineNotifier<M, O, T, C>
where
    M: MailTransport,
    O: OrderRepository,
    T: InlineTranslation,
    C: DeclineSettings,
{
    /// Creates a new decline notifier.
    pub fn new(mail: M, orders: O, translation: T, settings: C) -> Self {
        Self {
            mail,
            orders,
            translation,
            settings,
            composer: DeclineEmailComposer::new(),
        }
    }

    /// Reacts to a declined order using the settings of its store.
    ///
    /// Failures are logged and swallowed so the order save can complete.
    #[tracing::instrument(
        skip(self, order),
        fields(order_id = %order.id(), increment_id = order.increment_id())
    )]
    pub async fn handle_decline(&self, order: &OrderSnapshot) {
        let config = self.settings.decline_config(order.store_id());

        let outcome = match self.notify_decline(order, &config).await {
            Ok(DeclineOutcome::Disabled) => "disabled",
            Ok(DeclineOutcome::Sent) => "sent",
            Err(e) => {
                tracing::error!(error = %e, "decline notification failed");
                "failed"
            }
        };
        metrics::counter!("decline_notifications_total", "outcome" => outcome).increment(1);
    }

    /// Sends the decline email and annotates the order.
    ///
    /// Steps run strictly in order: render, suspend translation, send, resume
    /// translation, then comment, flag and save the order. Nothing is sent
    /// when a template renders empty, and the order is only touched after a
    /// successful send.
    pub async fn notify_decline(
        &self,
        order: &OrderSnapshot,
        config: &DeclineConfig,
    ) -> Result<DeclineOutcome, NotifierError> {
        if !config.enabled {
            tracing::debug!(store_id = %order.store_id(), "decline notification disabled");
            return Ok(DeclineOutcome::Disabled);
        }

        let rendered = self
            .composer
            .render(order, &config.subject_template, &config.body_template);

        if rendered.body.is_empty() {
            return Err(NotifierError::EmptyTemplate { field: "content" });
        }
        if rendered.subject.is_empty() {
            return Err(NotifierError::EmptyTemplate { field: "subject" });
        }

        let customer_name = self.composer.customer_name(order);
        let customer_email = order.customer_email();

        {
            let _suspension = TranslationSuspension::new(&self.translation);

            let message = EmailMessage {
                template_id: DECLINE_TEMPLATE_ID.to_string(),
                options: TemplateOptions {
                    area: TemplateArea::Frontend,
                    store: order.store_id(),
                },
                vars: BTreeMap::from([
                    ("content".to_string(), rendered.body),
                    ("subject".to_string(), rendered.subject),
                ]),
                from: Sender {
                    email: config.sender_email.clone(),
                    name: config.sender_name.clone(),
                },
                to: Recipient {
                    email: customer_email.to_string(),
                    name: customer_name.clone(),
                },
            };

            self.mail.send(&message).await?;
        }

        tracing::info!(
            "Declination email was sent to customer {} ({}) for order #{}",
            customer_name,
            customer_email,
            order.increment_id()
        );

        let comment =
            format!("Declination email was sent to customer {customer_name} ({customer_email})");
        self.orders.add_history_comment(order.id(), &comment).await?;
        self.orders.set_customer_notified(order.id(), true).await?;
        self.orders.save(order.id()).await?;

        Ok(DeclineOutcome::Sent)
    }
}
