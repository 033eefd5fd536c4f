//! Decline email rendering.
//!
//! Templates are plain strings configured per store. A fixed set of
//! placeholder tokens is replaced literally, in the order listed in
//! [`TOKENS`], everywhere it occurs. No token is a substring of another.

use domain::OrderSnapshot;

pub const CUSTOMER_NAME: &str = "{{customer_name}}";
pub const CUSTOMER_FIRSTNAME: &str = "{{customer_firstname}}";
pub const ORDER_INCREMENT_ID: &str = "{{order_increment_id}}";
pub const ORDER_VIEW_URL: &str = "{{order_view_url}}";
pub const PRODUCTS: &str = "{{products}}";
pub const STORE_NAME: &str = "{{store_name}}";

/// Placeholder tokens in substitution order.
pub const TOKENS: [&str; 6] = [
    CUSTOMER_NAME,
    CUSTOMER_FIRSTNAME,
    ORDER_INCREMENT_ID,
    ORDER_VIEW_URL,
    PRODUCTS,
    STORE_NAME,
];

/// Subject and body after token substitution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedEmail {
    pub subject: String,
    pub body: String,
}

/// Renders decline notification emails from an order snapshot.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeclineEmailComposer;

impl DeclineEmailComposer {
    pub fn new() -> Self {
        Self
    }

    /// Substitutes the order's values into both templates.
    pub fn render(
        &self,
        order: &OrderSnapshot,
        subject_template: &str,
        body_template: &str,
    ) -> RenderedEmail {
        let values = self.token_values(order);
        RenderedEmail {
            subject: substitute(subject_template, &values),
            body: substitute(body_template, &values),
        }
    }

    /// Resolves the name to address the customer by.
    ///
    /// The first non-empty candidate wins:
    /// 1. the order's customer name
    /// 2. customer first and last name, when both are set
    /// 3. the billing address's composed name
    /// 4. billing first and last name
    pub fn customer_name(&self, order: &OrderSnapshot) -> String {
        if let Some(name) = order.customer_name() {
            return name.to_string();
        }

        if let (Some(first), Some(last)) = (order.customer_first_name(), order.customer_last_name())
        {
            return format!("{first} {last}");
        }

        order
            .billing_address()
            .and_then(|address| {
                address
                    .composed_name()
                    .map(str::to_string)
                    .or_else(|| address.full_name())
            })
            .unwrap_or_default()
    }

    /// Resolves the customer's first name, falling back to the billing address.
    pub fn customer_first_name(&self, order: &OrderSnapshot) -> String {
        order
            .customer_first_name()
            .or_else(|| order.billing_address().and_then(|a| a.first_name()))
            .unwrap_or_default()
            .to_string()
    }

    /// Joins the line-item names with `", "`, preserving order.
    pub fn product_list(&self, order: &OrderSnapshot) -> String {
        order
            .line_items()
            .iter()
            .map(|item| item.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn token_values(&self, order: &OrderSnapshot) -> [(&'static str, String); 6] {
        [
            (CUSTOMER_NAME, self.customer_name(order)),
            (CUSTOMER_FIRSTNAME, self.customer_first_name(order)),
            (ORDER_INCREMENT_ID, order.increment_id().to_string()),
            (ORDER_VIEW_URL, order.order_view_url().to_string()),
            (PRODUCTS, self.product_list(order)),
            (STORE_NAME, order.store_name().to_string()),
        ]
    }
}

fn substitute(template: &str, values: &[(&'static str, String)]) -> String {
    values
        .iter()
        .fold(template.to_string(), |acc, (token, value)| {
            acc.replace(token, value)
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::{OrderId, StoreId};
    use domain::{BillingAddress, OrderSnapshotBuilder};

    fn base() -> OrderSnapshotBuilder {
        OrderSnapshot::builder(OrderId::new(42), "100000042")
            .customer_email("jane@example.com")
            .store(StoreId::new(1), "Main Store")
            .order_view_url("https://shop.example.com/sales/order/view/order_id/42/")
    }

    #[test]
    fn test_tokens_are_not_substrings_of_each_other() {
        for a in TOKENS {
            for b in TOKENS {
                if a != b {
                    assert!(!a.contains(b), "{a} contains {b}");
                }
            }
        }
    }

    #[test]
    fn test_name_prefers_customer_name() {
        let order = base()
            .customer_name("Janet Doe")
            .customer_first_name("Jane")
            .customer_last_name("Doe")
            .billing_address(BillingAddress::new("Bill", "Payer"))
            .build();
        assert_eq!(DeclineEmailComposer::new().customer_name(&order), "Janet Doe");
    }

    #[test]
    fn test_name_from_customer_first_and_last() {
        let order = base()
            .customer_first_name("Jane")
            .customer_last_name("Doe")
            .billing_address(BillingAddress::new("Bill", "Payer"))
            .build();
        assert_eq!(DeclineEmailComposer::new().customer_name(&order), "Jane Doe");
    }

    #[test]
    fn test_name_skips_customer_first_name_without_last() {
        let order = base()
            .customer_first_name("Jane")
            .billing_address(BillingAddress::new("Bill", "Payer").with_name("Bill Payer Sr."))
            .build();
        assert_eq!(
            DeclineEmailComposer::new().customer_name(&order),
            "Bill Payer Sr."
        );
    }

    #[test]
    fn test_name_from_billing_first_and_last() {
        let order = base()
            .billing_address(BillingAddress::new("Jane", "Doe"))
            .build();
        let rendered = DeclineEmailComposer::new().render(&order, "{{customer_name}}", "");
        assert_eq!(rendered.subject, "Jane Doe");
    }

    #[test]
    fn test_name_empty_without_any_source() {
        let order = base().build();
        assert_eq!(DeclineEmailComposer::new().customer_name(&order), "");
    }

    #[test]
    fn test_first_name_falls_back_to_billing() {
        let composer = DeclineEmailComposer::new();

        let order = base().customer_first_name("Jane").build();
        assert_eq!(composer.customer_first_name(&order), "Jane");

        let order = base().billing_address(BillingAddress::new("Bill", "Payer")).build();
        assert_eq!(composer.customer_first_name(&order), "Bill");

        assert_eq!(composer.customer_first_name(&base().build()), "");
    }

    #[test]
    fn test_product_list() {
        let composer = DeclineEmailComposer::new();

        assert_eq!(composer.product_list(&base().build()), "");

        let order = base().line_item("A").line_item("B").build();
        assert_eq!(composer.product_list(&order), "A, B");
    }

    #[test]
    fn test_render_replaces_every_token_everywhere() {
        let order = base()
            .customer_name("Jane Doe")
            .customer_first_name("Jane")
            .line_item("Widget")
            .line_item("Gadget")
            .build();

        let rendered = DeclineEmailComposer::new().render(
            &order,
            "Order #{{order_increment_id}} at {{store_name}}",
            "Hi {{customer_firstname}} ({{customer_name}}), order {{order_increment_id}} \
             with {{products}} was declined. See {{order_view_url}}. {{customer_firstname}}!",
        );

        assert_eq!(rendered.subject, "Order #100000042 at Main Store");
        assert_eq!(
            rendered.body,
            "Hi Jane (Jane Doe), order 100000042 with Widget, Gadget was declined. \
             See https://shop.example.com/sales/order/view/order_id/42/. Jane!"
        );
    }

    #[test]
    fn test_render_leaves_unknown_placeholders() {
        let order = base().build();
        let rendered = DeclineEmailComposer::new().render(&order, "{{coupon_code}}", "{{ products }}");
        assert_eq!(rendered.subject, "{{coupon_code}}");
        assert_eq!(rendered.body, "{{ products }}");
    }

    #[test]
    fn test_render_is_idempotent() {
        let order = base()
            .customer_name("Jane Doe")
            .line_item("Widget")
            .build();
        let composer = DeclineEmailComposer::new();

        let first = composer.render(&order, "{{customer_name}}", "{{products}} {{store_name}}");
        let second = composer.render(&order, "{{customer_name}}", "{{products}} {{store_name}}");
        assert_eq!(first, second);
    }

    #[test]
    fn test_token_only_template_can_render_empty() {
        let order = base().build();
        let rendered = DeclineEmailComposer::new().render(&order, "{{products}}", "body");
        assert!(rendered.subject.is_empty());
        assert_eq!(rendered.body, "body");
    }
}
