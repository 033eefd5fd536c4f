//! Read-only projection of a platform order.

use common::{OrderId, StoreId};
use serde::{Deserialize, Serialize};

use super::state::OrderState;
use super::value_objects::{BillingAddress, LineItem, non_empty};

/// The fields of an order the notifiers need, captured at dispatch time.
///
/// Snapshots are built fresh for every event by the host adapter and never
/// persisted. Side effects on the live order go through the order repository,
/// not through this value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderSnapshot {
    id: OrderId,
    increment_id: String,
    previous_state: Option<OrderState>,
    current_state: OrderState,
    customer_name: Option<String>,
    customer_first_name: Option<String>,
    customer_last_name: Option<String>,
    customer_email: String,
    billing_address: Option<BillingAddress>,
    line_items: Vec<LineItem>,
    store_id: StoreId,
    store_name: String,
    order_view_url: String,
}

impl OrderSnapshot {
    /// Creates a builder for the order with the given entity and increment ids.
    pub fn builder(id: OrderId, increment_id: impl Into<String>) -> OrderSnapshotBuilder {
        OrderSnapshotBuilder::new(id, increment_id)
    }

    pub fn id(&self) -> OrderId {
        self.id
    }

    /// Customer-facing order number.
    pub fn increment_id(&self) -> &str {
        &self.increment_id
    }

    /// State before the save that triggered the event; `None` for new orders.
    pub fn previous_state(&self) -> Option<OrderState> {
        self.previous_state
    }

    pub fn current_state(&self) -> OrderState {
        self.current_state
    }

    pub fn customer_name(&self) -> Option<&str> {
        non_empty(self.customer_name.as_deref())
    }

    pub fn customer_first_name(&self) -> Option<&str> {
        non_empty(self.customer_first_name.as_deref())
    }

    pub fn customer_last_name(&self) -> Option<&str> {
        non_empty(self.customer_last_name.as_deref())
    }

    pub fn customer_email(&self) -> &str {
        &self.customer_email
    }

    pub fn billing_address(&self) -> Option<&BillingAddress> {
        self.billing_address.as_ref()
    }

    /// Line items in the order they were added.
    pub fn line_items(&self) -> &[LineItem] {
        &self.line_items
    }

    pub fn store_id(&self) -> StoreId {
        self.store_id
    }

    pub fn store_name(&self) -> &str {
        &self.store_name
    }

    /// Storefront URL where the customer can view this order.
    pub fn order_view_url(&self) -> &str {
        &self.order_view_url
    }
}

/// Builder for constructing order snapshots.
#[derive(Debug)]
pub struct OrderSnapshotBuilder {
    snapshot: OrderSnapshot,
}

impl OrderSnapshotBuilder {
    fn new(id: OrderId, increment_id: impl Into<String>) -> Self {
        Self {
            snapshot: OrderSnapshot {
                id,
                increment_id: increment_id.into(),
                previous_state: None,
                current_state: OrderState::default(),
                customer_name: None,
                customer_first_name: None,
                customer_last_name: None,
                customer_email: String::new(),
                billing_address: None,
                line_items: Vec::new(),
                store_id: StoreId::default(),
                store_name: String::new(),
                order_view_url: String::new(),
            },
        }
    }

    /// Sets the state before and after the save.
    pub fn states(mut self, previous: Option<OrderState>, current: OrderState) -> Self {
        self.snapshot.previous_state = previous;
        self.snapshot.current_state = current;
        self
    }

    pub fn customer_name(mut self, name: impl Into<String>) -> Self {
        self.snapshot.customer_name = Some(name.into());
        self
    }

    pub fn customer_first_name(mut self, first_name: impl Into<String>) -> Self {
        self.snapshot.customer_first_name = Some(first_name.into());
        self
    }

    pub fn customer_last_name(mut self, last_name: impl Into<String>) -> Self {
        self.snapshot.customer_last_name = Some(last_name.into());
        self
    }

    pub fn customer_email(mut self, email: impl Into<String>) -> Self {
        self.snapshot.customer_email = email.into();
        self
    }

    pub fn billing_address(mut self, address: BillingAddress) -> Self {
        self.snapshot.billing_address = Some(address);
        self
    }

    /// Appends a line item.
    pub fn line_item(mut self, name: impl Into<String>) -> Self {
        self.snapshot.line_items.push(LineItem::new(name));
        self
    }

    /// Replaces all line items.
    pub fn line_items(mut self, items: impl IntoIterator<Item = LineItem>) -> Self {
        self.snapshot.line_items = items.into_iter().collect();
        self
    }

    /// Sets the store the order belongs to.
    pub fn store(mut self, id: StoreId, name: impl Into<String>) -> Self {
        self.snapshot.store_id = id;
        self.snapshot.store_name = name.into();
        self
    }

    pub fn order_view_url(mut self, url: impl Into<String>) -> Self {
        self.snapshot.order_view_url = url.into();
        self
    }

    pub fn build(self) -> OrderSnapshot {
        self.snapshot
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let order = OrderSnapshot::builder(OrderId::new(1), "100000001").build();

        assert_eq!(order.id(), OrderId::new(1));
        assert_eq!(order.increment_id(), "100000001");
        assert_eq!(order.previous_state(), None);
        assert_eq!(order.current_state(), OrderState::New);
        assert!(order.line_items().is_empty());
        assert!(order.billing_address().is_none());
        assert_eq!(order.store_id(), StoreId::default());
    }

    #[test]
    fn test_builder_sets_all_fields() {
        let order = OrderSnapshot::builder(OrderId::new(7), "100000007")
            .states(Some(OrderState::New), OrderState::Processing)
            .customer_name("Jane Doe")
            .customer_first_name("Jane")
            .customer_last_name("Doe")
            .customer_email("jane@example.com")
            .billing_address(BillingAddress::new("Jane", "Doe"))
            .line_item("Widget")
            .line_item("Gadget")
            .store(StoreId::new(2), "Main Store")
            .order_view_url("https://shop.example.com/sales/order/view/order_id/7/")
            .build();

        assert_eq!(order.previous_state(), Some(OrderState::New));
        assert_eq!(order.current_state(), OrderState::Processing);
        assert_eq!(order.customer_name(), Some("Jane Doe"));
        assert_eq!(order.customer_first_name(), Some("Jane"));
        assert_eq!(order.customer_last_name(), Some("Doe"));
        assert_eq!(order.customer_email(), "jane@example.com");
        assert_eq!(
            order.line_items(),
            &[LineItem::new("Widget"), LineItem::new("Gadget")]
        );
        assert_eq!(order.store_id(), StoreId::new(2));
        assert_eq!(order.store_name(), "Main Store");
        assert!(order.order_view_url().ends_with("/order_id/7/"));
    }

    #[test]
    fn test_empty_customer_name_reads_as_absent() {
        let order = OrderSnapshot::builder(OrderId::new(1), "100000001")
            .customer_name("")
            .customer_first_name("")
            .build();

        assert_eq!(order.customer_name(), None);
        assert_eq!(order.customer_first_name(), None);
    }

    #[test]
    fn test_line_items_replace_previous() {
        let order = OrderSnapshot::builder(OrderId::new(1), "100000001")
            .line_item("Old")
            .line_items(vec![LineItem::new("A"), LineItem::new("B")])
            .build();

        let names: Vec<&str> = order.line_items().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["A", "B"]);
    }
}
