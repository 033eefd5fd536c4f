use serde::{Deserialize, Serialize};

/// Platform entity identifier of an order.
///
/// This is the internal numeric key, not the customer-facing increment id
/// (e.g. `"100000042"`), which is carried separately on the snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(u64);

impl OrderId {
    /// Creates an order ID from the platform's entity key.
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the underlying entity key.
    pub fn get(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for OrderId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl From<OrderId> for u64 {
    fn from(id: OrderId) -> Self {
        id.0
    }
}

/// Identifier of the store (website scope) an order was placed in.
///
/// Configuration such as the decline-email templates is resolved per store.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct StoreId(u32);

impl StoreId {
    /// Creates a store ID.
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns the underlying store key.
    pub fn get(&self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for StoreId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for StoreId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}
