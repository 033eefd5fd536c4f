//! Order snapshot and related types.

mod snapshot;
mod state;
mod value_objects;

pub use snapshot::{OrderSnapshot, OrderSnapshotBuilder};
pub use state::OrderState;
pub use value_objects::{BillingAddress, LineItem};
