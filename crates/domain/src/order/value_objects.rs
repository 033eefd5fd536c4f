//! Value objects carried by an order snapshot.

use serde::{Deserialize, Serialize};

/// Returns the value when it holds at least one character.
pub(crate) fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Billing address fields relevant to addressing the customer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillingAddress {
    /// Composed display name as stored on the address.
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub first_name: Option<String>,

    #[serde(default)]
    pub last_name: Option<String>,
}

impl BillingAddress {
    /// Creates an address from first and last name.
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            name: None,
            first_name: Some(first_name.into()),
            last_name: Some(last_name.into()),
        }
    }

    /// Sets the composed display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Returns the composed name field, if set and non-empty.
    pub fn composed_name(&self) -> Option<&str> {
        non_empty(self.name.as_deref())
    }

    /// Returns the first name, if set and non-empty.
    pub fn first_name(&self) -> Option<&str> {
        non_empty(self.first_name.as_deref())
    }

    /// Joins first and last name with a single space.
    ///
    /// A missing half is treated as empty; the result is trimmed and `None`
    /// when nothing remains.
    pub fn full_name(&self) -> Option<String> {
        let joined = format!(
            "{} {}",
            self.first_name.as_deref().unwrap_or_default(),
            self.last_name.as_deref().unwrap_or_default()
        );
        let trimmed = joined.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    }
}

/// A line item of an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Product name as shown to the customer.
    pub name: String,
}

impl LineItem {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_name_joins_both_halves() {
        let address = BillingAddress::new("Jane", "Doe");
        assert_eq!(address.full_name().as_deref(), Some("Jane Doe"));
    }

    #[test]
    fn test_full_name_with_one_half_missing() {
        let address = BillingAddress {
            first_name: Some("Jane".to_string()),
            ..Default::default()
        };
        assert_eq!(address.full_name().as_deref(), Some("Jane"));
    }

    #[test]
    fn test_full_name_empty_address() {
        assert_eq!(BillingAddress::default().full_name(), None);
    }

    #[test]
    fn test_composed_name_ignores_empty_string() {
        let address = BillingAddress::new("Jane", "Doe").with_name("");
        assert_eq!(address.composed_name(), None);

        let address = address.with_name("Dr. Jane Doe");
        assert_eq!(address.composed_name(), Some("Dr. Jane Doe"));
    }

    #[test]
    fn test_billing_address_deserializes_with_missing_fields() {
        let address: BillingAddress = serde_json::from_str(r#"{"first_name":"Jane"}"#).unwrap();
        assert_eq!(address.first_name(), Some("Jane"));
        assert_eq!(address.name, None);
        assert_eq!(address.last_name, None);
    }
}
