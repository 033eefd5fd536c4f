//! Per-store decline notification settings.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use common::StoreId;
use serde::{Deserialize, Serialize};

/// Decline notification settings resolved for one store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeclineConfig {
    pub enabled: bool,
    pub subject_template: String,
    pub body_template: String,
    pub sender_email: String,
    pub sender_name: String,
}

impl DeclineConfig {
    /// Creates an enabled configuration.
    pub fn enabled(
        subject_template: impl Into<String>,
        body_template: impl Into<String>,
        sender_email: impl Into<String>,
        sender_name: impl Into<String>,
    ) -> Self {
        Self {
            enabled: true,
            subject_template: subject_template.into(),
            body_template: body_template.into(),
            sender_email: sender_email.into(),
            sender_name: sender_name.into(),
        }
    }

    /// Creates a disabled configuration.
    pub fn disabled() -> Self {
        Self::default()
    }
}

/// Source of decline notification settings.
pub trait DeclineSettings: Send + Sync {
    /// Resolves the settings in effect for a store.
    fn decline_config(&self, store: StoreId) -> DeclineConfig;
}

#[derive(Debug, Default)]
struct SettingsState {
    default: DeclineConfig,
    stores: HashMap<StoreId, DeclineConfig>,
}

/// In-memory settings with per-store overrides over a default scope.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDeclineSettings {
    state: Arc<RwLock<SettingsState>>,
}

impl InMemoryDeclineSettings {
    /// Creates settings where every store uses `default`.
    pub fn new(default: DeclineConfig) -> Self {
        Self {
            state: Arc::new(RwLock::new(SettingsState {
                default,
                stores: HashMap::new(),
            })),
        }
    }

    /// Overrides the settings for one store.
    pub fn set_store(&self, store: StoreId, config: DeclineConfig) {
        self.state
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .stores
            .insert(store, config);
    }
}

impl DeclineSettings for InMemoryDeclineSettings {
    fn decline_config(&self, store: StoreId) -> DeclineConfig {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        state
            .stores
            .get(&store)
            .unwrap_or(&state.default)
            .clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_scope_applies_to_every_store() {
        let settings = InMemoryDeclineSettings::new(DeclineConfig::enabled(
            "subject",
            "body",
            "shop@example.com",
            "Shop",
        ));

        let config = settings.decline_config(StoreId::new(4));
        assert!(config.enabled);
        assert_eq!(config.sender_name, "Shop");
    }

    #[test]
    fn test_store_override_wins() {
        let settings = InMemoryDeclineSettings::new(DeclineConfig::disabled());
        settings.set_store(
            StoreId::new(2),
            DeclineConfig::enabled("s", "b", "de@example.com", "Shop DE"),
        );

        assert!(settings.decline_config(StoreId::new(2)).enabled);
        assert!(!settings.decline_config(StoreId::new(1)).enabled);
    }

    #[test]
    fn test_disabled_config_is_empty() {
        let config = DeclineConfig::disabled();
        assert!(!config.enabled);
        assert!(config.subject_template.is_empty());
    }
}
