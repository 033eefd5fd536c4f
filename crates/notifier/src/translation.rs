//! Inline translation suspension.
//!
//! The storefront can inline translation markup into rendered text. Outbound
//! mail must be built with that turned off, and it must be turned back on no
//! matter how sending ends.

use std::sync::{Arc, PoisonError, RwLock};

/// Toggle for the host's inline translation.
pub trait InlineTranslation: Send + Sync {
    fn suspend(&self);
    fn resume(&self);
}

/// Scope that keeps inline translation suspended until dropped.
#[must_use = "translation resumes as soon as the suspension is dropped"]
pub struct TranslationSuspension<'a, T: InlineTranslation + ?Sized> {
    translation: &'a T,
}

impl<'a, T: InlineTranslation + ?Sized> TranslationSuspension<'a, T> {
    /// Suspends translation for the lifetime of the returned scope.
    pub fn new(translation: &'a T) -> Self {
        translation.suspend();
        Self { translation }
    }
}

impl<T: InlineTranslation + ?Sized> Drop for TranslationSuspension<'_, T> {
    fn drop(&mut self) {
        self.translation.resume();
    }
}

#[derive(Debug, Default)]
struct TranslationState {
    depth: usize,
    suspend_calls: usize,
    resume_calls: usize,
}

/// In-memory inline translation switch.
///
/// Suspensions nest: translation stays off until every open suspension has
/// resumed, so concurrent sends sharing one handle never re-enable it early.
#[derive(Debug, Clone, Default)]
pub struct InMemoryInlineTranslation {
    state: Arc<RwLock<TranslationState>>,
}

impl InMemoryInlineTranslation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true while translation is suspended.
    pub fn is_suspended(&self) -> bool {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .depth
            > 0
    }

    /// Returns how many times suspend and resume were called.
    pub fn call_counts(&self) -> (usize, usize) {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        (state.suspend_calls, state.resume_calls)
    }
}

impl InlineTranslation for InMemoryInlineTranslation {
    fn suspend(&self) {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        state.depth += 1;
        state.suspend_calls += 1;
    }

    fn resume(&self) {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        state.depth = state.depth.saturating_sub(1);
        state.resume_calls += 1;
    }
}
