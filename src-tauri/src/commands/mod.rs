//! Tauri IPC command handlers.
//!
//! This module is the entry point for page `invoke()` calls. Command handlers
//! perform parameter parsing, lock the page session and forward to the
//! `services` layer. Commands should not contain business logic directly.

use std::sync::Mutex;

use crate::services::session::Storefront;

pub mod cart;
pub mod catalog;
pub mod order;
pub mod page;
pub mod profile;
pub mod settings;

/// Tauri managed state holding the page session.
pub struct StorefrontState {
    session: Mutex<Storefront>,
}

impl StorefrontState {
    pub fn new(session: Storefront) -> Self {
        Self {
            session: Mutex::new(session),
        }
    }

    /// Run one handler against the session, converting errors for the IPC
    /// boundary.
    pub fn with_session<T>(
        &self,
        handler: impl FnOnce(&mut Storefront) -> crate::error::Result<T>,
    ) -> Result<T, String> {
        let mut session = self
            .session
            .lock()
            .map_err(|e| format!("Session lock poisoned: {}", e))?;
        handler(&mut session).map_err(|e| e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::services::render::tests::RecordingPresenter;
    use crate::storage::MemoryStore;

    fn test_state() -> StorefrontState {
        let session = Storefront::restore(
            Arc::new(MemoryStore::new()),
            Arc::new(RecordingPresenter::default()),
        )
        .unwrap();
        StorefrontState::new(session)
    }

    #[test]
    fn with_session_returns_handler_value() {
        let state = test_state();
        let count = state.with_session(|s| Ok(s.cart_count())).unwrap();
        assert_eq!(count, 0);
    }

    #[test]
    fn with_session_stringifies_errors() {
        let state = test_state();
        let err = state.with_session(|s| s.add_to_cart(0)).unwrap_err();
        assert_eq!(err, "Not found: service card 0");
    }
}
