// Session collaborator: where the bearer credential comes from, and what
// happens when the server rejects it.
//
// Credential issuance and storage live outside this crate. The fetchers
// only need to read the current token and to report a 401 exactly once
// per rejected request.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;

use tracing::info;

/// The auth boundary consumed by every authenticated request.
pub trait Session: Send + Sync {
    /// The current bearer credential, if any.
    fn auth_token(&self) -> Option<String>;

    /// Called when the server rejected the credential (HTTP 401).
    /// Implementations must fully clear local session state.
    fn on_session_expired(&self);
}

/// A session backed by a single in-memory token (e.g. from `GLIMPSE_TOKEN`).
#[derive(Debug, Default)]
pub struct TokenSession {
    token: Mutex<Option<String>>,
    terminations: AtomicU32,
}

impl TokenSession {
    pub fn new(token: Option<String>) -> Self {
        Self {
            token: Mutex::new(token.filter(|t| !t.is_empty())),
            terminations: AtomicU32::new(0),
        }
    }

    /// True once the server has rejected the credential.
    pub fn is_expired(&self) -> bool {
        self.terminations() > 0
    }

    /// How many times the session has been terminated.
    pub fn terminations(&self) -> u32 {
        self.terminations.load(Ordering::SeqCst)
    }
}

impl Session for TokenSession {
    fn auth_token(&self) -> Option<String> {
        self.token
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }

    fn on_session_expired(&self) {
        if let Ok(mut guard) = self.token.lock() {
            *guard = None;
        }
        let count = self.terminations.fetch_add(1, Ordering::SeqCst) + 1;
        info!(terminations = count, "Session expired, credential cleared");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expiry_clears_token() {
        let session = TokenSession::new(Some("abc".to_string()));
        assert_eq!(session.auth_token().as_deref(), Some("abc"));
        session.on_session_expired();
        assert!(session.auth_token().is_none());
        assert!(session.is_expired());
        assert_eq!(session.terminations(), 1);
    }

    #[test]
    fn test_empty_token_is_absent() {
        let session = TokenSession::new(Some(String::new()));
        assert!(session.auth_token().is_none());
        assert!(!session.is_expired());
    }
}
