//! Typed session handle over a [`TokenStore`].
//!
//! A [`Session`] is cloned into every service client and domain service.
//! State changes are announced on a broadcast channel so the application
//! layer, not the HTTP plumbing, decides what a lost session means for the
//! user.

use std::sync::Arc;

use auras_core::ServiceKind;
use auras_core::entities::User;
use tokio::sync::broadcast;

use crate::error::SessionError;
use crate::memory::MemoryTokenStore;
use crate::store::{TOKEN_KEY, TokenStore, USER_KEY};

/// Route the application should show after an invalidation.
pub const LOGIN_ROUTE: &str = "/login";

/// Route shown after a deliberate logout.
pub const HOME_ROUTE: &str = "/";

const EVENT_CAPACITY: usize = 32;

/// Something that happened to the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// A login or signup stored a fresh token.
    Established { user_id: Option<String> },
    /// The user logged out.
    Cleared { redirect: &'static str },
    /// A service answered 401; the stored credentials were dropped.
    Invalidated {
        service: ServiceKind,
        redirect: &'static str,
    },
}

#[derive(Clone)]
pub struct Session {
    inner: Arc<Inner>,
}

struct Inner {
    store: Arc<dyn TokenStore>,
    events: broadcast::Sender<SessionEvent>,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("backend", &self.inner.store.backend_name())
            .field("authenticated", &self.is_authenticated())
            .finish()
    }
}

impl Session {
    #[must_use]
    pub fn new(store: Arc<dyn TokenStore>) -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Self {
            inner: Arc::new(Inner { store, events }),
        }
    }

    /// A session backed by process memory.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryTokenStore::new()))
    }

    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        self.inner.store.backend_name()
    }

    /// The stored bearer token, if any.
    ///
    /// A store that cannot be read counts as "no token": the request goes out
    /// unauthenticated and the server decides.
    #[must_use]
    pub fn token(&self) -> Option<String> {
        match self.inner.store.get(TOKEN_KEY) {
            Ok(token) => token.filter(|t| !t.is_empty()),
            Err(error) => {
                tracing::warn!(%error, "failed to read session token");
                None
            }
        }
    }

    /// The stored user profile, if any and if it still parses.
    #[must_use]
    pub fn user(&self) -> Option<User> {
        let raw = match self.inner.store.get(USER_KEY) {
            Ok(raw) => raw?,
            Err(error) => {
                tracing::warn!(%error, "failed to read session user");
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(error) => {
                tracing::warn!(%error, "stored session user is not valid JSON");
                None
            }
        }
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    /// Persist a new token and user, then announce [`SessionEvent::Established`].
    ///
    /// A `None` user removes any previously stored profile.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError`] if the store rejects a write.
    pub fn establish(&self, token: &str, user: Option<&User>) -> Result<(), SessionError> {
        self.inner.store.set(TOKEN_KEY, token)?;
        match user {
            Some(user) => {
                let json = serde_json::to_string(user)?;
                self.inner.store.set(USER_KEY, &json)?;
            }
            None => self.inner.store.remove(USER_KEY)?,
        }
        tracing::debug!(backend = self.backend_name(), "session established");
        self.emit(SessionEvent::Established {
            user_id: user.map(|u| u.id.clone()),
        });
        Ok(())
    }

    /// Drop token and user, then announce [`SessionEvent::Cleared`].
    ///
    /// # Errors
    ///
    /// Returns [`SessionError`] if the store rejects a removal.
    pub fn clear(&self) -> Result<(), SessionError> {
        self.remove_credentials()?;
        self.emit(SessionEvent::Cleared {
            redirect: HOME_ROUTE,
        });
        Ok(())
    }

    /// React to a 401 from `service`: drop the credentials and announce
    /// [`SessionEvent::Invalidated`] exactly once.
    ///
    /// The event is sent even if the store fails to clear, since the server
    /// has already rejected the token.
    pub fn invalidate(&self, service: ServiceKind) {
        if let Err(error) = self.remove_credentials() {
            tracing::error!(%error, %service, "failed to clear session after 401");
        }
        tracing::warn!(%service, "session rejected by service; credentials cleared");
        self.emit(SessionEvent::Invalidated {
            service,
            redirect: LOGIN_ROUTE,
        });
    }

    /// Listen for session events from this point on.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.inner.events.subscribe()
    }

    fn remove_credentials(&self) -> Result<(), SessionError> {
        self.inner.store.remove(TOKEN_KEY)?;
        self.inner.store.remove(USER_KEY)
    }

    fn emit(&self, event: SessionEvent) {
        // No subscribers is fine; the state change already happened.
        let _ = self.inner.events.send(event);
    }
}
