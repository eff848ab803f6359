//! Hooks run on every request a [`ServiceClient`](crate::ServiceClient) makes.
//!
//! The default chain is [`BearerAuth`] followed by [`SessionGuard`]:
//! - **Outgoing**: attach `Authorization: Bearer <token>` when a session exists.
//! - **Failed**: on 401 clear the session and emit one invalidation event;
//!   log 403 and 500 bodies. The error always continues to the caller.

use std::sync::Arc;

use auras_core::ServiceKind;
use auras_session::Session;
use reqwest::Method;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};

use crate::error::ApiError;

/// What a hook knows about the request it is observing.
#[derive(Debug, Clone, Copy)]
pub struct RequestContext<'a> {
    pub service: ServiceKind,
    pub method: &'a Method,
    pub path: &'a str,
}

/// A request/response hook.
///
/// Hooks observe and decorate; they never block a request or swallow an
/// error.
pub trait Interceptor: Send + Sync {
    /// Adjust headers before the request is sent.
    fn before_request(&self, _ctx: &RequestContext<'_>, _headers: &mut HeaderMap) {}

    /// Observe a failed request before the error reaches the caller.
    fn after_error(&self, _ctx: &RequestContext<'_>, _error: &ApiError) {}
}

/// The standard chain: bearer auth, then session invalidation on 401.
#[must_use]
pub fn default_chain(session: &Session) -> Vec<Arc<dyn Interceptor>> {
    vec![
        Arc::new(BearerAuth::new(session.clone())),
        Arc::new(SessionGuard::new(session.clone())),
    ]
}

// ── BearerAuth ─────────────────────────────────────────────────────

/// Attach the session token as a bearer credential.
///
/// Without a token the request goes out unauthenticated; the server is the
/// authority on whether that is allowed.
#[derive(Debug, Clone)]
pub struct BearerAuth {
    session: Session,
}

impl BearerAuth {
    #[must_use]
    pub const fn new(session: Session) -> Self {
        Self { session }
    }
}

impl Interceptor for BearerAuth {
    fn before_request(&self, ctx: &RequestContext<'_>, headers: &mut HeaderMap) {
        let Some(token) = self.session.token() else {
            return;
        };
        match HeaderValue::from_str(&format!("Bearer {token}")) {
            Ok(mut value) => {
                value.set_sensitive(true);
                headers.insert(AUTHORIZATION, value);
            }
            Err(error) => {
                tracing::warn!(
                    service = %ctx.service,
                    %error,
                    "stored token is not a valid header value; sending request without it"
                );
            }
        }
    }
}

// ── SessionGuard ───────────────────────────────────────────────────

/// Global reactions to failed responses.
///
/// A 401 from any service drops the whole session, even if only that one
/// backend rejected the token.
#[derive(Debug, Clone)]
pub struct SessionGuard {
    session: Session,
}

impl SessionGuard {
    #[must_use]
    pub const fn new(session: Session) -> Self {
        Self { session }
    }
}

impl Interceptor for SessionGuard {
    fn after_error(&self, ctx: &RequestContext<'_>, error: &ApiError) {
        let ApiError::Status { status, body, .. } = error else {
            return;
        };
        match status {
            401 => self.session.invalidate(ctx.service),
            403 => tracing::warn!(
                service = %ctx.service,
                method = %ctx.method,
                path = ctx.path,
                body = ?body,
                "access forbidden"
            ),
            500 => tracing::error!(
                service = %ctx.service,
                method = %ctx.method,
                path = ctx.path,
                body = ?body,
                "server error"
            ),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use auras_session::{LOGIN_ROUTE, SessionEvent};

    fn ctx(method: &Method) -> RequestContext<'_> {
        RequestContext {
            service: ServiceKind::Reports,
            method,
            path: "/api/reports/velocity",
        }
    }

    fn status_error(status: u16) -> ApiError {
        ApiError::Status {
            service: ServiceKind::Reports,
            status,
            message: None,
            body: Some(serde_json::json!({"message": "denied"})),
        }
    }

    #[test]
    fn bearer_auth_is_pass_through_without_token() {
        let session = Session::in_memory();
        let mut headers = HeaderMap::new();
        BearerAuth::new(session).before_request(&ctx(&Method::GET), &mut headers);
        assert!(headers.get(AUTHORIZATION).is_none());
    }

    #[test]
    fn bearer_auth_sets_sensitive_header() {
        let session = Session::in_memory();
        session.establish("T1", None).unwrap();
        let mut headers = HeaderMap::new();
        BearerAuth::new(session).before_request(&ctx(&Method::GET), &mut headers);

        let value = headers.get(AUTHORIZATION).expect("header set");
        assert_eq!(value.to_str().unwrap(), "Bearer T1");
        assert!(value.is_sensitive());
    }

    #[test]
    fn bearer_auth_skips_unencodable_token() {
        let session = Session::in_memory();
        session.establish("bad\ntoken", None).unwrap();
        let mut headers = HeaderMap::new();
        BearerAuth::new(session).before_request(&ctx(&Method::GET), &mut headers);
        assert!(headers.get(AUTHORIZATION).is_none());
    }

    #[test]
    fn guard_invalidates_on_401_only() {
        let session = Session::in_memory();
        session.establish("T1", None).unwrap();
        let mut events = session.subscribe();
        let guard = SessionGuard::new(session.clone());

        for status in [400, 403, 404, 500, 503] {
            guard.after_error(&ctx(&Method::GET), &status_error(status));
        }
        assert!(session.is_authenticated());
        assert!(events.try_recv().is_err());

        guard.after_error(&ctx(&Method::GET), &status_error(401));
        assert!(!session.is_authenticated());
        assert_eq!(
            events.try_recv().unwrap(),
            SessionEvent::Invalidated {
                service: ServiceKind::Reports,
                redirect: LOGIN_ROUTE,
            }
        );
        assert!(events.try_recv().is_err());
    }

    #[test]
    fn guard_ignores_transport_level_errors() {
        let session = Session::in_memory();
        session.establish("T1", None).unwrap();
        let guard = SessionGuard::new(session.clone());
        let err = ApiError::Decode {
            service: ServiceKind::Reports,
            path: "/x".into(),
            message: "eof".into(),
        };
        guard.after_error(&ctx(&Method::GET), &err);
        assert!(session.is_authenticated());
    }
}
