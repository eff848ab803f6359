//! Authentication against the auth service.

use auras_client::{ApiError, ServiceClient};
use auras_core::payloads::{Acknowledgement, AuthResponse, LoginCredentials, SignupData};
use auras_session::Session;
use serde::{Deserialize, Serialize};

use crate::error::{ServiceError, fail};

#[derive(Serialize)]
struct GoogleLogin<'a> {
    token: &'a str,
}

#[derive(Serialize)]
struct ForgotPassword<'a> {
    email: &'a str,
}

#[derive(Serialize)]
struct ResetPassword<'a> {
    token: &'a str,
    password: &'a str,
}

#[derive(Deserialize)]
struct VerifyEnvelope {
    #[serde(default)]
    success: bool,
}

/// Login, signup and password flows. Successful logins are written to the
/// shared [`Session`].
#[derive(Debug, Clone)]
pub struct AuthService {
    client: ServiceClient,
    session: Session,
}

impl AuthService {
    #[must_use]
    pub const fn new(client: ServiceClient, session: Session) -> Self {
        Self { client, session }
    }

    /// `POST /api/auth/login`.
    ///
    /// A response with `success` and a non-empty token is stored in the
    /// session; any other success response is returned untouched.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError`] with the server's message or "Login failed".
    pub async fn login(&self, credentials: &LoginCredentials) -> Result<AuthResponse, ServiceError> {
        self.authenticate("/api/auth/login", credentials)
            .await
            .map_err(fail("login", "Login failed"))
    }

    /// `POST /api/auth/signup`, stored like [`Self::login`].
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError`] with the server's message or "Signup failed".
    pub async fn signup(&self, data: &SignupData) -> Result<AuthResponse, ServiceError> {
        self.authenticate("/api/auth/signup", data)
            .await
            .map_err(fail("signup", "Signup failed"))
    }

    /// `POST /api/auth/google` with a Google ID token, stored like [`Self::login`].
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError`] with the server's message or "Google login failed".
    pub async fn google_login(&self, google_token: &str) -> Result<AuthResponse, ServiceError> {
        self.authenticate("/api/auth/google", &GoogleLogin { token: google_token })
            .await
            .map_err(fail("google_login", "Google login failed"))
    }

    /// Forget the stored credentials. No request is made.
    ///
    /// Subscribers receive [`SessionEvent::Cleared`](auras_session::SessionEvent::Cleared).
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError`] if the session store cannot be cleared.
    pub fn logout(&self) -> Result<(), ServiceError> {
        self.session.clear().map_err(|source| {
            let error = ApiError::Session {
                service: self.client.kind(),
                source,
            };
            tracing::error!(%error, "logout failed");
            ServiceError::with_message(error, "Logout failed")
        })
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    /// `GET /api/auth/verify`. Any failure, including a 401, reads as `false`.
    pub async fn verify_token(&self) -> bool {
        match self.client.get::<VerifyEnvelope>("/api/auth/verify").await {
            Ok(response) => response.data.success,
            Err(error) => {
                tracing::warn!(%error, "token verification failed");
                false
            }
        }
    }

    /// `POST /api/auth/forgot-password`.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError`] with the server's message or
    /// "Password reset request failed".
    pub async fn forgot_password(&self, email: &str) -> Result<Acknowledgement, ServiceError> {
        self.client
            .post("/api/auth/forgot-password", &ForgotPassword { email })
            .await
            .map(|response| response.data)
            .map_err(fail("forgot_password", "Password reset request failed"))
    }

    /// `POST /api/auth/reset-password` with the emailed reset token.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError`] with the server's message or "Password reset failed".
    pub async fn reset_password(
        &self,
        token: &str,
        new_password: &str,
    ) -> Result<Acknowledgement, ServiceError> {
        let body = ResetPassword {
            token,
            password: new_password,
        };
        self.client
            .post("/api/auth/reset-password", &body)
            .await
            .map(|response| response.data)
            .map_err(fail("reset_password", "Password reset failed"))
    }

    async fn authenticate<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<AuthResponse, ApiError> {
        let auth: AuthResponse = self.client.post(path, body).await?.data;
        if auth.grants_session() {
            self.session
                .establish(&auth.token, auth.user.as_ref())
                .map_err(|source| ApiError::Session {
                    service: self.client.kind(),
                    source,
                })?;
        }
        Ok(auth)
    }
}
