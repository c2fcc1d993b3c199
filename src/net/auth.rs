//! Auth endpoint wrappers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Sign-in/sign-up responses seed the session store; `me` freshens the
//! stored profile; `logout` clears the session no matter what the server
//! said, so a dead backend can never wedge the client in a signed-in state.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use super::client::{ApiClient, Method, decode_required};
use super::error::ApiError;
use super::types::{AuthResponse, UserProfile};

impl ApiClient {
    /// Sign in via `POST /v1/auth/sign-in` and store the returned token and
    /// profile in the session.
    ///
    /// # Errors
    ///
    /// Propagates the request failure; the session is untouched on error.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<AuthResponse, ApiError> {
        let payload = serde_json::json!({ "email": email, "password": password });
        let value = self
            .request(Method::Post, "/v1/auth/sign-in", Some(payload), false)
            .await?;
        let data: AuthResponse = decode_required(value)?;
        self.session().set_access_token(Some(data.access_token.clone()));
        self.session().set_user(Some(data.user.clone()));
        Ok(data)
    }

    /// Create an account via `POST /v1/auth/sign-up`; otherwise identical to
    /// [`ApiClient::sign_in`].
    ///
    /// # Errors
    ///
    /// Propagates the request failure; the session is untouched on error.
    pub async fn sign_up(&self, email: &str, password: &str) -> Result<AuthResponse, ApiError> {
        let payload = serde_json::json!({ "email": email, "password": password });
        let value = self
            .request(Method::Post, "/v1/auth/sign-up", Some(payload), false)
            .await?;
        let data: AuthResponse = decode_required(value)?;
        self.session().set_access_token(Some(data.access_token.clone()));
        self.session().set_user(Some(data.user.clone()));
        Ok(data)
    }

    /// Log out via `POST /v1/auth/logout`. The session is cleared even when
    /// the request fails.
    ///
    /// # Errors
    ///
    /// Propagates the request failure after clearing the session.
    pub async fn logout(&self) -> Result<(), ApiError> {
        let result = self.request(Method::Post, "/v1/auth/logout", None, true).await;
        self.session().clear();
        result.map(|_| ())
    }

    /// Fetch the current user via `GET /v1/auth/me` and replace the stored
    /// profile wholesale.
    ///
    /// # Errors
    ///
    /// Propagates the request failure; the session is untouched on error.
    pub async fn me(&self) -> Result<UserProfile, ApiError> {
        let value = self.request(Method::Get, "/v1/auth/me", None, true).await?;
        let user: UserProfile = decode_required(value)?;
        self.session().set_user(Some(user.clone()));
        Ok(user)
    }
}
