//! Check CRUD endpoint wrappers.

#[cfg(test)]
#[path = "checks_test.rs"]
mod checks_test;

use super::client::{ApiClient, Method, decode_required};
use super::error::ApiError;
use super::types::{Check, CreateCheckResponse, ListChecksResponse};

fn user_checks_path(user_id: i64) -> String {
    format!("/v1/users/{user_id}/checks")
}

fn check_path(id: i64) -> String {
    format!("/v1/checks/{id}")
}

impl ApiClient {
    /// List a user's checks via `GET /v1/users/{id}/checks`.
    ///
    /// # Errors
    ///
    /// Propagates the request failure.
    pub async fn list_checks(&self, user_id: i64) -> Result<Vec<Check>, ApiError> {
        let value = self
            .request(Method::Get, &user_checks_path(user_id), None, true)
            .await?;
        let data: ListChecksResponse = decode_required(value)?;
        Ok(data.checks)
    }

    /// Fetch one check via `GET /v1/checks/{id}`.
    ///
    /// # Errors
    ///
    /// Propagates the request failure.
    pub async fn get_check(&self, id: i64) -> Result<Check, ApiError> {
        let value = self.request(Method::Get, &check_path(id), None, true).await?;
        decode_required(value)
    }

    /// Create a check via `POST /v1/checks`.
    ///
    /// # Errors
    ///
    /// Propagates the request failure.
    pub async fn create_check(
        &self,
        user_id: i64,
        url: &str,
        interval_sec: i64,
    ) -> Result<Check, ApiError> {
        let payload = serde_json::json!({
            "userId": user_id,
            "url": url,
            "intervalSec": interval_sec,
        });
        let value = self
            .request(Method::Post, "/v1/checks", Some(payload), true)
            .await?;
        let data: CreateCheckResponse = decode_required(value)?;
        Ok(data.check)
    }

    /// Update a check via `PUT /v1/checks/{id}`, sending the full entity.
    ///
    /// # Errors
    ///
    /// Propagates the request failure.
    pub async fn update_check(&self, check: &Check) -> Result<Check, ApiError> {
        let payload = serde_json::json!({ "check": check });
        let value = self
            .request(Method::Put, &check_path(check.id), Some(payload), true)
            .await?;
        decode_required(value)
    }

    /// Delete a check via `DELETE /v1/checks/{id}`. The server responds with
    /// an empty body.
    ///
    /// # Errors
    ///
    /// Propagates the request failure.
    pub async fn delete_check(&self, id: i64) -> Result<(), ApiError> {
        self.request(Method::Delete, &check_path(id), None, true)
            .await
            .map(|_| ())
    }
}
