//! Wire-protocol DTOs for the client/server boundary.
//!
//! DESIGN
//! ======
//! The canonical wire casing is camelCase (the gateway in front of the API
//! expects it). Decoding is deliberately tolerant: serde aliases accept
//! snake_case variants, and 64-bit ids arrive as either JSON numbers or
//! strings (grpc-gateway emits int64 values as strings). That normalization
//! stays confined to this module so the rest of the crate only ever handles
//! one shape.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// An authenticated user as returned by the auth endpoints.
///
/// Immutable on the client; replaced wholesale when the server sends a
/// fresh copy.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Unique user identifier.
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub id: i64,
    /// Sign-in email address.
    pub email: String,
    /// ISO 8601 creation timestamp, if the server sent one.
    #[serde(default, alias = "created_at", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    /// ISO 8601 last-update timestamp, if the server sent one.
    #[serde(default, alias = "updated_at", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// A periodic URL health check. Lifecycle is server-owned; the client holds
/// a transient per-page copy.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Check {
    /// Unique check identifier.
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub id: i64,
    /// Owning user.
    #[serde(alias = "user_id", deserialize_with = "deserialize_i64_from_number")]
    pub user_id: i64,
    /// Probed URL.
    pub url: String,
    /// Probe interval in seconds.
    #[serde(alias = "interval_sec", deserialize_with = "deserialize_i64_from_number")]
    pub interval_sec: i64,
    /// Outcome of the most recent probe; `None` before the first run.
    #[serde(default, alias = "last_status", skip_serializing_if = "Option::is_none")]
    pub last_status: Option<bool>,
    /// ISO 8601 timestamp of the next scheduled probe.
    #[serde(default, alias = "next_run", skip_serializing_if = "Option::is_none")]
    pub next_run: Option<String>,
    /// ISO 8601 timestamp of the last server-side update.
    #[serde(default, alias = "updated_at", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// Response of `POST /v1/auth/sign-in` and `POST /v1/auth/sign-up`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    #[serde(alias = "access_token")]
    pub access_token: String,
    pub user: UserProfile,
}

/// Response of `POST /v1/auth/refresh`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessTokenResponse {
    #[serde(alias = "access_token")]
    pub access_token: String,
}

/// Response of `GET /v1/users/{id}/checks`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ListChecksResponse {
    #[serde(default)]
    pub checks: Vec<Check>,
}

/// Response of `POST /v1/checks`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct CreateCheckResponse {
    pub check: Check,
}

fn deserialize_i64_from_number<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                return Ok(int);
            }
            #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
            if let Some(float) = number.as_f64()
                && float.is_finite()
                && float.fract() == 0.0
                && float >= i64::MIN as f64
                && float <= i64::MAX as f64
            {
                return Ok(float as i64);
            }
            Err(D::Error::custom("expected integer-compatible number"))
        }
        serde_json::Value::String(text) => text
            .parse::<i64>()
            .map_err(|_| D::Error::custom(format!("expected integer, got {text:?}"))),
        _ => Err(D::Error::custom("expected number or numeric string")),
    }
}
