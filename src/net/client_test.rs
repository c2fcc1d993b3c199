use super::*;

use futures::executor::block_on;

use crate::net::testing::{client_with, empty_response, json_response, text_response};
use crate::net::types::UserProfile;

fn profile(id: i64, email: &str) -> UserProfile {
    UserProfile {
        id,
        email: email.to_owned(),
        created_at: None,
        updated_at: None,
    }
}

// =============================================================
// Header attachment
// =============================================================

#[test]
fn no_auth_header_when_auth_disabled() {
    let (client, fake) = client_with(vec![json_response(200, "{}")]);
    client.session().set_access_token(Some("tok1".to_owned()));

    block_on(client.request(Method::Post, "/v1/auth/sign-in", None, false)).unwrap();

    let requests = fake.requests.borrow();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].header("Authorization"), None);
}

#[test]
fn bearer_header_matches_session_token_exactly() {
    let (client, fake) = client_with(vec![json_response(200, "{}")]);
    client.session().set_access_token(Some("tok1".to_owned()));

    block_on(client.request(Method::Get, "/v1/auth/me", None, true)).unwrap();

    let requests = fake.requests.borrow();
    assert_eq!(requests[0].header("Authorization"), Some("Bearer tok1"));
}

#[test]
fn no_auth_header_when_session_has_no_token() {
    let (client, fake) = client_with(vec![json_response(200, "{}")]);

    block_on(client.request(Method::Get, "/v1/auth/me", None, true)).unwrap();

    let requests = fake.requests.borrow();
    assert_eq!(requests[0].header("Authorization"), None);
}

#[test]
fn json_content_type_is_always_sent() {
    let (client, fake) = client_with(vec![json_response(200, "{}")]);

    block_on(client.request(
        Method::Post,
        "/v1/checks",
        Some(serde_json::json!({"url": "https://example.com"})),
        true,
    ))
    .unwrap();

    let requests = fake.requests.borrow();
    assert_eq!(requests[0].header("Content-Type"), Some("application/json"));
    assert_eq!(
        requests[0].body.as_deref(),
        Some(r#"{"url":"https://example.com"}"#)
    );
}

#[test]
fn base_url_prefixes_the_path() {
    let (client, fake) =
        crate::net::testing::client_with_base("https://api.example.com", vec![json_response(200, "{}")]);

    block_on(client.request(Method::Get, "/v1/auth/me", None, false)).unwrap();

    assert_eq!(
        fake.requests.borrow()[0].url,
        "https://api.example.com/v1/auth/me"
    );
}

// =============================================================
// Retry-on-401 policy
// =============================================================

#[test]
fn retries_once_after_successful_refresh() {
    let (client, fake) = client_with(vec![
        empty_response(401),
        json_response(200, r#"{"accessToken":"tok2"}"#),
        json_response(200, r#"{"ok":true}"#),
    ]);
    client.session().set_access_token(Some("tok1".to_owned()));

    let value = block_on(client.request(Method::Get, "/v1/checks/5", None, true)).unwrap();

    assert_eq!(value, Some(serde_json::json!({"ok": true})));
    assert_eq!(
        fake.request_urls(),
        vec!["/v1/checks/5", "/v1/auth/refresh", "/v1/checks/5"]
    );
    let requests = fake.requests.borrow();
    assert_eq!(requests[1].header("Authorization"), None);
    assert_eq!(requests[2].header("Authorization"), Some("Bearer tok2"));
    assert_eq!(client.session().access_token().as_deref(), Some("tok2"));
}

#[test]
fn failed_refresh_clears_session_and_surfaces_original_401() {
    let (client, fake) = client_with(vec![empty_response(401), empty_response(500)]);
    client.session().set_access_token(Some("tok1".to_owned()));
    client.session().set_user(Some(profile(1, "a@b.com")));

    let error = block_on(client.request(Method::Get, "/v1/auth/me", None, true)).unwrap_err();

    assert_eq!(
        error,
        ApiError::Http {
            status: 401,
            message: "HTTP 401".to_owned(),
        }
    );
    assert_eq!(fake.request_urls(), vec!["/v1/auth/me", "/v1/auth/refresh"]);
    assert!(client.session().access_token().is_none());
    assert!(client.session().user().is_none());
}

#[test]
fn refresh_without_token_in_body_counts_as_failure() {
    let (client, _fake) = client_with(vec![
        empty_response(401),
        json_response(200, r#"{"accessToken":""}"#),
    ]);
    client.session().set_access_token(Some("tok1".to_owned()));

    let error = block_on(client.request(Method::Get, "/v1/auth/me", None, true)).unwrap_err();

    assert_eq!(error.status(), Some(401));
    assert!(client.session().access_token().is_none());
}

#[test]
fn retry_failure_is_final_and_session_keeps_new_token() {
    let (client, fake) = client_with(vec![
        empty_response(401),
        json_response(200, r#"{"accessToken":"tok2"}"#),
        empty_response(401),
    ]);
    client.session().set_access_token(Some("tok1".to_owned()));
    client.session().set_user(Some(profile(1, "a@b.com")));

    let error = block_on(client.request(Method::Get, "/v1/auth/me", None, true)).unwrap_err();

    assert_eq!(error.status(), Some(401));
    // Exactly one refresh; the retried 401 is not recovered again.
    assert_eq!(
        fake.request_urls(),
        vec!["/v1/auth/me", "/v1/auth/refresh", "/v1/auth/me"]
    );
    assert_eq!(client.session().access_token().as_deref(), Some("tok2"));
    assert!(client.session().user().is_some());
}

#[test]
fn refresh_accepts_snake_case_token_field() {
    let (client, _fake) = client_with(vec![
        empty_response(401),
        json_response(200, r#"{"access_token":"tok2"}"#),
        json_response(200, "{}"),
    ]);
    client.session().set_access_token(Some("tok1".to_owned()));

    block_on(client.request(Method::Get, "/v1/auth/me", None, true)).unwrap();

    assert_eq!(client.session().access_token().as_deref(), Some("tok2"));
}

#[test]
fn unauthenticated_call_is_never_refreshed() {
    let (client, fake) = client_with(vec![empty_response(401)]);

    let error =
        block_on(client.request(Method::Post, "/v1/auth/sign-in", None, false)).unwrap_err();

    assert_eq!(error.status(), Some(401));
    assert_eq!(fake.request_urls(), vec!["/v1/auth/sign-in"]);
}

// =============================================================
// Other failure paths
// =============================================================

#[test]
fn non_401_error_fails_without_refresh_or_store_mutation() {
    let (client, fake) = client_with(vec![text_response(500, "boom")]);
    client.session().set_access_token(Some("tok1".to_owned()));

    let error = block_on(client.request(Method::Get, "/v1/auth/me", None, true)).unwrap_err();

    assert_eq!(
        error,
        ApiError::Http {
            status: 500,
            message: "boom".to_owned(),
        }
    );
    assert_eq!(fake.requests.borrow().len(), 1);
    assert_eq!(client.session().access_token().as_deref(), Some("tok1"));
}

#[test]
fn transport_failure_surfaces_without_store_mutation() {
    let (client, fake) = client_with(vec![Err("connection refused".to_owned())]);
    client.session().set_access_token(Some("tok1".to_owned()));

    let error = block_on(client.request(Method::Get, "/v1/auth/me", None, true)).unwrap_err();

    assert_eq!(error, ApiError::Transport("connection refused".to_owned()));
    assert_eq!(fake.requests.borrow().len(), 1);
    assert_eq!(client.session().access_token().as_deref(), Some("tok1"));
}

// =============================================================
// Response decoding
// =============================================================

#[test]
fn empty_body_success_resolves_to_none() {
    let (client, _fake) = client_with(vec![empty_response(204)]);

    let value = block_on(client.request(Method::Delete, "/v1/checks/5", None, true)).unwrap();

    assert_eq!(value, None);
}

#[test]
fn body_without_json_content_type_is_ignored() {
    let (client, _fake) = client_with(vec![text_response(200, "ok")]);

    let value = block_on(client.request(Method::Get, "/v1/auth/me", None, true)).unwrap();

    assert_eq!(value, None);
}

#[test]
fn malformed_json_body_is_a_decode_error() {
    let (client, _fake) = client_with(vec![json_response(200, "{not json")]);

    let error = block_on(client.request(Method::Get, "/v1/auth/me", None, true)).unwrap_err();

    assert!(matches!(error, ApiError::Decode(_)));
}

#[test]
fn decode_required_rejects_empty_body() {
    let result: Result<UserProfile, ApiError> = decode_required(None);
    assert!(matches!(result, Err(ApiError::Decode(_))));
}

#[test]
fn decode_required_rejects_mismatched_shape() {
    let result: Result<UserProfile, ApiError> =
        decode_required(Some(serde_json::json!({"unexpected": true})));
    assert!(matches!(result, Err(ApiError::Decode(_))));
}

// =============================================================
// Method
// =============================================================

#[test]
fn method_as_str_matches_http_verbs() {
    assert_eq!(Method::Get.as_str(), "GET");
    assert_eq!(Method::Post.as_str(), "POST");
    assert_eq!(Method::Put.as_str(), "PUT");
    assert_eq!(Method::Delete.as_str(), "DELETE");
}
