//! HTTP Basic Authentication check for the webhook endpoint.
//!
//! When a credential pair is configured, every request must carry an
//! `Authorization: Basic` header whose decoded credentials match exactly.
//! Absent, non-Basic, or undecodable headers are all rejected alike.

use axum::http::{HeaderMap, header};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};

/// A configured username/password pair for HTTP Basic Authentication.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BasicAuth {
    pub username: String,
    pub password: String,
}

impl BasicAuth {
    /// Creates a credential pair.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

/// Returns whether the request's Basic credentials match the expected pair.
pub(crate) fn authorized(headers: &HeaderMap, expected: &BasicAuth) -> bool {
    let Some(value) = headers.get(header::AUTHORIZATION) else {
        return false;
    };
    let Ok(value) = value.to_str() else {
        return false;
    };
    // Scheme name is case-insensitive per RFC 7617.
    let Some(encoded) = value
        .strip_prefix("Basic ")
        .or_else(|| value.strip_prefix("basic "))
    else {
        return false;
    };
    let Ok(decoded) = STANDARD.decode(encoded.trim()) else {
        return false;
    };
    let Ok(credentials) = String::from_utf8(decoded) else {
        return false;
    };
    let Some((username, password)) = credentials.split_once(':') else {
        return false;
    };
    username == expected.username && password == expected.password
}
