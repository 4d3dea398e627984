//
//  stash-client
//  api/common/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Common API Types for the Stash REST API
//!
//! This module provides the types shared by every resource operation: the
//! error taxonomy, the generic [`Record`] representation of a server entity,
//! and accessor helpers for reading nested record fields.
//!
//! # Overview
//!
//! - [`ApiError`] - Unified error type for all client operations
//! - [`Record`] - One parsed JSON object returned by the server
//! - [`record_field`] / [`record_str`] - Dotted-path lookups that fail with
//!   [`ApiError::MissingField`] instead of silently defaulting
//! - Pagination types ([`PagedResponse`], [`Page`])
//!
//! # Example
//!
//! ```rust
//! use serde_json::json;
//! use stash_client::api::common::{record_str, ApiError, Record};
//!
//! let repo: Record = serde_json::from_value(json!({
//!     "name": "core",
//!     "link": { "url": "/projects/PRJ/repos/core/browse" }
//! }))
//! .unwrap();
//!
//! assert_eq!(record_str(&repo, "link.url").unwrap(), "/projects/PRJ/repos/core/browse");
//! assert!(matches!(record_str(&repo, "link.rel"), Err(ApiError::MissingField(_))));
//! ```

use reqwest::StatusCode;
use serde_json::{Map, Value};
use thiserror::Error;

mod pagination;

pub use pagination::*;

/// One parsed JSON object returned by the server.
///
/// Records carry no fixed schema: a project exposes `key`, `name` and
/// `link.url`, a commit exposes `id`, `displayId`, `author.name` and so on.
/// Callers read fields through [`record_field`] and [`record_str`].
pub type Record = Map<String, Value>;

/// Shorthand result type for client operations.
pub type Result<T> = std::result::Result<T, ApiError>;

/// Unified error type for all Stash client operations.
///
/// # Variants
///
/// | Variant | Description |
/// |---------|-------------|
/// | `InvalidConfiguration` | Missing or malformed constructor arguments |
/// | `MissingField` | An expected (possibly nested) key is absent from a record |
/// | `Network` | Connection, TLS or protocol failure in the HTTP transport |
/// | `Status` | The server answered with a non-success HTTP status |
/// | `Decode` | The response body is not valid JSON of the expected shape |
///
/// `Network` and `Status` together form the transport error class; see
/// [`ApiError::is_transport`].
///
/// # Notes
///
/// - No variant is ever recovered from inside the client
/// - A failure on any page aborts the whole paginated operation
#[derive(Error, Debug)]
pub enum ApiError {
    /// The client was constructed without a usable endpoint.
    ///
    /// # Parameters
    ///
    /// - `0` - Description of what was wrong with the configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A record lacked a field the operation depends on.
    ///
    /// # Parameters
    ///
    /// - `0` - Dotted path of the missing field (e.g. `link.url`)
    #[error("Missing field: {0}")]
    MissingField(String),

    /// A network-level error occurred during the request.
    ///
    /// This covers connection failures, timeouts, DNS resolution errors,
    /// and other transport-layer issues.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The server returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Status {
        /// Numeric HTTP status code
        status: u16,
        /// Message extracted from the server's error envelope, or the raw body
        message: String,
    },

    /// The response body could not be decoded.
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    /// Returns `true` for errors raised by the HTTP transport, either a
    /// connection failure or a non-success status.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Network(_) | Self::Status { .. })
    }

    /// Returns the HTTP status code if this is a [`ApiError::Status`] error.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Parses a Stash error response and extracts a user-friendly message.
///
/// Stash returns errors in the format:
/// ```json
/// {"errors": [{"message": "Human readable message"}]}
/// ```
///
/// Some proxies in front of the server answer with a bare
/// `{"message": "..."}` instead. If neither shape matches, the raw body is
/// kept as the message.
///
/// # Parameters
///
/// * `status` - The HTTP status code
/// * `body` - The raw error response body
pub fn format_api_error(status: StatusCode, body: &str) -> ApiError {
    let message = serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|json| {
            json.get("errors")
                .and_then(|e| e.as_array())
                .and_then(|arr| arr.first())
                .and_then(|e| e.get("message"))
                .or_else(|| json.get("message"))
                .and_then(|m| m.as_str())
                .map(str::to_string)
        })
        .unwrap_or_else(|| body.trim().to_string());

    ApiError::Status {
        status: status.as_u16(),
        message,
    }
}

/// Looks up a field by dotted path (`"link.url"`) inside a record.
///
/// # Errors
///
/// Returns [`ApiError::MissingField`] carrying the full path when any
/// segment is absent or an intermediate value is not an object.
pub fn record_field<'a>(record: &'a Record, path: &str) -> Result<&'a Value> {
    let missing = || ApiError::MissingField(path.to_string());
    let mut segments = path.split('.');

    let first = segments.next().ok_or_else(missing)?;
    let mut current = record.get(first).ok_or_else(missing)?;
    for segment in segments {
        current = current.get(segment).ok_or_else(missing)?;
    }

    Ok(current)
}

/// Like [`record_field`], but additionally requires the value to be a string.
pub fn record_str<'a>(record: &'a Record, path: &str) -> Result<&'a str> {
    record_field(record, path)?
        .as_str()
        .ok_or_else(|| ApiError::MissingField(format!("{path} (expected a string)")))
}

/// Returns the first record whose `name` field equals `name`.
///
/// Records without a `name` never match.
pub fn find_named(records: Vec<Record>, name: &str) -> Option<Record> {
    records
        .into_iter()
        .find(|record| record.get("name").and_then(Value::as_str) == Some(name))
}
