//
//  stash-client
//  api/transport.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # HTTP Transport
//!
//! The client never talks to the network directly. It hands fully composed
//! URLs to a [`Transport`], which performs exactly one request/response
//! exchange and returns the response body as text.
//!
//! [`HttpTransport`] is the production implementation, built on
//! `reqwest`'s blocking client:
//!
//! - `Accept: application/json` on every request
//! - `Content-Type: application/json` on POST
//! - Credentials embedded in the URL are sent as HTTP Basic auth
//! - Non-success statuses become [`ApiError::Status`]
//! - Nothing is retried

use reqwest::blocking::{Client, Response};
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use tracing::{debug, trace};
use url::Url;

use super::common::{format_api_error, ApiError, Result};

const JSON: &str = "application/json";

/// Performs single HTTP exchanges on behalf of the client.
pub trait Transport {
    /// Issues a GET request and returns the response body.
    fn get(&self, url: &Url) -> Result<String>;

    /// Issues a POST request with a JSON `body` and returns the response body.
    fn post(&self, url: &Url, body: &str) -> Result<String>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn get(&self, url: &Url) -> Result<String> {
        (**self).get(url)
    }

    fn post(&self, url: &Url, body: &str) -> Result<String> {
        (**self).post(url, body)
    }
}

/// Blocking `reqwest` transport.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: Client,
}

impl HttpTransport {
    /// Creates a transport with a `stash/<version>` user agent.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Network`] if the TLS backend cannot be initialised.
    pub fn new() -> Result<Self> {
        Ok(Self {
            http: Client::builder()
                .user_agent(format!("stash/{}", crate::VERSION))
                .build()?,
        })
    }

    /// Wraps an already configured `reqwest` client, e.g. one with custom
    /// timeouts or proxies.
    pub fn with_client(http: Client) -> Self {
        Self { http }
    }
}

impl Transport for HttpTransport {
    fn get(&self, url: &Url) -> Result<String> {
        debug!("GET {}", redacted(url));
        let response = self.http.get(url.as_str()).header(ACCEPT, JSON).send()?;
        read_body(response)
    }

    fn post(&self, url: &Url, body: &str) -> Result<String> {
        debug!("POST {}", redacted(url));
        let response = self
            .http
            .post(url.as_str())
            .header(ACCEPT, JSON)
            .header(CONTENT_TYPE, JSON)
            .body(body.to_string())
            .send()?;
        read_body(response)
    }
}

fn read_body(response: Response) -> Result<String> {
    let status = response.status();

    if !status.is_success() {
        let text = response.text().unwrap_or_default();
        return Err(format_api_error(status, &text));
    }

    let text = response.text()?;
    trace!("{} ({} bytes)", status, text.len());
    Ok(text)
}

/// Renders a URL for logging with the password masked.
pub(crate) fn redacted(url: &Url) -> String {
    if url.password().is_none() {
        return url.to_string();
    }
    let mut masked = url.clone();
    // Only fails for cannot-be-a-base URLs, which never carry a password.
    let _ = masked.set_password(Some("***"));
    masked.to_string()
}


#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;

    fn url(server: &mockito::ServerGuard, path: &str) -> Url {
        Url::parse(&format!("{}{}", server.url(), path)).unwrap()
    }

    #[test]
    fn test_get_sends_json_accept_header() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/rest/api/1.0/projects")
            .match_query(Matcher::Any)
            .match_header("accept", JSON)
            .with_status(200)
            .with_header("content-type", JSON)
            .with_body(r#"{"values":[],"isLastPage":true}"#)
            .create();

        let transport = HttpTransport::new().unwrap();
        let body = transport.get(&url(&server, "/rest/api/1.0/projects")).unwrap();

        assert_eq!(body, r#"{"values":[],"isLastPage":true}"#);
        mock.assert();
    }

    #[test]
    fn test_post_sends_json_body() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("POST", "/rest/api/1.0/projects")
            .match_header("content-type", JSON)
            .match_header("accept", JSON)
            .match_body(Matcher::JsonString(r#"{"key":"PRJ","name":"Project"}"#.to_string()))
            .with_status(201)
            .with_body(r#"{"id":1,"key":"PRJ"}"#)
            .create();

        let transport = HttpTransport::new().unwrap();
        let body = transport
            .post(
                &url(&server, "/rest/api/1.0/projects"),
                r#"{"key":"PRJ","name":"Project"}"#,
            )
            .unwrap();

        assert_eq!(body, r#"{"id":1,"key":"PRJ"}"#);
        mock.assert();
    }

    #[test]
    fn test_embedded_credentials_become_basic_auth() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/rest/api/1.0/projects")
            .match_query(Matcher::Any)
            .match_header("authorization", "Basic dXNlcjpzZWNyZXQ=")
            .with_status(200)
            .with_body("{}")
            .create();

        let mut target = url(&server, "/rest/api/1.0/projects");
        target.set_username("user").unwrap();
        target.set_password(Some("secret")).unwrap();

        HttpTransport::new().unwrap().get(&target).unwrap();
        mock.assert();
    }

    #[test]
    fn test_error_status_is_reported() {
        let mut server = mockito::Server::new();
        server
            .mock("GET", "/rest/api/1.0/projects/NOPE")
            .match_query(Matcher::Any)
            .with_status(404)
            .with_body(r#"{"errors":[{"message":"Project NOPE does not exist."}]}"#)
            .create();

        let err = HttpTransport::new()
            .unwrap()
            .get(&url(&server, "/rest/api/1.0/projects/NOPE"))
            .unwrap_err();

        assert!(err.is_transport());
        match err {
            ApiError::Status { status, message } => {
                assert_eq!(status, 404);
                assert_eq!(message, "Project NOPE does not exist.");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_connection_failure_is_network_error() {
        // Port 9 (discard) on localhost is expected to refuse connections.
        let target = Url::parse("http://127.0.0.1:9/rest/api/1.0/projects").unwrap();
        let err = HttpTransport::new().unwrap().get(&target).unwrap_err();
        assert!(matches!(err, ApiError::Network(_)));
    }

    #[test]
    fn test_redacted_masks_password() {
        let target = Url::parse("http://user:secret@h/rest/api/1.0/").unwrap();
        assert_eq!(redacted(&target), "http://user:***@h/rest/api/1.0/");
    }
}
