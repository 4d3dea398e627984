//
//  stash-client
//  api/client.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Resource Client for the Stash REST API
//!
//! This module provides [`StashClient`], the single entry point of the
//! library. It owns the immutable base endpoint and a [`Transport`], and
//! offers the request primitives every resource operation is built on:
//!
//! - [`StashClient::fetch`] - one GET, body parsed as JSON
//! - [`StashClient::fetch_page`] - one GET, body parsed as a paging envelope
//! - [`StashClient::fetch_all`] - the pagination engine
//! - [`StashClient::post`] - one POST with a JSON body
//!
//! The resource operations themselves (`projects`, `repositories`,
//! `commits_for`, ...) live in [`crate::api::server`].
//!
//! ## Call Model
//!
//! Every call blocks until all of its HTTP round-trips complete. Pages are
//! fetched strictly one after another, since each request depends on the
//! previous page's cursor. The client holds no mutable state.

use serde::Serialize;
use serde_json::Value;
use tracing::debug;
use url::Url;

use super::common::{ApiError, Page, Record, Result};
use super::endpoint::{join_path, overlay_query, ClientOptions};
use super::transport::{HttpTransport, Transport};

/// Client for one Stash server.
///
/// # Creating a Client
///
/// ```rust,no_run
/// use stash_client::api::{ClientOptions, StashClient};
///
/// let client = StashClient::new(
///     ClientOptions::new()
///         .host("git.example.com")
///         .scheme("https")
///         .credentials("jdoe:secret"),
/// )?;
///
/// for project in client.projects()? {
///     println!("{}", project["name"]);
/// }
/// # Ok::<(), stash_client::api::ApiError>(())
/// ```
///
/// # Type Parameters
///
/// * `T` - The transport performing HTTP exchanges, [`HttpTransport`] unless
///   a custom one is supplied through [`StashClient::with_transport`]
#[derive(Debug, Clone)]
pub struct StashClient<T = HttpTransport> {
    /// Performs the actual HTTP exchanges
    transport: T,
    /// API root every resource path is resolved against, always ending in `/`
    base: Url,
}

impl StashClient<HttpTransport> {
    /// Creates a client using the default blocking HTTP transport.
    ///
    /// No request is made at construction time.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidConfiguration`] when `options` does not name
    /// an endpoint (see [`ClientOptions::resolve`]).
    pub fn new(options: ClientOptions) -> Result<Self> {
        let base = options.resolve()?;
        Ok(Self {
            transport: HttpTransport::new()?,
            base,
        })
    }
}

impl<T: Transport> StashClient<T> {
    /// Creates a client that sends its requests through `transport`.
    pub fn with_transport(options: ClientOptions, transport: T) -> Result<Self> {
        Ok(Self {
            transport,
            base: options.resolve()?,
        })
    }

    /// Returns the base endpoint, e.g. `http://h/rest/api/1.0/`.
    pub fn base_url(&self) -> &Url {
        &self.base
    }

    /// Returns the transport this client sends requests through.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Resolves a resource path against the base endpoint.
    ///
    /// A leading `/` is stripped first, so link paths taken from records
    /// (`/projects/PRJ`) stay below the API root.
    pub fn resolve(&self, path: &str) -> Result<Url> {
        join_path(&self.base, path)
    }

    /// Performs one GET and parses the body as JSON.
    ///
    /// # Errors
    ///
    /// Transport errors are propagated unchanged; an unparsable body yields
    /// [`ApiError::Decode`].
    pub fn fetch(&self, url: &Url) -> Result<Value> {
        let body = self.transport.get(url)?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Performs one GET and decodes the body as a paging envelope.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::MissingField`] when the body has no `values` key,
    /// in addition to the errors of [`fetch`](Self::fetch).
    pub fn fetch_page(&self, url: &Url) -> Result<Page> {
        let body = self.fetch(url)?;
        if body.get("values").is_none() {
            return Err(ApiError::MissingField("values".to_string()));
        }
        Ok(serde_json::from_value(body)?)
    }

    /// Fetches every page starting at `url` and concatenates their `values`.
    ///
    /// The first page is always fetched. After each page the `start` query
    /// parameter is overlaid with the page's next cursor (`nextPageStart`, or
    /// `start + size` when absent) while all other parameters are kept. The
    /// loop ends exactly when a page reports `isLastPage`.
    ///
    /// # Notes
    ///
    /// - There is no iteration cap: a server that never reports the last page
    ///   keeps the loop running
    /// - An error on any page discards the pages accumulated so far
    pub fn fetch_all(&self, mut url: Url) -> Result<Vec<Record>> {
        let mut records = Vec::new();

        loop {
            let page = self.fetch_page(&url)?;
            debug!(
                "page start={} size={} last={} next={:?}",
                page.start, page.size, page.is_last_page, page.next_page_start
            );

            let is_last = page.is_last_page;
            let next_start = page.next_start();
            records.extend(page.values);

            if is_last {
                break;
            }
            let next_start =
                next_start.ok_or_else(|| ApiError::MissingField("nextPageStart".to_string()))?;
            overlay_query(&mut url, "start", &next_start.to_string());
        }

        debug!("collected {} records", records.len());
        Ok(records)
    }

    /// Performs one POST with `body` serialized as JSON and parses the
    /// response as a record.
    pub fn post<B: Serialize + ?Sized>(&self, url: &Url, body: &B) -> Result<Record> {
        let payload = serde_json::to_string(body)?;
        let response = self.transport.post(url, &payload)?;
        Ok(serde_json::from_str(&response)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::endpoint::query_value;
    use crate::api::transport::testing::{page, ScriptedTransport};
    use serde_json::json;

    fn client(transport: &ScriptedTransport) -> StashClient<&ScriptedTransport> {
        StashClient::with_transport(ClientOptions::new().host("h"), transport).unwrap()
    }

    fn ids(records: &[Record]) -> Vec<i64> {
        records.iter().map(|r| r["id"].as_i64().unwrap()).collect()
    }

    #[test]
    fn test_new_requires_endpoint() {
        let err = StashClient::new(ClientOptions::new()).unwrap_err();
        assert!(matches!(err, ApiError::InvalidConfiguration(_)));
    }

    #[test]
    fn test_fetch_all_concatenates_pages_in_order() {
        let transport = ScriptedTransport::new([
            page(json!([{"id": 1}, {"id": 2}]), 0, false, None),
            page(json!([{"id": 3}]), 2, false, None),
            page(json!([{"id": 4}, {"id": 5}]), 3, true, None),
        ]);
        let client = client(&transport);

        let records = client.fetch_all(client.resolve("projects").unwrap()).unwrap();

        assert_eq!(ids(&records), vec![1, 2, 3, 4, 5]);
        assert_eq!(transport.requests().len(), 3);
    }

    #[test]
    fn test_fetch_all_single_last_page() {
        let transport = ScriptedTransport::new([page(json!([{"id": 7}]), 0, true, None)]);
        let client = client(&transport);

        let records = client.fetch_all(client.resolve("projects").unwrap()).unwrap();

        assert_eq!(ids(&records), vec![7]);
        let requests = transport.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].as_str(), "http://h/rest/api/1.0/projects");
    }

    #[test]
    fn test_fetch_all_advances_by_start_plus_size() {
        let transport = ScriptedTransport::new([
            page(json!([{"id": 1}, {"id": 2}, {"id": 3}]), 0, false, None),
            page(json!([{"id": 4}]), 3, true, None),
        ]);
        let client = client(&transport);

        client.fetch_all(client.resolve("projects").unwrap()).unwrap();

        let requests = transport.requests();
        assert_eq!(query_value(&requests[0], "start"), None);
        assert_eq!(query_value(&requests[1], "start").as_deref(), Some("3"));
    }

    #[test]
    fn test_fetch_all_prefers_next_page_start() {
        let transport = ScriptedTransport::new([
            page(json!([{"id": 1}]), 0, false, Some(25)),
            page(json!([{"id": 2}]), 25, false, Some(60)),
            page(json!([]), 60, true, None),
        ]);
        let client = client(&transport);

        client.fetch_all(client.resolve("projects").unwrap()).unwrap();

        let starts: Vec<_> = transport
            .requests()
            .iter()
            .map(|u| query_value(u, "start"))
            .collect();
        assert_eq!(
            starts,
            vec![None, Some("25".to_string()), Some("60".to_string())]
        );
    }

    #[test]
    fn test_fetch_all_keeps_existing_query_params() {
        let transport = ScriptedTransport::new([
            page(json!([{"id": 1}]), 0, false, None),
            page(json!([{"id": 2}]), 1, true, None),
        ]);
        let client = client(&transport);
        let url = Url::parse("http://h/rest/api/1.0/x?since=a&until=b&limit=100").unwrap();

        client.fetch_all(url).unwrap();

        let second = &transport.requests()[1];
        assert_eq!(query_value(second, "since").as_deref(), Some("a"));
        assert_eq!(query_value(second, "until").as_deref(), Some("b"));
        assert_eq!(query_value(second, "limit").as_deref(), Some("100"));
        assert_eq!(query_value(second, "start").as_deref(), Some("1"));
    }

    #[test]
    fn test_fetch_all_aborts_on_page_error() {
        let transport = ScriptedTransport::new([page(json!([{"id": 1}]), 0, false, None)]);
        transport.push_error(ApiError::Status {
            status: 500,
            message: "boom".to_string(),
        });
        let client = client(&transport);

        let err = client
            .fetch_all(client.resolve("projects").unwrap())
            .unwrap_err();

        assert_eq!(err.status(), Some(500));
        assert_eq!(transport.requests().len(), 2);
    }

    #[test]
    fn test_fetch_all_rejects_overflowing_cursor() {
        let transport = ScriptedTransport::new([
            r#"{"values":[{"id":1}],"start":18446744073709551615,"size":1,"isLastPage":false}"#,
        ]);
        let client = client(&transport);

        let err = client
            .fetch_all(client.resolve("projects").unwrap())
            .unwrap_err();

        assert!(matches!(err, ApiError::MissingField(field) if field == "nextPageStart"));
        assert_eq!(transport.requests().len(), 1);
    }

    #[test]
    fn test_fetch_page_requires_values() {
        let transport = ScriptedTransport::new([r#"{"isLastPage":true}"#]);
        let client = client(&transport);

        let err = client
            .fetch_page(&client.resolve("projects").unwrap())
            .unwrap_err();
        assert!(matches!(err, ApiError::MissingField(field) if field == "values"));
    }

    #[test]
    fn test_fetch_rejects_malformed_json() {
        let transport = ScriptedTransport::new(["<html>oops</html>"]);
        let client = client(&transport);

        let err = client.fetch(&client.resolve("projects").unwrap()).unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn test_post_serializes_body() {
        let transport = ScriptedTransport::new([r#"{"id":9,"key":"NEW"}"#]);
        let client = client(&transport);

        let created = client
            .post(&client.resolve("projects").unwrap(), &json!({"key": "NEW"}))
            .unwrap();

        assert_eq!(created["id"], 9);
        assert_eq!(transport.bodies(), vec![r#"{"key":"NEW"}"#.to_string()]);
    }
}
