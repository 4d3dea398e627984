//
//  stash-client
//  api/common/pagination.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Pagination Types for Stash API Responses
//!
//! Every listing endpoint of the Stash REST API wraps its results in the same
//! offset-based paging envelope:
//!
//! ```json
//! {
//!     "values": [ ... ],
//!     "size": 25,
//!     "limit": 25,
//!     "isLastPage": false,
//!     "start": 0,
//!     "nextPageStart": 25
//! }
//! ```
//!
//! - Request pages using the `start` query parameter (0-indexed)
//! - Keep fetching until `isLastPage` is `true`
//! - `nextPageStart` is authoritative; when it is absent the next page starts
//!   at `start + size`
//!
//! The aggregation loop itself lives on the client
//! (see [`StashClient`](crate::api::StashClient)); this module only models a
//! single page.

use serde::{Deserialize, Serialize};

use super::Record;

/// One page of a Stash listing.
///
/// # Type Parameters
///
/// - `T` - The type of items contained in the `values` array
///
/// # Example
///
/// ```rust
/// use stash_client::api::common::PagedResponse;
///
/// let json = r#"{
///     "values": [{"key": "PROJ", "name": "My Project"}],
///     "size": 1,
///     "limit": 25,
///     "isLastPage": false,
///     "start": 0
/// }"#;
///
/// let page: PagedResponse<serde_json::Value> = serde_json::from_str(json).unwrap();
///
/// assert!(page.has_next());
/// assert_eq!(page.next_start(), Some(1));
/// ```
///
/// # Notes
///
/// - `values` is required; every other field defaults when absent
/// - When `is_last_page` is `true`, `next_page_start` is usually `None`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PagedResponse<T> {
    /// Array of items in the current page.
    pub values: Vec<T>,

    /// Number of items in the current page.
    #[serde(default)]
    pub size: u64,

    /// Maximum items per page, as applied by the server.
    #[serde(default)]
    pub limit: u64,

    /// Indicates whether this is the last page of results.
    #[serde(default, rename = "isLastPage")]
    pub is_last_page: bool,

    /// Start index the server suggests for the next page.
    #[serde(default, rename = "nextPageStart", skip_serializing_if = "Option::is_none")]
    pub next_page_start: Option<u64>,

    /// Start index of the current page (0-indexed).
    #[serde(default)]
    pub start: u64,
}

/// A page of generic records, as consumed by the pagination engine.
pub type Page = PagedResponse<Record>;

impl<T> PagedResponse<T> {
    /// Checks if there are more pages of results available.
    ///
    /// This is the inverse of `is_last_page`.
    pub fn has_next(&self) -> bool {
        !self.is_last_page
    }

    /// Returns the `start` value for the request that follows this page.
    ///
    /// Uses `nextPageStart` when the server provided it, otherwise
    /// `start + size`. Returns `None` when that sum overflows.
    pub fn next_start(&self) -> Option<u64> {
        self.next_page_start
            .or_else(|| self.start.checked_add(self.size))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_start_prefers_next_page_start() {
        let page: Page = serde_json::from_str(
            r#"{"values":[],"start":0,"size":25,"isLastPage":false,"nextPageStart":40}"#,
        )
        .unwrap();
        assert_eq!(page.next_start(), Some(40));
    }

    #[test]
    fn test_next_start_falls_back_to_start_plus_size() {
        let page: Page =
            serde_json::from_str(r#"{"values":[],"start":50,"size":25,"isLastPage":false}"#)
                .unwrap();
        assert_eq!(page.next_start(), Some(75));
        assert!(page.has_next());
    }

    #[test]
    fn test_next_start_overflow_is_none() {
        let page: Page = serde_json::from_str(
            r#"{"values":[],"start":18446744073709551615,"size":1,"isLastPage":false}"#,
        )
        .unwrap();
        assert_eq!(page.next_start(), None);
    }

    #[test]
    fn test_missing_flags_default() {
        let page: Page = serde_json::from_str(r#"{"values":[{"id":1}]}"#).unwrap();
        assert!(!page.is_last_page);
        assert_eq!(page.start, 0);
        assert_eq!(page.values.len(), 1);
    }

    #[test]
    fn test_values_are_required() {
        assert!(serde_json::from_str::<Page>(r#"{"isLastPage":true}"#).is_err());
    }
}
