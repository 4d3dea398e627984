//
//  stash-client
//  api/server/commits.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Stash Commit API
//!
//! ```text
//! GET /rest/api/1.0/projects/{projectKey}/repos/{repoSlug}/commits
//!     ?since={sha}&until={sha}&limit={n}&start={n}
//! ```
//!
//! ## Fetch Modes
//!
//! | Query | Behaviour |
//! |-------|-----------|
//! | nothing set | `limit=100`, every page fetched |
//! | `limit < 100` | one request, only that page's commits |
//! | anything else | every page fetched with the given parameters |
//!
//! A small explicit limit asks for the most recent commits only, so the
//! result may be shorter than the repository's history.

use crate::api::client::StashClient;
use crate::api::common::{Record, Result};
use crate::api::endpoint::set_query;
use crate::api::transport::Transport;

use super::repository_path;

/// Page size used when no query parameter is given, and the threshold below
/// which an explicit limit switches to a single fetch.
pub const DEFAULT_COMMIT_LIMIT: u32 = 100;

/// Optional filters for [`StashClient::commits_for`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommitsQuery {
    /// Exclude this commit and its ancestors.
    pub since: Option<String>,
    /// Start listing from this commit (or ref) instead of the default branch.
    pub until: Option<String>,
    /// Page size requested from the server.
    pub limit: Option<u32>,
}

impl CommitsQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn since(mut self, sha: impl Into<String>) -> Self {
        self.since = Some(sha.into());
        self
    }

    pub fn until(mut self, sha: impl Into<String>) -> Self {
        self.until = Some(sha.into());
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Query parameters to send, with the default limit applied when the
    /// query is empty.
    fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(since) = &self.since {
            params.push(("since", since.clone()));
        }
        if let Some(until) = &self.until {
            params.push(("until", until.clone()));
        }
        if let Some(limit) = self.limit {
            params.push(("limit", limit.to_string()));
        }

        if params.is_empty() {
            params.push(("limit", DEFAULT_COMMIT_LIMIT.to_string()));
        }
        params
    }

    fn is_bounded(&self) -> bool {
        matches!(self.limit, Some(limit) if limit < DEFAULT_COMMIT_LIMIT)
    }
}

impl<T: Transport> StashClient<T> {
    /// Lists commits of `repo`, most recent first.
    ///
    /// The commits path is derived from the repository's `link.url`. Only a
    /// `limit` below [`DEFAULT_COMMIT_LIMIT`] returns a single page; every
    /// other query is paginated to the end.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::MissingField`](crate::api::ApiError::MissingField)
    /// if `repo` has no `link.url`.
    pub fn commits_for(&self, repo: &Record, query: &CommitsQuery) -> Result<Vec<Record>> {
        let mut url = self.resolve(&repository_path(repo, "commits")?)?;
        set_query(&mut url, &query.params());

        if query.is_bounded() {
            Ok(self.fetch_page(&url)?.values)
        } else {
            self.fetch_all(url)
        }
    }
}
