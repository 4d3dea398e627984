//
//  stash-client
//  api/server/changes.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Stash Changes API
//!
//! Lists the files a commit touched, relative to a parent.
//!
//! ```text
//! GET /rest/api/1.0/projects/{projectKey}/repos/{repoSlug}/changes
//!     ?until={sha}&since={parent}&limit={n}&start={n}
//! ```
//!
//! Each change record carries `path.toString`, `type` (ADD, MODIFY,
//! DELETE, ...) and `contentId`.

use crate::api::client::StashClient;
use crate::api::common::{Record, Result};
use crate::api::endpoint::set_query;
use crate::api::transport::Transport;

use super::repository_path;

/// Optional parameters for [`StashClient::changes_for`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangesQuery {
    /// Commit to compare against; the server picks the first parent when unset.
    pub parent: Option<String>,
    /// Page size. When set, only the first page is returned.
    pub limit: Option<u32>,
}

impl ChangesQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn parent(mut self, sha: impl Into<String>) -> Self {
        self.parent = Some(sha.into());
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }
}

impl<T: Transport> StashClient<T> {
    /// Lists the changes introduced by commit `sha` in `repo`.
    ///
    /// `until` is always set to `sha` and `since` to the requested parent.
    /// With a `limit` a single page is fetched; otherwise every page is.
    pub fn changes_for(
        &self,
        repo: &Record,
        sha: &str,
        query: &ChangesQuery,
    ) -> Result<Vec<Record>> {
        let mut url = self.resolve(&repository_path(repo, "changes")?)?;

        let mut params = vec![("until", sha.to_string())];
        if let Some(parent) = &query.parent {
            params.push(("since", parent.clone()));
        }
        if let Some(limit) = query.limit {
            params.push(("limit", limit.to_string()));
        }
        set_query(&mut url, &params);

        if query.limit.is_some() {
            Ok(self.fetch_page(&url)?.values)
        } else {
            self.fetch_all(url)
        }
    }
}
