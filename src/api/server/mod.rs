//
//  stash-client
//  api/server/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Stash REST API v1.0 Resources
//!
//! Resource operations, implemented as methods on
//! [`StashClient`](crate::api::StashClient). Each one composes a target URI
//! from the base endpoint plus a resource path, then performs either a single
//! fetch or a full paginated fetch.
//!
//! ## Module Organization
//!
//! - [`projects`] - List, create and look up projects
//! - [`repositories`] - List repositories across all projects, look up by name
//! - [`commits`] - Commit history of a repository
//! - [`changes`] - Files touched by a commit
//!
//! ## Resource Paths
//!
//! Repository-scoped paths are derived from the repository record itself:
//! its `link.url` (`/projects/PRJ/repos/core/browse`) with `browse` replaced
//! by the resource name:
//!
//! ```text
//! /projects/PRJ/repos/core/browse   ->  projects/PRJ/repos/core/commits
//!                                   ->  projects/PRJ/repos/core/changes
//! ```

pub mod changes;
pub mod commits;
pub mod projects;
pub mod repositories;

pub use changes::ChangesQuery;
pub use commits::{CommitsQuery, DEFAULT_COMMIT_LIMIT};
pub use projects::CreateProjectRequest;

use super::common::{record_str, Record, Result};

/// Derives a repository-scoped resource path from the repository's
/// `link.url`, replacing the first `browse` segment with `resource`.
pub(crate) fn repository_path(repo: &Record, resource: &str) -> Result<String> {
    Ok(record_str(repo, "link.url")?.replacen("browse", resource, 1))
}
