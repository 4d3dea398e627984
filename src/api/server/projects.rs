//
//  stash-client
//  api/server/projects.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Stash Project API
//!
//! Projects are containers that group related repositories together.
//!
//! ## API Endpoints
//!
//! ```text
//! GET  /rest/api/1.0/projects          (paged)
//! POST /rest/api/1.0/projects
//! ```
//!
//! ## Example
//!
//! ```rust,no_run
//! use stash_client::api::{ClientOptions, CreateProjectRequest, StashClient};
//!
//! let client = StashClient::new(ClientOptions::new().host("git.example.com"))?;
//!
//! let created = client.create_project(&CreateProjectRequest::new("MYPROJ", "My Project"))?;
//! println!("Created project {}", created["key"]);
//!
//! if let Some(project) = client.project_named("My Project")? {
//!     println!("Found {}", project["link"]["url"]);
//! }
//! # Ok::<(), stash_client::api::ApiError>(())
//! ```

use serde::{Deserialize, Serialize};

use crate::api::client::StashClient;
use crate::api::common::{find_named, Record, Result};
use crate::api::transport::Transport;

const PROJECTS: &str = "projects";

/// Request body for creating a project.
///
/// Any `Serialize` value can be passed to
/// [`StashClient::create_project`]; this type covers the fields the server
/// accepts.
///
/// # Notes
///
/// - Project keys must be unique across the server
/// - `avatar` is a data URI (`data:image/png;base64,...`)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateProjectRequest {
    /// Short uppercase key used in URLs (e.g. "PRJ").
    pub key: String,

    /// Human-readable display name.
    pub name: String,

    /// Optional description of the project's purpose.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Optional avatar image as a data URI.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl CreateProjectRequest {
    pub fn new(key: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            description: None,
            avatar: None,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

impl<T: Transport> StashClient<T> {
    /// Lists every project visible to the client, across all pages.
    pub fn projects(&self) -> Result<Vec<Record>> {
        self.fetch_all(self.resolve(PROJECTS)?)
    }

    /// Creates a project and returns the server's representation of it.
    ///
    /// `opts` is sent as the JSON request body.
    pub fn create_project<B: Serialize + ?Sized>(&self, opts: &B) -> Result<Record> {
        self.post(&self.resolve(PROJECTS)?, opts)
    }

    /// Returns the first project whose `name` equals `name`.
    ///
    /// All projects are listed first; `None` means no project matched.
    pub fn project_named(&self, name: &str) -> Result<Option<Record>> {
        Ok(find_named(self.projects()?, name))
    }
}
