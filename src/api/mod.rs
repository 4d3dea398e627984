//
//  stash-client
//  api/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # API Client Layer
//!
//! This module provides the client for the Stash (Bitbucket Server) REST API
//! v1.0.
//!
//! ## Architecture
//!
//! - [`endpoint`]: Base endpoint resolution and URI/query composition
//! - [`transport`]: The HTTP exchange seam and its `reqwest` implementation
//! - [`client`]: [`StashClient`], request primitives and the pagination engine
//! - [`server`]: Resource operations (projects, repositories, commits, changes)
//! - [`common`]: Shared types (errors, records, paging envelope)
//!
//! ## Usage
//!
//! ```rust,no_run
//! use stash_client::api::{ClientOptions, CommitsQuery, StashClient};
//!
//! let client = StashClient::new(ClientOptions::new().url("https://git.example.com/rest/api/1.0/"))?;
//!
//! if let Some(repo) = client.repository_named("core")? {
//!     let recent = client.commits_for(&repo, &CommitsQuery::new().limit(10))?;
//!     println!("{} recent commits", recent.len());
//! }
//! # Ok::<(), stash_client::api::ApiError>(())
//! ```
//!
//! ## Error Handling
//!
//! Every operation returns [`ApiError`]:
//!
//! - `InvalidConfiguration`: no usable endpoint was given
//! - `MissingField`: a record lacks a field the operation needs
//! - `Network` / `Status`: the HTTP exchange failed
//! - `Decode`: the body was not the expected JSON

/// Core client with request primitives and pagination.
pub mod client;

/// Shared error, record and paging types.
pub mod common;

/// Base endpoint resolution and URI composition.
pub mod endpoint;

/// Stash REST API v1.0 resource operations.
pub mod server;

/// HTTP transport seam.
pub mod transport;

pub use client::StashClient;
pub use common::{ApiError, Page, PagedResponse, Record};
pub use endpoint::ClientOptions;
pub use server::{ChangesQuery, CommitsQuery, CreateProjectRequest};
pub use transport::{HttpTransport, Transport};
