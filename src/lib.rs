//
//  stash-client
//  lib.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Stash Client Library
//!
//! A blocking client for the Stash / Bitbucket Server REST API v1.0, plus the
//! building blocks of the `stash` command-line tool.
//!
//! ## Overview
//!
//! The client turns the server's page-oriented listings into plain in-memory
//! collections. It resolves resource paths against a base endpoint, issues
//! JSON GET/POST requests, and follows the `start`/`nextPageStart` cursors
//! until the server reports the last page.
//!
//! ## Module Structure
//!
//! - [`api`]: The client, its transport and the resource operations
//! - [`config`]: Configuration file management for the binary
//! - [`cli`]: Command-line interface definitions using clap
//! - [`output`]: Table and JSON rendering of records
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use stash_client::api::{ChangesQuery, ClientOptions, StashClient};
//!
//! let client = StashClient::new(
//!     ClientOptions::new()
//!         .host("git.example.com")
//!         .scheme("https")
//!         .credentials("jdoe:secret"),
//! )?;
//!
//! for repo in client.repositories()? {
//!     println!("{}", repo["name"]);
//! }
//!
//! if let Some(repo) = client.repository_named("core")? {
//!     let changes = client.changes_for(&repo, "3f2a9c1", &ChangesQuery::new())?;
//!     println!("{} files changed", changes.len());
//! }
//! # Ok::<(), stash_client::api::ApiError>(())
//! ```

/// Stash REST API client.
///
/// Handles endpoint resolution, request dispatch, pagination and the
/// project, repository, commit and change resources.
pub mod api;

/// Command-line interface definitions.
pub mod cli;

/// Configuration file management.
///
/// Stores the endpoint and credentials used by the binary in a platform-specific
/// location (`~/.config/stash/config.toml` on Linux).
pub mod config;

/// Output formatting for tables and JSON.
pub mod output;

pub use api::{ApiError, ClientOptions, Record, StashClient};
pub use cli::Cli;
pub use config::Config;

/// Application name constant.
pub const APP_NAME: &str = "stash";

/// Application version constant, derived from Cargo.toml at compile time.
///
/// ```rust
/// use stash_client::VERSION;
///
/// println!("stash version {}", VERSION);
/// ```
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Exit codes for the CLI.
///
/// - `0`: Success
/// - `1-3`: General errors and usage issues
/// - `4-7`: Authentication-related issues
/// - `8-15`: Resource-related issues
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;

    /// General error. Check stderr for details.
    pub const ERROR: i32 = 1;

    /// Invalid usage, arguments or endpoint configuration.
    pub const USAGE: i32 = 2;

    /// The server rejected the credentials.
    pub const AUTH_ERROR: i32 = 4;

    /// The requested resource does not exist.
    pub const NOT_FOUND: i32 = 8;
}
