//
//  stash-client
//  config/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Configuration Module
//!
//! Loads the endpoint the `stash` binary talks to from a TOML file stored in
//! a platform-specific directory. Command-line flags and `STASH_*`
//! environment variables are layered on top with [`Config::with_overrides`].
//!
//! ## Configuration File Location
//!
//! - **Linux**: `~/.config/stash/config.toml`
//! - **macOS**: `~/Library/Application Support/stash/config.toml`
//! - **Windows**: `C:\Users\<User>\AppData\Roaming\stash\config\config.toml`
//!
//! ## Example Configuration File
//!
//! ```toml
//! host = "git.example.com"
//! scheme = "https"
//! credentials = "jdoe:secret"
//! ```
//!
//! or, for servers mounted below a context path:
//!
//! ```toml
//! url = "https://example.com/stash/rest/api/1.0/"
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::api::ClientOptions;

/// Endpoint settings for the `stash` binary.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    /// Server host, optionally with a port.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,

    /// Scheme used with `host`; `http` when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheme: Option<String>,

    /// Full API root URL, used when `host` is unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// User-info embedded in the endpoint (`user:password`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credentials: Option<String>,
}

impl Config {
    /// Returns the default configuration file path.
    pub fn config_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("", "", crate::APP_NAME)
            .context("Could not determine configuration directory")?;
        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Loads configuration from `path`, or the default when it does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("No config file at {}", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("Failed to parse {}", path.display()))
    }

    /// Writes configuration to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, toml::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Layers `overrides` on top of this configuration.
    ///
    /// Naming an endpoint (`url` or `host`) in the overrides replaces the
    /// whole endpoint, so a `--url` flag is never shadowed by a `host` from
    /// the file. Credentials and scheme override individually.
    pub fn with_overrides(self, overrides: Config) -> Config {
        let (host, url, scheme) = if overrides.host.is_some() || overrides.url.is_some() {
            (overrides.host, overrides.url, overrides.scheme)
        } else {
            (self.host, self.url, overrides.scheme.or(self.scheme))
        };

        Config {
            host,
            scheme,
            url,
            credentials: overrides.credentials.or(self.credentials),
        }
    }

    /// Converts the settings into client options.
    pub fn client_options(&self) -> ClientOptions {
        let mut options = ClientOptions::new();
        if let Some(host) = &self.host {
            options = options.host(host);
        }
        if let Some(scheme) = &self.scheme {
            options = options.scheme(scheme);
        }
        if let Some(url) = &self.url {
            options = options.url(url);
        }
        if let Some(credentials) = &self.credentials {
            options = options.credentials(credentials);
        }
        options
    }
}
