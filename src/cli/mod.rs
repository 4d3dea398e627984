//
//  stash-client
//  cli/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Command-Line Interface
//!
//! Defines the `stash` command tree with clap's derive API. Every command
//! resolves its endpoint through [`GlobalOptions::client`]: flags and
//! `STASH_*` environment variables first, then the configuration file.
//!
//! ```text
//! stash project list
//! stash project view "My Project"
//! stash project create --key PRJ --name "My Project"
//! stash repo list
//! stash repo view core
//! stash repo commits core --limit 10
//! stash repo changes core 3f2a9c1 --parent 1b7e0d4
//! stash config show
//! ```

mod config;
mod project;
mod repo;

pub use config::ConfigCommand;
pub use project::ProjectCommand;
pub use repo::RepoCommand;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};

use crate::api::StashClient;
use crate::config::Config;
use crate::output::{OutputFormat, OutputWriter};

#[derive(Parser, Debug)]
#[command(
    name = "stash",
    version,
    about = "Query a Stash / Bitbucket Server instance from the command line",
    propagate_version = true,
    after_help = "Use 'stash <command> --help' for more information about a command."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOptions,
}

/// Options shared by every command.
#[derive(Args, Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Full API root URL (e.g. https://git.example.com/rest/api/1.0/)
    #[arg(long, global = true, env = "STASH_URL")]
    pub url: Option<String>,

    /// Server host, optionally with a port
    #[arg(long, global = true, env = "STASH_HOST")]
    pub host: Option<String>,

    /// Scheme used with --host
    #[arg(long, global = true, env = "STASH_SCHEME")]
    pub scheme: Option<String>,

    /// Credentials embedded in the endpoint (user:password)
    #[arg(long, global = true, env = "STASH_CREDENTIALS", hide_env_values = true)]
    pub credentials: Option<String>,

    /// Configuration file to read instead of the default location
    #[arg(long, global = true, env = "STASH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Print raw JSON instead of a table
    #[arg(long, global = true)]
    pub json: bool,
}

impl GlobalOptions {
    pub fn config_path(&self) -> Result<PathBuf> {
        match &self.config {
            Some(path) => Ok(path.clone()),
            None => Config::config_path(),
        }
    }

    /// File configuration with command-line overrides applied.
    pub fn effective_config(&self) -> Result<Config> {
        let file = Config::load_from(&self.config_path()?)?;
        Ok(file.with_overrides(self.overrides()))
    }

    fn overrides(&self) -> Config {
        Config {
            host: self.host.clone(),
            scheme: self.scheme.clone(),
            url: self.url.clone(),
            credentials: self.credentials.clone(),
        }
    }

    pub fn client(&self) -> Result<StashClient> {
        let config = self.effective_config()?;
        StashClient::new(config.client_options())
            .context("Could not configure the Stash endpoint (use --url, --host or a config file)")
    }

    pub fn writer(&self) -> OutputWriter {
        OutputWriter::new(if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Table
        })
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List, view and create projects
    #[command(visible_alias = "proj")]
    Project(ProjectCommand),

    /// List and view repositories, their commits and changes
    #[command(visible_alias = "r")]
    Repo(RepoCommand),

    /// Show or update the configuration file
    Config(ConfigCommand),

    /// Print the version
    Version,
}
