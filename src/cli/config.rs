//
//  stash-client
//  cli/config.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use anyhow::Result;
use clap::{Args, Subcommand};

use crate::api::transport::redacted;
use crate::config::Config;
use crate::output::print_field;

use super::GlobalOptions;

#[derive(Args, Debug)]
pub struct ConfigCommand {
    #[command(subcommand)]
    pub command: ConfigSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum ConfigSubcommand {
    /// Show the effective endpoint configuration
    Show,

    /// Write endpoint settings to the configuration file
    Set(SetArgs),
}

#[derive(Args, Debug)]
pub struct SetArgs {
    /// Server host, optionally with a port
    #[arg(id = "set_host", long = "set-host")]
    pub host: Option<String>,

    /// Scheme used with the host
    #[arg(id = "set_scheme", long = "set-scheme")]
    pub scheme: Option<String>,

    /// Full API root URL
    #[arg(id = "set_url", long = "set-url")]
    pub url: Option<String>,

    /// Credentials (user:password)
    #[arg(id = "set_credentials", long = "set-credentials")]
    pub credentials: Option<String>,
}

impl ConfigCommand {
    pub fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            ConfigSubcommand::Show => self.show(global),
            ConfigSubcommand::Set(args) => self.set(args, global),
        }
    }

    fn show(&self, global: &GlobalOptions) -> Result<()> {
        let config = global.effective_config()?;
        let color = console::colors_enabled();
        let unset = || "-".to_string();

        print_field("file", &global.config_path()?.display().to_string(), color);
        print_field("host", &config.host.clone().unwrap_or_else(unset), color);
        print_field("scheme", &config.scheme.clone().unwrap_or_else(unset), color);
        print_field("url", &config.url.clone().unwrap_or_else(unset), color);
        print_field(
            "credentials",
            &config
                .credentials
                .as_deref()
                .map(mask_credentials)
                .unwrap_or_else(unset),
            color,
        );

        match config.client_options().resolve() {
            Ok(base) => print_field("endpoint", &redacted(&base), color),
            Err(e) => print_field("endpoint", &e.to_string(), color),
        }
        Ok(())
    }

    fn set(&self, args: &SetArgs, global: &GlobalOptions) -> Result<()> {
        let path = global.config_path()?;
        let updated = Config::load_from(&path)?.with_overrides(Config {
            host: args.host.clone(),
            scheme: args.scheme.clone(),
            url: args.url.clone(),
            credentials: args.credentials.clone(),
        });

        updated.save_to(&path)?;
        println!("Saved {}", path.display());
        Ok(())
    }
}

/// Hides the password part of a `user:password` string.
fn mask_credentials(credentials: &str) -> String {
    match credentials.split_once(':') {
        Some((user, _)) => format!("{user}:***"),
        None => credentials.to_string(),
    }
}
