//
//  stash-client
//  cli/repo.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use anyhow::{Context, Result};
use clap::{Args, Subcommand};

use crate::api::{ChangesQuery, CommitsQuery, Record, StashClient};
use crate::output::Column;

use super::GlobalOptions;

const REPO_COLUMNS: [Column; 4] = [
    Column::text("Project", "project.key"),
    Column::text("Slug", "slug"),
    Column::text("Name", "name"),
    Column::text("Link", "link.url"),
];

const COMMIT_COLUMNS: [Column; 4] = [
    Column::text("Commit", "displayId"),
    Column::text("Author", "author.name"),
    Column::timestamp("Date", "authorTimestamp"),
    Column::text("Message", "message"),
];

const CHANGE_COLUMNS: [Column; 2] = [
    Column::text("Type", "type"),
    Column::text("Path", "path.toString"),
];

#[derive(Args, Debug)]
pub struct RepoCommand {
    #[command(subcommand)]
    pub command: RepoSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum RepoSubcommand {
    /// List repositories across all projects
    #[command(visible_alias = "ls")]
    List,

    /// Show the first repository with the given name
    View(ViewArgs),

    /// List commits of a repository
    Commits(CommitsArgs),

    /// List files changed by a commit
    Changes(ChangesArgs),
}

#[derive(Args, Debug)]
pub struct ViewArgs {
    /// Repository name
    pub name: String,
}

#[derive(Args, Debug)]
pub struct CommitsArgs {
    /// Repository name
    pub repo: String,

    /// Exclude this commit and its ancestors
    #[arg(long)]
    pub since: Option<String>,

    /// List from this commit instead of the default branch
    #[arg(long)]
    pub until: Option<String>,

    /// Page size; below 100 only the most recent page is fetched
    #[arg(long, short = 'l')]
    pub limit: Option<u32>,
}

#[derive(Args, Debug)]
pub struct ChangesArgs {
    /// Repository name
    pub repo: String,

    /// Commit to inspect
    pub sha: String,

    /// Parent commit to compare against
    #[arg(long)]
    pub parent: Option<String>,

    /// Page size; when set only the first page is fetched
    #[arg(long, short = 'l')]
    pub limit: Option<u32>,
}

impl RepoCommand {
    pub fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            RepoSubcommand::List => self.list(global),
            RepoSubcommand::View(args) => self.view(args, global),
            RepoSubcommand::Commits(args) => self.commits(args, global),
            RepoSubcommand::Changes(args) => self.changes(args, global),
        }
    }

    fn list(&self, global: &GlobalOptions) -> Result<()> {
        let repos = global.client()?.repositories()?;
        global.writer().write_records(&repos, &REPO_COLUMNS)
    }

    fn view(&self, args: &ViewArgs, global: &GlobalOptions) -> Result<()> {
        let repo = find_repository(&global.client()?, &args.name)?;
        global.writer().write_record(&repo, &REPO_COLUMNS)
    }

    fn commits(&self, args: &CommitsArgs, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;
        let repo = find_repository(&client, &args.repo)?;

        let query = CommitsQuery {
            since: args.since.clone(),
            until: args.until.clone(),
            limit: args.limit,
        };
        let commits = client.commits_for(&repo, &query)?;

        global.writer().write_records(&commits, &COMMIT_COLUMNS)
    }

    fn changes(&self, args: &ChangesArgs, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;
        let repo = find_repository(&client, &args.repo)?;

        let query = ChangesQuery {
            parent: args.parent.clone(),
            limit: args.limit,
        };
        let changes = client.changes_for(&repo, &args.sha, &query)?;

        global.writer().write_records(&changes, &CHANGE_COLUMNS)
    }
}

fn find_repository(client: &StashClient, name: &str) -> Result<Record> {
    client
        .repository_named(name)?
        .with_context(|| format!("No repository named '{name}'"))
}
