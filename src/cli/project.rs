//
//  stash-client
//  cli/project.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use anyhow::{bail, Result};
use clap::{Args, Subcommand};

use crate::api::common::record_str;
use crate::api::CreateProjectRequest;
use crate::output::Column;

use super::GlobalOptions;

const PROJECT_COLUMNS: [Column; 4] = [
    Column::text("Key", "key"),
    Column::text("Name", "name"),
    Column::text("Description", "description"),
    Column::text("Link", "link.url"),
];

#[derive(Args, Debug)]
pub struct ProjectCommand {
    #[command(subcommand)]
    pub command: ProjectSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum ProjectSubcommand {
    /// List all projects
    #[command(visible_alias = "ls")]
    List,

    /// Show the first project with the given name
    View(ViewArgs),

    /// Create a project
    Create(CreateArgs),
}

#[derive(Args, Debug)]
pub struct ViewArgs {
    /// Project name (not key)
    pub name: String,
}

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Project key (e.g. PRJ)
    #[arg(long, short = 'k')]
    pub key: String,

    /// Project display name
    #[arg(long, short = 'n')]
    pub name: String,

    /// Project description
    #[arg(long, short = 'd')]
    pub description: Option<String>,
}

impl ProjectCommand {
    pub fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            ProjectSubcommand::List => self.list(global),
            ProjectSubcommand::View(args) => self.view(args, global),
            ProjectSubcommand::Create(args) => self.create(args, global),
        }
    }

    fn list(&self, global: &GlobalOptions) -> Result<()> {
        let projects = global.client()?.projects()?;
        global.writer().write_records(&projects, &PROJECT_COLUMNS)
    }

    fn view(&self, args: &ViewArgs, global: &GlobalOptions) -> Result<()> {
        match global.client()?.project_named(&args.name)? {
            Some(project) => global.writer().write_record(&project, &PROJECT_COLUMNS),
            None => bail!("No project named '{}'", args.name),
        }
    }

    fn create(&self, args: &CreateArgs, global: &GlobalOptions) -> Result<()> {
        let mut request = CreateProjectRequest::new(&args.key, &args.name);
        if let Some(description) = &args.description {
            request = request.description(description);
        }

        let project = global.client()?.create_project(&request)?;

        let writer = global.writer();
        if global.json {
            return writer.write_record(&project, &PROJECT_COLUMNS);
        }
        writer.write_success(&format!(
            "Created project {} ({})",
            record_str(&project, "name").unwrap_or(&args.name),
            record_str(&project, "key").unwrap_or(&args.key),
        ));
        Ok(())
    }
}
