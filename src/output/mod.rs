//
//  stash-client
//  output/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Output Formatting
//!
//! Renders lists of records either as pretty-printed JSON (for scripting) or
//! as a table of selected columns (for people).
//!
//! Columns are described by a dotted field path into each record, so the same
//! machinery renders projects (`key`, `name`), repositories (`slug`,
//! `link.url`), commits (`displayId`, `author.name`) and changes
//! (`path.toString`, `type`).

mod table;

pub use table::*;

use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::api::common::{record_field, Record};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

/// How a cell value is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    /// Strings as-is, other scalars via their JSON form.
    Text,
    /// Epoch milliseconds rendered as a UTC date and time.
    Timestamp,
}

/// One table column: a header and the record field it shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub header: &'static str,
    pub path: &'static str,
    pub kind: CellKind,
}

impl Column {
    pub const fn text(header: &'static str, path: &'static str) -> Self {
        Self {
            header,
            path,
            kind: CellKind::Text,
        }
    }

    pub const fn timestamp(header: &'static str, path: &'static str) -> Self {
        Self {
            header,
            path,
            kind: CellKind::Timestamp,
        }
    }

    /// Renders this column's cell for `record`; absent fields become `-`.
    pub fn render(&self, record: &Record) -> String {
        match record_field(record, self.path) {
            Ok(value) => render_value(value, self.kind),
            Err(_) => "-".to_string(),
        }
    }
}

fn render_value(value: &Value, kind: CellKind) -> String {
    match (kind, value) {
        (CellKind::Timestamp, Value::Number(n)) => n
            .as_i64()
            .and_then(DateTime::<Utc>::from_timestamp_millis)
            .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|| n.to_string()),
        (_, Value::Null) => "-".to_string(),
        (_, Value::String(s)) => s.clone(),
        (_, other) => other.to_string(),
    }
}

pub struct OutputWriter {
    format: OutputFormat,
    color: bool,
}

impl OutputWriter {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            color: console::colors_enabled(),
        }
    }

    /// Writes `records` to stdout in the configured format.
    pub fn write_records(&self, records: &[Record], columns: &[Column]) -> anyhow::Result<()> {
        match self.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(records)?);
            }
            OutputFormat::Table => {
                if records.is_empty() {
                    eprintln!("No results");
                    return Ok(());
                }
                println!("{}", render_table(records, columns, self.color));
            }
        }
        Ok(())
    }

    /// Writes a single record, as JSON or as `field: value` lines.
    pub fn write_record(&self, record: &Record, columns: &[Column]) -> anyhow::Result<()> {
        match self.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(record)?);
            }
            OutputFormat::Table => {
                for column in columns {
                    print_field(column.header, &column.render(record), self.color);
                }
            }
        }
        Ok(())
    }

    pub fn write_success(&self, msg: &str) {
        use console::style;
        if self.color {
            println!("{} {}", style("✓").green().bold(), msg);
        } else {
            println!("✓ {}", msg);
        }
    }
}

pub fn print_field(key: &str, value: &str, color: bool) {
    use console::style;
    if color {
        println!("{}: {}", style(key).dim(), value);
    } else {
        println!("{}: {}", key, value);
    }
}
