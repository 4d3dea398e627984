//
//  stash-client
//  output/table.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use comfy_table::{presets::UTF8_FULL, Cell, Color, ContentArrangement, Table};

use super::Column;
use crate::api::common::Record;

pub fn create_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Builds a table with one row per record and one cell per column.
pub fn render_table(records: &[Record], columns: &[Column], color: bool) -> Table {
    let mut table = create_table();

    let headers: Vec<Cell> = columns
        .iter()
        .map(|c| {
            let cell = Cell::new(c.header);
            if color {
                cell.fg(Color::Cyan)
            } else {
                cell
            }
        })
        .collect();
    table.set_header(headers);

    for record in records {
        table.add_row(columns.iter().map(|c| c.render(record)));
    }

    table
}
