pub mod config;
pub mod count;
pub mod duplicates;
mod input;

use comfy_table::{Cell, CellAlignment, Table};
use tally_models::ItemCount;

/// Item / count / first-seen table used by both counting commands
fn count_table(entries: &[ItemCount]) -> Table {
    let mut table = Table::new();
    table.load_preset(comfy_table::presets::UTF8_FULL);
    table.apply_modifier(comfy_table::modifiers::UTF8_ROUND_CORNERS);
    table.set_header(vec![
        Cell::new("Item").add_attribute(comfy_table::Attribute::Bold),
        Cell::new("Count").add_attribute(comfy_table::Attribute::Bold),
        Cell::new("First Seen").add_attribute(comfy_table::Attribute::Bold),
    ]);

    for entry in entries {
        table.add_row(vec![
            Cell::new(&entry.item),
            Cell::new(entry.count).set_alignment(CellAlignment::Right),
            Cell::new(entry.first_index).set_alignment(CellAlignment::Right),
        ]);
    }

    table
}
