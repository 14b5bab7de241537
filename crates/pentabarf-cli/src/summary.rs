use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use pentabarf_cli::pipeline::{OutputTarget, RunOutcome};

pub fn print_summary(outcome: &RunOutcome) {
    println!("Input: {}", outcome.input.display());
    match &outcome.output {
        OutputTarget::File(path) => println!("Output: {}", path.display()),
        OutputTarget::Stdout => println!("Output: <stdout>"),
    }
    println!("{}", summary_table(outcome));
}

/// One row per day and room with its event count, plus a total row.
pub fn summary_table(outcome: &RunOutcome) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Day"),
        header_cell("Date"),
        header_cell("Room"),
        header_cell("Events"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);

    for day in outcome.schedule.days() {
        for room in &day.rooms {
            table.add_row(vec![
                Cell::new(&day.index)
                    .fg(Color::Blue)
                    .add_attribute(Attribute::Bold),
                Cell::new(&day.date),
                Cell::new(&room.name),
                count_cell(room.len()),
            ]);
        }
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        dim_cell(format!("{} days", outcome.schedule.days().len())),
        dim_cell(format!("{} records", outcome.records)),
        Cell::new(outcome.schedule.event_count()).add_attribute(Attribute::Bold),
    ]);
    table
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn count_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count).fg(Color::Green)
    } else {
        dim_cell(count)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
