use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};

use icm_cli::output::{FieldStatus, field_details, verdict};
use icm_standards::Registry;
use icm_validate::ValidationResult;

use crate::cli::ListTableArg;

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

pub fn print_validation(input: &str, result: &ValidationResult) {
    println!("{input}");
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Field"),
        header_cell("Value"),
        header_cell("Status"),
        header_cell("Details"),
    ]);
    apply_table_style(&mut table);
    for report in &result.fields {
        let value = if report.value.is_empty() {
            dim_cell("-")
        } else {
            Cell::new(&report.value)
        };
        table.add_row(vec![
            Cell::new(report.kind.label()),
            value,
            status_cell(FieldStatus::of(report)),
            Cell::new(field_details(report).join("\n")),
        ]);
    }
    println!("{table}");
    println!("{}", verdict(result));
    println!();
}

pub fn print_list(registry: &Registry, which: ListTableArg) {
    let mut table = Table::new();
    apply_table_style(&mut table);
    match which {
        ListTableArg::Owners => {
            table.set_header(headers(&["Code", "Company", "City", "Country"]));
            for owner in registry.owners() {
                table.add_row(vec![
                    code_cell(&owner.code),
                    Cell::new(&owner.company),
                    Cell::new(&owner.city),
                    Cell::new(&owner.country),
                ]);
            }
        }
        ListTableArg::Categories => {
            table.set_header(headers(&["Id", "Description"]));
            for (id, description) in registry.categories() {
                table.add_row(vec![code_cell(id), Cell::new(description)]);
            }
        }
        ListTableArg::Lengths => {
            table.set_header(headers(&["Code", "Length"]));
            for (code, description) in registry.lengths() {
                table.add_row(vec![code_cell(code), Cell::new(description)]);
            }
        }
        ListTableArg::HeightWidths => {
            table.set_header(headers(&["Code", "Height", "Width"]));
            for (code, hw) in registry.height_widths() {
                table.add_row(vec![
                    code_cell(code),
                    Cell::new(&hw.height),
                    Cell::new(&hw.width),
                ]);
            }
        }
        ListTableArg::Types => {
            table.set_header(headers(&["Code", "Type", "Group"]));
            for (code, group) in registry.types() {
                table.add_row(vec![
                    code_cell(code),
                    Cell::new(&group.type_description),
                    Cell::new(&group.group_description),
                ]);
            }
        }
    }
    println!("{table}");
}

fn headers(labels: &[&str]) -> Vec<Cell> {
    labels.iter().copied().map(header_cell).collect()
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn code_cell(code: &str) -> Cell {
    Cell::new(code).add_attribute(Attribute::Bold)
}

fn status_cell(status: FieldStatus) -> Cell {
    let color = match status {
        FieldStatus::Ok => Color::Green,
        FieldStatus::Warning => Color::Yellow,
        FieldStatus::Error => Color::Red,
    };
    Cell::new(status.label()).fg(color)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value.to_string()).add_attribute(Attribute::Dim)
}
