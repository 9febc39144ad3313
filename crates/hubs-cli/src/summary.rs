use std::path::Path;

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use hubs_core::{CommitDecision, HubsSession, RejectReason, field_step_count, format_fixed};
use hubs_model::{CalculatorConfig, InputField};

use crate::types::EntryOutcome;

pub fn print_summary(session: &HubsSession, state_path: &Path) {
    println!("State: {}", state_path.display());
    println!("{}", values_table(session));
    println!("{}", hub_depth_line(session));
    if session.hub_depth() < 0.0 {
        eprintln!("warning: the crown rise exceeds the lift for these inputs");
    }
}

pub fn print_entry_outcomes(outcomes: &[EntryOutcome]) {
    if outcomes.is_empty() {
        return;
    }
    println!("{}", entry_table(outcomes));
}

pub fn hub_depth_line(session: &HubsSession) -> String {
    format!(
        "Hub Depth: {} Inches ({})",
        session.hub_depth_text(),
        format_fixed(session.hub_depth(), 2)
    )
}

pub fn values_table(session: &HubsSession) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Field"),
        header_cell("Value"),
        header_cell("Unit"),
        header_cell("Range"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for field in InputField::ALL {
        let spec = session.config().spec(field);
        let value = session.value(field);
        let value_cell = if spec.contains(value) {
            Cell::new(session.value_text(field))
        } else {
            Cell::new(session.value_text(field)).fg(Color::Yellow)
        };
        table.add_row(vec![
            field_cell(field),
            value_cell,
            Cell::new(field.unit()),
            dim_cell(range_text(spec.min, spec.max)),
        ]);
    }
    table
}

pub fn ranges_table(config: &CalculatorConfig) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Field"),
        header_cell("Slot"),
        header_cell("Range"),
        header_cell("Step"),
        header_cell("Stops"),
        header_cell("Default"),
        header_cell("Positive"),
    ]);
    apply_table_style(&mut table);
    for column in 3..=5 {
        align_column(&mut table, column, CellAlignment::Right);
    }
    align_column(&mut table, 6, CellAlignment::Center);
    for field in InputField::ALL {
        let spec = config.spec(field);
        table.add_row(vec![
            field_cell(field),
            dim_cell(field.key()),
            Cell::new(range_text(spec.min, spec.max)),
            Cell::new(format_fixed(spec.step, 1)),
            Cell::new(field_step_count(spec)),
            Cell::new(format_fixed(spec.default, 1)),
            if spec.must_be_positive {
                Cell::new("✓").fg(Color::Green)
            } else {
                dim_cell("-")
            },
        ]);
    }
    table
}

pub fn entry_table(outcomes: &[EntryOutcome]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Text"),
        header_cell("Decision"),
        header_cell("Value"),
        header_cell("Hub Depth"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);
    for (index, outcome) in outcomes.iter().enumerate() {
        table.add_row(vec![
            dim_cell(index + 1),
            Cell::new(format!("{:?}", outcome.text)),
            decision_cell(outcome.decision),
            Cell::new(format_fixed(outcome.value, 2)),
            Cell::new(format_fixed(outcome.hub_depth, 2)),
        ]);
    }
    table
}

fn decision_cell(decision: CommitDecision) -> Cell {
    match decision {
        CommitDecision::Commit(_) => Cell::new("commit")
            .fg(Color::Green)
            .add_attribute(Attribute::Bold),
        CommitDecision::Rejected(RejectReason::Unparseable) => dim_cell("held: not a number"),
        CommitDecision::Rejected(RejectReason::Negative) => dim_cell("held: negative"),
        CommitDecision::Rejected(RejectReason::NonFinite) => dim_cell("held: not finite"),
    }
}

fn range_text(min: f32, max: f32) -> String {
    format!("{} - {}", format_fixed(min, 1), format_fixed(max, 1))
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
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

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn field_cell(field: InputField) -> Cell {
    Cell::new(field.label())
        .fg(Color::Blue)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
