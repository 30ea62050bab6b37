//! Table rendering using comfy-table

use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, Color, ContentArrangement, Table};

/// Print a formatted table with headers and rows
pub fn print_table(headers: &[&str], rows: &[Vec<String>]) {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);

    // Constrain table width to terminal width minus indent
    if let Ok((cols, _)) = crossterm::terminal::size() {
        table.set_width(cols.saturating_sub(4));
    }
    table.set_content_arrangement(ContentArrangement::Dynamic);

    let header_cells: Vec<Cell> = headers
        .iter()
        .map(|h| Cell::new(h).add_attribute(Attribute::Bold).fg(Color::Cyan))
        .collect();
    table.set_header(header_cells);

    for row in rows {
        let cells: Vec<Cell> = row
            .iter()
            .map(|cell_text| {
                let mut cell = Cell::new(cell_text);
                if let Some(color) = status_color(cell_text) {
                    cell = cell.fg(color);
                }
                cell
            })
            .collect();
        table.add_row(cells);
    }

    // Indent the table
    for line in table.to_string().lines() {
        println!("    {}", line);
    }
}

/// Color status cells by well-known keywords
fn status_color(text: &str) -> Option<Color> {
    if text.contains('✓')
        || text.contains("OPEN")
        || text.starts_with("Valid")
        || text.ends_with("(VALID)")
        || text == "Excellent"
    {
        Some(Color::Green)
    } else if text.contains('✗') || text.contains("EXPIRED") || text.contains("CLOSED") || text == "Weak"
    {
        Some(Color::Red)
    } else if text.contains("EXPIRING") || text.contains("FILTERED") || text == "Good" || text == "Fair"
    {
        Some(Color::Yellow)
    } else {
        None
    }
}

/// Print a two-column field/value table
pub fn print_kv_table(rows: &[(&str, String)]) {
    let data: Vec<Vec<String>> = rows
        .iter()
        .map(|(field, value)| vec![field.to_string(), value.clone()])
        .collect();
    print_table(&["Field", "Value"], &data);
}
