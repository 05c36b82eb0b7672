//! Entry display formatting
//!
//! Formats ledger entries as a fixed-width table for terminal output.

use crate::models::Entry;

const DESCRIPTION_WIDTH: usize = 20;

/// Format a single entry as a table row
pub fn format_entry_row(entry: &Entry) -> String {
    format!(
        "{:<6} {:<20} {:>12}  {:<14} {:<4} {}",
        entry.id(),
        truncate(&entry.description, DESCRIPTION_WIDTH),
        entry.currency.format_amount(entry.amount),
        entry.category,
        entry.currency,
        entry.timestamp_string()
    )
}

/// Format entries as a table
pub fn format_entry_table<'a, I>(entries: I) -> String
where
    I: IntoIterator<Item = &'a Entry>,
{
    let rows: Vec<String> = entries.into_iter().map(format_entry_row).collect();
    if rows.is_empty() {
        return "No entries found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:<6} {:<20} {:>12}  {:<14} {:<4} {}\n",
        "ID", "Description", "Amount", "Category", "Cur", "Created"
    ));
    output.push_str(&"-".repeat(80));
    output.push('\n');

    for row in rows {
        output.push_str(&row);
        output.push('\n');
    }

    output
}

/// Flatten line breaks and cut to `max` characters, marking the cut with `…`
fn truncate(s: &str, max: usize) -> String {
    let flat: String = s
        .chars()
        .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
        .collect();
    if flat.chars().count() <= max {
        flat
    } else {
        let mut cut: String = flat.chars().take(max - 1).collect();
        cut.push('…');
        cut
    }
}
