//! Display text shared by every front end.

use crate::drill_engine::models::TableSelection;

/// Header line describing what is being practised.
///
/// Up to three tables are listed in full; longer selections show the first
/// two plus a count of the rest.
pub fn practice_label(selection: &TableSelection) -> String {
    let tables = selection.as_slice();
    match tables.len() {
        0 => "Select a table to start".to_string(),
        1 => format!("Practicing: Table of {}", tables[0]),
        2..=3 => format!("Practicing: Tables of {}", join(tables)),
        n => format!("Practicing: Tables of {} + {} more", join(&tables[..2]), n - 2),
    }
}

fn join(tables: &[u32]) -> String {
    tables.iter().map(|t| t.to_string()).collect::<Vec<_>>().join(", ")
}
