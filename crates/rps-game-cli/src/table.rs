//! Help-table rendering.

use rps_game_core::{MoveSet, Outcome, OutcomeTable};
use std::io::{self, Write};

const CORNER_LABEL: &str = "v PC\\User >";

/// Render the bordered outcome grid.
///
/// Rows are the computer's candidate moves, columns the user's; each cell is
/// the outcome from the user's perspective. The label column is sized to the
/// widest of the corner label and the move names; each data column to the
/// widest of its header name and the outcome strings.
pub fn render_help(
    out: &mut impl Write,
    moves: &MoveSet,
    table: &OutcomeTable,
) -> io::Result<()> {
    let names: Vec<&str> = moves.names().collect();
    let n = names.len();

    let widest_outcome = [Outcome::Win, Outcome::Draw, Outcome::Lose]
        .iter()
        .map(|o| o.as_str().len())
        .max()
        .unwrap_or(0);
    let widest_name = names.iter().map(|m| m.len()).max().unwrap_or(0);

    let mut widths = Vec::with_capacity(n + 1);
    widths.push(CORNER_LABEL.len().max(widest_name));
    for name in &names {
        widths.push(name.len().max(widest_outcome));
    }

    write_border(out, &widths)?;

    write!(out, "| {:<w$} |", CORNER_LABEL, w = widths[0])?;
    for (j, name) in names.iter().enumerate() {
        write!(out, " {:<w$} |", name, w = widths[j + 1])?;
    }
    writeln!(out)?;
    write_border(out, &widths)?;

    for (i, row_name) in names.iter().enumerate() {
        write!(out, "| {:<w$} |", row_name, w = widths[0])?;
        for j in 0..n {
            // user plays column j against computer row i
            let cell = table.outcome(j + 1, i + 1);
            write!(out, " {:<w$} |", cell.as_str(), w = widths[j + 1])?;
        }
        writeln!(out)?;
    }
    write_border(out, &widths)
}

fn write_border(out: &mut impl Write, widths: &[usize]) -> io::Result<()> {
    write!(out, "+")?;
    for w in widths {
        write!(out, "{}+", "-".repeat(w + 2))?;
    }
    writeln!(out)
}
