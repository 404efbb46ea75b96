use std::fmt::Write;

use minefield_core::{CellView, Game, Snapshot};

fn glyph(cell: CellView) -> char {
    match cell {
        CellView::Hidden => '#',
        CellView::Flagged => 'F',
        CellView::Revealed(0) => '.',
        CellView::Revealed(count) => char::from_digit(count.into(), 10).unwrap_or('?'),
        CellView::Mine => '*',
        CellView::TriggeredMine => 'X',
    }
}

fn render_snapshot(snapshot: &Snapshot) -> String {
    let (rows, cols) = snapshot.size;
    let mut out = String::new();

    out.push_str("    ");
    for col in 0..cols {
        let _ = write!(out, "{:>3}", col);
    }
    out.push('\n');

    for row in 0..rows {
        let _ = write!(out, "{:>3} ", row);
        for col in 0..cols {
            let _ = write!(out, "{:>3}", glyph(snapshot.cell_at((row, col))));
        }
        out.push('\n');
    }

    let _ = writeln!(
        out,
        "mines: {}  flags: {}  state: {:?}",
        snapshot.mines, snapshot.flags, snapshot.state
    );
    if let Some(message) = snapshot.message {
        let _ = writeln!(out, "{message}  (`n` to play again)");
    }
    out
}

pub(crate) fn render(game: &Game) -> String {
    match game.snapshot() {
        Some(snapshot) => render_snapshot(&snapshot),
        None => "no game running, start one with `n [SIZE [MINES]]`\n".to_string(),
    }
}
