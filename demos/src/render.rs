//! Plain-text maze drawing.

use maze_core::{Grid, Pos, Side};
use maze_paths::Solver;

/// Draw `grid` with `+`, `-` and `|` walls. When a solver is given, path
/// cells show `*` and other settled cells `.`; otherwise cells show their
/// terrain rune. Start and goal are always `S` and `G`.
pub fn ascii(grid: &Grid, solver: Option<&Solver>) -> String {
    let mut out = String::new();

    for c in 0..grid.cols() {
        let top = if grid.has_wall(Pos::new(0, c), Side::Top) { "---" } else { "   " };
        out.push('+');
        out.push_str(top);
    }
    out.push_str("+\n");

    for r in 0..grid.rows() {
        for c in 0..grid.cols() {
            let p = Pos::new(r, c);
            out.push(if grid.has_wall(p, Side::Left) { '|' } else { ' ' });
            out.push(' ');
            out.push(glyph(grid, solver, p));
            out.push(' ');
        }
        let last = Pos::new(r, grid.cols() - 1);
        out.push(if grid.has_wall(last, Side::Right) { '|' } else { ' ' });
        out.push('\n');

        for c in 0..grid.cols() {
            let bottom = if grid.has_wall(Pos::new(r, c), Side::Bottom) { "---" } else { "   " };
            out.push('+');
            out.push_str(bottom);
        }
        out.push_str("+\n");
    }
    out
}

fn glyph(grid: &Grid, solver: Option<&Solver>, p: Pos) -> char {
    if p == grid.start() {
        return 'S';
    }
    if p == grid.goal() {
        return 'G';
    }
    match solver {
        Some(s) if s.on_final_path(p) => '*',
        Some(s) if s.is_searched(p) => '.',
        _ => grid.at(p).map_or(' ', |c| c.terrain().rune()),
    }
}
