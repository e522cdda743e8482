use crate::Board;

const CELL_WIDTH: usize = 14;

// Pads or truncates to exactly CELL_WIDTH characters.
fn fit(text: &str) -> String {
    let text = text.trim();
    if text.chars().count() > CELL_WIDTH {
        let mut short: String = text.chars().take(CELL_WIDTH - 1).collect();
        short.push('…');
        short
    } else {
        format!("{:<width$}", text, width = CELL_WIDTH)
    }
}

fn horizontal_line(result: &mut String, columns: usize, left: char, middle: char, right: char) {
    result.push(left);
    for col in 0..columns {
        if col > 0 {
            result.push(middle);
        }
        for _ in 0..CELL_WIDTH + 2 {
            result.push('─');
        }
    }
    result.push(right);
    result.push('\n');
}

/// Draws the board as a text table: one header row with the category
/// titles, then one row per clue showing what its cell currently displays.
pub fn visualize_board(board: &Board) -> String {
    let columns = board.columns();
    let mut result = String::new();

    horizontal_line(&mut result, columns, '╭', '┬', '╮');
    result.push('│');
    for title in board.titles() {
        result += &format!(" {} │", fit(title));
    }
    result.push('\n');
    horizontal_line(&mut result, columns, '├', '┼', '┤');

    for row in board.rows() {
        result.push('│');
        for clue in row {
            result += &format!(" {} │", fit(clue.display()));
        }
        result.push('\n');
    }
    horizontal_line(&mut result, columns, '╰', '┴', '╯');
    result
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", visualize_board(self))
    }
}
