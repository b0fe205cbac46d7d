//! Output formatting for CLI

use crate::tictactoe::Board;

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("{title}");
    println!("{}", "=".repeat(60));
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:20} {}", format!("{}:", key), value);
}

/// Print statistics table
pub fn print_stats_table(stats: &[(&str, &str)]) {
    for (key, value) in stats {
        print_kv(key, value);
    }
}

/// Format a number with thousands separators
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.insert(0, ',');
        }
        result.insert(0, c);
    }
    result
}

/// Render the board as a 3x3 grid, numbering empty cells 1-9 like a keypad
pub fn render_board(board: &Board) -> String {
    let symbols: Vec<char> = board
        .cells()
        .iter()
        .enumerate()
        .map(|(i, cell)| match cell.mark() {
            Some(mark) => mark.to_cell().to_char(),
            None => char::from_digit(i as u32 + 1, 10).unwrap_or('?'),
        })
        .collect();

    let separator = "-".repeat(11);
    let rows: Vec<String> = symbols
        .chunks(3)
        .map(|row| format!(" {} | {} | {} ", row[0], row[1], row[2]))
        .collect();

    format!(
        "\n{}\n{separator}\n{}\n{separator}\n{}\n",
        rows[0], rows[1], rows[2]
    )
}
