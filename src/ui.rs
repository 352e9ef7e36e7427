#![cfg(feature = "std")]

use std::fmt::Write;

use crate::{board::BoardState, config::BOARD_SIZE};

/// Render a board as text with columns A–J and rows 1–10.
///
/// `reveal` shows unshot ships (the owner's view); without it only shots are
/// visible (the opponent's view). Legend: `#` ship, `X` hit, `o` miss, `.` water.
pub fn render_board(board: &BoardState, reveal: bool) -> String {
    let mut out = String::new();
    out.push_str("   ");
    for x in 0..BOARD_SIZE {
        let _ = write!(out, " {}", (b'A' + x as u8) as char);
    }
    out.push('\n');
    let ownership = board.ownership().rows();
    let shots = board.shots().rows();
    for y in 0..BOARD_SIZE {
        let _ = write!(out, "{:2} ", y + 1);
        for x in 0..BOARD_SIZE {
            let ch = match (ownership[y][x] != 0, shots[y][x]) {
                (true, true) => 'X',
                (false, true) => 'o',
                (true, false) if reveal => '#',
                _ => '.',
            };
            let _ = write!(out, " {}", ch);
        }
        out.push('\n');
    }
    out
}

/// Print both views of a player: its own fleet and its shots at the opponent.
pub fn print_player_view(own: &BoardState, opponent: &BoardState) {
    println!("\nYour fleet ({} ships afloat):", own.ships_remaining());
    print!("{}", render_board(own, true));
    println!("\nEnemy waters ({} ships afloat):", opponent.ships_remaining());
    print!("{}", render_board(opponent, false));
}
