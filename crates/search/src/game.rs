//! Tic-tac-toe minimax with memoisation and alpha-beta pruning.
//!
//! Utilities are from X's point of view: `1` X wins, `-1` O wins, `0` draw.
//! X maximises, O minimises.

use crate::memo::Memo;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Player {
    X,
    O,
}

impl Player {
    pub fn other(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// Cells in row-major order.
pub type Board = [Option<Player>; 9];

const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

pub fn winner(board: &Board) -> Option<Player> {
    LINES.iter().find_map(|&[a, b, c]| match board[a] {
        Some(p) if board[b] == Some(p) && board[c] == Some(p) => Some(p),
        _ => None,
    })
}

fn terminal_value(board: &Board) -> Option<i32> {
    match winner(board) {
        Some(Player::X) => Some(1),
        Some(Player::O) => Some(-1),
        None if board.iter().all(Option::is_some) => Some(0),
        None => None,
    }
}

/// Base-3 board encoding with the side to move in the lowest bit.
fn state_key(board: &Board, to_move: Player) -> u32 {
    let cells = board.iter().fold(0u32, |acc, cell| {
        acc * 3
            + match cell {
                None => 0,
                Some(Player::X) => 1,
                Some(Player::O) => 2,
            }
    });
    cells * 2 + u32::from(to_move == Player::O)
}

fn empty_cells(board: &Board) -> impl Iterator<Item = usize> + '_ {
    (0..9).filter(|&i| board[i].is_none())
}

fn better(to_move: Player, a: i32, b: i32) -> bool {
    match to_move {
        Player::X => a > b,
        Player::O => a < b,
    }
}

/// Game value with `to_move` to play, memoised on `(board, to move)`.
pub fn minimax(board: &Board, to_move: Player) -> i32 {
    let mut memo = Memo::new();
    let mut board = *board;
    let value = minimax_at(&mut board, to_move, &mut memo);
    memo.report("minimax");
    value
}

fn minimax_at(board: &mut Board, to_move: Player, memo: &mut Memo<u32, i32>) -> i32 {
    if let Some(v) = terminal_value(board) {
        return v;
    }
    let key = state_key(board, to_move);
    if let Some(&hit) = memo.get(&key) {
        return hit;
    }
    let mut best = if to_move == Player::X { -2 } else { 2 };
    for cell in 0..9 {
        if board[cell].is_some() {
            continue;
        }
        board[cell] = Some(to_move);
        let v = minimax_at(board, to_move.other(), memo);
        board[cell] = None;
        if better(to_move, v, best) {
            best = v;
        }
    }
    memo.insert(key, best);
    best
}

/// Same contract as [`minimax`], without the cache.
pub fn minimax_plain(board: &Board, to_move: Player) -> i32 {
    fn go(board: &mut Board, to_move: Player) -> i32 {
        if let Some(v) = terminal_value(board) {
            return v;
        }
        let mut best = if to_move == Player::X { -2 } else { 2 };
        for cell in 0..9 {
            if board[cell].is_some() {
                continue;
            }
            board[cell] = Some(to_move);
            let v = go(board, to_move.other());
            board[cell] = None;
            if better(to_move, v, best) {
                best = v;
            }
        }
        best
    }
    let mut board = *board;
    go(&mut board, to_move)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Bound {
    Exact,
    Lower,
    Upper,
}

/// Game value by alpha-beta search over a transposition table whose entries
/// record whether the stored score is exact or a bound.
pub fn alpha_beta(board: &Board, to_move: Player) -> i32 {
    let mut table = Memo::new();
    let mut board = *board;
    let value = alpha_beta_at(&mut board, to_move, -2, 2, &mut table);
    table.report("alpha_beta");
    value
}

fn alpha_beta_at(
    board: &mut Board,
    to_move: Player,
    mut alpha: i32,
    mut beta: i32,
    table: &mut Memo<u32, (i32, Bound)>,
) -> i32 {
    if let Some(v) = terminal_value(board) {
        return v;
    }
    let key = state_key(board, to_move);
    if let Some(&(v, bound)) = table.get(&key) {
        match bound {
            Bound::Exact => return v,
            Bound::Lower => alpha = alpha.max(v),
            Bound::Upper => beta = beta.min(v),
        }
        if alpha >= beta {
            return v;
        }
    }
    let (alpha0, beta0) = (alpha, beta);
    let mut best = if to_move == Player::X { -2 } else { 2 };
    for cell in 0..9 {
        if board[cell].is_some() {
            continue;
        }
        board[cell] = Some(to_move);
        let v = alpha_beta_at(board, to_move.other(), alpha, beta, table);
        board[cell] = None;
        match to_move {
            Player::X => {
                best = best.max(v);
                alpha = alpha.max(best);
            }
            Player::O => {
                best = best.min(v);
                beta = beta.min(best);
            }
        }
        if alpha >= beta {
            break;
        }
    }
    let bound = if best <= alpha0 {
        Bound::Upper
    } else if best >= beta0 {
        Bound::Lower
    } else {
        Bound::Exact
    };
    table.insert(key, (best, bound));
    best
}

/// Lowest-indexed empty cell with the best game value for `to_move`.
///
/// `None` once the game is over.
pub fn best_move(board: &Board, to_move: Player) -> Option<usize> {
    if terminal_value(board).is_some() {
        return None;
    }
    let mut memo = Memo::new();
    let mut board = *board;
    let mut best: Option<(usize, i32)> = None;
    let cells: Vec<usize> = empty_cells(&board).collect();
    for cell in cells {
        board[cell] = Some(to_move);
        let v = minimax_at(&mut board, to_move.other(), &mut memo);
        board[cell] = None;
        if best.map_or(true, |(_, b)| better(to_move, v, b)) {
            best = Some((cell, v));
        }
    }
    memo.report("best_move");
    best.map(|(cell, _)| cell)
}

/// Parses a 9-character board: `X`, `O`, anything else empty.
pub fn parse_board(cells: &str) -> Option<Board> {
    let mut board: Board = [None; 9];
    let mut count = 0;
    for (i, ch) in cells.chars().enumerate() {
        if i >= 9 {
            return None;
        }
        board[i] = match ch {
            'X' | 'x' => Some(Player::X),
            'O' | 'o' => Some(Player::O),
            _ => None,
        };
        count += 1;
    }
    (count == 9).then_some(board)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_key_separates_side_to_move() {
        let board: Board = [None; 9];
        assert_ne!(state_key(&board, Player::X), state_key(&board, Player::O));
    }
}
