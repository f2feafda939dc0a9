//! Constraint puzzles: N-queens, graph colouring, Hamiltonian path.
//!
//! Graphs are adjacency lists indexed by vertex; neighbour indices outside
//! `0..adj.len()` are ignored.

use crate::backtrack::{solve, Backtrack, Mode, Outcome};
use crate::error::SearchError;
use crate::memo::Memo;

struct Queens {
    n: usize,
    cols: Vec<usize>,
    used_col: Vec<bool>,
    used_diag: Vec<bool>,
    used_anti: Vec<bool>,
}

impl Queens {
    fn new(n: usize) -> Self {
        let diagonals = (2 * n).saturating_sub(1);
        Self {
            n,
            cols: Vec::with_capacity(n),
            used_col: vec![false; n],
            used_diag: vec![false; diagonals],
            used_anti: vec![false; diagonals],
        }
    }

    fn mark(&mut self, col: usize, on: bool) {
        let row = self.cols.len();
        self.used_col[col] = on;
        self.used_diag[row + col] = on;
        self.used_anti[row + self.n - 1 - col] = on;
    }
}

impl Backtrack for Queens {
    type Choice = usize;
    type Solution = Vec<usize>;

    fn is_solution(&self) -> bool {
        self.cols.len() == self.n
    }

    fn choices(&self) -> Vec<usize> {
        let row = self.cols.len();
        (0..self.n)
            .filter(|&c| {
                !self.used_col[c] && !self.used_diag[row + c] && !self.used_anti[row + self.n - 1 - c]
            })
            .collect()
    }

    fn apply(&mut self, &col: &usize) {
        self.mark(col, true);
        self.cols.push(col);
    }

    fn undo(&mut self, _col: &usize) {
        if let Some(col) = self.cols.pop() {
            self.mark(col, false);
        }
    }

    fn snapshot(&self) -> Vec<usize> {
        self.cols.clone()
    }
}

/// Places `n` non-attacking queens; a solution lists the column of each row.
///
/// The empty board (`n == 0`) has exactly one solution, the empty placement.
pub fn n_queens(n: usize, mode: Mode) -> Outcome<Vec<usize>> {
    solve(&mut Queens::new(n), mode)
}

/// Largest board [`n_queens_count_memo`] accepts: diagonal masks need `2n - 1` bits.
pub const MAX_MEMO_QUEENS: usize = 32;

/// Number of N-queens solutions, memoised on `(row, cols, diag, anti-diag)`
/// occupancy masks.
pub fn n_queens_count_memo(n: usize) -> Result<usize, SearchError> {
    if n > MAX_MEMO_QUEENS {
        return Err(SearchError::InvalidArgument("board too large for bitmask memo"));
    }
    let mut memo = Memo::new();
    let count = count_queens(n, 0, 0, 0, 0, &mut memo);
    memo.report("n_queens");
    Ok(count)
}

type QueensKey = (usize, u64, u64, u64);

fn count_queens(
    n: usize,
    row: usize,
    cols: u64,
    diag: u64,
    anti: u64,
    memo: &mut Memo<QueensKey, usize>,
) -> usize {
    if row == n {
        return 1;
    }
    let key = (row, cols, diag, anti);
    if let Some(&hit) = memo.get(&key) {
        return hit;
    }
    let mut total = 0;
    for c in 0..n {
        let (d, a) = (1u64 << (row + c), 1u64 << (row + n - 1 - c));
        if cols & (1u64 << c) != 0 || diag & d != 0 || anti & a != 0 {
            continue;
        }
        total += count_queens(n, row + 1, cols | (1u64 << c), diag | d, anti | a, memo);
    }
    memo.insert(key, total);
    total
}

fn neighbors(adj: &[Vec<usize>], v: usize) -> impl Iterator<Item = usize> + '_ {
    let n = adj.len();
    adj[v].iter().copied().filter(move |&u| u < n)
}

struct Coloring<'a> {
    adj: &'a [Vec<usize>],
    m: usize,
    colors: Vec<usize>,
}

impl<'a> Coloring<'a> {
    fn fits(&self, v: usize, color: usize) -> bool {
        neighbors(self.adj, v).all(|u| self.colors.get(u) != Some(&color))
    }
}

impl<'a> Backtrack for Coloring<'a> {
    type Choice = usize;
    type Solution = Vec<usize>;

    fn is_solution(&self) -> bool {
        self.colors.len() == self.adj.len()
    }

    fn choices(&self) -> Vec<usize> {
        let v = self.colors.len();
        (1..=self.m).filter(|&c| self.fits(v, c)).collect()
    }

    fn apply(&mut self, &color: &usize) {
        self.colors.push(color);
    }

    fn undo(&mut self, _color: &usize) {
        self.colors.pop();
    }

    fn snapshot(&self) -> Vec<usize> {
        self.colors.clone()
    }
}

/// Assigns colours `1..=m` to vertices in index order so that no edge joins
/// two equal colours. Lower colours are tried first.
pub fn graph_coloring(adj: &[Vec<usize>], m: usize, mode: Mode) -> Outcome<Vec<usize>> {
    let mut problem = Coloring {
        adj,
        m,
        colors: Vec::with_capacity(adj.len()),
    };
    solve(&mut problem, mode)
}

/// First colouring in the order [`graph_coloring`] finds it, remembering
/// failed `(vertex, assignment)` states.
pub fn graph_coloring_memo(adj: &[Vec<usize>], m: usize) -> Option<Vec<usize>> {
    let mut memo = Memo::new();
    let mut colors = Vec::with_capacity(adj.len());
    let found = color_from(adj, m, &mut colors, &mut memo);
    memo.report("graph_coloring");
    found.then_some(colors)
}

fn color_from(
    adj: &[Vec<usize>],
    m: usize,
    colors: &mut Vec<usize>,
    failed: &mut Memo<(usize, Vec<usize>), bool>,
) -> bool {
    let v = colors.len();
    if v == adj.len() {
        return true;
    }
    let key = (v, colors.clone());
    if failed.get(&key).is_some() {
        return false;
    }
    for color in 1..=m {
        if neighbors(adj, v).any(|u| colors.get(u) == Some(&color)) {
            continue;
        }
        colors.push(color);
        if color_from(adj, m, colors, failed) {
            return true;
        }
        colors.pop();
    }
    failed.insert(key, false);
    false
}

struct Hamiltonian<'a> {
    adj: &'a [Vec<usize>],
    path: Vec<usize>,
    visited: Vec<bool>,
}

impl<'a> Backtrack for Hamiltonian<'a> {
    type Choice = usize;
    type Solution = Vec<usize>;

    fn is_solution(&self) -> bool {
        self.path.len() == self.adj.len()
    }

    fn choices(&self) -> Vec<usize> {
        match self.path.last() {
            None => (0..self.adj.len()).collect(),
            Some(&v) => neighbors(self.adj, v).filter(|&u| !self.visited[u]).collect(),
        }
    }

    fn apply(&mut self, &v: &usize) {
        self.visited[v] = true;
        self.path.push(v);
    }

    fn undo(&mut self, _v: &usize) {
        if let Some(v) = self.path.pop() {
            self.visited[v] = false;
        }
    }

    fn snapshot(&self) -> Vec<usize> {
        self.path.clone()
    }
}

/// Paths visiting every vertex exactly once along edges.
///
/// Start vertices are tried in index order, then neighbours in adjacency
/// order.
pub fn hamiltonian_path(adj: &[Vec<usize>], mode: Mode) -> Outcome<Vec<usize>> {
    let mut problem = Hamiltonian {
        adj,
        path: Vec::with_capacity(adj.len()),
        visited: vec![false; adj.len()],
    };
    solve(&mut problem, mode)
}

/// First Hamiltonian path in the order [`hamiltonian_path`] finds it,
/// remembering failed `(current, visited set)` states.
///
/// The visited set is a `u64` mask, so graphs over 64 vertices are rejected.
pub fn hamiltonian_path_memo(adj: &[Vec<usize>]) -> Result<Option<Vec<usize>>, SearchError> {
    let n = adj.len();
    if n > 64 {
        return Err(SearchError::InvalidArgument("more than 64 vertices"));
    }
    if n == 0 {
        return Ok(Some(Vec::new()));
    }
    let full = if n == 64 { u64::MAX } else { (1u64 << n) - 1 };
    let mut memo = Memo::new();
    let mut path = Vec::with_capacity(n);
    let mut found = false;
    for start in 0..n {
        path.push(start);
        if extend_path(adj, full, 1u64 << start, &mut path, &mut memo) {
            found = true;
            break;
        }
        path.pop();
    }
    memo.report("hamiltonian_path");
    Ok(found.then_some(path))
}

fn extend_path(
    adj: &[Vec<usize>],
    full: u64,
    visited: u64,
    path: &mut Vec<usize>,
    failed: &mut Memo<(usize, u64), bool>,
) -> bool {
    if visited == full {
        return true;
    }
    let Some(&current) = path.last() else {
        return false;
    };
    if failed.get(&(current, visited)).is_some() {
        return false;
    }
    for u in neighbors(adj, current) {
        if visited & (1u64 << u) != 0 {
            continue;
        }
        path.push(u);
        if extend_path(adj, full, visited | (1u64 << u), path, failed) {
            return true;
        }
        path.pop();
    }
    failed.insert((current, visited), false);
    false
}
