//! Backtracking and memoisation harness.
//!
//! [`solve`] drives any [`Backtrack`] problem under a [`Mode`]: stop at the
//! first witness, count accepted states, or enumerate them all. The solvers
//! in this crate come in pairs, a memoised entry point built on [`Memo`] and
//! a plain one, and both return the same answer on every valid input.

pub mod backtrack;
pub mod error;
pub mod fib;
pub mod game;
pub mod memo;
pub mod obst;
pub mod puzzles;
pub mod sequences;

pub use backtrack::{solve, Backtrack, Mode, Outcome};
pub use error::SearchError;
#[cfg(feature = "multithreaded")]
pub use fib::parallel_fib;
pub use fib::{fib, MAX_FIB_N};
pub use game::{
    alpha_beta, best_move, minimax, minimax_plain, parse_board, winner, Board, Player,
};
pub use memo::Memo;
pub use obst::{optimal_bst_cost, optimal_bst_cost_plain};
pub use puzzles::{
    graph_coloring, graph_coloring_memo, hamiltonian_path, hamiltonian_path_memo, n_queens,
    n_queens_count_memo, MAX_MEMO_QUEENS,
};
pub use sequences::{
    lis_memoization, lis_recursive, subset_sum, subset_sum_plain, subset_sum_search, word_break,
    word_break_all, word_break_plain,
};
