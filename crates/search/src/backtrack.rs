//! Generic depth-first search over a choice tree.

use serde::Deserialize;
use tracing::debug_span;

/// Output policy of a search.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Stop at the first accepted state.
    #[default]
    Witness,
    /// Number of accepted states.
    Count,
    /// Every accepted state, in discovery order.
    Enumerate,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome<S> {
    Witness(Option<S>),
    Count(usize),
    All(Vec<S>),
}

impl<S> Outcome<S> {
    /// The witness, or the first enumerated state.
    pub fn witness(self) -> Option<S> {
        match self {
            Outcome::Witness(w) => w,
            Outcome::All(all) => all.into_iter().next(),
            Outcome::Count(_) => None,
        }
    }

    pub fn count(&self) -> usize {
        match self {
            Outcome::Witness(w) => usize::from(w.is_some()),
            Outcome::Count(n) => *n,
            Outcome::All(all) => all.len(),
        }
    }

    pub fn into_all(self) -> Vec<S> {
        match self {
            Outcome::Witness(w) => w.into_iter().collect(),
            Outcome::All(all) => all,
            Outcome::Count(_) => Vec::new(),
        }
    }
}

/// A problem explored by applying and undoing choices on one mutable state.
pub trait Backtrack {
    type Choice;
    type Solution;

    /// The current state is accepted. Accepted states are not extended.
    fn is_solution(&self) -> bool;

    /// The current state cannot lead to a solution.
    fn is_infeasible(&self) -> bool {
        false
    }

    /// Candidate moves from the current state, in exploration order.
    fn choices(&self) -> Vec<Self::Choice>;

    fn apply(&mut self, choice: &Self::Choice);

    fn undo(&mut self, choice: &Self::Choice);

    fn snapshot(&self) -> Self::Solution;
}

struct Collector<S> {
    mode: Mode,
    found: Vec<S>,
    count: usize,
}

/// Explores `problem` depth-first and collects according to `mode`.
///
/// The state is restored to where it started when the call returns.
pub fn solve<P: Backtrack>(problem: &mut P, mode: Mode) -> Outcome<P::Solution> {
    let span = debug_span!("solve", ?mode);
    let _enter = span.enter();

    let mut acc = Collector {
        mode,
        found: Vec::new(),
        count: 0,
    };
    explore(problem, &mut acc);
    match mode {
        Mode::Witness => Outcome::Witness(acc.found.into_iter().next()),
        Mode::Count => Outcome::Count(acc.count),
        Mode::Enumerate => Outcome::All(acc.found),
    }
}

/// Returns `true` once the search should stop.
fn explore<P: Backtrack>(problem: &mut P, acc: &mut Collector<P::Solution>) -> bool {
    if problem.is_infeasible() {
        return false;
    }
    if problem.is_solution() {
        acc.count += 1;
        match acc.mode {
            Mode::Witness => {
                acc.found.push(problem.snapshot());
                return true;
            }
            Mode::Enumerate => acc.found.push(problem.snapshot()),
            Mode::Count => {}
        }
        return false;
    }
    for choice in problem.choices() {
        problem.apply(&choice);
        let stop = explore(problem, acc);
        problem.undo(&choice);
        if stop {
            return true;
        }
    }
    false
}
