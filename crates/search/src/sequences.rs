//! Sequence problems: longest increasing subsequence, word break, subset sum.

use std::collections::HashSet;

use crate::backtrack::{solve, Backtrack, Mode, Outcome};
use crate::memo::Memo;

/// Length of the longest strictly increasing subsequence.
///
/// Memoised on `(index, previous index)`.
pub fn lis_memoization(values: &[i64]) -> usize {
    let mut memo = Memo::new();
    let len = lis_memo_at(values, 0, None, &mut memo);
    memo.report("lis");
    len
}

fn lis_memo_at(
    values: &[i64],
    i: usize,
    prev: Option<usize>,
    memo: &mut Memo<(usize, Option<usize>), usize>,
) -> usize {
    if i == values.len() {
        return 0;
    }
    if let Some(&hit) = memo.get(&(i, prev)) {
        return hit;
    }
    let skip = lis_memo_at(values, i + 1, prev, memo);
    let take = match prev {
        Some(p) if values[p] >= values[i] => 0,
        _ => 1 + lis_memo_at(values, i + 1, Some(i), memo),
    };
    let best = skip.max(take);
    memo.insert((i, prev), best);
    best
}

/// Same contract as [`lis_memoization`], without the cache.
pub fn lis_recursive(values: &[i64]) -> usize {
    fn go(values: &[i64], i: usize, prev: Option<usize>) -> usize {
        if i == values.len() {
            return 0;
        }
        let skip = go(values, i + 1, prev);
        match prev {
            Some(p) if values[p] >= values[i] => skip,
            _ => skip.max(1 + go(values, i + 1, Some(i))),
        }
    }
    go(values, 0, None)
}

/// Byte offsets just past each character of `text[start..]`, shortest first.
fn prefix_ends(text: &str, start: usize) -> impl Iterator<Item = usize> + '_ {
    text[start..]
        .char_indices()
        .skip(1)
        .map(move |(i, _)| start + i)
        .chain(std::iter::once(text.len()))
        .filter(move |&end| end > start)
}

/// Splits `text` into dictionary words.
///
/// Prefixes are tried shortest first and the first segmentation found is
/// returned. Empty text splits into no words.
pub fn word_break(text: &str, dictionary: &[&str]) -> Option<Vec<String>> {
    let words: HashSet<&str> = dictionary.iter().copied().collect();
    let mut memo = Memo::new();
    let ok = breakable_from(text, 0, &words, &mut memo);
    let mut parts = Vec::new();
    if ok {
        let mut start = 0;
        while start < text.len() {
            let end = prefix_ends(text, start).find(|&end| {
                words.contains(&text[start..end]) && breakable_from(text, end, &words, &mut memo)
            })?;
            parts.push(text[start..end].to_string());
            start = end;
        }
    }
    memo.report("word_break");
    ok.then_some(parts)
}

fn breakable_from(
    text: &str,
    start: usize,
    words: &HashSet<&str>,
    memo: &mut Memo<usize, bool>,
) -> bool {
    if start == text.len() {
        return true;
    }
    if let Some(&hit) = memo.get(&start) {
        return hit;
    }
    let ok = prefix_ends(text, start)
        .any(|end| words.contains(&text[start..end]) && breakable_from(text, end, words, memo));
    memo.insert(start, ok);
    ok
}

struct WordBreak<'a> {
    text: &'a str,
    words: HashSet<&'a str>,
    pos: usize,
    parts: Vec<&'a str>,
}

impl<'a> WordBreak<'a> {
    fn new(text: &'a str, dictionary: &[&'a str]) -> Self {
        Self {
            text,
            words: dictionary.iter().copied().collect(),
            pos: 0,
            parts: Vec::new(),
        }
    }
}

impl<'a> Backtrack for WordBreak<'a> {
    type Choice = usize;
    type Solution = Vec<String>;

    fn is_solution(&self) -> bool {
        self.pos == self.text.len()
    }

    fn choices(&self) -> Vec<usize> {
        prefix_ends(self.text, self.pos)
            .filter(|&end| self.words.contains(&self.text[self.pos..end]))
            .collect()
    }

    fn apply(&mut self, end: &usize) {
        self.parts.push(&self.text[self.pos..*end]);
        self.pos = *end;
    }

    fn undo(&mut self, _end: &usize) {
        if let Some(word) = self.parts.pop() {
            self.pos -= word.len();
        }
    }

    fn snapshot(&self) -> Vec<String> {
        self.parts.iter().map(|w| w.to_string()).collect()
    }
}

/// Same contract as [`word_break`], by plain backtracking.
pub fn word_break_plain(text: &str, dictionary: &[&str]) -> Option<Vec<String>> {
    solve(&mut WordBreak::new(text, dictionary), Mode::Witness).witness()
}

/// Every segmentation of `text`, in shortest-prefix-first order.
pub fn word_break_all(text: &str, dictionary: &[&str]) -> Vec<Vec<String>> {
    solve(&mut WordBreak::new(text, dictionary), Mode::Enumerate).into_all()
}

/// Picks values summing to `target`, trying to include each value before
/// skipping it. Values larger than the remaining sum are never included.
///
/// Memoised on `(index, remaining)`.
pub fn subset_sum(values: &[u64], target: u64) -> Option<Vec<u64>> {
    let mut memo = Memo::new();
    let ok = reachable(values, 0, target, &mut memo);
    let mut picked = Vec::new();
    if ok {
        let (mut i, mut remaining) = (0, target);
        while remaining > 0 {
            let v = *values.get(i)?;
            if v <= remaining && reachable(values, i + 1, remaining - v, &mut memo) {
                picked.push(v);
                remaining -= v;
            }
            i += 1;
        }
    }
    memo.report("subset_sum");
    ok.then_some(picked)
}

fn reachable(
    values: &[u64],
    i: usize,
    remaining: u64,
    memo: &mut Memo<(usize, u64), bool>,
) -> bool {
    if remaining == 0 {
        return true;
    }
    if i == values.len() {
        return false;
    }
    if let Some(&hit) = memo.get(&(i, remaining)) {
        return hit;
    }
    let v = values[i];
    let ok = (v <= remaining && reachable(values, i + 1, remaining - v, memo))
        || reachable(values, i + 1, remaining, memo);
    memo.insert((i, remaining), ok);
    ok
}

/// Same contract as [`subset_sum`], without the cache.
pub fn subset_sum_plain(values: &[u64], target: u64) -> Option<Vec<u64>> {
    fn go(values: &[u64], i: usize, remaining: u64, picked: &mut Vec<u64>) -> bool {
        if remaining == 0 {
            return true;
        }
        let Some(&v) = values.get(i) else {
            return false;
        };
        if v <= remaining {
            picked.push(v);
            if go(values, i + 1, remaining - v, picked) {
                return true;
            }
            picked.pop();
        }
        go(values, i + 1, remaining, picked)
    }
    let mut picked = Vec::new();
    go(values, 0, target, &mut picked).then_some(picked)
}

#[derive(Clone, Copy, Debug)]
enum Pick {
    Take,
    Skip,
}

struct SubsetSum<'a> {
    values: &'a [u64],
    index: usize,
    remaining: u64,
    picked: Vec<u64>,
}

impl<'a> Backtrack for SubsetSum<'a> {
    type Choice = Pick;
    type Solution = Vec<u64>;

    fn is_solution(&self) -> bool {
        self.remaining == 0
    }

    fn is_infeasible(&self) -> bool {
        self.values[self.index..]
            .iter()
            .fold(0u64, |acc, &v| acc.saturating_add(v))
            < self.remaining
    }

    fn choices(&self) -> Vec<Pick> {
        match self.values.get(self.index) {
            None => Vec::new(),
            Some(&v) if v <= self.remaining => vec![Pick::Take, Pick::Skip],
            Some(_) => vec![Pick::Skip],
        }
    }

    fn apply(&mut self, choice: &Pick) {
        if let Pick::Take = choice {
            let v = self.values[self.index];
            self.picked.push(v);
            self.remaining -= v;
        }
        self.index += 1;
    }

    fn undo(&mut self, choice: &Pick) {
        self.index -= 1;
        if let Pick::Take = choice {
            if let Some(v) = self.picked.pop() {
                self.remaining += v;
            }
        }
    }

    fn snapshot(&self) -> Vec<u64> {
        self.picked.clone()
    }
}

/// Subset sum through the generic search harness.
///
/// A state is accepted as soon as nothing remains, so in count and enumerate
/// modes each accepted subset is the include-first path that reached zero.
pub fn subset_sum_search(values: &[u64], target: u64, mode: Mode) -> Outcome<Vec<u64>> {
    let mut problem = SubsetSum {
        values,
        index: 0,
        remaining: target,
        picked: Vec::new(),
    };
    solve(&mut problem, mode)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_ends_respect_char_boundaries() {
        let ends: Vec<usize> = prefix_ends("aé b", 0).collect();
        assert_eq!(ends, vec![1, 3, 4, 5]);
        assert_eq!(prefix_ends("abc", 3).count(), 0);
    }
}
