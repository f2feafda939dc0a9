//! Huffman coding over `char` symbols.

use std::collections::BTreeMap;

use algokit_heap::PriorityQueue;
use tracing::debug;

use crate::error::ExerciseError;

/// Code table: symbol to bit string of `'0'` and `'1'`.
pub type CodeTable = BTreeMap<char, String>;

enum Tree {
    Leaf(char),
    Internal(usize, usize),
}

/// Builds a prefix-free code table from the symbol frequencies of `text`.
///
/// Leaves enter the queue in symbol order and ties leave in insertion order,
/// so the table is deterministic. The two lightest trees are merged with the
/// first popped on the `'0'` side. A text with a single distinct symbol gets
/// the code `"0"`; an empty text gets an empty table.
pub fn build_codes(text: &str) -> CodeTable {
    let mut freq: BTreeMap<char, usize> = BTreeMap::new();
    for ch in text.chars() {
        *freq.entry(ch).or_default() += 1;
    }

    let mut nodes: Vec<Tree> = Vec::with_capacity(freq.len() * 2);
    let mut queue = PriorityQueue::new();
    for (&ch, &count) in &freq {
        queue.push(count, nodes.len());
        nodes.push(Tree::Leaf(ch));
    }
    let root = loop {
        let Ok((w1, left)) = queue.pop_entry() else {
            return CodeTable::new();
        };
        let Ok((w2, right)) = queue.pop_entry() else {
            break left;
        };
        queue.push(w1 + w2, nodes.len());
        nodes.push(Tree::Internal(left, right));
    };

    let mut codes = CodeTable::new();
    let mut stack = vec![(root, String::new())];
    while let Some((i, prefix)) = stack.pop() {
        match nodes[i] {
            Tree::Leaf(ch) => {
                let code = if prefix.is_empty() { "0".to_string() } else { prefix };
                codes.insert(ch, code);
            }
            Tree::Internal(l, r) => {
                stack.push((r, format!("{prefix}1")));
                stack.push((l, format!("{prefix}0")));
            }
        }
    }
    debug!(symbols = codes.len(), nodes = nodes.len(), "huffman codes built");
    codes
}

/// Concatenates the codes of every symbol of `text`.
pub fn encode(text: &str, codes: &CodeTable) -> Result<String, ExerciseError> {
    text.chars()
        .map(|ch| {
            codes
                .get(&ch)
                .map(String::as_str)
                .ok_or(ExerciseError::InvalidArgument("symbol has no code"))
        })
        .collect()
}

/// Decodes `bits` by repeatedly taking the longest code that prefixes the
/// remaining input.
pub fn decode(bits: &str, codes: &CodeTable) -> Result<String, ExerciseError> {
    let by_code: BTreeMap<&str, char> =
        codes.iter().map(|(&ch, code)| (code.as_str(), ch)).collect();
    let longest = by_code.keys().map(|c| c.len()).max().unwrap_or(0);
    let mut out = String::new();
    let mut rest = bits;
    while !rest.is_empty() {
        let hit = (1..=longest.min(rest.len()))
            .rev()
            .filter(|&len| rest.is_char_boundary(len))
            .find_map(|len| by_code.get(&rest[..len]).map(|&ch| (len, ch)));
        let Some((len, ch)) = hit else {
            return Err(ExerciseError::InvalidArgument("bit string matches no code"));
        };
        out.push(ch);
        rest = &rest[len..];
    }
    Ok(out)
}
