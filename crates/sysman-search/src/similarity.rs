//! Gestalt (Ratcliff/Obershelp) string similarity.
//!
//! The ratio is `2·M / (|a| + |b|)`, where `M` counts characters in matching blocks. Blocks are
//! found by taking the longest common run, then recursing into the unmatched text on either
//! side of it. Among equally long runs the one starting earliest in `a` wins, then earliest in
//! `b`. Lengths are counted in Unicode scalar values.

use std::mem;

/// Returns the similarity of `a` and `b` in `[0.0, 1.0]`.
///
/// Identical strings score 1.0, strings with no character in common score 0.0. Two empty
/// strings are identical.
pub fn similarity_ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }
    2.0 * matching_characters(&a, &b) as f64 / total as f64
}

/// Counts the characters covered by all matching blocks of `a` and `b`.
fn matching_characters(a: &[char], b: &[char]) -> usize {
    let mut matched = 0;
    let mut pending = vec![(0, a.len(), 0, b.len())];
    let mut rows = RowBuffers::default();

    while let Some((alo, ahi, blo, bhi)) = pending.pop() {
        let (i, j, size) = longest_match(a, b, (alo, ahi), (blo, bhi), &mut rows);
        if size == 0 {
            continue;
        }
        matched += size;
        if alo < i && blo < j {
            pending.push((alo, i, blo, j));
        }
        if i + size < ahi && j + size < bhi {
            pending.push((i + size, ahi, j + size, bhi));
        }
    }

    matched
}

/// Scratch rows for the longest-run dynamic program, reused across calls.
#[derive(Default)]
struct RowBuffers {
    /// Run lengths ending at the previous character of `a`.
    prev: Vec<usize>,
    /// Run lengths ending at the current character of `a`.
    cur: Vec<usize>,
}

/// Finds the longest common run of `a[alo..ahi]` and `b[blo..bhi]`.
///
/// Returns `(start_in_a, start_in_b, length)`; length 0 means no common character.
fn longest_match(
    a: &[char],
    b: &[char],
    (alo, ahi): (usize, usize),
    (blo, bhi): (usize, usize),
    rows: &mut RowBuffers,
) -> (usize, usize, usize) {
    let width = bhi - blo + 1;
    rows.prev.clear();
    rows.prev.resize(width, 0);

    let (mut best_i, mut best_j, mut best) = (alo, blo, 0);
    for i in alo..ahi {
        rows.cur.clear();
        rows.cur.resize(width, 0);
        for j in blo..bhi {
            if a[i] != b[j] {
                continue;
            }
            // Column `j - blo + 1` holds the run ending at b[j]; column `j - blo` the one
            // ending at b[j - 1].
            let run = rows.prev[j - blo] + 1;
            rows.cur[j - blo + 1] = run;
            if run > best {
                best_i = i + 1 - run;
                best_j = j + 1 - run;
                best = run;
            }
        }
        mem::swap(&mut rows.prev, &mut rows.cur);
    }

    (best_i, best_j, best)
}
