//! # Segmentation Lattice
//!
//! Per-encode working state: candidate edges bucketed by end position,
//! a forward max-score pass, and backward path reconstruction.

use crate::{trie::PrefixTrie, types::TokenType};

/// A candidate segmentation edge.
///
/// Covers the half-open scalar span `[start, start + len)`.
#[derive(Debug, Clone, Copy)]
struct LatticeEdge<T> {
    /// Start position, in scalar values.
    start: usize,

    /// Span length, in scalar values.
    len: usize,

    /// Log-probability score of the piece.
    score: f64,

    /// Vocabulary id of the piece.
    id: T,
}

/// The chosen edge ending at a position, after the forward pass.
///
/// The span length is recorded so the backward walk can step over
/// exactly the scalars the edge covered.
#[derive(Debug, Clone, Copy)]
struct BestStep<T> {
    /// Vocabulary id of the chosen edge.
    id: T,

    /// Span length of the chosen edge, in scalar values.
    len: usize,
}

/// Segmentation lattice over one normalized input.
///
/// Position `p` in `0..=len` is the boundary before scalar `p`;
/// `best[p]` is the max cumulative score of any segmentation reaching
/// `p`, or `None` while `p` is unreached. `best[0]` is `0.0`: the
/// empty segmentation. A score of `0.0` at a later position is a
/// genuine score, distinct from unreached.
#[derive(Debug)]
pub(crate) struct Lattice<T> {
    ends: Vec<Vec<LatticeEdge<T>>>,
    best: Vec<Option<f64>>,
    steps: Vec<Option<BestStep<T>>>,
}

impl<T: TokenType> Lattice<T> {
    /// Build the edge buckets for `chars` from trie prefix matches.
    ///
    /// Each bucket receives edges in ascending start order, and within
    /// one start in shortest-match-first order.
    pub fn build(
        trie: &PrefixTrie<T>,
        chars: &[char],
    ) -> Self {
        let len = chars.len();

        let mut ends: Vec<Vec<LatticeEdge<T>>> = vec![Vec::new(); len + 1];
        for start in 0..len {
            for m in trie.common_prefix_search(&chars[start..]) {
                ends[start + m.len].push(LatticeEdge {
                    start,
                    len: m.len,
                    score: m.score,
                    id: m.id,
                });
            }
        }

        let mut best = vec![None; len + 1];
        best[0] = Some(0.0);

        Self {
            ends,
            best,
            steps: vec![None; len + 1],
        }
    }

    /// Solve for the best-path token sequence.
    ///
    /// Runs the forward pass, reconstructs the path backward, merges
    /// runs of consecutive unknowns, and returns the tokens in input
    /// order.
    pub fn best_path(mut self) -> Vec<T> {
        self.forward();

        let mut tokens = self.backward();
        merge_unknown_runs(&mut tokens);
        tokens.reverse();
        tokens
    }

    /// Forward max-score pass over end positions, ascending.
    ///
    /// Edges departing an unreached start are dead and skipped.
    /// Ties go to the later-evaluated edge in bucket order.
    fn forward(&mut self) {
        let Self { ends, best, steps } = self;

        for end in 0..ends.len() {
            for edge in &ends[end] {
                let Some(base) = best[edge.start] else {
                    continue;
                };
                let candidate = base + edge.score;
                if best[end].is_none_or(|current| candidate >= current) {
                    best[end] = Some(candidate);
                    steps[end] = Some(BestStep {
                        id: edge.id,
                        len: edge.len,
                    });
                }
            }
        }
    }

    /// Walk the chosen edges from the final position back to 0.
    ///
    /// Returns tokens in reverse input order. The unknown fallback
    /// guarantees every suffix extends the reachable frontier, so the
    /// final position always carries a step for non-empty input.
    fn backward(&self) -> Vec<T> {
        let mut tokens = Vec::new();

        let mut pos = self.ends.len() - 1;
        while pos > 0 {
            let Some(step) = self.steps[pos] else {
                debug_assert!(false, "no step recorded at position {pos}");
                break;
            };
            tokens.push(step.id);
            pos -= step.len;
        }

        tokens
    }
}

/// Collapse each run of consecutive unknown (id 0) tokens to one.
fn merge_unknown_runs<T: TokenType>(tokens: &mut Vec<T>) {
    tokens.dedup_by(|a, b| a.is_zero() && b.is_zero());
}
