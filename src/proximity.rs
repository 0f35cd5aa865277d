//! Closeness of tracked tokens to an anchor token.
//!
//! A tracked occurrence and an anchor occurrence are "close" when their
//! positions differ by at most the window. Every such pair counts once, so a
//! single occurrence between two nearby anchors scores twice.

use crate::position::{Position, PositionIndex};
use crate::token::Token;
use serde::Serialize;
use std::fmt;

/// Token distance used when none is configured.
pub const DEFAULT_WINDOW: usize = 42;

/// Closeness of one tracked token to the anchor.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProximityResult {
    pub token: Token,
    pub occurrences: usize,
    pub proximity_count: usize,
    pub closeness_factor: f64,
}

impl fmt::Display for ProximityResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}, {}] close to anchor {} closeness factor {:.4}",
            self.token, self.occurrences, self.proximity_count, self.closeness_factor
        )
    }
}

/// Scores every tracked token that occurs at least once.
///
/// Results are ordered by closeness factor descending. Equal factors keep the
/// order in which tokens appear in `tracked`.
pub fn compute(index: &PositionIndex, tracked: &[Token], window: usize) -> Vec<ProximityResult> {
    let anchors = index.anchor_positions();

    let mut results: Vec<_> = tracked
        .iter()
        .filter_map(|token| {
            let positions = index.positions(token).filter(|p| !p.is_empty())?;
            let proximity_count = count_within(anchors, positions, window);
            Some(ProximityResult {
                token: token.clone(),
                occurrences: positions.len(),
                proximity_count,
                closeness_factor: proximity_count as f64 / positions.len() as f64,
            })
        })
        .collect();

    // Stable, so ties stay in tracked order.
    results.sort_by(|a, b| b.closeness_factor.total_cmp(&a.closeness_factor));
    results
}

/// Counts `(position, anchor)` pairs with `|position - anchor| <= window`.
///
/// `anchors` must be ascending, which [`PositionIndex`] guarantees. Each
/// position is answered with two binary searches instead of a scan over all
/// anchors; the pair count is the same.
pub fn count_within(anchors: &[Position], positions: &[Position], window: usize) -> usize {
    positions
        .iter()
        .map(|&position| {
            let low = position.saturating_sub(window);
            let high = position.saturating_add(window);
            let start = anchors.partition_point(|&anchor| anchor < low);
            let end = anchors.partition_point(|&anchor| anchor <= high);
            end - start
        })
        .sum()
}
