//! Token positions within a corpus.

use crate::token::Token;
use ahash::AHashMap;

/// 1-based ordinal of a token in the corpus stream.
pub type Position = usize;

/// Where the anchor token and each tracked token occur.
///
/// Position lists are filled in a single forward scan, so each list is in
/// ascending order.
#[derive(Debug, Default, Clone)]
pub struct PositionIndex {
    anchor_positions: Vec<Position>,
    positions_by_token: AHashMap<Token, Vec<Position>>,
}

impl PositionIndex {
    /// Scans `tokens` once, recording anchor and tracked positions.
    ///
    /// Every token advances the position counter, tracked or not, including
    /// the empty tokens of a raw stream. A token equal to `anchor` is never
    /// recorded as tracked even if `is_tracked` accepts it.
    pub fn index_stream<'a, F>(
        tokens: impl IntoIterator<Item = &'a Token>,
        anchor: &Token,
        is_tracked: F,
    ) -> Self
    where
        F: Fn(&Token) -> bool,
    {
        let mut index = Self::default();

        for (offset, token) in tokens.into_iter().enumerate() {
            let position = offset + 1;
            if token == anchor {
                index.anchor_positions.push(position);
            } else if is_tracked(token) {
                index
                    .positions_by_token
                    .entry(token.clone())
                    .or_default()
                    .push(position);
            }
        }

        tracing::debug!(
            "Indexed {} anchor positions and {} tracked tokens",
            index.anchor_positions.len(),
            index.positions_by_token.len()
        );
        index
    }

    pub fn anchor_positions(&self) -> &[Position] {
        &self.anchor_positions
    }

    /// Positions of `token`, or `None` if it was never seen.
    pub fn positions(&self, token: &Token) -> Option<&[Position]> {
        self.positions_by_token.get(token).map(Vec::as_slice)
    }

    /// Number of distinct tracked tokens that were seen at least once.
    pub fn tracked_seen(&self) -> usize {
        self.positions_by_token.len()
    }
}
