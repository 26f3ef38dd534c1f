//! Alignment victory rule
//!
//! A player wins when all of its units share a column or share a row. Once a
//! winner is recorded it is never re-decided.

use ahash::AHashSet;

use crate::core::types::{PlayerId, Position};
use crate::simulation::player::Player;

/// True if the positions share exactly one x or exactly one y
///
/// A single position trivially qualifies. An empty roster never does.
pub fn is_aligned(positions: impl IntoIterator<Item = Position>) -> bool {
    let mut xs = AHashSet::new();
    let mut ys = AHashSet::new();
    for pos in positions {
        xs.insert(pos.x);
        ys.insert(pos.y);
    }
    xs.len() == 1 || ys.len() == 1
}

/// Determine the winner after a tick
///
/// Returns `current` untouched when a winner already exists. Otherwise the
/// lowest-id aligned player wins and evaluation stops there.
pub fn evaluate(players: &[Player], current: Option<PlayerId>) -> Option<PlayerId> {
    if current.is_some() {
        return current;
    }

    players
        .iter()
        .find(|player| is_aligned(player.positions()))
        .map(Player::id)
}
