//! Read-only queries the match screen needs every render.

use crate::model::{MatchState, Player};

#[derive(Clone, Copy, Debug)]
pub struct MatchView<'a> {
    state: &'a MatchState,
}

impl<'a> MatchView<'a> {
    pub fn new(state: &'a MatchState) -> Self {
        Self { state }
    }

    pub fn current_player_index(&self) -> Option<usize> {
        self.state.turn_idx.filter(|&i| i < self.state.players.len())
    }

    pub fn current_player(&self) -> Option<&'a Player> {
        self.current_player_index().map(|i| &self.state.players[i])
    }

    /// Roster predecessor of the current player, wrapping. With no current
    /// player this is the last seat.
    pub fn previous_player(&self) -> Option<&'a Player> {
        let n = self.state.players.len();
        if n == 0 { return None; }
        let prev = match self.current_player_index() {
            Some(i) if i > 0 => i - 1,
            _ => n - 1,
        };
        self.state.players.get(prev)
    }

    pub fn winner(&self) -> Option<&'a Player> {
        self.state.players.iter().find(|p| p.is_winner())
    }

    pub fn is_finished(&self) -> bool {
        self.winner().is_some()
    }

    /// Undo is offered for the previous human thrower once they have thrown.
    pub fn can_undo(&self) -> bool {
        self.previous_player().is_some_and(|p| !p.is_bot && !p.turns.is_empty())
    }
}
