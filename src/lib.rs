pub mod board;
pub mod bot;
pub mod config;
pub mod error;
pub mod model;
pub mod rules;
pub mod view;

pub use error::EngineError;
pub use model::*;

use rules::{score_after, MAX_PLAYERS, MAX_TURN_SCORE, MIN_PLAYERS, STARTING_SCORE};
use tracing::{debug, warn};

/// Fresh player for roster slot `index`. Humans count from 1, bots from
/// their slot index.
pub fn new_player(index: usize, is_bot: bool) -> Player {
    Player {
        id: format!("player-{index}"),
        name: if is_bot { format!("Bot {index}") } else { format!("Player {}", index + 1) },
        score: STARTING_SCORE,
        turns: vec![],
        is_bot,
    }
}

fn fresh_roster(mode: GameMode) -> Vec<Player> {
    match mode {
        GameMode::RealPlayers => vec![new_player(0, false), new_player(1, false)],
        GameMode::Bot => vec![new_player(0, false), new_player(1, true)],
    }
}

/// Unstarted match with the default roster for `mode`.
pub fn initial_state(mode: GameMode) -> MatchState {
    MatchState { mode, players: fresh_roster(mode), turn_idx: None, bot_difficulty: BotDifficulty::default() }
}

// lowest `player-<n>` not already taken
fn free_slot_index(players: &[Player]) -> usize {
    (0..).find(|i| !players.iter().any(|p| p.id == format!("player-{i}"))).unwrap_or(players.len())
}

/// Applies one action. Total: actions that cannot be carried out leave the
/// state unchanged.
pub fn apply(mut state: MatchState, action: Action) -> MatchState {
    match action {
        Action::SetPlayerName { player_id, name } => {
            match state.players.iter_mut().find(|p| p.id == player_id) {
                Some(p) => p.name = name,
                None => warn!(%player_id, "rename for unknown player"),
            }
        }
        Action::StartGame => {
            state.turn_idx = if state.players.is_empty() { None } else { Some(0) };
        }
        Action::SubmitTurn { player_id, turn } => submit_turn(&mut state, &player_id, turn),
        Action::DeleteLastTurn { player_id } => delete_last_turn(&mut state, &player_id),
        Action::ResetAndRestart => {
            let n = state.players.len();
            for p in &mut state.players {
                p.turns.clear();
                p.score = STARTING_SCORE;
            }
            // rematches rotate who throws first
            state.turn_idx = if n == 0 { None } else { Some(state.turn_idx.map_or(0, |i| (i + 1) % n)) };
            debug!(first = ?state.turn_idx, "match restarted");
        }
        Action::ResetToConfiguration => {
            state.players = fresh_roster(state.mode);
            state.turn_idx = Some(0);
            debug!(mode = state.mode.as_str(), "roster reset");
        }
        Action::AddPlayer { is_bot } => {
            if state.players.len() < MAX_PLAYERS {
                let index = free_slot_index(&state.players);
                state.players.push(new_player(index, is_bot));
            }
        }
        Action::RemovePlayer { index } => {
            if state.players.len() > MIN_PLAYERS && index < state.players.len() {
                state.players.remove(index);
                let n = state.players.len();
                state.turn_idx = state.turn_idx.map(|cur| match cur {
                    c if c > index => c - 1,
                    c => c % n,
                });
            }
        }
        Action::SetBotDifficulty(difficulty) => state.bot_difficulty = difficulty,
    }
    state
}

fn submit_turn(state: &mut MatchState, player_id: &str, turn: u32) {
    let Some(idx) = state.index_of(player_id) else {
        warn!(%player_id, turn, "turn for unknown player ignored");
        return;
    };
    let p = &mut state.players[idx];
    match score_after(p.score, turn) {
        Some(after) => p.score = after,
        None => debug!(%player_id, score = p.score, turn, "bust"),
    }
    p.turns.push(turn);
    if state.has_winner() {
        debug!(%player_id, "leg won");
    } else {
        state.turn_idx = Some((idx + 1) % state.players.len());
    }
}

fn delete_last_turn(state: &mut MatchState, player_id: &str) {
    let Some(idx) = state.index_of(player_id) else {
        warn!(%player_id, "undo for unknown player ignored");
        return;
    };
    let p = &mut state.players[idx];
    let Some(undone) = p.turns.pop() else { return };
    p.score += undone;
    state.turn_idx = Some(idx);
    debug!(%player_id, undone, score = p.score, "turn undone");
}

/// Checked form of [`apply`]: rejects caller contract violations instead of
/// ignoring them.
pub fn try_apply(state: MatchState, action: Action) -> Result<MatchState, EngineError> {
    validate(&state, &action)?;
    Ok(apply(state, action))
}

fn validate(state: &MatchState, action: &Action) -> Result<(), EngineError> {
    let known = |id: &str| state.player(id).map(|_| ()).ok_or_else(|| EngineError::UnknownPlayer(id.to_string()));
    match action {
        Action::SetPlayerName { player_id, .. } | Action::DeleteLastTurn { player_id } => known(player_id),
        Action::StartGame if state.players.len() < MIN_PLAYERS => Err(EngineError::RosterTooSmall { min: MIN_PLAYERS }),
        Action::SubmitTurn { player_id, turn } => {
            known(player_id)?;
            if *turn > MAX_TURN_SCORE {
                return Err(EngineError::TurnOutOfRange(*turn));
            }
            if let Some(w) = state.players.iter().find(|p| p.is_winner()) {
                return Err(EngineError::MatchFinished(w.id.clone()));
            }
            let current = state.turn_idx.and_then(|i| state.players.get(i)).ok_or(EngineError::MatchNotStarted)?;
            if current.id != *player_id {
                return Err(EngineError::NotPlayersTurn { player_id: player_id.clone(), current: current.id.clone() });
            }
            Ok(())
        }
        Action::AddPlayer { .. } if state.players.len() >= MAX_PLAYERS => Err(EngineError::RosterFull { max: MAX_PLAYERS }),
        Action::RemovePlayer { index } if *index >= state.players.len() => {
            Err(EngineError::SlotOutOfRange { index: *index, len: state.players.len() })
        }
        Action::RemovePlayer { .. } if state.players.len() <= MIN_PLAYERS => Err(EngineError::RosterTooSmall { min: MIN_PLAYERS }),
        _ => Ok(()),
    }
}
