//! Match setup: JSON config with environment overrides.
//!
//! Reads `DARTS_GAME_MODE`, `DARTS_BOT_DIFFICULTY` and `DARTS_BOT_SEED`.

use rand::{rngs::StdRng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::EngineError;
use crate::model::{Action, BotDifficulty, GameMode, MatchState};
use crate::rules::{MAX_PLAYERS, MIN_PLAYERS};
use crate::{apply, initial_state};

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct MatchConfig {
    pub mode: GameMode,
    pub bot_difficulty: BotDifficulty,
    /// Names by roster slot; missing slots keep their default name. More
    /// names than the mode's roster add human players.
    pub player_names: Vec<String>,
    pub bot_seed: Option<u64>,
}

impl MatchConfig {
    pub fn from_json(raw: &str) -> Result<Self, EngineError> {
        let cfg: Self = serde_json::from_str(raw).map_err(|e| EngineError::Config(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_env() -> Result<Self, EngineError> {
        Self::default().with_env_overrides()
    }

    /// Applies any `DARTS_*` variables on top of `self`.
    pub fn with_env_overrides(self) -> Result<Self, EngineError> {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<Self, EngineError> {
        if let Some(mode) = lookup("DARTS_GAME_MODE") {
            self.mode = mode.parse()?;
        }
        if let Some(d) = lookup("DARTS_BOT_DIFFICULTY") {
            self.bot_difficulty = d.parse()?;
        }
        if let Some(seed) = lookup("DARTS_BOT_SEED") {
            let parsed = seed.trim().parse().map_err(|_| EngineError::Config(format!("DARTS_BOT_SEED={seed:?} is not a u64")))?;
            self.bot_seed = Some(parsed);
        }
        debug!(mode = self.mode.as_str(), difficulty = %self.bot_difficulty, seed = ?self.bot_seed, "match config");
        Ok(self)
    }

    fn validate(&self) -> Result<(), EngineError> {
        if self.player_names.len() > MAX_PLAYERS {
            return Err(EngineError::RosterFull { max: MAX_PLAYERS });
        }
        Ok(())
    }

    /// Unstarted match for this config.
    pub fn initial_state(&self) -> MatchState {
        let mut state = apply(initial_state(self.mode), Action::SetBotDifficulty(self.bot_difficulty));
        while state.players.len() < self.player_names.len().clamp(MIN_PLAYERS, MAX_PLAYERS) {
            state = apply(state, Action::AddPlayer { is_bot: false });
        }
        for (i, name) in self.player_names.iter().enumerate().take(state.players.len()) {
            let player_id = state.players[i].id.clone();
            state = apply(state, Action::SetPlayerName { player_id, name: name.clone() });
        }
        state
    }

    /// Generator for bot turns, seeded when `bot_seed` is set.
    pub fn bot_rng(&self) -> StdRng {
        match self.bot_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}
