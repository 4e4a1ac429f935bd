use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::EngineError;

pub type PlayerId = String;

#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum BotDifficulty {
    Easy,
    #[default]
    Medium,
    Hard,
    Expert,
}

impl BotDifficulty {
    pub const ALL: [BotDifficulty; 4] = [Self::Easy, Self::Medium, Self::Hard, Self::Expert];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
            Self::Expert => "expert",
        }
    }
}

impl fmt::Display for BotDifficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BotDifficulty {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| EngineError::UnknownDifficulty(s.to_string()))
    }
}

/// Hit probabilities for one skill tier, each in `[0, 1]`.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct BotStats {
    pub accuracy: f64,
    pub treble_accuracy: f64,
    pub double_accuracy: f64,
    pub neighbor_hit_rate: f64,
}

#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum GameMode {
    #[default]
    RealPlayers,
    Bot,
}

impl GameMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::RealPlayers => "real-players",
            Self::Bot => "bot",
        }
    }
}

impl FromStr for GameMode {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "real-players" => Ok(Self::RealPlayers),
            "bot" => Ok(Self::Bot),
            _ => Err(EngineError::UnknownGameMode(s.to_string())),
        }
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Multiplier { Single, Double, Treble }

impl Multiplier {
    pub fn factor(self) -> u32 {
        match self { Self::Single => 1, Self::Double => 2, Self::Treble => 3 }
    }
}

/// One intended aim: a sector (1-20, or 25 for the bull) and a ring.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct DartTarget {
    pub value: u32,
    pub multiplier: Multiplier,
}

impl DartTarget {
    pub const fn single(value: u32) -> Self { Self { value, multiplier: Multiplier::Single } }
    pub const fn double(value: u32) -> Self { Self { value, multiplier: Multiplier::Double } }
    pub const fn treble(value: u32) -> Self { Self { value, multiplier: Multiplier::Treble } }

    pub fn points(&self) -> u32 {
        self.value * self.multiplier.factor()
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub score: u32,
    pub turns: Vec<u32>, // busts included
    pub is_bot: bool,
}

impl Player {
    pub fn is_winner(&self) -> bool {
        self.score == 0
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchState {
    pub mode: GameMode,
    pub players: Vec<Player>,
    /// Roster index of the player to throw; `None` until the match starts.
    pub turn_idx: Option<usize>,
    pub bot_difficulty: BotDifficulty,
}

impl MatchState {
    pub fn player(&self, id: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.players.iter().position(|p| p.id == id)
    }

    pub fn is_current(&self, id: &str) -> bool {
        self.turn_idx
            .and_then(|i| self.players.get(i))
            .is_some_and(|p| p.id == id)
    }

    pub fn has_winner(&self) -> bool {
        self.players.iter().any(Player::is_winner)
    }

    pub fn to_json(&self) -> Result<String, EngineError> {
        serde_json::to_string(self).map_err(|e| EngineError::Snapshot(e.to_string()))
    }

    pub fn from_json(raw: &str) -> Result<Self, EngineError> {
        serde_json::from_str(raw).map_err(|e| EngineError::Snapshot(e.to_string()))
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Action {
    SetPlayerName { player_id: PlayerId, name: String },
    StartGame,
    SubmitTurn { player_id: PlayerId, turn: u32 },
    DeleteLastTurn { player_id: PlayerId },
    ResetAndRestart,
    ResetToConfiguration,
    AddPlayer { is_bot: bool },
    RemovePlayer { index: usize },
    SetBotDifficulty(BotDifficulty),
}
