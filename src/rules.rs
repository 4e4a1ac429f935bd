use crate::error::EngineError;

pub const STARTING_SCORE: u32 = 501;
pub const MAX_TURN_SCORE: u32 = 180;
pub const MIN_PLAYERS: usize = 2;
pub const MAX_PLAYERS: usize = 6;

/// Score left after throwing `turn` from `score`, or `None` on a bust.
/// Leaving exactly 1 is a bust because it can never be finished on a double.
#[inline]
pub fn score_after(score: u32, turn: u32) -> Option<u32> {
    match score.checked_sub(turn) {
        None | Some(1) => None,
        after => after,
    }
}

#[inline]
pub fn is_bust(score: u32, turn: u32) -> bool {
    score_after(score, turn).is_none()
}

/// Validates a typed turn total: digits only, 0..=180.
pub fn parse_turn_input(raw: &str) -> Result<u32, EngineError> {
    let trimmed = raw.trim();
    let value: u32 = trimmed
        .parse()
        .map_err(|_| EngineError::InvalidTurnInput(raw.to_string()))?;
    if value > MAX_TURN_SCORE {
        return Err(EngineError::TurnOutOfRange(value));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bust_below_zero_and_on_one() {
        assert_eq!(score_after(41, 40), None);
        assert_eq!(score_after(20, 21), None);
        assert_eq!(score_after(50, 50), Some(0));
        assert_eq!(score_after(501, 60), Some(441));
        assert!(is_bust(2, 1));
        assert!(!is_bust(2, 2));
    }

    #[test]
    fn turn_input_boundary() {
        assert_eq!(parse_turn_input("0"), Ok(0));
        assert_eq!(parse_turn_input(" 180\n"), Ok(180));
        assert_eq!(parse_turn_input("181"), Err(EngineError::TurnOutOfRange(181)));
        assert!(matches!(parse_turn_input(""), Err(EngineError::InvalidTurnInput(_))));
        assert!(matches!(parse_turn_input("-5"), Err(EngineError::InvalidTurnInput(_))));
        assert!(matches!(parse_turn_input("6o"), Err(EngineError::InvalidTurnInput(_))));
    }
}
