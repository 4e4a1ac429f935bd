use crate::{board::{self, BULL}, rules::is_bust, model::{Action, BotDifficulty, BotStats, DartTarget, MatchState, Multiplier}};
use rand::Rng;
use tracing::{debug, trace};

const DARTS_PER_TURN: usize = 3;

impl BotDifficulty {
    /// The only place skill varies by tier.
    pub fn stats(self) -> BotStats {
        match self {
            BotDifficulty::Easy => BotStats { accuracy: 0.45, treble_accuracy: 0.10, double_accuracy: 0.10, neighbor_hit_rate: 0.55 },
            BotDifficulty::Medium => BotStats { accuracy: 0.65, treble_accuracy: 0.25, double_accuracy: 0.22, neighbor_hit_rate: 0.40 },
            BotDifficulty::Hard => BotStats { accuracy: 0.80, treble_accuracy: 0.40, double_accuracy: 0.35, neighbor_hit_rate: 0.25 },
            BotDifficulty::Expert => BotStats { accuracy: 0.92, treble_accuracy: 0.60, double_accuracy: 0.50, neighbor_hit_rate: 0.12 },
        }
    }
}

/// Ideal aim for a remaining score. Same for every tier.
pub fn choose_target(remaining: u32) -> DartTarget {
    if remaining > 0 && remaining <= 40 && remaining % 2 == 0 {
        return DartTarget::double(remaining / 2);
    }
    if remaining == 50 {
        return DartTarget::double(BULL);
    }
    if remaining > 60 {
        return DartTarget::treble(20);
    }
    if remaining > 0 {
        // set up 40 (D20) or 32 (D16) with a single
        for leave in [40, 32] {
            if let Some(single) = remaining.checked_sub(leave).filter(|s| (1..=20).contains(s)) {
                return DartTarget::single(single);
            }
        }
        if remaining % 2 == 1 {
            return DartTarget::single(1);
        }
    }
    DartTarget::single(20)
}

/// Points scored by one dart aimed at `target`.
pub fn simulate_throw<R: Rng + ?Sized>(target: DartTarget, stats: &BotStats, rng: &mut R) -> u32 {
    let hit_rate = match target.multiplier {
        Multiplier::Treble => stats.treble_accuracy,
        Multiplier::Double => stats.double_accuracy,
        Multiplier::Single => stats.accuracy,
    };
    if rng.gen::<f64>() < hit_rate {
        return target.points();
    }
    if rng.gen::<f64>() < stats.neighbor_hit_rate {
        return match board::neighbors(target.value) {
            Some(adjacent) => adjacent[rng.gen_range(0..adjacent.len())],
            None => rng.gen_range(1..=20),
        };
    }
    target.value
}

/// Net score of a three-dart bot turn. Busts score 0, so the result is
/// always safe to submit as-is.
pub fn generate_bot_throw<R: Rng + ?Sized>(current_score: u32, difficulty: BotDifficulty, rng: &mut R) -> u32 {
    let stats = difficulty.stats();
    let mut temp_score = current_score;
    let mut turn_score = 0;
    for dart in 0..DARTS_PER_TURN {
        if temp_score == 0 { break; }
        let target = choose_target(temp_score);
        let thrown = simulate_throw(target, &stats, rng);
        trace!(dart, ?target, thrown, temp_score, "bot dart");
        if is_bust(temp_score, thrown) {
            debug!(%difficulty, current_score, "bot bust");
            return 0;
        }
        turn_score += thrown;
        temp_score -= thrown;
        if temp_score == 0 { break; }
    }
    turn_score
}

/// The `SubmitTurn` a bot would make now, if the player to throw is a bot
/// and the match is still live.
pub fn bot_turn<R: Rng + ?Sized>(state: &MatchState, rng: &mut R) -> Option<Action> {
    if state.has_winner() { return None; }
    let p = state.players.get(state.turn_idx?)?;
    if !p.is_bot { return None; }
    let turn = generate_bot_throw(p.score, state.bot_difficulty, rng);
    debug!(player = %p.id, score = p.score, turn, difficulty = %state.bot_difficulty, "bot turn");
    Some(Action::SubmitTurn { player_id: p.id.clone(), turn })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    const PERFECT: BotStats = BotStats { accuracy: 1.0, treble_accuracy: 1.0, double_accuracy: 1.0, neighbor_hit_rate: 0.0 };
    const NEAR_MISS: BotStats = BotStats { accuracy: 0.0, treble_accuracy: 0.0, double_accuracy: 0.0, neighbor_hit_rate: 0.0 };
    const ALWAYS_NEIGHBOR: BotStats = BotStats { accuracy: 0.0, treble_accuracy: 0.0, double_accuracy: 0.0, neighbor_hit_rate: 1.0 };

    #[test]
    fn targets() {
        assert_eq!(choose_target(40), DartTarget::double(20));
        assert_eq!(choose_target(2), DartTarget::double(1));
        assert_eq!(choose_target(50), DartTarget::double(25));
        assert_eq!(choose_target(501), DartTarget::treble(20));
        assert_eq!(choose_target(61), DartTarget::treble(20));
        assert_eq!(choose_target(60), DartTarget::single(20));
        assert_eq!(choose_target(41), DartTarget::single(1));
        assert_eq!(choose_target(57), DartTarget::single(17));
        assert_eq!(choose_target(39), DartTarget::single(7));
        assert_eq!(choose_target(33), DartTarget::single(1));
        assert_eq!(choose_target(31), DartTarget::single(1));
        assert_eq!(choose_target(3), DartTarget::single(1));
        assert_eq!(choose_target(0), DartTarget::single(20));
    }

    #[test]
    fn throw_outcomes() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(simulate_throw(DartTarget::treble(20), &PERFECT, &mut rng), 60);
        assert_eq!(simulate_throw(DartTarget::treble(20), &NEAR_MISS, &mut rng), 20);
        assert_eq!(simulate_throw(DartTarget::double(25), &NEAR_MISS, &mut rng), 25);
        for _ in 0..50 {
            let v = simulate_throw(DartTarget::treble(20), &ALWAYS_NEIGHBOR, &mut rng);
            assert!(v == 5 || v == 1, "got {v}");
        }
        for _ in 0..50 {
            let v = simulate_throw(DartTarget::single(30), &ALWAYS_NEIGHBOR, &mut rng);
            assert!((1..=20).contains(&v));
        }
    }

    #[test]
    fn checkout_returns_whole_score() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen_checkout = false;
        for _ in 0..200 {
            let v = generate_bot_throw(40, BotDifficulty::Expert, &mut rng);
            assert!(v <= 40 && 40 - v != 1, "got {v}");
            seen_checkout |= v == 40;
        }
        assert!(seen_checkout);
    }

    #[test]
    fn finished_score_throws_nothing() {
        let mut rng = StdRng::seed_from_u64(11);
        assert_eq!(generate_bot_throw(0, BotDifficulty::Easy, &mut rng), 0);
    }

    #[test]
    fn bot_turn_only_for_live_bot() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut state = crate::initial_state(crate::model::GameMode::Bot);
        assert_eq!(bot_turn(&state, &mut rng), None);
        state.turn_idx = Some(0);
        assert_eq!(bot_turn(&state, &mut rng), None);
        state.turn_idx = Some(1);
        match bot_turn(&state, &mut rng) {
            Some(Action::SubmitTurn { player_id, turn }) => {
                assert_eq!(player_id, "player-1");
                assert!(turn <= 180);
            }
            other => panic!("unexpected {other:?}"),
        }
        state.players[0].score = 0;
        assert_eq!(bot_turn(&state, &mut rng), None);
    }

    #[test]
    fn bot_turn_uses_state_difficulty() {
        let mut state = crate::initial_state(crate::model::GameMode::Bot);
        state.turn_idx = Some(1);
        let total = |difficulty| {
            let s = crate::apply(state.clone(), Action::SetBotDifficulty(difficulty));
            let mut rng = StdRng::seed_from_u64(99);
            (0..1000)
                .map(|_| match bot_turn(&s, &mut rng) {
                    Some(Action::SubmitTurn { turn, .. }) => turn,
                    other => panic!("unexpected {other:?}"),
                })
                .sum::<u32>()
        };
        let (easy, expert) = (total(BotDifficulty::Easy), total(BotDifficulty::Expert));
        assert!(easy < expert, "easy {easy} vs expert {expert}");
    }
}
