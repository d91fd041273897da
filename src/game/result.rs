//! Final outcome of a game.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

/// Result of a completed game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// Single highest score.
    Winner(PlayerId),
    /// Every seat finished level.
    Draw,
    /// Several, but not all, seats share the highest score.
    Winners(Vec<PlayerId>),
}

impl GameResult {
    /// Decide the result from final scores in seat order.
    #[must_use]
    pub fn from_scores(scores: &[(PlayerId, u32)]) -> Self {
        let best = scores.iter().map(|&(_, s)| s).max().unwrap_or(0);
        let leaders: Vec<PlayerId> = scores
            .iter()
            .filter(|&&(_, s)| s == best)
            .map(|&(p, _)| p)
            .collect();
        match leaders.as_slice() {
            [only] => GameResult::Winner(*only),
            _ if leaders.len() == scores.len() => GameResult::Draw,
            _ => GameResult::Winners(leaders),
        }
    }

    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        match self {
            GameResult::Winner(p) => *p == player,
            GameResult::Winners(ps) => ps.contains(&player),
            GameResult::Draw => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(i: u8) -> PlayerId {
        PlayerId::new(i)
    }

    #[test]
    fn test_single_winner() {
        let result = GameResult::from_scores(&[(p(0), 12), (p(1), 30), (p(2), 7)]);
        assert_eq!(result, GameResult::Winner(p(1)));
        assert!(result.is_winner(p(1)));
        assert!(!result.is_winner(p(0)));
    }

    #[test]
    fn test_shared_lead() {
        let result = GameResult::from_scores(&[(p(0), 30), (p(1), 30), (p(2), 7)]);
        assert_eq!(result, GameResult::Winners(vec![p(0), p(1)]));
        assert!(result.is_winner(p(0)));
        assert!(!result.is_winner(p(2)));
    }

    #[test]
    fn test_draw() {
        let result = GameResult::from_scores(&[(p(0), 9), (p(1), 9)]);
        assert_eq!(result, GameResult::Draw);
        assert!(!result.is_winner(p(0)));
    }

    #[test]
    fn test_solitaire_always_wins() {
        assert_eq!(GameResult::from_scores(&[(p(0), 0)]), GameResult::Winner(p(0)));
    }
}
