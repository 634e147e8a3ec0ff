use crate::config::{POINTS_PER_ANSWER, STARS_PER_ANSWER};

/// Acumulador de puntos, estrellas y monedas. No hay forma de gastar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RewardLedger {
    pub total_score: u32,
    pub stars: u32,
    pub coins: u32,
    points_per_answer: u32,
    stars_per_answer: u32,
}

impl Default for RewardLedger {
    fn default() -> Self {
        Self::new(POINTS_PER_ANSWER, STARS_PER_ANSWER)
    }
}

impl RewardLedger {
    pub fn new(points_per_answer: u32, stars_per_answer: u32) -> Self {
        Self {
            total_score: 0,
            stars: 0,
            coins: 0,
            points_per_answer,
            stars_per_answer,
        }
    }

    pub fn award_correct_answer(&mut self, coins: u32) {
        self.total_score = self.total_score.saturating_add(self.points_per_answer);
        self.stars = self.stars.saturating_add(self.stars_per_answer);
        self.coins = self.coins.saturating_add(coins);
    }
}
