//! Money, score and level.

use crate::{SimError, SimResult};

/// The player's purse and progress.
///
/// Money only leaves through [`Economy::try_spend`], which refuses any spend
/// it cannot cover in full.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Economy {
    money: f64,
    score: u64,
    level: u32,
}

impl Economy {
    pub fn new(starting_money: f64) -> Self {
        Self {
            money: starting_money,
            score: 0,
            level: 1,
        }
    }

    #[inline]
    pub fn money(&self) -> f64 {
        self.money
    }

    #[inline]
    pub fn score(&self) -> u64 {
        self.score
    }

    #[inline]
    pub fn level(&self) -> u32 {
        self.level
    }

    #[inline]
    pub fn can_afford(&self, cost: f64) -> bool {
        self.money >= cost
    }

    /// Deduct `cost`, or change nothing and report the shortfall.
    pub fn try_spend(&mut self, cost: f64) -> SimResult<()> {
        if !cost.is_finite() || cost < 0.0 {
            return Err(SimError::InvalidAmount(cost));
        }
        if !self.can_afford(cost) {
            return Err(SimError::InsufficientFunds {
                required:  cost,
                available: self.money,
            });
        }
        self.money -= cost;
        Ok(())
    }

    /// Add income.  Non-positive amounts are ignored.
    pub fn credit(&mut self, amount: f64) {
        if amount > 0.0 {
            self.money += amount;
        }
    }

    pub fn add_score(&mut self, points: u64) {
        self.score = self.score.saturating_add(points);
    }

    /// Go up one level if score has passed `level * step` and `max_level`
    /// isn't reached yet.  Returns `true` on a level-up.
    pub fn try_level_up(&mut self, step: u64, max_level: u32) -> bool {
        let threshold = u64::from(self.level).saturating_mul(step);
        if self.score > threshold && self.level < max_level {
            self.level += 1;
            return true;
        }
        false
    }
}
