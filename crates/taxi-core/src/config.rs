//! Game configuration.
//!
//! `GameConfig::default()` reproduces the classic taxi game's balance.
//! Applications may load a config from JSON (with the `serde` feature) and
//! pass it to the simulation builder, which calls [`GameConfig::validate`].

use crate::{CoreError, CoreResult};

/// Every tunable of one game.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// Money at game start and after a reset.
    pub starting_money: f64,

    /// Taxis placed at random positions by `init_game`.
    pub initial_taxis: usize,

    /// Price of one new taxi.
    pub taxi_price: f64,

    /// Fixed payout for selling an idle taxi.
    pub taxi_sale_price: f64,

    /// Price per unit of fuel.
    pub fuel_price: f64,

    /// Fuel added when a refuel doesn't name an amount.
    pub default_refuel_amount: f64,

    /// Approximate simulated seconds between passenger spawns.
    pub spawn_interval_secs: f64,

    /// Level `n` is left once score exceeds `n * level_score_step`.
    pub level_score_step: u64,

    /// Highest reachable level.
    pub max_level: u32,

    /// Number of entries the event log keeps before evicting the oldest.
    pub event_log_capacity: usize,

    /// Map width in distance units.
    pub map_width: f64,

    /// Map height in distance units.
    pub map_height: f64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed:                  42,
            starting_money:        5000.0,
            initial_taxis:         3,
            taxi_price:            3000.0,
            taxi_sale_price:       2000.0,
            fuel_price:            0.5,
            default_refuel_amount: 50.0,
            spawn_interval_secs:   10.0,
            level_score_step:      5000,
            max_level:             50,
            event_log_capacity:    50,
            map_width:             800.0,
            map_height:            600.0,
        }
    }
}

impl GameConfig {
    /// Reject configurations the simulation cannot run with.
    pub fn validate(&self) -> CoreResult<()> {
        let non_negative = [
            ("starting_money", self.starting_money),
            ("taxi_price", self.taxi_price),
            ("taxi_sale_price", self.taxi_sale_price),
            ("fuel_price", self.fuel_price),
            ("default_refuel_amount", self.default_refuel_amount),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(CoreError::Config(format!(
                    "{name} must be a finite non-negative number, got {value}"
                )));
            }
        }
        if !(self.spawn_interval_secs.is_finite() && self.spawn_interval_secs > 0.0) {
            return Err(CoreError::Config(format!(
                "spawn_interval_secs must be positive, got {}",
                self.spawn_interval_secs
            )));
        }
        if !(self.map_width > 0.0 && self.map_height > 0.0)
            || !self.map_width.is_finite()
            || !self.map_height.is_finite()
        {
            return Err(CoreError::Config(format!(
                "map must have a positive size, got {}x{}",
                self.map_width, self.map_height
            )));
        }
        if self.max_level == 0 {
            return Err(CoreError::Config("max_level must be at least 1".into()));
        }
        if self.level_score_step == 0 {
            return Err(CoreError::Config("level_score_step must be at least 1".into()));
        }
        if self.event_log_capacity == 0 {
            return Err(CoreError::Config("event_log_capacity must be at least 1".into()));
        }
        Ok(())
    }

    /// Cost of buying `amount` units of fuel.
    #[inline]
    pub fn refuel_cost(&self, amount: f64) -> f64 {
        amount * self.fuel_price
    }
}
