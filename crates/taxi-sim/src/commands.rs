//! Player commands: fleet purchases, servicing and game controls.
//!
//! Every command that spends money goes through [`Economy::try_spend`]
//! first; when it fails nothing else changes, and the refusal is both
//! logged and returned.
//!
//! [`Economy::try_spend`]: crate::Economy::try_spend

use taxi_core::TaxiId;
use taxi_world::{RouteGenerator, Weather};

use crate::{Sim, SimError, SimResult};

impl<R: RouteGenerator> Sim<R> {
    // ── Fleet ─────────────────────────────────────────────────────────────

    /// Buy a taxi and place it at a random position.
    pub fn buy_taxi(&mut self) -> SimResult<TaxiId> {
        if let Err(e) = self.economy.try_spend(self.config.taxi_price) {
            if e.is_insufficient_funds() {
                self.log_warning("Insufficient funds to purchase taxi");
            }
            return Err(e);
        }
        let id = self.add_taxi_at_random();
        let n = self.world.taxis().len();
        self.log_event(format!("New taxi purchased! Fleet size: {n}"));
        Ok(id)
    }

    /// Sell an idle taxi for the configured sale price.
    pub fn sell_taxi(&mut self, id: TaxiId) -> SimResult<()> {
        let taxi = self.world.taxi(id).ok_or(SimError::TaxiNotFound(id))?;
        if !taxi.is_idle() {
            return Err(SimError::TaxiBusy(id));
        }
        self.world.remove_taxi(id);
        self.economy.credit(self.config.taxi_sale_price);
        let price = self.config.taxi_sale_price;
        self.log_event(format!("Taxi {id} sold for ${price:.2}"));
        Ok(())
    }

    /// Service a taxi back to full health for its maintenance cost.
    pub fn maintenance_taxi(&mut self, id: TaxiId) -> SimResult<()> {
        let cost = self.world.taxi(id).ok_or(SimError::TaxiNotFound(id))?.maintenance_cost;
        if let Err(e) = self.economy.try_spend(cost) {
            if e.is_insufficient_funds() {
                self.log_warning(format!("Insufficient funds to service taxi {id}"));
            }
            return Err(e);
        }
        if let Some(taxi) = self.world.taxi_mut(id) {
            taxi.perform_maintenance();
        }
        self.log_event(format!("Taxi {id} maintenance completed"));
        Ok(())
    }

    /// Buy `amount` units of fuel (default from config) for a taxi.
    ///
    /// The full amount is paid even if the tank can't hold it all.  A taxi
    /// stranded mid-route by an empty tank resumes driving.
    pub fn refuel_taxi(&mut self, id: TaxiId, amount: Option<f64>) -> SimResult<()> {
        if self.world.taxi(id).is_none() {
            return Err(SimError::TaxiNotFound(id));
        }
        let amount = amount.unwrap_or(self.config.default_refuel_amount);
        if !amount.is_finite() || amount <= 0.0 {
            return Err(SimError::InvalidAmount(amount));
        }
        let cost = self.config.refuel_cost(amount);
        if let Err(e) = self.economy.try_spend(cost) {
            if e.is_insufficient_funds() {
                self.log_warning(format!("Insufficient funds to refuel taxi {id}"));
            }
            return Err(e);
        }
        if let Some(taxi) = self.world.taxi_mut(id) {
            taxi.refuel(amount);
            if taxi.has_passenger() {
                taxi.resume();
            }
        }
        self.log_event(format!("Taxi {id} refueled"));
        Ok(())
    }

    // ── Game controls ─────────────────────────────────────────────────────

    /// Toggle pause.  Returns the new paused state.
    pub fn pause_game(&mut self) -> bool {
        let paused = self.clock.toggle_pause();
        self.log_event(if paused { "Game paused" } else { "Game resumed" });
        paused
    }

    /// Set the clock multiplier, clamped to `[0.1, 5.0]`.  Returns the
    /// applied value.
    pub fn set_time_scale(&mut self, scale: f64) -> f64 {
        let applied = self.clock.set_time_scale(scale);
        self.log_event(format!("Game speed set to {applied}x"));
        applied
    }

    pub fn set_weather(&mut self, weather: Weather) {
        self.world.set_weather(weather);
        self.log_event(format!("Weather changed to {weather}"));
    }
}
