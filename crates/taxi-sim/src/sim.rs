//! The `Sim` struct and its tick loop.

use taxi_core::{GameClock, GameConfig, PassengerId, SimRng, StationId, TaxiId};
use taxi_demand::{Passenger, WaitStatus};
use taxi_fleet::Taxi;
use taxi_world::{InterpolatedRouter, RouteGenerator, World};
use tracing::{debug, info, warn};

use crate::{
    Economy, EventLog, EventLogEntry, GameStatus, SimError, SimObserver, SimResult, Statistics,
};

/// Maintenance lost per second of frame delta.
pub const MAINTENANCE_DECAY_PER_SEC: f64 = 0.5;

// ── Sim ───────────────────────────────────────────────────────────────────────

/// One self-contained game.
///
/// `Sim` owns every piece of mutable state: clock, purse, world, statistics,
/// event log and RNG.  Nothing is global, so any number of independent games
/// can run side by side.  The host drives it by calling [`update`] (or
/// [`step`] with an observer) with the elapsed frame time; the simulation
/// never schedules itself.
///
/// Each [`update`] runs, in order:
///
/// 1. **Clock**: skip everything if paused, otherwise advance game time by
///    `delta * time_scale`.
/// 2. **Ambient**: derive day/night, resample traffic.
/// 3. **Taxis**: move, settle arrivals, wear, stop on an empty tank.
/// 4. **Passengers**: drain satisfaction, remove those who give up.
/// 5. **Spawn**: roughly every `spawn_interval_secs` of game time.
/// 6. **Progress**: refresh statistics, maybe level up.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
///
/// [`update`]: Sim::update
/// [`step`]: Sim::step
pub struct Sim<R: RouteGenerator = InterpolatedRouter> {
    pub(crate) config:  GameConfig,
    pub(crate) clock:   GameClock,
    pub(crate) economy: Economy,
    pub(crate) world:   World<R>,
    pub(crate) stats:   Statistics,
    pub(crate) log:     EventLog,
    pub(crate) rng:     SimRng,

    pub(crate) next_taxi_id:      TaxiId,
    pub(crate) next_passenger_id: PassengerId,

    /// Entries logged during the current [`step`](Sim::step), kept even if
    /// the bounded log has already evicted them.
    pub(crate) tick_events: Option<Vec<EventLogEntry>>,
}

impl<R: RouteGenerator> Sim<R> {
    pub(crate) fn from_parts(config: GameConfig, world: World<R>) -> Self {
        Self {
            clock:             GameClock::new(),
            economy:           Economy::new(config.starting_money),
            stats:             Statistics::default(),
            log:               EventLog::new(config.event_log_capacity),
            rng:               SimRng::new(config.seed),
            next_taxi_id:      TaxiId(0),
            next_passenger_id: PassengerId(0),
            tick_events:       None,
            world,
            config,
        }
    }

    // ── Read access ───────────────────────────────────────────────────────

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn clock(&self) -> &GameClock {
        &self.clock
    }

    pub fn economy(&self) -> &Economy {
        &self.economy
    }

    /// Read-only view of the map, fleet and demand.
    pub fn world(&self) -> &World<R> {
        &self.world
    }

    pub fn stats(&self) -> &Statistics {
        &self.stats
    }

    pub fn event_log(&self) -> &EventLog {
        &self.log
    }

    pub fn taxi(&self, id: TaxiId) -> Option<&Taxi> {
        self.world.taxi(id)
    }

    pub fn passenger(&self, id: PassengerId) -> Option<&Passenger> {
        self.world.passenger(id)
    }

    /// Detached snapshot of the game's headline numbers.
    pub fn game_status(&self) -> GameStatus {
        GameStatus {
            money:              self.economy.money(),
            score:              self.economy.score(),
            level:              self.economy.level(),
            game_time:          self.clock.to_string(),
            game_time_secs:     self.clock.game_time,
            time_scale:         self.clock.time_scale,
            taxis:              self.world.taxis().len(),
            passengers:         self.world.passengers().len(),
            waiting_passengers: self.world.waiting_passengers().count(),
            is_paused:          self.clock.paused,
            stats:              self.stats.clone(),
            weather:            self.world.weather,
            day_night:          self.world.day_night,
            traffic_level:      (self.world.traffic_level * 10.0).round() / 10.0,
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────────────────

    /// Start a fresh game: clear everything and place the starting fleet.
    pub fn init_game(&mut self) {
        self.reset_state();
        for _ in 0..self.config.initial_taxis {
            self.add_taxi_at_random();
        }
        let n = self.world.taxis().len();
        self.log_event(format!("Game started with {n} taxis"));
    }

    /// Clear clock, purse, world, statistics and log.  The fleet is empty
    /// afterwards; call [`init_game`](Self::init_game) for a starting fleet.
    pub fn reset_game(&mut self) {
        self.reset_state();
        self.log_event("Game reset");
    }

    fn reset_state(&mut self) {
        self.clock = GameClock::new();
        self.economy = Economy::new(self.config.starting_money);
        self.world.clear();
        self.stats = Statistics::default();
        self.log.clear();
        self.next_taxi_id = TaxiId(0);
        self.next_passenger_id = PassengerId(0);
    }

    // ── Tick loop ─────────────────────────────────────────────────────────

    /// Advance the simulation by `delta_secs` of frame time.
    ///
    /// A no-op while paused.  Negative or non-finite deltas are ignored.
    pub fn update(&mut self, delta_secs: f64) {
        if self.clock.paused {
            return;
        }
        if !delta_secs.is_finite() || delta_secs < 0.0 {
            warn!(delta_secs, "ignoring invalid frame delta");
            return;
        }

        self.clock.advance(delta_secs);
        let now = self.clock.game_time;

        self.world.set_day_night(now);
        self.world.update_traffic(&mut self.rng);

        self.update_taxis(delta_secs);
        self.update_passengers(delta_secs);

        if self.clock.crossed_interval(self.config.spawn_interval_secs, delta_secs) {
            self.spawn_passenger();
        }

        self.update_game_stats();

        debug!(
            game_time = now,
            taxis = self.world.taxis().len(),
            passengers = self.world.passengers().len(),
            money = self.economy.money(),
            "tick"
        );
    }

    /// [`update`](Self::update), then report the tick to `observer`.
    pub fn step<O: SimObserver>(&mut self, delta_secs: f64, observer: &mut O) {
        self.tick_events = Some(Vec::new());
        self.update(delta_secs);

        let fresh = self.tick_events.take().unwrap_or_default();
        if !fresh.is_empty() {
            observer.on_events(&fresh);
        }
        let status = self.game_status();
        observer.on_tick_end(&status, self.world.taxis(), self.world.passengers());
    }

    /// Call [`step`](Self::step) `n` times with a fixed delta, then
    /// [`SimObserver::on_run_end`].
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, delta_secs: f64, observer: &mut O) {
        for _ in 0..n {
            self.step(delta_secs, observer);
        }
        observer.on_run_end(&self.game_status());
    }

    fn update_taxis(&mut self, delta_secs: f64) {
        for i in 0..self.world.taxis().len() {
            let taxi = &mut self.world.taxis_mut()[i];
            let id = taxi.id;

            let mut arrived = false;
            if taxi.is_moving() {
                let odometer = taxi.distance_travelled();
                arrived = taxi.move_towards_destination(delta_secs) && taxi.has_passenger();
                self.stats.total_distance += taxi.distance_travelled() - odometer;
            }
            if arrived {
                self.complete_trip(id);
            }

            let taxi = &mut self.world.taxis_mut()[i];
            taxi.wear(MAINTENANCE_DECAY_PER_SEC * delta_secs);

            if taxi.fuel() <= 0.0 && taxi.is_moving() {
                taxi.stop();
                self.log_warning(format!("Taxi {id} out of fuel!"));
            }
        }
    }

    fn update_passengers(&mut self, delta_secs: f64) {
        let left: Vec<PassengerId> = self
            .world
            .passengers_mut()
            .iter_mut()
            .filter_map(|p| (p.update_wait_time(delta_secs) == WaitStatus::Left).then_some(p.id))
            .collect();

        for id in left {
            self.world.remove_passenger(id);
            self.stats.passengers_lost += 1;
            self.log_event(format!("Passenger {id} left due to wait time"));
        }
    }

    fn update_game_stats(&mut self) {
        self.stats.refresh();
        if self.economy.try_level_up(self.config.level_score_step, self.config.max_level) {
            let level = self.economy.level();
            self.log_event(format!("Level up! Now level {level}"));
        }
    }

    // ── Demand ────────────────────────────────────────────────────────────

    /// Spawn a passenger between two distinct random stations.
    pub fn spawn_passenger(&mut self) -> Option<PassengerId> {
        let (pickup, dropoff) = self.world.random_station_pair(&mut self.rng)?;
        self.spawn_passenger_between(pickup, dropoff).ok()
    }

    /// Spawn a passenger waiting at `pickup` bound for `dropoff`.
    pub fn spawn_passenger_between(
        &mut self,
        pickup:  StationId,
        dropoff: StationId,
    ) -> SimResult<PassengerId> {
        if pickup == dropoff {
            return Err(SimError::SameStation(pickup));
        }
        let from = self.world.station(pickup).ok_or(SimError::StationNotFound(pickup))?;
        let to = self.world.station(dropoff).ok_or(SimError::StationNotFound(dropoff))?;

        let id = self.next_passenger_id;
        let passenger =
            Passenger::new(id, from.position, to.position).between_stations(pickup, dropoff);
        let message = format!("Passenger waiting at {}", from.name);

        self.next_passenger_id = id.next();
        self.world.add_passenger(passenger);
        self.stats.passengers_spawned += 1;
        self.log_event(message);
        Ok(id)
    }

    // ── Dispatch ──────────────────────────────────────────────────────────

    /// Send an idle taxi to a waiting passenger.
    ///
    /// The taxi drives to the pickup, then on to the drop-off, holding the
    /// passenger's payment until arrival.  On any error nothing changes.
    pub fn assign_taxi_to_passenger(
        &mut self,
        taxi_id:      TaxiId,
        passenger_id: PassengerId,
    ) -> SimResult<()> {
        let taxi = self.world.taxi(taxi_id).ok_or(SimError::TaxiNotFound(taxi_id))?;
        let passenger = self
            .world
            .passenger(passenger_id)
            .ok_or(SimError::PassengerNotFound(passenger_id))?;
        if taxi.has_passenger() {
            return Err(SimError::TaxiBusy(taxi_id));
        }
        if taxi.fuel() <= 0.0 {
            return Err(SimError::OutOfFuel(taxi_id));
        }
        if !passenger.is_waiting() {
            return Err(SimError::PassengerNotWaiting(passenger_id));
        }

        let route = self
            .world
            .generate_route(taxi.position, passenger.pickup)
            .then(self.world.generate_route(passenger.pickup, passenger.dropoff));
        let payment = passenger.total_payment();

        if let Some(p) = self.world.passenger_mut(passenger_id) {
            p.pick_up();
        }
        if let Some(t) = self.world.taxi_mut(taxi_id) {
            t.begin_trip(passenger_id, payment, route);
        }
        self.stats.trip_started();
        self.log_event(format!("Taxi {taxi_id} assigned to passenger {passenger_id}"));
        Ok(())
    }

    /// Settle a taxi that reached the end of its route.
    ///
    /// The passenger is dropped off (deciding the tip) and removed; any
    /// pending payment is credited.  The taxi's trip state is cleared and the
    /// in-progress count decremented whether or not anything was owed.
    fn complete_trip(&mut self, taxi_id: TaxiId) {
        let Some(passenger_id) = self.world.taxi(taxi_id).and_then(Taxi::passenger) else {
            return;
        };

        let mut satisfaction = None;
        if let Some(p) = self.world.passenger_mut(passenger_id) {
            p.drop_off();
            satisfaction = Some(p.satisfaction());
            let total = p.total_payment();
            if let Some(t) = self.world.taxi_mut(taxi_id) {
                t.set_pending_payment(total);
            }
        }

        let mut payout = None;
        if let Some(taxi) = self.world.taxi_mut(taxi_id) {
            let owed = taxi.passenger_money();
            if owed > 0.0 {
                taxi.record_trip(owed);
                payout = Some(owed);
            }
            taxi.clear_trip();
        }

        if let Some(owed) = payout {
            self.economy.credit(owed);
            self.economy.add_score(owed.round() as u64);
            self.stats.record_trip(owed);
            if let Some(s) = satisfaction {
                self.stats.record_rating(s);
            }
            self.log_event(format!("Trip completed! Earned ${owed:.2}"));
        }
        self.stats.trip_ended();
        self.world.remove_passenger(passenger_id);
    }

    // ── Event log ─────────────────────────────────────────────────────────

    pub(crate) fn log_event(&mut self, message: impl Into<String>) {
        let entry = self.log.push(self.clock.game_time, message);
        info!(seq = entry.seq, "{entry}");
        if let Some(tick) = &mut self.tick_events {
            tick.push(entry.clone());
        }
    }

    pub(crate) fn log_warning(&mut self, message: impl Into<String>) {
        let entry = self.log.push(self.clock.game_time, message);
        warn!(seq = entry.seq, "{entry}");
        if let Some(tick) = &mut self.tick_events {
            tick.push(entry.clone());
        }
    }

    // ── Fleet helpers ─────────────────────────────────────────────────────

    pub(crate) fn add_taxi_at_random(&mut self) -> TaxiId {
        let id = self.next_taxi_id;
        let position = self.world.random_position(&mut self.rng);
        self.world.add_taxi(Taxi::new(id, position));
        self.next_taxi_id = id.next();
        id
    }
}
