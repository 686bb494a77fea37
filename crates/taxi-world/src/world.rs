//! The `World` — stations, live taxis and passengers, ambient conditions.

use std::collections::HashSet;

use taxi_core::{PassengerId, Point, SimRng, StationId, TaxiId};
use taxi_demand::Passenger;
use taxi_fleet::{Route, Taxi};

use crate::ambient::{self, DayNight, Weather};
use crate::{InterpolatedRouter, RouteGenerator, Station, WorldError, WorldResult, default_stations};

/// Everything on the map.
///
/// Taxis and passengers live in insertion-ordered `Vec`s so every tick
/// visits them in the same order; lookups are linear, which is fine for
/// fleets of a few dozen.
///
/// `R` is the route generator (default [`InterpolatedRouter`]).
#[derive(Debug, Clone)]
pub struct World<R: RouteGenerator = InterpolatedRouter> {
    pub width:  f64,
    pub height: f64,

    stations:   Vec<Station>,
    taxis:      Vec<Taxi>,
    passengers: Vec<Passenger>,
    router:     R,

    pub weather:       Weather,
    pub day_night:     DayNight,
    pub traffic_level: f64,
}

impl World<InterpolatedRouter> {
    /// A `width` × `height` map with the default stations and router.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            stations:      default_stations(),
            taxis:         Vec::new(),
            passengers:    Vec::new(),
            router:        InterpolatedRouter::default(),
            weather:       Weather::Clear,
            day_night:     DayNight::Day,
            traffic_level: ambient::MIN_TRAFFIC,
        }
    }
}

impl Default for World<InterpolatedRouter> {
    fn default() -> Self {
        Self::new(800.0, 600.0)
    }
}

impl<R: RouteGenerator> World<R> {
    /// A map with a custom station registry and router.
    ///
    /// # Errors
    ///
    /// Fails if there are fewer than two stations (spawning needs distinct
    /// pickup and drop-off), if an id repeats, or if a station lies outside
    /// the map.
    pub fn with_stations(
        width:    f64,
        height:   f64,
        stations: Vec<Station>,
        router:   R,
    ) -> WorldResult<Self> {
        if stations.len() < 2 {
            return Err(WorldError::NotEnoughStations(stations.len()));
        }
        let mut seen = HashSet::new();
        for s in &stations {
            if !seen.insert(s.id) {
                return Err(WorldError::DuplicateStation(s.id));
            }
            let Point { x, y } = s.position;
            if !(0.0..=width).contains(&x) || !(0.0..=height).contains(&y) {
                return Err(WorldError::StationOffMap(s.id, width, height));
            }
        }
        Ok(Self {
            width,
            height,
            stations,
            taxis:         Vec::new(),
            passengers:    Vec::new(),
            router,
            weather:       Weather::Clear,
            day_night:     DayNight::Day,
            traffic_level: ambient::MIN_TRAFFIC,
        })
    }

    /// Empty the map of taxis and passengers and restore default ambient
    /// conditions.  Stations and router are kept.
    pub fn clear(&mut self) {
        self.taxis.clear();
        self.passengers.clear();
        self.weather = Weather::Clear;
        self.day_night = DayNight::Day;
        self.traffic_level = ambient::MIN_TRAFFIC;
    }

    // ── Stations ──────────────────────────────────────────────────────────

    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    pub fn station(&self, id: StationId) -> Option<&Station> {
        self.stations.iter().find(|s| s.id == id)
    }

    pub fn random_station(&self, rng: &mut SimRng) -> Option<&Station> {
        rng.choose(&self.stations)
    }

    /// Two distinct random stations: `(pickup, dropoff)`.
    ///
    /// Draws the pickup uniformly, then the drop-off uniformly from the
    /// remaining stations, so it never loops.
    pub fn random_station_pair(&self, rng: &mut SimRng) -> Option<(StationId, StationId)> {
        let n = self.stations.len();
        if n < 2 {
            return None;
        }
        let pickup = rng.gen_range(0..n);
        let mut dropoff = rng.gen_range(0..n - 1);
        if dropoff >= pickup {
            dropoff += 1;
        }
        Some((self.stations[pickup].id, self.stations[dropoff].id))
    }

    /// A uniformly random point on the map.
    pub fn random_position(&self, rng: &mut SimRng) -> Point {
        Point::new(rng.gen_range(0.0..self.width), rng.gen_range(0.0..self.height))
    }

    // ── Taxis ─────────────────────────────────────────────────────────────

    pub fn taxis(&self) -> &[Taxi] {
        &self.taxis
    }

    pub fn taxis_mut(&mut self) -> &mut [Taxi] {
        &mut self.taxis
    }

    pub fn taxi(&self, id: TaxiId) -> Option<&Taxi> {
        self.taxis.iter().find(|t| t.id == id)
    }

    pub fn taxi_mut(&mut self, id: TaxiId) -> Option<&mut Taxi> {
        self.taxis.iter_mut().find(|t| t.id == id)
    }

    pub fn add_taxi(&mut self, taxi: Taxi) {
        self.taxis.push(taxi);
    }

    /// Remove and return the taxi with `id`.
    pub fn remove_taxi(&mut self, id: TaxiId) -> Option<Taxi> {
        let idx = self.taxis.iter().position(|t| t.id == id)?;
        Some(self.taxis.remove(idx))
    }

    // ── Passengers ────────────────────────────────────────────────────────

    pub fn passengers(&self) -> &[Passenger] {
        &self.passengers
    }

    pub fn passengers_mut(&mut self) -> &mut [Passenger] {
        &mut self.passengers
    }

    pub fn passenger(&self, id: PassengerId) -> Option<&Passenger> {
        self.passengers.iter().find(|p| p.id == id)
    }

    pub fn passenger_mut(&mut self, id: PassengerId) -> Option<&mut Passenger> {
        self.passengers.iter_mut().find(|p| p.id == id)
    }

    pub fn add_passenger(&mut self, passenger: Passenger) {
        self.passengers.push(passenger);
    }

    /// Remove and return the passenger with `id`.
    pub fn remove_passenger(&mut self, id: PassengerId) -> Option<Passenger> {
        let idx = self.passengers.iter().position(|p| p.id == id)?;
        Some(self.passengers.remove(idx))
    }

    /// Passengers still waiting for a taxi.
    pub fn waiting_passengers(&self) -> impl Iterator<Item = &Passenger> {
        self.passengers.iter().filter(|p| p.is_waiting())
    }

    /// Taxis neither moving nor assigned.
    pub fn idle_taxis(&self) -> impl Iterator<Item = &Taxi> {
        self.taxis.iter().filter(|t| t.is_idle())
    }

    // ── Routes ────────────────────────────────────────────────────────────

    pub fn router(&self) -> &R {
        &self.router
    }

    pub fn generate_route(&self, start: Point, end: Point) -> Route {
        self.router.generate_route(start, end)
    }

    // ── Ambient ───────────────────────────────────────────────────────────

    pub fn set_weather(&mut self, weather: Weather) {
        self.weather = weather;
    }

    /// Derive day or night from the game clock.
    pub fn set_day_night(&mut self, game_time: f64) {
        self.day_night = DayNight::at(game_time);
    }

    /// Resample the traffic level.
    pub fn update_traffic(&mut self, rng: &mut SimRng) {
        self.traffic_level = ambient::sample_traffic(rng);
    }
}
