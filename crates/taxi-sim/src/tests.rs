//! Unit tests for taxi-sim.

use taxi_core::{GameConfig, Point, StationId, TaxiId};
use taxi_demand::Passenger;
use taxi_fleet::{Route, Taxi};
use taxi_world::{RouteGenerator, Station};

use crate::{EventLogEntry, GameStatus, Sim, SimBuilder, SimObserver};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Drives straight at the end point.
struct Direct;

impl RouteGenerator for Direct {
    fn generate_route(&self, _start: Point, end: Point) -> Route {
        Route::new(vec![end])
    }
}

const WEST: StationId = StationId(1);
const EAST: StationId = StationId(2);

/// No starting fleet and no automatic spawns inside a short test.
fn quiet_config() -> GameConfig {
    GameConfig {
        initial_taxis: 0,
        spawn_interval_secs: 1_000.0,
        ..GameConfig::default()
    }
}

/// Two stations 50 units apart, straight-line routes.
fn quiet_sim(config: GameConfig) -> Sim<Direct> {
    SimBuilder::new(config)
        .stations(vec![
            Station::new(1, "West", 0.0, 0.0),
            Station::new(2, "East", 30.0, 40.0),
        ])
        .router(Direct)
        .build()
        .expect("valid sim")
}

/// Buy a taxi and park it at `at`.
fn taxi_at(sim: &mut Sim<Direct>, at: Point) -> TaxiId {
    let id = sim.buy_taxi().expect("affordable");
    sim.world.taxi_mut(id).expect("just bought").position = at;
    id
}

fn last_message<R: RouteGenerator>(sim: &Sim<R>) -> String {
    sim.event_log().last().map(|e| e.message.clone()).unwrap_or_default()
}

#[derive(Default)]
struct Recorder {
    ticks:    usize,
    messages: Vec<String>,
    last:     Option<GameStatus>,
}

impl SimObserver for Recorder {
    fn on_events(&mut self, entries: &[EventLogEntry]) {
        self.messages.extend(entries.iter().map(|e| e.message.clone()));
    }

    fn on_tick_end(&mut self, status: &GameStatus, _: &[Taxi], _: &[Passenger]) {
        self.ticks += 1;
        self.last = Some(status.clone());
    }
}

// ── Builder ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod builder {
    use super::*;
    use crate::SimError;

    #[test]
    fn default_game_starts_with_three_taxis() {
        let sim = Sim::new(GameConfig::default()).expect("default config is valid");
        assert_eq!(sim.world().taxis().len(), 3);
        assert_eq!(sim.world().stations().len(), 6);
        assert_eq!(sim.economy().money(), 5000.0);
        assert_eq!(sim.economy().level(), 1);
        assert_eq!(last_message(&sim), "Game started with 3 taxis");
        for t in sim.world().taxis() {
            assert!((0.0..800.0).contains(&t.position.x));
            assert!((0.0..600.0).contains(&t.position.y));
        }
    }

    #[test]
    fn taxi_ids_are_unique() {
        let sim = Sim::new(GameConfig::default()).expect("valid");
        let ids: Vec<TaxiId> = sim.world().taxis().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![TaxiId(0), TaxiId(1), TaxiId(2)]);
    }

    #[test]
    fn rejects_invalid_config() {
        let config = GameConfig { spawn_interval_secs: 0.0, ..GameConfig::default() };
        assert!(matches!(Sim::new(config), Err(SimError::Config(_))));
    }

    #[test]
    fn rejects_single_station() {
        let result = SimBuilder::new(quiet_config())
            .stations(vec![Station::new(1, "Only", 10.0, 10.0)])
            .build();
        assert!(matches!(result, Err(SimError::World(_))));
    }
}

// ── Dispatch ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod dispatch {
    use super::*;
    use crate::SimError;
    use taxi_core::PassengerId;

    #[test]
    fn assignment_links_taxi_and_passenger() {
        let mut sim = quiet_sim(quiet_config());
        let taxi = taxi_at(&mut sim, Point::ORIGIN);
        let pid = sim.spawn_passenger_between(WEST, EAST).expect("spawn");

        sim.assign_taxi_to_passenger(taxi, pid).expect("assign");

        let t = sim.taxi(taxi).expect("taxi");
        assert_eq!(t.passenger(), Some(pid));
        assert!(t.is_moving());
        assert_eq!(t.passenger_money(), 30.0);
        assert!(sim.passenger(pid).expect("passenger").is_traveling());
        assert_eq!(sim.stats().current_trips, 1);
        assert_eq!(last_message(&sim), "Taxi 0 assigned to passenger 0");
    }

    #[test]
    fn busy_taxi_is_refused() {
        let mut sim = quiet_sim(quiet_config());
        let taxi = taxi_at(&mut sim, Point::ORIGIN);
        let first = sim.spawn_passenger_between(WEST, EAST).expect("spawn");
        let second = sim.spawn_passenger_between(EAST, WEST).expect("spawn");
        sim.assign_taxi_to_passenger(taxi, first).expect("assign");

        let err = sim.assign_taxi_to_passenger(taxi, second).unwrap_err();
        assert!(matches!(err, SimError::TaxiBusy(id) if id == taxi));
        assert!(sim.passenger(second).expect("passenger").is_waiting());
        assert_eq!(sim.stats().current_trips, 1);
    }

    #[test]
    fn empty_tank_is_refused() {
        let mut sim = quiet_sim(quiet_config());
        let taxi = taxi_at(&mut sim, Point::ORIGIN);
        let pid = sim.spawn_passenger_between(WEST, EAST).expect("spawn");
        sim.world.taxi_mut(taxi).expect("taxi").consume_fuel(10_000.0);

        let err = sim.assign_taxi_to_passenger(taxi, pid).unwrap_err();
        assert!(matches!(err, SimError::OutOfFuel(id) if id == taxi));
        assert!(sim.taxi(taxi).expect("taxi").is_idle());
        assert!(sim.passenger(pid).expect("passenger").is_waiting());
        assert_eq!(sim.stats().current_trips, 0);

        sim.update(1.0);
        assert_eq!(sim.taxi(taxi).expect("taxi").position, Point::ORIGIN);
    }

    #[test]
    fn traveling_passenger_is_refused() {
        let mut config = quiet_config();
        config.starting_money = 10_000.0;
        let mut sim = quiet_sim(config);
        let a = taxi_at(&mut sim, Point::ORIGIN);
        let b = taxi_at(&mut sim, Point::ORIGIN);
        let pid = sim.spawn_passenger_between(WEST, EAST).expect("spawn");
        sim.assign_taxi_to_passenger(a, pid).expect("assign");

        let err = sim.assign_taxi_to_passenger(b, pid).unwrap_err();
        assert!(matches!(err, SimError::PassengerNotWaiting(_)));
        assert!(sim.taxi(b).expect("taxi").is_idle());
    }

    #[test]
    fn unknown_ids_are_refused() {
        let mut sim = quiet_sim(quiet_config());
        let taxi = taxi_at(&mut sim, Point::ORIGIN);
        let pid = sim.spawn_passenger_between(WEST, EAST).expect("spawn");

        assert!(matches!(
            sim.assign_taxi_to_passenger(TaxiId(99), pid),
            Err(SimError::TaxiNotFound(_))
        ));
        assert!(matches!(
            sim.assign_taxi_to_passenger(taxi, PassengerId(99)),
            Err(SimError::PassengerNotFound(_))
        ));
        assert!(sim.taxi(taxi).expect("taxi").is_idle());
    }
}

// ── Trips ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod trips {
    use super::*;

    #[test]
    fn end_to_end_trip_pays_fare_and_tip() {
        let mut sim = quiet_sim(quiet_config());
        let taxi = taxi_at(&mut sim, Point::ORIGIN);
        assert_eq!(sim.economy().money(), 2000.0);

        let pid = sim.spawn_passenger_between(WEST, EAST).expect("spawn");
        assert_eq!(sim.passenger(pid).expect("passenger").fare(), 30.0);
        sim.assign_taxi_to_passenger(taxi, pid).expect("assign");

        for _ in 0..100 {
            sim.update(1.0);
            if sim.stats().total_trips > 0 {
                break;
            }
        }

        // Satisfaction froze at 100 on pickup, so the 15% tip applies.
        assert!((sim.economy().money() - 2034.5).abs() < 1e-9);
        assert_eq!(sim.economy().score(), 35);

        let t = sim.taxi(taxi).expect("taxi");
        assert_eq!(t.trips_completed(), 1);
        assert!((t.earnings() - 34.5).abs() < 1e-9);
        assert!(t.is_idle());
        assert_eq!(t.passenger_money(), 0.0);
        assert_eq!(t.position, Point::new(30.0, 40.0));

        assert!(sim.passenger(pid).is_none(), "delivered passengers are removed");
        let stats = sim.stats();
        assert_eq!(stats.total_trips, 1);
        assert_eq!(stats.current_trips, 0);
        assert!((stats.avg_trip_earning - 34.5).abs() < 1e-9);
        assert_eq!(stats.average_rating, 5.0);
        assert!(stats.total_distance > 0.0 && stats.total_distance <= 50.0);
        assert!(
            sim.event_log().iter().any(|e| e.message == "Trip completed! Earned $34.50"),
            "completion is logged"
        );
    }

    #[test]
    fn running_dry_stops_once_and_refuel_resumes() {
        let mut sim = quiet_sim(quiet_config());
        let taxi = taxi_at(&mut sim, Point::ORIGIN);
        let pid = sim.spawn_passenger_between(WEST, EAST).expect("spawn");
        sim.assign_taxi_to_passenger(taxi, pid).expect("assign");
        sim.world.taxi_mut(taxi).expect("taxi").consume_fuel(10_000.0);

        sim.update(1.0);
        sim.update(1.0);
        sim.update(1.0);

        let t = sim.taxi(taxi).expect("taxi");
        assert!(!t.is_moving());
        assert!(t.has_passenger(), "the trip is kept");
        let warnings = sim
            .event_log()
            .iter()
            .filter(|e| e.message == "Taxi 0 out of fuel!")
            .count();
        assert_eq!(warnings, 1);

        sim.refuel_taxi(taxi, None).expect("refuel");
        assert!(sim.taxi(taxi).expect("taxi").is_moving());
        for _ in 0..100 {
            sim.update(1.0);
        }
        assert_eq!(sim.stats().total_trips, 1);
    }

    #[test]
    fn impatient_passenger_leaves_and_is_removed() {
        let mut sim = quiet_sim(quiet_config());
        let pid = sim.spawn_passenger_between(WEST, EAST).expect("spawn");

        sim.update(300.0);
        assert!(sim.passenger(pid).is_some(), "waiting exactly the maximum is fine");

        sim.update(0.5);
        assert!(sim.passenger(pid).is_none());
        assert_eq!(sim.stats().passengers_lost, 1);
        assert_eq!(last_message(&sim), "Passenger 0 left due to wait time");
    }
}

// ── Economy ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod economy {
    use super::*;
    use crate::{Economy, SimError};

    #[test]
    fn try_spend_is_all_or_nothing() {
        let mut e = Economy::new(100.0);
        assert!(e.try_spend(150.0).unwrap_err().is_insufficient_funds());
        assert_eq!(e.money(), 100.0);
        assert!(matches!(e.try_spend(-1.0), Err(SimError::InvalidAmount(_))));
        e.try_spend(100.0).expect("exact amount");
        assert_eq!(e.money(), 0.0);
    }

    #[test]
    fn buying_without_funds_changes_nothing() {
        let mut sim = quiet_sim(GameConfig { starting_money: 100.0, ..quiet_config() });
        let err = sim.buy_taxi().unwrap_err();
        assert!(err.is_insufficient_funds());
        assert_eq!(sim.economy().money(), 100.0);
        assert!(sim.world().taxis().is_empty());
        assert_eq!(last_message(&sim), "Insufficient funds to purchase taxi");
    }

    #[test]
    fn servicing_without_funds_changes_nothing() {
        let mut sim = quiet_sim(GameConfig { starting_money: 3010.0, ..quiet_config() });
        let taxi = taxi_at(&mut sim, Point::ORIGIN);
        sim.world.taxi_mut(taxi).expect("taxi").wear(30.0);

        assert!(sim.maintenance_taxi(taxi).unwrap_err().is_insufficient_funds());
        assert_eq!(sim.economy().money(), 10.0);
        assert_eq!(sim.taxi(taxi).expect("taxi").maintenance_level(), 70.0);

        // Refuelling 50 units costs 25.
        sim.world.taxi_mut(taxi).expect("taxi").consume_fuel(500.0);
        assert!(sim.refuel_taxi(taxi, None).unwrap_err().is_insufficient_funds());
        assert_eq!(sim.economy().money(), 10.0);
        assert_eq!(sim.taxi(taxi).expect("taxi").fuel(), 50.0);
    }

    #[test]
    fn maintenance_and_refuel_charge_their_price() {
        let mut sim = quiet_sim(quiet_config());
        let taxi = taxi_at(&mut sim, Point::ORIGIN);
        sim.world.taxi_mut(taxi).expect("taxi").wear(60.0);
        sim.world.taxi_mut(taxi).expect("taxi").consume_fuel(300.0);

        sim.maintenance_taxi(taxi).expect("service");
        assert_eq!(sim.economy().money(), 1950.0);
        assert_eq!(sim.taxi(taxi).expect("taxi").maintenance_level(), 100.0);

        sim.refuel_taxi(taxi, Some(20.0)).expect("refuel");
        assert_eq!(sim.economy().money(), 1940.0);
        assert_eq!(sim.taxi(taxi).expect("taxi").fuel(), 90.0);

        // Paid in full even though the tank only holds 10 more.
        sim.refuel_taxi(taxi, None).expect("refuel");
        assert_eq!(sim.economy().money(), 1915.0);
        assert_eq!(sim.taxi(taxi).expect("taxi").fuel(), 100.0);

        assert!(matches!(sim.refuel_taxi(taxi, Some(0.0)), Err(SimError::InvalidAmount(_))));
    }

    #[test]
    fn only_idle_taxis_can_be_sold() {
        let mut sim = quiet_sim(quiet_config());
        let taxi = taxi_at(&mut sim, Point::ORIGIN);
        let pid = sim.spawn_passenger_between(WEST, EAST).expect("spawn");
        sim.assign_taxi_to_passenger(taxi, pid).expect("assign");

        assert!(matches!(sim.sell_taxi(taxi), Err(SimError::TaxiBusy(_))));
        assert_eq!(sim.world().taxis().len(), 1);

        for _ in 0..100 {
            sim.update(1.0);
        }
        let before = sim.economy().money();
        sim.sell_taxi(taxi).expect("idle now");
        assert!(sim.world().taxis().is_empty());
        assert_eq!(sim.economy().money(), before + 2000.0);
        assert!(matches!(sim.sell_taxi(taxi), Err(SimError::TaxiNotFound(_))));
    }

    #[test]
    fn level_rises_once_per_tick() {
        let mut sim = quiet_sim(quiet_config());
        sim.economy.add_score(20_000);

        sim.update(0.1);
        assert_eq!(sim.economy().level(), 2);
        assert_eq!(last_message(&sim), "Level up! Now level 2");
        sim.update(0.1);
        assert_eq!(sim.economy().level(), 3);
        sim.update(0.1);
        sim.update(0.1);
        assert_eq!(sim.economy().level(), 4, "20000 is not above 4 * 5000");
    }

    #[test]
    fn level_is_capped() {
        let mut sim = quiet_sim(GameConfig { max_level: 2, ..quiet_config() });
        sim.economy.add_score(1_000_000);
        for _ in 0..5 {
            sim.update(0.1);
        }
        assert_eq!(sim.economy().level(), 2);
    }
}

// ── Clock ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod clock {
    use super::*;

    #[test]
    fn paused_ticks_change_nothing_but_still_notify() {
        let mut sim = quiet_sim(quiet_config());
        let taxi = taxi_at(&mut sim, Point::ORIGIN);
        let pid = sim.spawn_passenger_between(WEST, EAST).expect("spawn");
        sim.assign_taxi_to_passenger(taxi, pid).expect("assign");

        assert!(sim.pause_game());
        let before = sim.taxi(taxi).expect("taxi").clone();
        let mut rec = Recorder::default();
        sim.run_ticks(10, 1.0, &mut rec);

        assert_eq!(sim.clock().game_time, 0.0);
        assert_eq!(sim.taxi(taxi).expect("taxi"), &before);
        assert_eq!(rec.ticks, 10);
        assert!(rec.last.expect("status").is_paused);

        assert!(!sim.pause_game());
        sim.update(1.0);
        assert_eq!(sim.clock().game_time, 1.0);
    }

    #[test]
    fn time_scale_is_clamped_and_scales_the_clock() {
        let mut sim = quiet_sim(quiet_config());
        assert_eq!(sim.set_time_scale(10.0), 5.0);
        assert_eq!(last_message(&sim), "Game speed set to 5x");
        assert_eq!(sim.set_time_scale(0.0), 0.1);
        assert_eq!(sim.set_time_scale(2.0), 2.0);

        sim.update(1.5);
        assert_eq!(sim.clock().game_time, 3.0);
    }

    #[test]
    fn negative_delta_is_ignored() {
        let mut sim = quiet_sim(quiet_config());
        sim.update(2.0);
        sim.update(-5.0);
        sim.update(f64::NAN);
        assert_eq!(sim.clock().game_time, 2.0);
    }

    #[test]
    fn passengers_spawn_on_the_interval() {
        let config = GameConfig { spawn_interval_secs: 10.0, ..quiet_config() };
        let mut sim = quiet_sim(config);
        for _ in 0..9 {
            sim.update(1.0);
        }
        assert!(sim.world().passengers().is_empty());
        sim.update(1.0);
        assert_eq!(sim.world().passengers().len(), 1);
        assert_eq!(sim.stats().passengers_spawned, 1);

        let p = &sim.world().passengers()[0];
        assert_ne!(p.pickup_station, p.dropoff_station);
        assert!(last_message(&sim).starts_with("Passenger waiting at "));
    }

    #[test]
    fn spawning_between_one_station_is_refused() {
        let mut sim = quiet_sim(quiet_config());
        assert!(sim.spawn_passenger_between(WEST, WEST).is_err());
        assert!(sim.spawn_passenger_between(WEST, StationId(9)).is_err());
        assert!(sim.world().passengers().is_empty());
        assert_eq!(sim.stats().passengers_spawned, 0);
    }
}

// ── Event log ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod event_log {
    use super::*;
    use crate::EventLog;

    #[test]
    fn keeps_newest_entries_up_to_capacity() {
        let mut log = EventLog::new(3);
        for i in 0..5 {
            log.push(f64::from(i), format!("event {i}"));
        }
        assert_eq!(log.len(), 3);
        let messages: Vec<&str> = log.iter().map(|e| e.message.as_str()).collect();
        assert_eq!(messages, vec!["event 2", "event 3", "event 4"]);
        assert_eq!(log.next_seq(), 5);
        assert_eq!(log.since(4).count(), 1);
    }

    #[test]
    fn entries_render_with_game_time() {
        let mut log = EventLog::new(5);
        let entry = log.push(75.0, "Game paused");
        assert_eq!(entry.to_string(), "[01:15] Game paused");
    }

    #[test]
    fn sim_log_never_exceeds_fifty() {
        let mut sim = quiet_sim(quiet_config());
        for i in 0..80 {
            sim.set_time_scale(1.0 + f64::from(i % 3));
        }
        assert_eq!(sim.event_log().len(), 50);
        assert_eq!(sim.event_log().next_seq(), 81);
    }

    #[test]
    fn observer_sees_each_new_entry_once() {
        let mut sim = quiet_sim(GameConfig { spawn_interval_secs: 5.0, ..quiet_config() });
        let mut rec = Recorder::default();
        sim.run_ticks(20, 1.0, &mut rec);

        let spawned = rec
            .messages
            .iter()
            .filter(|m| m.starts_with("Passenger waiting at "))
            .count();
        assert_eq!(spawned, 4);
        assert_eq!(rec.ticks, 20);
        assert_eq!(rec.last.expect("status").passengers, 4);
    }

    #[test]
    fn observer_gets_entries_evicted_within_the_tick() {
        let mut sim = quiet_sim(GameConfig { event_log_capacity: 3, ..quiet_config() });
        for _ in 0..5 {
            sim.spawn_passenger_between(WEST, EAST).expect("spawn");
        }
        let mut rec = Recorder::default();
        sim.step(301.0, &mut rec);

        let left: Vec<&String> =
            rec.messages.iter().filter(|m| m.ends_with("left due to wait time")).collect();
        assert_eq!(left.len(), 5);
        assert_eq!(left[0], "Passenger 0 left due to wait time");
        assert_eq!(sim.event_log().len(), 3);
        assert!(!rec.messages.iter().any(|m| m.starts_with("Passenger waiting at ")));
    }
}

// ── Lifecycle ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod lifecycle {
    use super::*;
    use taxi_world::Weather;

    #[test]
    fn reset_restores_a_blank_game() {
        let mut sim = quiet_sim(quiet_config());
        taxi_at(&mut sim, Point::ORIGIN);
        sim.spawn_passenger_between(WEST, EAST).expect("spawn");
        sim.set_time_scale(3.0);
        sim.set_weather(Weather::Rainy);
        sim.update(4.0);

        sim.reset_game();

        let status = sim.game_status();
        assert_eq!(status.money, 5000.0);
        assert_eq!(status.score, 0);
        assert_eq!(status.level, 1);
        assert_eq!(status.game_time, "00:00");
        assert_eq!(status.time_scale, 1.0);
        assert_eq!(status.taxis, 0);
        assert_eq!(status.passengers, 0);
        assert_eq!(status.weather, Weather::Clear);
        assert_eq!(status.stats.passengers_spawned, 0);
        assert_eq!(sim.event_log().len(), 1);
        assert_eq!(last_message(&sim), "Game reset");
    }

    #[test]
    fn status_reports_counts_and_ambient() {
        let mut sim = quiet_sim(quiet_config());
        taxi_at(&mut sim, Point::ORIGIN);
        sim.spawn_passenger_between(WEST, EAST).expect("spawn");
        sim.update(65.0);

        let status = sim.game_status();
        assert_eq!(status.game_time, "01:05");
        assert_eq!(status.taxis, 1);
        assert_eq!(status.waiting_passengers, 1);
        assert!(!status.is_paused);
        assert!((1.0..=5.0).contains(&status.traffic_level));
        assert_eq!(status.traffic_level, (status.traffic_level * 10.0).round() / 10.0);
    }

    #[test]
    fn same_seed_same_history() {
        let run = || {
            let mut sim = Sim::new(GameConfig { seed: 7, ..GameConfig::default() }).expect("valid");
            for i in 0..600 {
                if i % 50 == 0 {
                    let waiting: Vec<_> = sim.world().waiting_passengers().map(|p| p.id).collect();
                    let idle: Vec<_> = sim.world().idle_taxis().map(|t| t.id).collect();
                    for (taxi, pid) in idle.into_iter().zip(waiting) {
                        sim.assign_taxi_to_passenger(taxi, pid).expect("assign");
                    }
                }
                sim.update(0.5);
            }
            (sim.game_status(), sim.world().taxis().to_vec())
        };
        assert_eq!(run(), run());
    }
}
