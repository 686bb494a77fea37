//! city — headless run of the taxi fleet game.
//!
//! Plays the classic six-station city with a simple autopilot in place of
//! a human: every waiting passenger gets the nearest idle taxi, taxis are
//! refuelled when low or stranded, and serviced once they wear down to
//! poor condition.  Ticks, fleet snapshots and the event log are written to
//! `output/city/`; the final status is printed as JSON.
//!
//! ```text
//! cargo run -p city                     # default balance
//! cargo run -p city -- my_config.json  # GameConfig overrides (missing keys use defaults)
//! cargo run -p city -- cfg.json foggy   # ... and the weather
//! RUST_LOG=debug cargo run -p city      # per-tick tracing
//! ```

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, warn};

use taxi_core::{GameConfig, PassengerId, TaxiId};
use taxi_fleet::Condition;
use taxi_output::{CsvWriter, OutputWriter, SimOutputObserver};
use taxi_sim::{Sim, SimObserver};
use taxi_world::{RouteGenerator, Weather};

// ── Constants ─────────────────────────────────────────────────────────────────

const FRAME_SECS:      f64 = 1.0 / 60.0;
const SIM_MINUTES:     u64 = 30;
/// Spawning samples the raw frame delta, so faster clocks skip spawns.
const TIME_SCALE:      f64 = 1.0;
const SNAPSHOT_EVERY:  u64 = 600;
/// Idle taxis below this much fuel are topped up before taking a fare.
const LOW_FUEL:        f64 = 30.0;
/// Keep this much cash in reserve when buying extra taxis.
const PURCHASE_BUFFER: f64 = 1_000.0;
const MAX_FLEET:       usize = 8;

// ── Observer wrapper to count rows ───────────────────────────────────────────

struct CountingObserver<W: OutputWriter> {
    inner:        SimOutputObserver<W>,
    events:       usize,
    summary_rows: usize,
}

impl<W: OutputWriter> CountingObserver<W> {
    fn new(inner: SimOutputObserver<W>) -> Self {
        Self { inner, events: 0, summary_rows: 0 }
    }
}

impl<W: OutputWriter> SimObserver for CountingObserver<W> {
    fn on_events(&mut self, entries: &[taxi_sim::EventLogEntry]) {
        self.events += entries.len();
        self.inner.on_events(entries);
    }

    fn on_tick_end(
        &mut self,
        status:     &taxi_sim::GameStatus,
        taxis:      &[taxi_fleet::Taxi],
        passengers: &[taxi_demand::Passenger],
    ) {
        self.summary_rows += 1;
        self.inner.on_tick_end(status, taxis, passengers);
    }

    fn on_run_end(&mut self, status: &taxi_sim::GameStatus) {
        self.inner.on_run_end(status);
    }
}

// ── Autopilot ─────────────────────────────────────────────────────────────────

/// Pair each waiting passenger, oldest first, with the nearest idle taxi
/// that has fuel for the trip.
fn dispatch<R: RouteGenerator>(sim: &mut Sim<R>) {
    let waiting: Vec<PassengerId> = sim.world().waiting_passengers().map(|p| p.id).collect();

    for pid in waiting {
        let Some(pickup) = sim.passenger(pid).map(|p| p.pickup) else {
            continue;
        };
        let nearest: Option<TaxiId> = sim
            .world()
            .idle_taxis()
            .filter(|t| t.fuel() >= LOW_FUEL)
            .min_by(|a, b| {
                a.position
                    .distance(pickup)
                    .total_cmp(&b.position.distance(pickup))
            })
            .map(|t| t.id);

        let Some(taxi) = nearest else {
            break;
        };
        if let Err(e) = sim.assign_taxi_to_passenger(taxi, pid) {
            warn!(%taxi, passenger = %pid, error = %e, "dispatch failed");
        }
    }
}

/// Refuel low or stranded taxis, service worn ones, and grow the fleet when
/// cash allows.
fn look_after_fleet<R: RouteGenerator>(sim: &mut Sim<R>, config: &GameConfig) {
    let stranded_or_low: Vec<TaxiId> = sim
        .world()
        .taxis()
        .iter()
        .filter(|t| {
            let stranded = t.has_passenger() && !t.is_moving() && t.fuel() <= 0.0;
            stranded || (t.is_idle() && t.fuel() < LOW_FUEL)
        })
        .map(|t| t.id)
        .collect();
    for id in stranded_or_low {
        if let Err(e) = sim.refuel_taxi(id, None) {
            warn!(taxi = %id, error = %e, "refuel refused");
        }
    }

    let worn: Vec<TaxiId> = sim
        .world()
        .idle_taxis()
        .filter(|t| t.condition() == Condition::Poor)
        .map(|t| t.id)
        .collect();
    for id in worn {
        if let Err(e) = sim.maintenance_taxi(id) {
            warn!(taxi = %id, error = %e, "maintenance refused");
        }
    }

    let fleet = sim.world().taxis().len();
    if fleet < MAX_FLEET && sim.economy().can_afford(config.taxi_price + PURCHASE_BUFFER) {
        if let Err(e) = sim.buy_taxi() {
            warn!(error = %e, "purchase refused");
        }
    }
}

fn load_config(path: Option<&str>) -> Result<GameConfig> {
    let Some(path) = path else {
        return Ok(GameConfig::default());
    };
    let text = std::fs::read_to_string(path).with_context(|| format!("reading {path}"))?;
    let config = serde_json::from_str(&text).with_context(|| format!("parsing {path}"))?;
    Ok(config)
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    // 1. Config.
    let mut args = std::env::args().skip(1);
    let config = load_config(args.next().as_deref())?;
    let weather: Weather = match args.next() {
        Some(name) => name.parse()?,
        None => Weather::Rainy,
    };
    info!(seed = config.seed, taxis = config.initial_taxis, "starting city run");

    // 2. Sim.
    let mut sim = Sim::new(config.clone())?;
    sim.set_time_scale(TIME_SCALE);
    sim.set_weather(weather);

    // 3. Output.
    let out_dir = Path::new("output/city");
    let writer = CsvWriter::new(out_dir)?;
    let mut obs = CountingObserver::new(SimOutputObserver::new(writer, SNAPSHOT_EVERY));

    // 4. Run: dispatch every frame, fleet care once per real second.
    let frames = (SIM_MINUTES as f64 * 60.0 / (FRAME_SECS * TIME_SCALE)).round() as u64;
    let t0 = Instant::now();
    for frame in 0..frames {
        dispatch(&mut sim);
        if frame % 60 == 0 {
            look_after_fleet(&mut sim, &config);
        }
        sim.step(FRAME_SECS, &mut obs);
    }
    obs.on_run_end(&sim.game_status());
    let elapsed = t0.elapsed();

    if let Some(e) = obs.inner.take_error() {
        warn!(error = %e, "output error");
    }

    // 5. Summary.
    info!(
        frames,
        events = obs.events,
        summary_rows = obs.summary_rows,
        secs = elapsed.as_secs_f64(),
        "run complete"
    );
    println!("{}", serde_json::to_string_pretty(&sim.game_status())?);

    Ok(())
}
