//! Fluent builder for constructing a [`Sim`].

use taxi_core::GameConfig;
use taxi_world::{InterpolatedRouter, RouteGenerator, Station, World, default_stations};
use tracing::info;

use crate::{Sim, SimResult};

/// Fluent builder for [`Sim<R>`].
///
/// # Optional inputs (have defaults)
///
/// | Method          | Default                          |
/// |-----------------|----------------------------------|
/// | `.stations(v)`  | [`default_stations`] (six)       |
/// | `.router(r)`    | [`InterpolatedRouter::default`]  |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(GameConfig::default())
///     .stations(my_stations)
///     .build()?;
/// sim.run_ticks(600, 1.0 / 60.0, &mut NoopObserver);
/// ```
pub struct SimBuilder<R: RouteGenerator = InterpolatedRouter> {
    config:   GameConfig,
    stations: Option<Vec<Station>>,
    router:   R,
}

impl SimBuilder<InterpolatedRouter> {
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            stations: None,
            router:   InterpolatedRouter::default(),
        }
    }
}

impl<R: RouteGenerator> SimBuilder<R> {
    /// Replace the station registry.
    pub fn stations(mut self, stations: Vec<Station>) -> Self {
        self.stations = Some(stations);
        self
    }

    /// Use a different route generator.
    pub fn router<R2: RouteGenerator>(self, router: R2) -> SimBuilder<R2> {
        SimBuilder {
            config:   self.config,
            stations: self.stations,
            router,
        }
    }

    /// Validate the configuration and stations, then start a game with the
    /// configured starting fleet.
    pub fn build(self) -> SimResult<Sim<R>> {
        self.config.validate()?;

        let stations = self.stations.unwrap_or_else(default_stations);
        let world = World::with_stations(
            self.config.map_width,
            self.config.map_height,
            stations,
            self.router,
        )?;

        info!(
            seed = self.config.seed,
            stations = world.stations().len(),
            initial_taxis = self.config.initial_taxis,
            "building simulation"
        );

        let mut sim = Sim::from_parts(self.config, world);
        sim.init_game();
        Ok(sim)
    }
}

impl Sim<InterpolatedRouter> {
    /// A game on the default map with the default router.
    pub fn new(config: GameConfig) -> SimResult<Self> {
        SimBuilder::new(config).build()
    }
}
