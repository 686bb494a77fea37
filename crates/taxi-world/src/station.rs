//! Fixed map stations.

use taxi_core::{Point, StationId};

/// A named pickup/drop-off location.  Immutable once the world is built.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Station {
    pub id:       StationId,
    pub name:     String,
    pub position: Point,
}

impl Station {
    pub fn new(id: u16, name: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            id:       StationId(id),
            name:     name.into(),
            position: Point::new(x, y),
        }
    }
}

/// The classic six-station city on an 800 × 600 map.
pub fn default_stations() -> Vec<Station> {
    vec![
        Station::new(1, "Central Station",   400.0, 300.0),
        Station::new(2, "Airport",           700.0, 150.0),
        Station::new(3, "Downtown",          100.0, 200.0),
        Station::new(4, "Suburbs",           200.0, 500.0),
        Station::new(5, "Business District", 550.0, 450.0),
        Station::new(6, "Harbor",             50.0, 550.0),
    ]
}
