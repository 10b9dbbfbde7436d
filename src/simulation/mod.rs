pub mod behavior;
pub mod config;
pub mod entity;
pub mod environment;
pub mod field;
pub mod species;

use rand::prelude::*;
use serde::{Deserialize, Serialize};

use self::config::{SimulationConfig, DEFAULT_DEPTH, DEFAULT_WIDTH};
use self::entity::Entity;
use self::environment::{Clock, Disease, Environment, Weather};
use self::field::{Field, Location};
use self::species::{Kind, CREATION_ORDER};

// ─── Snapshot & Observer ───

/// Read-only view of the simulation emitted after every tick.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepSnapshot {
    pub tick: u64,
    pub hour: u32,
    pub day: u32,
    pub weather: Weather,
    pub disease_deaths: u32,
    pub depth: usize,
    pub width: usize,
    /// Row-major cell contents; `None` is an empty cell.
    pub cells: Vec<Option<Kind>>,
}

impl StepSnapshot {
    pub fn kind_at(&self, location: Location) -> Option<Kind> {
        self.cells
            .get(location.row * self.width + location.col)
            .copied()
            .flatten()
    }

    pub fn population_of(&self, kind: Kind) -> usize {
        self.cells.iter().filter(|cell| **cell == Some(kind)).count()
    }

    pub fn total_population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Number of distinct kinds currently on the field.
    pub fn kinds_present(&self) -> usize {
        Kind::ALL
            .iter()
            .filter(|kind| self.population_of(**kind) > 0)
            .count()
    }
}

/// The external view of the simulation: rendering, logging, and the decision
/// to keep running all live behind this boundary.
pub trait SimulationObserver {
    fn on_step(&mut self, snapshot: &StepSnapshot);

    /// Whether the run loop should continue. The conventional policy: more
    /// than one kind still present on the field.
    fn is_viable(&mut self, snapshot: &StepSnapshot) -> bool {
        snapshot.kinds_present() > 1
    }
}

// ─── Simulator ───

/// The simulation itself: the field, the environment, the random source, and
/// every live entity, advanced one tick at a time.
pub struct Simulator {
    tick: u64,
    config: SimulationConfig,
    entities: Vec<Entity>,
    field: Field,
    env: Environment,
    rng: StdRng,
}

impl Simulator {
    /// Build and populate a simulation. Non-positive grid dimensions are not
    /// an error: they fall back to the defaults with a logged warning, the
    /// only input validation the core performs.
    pub fn new(config: SimulationConfig) -> Self {
        let (depth, width) = if config.depth <= 0 || config.width <= 0 {
            log::warn!(
                "grid dimensions must be greater than zero (got {}x{}); using defaults {}x{}",
                config.depth,
                config.width,
                DEFAULT_DEPTH,
                DEFAULT_WIDTH
            );
            (DEFAULT_DEPTH as usize, DEFAULT_WIDTH as usize)
        } else {
            (config.depth as usize, config.width as usize)
        };

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let mut env = Environment::new(config.disease_countdown);
        env.weather.refresh(&mut rng);

        let mut simulator = Self {
            tick: 0,
            entities: Vec::new(),
            field: Field::new(depth, width),
            env,
            rng,
            config,
        };
        simulator.populate();
        simulator
    }

    /// A default-sized simulation with a fixed seed, for reproducible runs.
    pub fn with_seed(seed: u64) -> Self {
        Self::new(SimulationConfig {
            seed: Some(seed),
            ..SimulationConfig::default()
        })
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn population(&self) -> usize {
        self.entities.len()
    }

    /// Advance the whole simulation by one tick and return the new snapshot.
    pub fn step(&mut self) -> StepSnapshot {
        self.tick += 1;
        if self.tick % self.config.hour_interval == 0 {
            self.env.clock.advance_hour();
        }
        if self.tick % self.config.weather_interval == 0 {
            self.env.weather.refresh(&mut self.rng);
        }

        // Entities act in collection order; newborns land past `acting` and
        // first act next tick, but they occupy cells right away, so a late
        // actor already sees them.
        let acting = self.entities.len();
        for idx in 0..acting {
            if !self.entities[idx].alive {
                continue;
            }
            behavior::act(
                idx,
                &mut self.entities,
                &mut self.field,
                &mut self.env,
                &self.config,
                &mut self.rng,
            );
        }

        self.remove_dead();
        self.snapshot()
    }

    /// Drop dead entities and rebuild the cell-to-slot mapping, which their
    /// removal invalidates.
    fn remove_dead(&mut self) {
        self.entities.retain(|entity| entity.alive);
        self.field.clear_all();
        for (slot, entity) in self.entities.iter().enumerate() {
            self.field.place(slot, entity.location);
        }
    }

    /// Run up to `max_steps` ticks, reporting each snapshot to the observer
    /// and stopping early once the observer declares the population no longer
    /// viable. Returns the number of steps actually taken.
    pub fn run(&mut self, max_steps: u64, observer: &mut impl SimulationObserver) -> u64 {
        let mut snapshot = self.snapshot();
        let mut steps = 0;
        for _ in 0..max_steps {
            if !observer.is_viable(&snapshot) {
                break;
            }
            snapshot = self.step();
            observer.on_step(&snapshot);
            steps += 1;
        }
        steps
    }

    /// Return the simulation to a freshly populated state. The random stream
    /// continues, so consecutive resets produce different stockings.
    pub fn reset(&mut self) -> StepSnapshot {
        self.tick = 0;
        self.env.clock = Clock::new();
        self.env.disease = Disease::new(self.config.disease_countdown);
        self.env.weather.refresh(&mut self.rng);
        self.entities.clear();
        self.populate();
        self.snapshot()
    }

    /// Stock every cell: the first kind in `CREATION_ORDER` whose creation
    /// draw succeeds claims the cell; a cell failing every draw stays empty.
    fn populate(&mut self) {
        self.field.clear_all();
        for row in 0..self.field.depth() {
            for col in 0..self.field.width() {
                if let Some(kind) = draw_cell_kind(&mut self.rng) {
                    let location = Location::new(row, col);
                    let slot = self.entities.len();
                    let entity = Entity::populate(kind, location, &mut self.rng);
                    self.field.place(slot, location);
                    self.entities.push(entity);
                }
            }
        }
        log::debug!(
            "populated {}x{} field with {} entities",
            self.field.depth(),
            self.field.width(),
            self.entities.len()
        );
    }

    pub fn snapshot(&self) -> StepSnapshot {
        let mut cells = vec![None; self.field.depth() * self.field.width()];
        for entity in self.entities.iter().filter(|entity| entity.alive) {
            cells[entity.location.row * self.field.width() + entity.location.col] =
                Some(entity.kind);
        }
        StepSnapshot {
            tick: self.tick,
            hour: self.env.clock.hour(),
            day: self.env.clock.day(),
            weather: self.env.weather,
            disease_deaths: self.env.disease.deaths(),
            depth: self.field.depth(),
            width: self.field.width(),
            cells,
        }
    }
}

fn draw_cell_kind(rng: &mut impl Rng) -> Option<Kind> {
    for (kind, probability) in CREATION_ORDER {
        if rng.gen::<f64>() <= probability {
            return Some(kind);
        }
    }
    None
}
