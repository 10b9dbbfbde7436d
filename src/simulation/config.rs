use serde::{Deserialize, Serialize};

/// Default grid depth, used when the configured depth is not positive.
pub const DEFAULT_DEPTH: i32 = 135;
/// Default grid width, used when the configured width is not positive.
pub const DEFAULT_WIDTH: i32 = 200;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    // Grid
    pub depth: i32,
    pub width: i32,

    // Cadence (in ticks)
    pub hour_interval: u64,
    pub weather_interval: u64,

    // Disease
    pub random_infection_chance: f64,
    pub spread_infection_chance: f64,
    pub disease_countdown: u32,

    // Reproducibility; None seeds from entropy
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
            width: DEFAULT_WIDTH,

            hour_interval: 5,
            weather_interval: 5,

            random_infection_chance: 0.005,
            spread_infection_chance: 0.01,
            disease_countdown: 5,

            seed: None,
        }
    }
}
