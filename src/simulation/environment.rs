use rand::prelude::*;
use serde::{Deserialize, Serialize};

// ─── Clock ───

// Daytime is the open interval (DAY_START_HOUR, DAY_END_HOUR).
const DAY_START_HOUR: u32 = 6;
const DAY_END_HOUR: u32 = 18;

/// Simulation time: hour of day (0-23) and a running day count.
#[derive(Debug, Clone)]
pub struct Clock {
    hour: u32,
    day: u32,
}

impl Clock {
    /// Simulations start at sunrise.
    pub fn new() -> Self {
        Self { hour: 6, day: 0 }
    }

    pub fn advance_hour(&mut self) {
        self.hour = (self.hour + 1) % 24;
        if self.hour == 0 {
            self.day += 1;
        }
    }

    /// Strictly between sunrise and sunset; 6:00 and 18:00 themselves count
    /// as night.
    pub fn is_daytime(&self) -> bool {
        self.hour > DAY_START_HOUR && self.hour < DAY_END_HOUR
    }

    pub fn hour(&self) -> u32 {
        self.hour
    }

    pub fn day(&self) -> u32 {
        self.day
    }
}

// ─── Weather ───

/// Current weather: three independent conditions, none mutually exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Weather {
    pub raining: bool,
    pub foggy: bool,
    pub lightning: bool,
}

impl Weather {
    pub fn new() -> Self {
        Self {
            raining: false,
            foggy: false,
            lightning: false,
        }
    }

    /// Redraw each condition independently with probability 1/2.
    pub fn refresh(&mut self, rng: &mut impl Rng) {
        self.raining = rng.gen_bool(0.5);
        self.foggy = rng.gen_bool(0.5);
        self.lightning = rng.gen_bool(0.5);
    }

    /// Human-readable summary of the active conditions.
    pub fn status(&self) -> String {
        let mut conditions = Vec::new();
        if self.raining {
            conditions.push("rain");
        }
        if self.foggy {
            conditions.push("fog");
        }
        if self.lightning {
            conditions.push("lightning");
        }
        if conditions.is_empty() {
            "clear".to_string()
        } else {
            conditions.join(" ")
        }
    }
}

// ─── Disease ───

/// The disease circulating through the population. The countdown is shared by
/// every infected animal: each infected actor's tick decrements the same
/// counter, and any actor seeing it at zero dies.
#[derive(Debug, Clone)]
pub struct Disease {
    steps_remaining: u32,
    deaths: u32,
}

impl Disease {
    pub fn new(countdown: u32) -> Self {
        Self {
            steps_remaining: countdown,
            deaths: 0,
        }
    }

    /// Decrement the shared countdown, stopping at zero.
    pub fn tick(&mut self) {
        if self.steps_remaining > 0 {
            self.steps_remaining -= 1;
        }
    }

    pub fn steps_remaining(&self) -> u32 {
        self.steps_remaining
    }

    pub fn record_death(&mut self) {
        self.deaths += 1;
    }

    pub fn deaths(&self) -> u32 {
        self.deaths
    }
}

// ─── Environment ───

/// The shared environmental state threaded into every behavior call: the time
/// of day, the current weather, and the disease circulating the field.
pub struct Environment {
    pub clock: Clock,
    pub weather: Weather,
    pub disease: Disease,
}

impl Environment {
    pub fn new(disease_countdown: u32) -> Self {
        Self {
            clock: Clock::new(),
            weather: Weather::new(),
            disease: Disease::new(disease_countdown),
        }
    }
}
