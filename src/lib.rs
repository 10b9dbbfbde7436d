//! A discrete-time savanna ecosystem simulation on a bounded grid.
//!
//! Predators, prey, and plants occupy cells, age, eat, breed, spread disease,
//! and die, driven by a day/night cycle and weather. The [`Simulator`] owns
//! the whole world and advances it one tick at a time; rendering and the
//! decision to keep running live behind the [`SimulationObserver`] boundary.

pub mod simulation;

pub use simulation::{SimulationObserver, Simulator, StepSnapshot};
